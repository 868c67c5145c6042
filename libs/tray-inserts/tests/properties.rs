//! Property tests for profiles, the builder and cavity distribution.

use proptest::prelude::*;
use tray_inserts::{distribute, Profile, ProfileAdjuster, StepProfileBuilder};

/// Profiles with strictly increasing extents.
fn staircase() -> impl Strategy<Value = Vec<[f64; 2]>> {
    prop::collection::vec((5.0f64..80.0, 5.0f64..60.0), 1..7).prop_map(|segments| {
        let mut extent = 0.0;
        let mut pairs = vec![[0.0, 0.0]];
        for (offset, delta) in segments {
            extent += delta;
            pairs.push([offset, extent]);
        }
        pairs
    })
}

proptest! {
    #[test]
    fn adjuster_shifts_only_steps_past_threshold(pairs in staircase(), threshold in 0.0f64..40.0) {
        let profile = Profile::from_pairs(&pairs).unwrap();
        let adjusted = ProfileAdjuster::new(threshold).apply(&profile);
        prop_assert_eq!(adjusted.len(), profile.len());
        for (before, after) in profile.steps().iter().zip(adjusted.steps()) {
            prop_assert_eq!(before.extent, after.extent);
            if before.offset > threshold {
                prop_assert_eq!(after.offset, before.offset - threshold);
            } else {
                prop_assert_eq!(after.offset, before.offset);
            }
        }
    }

    #[test]
    fn adjusted_profiles_stay_valid(pairs in staircase()) {
        let profile = Profile::from_pairs(&pairs).unwrap();
        for threshold in [3.0, 8.0] {
            let adjusted = ProfileAdjuster::new(threshold).apply(&profile);
            prop_assert!(Profile::new(adjusted.steps().iter().copied()).is_ok());
        }
    }

    #[test]
    fn segment_footprints_tile_profile(pairs in staircase()) {
        let profile = Profile::from_pairs(&pairs).unwrap();
        let segments = StepProfileBuilder::new(&profile, 10.0, 2.0).segments().unwrap();
        prop_assert_eq!(segments.len(), profile.len() - 1);
        let total: f64 = segments.iter().map(|s| s.footprint_area).sum();
        prop_assert!((total - profile.area()).abs() < 1e-6);
        for pair in segments.windows(2) {
            prop_assert!((pair[1].origin.y - (pair[0].origin.y + pair[0].delta)).abs() < 1e-9);
        }
    }

    #[test]
    fn distribution_is_even_and_flush(
        widths in prop::collection::vec(1.0f64..10.0, 2..8),
        slack in 0.0f64..30.0,
    ) {
        let span = widths.iter().sum::<f64>() + slack;
        let starts = distribute(span, &widths).unwrap();
        let n = widths.len();
        prop_assert!((starts[n - 1] + widths[n - 1] - span).abs() < 1e-9);
        let gap = slack / (n - 1) as f64;
        for i in 1..n {
            let measured = starts[i] - (starts[i - 1] + widths[i - 1]);
            prop_assert!((measured - gap).abs() < 1e-9);
        }
    }
}
