use super::*;

#[test]
fn default_catalog_is_valid() {
    assert_eq!(TrayCatalog::default().validate(), Ok(()));
}

#[test]
fn tokens_height_fills_remaining_space() {
    let catalog = TrayCatalog::default();
    assert_eq!(catalog.tokens_height(), 64.0 - 34.0 - 1.0);
}

#[test]
fn rejects_inverted_clearances() {
    let catalog = TrayCatalog {
        raised_divider_clearance: 9.0,
        ..TrayCatalog::default()
    };
    assert!(matches!(
        catalog.validate(),
        Err(ConfigError::ClearanceOrder { .. })
    ));
}

#[test]
fn clearances_change_independently() {
    let catalog = TrayCatalog {
        divider_clearance: 10.0,
        ..TrayCatalog::default()
    };
    assert_eq!(catalog.raised_divider_clearance, 3.0);
    assert_eq!(catalog.validate(), Ok(()));
}

#[test]
fn rejects_short_profile() {
    let catalog = TrayCatalog {
        end_steps: vec![[0.0, 0.0]],
        ..TrayCatalog::default()
    };
    assert_eq!(catalog.validate(), Err(ConfigError::ShortProfile(1)));
}

#[test]
fn rejects_zero_width_piece() {
    let catalog = TrayCatalog {
        dungeon: Piece::new(0.0, 18.0, 41.0),
        ..TrayCatalog::default()
    };
    assert_eq!(
        catalog.validate(),
        Err(ConfigError::InvalidPiece { field: "dungeon" })
    );
}

#[test]
fn rejects_negative_virtue_stack() {
    let catalog = TrayCatalog {
        virtue_stacks: vec![9.0, -1.0],
        ..TrayCatalog::default()
    };
    assert!(matches!(
        catalog.validate(),
        Err(ConfigError::NonPositive {
            field: "virtue_stacks",
            ..
        })
    ));
}

#[test]
fn rejects_tiny_resolution() {
    let catalog = TrayCatalog {
        segments: 2,
        ..TrayCatalog::default()
    };
    assert_eq!(catalog.validate(), Err(ConfigError::InvalidSegments(2)));
}

#[test]
fn rejects_blank_font() {
    let catalog = TrayCatalog {
        label_font: "  ".to_string(),
        ..TrayCatalog::default()
    };
    assert_eq!(catalog.validate(), Err(ConfigError::MissingFont));
}

#[test]
fn error_messages_name_the_field() {
    let err = ConfigError::NonPositive {
        field: "floor",
        value: -1.0,
    };
    assert_eq!(err.to_string(), "floor must be positive: -1");
}
