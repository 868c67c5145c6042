//! # Tray Inserts
//!
//! Parametric trays whose outline follows the stepped end of the container
//! and whose interior is carved to fit known pieces.
//!
//! ## Architecture
//!
//! ```text
//! catalog end steps
//!       ↓
//! Profile ──ProfileAdjuster──→ Profile        (per tray, never shared)
//!       ↓
//! StepProfileBuilder → outer Solid
//!       ↓
//! carvers: pockets, notches, labels, fillets → one Solid per tray
//! ```
//!
//! ## Example
//!
//! ```rust
//! use config::TrayCatalog;
//! use tray_geometry::ScadTextProvider;
//! use tray_inserts::{Tray, TrayContext};
//!
//! let catalog = TrayCatalog::default();
//! let ctx = TrayContext::new(&catalog, &ScadTextProvider);
//! let quest = Tray::Quest.build(&ctx).unwrap();
//! assert_eq!(quest.bounding_box().unwrap().max.z, 21.5);
//! ```

pub mod builder;
pub mod carve;
pub mod error;
pub mod profile;
pub mod tray;

pub use builder::{BuildMode, Segment, StepProfileBuilder};
pub use carve::{distribute, CavityKind, CavityShape, CavitySpec, LabelSpec, TrayContext, TrayOptions};
pub use error::{InsertError, InsertResult, TrayError};
pub use profile::{Profile, ProfileAdjuster, Step};
pub use tray::{assembly, build_all, Tray};
