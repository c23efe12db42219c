//! Eased horizontal motion for the carousel track
//!
//! The engine decides where the track goes and how long the move takes;
//! this module turns that into a per-frame offset.
//!
//! ## Atoms
//! - `easing` - Pure easing functions (cubic, quintic, exponential)
//! - `timing` - Progress and interpolation helpers
//!
//! ## Molecule
//! - `animation` - Offset animator combining the atoms

pub mod easing;
pub mod timing;

pub mod animation;

pub use animation::TrackAnimator;
pub use easing::{EasingType, EasingTypeExt};
