use std::time::Duration;

/// How the host should reach a new track offset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    /// Animate over the given duration
    Animated(Duration),
    /// Jump with no visible transition
    Instant,
}

impl Motion {
    #[inline]
    pub fn is_animated(&self) -> bool {
        matches!(self, Motion::Animated(_))
    }
}

/// Host-side surface the engine drives.
///
/// The engine owns the offset; the host only renders what it is told.
pub trait Viewport {
    /// Move the track so that it is shifted left by `offset_percent` of the
    /// visible window
    fn apply_transform(&mut self, offset_percent: f64, motion: Motion);

    /// Size one mounted slot
    fn set_item_width(&mut self, slot: usize, width_percent: f64);
}

impl<V: Viewport + ?Sized> Viewport for Box<V> {
    fn apply_transform(&mut self, offset_percent: f64, motion: Motion) {
        (**self).apply_transform(offset_percent, motion);
    }

    fn set_item_width(&mut self, slot: usize, width_percent: f64) {
        (**self).set_item_width(slot, width_percent);
    }
}

/// Viewport that renders nothing, for headless hosts
#[derive(Debug, Clone, Copy, Default)]
pub struct HeadlessViewport;

impl Viewport for HeadlessViewport {
    fn apply_transform(&mut self, _offset_percent: f64, _motion: Motion) {}

    fn set_item_width(&mut self, _slot: usize, _width_percent: f64) {}
}
