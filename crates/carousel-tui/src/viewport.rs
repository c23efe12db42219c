use std::time::{Duration, Instant};

use carousel_core::carousel::{Motion, Viewport};
use carousel_core::EasingType;

use crate::motion::TrackAnimator;

/// Terminal-side track: remembers slot width and eases the offset
#[derive(Debug, Clone)]
pub struct TrackViewport {
    animator: TrackAnimator,
    /// Slot width, percent of the window
    item_width: f64,
}

impl TrackViewport {
    pub fn new(easing: EasingType) -> Self {
        Self {
            animator: TrackAnimator::new(easing),
            item_width: 100.0,
        }
    }

    #[inline]
    pub fn item_width(&self) -> f64 {
        self.item_width
    }

    /// Offset to draw this frame, percent of the window
    #[inline]
    pub fn offset(&self) -> f64 {
        self.animator.current()
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.animator.is_animating()
    }

    /// Advance the eased offset; call once per frame
    pub fn update(&mut self, now: Instant) -> f64 {
        self.animator.update(now)
    }
}

impl Viewport for TrackViewport {
    fn apply_transform(&mut self, offset_percent: f64, motion: Motion) {
        match motion {
            Motion::Animated(duration) => {
                self.animator
                    .animate_to(offset_percent, duration, Instant::now())
            }
            Motion::Instant => self.animator.set_offset(offset_percent),
        }
    }

    fn set_item_width(&mut self, _slot: usize, width_percent: f64) {
        self.item_width = width_percent;
    }
}

/// Frame period while the track is moving
pub fn frame_duration(animation_fps: u32) -> Duration {
    if animation_fps == 0 {
        Duration::from_millis(16) // ~60fps fallback
    } else {
        Duration::from_millis(1000 / animation_fps as u64)
    }
}
