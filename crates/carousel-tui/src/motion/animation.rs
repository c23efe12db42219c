//! Track offset animator
//!
//! Combines easing and timing to turn "move to offset X over D" into the
//! offset to draw on each frame.

use std::time::{Duration, Instant};

use super::easing::{EasingType, EasingTypeExt};
use super::timing::{is_complete, lerp, progress};

#[derive(Debug, Clone)]
struct ActiveAnimation {
    start: Instant,
    from: f64,
    to: f64,
    duration: Duration,
}

/// Interpolates the track offset (percent of the visible window)
#[derive(Debug, Clone)]
pub struct TrackAnimator {
    animation: Option<ActiveAnimation>,
    easing: EasingType,
    /// Offset as of the last update
    current: f64,
}

impl Default for TrackAnimator {
    fn default() -> Self {
        Self::new(EasingType::default())
    }
}

impl TrackAnimator {
    pub fn new(easing: EasingType) -> Self {
        Self {
            animation: None,
            easing,
            current: 0.0,
        }
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    #[inline]
    pub fn current(&self) -> f64 {
        self.current
    }

    /// Final offset of the running animation, or the current one
    pub fn target(&self) -> f64 {
        self.animation
            .as_ref()
            .map(|a| a.to)
            .unwrap_or(self.current)
    }

    /// Jump to `offset`, abandoning any running animation
    pub fn set_offset(&mut self, offset: f64) {
        self.animation = None;
        self.current = offset;
    }

    /// Animate from the currently drawn offset to `offset`
    pub fn animate_to(&mut self, offset: f64, duration: Duration, now: Instant) {
        if duration.is_zero() || (offset - self.current).abs() < f64::EPSILON {
            self.set_offset(offset);
            return;
        }
        self.animation = Some(ActiveAnimation {
            start: now,
            from: self.current,
            to: offset,
            duration,
        });
    }

    /// Advance to `now` and return the offset to draw
    pub fn update(&mut self, now: Instant) -> f64 {
        if let Some(ref anim) = self.animation {
            if is_complete(anim.start, anim.duration, now) {
                self.current = anim.to;
                self.animation = None;
            } else {
                let t = progress(anim.start, anim.duration, now);
                self.current = lerp(anim.from, anim.to, self.easing.apply(t));
            }
        }
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_offset_is_immediate() {
        let mut animator = TrackAnimator::default();
        animator.set_offset(150.0);
        assert!(!animator.is_animating());
        assert!((animator.current() - 150.0).abs() < 1e-9);
    }

    #[test]
    fn test_linear_animation() {
        let mut animator = TrackAnimator::new(EasingType::Linear);
        let start = Instant::now();
        animator.set_offset(100.0);
        animator.animate_to(200.0, Duration::from_millis(500), start);
        assert!(animator.is_animating());
        assert!((animator.target() - 200.0).abs() < 1e-9);

        let mid = animator.update(start + Duration::from_millis(250));
        assert!((mid - 150.0).abs() < 1e-6);

        let end = animator.update(start + Duration::from_millis(500));
        assert!((end - 200.0).abs() < 1e-9);
        assert!(!animator.is_animating());
    }

    #[test]
    fn test_zero_duration_jumps() {
        let mut animator = TrackAnimator::default();
        animator.animate_to(50.0, Duration::ZERO, Instant::now());
        assert!(!animator.is_animating());
        assert!((animator.current() - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_instant_move_cancels_animation() {
        let mut animator = TrackAnimator::default();
        let start = Instant::now();
        animator.animate_to(300.0, Duration::from_millis(500), start);
        animator.set_offset(100.0);
        assert!(!animator.is_animating());
        assert!((animator.update(start + Duration::from_secs(1)) - 100.0).abs() < 1e-9);
    }
}
