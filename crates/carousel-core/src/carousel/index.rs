//! Logical <-> physical index mapping and navigation targets.
//!
//! Logical indices count real items from 0. Physical indices address the
//! mounted track, which in wraparound mode starts with a clone block of
//! `slides_to_show` slots.

/// Navigation direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}

/// Index math for one track layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexTranslator {
    slides_to_show: usize,
    /// Wraparound in effect (configured and content exceeds the window)
    infinite: bool,
    max_logical: usize,
}

impl IndexTranslator {
    /// Build the translator for `total` real items.
    ///
    /// Wraparound is only effective when there is more content than fits in
    /// the window; otherwise the track carries no clones.
    pub fn new(total: usize, slides_to_show: usize, infinite: bool) -> Self {
        Self {
            slides_to_show,
            infinite: infinite && total > slides_to_show,
            max_logical: total.saturating_sub(slides_to_show),
        }
    }

    #[inline]
    pub fn slides_to_show(&self) -> usize {
        self.slides_to_show
    }

    /// Whether the track is padded with clones
    #[inline]
    pub fn is_infinite(&self) -> bool {
        self.infinite
    }

    #[inline]
    pub fn max_logical(&self) -> usize {
        self.max_logical
    }

    /// Clone-padding in front of the real items
    #[inline]
    pub fn padding(&self) -> usize {
        if self.infinite {
            self.slides_to_show
        } else {
            0
        }
    }

    #[inline]
    pub fn to_physical(&self, logical: usize) -> usize {
        logical + self.padding()
    }

    /// Signed logical index; negative while the window sits in the leading
    /// clone block
    #[inline]
    pub fn to_logical(&self, physical: usize) -> isize {
        physical as isize - self.padding() as isize
    }

    #[inline]
    pub fn clamp_logical(&self, logical: isize) -> usize {
        logical.clamp(0, self.max_logical as isize) as usize
    }

    /// Target for a prev/next step from `current`.
    ///
    /// Overshooting clamps to the nearest end, except that a step taken while
    /// already at that end jumps to the opposite end when wraparound is on.
    pub fn step_target(&self, current: usize, step: usize, direction: Direction) -> usize {
        match direction {
            Direction::Next => {
                let target = current + step;
                if target > self.max_logical {
                    if self.infinite && current == self.max_logical {
                        0
                    } else {
                        self.max_logical
                    }
                } else {
                    target
                }
            }
            Direction::Prev => {
                if current < step {
                    if self.infinite && current == 0 {
                        self.max_logical
                    } else {
                        0
                    }
                } else {
                    current - step
                }
            }
        }
    }

    /// Whether a step from `current` to `target` crosses the loop seam
    #[inline]
    pub fn is_wrap(&self, current: usize, target: usize, direction: Direction) -> bool {
        self.infinite
            && match direction {
                Direction::Next => current == self.max_logical && target == 0,
                Direction::Prev => current == 0 && target == self.max_logical,
            }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_infinite() {
        let t = IndexTranslator::new(20, 6, true);
        for x in 0..=t.max_logical() {
            assert_eq!(t.to_logical(t.to_physical(x)), x as isize);
        }
    }

    #[test]
    fn test_finite_has_no_padding() {
        let t = IndexTranslator::new(20, 6, false);
        assert_eq!(t.padding(), 0);
        assert_eq!(t.to_physical(3), 3);
        assert_eq!(t.to_logical(3), 3);
    }

    #[test]
    fn test_degenerate_content_disables_wraparound() {
        let t = IndexTranslator::new(4, 6, true);
        assert!(!t.is_infinite());
        assert_eq!(t.max_logical(), 0);

        let t = IndexTranslator::new(6, 6, true);
        assert!(!t.is_infinite());
        assert_eq!(t.max_logical(), 0);
    }

    #[test]
    fn test_clamp_logical() {
        let t = IndexTranslator::new(10, 6, true);
        assert_eq!(t.clamp_logical(-3), 0);
        assert_eq!(t.clamp_logical(2), 2);
        assert_eq!(t.clamp_logical(99), 4);
    }

    #[test]
    fn test_next_target() {
        let t = IndexTranslator::new(10, 6, true);
        assert_eq!(t.step_target(0, 6, Direction::Next), 4);
        assert_eq!(t.step_target(4, 6, Direction::Next), 0);

        let t = IndexTranslator::new(10, 6, false);
        assert_eq!(t.step_target(0, 6, Direction::Next), 4);
        assert_eq!(t.step_target(4, 6, Direction::Next), 4);
    }

    #[test]
    fn test_prev_target() {
        let t = IndexTranslator::new(20, 6, true);
        assert_eq!(t.step_target(14, 6, Direction::Prev), 8);
        assert_eq!(t.step_target(3, 6, Direction::Prev), 0);
        assert_eq!(t.step_target(0, 6, Direction::Prev), 14);

        let t = IndexTranslator::new(20, 6, false);
        assert_eq!(t.step_target(0, 6, Direction::Prev), 0);
    }

    #[test]
    fn test_is_wrap() {
        let t = IndexTranslator::new(10, 6, true);
        assert!(t.is_wrap(4, 0, Direction::Next));
        assert!(t.is_wrap(0, 4, Direction::Prev));
        assert!(!t.is_wrap(0, 4, Direction::Next));

        let t = IndexTranslator::new(10, 6, false);
        assert!(!t.is_wrap(4, 0, Direction::Next));
    }
}
