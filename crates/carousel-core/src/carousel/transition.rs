//! Transition state machine: `Idle` or `Animating` toward a settle deadline.

use std::time::Duration;

use tokio::time::Instant;

use super::index::{Direction, IndexTranslator};

/// Identifies one armed settle timer; a wakeup carrying a stale token is ignored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerToken(u64);

/// What kind of navigation started a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Request {
    Step(Direction),
    /// Jump to a page start (logical index)
    Jump,
}

impl Request {
    /// Direction used for wrap detection; jumps travel forward
    #[inline]
    pub fn direction(&self) -> Direction {
        match self {
            Request::Step(direction) => *direction,
            Request::Jump => Direction::Next,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionState {
    Idle,
    Animating {
        token: TimerToken,
        deadline: Instant,
        /// Logical index the transition settles on
        target: usize,
    },
}

impl TransitionState {
    #[inline]
    pub fn is_animating(&self) -> bool {
        matches!(self, TransitionState::Animating { .. })
    }
}

/// Owns the transition state and hands out timer tokens
#[derive(Debug)]
pub struct TransitionDriver {
    state: TransitionState,
    next_token: u64,
}

impl Default for TransitionDriver {
    fn default() -> Self {
        Self {
            state: TransitionState::Idle,
            next_token: 0,
        }
    }
}

impl TransitionDriver {
    #[inline]
    pub fn state(&self) -> TransitionState {
        self.state
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.state.is_animating()
    }

    /// Enter `Animating`; returns `None` while a transition is already in flight
    pub fn begin(&mut self, target: usize, now: Instant, duration: Duration) -> Option<TimerToken> {
        if self.is_animating() {
            return None;
        }
        let token = TimerToken(self.next_token);
        self.next_token = self.next_token.wrapping_add(1);
        self.state = TransitionState::Animating {
            token,
            deadline: now + duration,
            target,
        };
        Some(token)
    }

    /// Armed timer, if any
    pub fn pending(&self) -> Option<(TimerToken, Instant)> {
        match self.state {
            TransitionState::Animating {
                token, deadline, ..
            } => Some((token, deadline)),
            TransitionState::Idle => None,
        }
    }

    /// Return to `Idle` if `token` is the armed timer; yields the settle target
    pub fn fire(&mut self, token: TimerToken) -> Option<usize> {
        match self.state {
            TransitionState::Animating {
                token: armed,
                target,
                ..
            } if armed == token => {
                self.state = TransitionState::Idle;
                Some(target)
            }
            _ => None,
        }
    }

    /// Drop the armed timer without settling
    pub fn cancel(&mut self) -> Option<TimerToken> {
        let pending = self.pending().map(|(token, _)| token);
        self.state = TransitionState::Idle;
        pending
    }
}

/// Physical index the viewport animates toward.
///
/// Wrapping moves keep going in their direction, into the clone block,
/// instead of sweeping back across the whole track. A jump from the last
/// page to the first wraps forward like a next step.
pub fn destination(
    translator: &IndexTranslator,
    current_physical: usize,
    current_logical: usize,
    target: usize,
    request: Request,
) -> usize {
    let direction = request.direction();
    if translator.is_wrap(current_logical, target, direction) {
        let show = translator.slides_to_show();
        return match direction {
            Direction::Next => current_physical + show,
            Direction::Prev => current_physical.saturating_sub(show),
        };
    }
    translator.to_physical(target)
}

/// Whether a settled physical index sits inside a clone block
pub fn in_clone_block(translator: &IndexTranslator, physical: usize, track_len: usize) -> bool {
    if !translator.is_infinite() {
        return false;
    }
    let show = translator.slides_to_show();
    physical < show || physical + show + 1 > track_len
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_rejects_overlap() {
        let mut driver = TransitionDriver::default();
        let now = Instant::now();
        let token = driver.begin(3, now, Duration::from_millis(500));
        assert!(token.is_some());
        assert!(driver.begin(5, now, Duration::from_millis(500)).is_none());

        let (armed, deadline) = driver.pending().unwrap();
        assert_eq!(Some(armed), token);
        assert_eq!(deadline, now + Duration::from_millis(500));
    }

    #[test]
    fn test_stale_token_is_ignored() {
        let mut driver = TransitionDriver::default();
        let now = Instant::now();
        let first = driver.begin(1, now, Duration::ZERO).unwrap();
        assert_eq!(driver.fire(first), Some(1));

        let second = driver.begin(2, now, Duration::ZERO).unwrap();
        assert_ne!(first, second);
        assert_eq!(driver.fire(first), None);
        assert!(driver.is_animating());
        assert_eq!(driver.fire(second), Some(2));
        assert!(!driver.is_animating());
    }

    #[test]
    fn test_cancel() {
        let mut driver = TransitionDriver::default();
        let token = driver.begin(1, Instant::now(), Duration::from_secs(1)).unwrap();
        assert_eq!(driver.cancel(), Some(token));
        assert_eq!(driver.fire(token), None);
        assert_eq!(driver.cancel(), None);
    }

    #[test]
    fn test_destination_wraps_forward_into_clones() {
        // 10 items, 6 visible: track = 6 + 10 + 6
        let t = IndexTranslator::new(10, 6, true);
        let physical = t.to_physical(4);
        let dest = destination(&t, physical, 4, 0, Request::Step(Direction::Next));
        assert_eq!(dest, 16);
        assert!(in_clone_block(&t, dest, 22));

        let dest = destination(&t, t.to_physical(0), 0, 4, Request::Step(Direction::Prev));
        assert_eq!(dest, 0);
        assert!(in_clone_block(&t, dest, 22));
    }

    #[test]
    fn test_jump_to_first_page_wraps_forward() {
        let t = IndexTranslator::new(10, 6, true);
        let dest = destination(&t, t.to_physical(4), 4, 0, Request::Jump);
        assert_eq!(dest, 16);
        assert!(in_clone_block(&t, dest, 22));

        // jumps that do not cross the seam go straight to the page
        assert_eq!(destination(&t, t.to_physical(0), 0, 4, Request::Jump), 10);
        assert_eq!(destination(&t, t.to_physical(2), 2, 0, Request::Jump), 6);
    }

    #[test]
    fn test_destination_plain_and_jump() {
        let t = IndexTranslator::new(10, 6, true);
        assert_eq!(destination(&t, 6, 0, 4, Request::Step(Direction::Next)), 10);
        // jumps never take the wrap path
        assert_eq!(destination(&t, 10, 4, 0, Request::Jump), 6);
        assert!(!in_clone_block(&t, 6, 22));
        assert!(!in_clone_block(&t, 10, 22));
    }
}
