//! The carousel engine: owns the track, the current offset and the
//! transition state, and drives a host [`Viewport`].

use serde::Serialize;
use tokio::time::Instant;
use tracing::debug;

use super::index::{Direction, IndexTranslator};
use super::layout::{offset_percent, width_percent};
use super::pagination;
use super::track::{Slide, Track};
use super::transition::{
    destination, in_clone_block, Request, TimerToken, TransitionDriver, TransitionState,
};
use super::viewport::{Motion, Viewport};
use crate::config::CarouselConfig;
use crate::Result;

/// Derived, host-facing view of the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Status {
    pub logical_index: usize,
    pub physical_index: usize,
    pub max_logical_index: usize,
    pub active_page: usize,
    pub page_count: usize,
    pub at_start: bool,
    pub at_end: bool,
    pub transitioning: bool,
}

/// Reported once per completed transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Settled {
    pub status: Status,
    /// Whether loop correction re-centered the window out of a clone block
    pub corrected: bool,
}

pub type SettledHook = Box<dyn FnMut(&Settled) + Send>;

pub struct Carousel<T, V> {
    items: Vec<T>,
    config: CarouselConfig,
    translator: IndexTranslator,
    track: Track<T>,
    pages: Vec<usize>,
    viewport: V,
    physical_index: usize,
    driver: TransitionDriver,
    settled_hooks: Vec<SettledHook>,
}

impl<T: std::fmt::Debug, V: std::fmt::Debug> std::fmt::Debug for Carousel<T, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Carousel")
            .field("config", &self.config)
            .field("physical_index", &self.physical_index)
            .field("driver", &self.driver)
            .field("pages", &self.pages)
            .field("viewport", &self.viewport)
            .finish_non_exhaustive()
    }
}

impl<T: Clone, V: Viewport> Carousel<T, V> {
    /// Mount `items` and position the window on the first real item.
    ///
    /// Fails only when `config` has a zero visible count or step.
    pub fn new(items: Vec<T>, config: CarouselConfig, viewport: V) -> Result<Self> {
        config.validate()?;

        let translator = IndexTranslator::new(items.len(), config.slides_to_show, config.infinite);
        let track = Track::build(&items, translator.padding());
        let pages = pagination::pages(translator.max_logical(), config.slides_to_scroll);

        let mut carousel = Self {
            items,
            config,
            translator,
            track,
            pages,
            viewport,
            physical_index: translator.to_physical(0),
            driver: TransitionDriver::default(),
            settled_hooks: Vec::new(),
        };
        carousel.apply_layout();

        debug!(
            items = carousel.items.len(),
            track = carousel.track.len(),
            slides_to_show = config.slides_to_show,
            slides_to_scroll = config.slides_to_scroll,
            infinite = carousel.translator.is_infinite(),
            "Carousel mounted"
        );

        Ok(carousel)
    }

    /// Step back by `slides_to_scroll`; false if dropped or a no-op
    pub fn request_prev(&mut self) -> bool {
        self.request_step(Direction::Prev)
    }

    /// Step forward by `slides_to_scroll`; false if dropped or a no-op
    pub fn request_next(&mut self) -> bool {
        self.request_step(Direction::Next)
    }

    /// Jump so that `logical_index` is at the left edge, clamped into range
    pub fn request_page(&mut self, logical_index: usize) -> bool {
        let target = self.translator.clamp_logical(logical_index as isize);
        self.start(target, Request::Jump)
    }

    /// Jump to the start of the `page`-th pagination dot
    pub fn request_page_index(&mut self, page: usize) -> bool {
        let start = self
            .pages
            .get(page)
            .or_else(|| self.pages.last())
            .copied()
            .unwrap_or(0);
        self.request_page(start)
    }

    fn request_step(&mut self, direction: Direction) -> bool {
        if self.driver.is_animating() {
            debug!(?direction, "Dropping navigation request: transition in flight");
            return false;
        }
        let current = self.logical_index();
        let target = self
            .translator
            .step_target(current, self.config.slides_to_scroll, direction);
        self.start(target, Request::Step(direction))
    }

    fn start(&mut self, target: usize, request: Request) -> bool {
        if self.driver.is_animating() {
            debug!(?request, "Dropping navigation request: transition in flight");
            return false;
        }

        let current = self.logical_index();
        let wraps = self.translator.is_wrap(current, target, request.direction());
        if target == current && !wraps {
            debug!(?request, target, "Navigation is a no-op");
            return false;
        }

        let dest = destination(&self.translator, self.physical_index, current, target, request);
        let duration = self.config.animation_duration();
        if self.driver.begin(target, Instant::now(), duration).is_none() {
            return false;
        }

        debug!(
            ?request,
            from = current,
            target,
            physical_from = self.physical_index,
            physical_to = dest,
            "Transition started"
        );

        self.physical_index = dest;
        self.viewport.apply_transform(
            offset_percent(dest, self.config.slides_to_show),
            Motion::Animated(duration),
        );
        true
    }

    /// Settle the in-flight transition if its deadline has passed
    pub fn poll(&mut self, now: Instant) -> Option<Settled> {
        let (token, deadline) = self.driver.pending()?;
        if now < deadline {
            return None;
        }
        self.fire(token)
    }

    /// Settle the transition armed with `token`.
    ///
    /// Stale tokens (cancelled or already settled) are ignored.
    pub fn fire(&mut self, token: TimerToken) -> Option<Settled> {
        let target = self.driver.fire(token)?;
        let target = self.translator.clamp_logical(target as isize);

        let out_of_range = in_clone_block(&self.translator, self.physical_index, self.track.len())
            || self.physical_index > self.max_physical_index();
        if out_of_range {
            debug!(
                physical = self.physical_index,
                target, "Loop correction: re-centering out of clone block"
            );
            self.physical_index = self.translator.to_physical(target);
            self.viewport.apply_transform(
                offset_percent(self.physical_index, self.config.slides_to_show),
                Motion::Instant,
            );
        }

        let settled = Settled {
            status: self.status(),
            corrected: out_of_range,
        };
        debug!(
            logical = settled.status.logical_index,
            page = settled.status.active_page,
            corrected = settled.corrected,
            "Transition settled"
        );

        for hook in self.settled_hooks.iter_mut() {
            hook(&settled);
        }
        Some(settled)
    }

    /// Re-derive the layout for a new visible count and re-apply it instantly.
    ///
    /// Navigation progress is kept: the window is re-seeded at the current
    /// position, or at the target of an in-flight transition. The settle timer
    /// is not cancelled.
    pub fn resize(&mut self, slides_to_show: usize) -> Result<bool> {
        let changed = slides_to_show != self.config.slides_to_show;

        if changed {
            let config = CarouselConfig {
                slides_to_show,
                ..self.config
            };
            config.validate()?;

            let anchor = match self.driver.state() {
                TransitionState::Animating { target, .. } => target,
                TransitionState::Idle => self.logical_index(),
            };

            self.config = config;
            self.translator =
                IndexTranslator::new(self.items.len(), slides_to_show, config.infinite);
            self.track = Track::build(&self.items, self.translator.padding());
            self.pages = pagination::pages(self.translator.max_logical(), config.slides_to_scroll);

            let anchor = self.translator.clamp_logical(anchor as isize);
            self.physical_index = self.translator.to_physical(anchor);

            debug!(
                slides_to_show,
                anchor,
                transitioning = self.driver.is_animating(),
                "Carousel re-laid out"
            );
        }

        self.apply_layout();
        Ok(changed)
    }

    fn apply_layout(&mut self) {
        let width = width_percent(self.config.slides_to_show);
        for slot in 0..self.track.len() {
            self.viewport.set_item_width(slot, width);
        }
        self.viewport.apply_transform(
            offset_percent(self.physical_index, self.config.slides_to_show),
            Motion::Instant,
        );
    }

    /// Register a hook fired after every settle, including loop correction
    pub fn on_settled<F>(&mut self, hook: F)
    where
        F: FnMut(&Settled) + Send + 'static,
    {
        self.settled_hooks.push(Box::new(hook));
    }

    /// Cancel any armed settle timer and drop hooks
    pub fn teardown(&mut self) {
        if let Some(token) = self.driver.cancel() {
            debug!(?token, "Cancelled pending settle on teardown");
        }
        self.settled_hooks.clear();
    }
}

impl<T, V> Carousel<T, V> {
    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn track(&self) -> &Track<T> {
        &self.track
    }

    pub fn viewport(&self) -> &V {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut V {
        &mut self.viewport
    }

    /// Slots currently in the visible window
    pub fn visible(&self) -> &[Slide<T>] {
        self.track
            .window(self.physical_index, self.config.slides_to_show)
    }

    #[inline]
    pub fn physical_index(&self) -> usize {
        self.physical_index
    }

    /// Left-edge position among the real items.
    ///
    /// While a wrapping transition is in flight the window sits in a clone
    /// block; the nearest real position is reported.
    #[inline]
    pub fn logical_index(&self) -> usize {
        self.translator
            .clamp_logical(self.translator.to_logical(self.physical_index))
    }

    #[inline]
    pub fn max_logical_index(&self) -> usize {
        self.translator.max_logical()
    }

    fn max_physical_index(&self) -> usize {
        self.track.len().saturating_sub(self.config.slides_to_show)
    }

    /// Wraparound in effect (configured and content exceeds the window)
    #[inline]
    pub fn is_infinite(&self) -> bool {
        self.translator.is_infinite()
    }

    #[inline]
    pub fn is_transitioning(&self) -> bool {
        self.driver.is_animating()
    }

    /// Deadline of the in-flight transition
    pub fn settle_deadline(&self) -> Option<Instant> {
        self.driver.pending().map(|(_, deadline)| deadline)
    }

    /// Armed settle timer
    pub fn pending_timer(&self) -> Option<(TimerToken, Instant)> {
        self.driver.pending()
    }

    pub fn pages(&self) -> &[usize] {
        &self.pages
    }

    pub fn active_page_index(&self) -> usize {
        pagination::active_page(&self.pages, self.logical_index())
    }

    /// At the first position; never true while wraparound is in effect
    pub fn is_at_start(&self) -> bool {
        !self.is_infinite() && self.logical_index() == 0
    }

    /// At the last position; never true while wraparound is in effect
    pub fn is_at_end(&self) -> bool {
        !self.is_infinite() && self.logical_index() >= self.max_logical_index()
    }

    pub fn status(&self) -> Status {
        Status {
            logical_index: self.logical_index(),
            physical_index: self.physical_index,
            max_logical_index: self.max_logical_index(),
            active_page: self.active_page_index(),
            page_count: self.pages.len(),
            at_start: self.is_at_start(),
            at_end: self.is_at_end(),
            transitioning: self.is_transitioning(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use super::*;

    #[derive(Debug, Default)]
    struct RecordingViewport {
        transforms: Vec<(f64, Motion)>,
        widths: Vec<(usize, f64)>,
    }

    impl Viewport for RecordingViewport {
        fn apply_transform(&mut self, offset_percent: f64, motion: Motion) {
            self.transforms.push((offset_percent, motion));
        }

        fn set_item_width(&mut self, slot: usize, width_percent: f64) {
            self.widths.push((slot, width_percent));
        }
    }

    fn config(show: usize, scroll: usize, infinite: bool) -> CarouselConfig {
        CarouselConfig {
            slides_to_show: show,
            slides_to_scroll: scroll,
            infinite,
            animation_duration_ms: 500,
        }
    }

    fn carousel(
        total: u32,
        show: usize,
        scroll: usize,
        infinite: bool,
    ) -> Carousel<u32, RecordingViewport> {
        Carousel::new(
            (0..total).collect(),
            config(show, scroll, infinite),
            RecordingViewport::default(),
        )
        .unwrap()
    }

    fn settle(c: &mut Carousel<u32, RecordingViewport>) -> Option<Settled> {
        let deadline = c.settle_deadline()?;
        c.poll(deadline)
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let result = Carousel::new(vec![1, 2, 3], config(0, 1, true), RecordingViewport::default());
        assert!(matches!(result, Err(crate::Error::InvalidConfig(_))));

        let result = Carousel::new(vec![1, 2, 3], config(1, 0, true), RecordingViewport::default());
        assert!(matches!(result, Err(crate::Error::InvalidConfig(_))));
    }

    #[test]
    fn test_initial_layout() {
        let c = carousel(10, 6, 6, true);
        assert_eq!(c.track().len(), 22);
        assert_eq!(c.physical_index(), 6);
        assert_eq!(c.logical_index(), 0);
        assert_eq!(c.viewport().widths.len(), 22);
        assert!(c.viewport().widths.iter().all(|(_, w)| (w - 100.0 / 6.0).abs() < 1e-9));

        let (offset, motion) = c.viewport().transforms[0];
        assert!((offset - 100.0).abs() < 1e-9);
        assert_eq!(motion, Motion::Instant);
    }

    #[test]
    fn test_infinite_scenario_clamp_then_wrap() {
        let mut c = carousel(10, 6, 6, true);

        assert!(c.request_next());
        assert!(c.is_transitioning());
        let settled = settle(&mut c).unwrap();
        assert_eq!(settled.status.logical_index, 4);
        assert!(!settled.corrected);

        assert!(c.request_next());
        // moving on into the trailing clones, not back across the track
        assert_eq!(c.physical_index(), 16);
        let settled = settle(&mut c).unwrap();
        assert_eq!(settled.status.logical_index, 0);
        assert_eq!(c.physical_index(), 6);
        assert!(settled.corrected);

        let (_, motion) = *c.viewport().transforms.last().unwrap();
        assert_eq!(motion, Motion::Instant);
    }

    #[test]
    fn test_prev_at_start_wraps_to_end() {
        let mut c = carousel(20, 6, 6, true);
        assert!(c.request_prev());
        assert_eq!(c.physical_index(), 0);
        let settled = settle(&mut c).unwrap();
        assert!(settled.corrected);
        assert_eq!(c.logical_index(), 14);
        assert_eq!(c.physical_index(), 20);
        assert_eq!(c.active_page_index(), 3);
    }

    #[test]
    fn test_finite_next_at_end_is_noop() {
        let mut c = carousel(10, 6, 6, false);
        assert!(c.is_at_start());
        assert!(c.request_next());
        settle(&mut c).unwrap();
        assert_eq!(c.logical_index(), 4);
        assert!(c.is_at_end());

        assert!(!c.request_next());
        assert!(!c.is_transitioning());
        assert_eq!(c.logical_index(), 4);
    }

    #[test]
    fn test_finite_stays_in_range() {
        let mut c = carousel(23, 5, 3, false);
        let steps = [
            Direction::Next,
            Direction::Next,
            Direction::Prev,
            Direction::Next,
            Direction::Next,
            Direction::Next,
            Direction::Next,
            Direction::Next,
            Direction::Next,
            Direction::Prev,
            Direction::Prev,
            Direction::Prev,
            Direction::Prev,
            Direction::Prev,
            Direction::Prev,
            Direction::Prev,
        ];
        for direction in steps {
            match direction {
                Direction::Next => c.request_next(),
                Direction::Prev => c.request_prev(),
            };
            settle(&mut c);
            let logical = c.logical_index();
            assert!(logical <= c.max_logical_index());
            assert_eq!(c.is_at_start(), logical == 0);
            assert_eq!(c.is_at_end(), logical == c.max_logical_index());
        }
        assert!(c.is_at_start());
    }

    #[test]
    fn test_overlapping_request_is_dropped() {
        let mut a = carousel(30, 4, 4, true);
        let mut b = carousel(30, 4, 4, true);

        assert!(a.request_next());
        assert!(!a.request_next());
        assert!(!a.request_prev());
        assert!(!a.request_page(12));
        settle(&mut a);

        assert!(b.request_next());
        settle(&mut b);

        assert_eq!(a.logical_index(), b.logical_index());
        assert_eq!(a.physical_index(), b.physical_index());
    }

    #[test]
    fn test_poll_before_deadline_does_nothing() {
        let mut c = carousel(10, 3, 3, true);
        c.request_next();
        let deadline = c.settle_deadline().unwrap();
        assert!(c.poll(deadline - Duration::from_millis(1)).is_none());
        assert!(c.is_transitioning());
        assert!(c.poll(deadline).is_some());
        assert!(!c.is_transitioning());
    }

    #[test]
    fn test_request_page_clamps() {
        let mut c = carousel(20, 6, 6, true);
        assert!(c.request_page(99));
        settle(&mut c);
        assert_eq!(c.logical_index(), 14);
        assert_eq!(c.active_page_index(), 3);

        assert!(c.request_page_index(1));
        settle(&mut c);
        assert_eq!(c.logical_index(), 6);

        // already on page 1
        assert!(!c.request_page_index(1));
    }

    #[test]
    fn test_jump_from_last_page_to_first_wraps_forward() {
        let mut c = carousel(10, 6, 6, true);
        c.request_next();
        settle(&mut c);
        assert_eq!(c.physical_index(), 10);

        assert!(c.request_page_index(0));
        assert_eq!(c.physical_index(), 16);
        let (offset, motion) = *c.viewport().transforms.last().unwrap();
        assert!((offset - offset_percent(16, 6)).abs() < 1e-9);
        assert_eq!(motion, Motion::Animated(Duration::from_millis(500)));

        let settled = settle(&mut c).unwrap();
        assert!(settled.corrected);
        assert_eq!(settled.status.logical_index, 0);
        assert_eq!(settled.status.physical_index, 6);
    }

    #[test]
    fn test_jump_backwards_in_finite_mode_is_direct() {
        let mut c = carousel(10, 6, 6, false);
        c.request_next();
        settle(&mut c);
        assert!(c.request_page_index(0));
        assert_eq!(c.physical_index(), 0);
        let settled = settle(&mut c).unwrap();
        assert!(!settled.corrected);
    }

    #[test]
    fn test_degenerate_content() {
        let mut c = carousel(4, 6, 6, true);
        assert!(!c.is_infinite());
        assert_eq!(c.track().len(), 4);
        assert_eq!(c.max_logical_index(), 0);
        assert_eq!(c.pages(), &[0]);
        assert!(c.is_at_start());
        assert!(c.is_at_end());
        assert!(!c.request_next());
        assert!(!c.request_prev());
    }

    #[test]
    fn test_empty_items() {
        let mut c = carousel(0, 3, 3, true);
        assert!(c.track().is_empty());
        assert_eq!(c.logical_index(), 0);
        assert!(!c.request_next());
        assert!(c.visible().is_empty());
    }

    #[test]
    fn test_settled_hooks_fire_once_per_transition() {
        let mut c = carousel(10, 6, 6, true);
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        c.on_settled(move |s| sink.lock().unwrap().push(s.status.logical_index));

        c.request_next();
        settle(&mut c);
        c.request_next();
        settle(&mut c);
        assert!(settle(&mut c).is_none());

        assert_eq!(*seen.lock().unwrap(), vec![4, 0]);
    }

    #[test]
    fn test_resize_keeps_position() {
        let mut c = carousel(20, 6, 3, true);
        c.request_next();
        settle(&mut c);
        assert_eq!(c.logical_index(), 3);

        assert!(c.resize(4).unwrap());
        assert_eq!(c.logical_index(), 3);
        assert_eq!(c.track().len(), 28);
        assert_eq!(c.physical_index(), 7);
        assert_eq!(c.max_logical_index(), 16);
        assert_eq!(c.pages(), &[0, 3, 6, 9, 12, 15, 16]);

        let (offset, motion) = *c.viewport().transforms.last().unwrap();
        assert_eq!(motion, Motion::Instant);
        assert!((offset - 175.0).abs() < 1e-9);

        assert!(!c.resize(4).unwrap());
        assert!(matches!(c.resize(0), Err(crate::Error::InvalidConfig(_))));
    }

    #[test]
    fn test_resize_mid_animation_settles_at_original_deadline() {
        let mut c = carousel(10, 6, 6, true);
        c.request_next();
        settle(&mut c);
        c.request_next();
        let deadline = c.settle_deadline().unwrap();

        c.resize(3).unwrap();
        assert!(c.is_transitioning());
        assert_eq!(c.settle_deadline(), Some(deadline));

        let settled = c.poll(deadline).unwrap();
        assert!(!c.is_transitioning());
        assert_eq!(settled.status.logical_index, 0);
        assert_eq!(c.physical_index(), 3);
    }

    #[test]
    fn test_resize_into_degenerate_clamps() {
        let mut c = carousel(10, 3, 3, true);
        c.request_page(7);
        settle(&mut c);
        c.resize(12).unwrap();
        assert!(!c.is_infinite());
        assert_eq!(c.logical_index(), 0);
        assert_eq!(c.physical_index(), 0);
    }

    #[test]
    fn test_teardown_cancels_timer() {
        let mut c = carousel(10, 6, 6, true);
        c.request_next();
        let (token, deadline) = c.pending_timer().unwrap();
        c.teardown();
        assert!(!c.is_transitioning());
        assert!(c.fire(token).is_none());
        assert!(c.poll(deadline).is_none());
    }

    #[test]
    fn test_visible_window_is_real_at_rest() {
        let mut c = carousel(10, 4, 4, true);
        for _ in 0..7 {
            c.request_next();
            settle(&mut c);
            assert!(c.visible().iter().all(|s| !s.is_clone));
            assert_eq!(c.visible().len(), 4);
        }
    }
}
