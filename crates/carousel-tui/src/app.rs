use std::sync::Arc;

use anyhow::Result;
use carousel_core::carousel::Settled;
use carousel_core::likes::LikeEvent;
use carousel_core::{AppConfig, Carousel, HoverMenu, LikeRegistry, MenuKind};
use ratatui::layout::{Position, Rect};
use tokio::sync::broadcast;
use tokio::time::Instant;
use tracing::debug;
use uuid::Uuid;

use crate::input::Action;
use crate::theme::Theme;
use crate::title::Title;
use crate::viewport::TrackViewport;

/// Clickable or hoverable region drawn in the last frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Prev,
    Next,
    Dot(usize),
    /// A card, by physical track slot
    Card(usize),
    /// Header label that opens a menu
    Trigger(MenuKind),
    /// An open menu popup
    Menu(MenuKind),
}

/// Application state
pub struct App {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// The carousel being browsed
    pub carousel: Carousel<Title, TrackViewport>,
    /// Likes shared by every copy of a title
    pub likes: LikeRegistry<Uuid>,
    /// Header hover menus
    pub menus: Vec<HoverMenu>,
    /// Focused card, relative to the left edge of the window
    pub focus: usize,
    pub theme: Theme,
    /// Whether the app should quit
    pub should_quit: bool,
    /// Status message
    pub status_message: Option<String>,
    /// Regions registered by widgets during the last draw
    pub hits: Vec<(Rect, Hit)>,
    /// Region under the pointer
    hover: Option<Hit>,
    like_events: broadcast::Receiver<LikeEvent<Uuid>>,
}

impl App {
    pub fn new(config: Arc<AppConfig>, titles: Vec<Title>, width: u16) -> Result<Self> {
        let mut carousel_config = config.carousel;
        carousel_config.slides_to_show = config.slides_to_show_for_width(width);

        let viewport = TrackViewport::new(config.ui.easing);
        let carousel = Carousel::new(titles, carousel_config, viewport)?;

        let likes = LikeRegistry::new();
        let like_events = likes.subscribe();
        let hide_delay = config.menu.hide_delay();

        Ok(Self {
            menus: vec![
                HoverMenu::new(MenuKind::Notifications, hide_delay),
                HoverMenu::new(MenuKind::Profile, hide_delay),
            ],
            config,
            carousel,
            likes,
            focus: 0,
            theme: Theme::default(),
            should_quit: false,
            status_message: None,
            hits: Vec::new(),
            hover: None,
            like_events,
        })
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Apply an input action
    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::Prev => {
                self.carousel.request_prev();
            }
            Action::Next => {
                self.carousel.request_next();
            }
            Action::Page(page) => {
                if page < self.carousel.pages().len() {
                    self.carousel.request_page_index(page);
                }
            }
            Action::FocusLeft => self.focus = self.focus.saturating_sub(1),
            Action::FocusRight => {
                let last = self.carousel.config().slides_to_show.saturating_sub(1);
                self.focus = (self.focus + 1).min(last);
            }
            Action::Like => self.like_slot(self.focused_slot()),
            Action::LikeSlot(slot) => self.like_slot(slot),
            Action::Hover { column, row } => self.hover(column, row, Instant::now()),
            Action::None => {}
        }
    }

    /// Physical track slot of the focused card
    pub fn focused_slot(&self) -> usize {
        self.carousel.physical_index() + self.focus
    }

    fn like_slot(&mut self, slot: usize) {
        if self.likes.like_slot(self.carousel.track(), slot).is_none() {
            debug!(slot, "Like on empty slot ignored");
        }
    }

    /// Re-derive the visible count for a new terminal width
    pub fn resize(&mut self, width: u16) -> Result<()> {
        let slides_to_show = self.config.slides_to_show_for_width(width);
        if self.carousel.resize(slides_to_show)? {
            self.focus = self.focus.min(slides_to_show.saturating_sub(1));
            debug!(width, slides_to_show, "Visible count changed");
        }
        Ok(())
    }

    /// Advance timers and animations; call once per frame
    pub fn tick(&mut self, now: Instant) -> Option<Settled> {
        let settled = self.carousel.poll(now);
        if let Some(settled) = settled {
            self.set_status(format!(
                " Page {}/{}",
                settled.status.active_page + 1,
                settled.status.page_count
            ));
        }

        self.carousel.viewport_mut().update(now.into_std());

        for menu in self.menus.iter_mut() {
            menu.poll(now);
        }

        loop {
            match self.like_events.try_recv() {
                Ok(event) => {
                    let name = self
                        .carousel
                        .items()
                        .iter()
                        .find(|t| t.id == event.id)
                        .map(|t| t.name.clone())
                        .unwrap_or_default();
                    self.set_status(format!(" Liked \"{}\" ({})", name, event.count));
                }
                Err(broadcast::error::TryRecvError::Lagged(skipped)) => {
                    debug!(skipped, "Like events lagged");
                }
                Err(_) => break,
            }
        }

        settled
    }

    /// Whether the next frame should come at animation rate
    pub fn needs_fast_update(&self) -> bool {
        self.carousel.is_transitioning()
            || self.carousel.viewport().is_animating()
            || self.menus.iter().any(|m| m.is_hiding())
    }

    /// Region under a cell; menus drawn on top win
    pub fn hit_test(&self, column: u16, row: u16) -> Option<Hit> {
        let position = Position::new(column, row);
        self.hits
            .iter()
            .rev()
            .find(|(rect, _)| rect.contains(position))
            .map(|(_, hit)| *hit)
    }

    fn hover(&mut self, column: u16, row: u16, now: Instant) {
        let hit = self
            .hit_test(column, row)
            .filter(|h| matches!(h, Hit::Trigger(_) | Hit::Menu(_)));
        if hit == self.hover {
            return;
        }

        if let Some(Hit::Trigger(kind) | Hit::Menu(kind)) = self.hover {
            if let Some(menu) = self.menu_mut(kind) {
                menu.leave(now);
            }
        }
        match hit {
            Some(Hit::Trigger(kind)) => {
                if let Some(menu) = self.menu_mut(kind) {
                    menu.enter_trigger();
                }
            }
            Some(Hit::Menu(kind)) => {
                if let Some(menu) = self.menu_mut(kind) {
                    menu.enter_menu();
                }
            }
            _ => {}
        }
        self.hover = hit;
    }

    fn menu_mut(&mut self, kind: MenuKind) -> Option<&mut HoverMenu> {
        self.menus.iter_mut().find(|m| m.kind() == kind)
    }
}
