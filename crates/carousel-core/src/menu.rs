//! Hover menu with a delayed hide.
//!
//! Entering the trigger or the menu shows it and cancels any pending hide;
//! leaving either schedules a hide after the configured delay, so the
//! pointer can travel from the trigger into the menu without it closing.

use std::time::Duration;

use tokio::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuKind {
    Notifications,
    Profile,
}

impl MenuKind {
    pub fn title(&self) -> &'static str {
        match self {
            MenuKind::Notifications => "Notifications",
            MenuKind::Profile => "Profile",
        }
    }

    pub fn entries(&self) -> &'static [&'static str] {
        match self {
            MenuKind::Notifications => &[
                "New content has been added.",
                "Something you were watching has been updated.",
            ],
            MenuKind::Profile => &["Account settings", "Manage profiles", "Sign out"],
        }
    }
}

#[derive(Debug, Clone)]
pub struct HoverMenu {
    kind: MenuKind,
    visible: bool,
    hide_at: Option<Instant>,
    hide_delay: Duration,
}

impl HoverMenu {
    pub fn new(kind: MenuKind, hide_delay: Duration) -> Self {
        Self {
            kind,
            visible: false,
            hide_at: None,
            hide_delay,
        }
    }

    #[inline]
    pub fn kind(&self) -> MenuKind {
        self.kind
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether a hide is scheduled
    #[inline]
    pub fn is_hiding(&self) -> bool {
        self.hide_at.is_some()
    }

    /// Pointer entered the trigger
    pub fn enter_trigger(&mut self) {
        self.hide_at = None;
        self.visible = true;
    }

    /// Pointer entered the menu itself; keeps it open without showing it
    pub fn enter_menu(&mut self) {
        self.hide_at = None;
    }

    /// Pointer left the trigger or the menu
    pub fn leave(&mut self, now: Instant) {
        if self.visible {
            self.hide_at = Some(now + self.hide_delay);
        }
    }

    /// Hide if the delay has elapsed; returns true when the menu just closed
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.hide_at {
            Some(at) if now >= at => {
                self.hide_at = None;
                self.visible = false;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn menu() -> HoverMenu {
        HoverMenu::new(MenuKind::Profile, Duration::from_millis(200))
    }

    #[test]
    fn test_hides_after_delay() {
        let mut m = menu();
        let now = Instant::now();
        m.enter_trigger();
        assert!(m.is_visible());

        m.leave(now);
        assert!(m.is_hiding());
        assert!(!m.poll(now + Duration::from_millis(199)));
        assert!(m.is_visible());
        assert!(m.poll(now + Duration::from_millis(200)));
        assert!(!m.is_visible());
    }

    #[test]
    fn test_entering_menu_cancels_hide() {
        let mut m = menu();
        let now = Instant::now();
        m.enter_trigger();
        m.leave(now);
        m.enter_menu();
        assert!(!m.poll(now + Duration::from_secs(1)));
        assert!(m.is_visible());
    }

    #[test]
    fn test_leave_while_hidden_is_ignored() {
        let mut m = menu();
        let now = Instant::now();
        m.leave(now);
        assert!(!m.is_hiding());
        m.enter_menu();
        assert!(!m.is_visible());
    }

    #[test]
    fn test_entries() {
        assert_eq!(MenuKind::Profile.entries().len(), 3);
        assert_eq!(MenuKind::Notifications.title(), "Notifications");
    }
}
