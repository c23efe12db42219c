pub mod app;
pub mod event;
pub mod input;
pub mod motion;
pub mod theme;
pub mod title;
pub mod viewport;
pub mod widgets;

pub use app::{App, Hit};
pub use theme::Theme;
pub use title::Title;
pub use viewport::TrackViewport;
