mod carousel;
mod menu;
mod status_bar;

pub use carousel::CarouselWidget;
pub use menu::{HeaderWidget, MenuWidget};
pub use status_bar::StatusBarWidget;
