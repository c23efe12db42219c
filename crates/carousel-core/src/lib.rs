pub mod carousel;
pub mod config;
pub mod error;
pub mod likes;
pub mod menu;

pub use carousel::{Carousel, Identified, Settled, Status, Viewport};
pub use config::{AppConfig, Breakpoint, CarouselConfig, EasingType, UiConfig};
pub use error::{Error, Result};
pub use likes::{format_count, LikeRegistry};
pub use menu::{HoverMenu, MenuKind};
