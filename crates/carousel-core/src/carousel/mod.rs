//! Infinite-loop carousel engine
//!
//! Keeps a window of `slides_to_show` items over an ordered item list and
//! pages it by `slides_to_scroll`. In wraparound mode the track is padded
//! with clones of the opposite end, so a step past either end keeps moving
//! in the same direction; once the move settles the window is silently
//! re-centered onto the real items.
//!
//! # Layers
//! - `layout` - slot width and track offset
//! - `index` - logical/physical mapping and step targets
//! - `pagination` - page starts and the active page
//! - `track` - mounted slots, clone padding, clone-to-real resolution
//! - `transition` - `Idle`/`Animating` state and the settle timer token
//! - `viewport` - the host surface the engine drives
//! - `engine` - [`Carousel`], combining all of the above
//! - `service` - [`CarouselService`], a tokio task driving one engine
//!
//! # Usage
//!
//! ```ignore
//! use carousel_core::carousel::{Carousel, HeadlessViewport};
//! use carousel_core::CarouselConfig;
//!
//! let mut carousel = Carousel::new(items, CarouselConfig::default(), HeadlessViewport)?;
//! carousel.request_next();
//!
//! // each frame
//! if let Some(settled) = carousel.poll(tokio::time::Instant::now()) {
//!     redraw_pagination(settled.status.active_page);
//! }
//! ```

pub mod index;
pub mod layout;
pub mod pagination;
pub mod track;
pub mod transition;
pub mod viewport;

pub mod engine;
pub mod service;

pub use engine::{Carousel, Settled, SettledHook, Status};
pub use index::{Direction, IndexTranslator};
pub use service::{CarouselCommand, CarouselEvent, CarouselService, Navigation};
pub use track::{Identified, Slide, Track};
pub use transition::TimerToken;
pub use viewport::{HeadlessViewport, Motion, Viewport};
