//! Async driver: runs one carousel on a tokio task, sleeping until the
//! settle deadline instead of being polled by a frame loop.

use serde::Serialize;
use tokio::sync::{mpsc, oneshot, watch};
use tokio::time::{sleep_until, Instant};
use tracing::{debug, info, warn};

use super::engine::{Carousel, Settled, Status};
use super::viewport::Viewport;

/// Navigation requests a host can send
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Navigation {
    Prev,
    Next,
    /// Jump to a logical index (clamped)
    Page(usize),
    /// Jump to the n-th pagination dot
    PageIndex(usize),
}

#[derive(Debug)]
pub enum CarouselCommand {
    Navigate(Navigation),
    /// New visible count after a host resize
    Resize(usize),
    /// Ask for the current derived state
    Status(oneshot::Sender<Status>),
}

/// Events emitted to the host
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum CarouselEvent {
    /// A transition is in flight
    Started { navigation: Navigation, status: Status },
    /// Dropped while animating, or a no-op
    Ignored { navigation: Navigation },
    /// Layout re-derived for a new visible count
    Resized { slides_to_show: usize, status: Status },
    /// A transition completed
    Settled(Settled),
    /// A command was rejected
    Error { message: String },
}

pub struct CarouselService<T, V> {
    carousel: Carousel<T, V>,
    event_tx: Option<mpsc::UnboundedSender<CarouselEvent>>,
}

impl<T, V> CarouselService<T, V>
where
    T: Clone + Send,
    V: Viewport + Send,
{
    pub fn new(carousel: Carousel<T, V>) -> Self {
        Self {
            carousel,
            event_tx: None,
        }
    }

    /// Set the event sender for host notifications
    pub fn with_event_sender(mut self, tx: mpsc::UnboundedSender<CarouselEvent>) -> Self {
        self.event_tx = Some(tx);
        self
    }

    fn send_event(&self, event: CarouselEvent) {
        if let Some(ref tx) = self.event_tx {
            if tx.send(event).is_err() {
                warn!("Failed to send carousel event: receiver dropped");
            }
        }
    }

    fn handle(&mut self, command: CarouselCommand) {
        match command {
            CarouselCommand::Navigate(navigation) => {
                let accepted = match navigation {
                    Navigation::Prev => self.carousel.request_prev(),
                    Navigation::Next => self.carousel.request_next(),
                    Navigation::Page(index) => self.carousel.request_page(index),
                    Navigation::PageIndex(page) => self.carousel.request_page_index(page),
                };
                if accepted {
                    self.send_event(CarouselEvent::Started {
                        navigation,
                        status: self.carousel.status(),
                    });
                } else {
                    self.send_event(CarouselEvent::Ignored { navigation });
                }
            }
            CarouselCommand::Resize(slides_to_show) => match self.carousel.resize(slides_to_show) {
                Ok(_) => self.send_event(CarouselEvent::Resized {
                    slides_to_show,
                    status: self.carousel.status(),
                }),
                Err(e) => self.send_event(CarouselEvent::Error {
                    message: e.to_string(),
                }),
            },
            CarouselCommand::Status(reply) => {
                if reply.send(self.carousel.status()).is_err() {
                    debug!("Status requester went away");
                }
            }
        }
    }

    /// Drive the carousel until shutdown or until the command channel closes
    /// and no transition is left in flight. Returns the torn-down carousel.
    pub async fn run(
        mut self,
        mut commands: mpsc::UnboundedReceiver<CarouselCommand>,
        mut shutdown: watch::Receiver<bool>,
    ) -> Carousel<T, V> {
        info!(
            items = self.carousel.items().len(),
            slides_to_show = self.carousel.config().slides_to_show,
            infinite = self.carousel.is_infinite(),
            "Carousel service started"
        );

        let mut commands_open = true;

        loop {
            let deadline = self.carousel.settle_deadline();
            if !commands_open && deadline.is_none() {
                break;
            }

            tokio::select! {
                result = shutdown.changed() => {
                    if result.is_err() || *shutdown.borrow() {
                        info!("Carousel service received shutdown signal");
                        break;
                    }
                }

                command = commands.recv(), if commands_open => {
                    match command {
                        Some(command) => self.handle(command),
                        None => commands_open = false,
                    }
                }

                _ = wait_for(deadline) => {
                    if let Some(settled) = self.carousel.poll(Instant::now()) {
                        self.send_event(CarouselEvent::Settled(settled));
                    }
                }
            }
        }

        self.carousel.teardown();
        info!("Carousel service stopped");
        self.carousel
    }
}

async fn wait_for(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}
