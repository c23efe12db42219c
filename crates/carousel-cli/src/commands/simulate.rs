use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, Result};
use tokio::sync::{mpsc, watch};

use carousel_core::carousel::{
    Carousel, CarouselCommand, CarouselEvent, CarouselService, HeadlessViewport, Navigation,
};
use carousel_core::{AppConfig, Status};

/// One scripted step of a headless run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Navigate(Navigation),
    Resize(usize),
}

impl FromStr for Step {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, arg) = match s.split_once(':') {
            Some((name, arg)) => (name, Some(arg)),
            None => (s, None),
        };
        let number = || -> Result<usize, String> {
            arg.ok_or_else(|| format!("'{}' needs a number, e.g. {}:2", name, name))?
                .parse()
                .map_err(|_| format!("invalid number in '{}'", s))
        };

        match name {
            "next" | "n" => Ok(Step::Navigate(Navigation::Next)),
            "prev" | "p" => Ok(Step::Navigate(Navigation::Prev)),
            "page" => Ok(Step::Navigate(Navigation::Page(number()?))),
            "dot" => Ok(Step::Navigate(Navigation::PageIndex(number()?))),
            "resize" => Ok(Step::Resize(number()?)),
            _ => Err(format!(
                "unknown step '{}' (expected next, prev, page:<index>, dot:<n>, resize:<show>)",
                s
            )),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Navigate(Navigation::Next) => write!(f, "next"),
            Step::Navigate(Navigation::Prev) => write!(f, "prev"),
            Step::Navigate(Navigation::Page(index)) => write!(f, "page:{}", index),
            Step::Navigate(Navigation::PageIndex(page)) => write!(f, "dot:{}", page),
            Step::Resize(show) => write!(f, "resize:{}", show),
        }
    }
}

impl Step {
    fn command(self) -> CarouselCommand {
        match self {
            Step::Navigate(navigation) => CarouselCommand::Navigate(navigation),
            Step::Resize(show) => CarouselCommand::Resize(show),
        }
    }
}

pub async fn run(config: &AppConfig, items: usize, steps: &[Step], json: bool) -> Result<()> {
    let carousel = Carousel::new(
        (0..items).collect::<Vec<_>>(),
        config.carousel,
        HeadlessViewport,
    )?;
    if !json {
        println!("{:<10} {}", "start", describe(&carousel.status()));
    }

    let (command_tx, command_rx) = mpsc::unbounded_channel();
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let service = CarouselService::new(carousel).with_event_sender(event_tx);
    let handle = tokio::spawn(service.run(command_rx, shutdown_rx));

    for step in steps {
        command_tx
            .send(step.command())
            .map_err(|_| anyhow!("carousel service stopped early"))?;

        // A started transition is followed by exactly one settle
        loop {
            let event = event_rx
                .recv()
                .await
                .ok_or_else(|| anyhow!("carousel service stopped early"))?;
            print_event(step, &event, json)?;
            if !matches!(event, CarouselEvent::Started { .. }) {
                break;
            }
        }
    }

    drop(command_tx);
    let carousel = handle.await?;
    drop(shutdown_tx);

    if !json {
        println!("{:<10} {}", "end", describe(&carousel.status()));
    }
    Ok(())
}

fn print_event(step: &Step, event: &CarouselEvent, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(event)?);
        return Ok(());
    }

    let step = step.to_string();
    match event {
        CarouselEvent::Started { status, .. } => {
            println!("{:<10} -> physical {}", step, status.physical_index)
        }
        CarouselEvent::Ignored { .. } => println!("{:<10} ignored", step),
        CarouselEvent::Resized { status, .. } => println!("{:<10} {}", step, describe(status)),
        CarouselEvent::Settled(settled) => {
            let corrected = if settled.corrected { "  (looped)" } else { "" };
            println!("{:<10} {}{}", "", describe(&settled.status), corrected)
        }
        CarouselEvent::Error { message } => println!("{:<10} error: {}", step, message),
    }
    Ok(())
}

fn describe(status: &Status) -> String {
    format!(
        "index {}/{}  physical {}  page {}/{}",
        status.logical_index,
        status.max_logical_index,
        status.physical_index,
        status.active_page + 1,
        status.page_count
    )
}
