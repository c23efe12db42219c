use anyhow::Result;

use carousel_core::carousel::{Carousel, HeadlessViewport};
use carousel_core::AppConfig;

pub fn run(config: &AppConfig, items: usize) -> Result<()> {
    let settings = config.carousel;
    let carousel = Carousel::new((0..items).collect::<Vec<_>>(), settings, HeadlessViewport)?;

    println!(
        "Items: {}  Showing: {}  Step: {}  Mode: {}",
        items,
        settings.slides_to_show,
        settings.slides_to_scroll,
        if carousel.is_infinite() { "loop" } else { "finite" },
    );
    println!(
        "Max index: {}  Track length: {}\n",
        carousel.max_logical_index(),
        carousel.track().len()
    );

    let pages = carousel.pages();
    for (page, start) in pages.iter().enumerate() {
        let end = (start + settings.slides_to_show).min(items);
        println!("  Page {:>2}  index {:>3}  items {}..{}", page + 1, start, start, end);
    }

    Ok(())
}
