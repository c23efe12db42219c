//! Page boundaries for pagination dots.

/// Logical indices of every page start.
///
/// Steps of `slides_to_scroll` from 0 up to `max_logical`, with
/// `max_logical` appended when the step does not land on it, so the last
/// page is always reachable. The result is never empty and strictly
/// increasing.
pub fn pages(max_logical: usize, slides_to_scroll: usize) -> Vec<usize> {
    let step = slides_to_scroll.max(1);
    let mut pages: Vec<usize> = (0..=max_logical).step_by(step).collect();
    if pages.last() != Some(&max_logical) {
        pages.push(max_logical);
    }
    pages
}

/// Index of the greatest page start not above `logical`
pub fn active_page(pages: &[usize], logical: usize) -> usize {
    pages
        .iter()
        .rposition(|&start| start <= logical)
        .unwrap_or(0)
}
