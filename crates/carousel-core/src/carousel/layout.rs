//! Slot width and track offset, both as percentages of the visible window.

/// Width of every slot for the given visible count
#[inline]
pub fn width_percent(slides_to_show: usize) -> f64 {
    100.0 / slides_to_show as f64
}

/// Track offset that puts `physical_index` at the left edge of the window
#[inline]
pub fn offset_percent(physical_index: usize, slides_to_show: usize) -> f64 {
    physical_index as f64 * width_percent(slides_to_show)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_percent() {
        assert!((width_percent(1) - 100.0).abs() < 1e-9);
        assert!((width_percent(4) - 25.0).abs() < 1e-9);
        assert!((width_percent(6) - 16.666_666).abs() < 1e-4);
    }

    #[test]
    fn test_offset_percent() {
        assert!((offset_percent(0, 4) - 0.0).abs() < 1e-9);
        assert!((offset_percent(4, 4) - 100.0).abs() < 1e-9);
        assert!((offset_percent(6, 6) - 100.0).abs() < 1e-9);
        assert!((offset_percent(3, 6) - 50.0).abs() < 1e-9);
    }
}
