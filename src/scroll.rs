use crate::config;

/// Whether the header should be pinned at the given scroll offset.
/// Strictly greater-than: an offset sitting exactly on the threshold
/// leaves the header in its resting state.
pub fn header_sticky(scroll_y: f64) -> bool {
    scroll_y > config::HEADER_STICKY_THRESHOLD
}

/// Whether the back-to-top button should be shown at the given offset.
pub fn back_to_top_visible(scroll_y: f64) -> bool {
    scroll_y > config::BACK_TO_TOP_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_threshold_is_strict() {
        assert!(!header_sticky(100.0));
        assert!(header_sticky(100.1));
        assert!(header_sticky(101.0));
        assert!(!header_sticky(0.0));
    }

    #[test]
    fn back_to_top_threshold_is_strict() {
        assert!(!back_to_top_visible(500.0));
        assert!(back_to_top_visible(500.1));
        assert!(!back_to_top_visible(499.9));
    }
}
