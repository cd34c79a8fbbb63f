// Tuning constants for the page behavior layer.

/// Scroll offset (px) past which the header pins itself.
pub const HEADER_STICKY_THRESHOLD: f64 = 100.0;

/// Scroll offset (px) past which the back-to-top button appears.
pub const BACK_TO_TOP_THRESHOLD: f64 = 500.0;

/// Auto-advance period for the testimonials slider.
pub const SLIDE_INTERVAL_MS: u32 = 5_000;

/// Quiet window for the trailing-edge resize throttle.
pub const RESIZE_THROTTLE_MS: u32 = 100;

/// Card width (% of the track) when three cards fit in a row.
pub const DESKTOP_CARD_WIDTH: f64 = 33.33;

/// Viewport width (px) at or below which cards go full-width.
pub const MOBILE_BREAKPOINT: f64 = 768.0;

/// WhatsApp number the contact form hands off to.
pub const WHATSAPP_NUMBER: &str = "967774494509";

/// Delay between showing the success notice and opening WhatsApp.
pub const WHATSAPP_OPEN_DELAY_MS: u32 = 1_000;
