/// localStorage key holding the cookie consent flag.
pub const CONSENT_KEY: &str = "cookieAccepted";
/// Value written once the visitor accepts cookies.
pub const CONSENT_ACCEPTED: &str = "yes";

/// Number of remote records turned into destination cards.
pub const FEED_LIMIT: usize = 6;

/// Scroll offsets (px) past which the header and the to-top button change.
pub const HEADER_SCROLL_THRESHOLD: f64 = 10.0;
pub const TO_TOP_THRESHOLD: f64 = 400.0;

/// Viewports wider than this always get a closed mobile menu.
pub const DESKTOP_BREAKPOINT: f64 = 768.0;

/// Element the app is mounted into.
pub const MOUNT_ID: &str = "app";

/// Public placeholder API feeding the destinations grid.
pub fn get_feed_url() -> &'static str {
    "https://jsonplaceholder.typicode.com/users"
}
