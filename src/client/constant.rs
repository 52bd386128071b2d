pub const SITE_NAME: &str = "Kushon";

/// Local storage key of the access token.
pub const TOKEN_STORAGE_KEY: &str = "kushon:access_token";

/// Milliseconds a toast stays on screen.
pub const TOAST_DURATION_MS: u32 = 4_000;

/// Number of titles in the "latest titles" strip of the user panel.
pub const LATEST_TITLES: usize = 6;
