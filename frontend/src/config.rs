use log::Level;

#[cfg(debug_assertions)]
pub fn get_site_url() -> &'static str {
    "http://localhost:8080"  // trunk serve
}

#[cfg(not(debug_assertions))]
pub fn get_site_url() -> &'static str {
    "https://uwjota.vercel.app"
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Panics are only reported to the console in development builds.
#[cfg(debug_assertions)]
pub fn report_errors() -> bool {
    true
}

#[cfg(not(debug_assertions))]
pub fn report_errors() -> bool {
    false
}

pub const LANGUAGE_STORAGE_KEY: &str = "language";

/// Time the intro overlay gets to fade before the content route is pushed.
pub const INTRO_REDIRECT_DELAY_MS: u32 = 800;

/// Class of the Content View's snapping scroll container. The particle
/// background follows this element's scroll position when it exists.
pub const SCROLL_CONTAINER_CLASS: &str = "snap-container";

pub const PROFILE_PHOTO: &str = "/assets/profile.svg";
