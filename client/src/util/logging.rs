//! Browser console logging.
//!
//! Routes the `log` records emitted by `multicol` to the devtools console and
//! installs the panic hook. Call once from the app's hydrate entry point.

#[cfg(test)]
#[path = "logging_test.rs"]
mod logging_test;

/// Install the console logger and panic hook. Safe to call more than once.
pub fn init() {
    #[cfg(feature = "hydrate")]
    {
        console_error_panic_hook::set_once();
        if let Err(err) = console_log::init_with_level(log::Level::Debug) {
            leptos::logging::warn!("console logger already installed: {err}");
        }
    }
}
