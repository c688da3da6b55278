#[cfg(not(target_arch = "wasm32"))]
use log::LevelFilter;

/// Environment variable that switches the default level to Debug.
pub const DEBUG_ENV_VAR: &str = "SQUAREDLE_DEBUG";

/// True when [`DEBUG_ENV_VAR`] is set (to anything).
#[cfg(not(target_arch = "wasm32"))]
#[must_use]
pub fn debug_requested() -> bool {
    std::env::var_os(DEBUG_ENV_VAR).is_some()
}

/// Initialize logging for the solver.
///
/// # Behavior
/// - **Native (CLI):** Info by default, Debug when `debug_enabled`; `RUST_LOG` overrides both.
/// - **WASM:** forwards to the browser console at the same default levels.
pub fn init_logger(debug_enabled: bool) {
    #[cfg(target_arch = "wasm32")]
    {
        let level = if debug_enabled { log::Level::Debug } else { log::Level::Info };
        if let Err(e) = console_log::init_with_level(level) {
            // logging is optional in the browser; report and carry on
            let msg = format!("Failed to initialize console_log: {e}. Logging will be unavailable.");
            web_sys::console::error_1(&msg.into());
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let level = if debug_enabled { LevelFilter::Debug } else { LevelFilter::Info };

        let mut builder = env_logger::Builder::new();
        builder
            .filter(None, level)
            .format_timestamp(None)
            .format_module_path(false)
            .format_target(false);

        if let Ok(spec) = std::env::var("RUST_LOG") {
            builder.parse_filters(&spec);
        }

        // a second init (e.g. from several tests) keeps the first logger
        if builder.try_init().is_ok() {
            log::debug!("logger initialized at {level:?} level");
        }
    }
}
