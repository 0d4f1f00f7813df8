//! Console logging macros
//!
//! On wasm32 the messages go to the browser console through `web_sys`.
//! Native builds (unit/integration tests) print to stderr instead, since
//! imported JS functions cannot be called outside of a wasm host.
//!
//! Usage:
//! ```rust
//! use physisynth_engine::{engine_log, engine_warn};
//!
//! engine_log!("placed body {}", 1);
//! engine_warn!("unknown material tag {:?}", "SLIME");
//! ```

#[doc(hidden)]
pub fn write_log(message: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::console::log_1(&message.into());
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        eprintln!("[physisynth] {}", message);
    }
}

#[doc(hidden)]
pub fn write_warn(message: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::console::warn_1(&message.into());
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        eprintln!("[physisynth] warning: {}", message);
    }
}

/// Log an informational message to the console
#[macro_export]
macro_rules! engine_log {
    ($($arg:tt)*) => {{
        $crate::core::log::write_log(&format!($($arg)*));
    }};
}

/// Log a warning to the console
#[macro_export]
macro_rules! engine_warn {
    ($($arg:tt)*) => {{
        $crate::core::log::write_warn(&format!($($arg)*));
    }};
}
