//! Console Logging
//!
//! In the browser messages go to `console.log` / `console.warn` /
//! `console.error` through web-sys. Native builds (tests, tools) print to
//! stderr, but only with debug assertions on so release benches stay quiet.
//!
//! Usage:
//! ```rust
//! use kinematic_engine::console_log;
//!
//! let actors = 3;
//! console_log!("spawned {} actors", actors);
//! ```

/// Severity of a console message
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Log,
    Warn,
    Error,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Log => "LOG",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
        }
    }
}

/// Write one message at the given level
pub fn write(level: Level, message: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        let value = wasm_bindgen::JsValue::from_str(message);
        match level {
            Level::Log => web_sys::console::log_1(&value),
            Level::Warn => web_sys::console::warn_1(&value),
            Level::Error => web_sys::console::error_1(&value),
        }
    }
    #[cfg(all(not(target_arch = "wasm32"), debug_assertions))]
    {
        eprintln!("[{}] {}", level.as_str(), message);
    }
    #[cfg(all(not(target_arch = "wasm32"), not(debug_assertions)))]
    {
        let _ = (level, message);
    }
}

/// `console.log` with `format!` arguments
#[macro_export]
macro_rules! console_log {
    ($($arg:tt)*) => {
        $crate::core::utils::log::write($crate::core::utils::log::Level::Log, &format!($($arg)*))
    };
}

/// `console.warn` with `format!` arguments
#[macro_export]
macro_rules! console_warn {
    ($($arg:tt)*) => {
        $crate::core::utils::log::write($crate::core::utils::log::Level::Warn, &format!($($arg)*))
    };
}

/// `console.error` with `format!` arguments
#[macro_export]
macro_rules! console_error {
    ($($arg:tt)*) => {
        $crate::core::utils::log::write($crate::core::utils::log::Level::Error, &format!($($arg)*))
    };
}
