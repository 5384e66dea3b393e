/// Conditional logging module for development builds
///
/// The `log!` macro provides informational console logging that is compiled out
/// in production (release) builds by default. Errors and warnings should go
/// through `leptos::logging::error!` and `leptos::logging::warn!` instead.
///
/// Logging is enabled on `wasm32` when either:
/// - Building in debug mode (`cfg(debug_assertions)`)
/// - The `console_logging` feature is explicitly enabled
///
/// Native builds (tests, benches) have no console to write to, so the macro
/// expands to nothing there.
///
/// # Examples
///
/// ```rust
/// use subway_route::log;
///
/// let line_count = 3;
/// log!("Station directory loaded: {} lines", line_count);
/// ```
#[macro_export]
macro_rules! log {
    ($($arg:expr),+ $(,)?) => {
        #[cfg(all(target_arch = "wasm32", any(debug_assertions, feature = "console_logging")))]
        {
            web_sys::console::log_1(&format!($($arg),+).into());
        }
        #[cfg(not(all(target_arch = "wasm32", any(debug_assertions, feature = "console_logging"))))]
        {
            let _ = format_args!($($arg),+);
        }
    };
}

/// Milliseconds from the browser's high resolution clock
///
/// Only available with the `perf_timing` feature on `wasm32`.
#[cfg(all(target_arch = "wasm32", feature = "perf_timing"))]
#[must_use]
pub fn perf_now() -> Option<f64> {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
}
