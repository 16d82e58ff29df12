//! Millisecond timing for perf metrics.
//!
//! Browser builds read `Date.now()`; host builds measure from a process-wide
//! `Instant` origin.

#[cfg(target_arch = "wasm32")]
fn now_ms() -> f64 {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
fn now_ms() -> f64 {
    use std::sync::OnceLock;
    use std::time::Instant;

    static ORIGIN: OnceLock<Instant> = OnceLock::new();
    ORIGIN.get_or_init(Instant::now).elapsed().as_secs_f64() * 1000.0
}

/// Run `f` and return its result with the elapsed milliseconds
pub(crate) fn timed<R>(f: impl FnOnce() -> R) -> (R, f64) {
    let start = now_ms();
    let out = f();
    (out, now_ms() - start)
}
