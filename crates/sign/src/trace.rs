//! Structured debug events, compiled in with the `trace` feature

#[cfg(feature = "trace")]
macro_rules! trace_event {
    ($($arg:tt)*) => {
        ::tracing::debug!(target: "sigengine", $($arg)*)
    };
}

#[cfg(not(feature = "trace"))]
macro_rules! trace_event {
    ($($arg:tt)*) => {
        ()
    };
}
