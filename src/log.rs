// src/log.rs
//! Logging front-end.
//!
//! The crate logs through four short macros (`logf!`, `logd!`, `logw!`, `loge!`)
//! that forward to `tracing` events. Binaries call [`init`] once to install a
//! stderr subscriber; library users can install their own instead.

#[doc(hidden)]
pub use tracing as __tracing;

/// Install the stderr subscriber. Lines are stamped with the time since start.
///
/// `verbosity`: 0 = warnings and errors, 1 = info, 2 = debug, 3+ = trace.
#[cfg(feature = "cli")]
pub fn init(verbosity: u8) {
    use tracing::Level;
    use tracing_subscriber::fmt::time::Uptime;

    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    // A second init (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_timer(Uptime::default())
        .with_target(false)
        .with_max_level(level)
        .try_init();
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        $crate::log::__tracing::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        $crate::log::__tracing::debug!($($arg)*)
    };
}

/// Warning-level logging
#[macro_export]
macro_rules! logw {
    ($($arg:tt)*) => {
        $crate::log::__tracing::warn!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        $crate::log::__tracing::error!($($arg)*)
    };
}
