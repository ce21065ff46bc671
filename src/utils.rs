//! Logging shims. With the `log` feature these forward to the `log` crate, without it they
//! expand to nothing.
//!
//! Arguments must not be the only use of a variable, since they vanish without the feature.

macro_rules! log_trace {
    ($($arg:tt)*) => {
        #[cfg(feature = "log")]
        log::trace!($($arg)*);
    };
}

macro_rules! log_debug {
    ($($arg:tt)*) => {
        #[cfg(feature = "log")]
        log::debug!($($arg)*);
    };
}

macro_rules! log_warn {
    ($($arg:tt)*) => {
        #[cfg(feature = "log")]
        log::warn!($($arg)*);
    };
}
