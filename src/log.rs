//! Logging macros.
//!
//! Every macro forwards to the [`log`] crate when the `log` feature is enabled. Otherwise the
//! arguments are only borrowed by `format_args!`, so values captured solely for logging do not
//! trigger unused warnings.
//!
//! [`log`]: https://docs.rs/log
#![allow(unused, reason = "logger")]

macro_rules! info {
    ($($tt:tt)*) => {{
        #[cfg(feature = "log")]
        ::log::info!(target: "h1wire", $($tt)*);
        #[cfg(not(feature = "log"))]
        { let _ = format_args!($($tt)*); }
    }};
}

macro_rules! debug {
    ($($tt:tt)*) => {{
        #[cfg(feature = "log")]
        ::log::debug!(target: "h1wire", $($tt)*);
        #[cfg(not(feature = "log"))]
        { let _ = format_args!($($tt)*); }
    }};
}

macro_rules! warning {
    ($($tt:tt)*) => {{
        #[cfg(feature = "log")]
        ::log::warn!(target: "h1wire", $($tt)*);
        #[cfg(not(feature = "log"))]
        { let _ = format_args!($($tt)*); }
    }};
}

macro_rules! error {
    ($($tt:tt)*) => {{
        #[cfg(feature = "log")]
        ::log::error!(target: "h1wire", $($tt)*);
        #[cfg(not(feature = "log"))]
        { let _ = format_args!($($tt)*); }
    }};
}

pub(crate) use {info, debug, warning, error};
