//! Macros for generating log messages.
//!
//! Each public macro forwards to `__log_event!` with its `tracing` level. The optional leading expression is the
//! message's verbosity.

#[doc(hidden)]
#[macro_export]
macro_rules! __log_event {
    ($level:expr, critical, $verbosity:expr, $($arg:tt)+) => {
        {
            $crate::log::init_logger();
            $crate::log::tracing::event!(
                $level,
                critical = true,
                verbosity = $verbosity,
                message = format_args!($($arg)+)
            );
        }
    };
    ($level:expr, plain, $verbosity:expr, $($arg:tt)+) => {
        {
            $crate::log::init_logger();
            $crate::log::tracing::event!(
                $level,
                verbosity = $verbosity,
                message = format_args!($($arg)+)
            );
        }
    };
}

#[macro_export]
macro_rules! critical {
    ($verbosity:literal, $fmt:literal $($arg:tt)*) => {
        $crate::__log_event!($crate::log::tracing::Level::ERROR, critical, $verbosity, $fmt $($arg)*)
    };
    ($fmt:literal $($arg:tt)*) => {
        $crate::__log_event!($crate::log::tracing::Level::ERROR, critical, 0, $fmt $($arg)*)
    };
    ($verbosity:expr, $($arg:tt)+) => {
        $crate::__log_event!($crate::log::tracing::Level::ERROR, critical, $verbosity, $($arg)+)
    };
}

#[macro_export]
macro_rules! error {
    ($verbosity:literal, $fmt:literal $($arg:tt)*) => {
        $crate::__log_event!($crate::log::tracing::Level::ERROR, plain, $verbosity, $fmt $($arg)*)
    };
    ($fmt:literal $($arg:tt)*) => {
        $crate::__log_event!($crate::log::tracing::Level::ERROR, plain, 0, $fmt $($arg)*)
    };
    ($verbosity:expr, $($arg:tt)+) => {
        $crate::__log_event!($crate::log::tracing::Level::ERROR, plain, $verbosity, $($arg)+)
    };
}

#[macro_export]
macro_rules! warning {
    ($verbosity:literal, $fmt:literal $($arg:tt)*) => {
        $crate::__log_event!($crate::log::tracing::Level::WARN, plain, $verbosity, $fmt $($arg)*)
    };
    ($fmt:literal $($arg:tt)*) => {
        $crate::__log_event!($crate::log::tracing::Level::WARN, plain, 0, $fmt $($arg)*)
    };
    ($verbosity:expr, $($arg:tt)+) => {
        $crate::__log_event!($crate::log::tracing::Level::WARN, plain, $verbosity, $($arg)+)
    };
}

#[macro_export]
macro_rules! info {
    ($verbosity:literal, $fmt:literal $($arg:tt)*) => {
        $crate::__log_event!($crate::log::tracing::Level::INFO, plain, $verbosity, $fmt $($arg)*)
    };
    ($fmt:literal $($arg:tt)*) => {
        $crate::__log_event!($crate::log::tracing::Level::INFO, plain, 0, $fmt $($arg)*)
    };
    ($verbosity:expr, $($arg:tt)+) => {
        $crate::__log_event!($crate::log::tracing::Level::INFO, plain, $verbosity, $($arg)+)
    };
}

#[macro_export]
macro_rules! debug {
    ($verbosity:literal, $fmt:literal $($arg:tt)*) => {
        $crate::__log_event!($crate::log::tracing::Level::DEBUG, plain, $verbosity, $fmt $($arg)*)
    };
    ($fmt:literal $($arg:tt)*) => {
        $crate::__log_event!($crate::log::tracing::Level::DEBUG, plain, 0, $fmt $($arg)*)
    };
    ($verbosity:expr, $($arg:tt)+) => {
        $crate::__log_event!($crate::log::tracing::Level::DEBUG, plain, $verbosity, $($arg)+)
    };
}

#[macro_export]
macro_rules! trace {
    ($verbosity:literal, $fmt:literal $($arg:tt)*) => {
        $crate::__log_event!($crate::log::tracing::Level::TRACE, plain, $verbosity, $fmt $($arg)*)
    };
    ($fmt:literal $($arg:tt)*) => {
        $crate::__log_event!($crate::log::tracing::Level::TRACE, plain, 0, $fmt $($arg)*)
    };
    ($verbosity:expr, $($arg:tt)+) => {
        $crate::__log_event!($crate::log::tracing::Level::TRACE, plain, $verbosity, $($arg)+)
    };
}


// The following makes the macros importable directly from the `log` module.
pub use {critical, error, warning, info, debug, trace};
