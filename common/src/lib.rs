pub mod config;
pub mod error;
pub mod network;
pub mod vendors;

#[doc(hidden)]
pub use tracing;

pub use error::MacError;

/// Logs a finished step. Rendered with a green `[+]`.
#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::tracing::info!(target: "maclens::success", $($arg)*)
    };
}

/// Logs progress information. Rendered with a blue `[*]`.
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::tracing::info!(target: "maclens::info", $($arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::tracing::warn!(target: "maclens::warn", $($arg)*)
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        $crate::tracing::error!(target: "maclens::error", $($arg)*)
    };
}
