//! Exit codes for the forecast-tally binary.
//!
//! Exit code ranges:
//! - 0: Report printed
//! - 10-19: Feed errors (network or malformed data)
//! - 20-29: Output errors

use ft_common::{Error, ErrorCategory};

/// Process exit codes. These are a stable contract for scripts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Report printed.
    Clean = 0,

    /// Feed unreachable or answered with a non-200 status.
    NetworkError = 11,

    /// Feed body is not the expected document.
    DataError = 12,

    /// Writing the report failed.
    IoError = 21,
}

impl ExitCode {
    /// Convert to i32 for process exit.
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Get the error code name as a string constant.
    pub fn code_name(&self) -> &'static str {
        match self {
            ExitCode::Clean => "OK",
            ExitCode::NetworkError => "ERR_NETWORK",
            ExitCode::DataError => "ERR_DATA",
            ExitCode::IoError => "ERR_IO",
        }
    }
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err.category() {
            ErrorCategory::Network => ExitCode::NetworkError,
            ErrorCategory::Data => ExitCode::DataError,
            ErrorCategory::Io => ExitCode::IoError,
        }
    }
}
