//! Human-readable formatting for system-status displays: byte sizes,
//! CPU frequencies and the uptime reported by `/proc/uptime`.
//!
//! ```no_run
//! use status_fmt::{format_frequency, format_size, get_uptime};
//!
//! # fn main() -> Result<(), status_fmt::StatusError> {
//! assert_eq!(format_size(1536.0), "1.50 kB");
//! assert_eq!(format_frequency(1000.0), "1 GHz");
//! println!("up {}", get_uptime()?);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod export;
pub mod format;
pub mod status;
pub mod uptime;

pub use config::StatusConfig;
pub use error::StatusError;
pub use format::{format_frequency, format_size, format_size_with_precision};
pub use status::{StatusEntry, StatusKey};
pub use uptime::get_uptime;
