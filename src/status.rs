// Author: Dustin Pilgrim
// License: MIT

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sysinfo::System;

use crate::config::StatusConfig;
use crate::format::{format_frequency, format_size_with_precision};
use crate::uptime::get_uptime_from;
use crate::StatusError;

/// A named field a status display can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum StatusKey {
    Os,
    KernelVersion,
    Hostname,
    CpuCount,
    CpuFrequency,
    MemoryTotal,
    MemoryUsed,
    MemoryFree,
    SwapTotal,
    SwapUsed,
    Uptime,
}

impl StatusKey {
    pub const ALL: [StatusKey; 11] = [
        StatusKey::Os,
        StatusKey::KernelVersion,
        StatusKey::Hostname,
        StatusKey::CpuCount,
        StatusKey::CpuFrequency,
        StatusKey::MemoryTotal,
        StatusKey::MemoryUsed,
        StatusKey::MemoryFree,
        StatusKey::SwapTotal,
        StatusKey::SwapUsed,
        StatusKey::Uptime,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusKey::Os => "os",
            StatusKey::KernelVersion => "kernel_version",
            StatusKey::Hostname => "hostname",
            StatusKey::CpuCount => "cpu_count",
            StatusKey::CpuFrequency => "cpu_frequency",
            StatusKey::MemoryTotal => "memory_total",
            StatusKey::MemoryUsed => "memory_used",
            StatusKey::MemoryFree => "memory_free",
            StatusKey::SwapTotal => "swap_total",
            StatusKey::SwapUsed => "swap_used",
            StatusKey::Uptime => "uptime",
        }
    }

    /// Whether resolving this key needs a `sysinfo` snapshot.
    fn needs_system(&self) -> bool {
        !matches!(self, StatusKey::Uptime)
    }
}

impl fmt::Display for StatusKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatusKey {
    type Err = StatusError;

    /// Accepts both `snake_case` and `kebab-case` names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().replace('-', "_");
        StatusKey::ALL
            .iter()
            .copied()
            .find(|k| k.as_str() == normalized)
            .ok_or_else(|| StatusError::UnknownKey {
                key: s.to_string(),
                hint: Some(format!(
                    "Available keys: {}",
                    StatusKey::ALL.iter().map(|k| k.as_str()).collect::<Vec<_>>().join(", ")
                )),
                code: Some(300),
            })
    }
}

impl TryFrom<String> for StatusKey {
    type Error = StatusError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<StatusKey> for String {
    fn from(key: StatusKey) -> Self {
        key.as_str().to_string()
    }
}

/// One resolved line of a status display.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusEntry {
    pub key: StatusKey,
    pub value: String,
}

/// Resolve a single key against a fresh system snapshot.
pub fn resolve(key: StatusKey, config: &StatusConfig) -> Result<String, StatusError> {
    let sys = if key.needs_system() { Some(snapshot()) } else { None };
    resolve_with(sys.as_ref(), key, config)
}

/// Resolve every key in `config.keys`, in order, from one shared snapshot.
pub fn collect(config: &StatusConfig) -> Result<Vec<StatusEntry>, StatusError> {
    let sys = if config.keys.iter().any(StatusKey::needs_system) {
        Some(snapshot())
    } else {
        None
    };

    config
        .keys
        .iter()
        .map(|&key| {
            Ok(StatusEntry {
                key,
                value: resolve_with(sys.as_ref(), key, config)?,
            })
        })
        .collect()
}

fn snapshot() -> System {
    let mut sys = System::new_all();
    sys.refresh_all();
    sys
}

fn resolve_with(
    sys: Option<&System>,
    key: StatusKey,
    config: &StatusConfig,
) -> Result<String, StatusError> {
    let sys = match (key, sys) {
        (StatusKey::Uptime, _) => return get_uptime_from(&config.uptime_path),
        (_, Some(sys)) => sys,
        (_, None) => return Err(unavailable(key)),
    };
    let size = |bytes: u64| format_size_with_precision(bytes as f64, config.decimal_places);

    let value = match key {
        StatusKey::Os => System::name(),
        StatusKey::KernelVersion => System::kernel_version(),
        StatusKey::Hostname => System::host_name(),
        StatusKey::CpuCount => Some(sys.cpus().len().to_string()),
        StatusKey::CpuFrequency => {
            let mhz = sys.cpus().iter().map(|c| c.frequency()).max().unwrap_or(0);
            Some(format_frequency(mhz as f64))
        }
        StatusKey::MemoryTotal => Some(size(sys.total_memory())),
        StatusKey::MemoryUsed => Some(size(sys.used_memory())),
        StatusKey::MemoryFree => Some(size(sys.free_memory())),
        StatusKey::SwapTotal => Some(size(sys.total_swap())),
        StatusKey::SwapUsed => Some(size(sys.used_swap())),
        StatusKey::Uptime => None,
    };

    value.ok_or_else(|| unavailable(key))
}

fn unavailable(key: StatusKey) -> StatusError {
    StatusError::Unavailable {
        key: key.to_string(),
        hint: None,
        code: Some(301),
    }
}

// -- Tests --
