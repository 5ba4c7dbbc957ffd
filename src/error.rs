use std::fmt;

/// The error type shared by every status helper.
#[derive(Debug, Clone, PartialEq)]
pub enum StatusError {
    /// A file could not be opened, read or written.
    FileError {
        message: String,
        path: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// File content did not hold the expected value.
    ParseError {
        message: String,
        input: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Raised by the checked formatters for negative or non-finite numbers.
    InvalidInput {
        message: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    UnknownKey {
        key: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// The system did not report a value for a known key.
    Unavailable {
        key: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    ConfigError {
        message: String,
        hint: Option<String>,
        code: Option<u32>,
    },
}

fn suffix(hint: &Option<String>, code: &Option<u32>) -> String {
    format!(
        "{}{}",
        hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
        code.map_or(String::new(), |c| format!(" Code: {}", c))
    )
}

impl fmt::Display for StatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusError::FileError { message, path, hint, code } =>
                write!(f, "[STATUS] File Error '{}': {}{}", path, message, suffix(hint, code)),
            StatusError::ParseError { message, input, hint, code } =>
                write!(f, "[STATUS] Parse Error in '{}': {}{}", input, message, suffix(hint, code)),
            StatusError::InvalidInput { message, hint, code } =>
                write!(f, "[STATUS] Invalid Input: {}{}", message, suffix(hint, code)),
            StatusError::UnknownKey { key, hint, code } =>
                write!(f, "[STATUS] Unknown status key '{}'{}", key, suffix(hint, code)),
            StatusError::Unavailable { key, hint, code } =>
                write!(f, "[STATUS] Unable to resolve '{}'{}", key, suffix(hint, code)),
            StatusError::ConfigError { message, hint, code } =>
                write!(f, "[STATUS] Config Error: {}{}", message, suffix(hint, code)),
        }
    }
}

impl std::error::Error for StatusError {}

impl StatusError {
    /// Numeric code attached to the error, if any.
    pub fn code(&self) -> Option<u32> {
        match self {
            StatusError::FileError { code, .. }
            | StatusError::ParseError { code, .. }
            | StatusError::InvalidInput { code, .. }
            | StatusError::UnknownKey { code, .. }
            | StatusError::Unavailable { code, .. }
            | StatusError::ConfigError { code, .. } => *code,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_hint_and_code() {
        let err = StatusError::FileError {
            message: "No such file or directory".into(),
            path: "/proc/uptime".into(),
            hint: Some("Is /proc mounted?".into()),
            code: Some(100),
        };
        assert_eq!(
            err.to_string(),
            "[STATUS] File Error '/proc/uptime': No such file or directory Hint: Is /proc mounted? Code: 100"
        );
        assert_eq!(err.code(), Some(100));
    }

    #[test]
    fn test_display_without_hint() {
        let err = StatusError::InvalidInput {
            message: "size must be finite".into(),
            hint: None,
            code: None,
        };
        assert_eq!(err.to_string(), "[STATUS] Invalid Input: size must be finite");
        assert_eq!(err.code(), None);
    }
}
