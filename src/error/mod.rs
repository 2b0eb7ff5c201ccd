pub(crate) mod internal;

use std::fmt;
use std::io;

use crate::common::trace;

#[derive(Debug)]
pub enum SessidError {
    Io(io::Error),
    // Configuration file could not be parsed.
    Config { description: String },
    // Session payload is not a key value mapping.
    InvalidSession { description: String },
    // User store could not answer a lookup.
    LookupFailed { description: String },
}

impl SessidError {
    pub fn lookup_failed(description: impl Into<String>) -> Self {
        SessidError::LookupFailed {
            description: description.into(),
        }
    }
}

impl fmt::Display for SessidError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SessidError::Io(err) => err.fmt(f),
            SessidError::Config { description } => {
                write!(f, "invalid configuration. {}", description)
            }
            SessidError::InvalidSession { description } => {
                write!(f, "invalid session. {}", description)
            }
            SessidError::LookupFailed { description } => {
                write!(f, "user lookup failed. {}", description)
            }
        }
    }
}

impl std::error::Error for SessidError {}

impl From<io::Error> for SessidError {
    fn from(err: io::Error) -> Self {
        SessidError::Io(err)
    }
}

impl From<internal::Error> for SessidError {
    fn from(err: internal::Error) -> Self {
        if let Some(backtrace) = err.backtrace() {
            trace!(error=%err, ?backtrace, "Convert internal error");
        }

        match err.into_kind() {
            internal::ErrorKind::Io(err) => SessidError::Io(err),
            internal::ErrorKind::Yaml(err) => SessidError::Config {
                description: err.to_string(),
            },
            internal::ErrorKind::InvalidSession { description } => {
                SessidError::InvalidSession { description }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn internal_kinds_map_to_public_errors() {
        let json = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = SessidError::from(internal::Error::from(json));
        assert!(matches!(err, SessidError::InvalidSession { .. }));

        let yaml = serde_yaml::from_str::<u32>("[").unwrap_err();
        let err = SessidError::from(internal::Error::from(yaml));
        assert!(matches!(err, SessidError::Config { .. }));

        let io = io::Error::new(io::ErrorKind::NotFound, "config.yaml");
        let err = SessidError::from(internal::Error::from(io));
        assert!(matches!(err, SessidError::Io(_)));
    }

    #[test]
    fn lookup_failed_message() {
        let err = SessidError::lookup_failed("store unreachable");
        assert!(matches!(err, SessidError::LookupFailed { .. }));
        assert_eq!(err.to_string(), "user lookup failed. store unreachable");
    }
}
