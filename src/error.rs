use std::io;

use thiserror::Error;

use crate::creational::builder::Ownership;

/// Everything a pattern demo can fail with.
#[derive(Error, Debug)]
pub enum PatternError {
    #[error("builder not configured ({ownership} ownership)")]
    BuilderNotConfigured { ownership: Ownership },

    #[error("house is still borrowed by a caller; release it before constructing again")]
    HouseInUse,

    #[error("unknown transport type '{kind}'")]
    UnknownTransport { kind: String },

    #[error("unknown house style '{name}' (expected one of: wooden, fancy)")]
    UnknownStyle { name: String },

    #[error("unknown notifier layer '{name}' (expected one of: sms, facebook, slack)")]
    UnknownLayer { name: String },

    #[error("failed to write demo output: {0}")]
    Io(#[from] io::Error),
}

impl PatternError {
    pub fn unknown_transport(kind: impl Into<String>) -> Self {
        Self::UnknownTransport { kind: kind.into() }
    }

    /// True for the errors a caller is expected to report and move past.
    pub fn is_unknown_discriminator(&self) -> bool {
        matches!(
            self,
            Self::UnknownTransport { .. } | Self::UnknownStyle { .. } | Self::UnknownLayer { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, PatternError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_not_configured_display() {
        let err = PatternError::BuilderNotConfigured {
            ownership: Ownership::Unique,
        };
        assert_eq!(err.to_string(), "builder not configured (unique ownership)");
        assert!(!err.is_unknown_discriminator());
    }

    #[test]
    fn test_unknown_transport_display() {
        let err = PatternError::unknown_transport("plane");
        assert_eq!(err.to_string(), "unknown transport type 'plane'");
        assert!(err.is_unknown_discriminator());
    }

    #[test]
    fn test_io_error_converts() {
        let err: PatternError = io::Error::new(io::ErrorKind::BrokenPipe, "closed").into();
        assert!(matches!(err, PatternError::Io(_)));
    }
}
