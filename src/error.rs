// SPDX-License-Identifier: MPL-2.0
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),
    #[error("Config Error: {0}")]
    Config(String),
    #[error("Playback Error: {0}")]
    Playback(ErrorInfo),
}

/// Category of a terminal media failure.
/// Used to pick a user-facing, localizable message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackErrorKind {
    /// The source URI could not be resolved or opened.
    SourceNotFound,

    /// Container or codec is not supported by the engine.
    UnsupportedFormat,

    /// Network failure while fetching the stream.
    Network,

    /// Decoding failed during playback.
    Decoding,

    /// Anything the engine reports that does not fit above.
    Other,
}

impl PlaybackErrorKind {
    /// Returns the message key for this error kind.
    #[must_use]
    pub fn message_key(self) -> &'static str {
        match self {
            Self::SourceNotFound => "error-playback-source-not-found",
            Self::UnsupportedFormat => "error-playback-unsupported-format",
            Self::Network => "error-playback-network",
            Self::Decoding => "error-playback-decoding",
            Self::Other => "error-playback-general",
        }
    }

    /// Categorizes a raw engine error message.
    #[must_use]
    pub fn from_message(msg: &str) -> Self {
        let msg_lower = msg.to_lowercase();

        // Codec problems first, they often also say "not found"
        if msg_lower.contains("codec") || msg_lower.contains("unsupported") {
            return Self::UnsupportedFormat;
        }

        if msg_lower.contains("network")
            || msg_lower.contains("timed out")
            || msg_lower.contains("timeout")
            || msg_lower.contains("connection")
            || msg_lower.contains("http")
        {
            return Self::Network;
        }

        if msg_lower.contains("not found")
            || msg_lower.contains("no such file")
            || msg_lower.contains("404")
            || msg_lower.contains("permission denied")
        {
            return Self::SourceNotFound;
        }

        if msg_lower.contains("decode") || msg_lower.contains("corrupt") {
            return Self::Decoding;
        }

        Self::Other
    }
}

/// A terminal media error as recorded in the playback session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ErrorInfo {
    pub kind: PlaybackErrorKind,
    pub message: String,
}

impl ErrorInfo {
    /// Builds an error from the engine's message, classifying it.
    pub fn from_engine(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            kind: PlaybackErrorKind::from_message(&message),
            message,
        }
    }
}

/// Failure of a display/orientation/chrome call.
/// Never surfaced to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnvironmentError {
    #[error("{0} is not available on this platform")]
    Unavailable(&'static str),
    #[error("{operation} failed: {reason}")]
    Failed {
        operation: &'static str,
        reason: String,
    },
}

impl From<ErrorInfo> for Error {
    fn from(err: ErrorInfo) -> Self {
        Error::Playback(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn kind_from_message_codec() {
        assert_eq!(
            PlaybackErrorKind::from_message("Decoder for codec hevc not found"),
            PlaybackErrorKind::UnsupportedFormat
        );
    }

    #[test]
    fn kind_from_message_network() {
        assert_eq!(
            PlaybackErrorKind::from_message("The network connection was lost"),
            PlaybackErrorKind::Network
        );
    }

    #[test]
    fn kind_from_message_missing_source() {
        assert_eq!(
            PlaybackErrorKind::from_message("File not found"),
            PlaybackErrorKind::SourceNotFound
        );
    }

    #[test]
    fn kind_from_message_fallback() {
        assert_eq!(
            PlaybackErrorKind::from_message("something odd"),
            PlaybackErrorKind::Other
        );
        assert_eq!(PlaybackErrorKind::Other.message_key(), "error-playback-general");
    }

    #[test]
    fn playback_error_display_uses_engine_message() {
        let err: Error = ErrorInfo::from_engine("stream decode error").into();
        assert_eq!(format!("{}", err), "Playback Error: stream decode error");
    }

    #[test]
    fn environment_error_display() {
        let err = EnvironmentError::Unavailable("brightness");
        assert_eq!(err.to_string(), "brightness is not available on this platform");
    }
}
