use std::fmt;

/// Message used when a failure carries no text at all.
pub const UNKNOWN_FAILURE_MESSAGE: &str = "unknown error";

/// Normalized form of the failure the caller is handling.
///
/// The message is never empty: an error's `Display` output is preferred, then its `Debug`
/// output, then [`UNKNOWN_FAILURE_MESSAGE`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    message: String,
}

impl Failure {
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            return Self { message: UNKNOWN_FAILURE_MESSAGE.to_string() };
        }
        Self { message }
    }

    pub fn from_error<E: std::error::Error + ?Sized>(error: &E) -> Self {
        let message = error.to_string();
        if !message.trim().is_empty() {
            return Self { message };
        }
        Self::new(format!("{error:?}"))
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl From<&str> for Failure {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for Failure {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, thiserror::Error)]
    #[error("upstream returned garbage")]
    struct Garbage;

    #[derive(Debug, thiserror::Error)]
    #[error("")]
    struct Silent {
        #[allow(dead_code)]
        code: u32,
    }

    #[test]
    fn test_message_from_display() {
        assert_eq!(Failure::from_error(&Garbage).message(), "upstream returned garbage");
        assert_eq!(Failure::new("boom").message(), "boom");
    }

    #[test]
    fn test_empty_display_falls_back_to_debug() {
        let failure = Failure::from_error(&Silent { code: 7 });
        assert_eq!(failure.message(), "Silent { code: 7 }");
    }

    #[test]
    fn test_never_empty() {
        assert_eq!(Failure::new("").message(), UNKNOWN_FAILURE_MESSAGE);
        assert_eq!(Failure::from("   ").message(), UNKNOWN_FAILURE_MESSAGE);
    }

    #[test]
    fn test_boxed_error() {
        let error: Box<dyn std::error::Error> = "dns lookup failed".into();
        assert_eq!(Failure::from_error(error.as_ref()).to_string(), "dns lookup failed");
    }
}
