//! Application error taxonomy.
//!
//! Every error carries an [`ErrorKind`], which maps to a stable machine-readable
//! code, and a message that is safe to show to users. Messages are free text
//! and may still echo user input, so log them through
//! [`SanitizedDisplay`](crate::SanitizedDisplay) when the `redaction` feature
//! is on.

use std::{borrow::Cow, fmt};

/// Category of an application error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Input data failed validation.
    Validation,
    /// The caller is not authenticated.
    Authentication,
    /// The caller lacks permission for the operation.
    Authorization,
    /// Settings are missing or malformed.
    Configuration,
    /// A collaborating service failed.
    ExternalService,
    /// A business rule was violated.
    BusinessLogic,
}

impl ErrorKind {
    /// Machine-readable code, suitable for logs and exit reporting.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Validation => "VALIDATION_ERROR",
            Self::Authentication => "AUTHENTICATION_ERROR",
            Self::Authorization => "AUTHORIZATION_ERROR",
            Self::Configuration => "CONFIGURATION_ERROR",
            Self::ExternalService => "EXTERNAL_SERVICE_ERROR",
            Self::BusinessLogic => "BUSINESS_LOGIC_ERROR",
        }
    }

    /// Message used when none is supplied.
    #[must_use]
    pub const fn default_message(self) -> &'static str {
        match self {
            Self::Validation => "input data is invalid",
            Self::Authentication => "authentication is required",
            Self::Authorization => "you do not have permission to perform this operation",
            Self::Configuration => "there is a problem with the configuration",
            Self::ExternalService => "communication with an external service failed",
            Self::BusinessLogic => "a business rule was violated",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// An application error: a kind plus a user-safe message.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct Error {
    kind: ErrorKind,
    message: Cow<'static, str>,
}

impl Error {
    /// Creates an error with an explicit message.
    pub fn new(kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    pub fn authentication(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Authentication, message)
    }

    pub fn authorization(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Authorization, message)
    }

    pub fn configuration(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }

    pub fn external_service(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::ExternalService, message)
    }

    /// Business rule errors have no meaningful default, so a message is required.
    pub fn business_logic(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::BusinessLogic, message)
    }

    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    #[must_use]
    pub const fn code(&self) -> &'static str {
        self.kind.code()
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind, kind.default_message())
    }
}

#[cfg(feature = "redaction")]
impl crate::SanitizedDisplay for Error {
    fn fmt_sanitized(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}",
            self.code(),
            crate::sanitize_log_message(&self.message)
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
