use thiserror::Error;

/// Result type alias using PatternError
pub type Result<T> = std::result::Result<T, PatternError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that log lines and tests can match
/// on without depending on message wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Preconditions
    ReceiverNotConnected,
    InvalidMagnitude,
    InsufficientFunds,

    // Lookup
    NotFound,

    // Configuration
    InvalidConfig,

    // Integration/IO
    Io,

    // Arithmetic
    Overflow,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::ReceiverNotConnected => "ERR_RECEIVER_NOT_CONNECTED",
            ExErrorKind::InvalidMagnitude => "ERR_INVALID_MAGNITUDE",
            ExErrorKind::InsufficientFunds => "ERR_INSUFFICIENT_FUNDS",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::InvalidConfig => "ERR_INVALID_CONFIG",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Overflow => "ERR_OVERFLOW",
        }
    }

    /// Whether the caller can retry after fixing a precondition
    ///
    /// Recoverable failures are logged at WARN, everything else at ERROR.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ExErrorKind::ReceiverNotConnected
                | ExErrorKind::InvalidMagnitude
                | ExErrorKind::InsufficientFunds
        )
    }
}

/// Canonical structured error type
///
/// Carries the classification plus optional operation context. Produced from
/// [`PatternError`] for structured logging.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for pattern demos
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PatternError {
    /// An action was issued for a capability with no connected receiver
    #[error("Command `{action}` failed to execute: no {capability} receiver connected")]
    ReceiverNotConnected {
        action: String,
        capability: String,
    },

    /// An action magnitude was NaN or infinite, so it could never be reverted
    #[error("Command `{action}` rejected: magnitude {magnitude} is not finite")]
    InvalidMagnitude { action: String, magnitude: f64 },

    /// A round was attempted without enough money to pay for it
    #[error("Not enough money to play: round costs {required}, have {available}")]
    InsufficientFunds { required: i64, available: i64 },

    /// Settling a round would push the balance past the representable range
    #[error("Balance overflow: {balance} + {delta} does not fit")]
    BalanceOverflow { balance: i64, delta: i64 },

    /// No pattern in the catalogue matches the given name
    #[error("Pattern not found: {name}")]
    PatternNotFound { name: String },

    /// Configuration could not be parsed or holds an unusable value
    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    /// Writing demo output failed
    #[error("I/O error: {message}")]
    Io { message: String },
}

impl PatternError {
    /// Get the canonical kind for this error
    pub fn kind(&self) -> ExErrorKind {
        match self {
            PatternError::ReceiverNotConnected { .. } => ExErrorKind::ReceiverNotConnected,
            PatternError::InvalidMagnitude { .. } => ExErrorKind::InvalidMagnitude,
            PatternError::InsufficientFunds { .. } => ExErrorKind::InsufficientFunds,
            PatternError::BalanceOverflow { .. } => ExErrorKind::Overflow,
            PatternError::PatternNotFound { .. } => ExErrorKind::NotFound,
            PatternError::InvalidConfig { .. } => ExErrorKind::InvalidConfig,
            PatternError::Io { .. } => ExErrorKind::Io,
        }
    }
}

/// Conversion from PatternError to ExError
impl From<PatternError> for ExError {
    fn from(err: PatternError) -> Self {
        let kind = err.kind();
        match &err {
            PatternError::ReceiverNotConnected { action, .. }
            | PatternError::InvalidMagnitude { action, .. } => ExError::new(kind)
                .with_op(action.clone())
                .with_message(err.to_string()),
            PatternError::InsufficientFunds { .. } | PatternError::BalanceOverflow { .. } => {
                ExError::new(kind)
                    .with_op("play")
                    .with_message(err.to_string())
            }
            PatternError::PatternNotFound { .. } => ExError::new(kind)
                .with_op("find_pattern")
                .with_message(err.to_string()),
            PatternError::InvalidConfig { .. } | PatternError::Io { .. } => {
                ExError::new(kind).with_message(err.to_string())
            }
        }
    }
}

/// Conversion from std::io::Error to PatternError
impl From<std::io::Error> for PatternError {
    fn from(err: std::io::Error) -> Self {
        PatternError::Io {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_codes() {
        let cases = [
            (
                ExErrorKind::ReceiverNotConnected,
                "ERR_RECEIVER_NOT_CONNECTED",
            ),
            (ExErrorKind::InvalidMagnitude, "ERR_INVALID_MAGNITUDE"),
            (ExErrorKind::InsufficientFunds, "ERR_INSUFFICIENT_FUNDS"),
            (ExErrorKind::NotFound, "ERR_NOT_FOUND"),
            (ExErrorKind::InvalidConfig, "ERR_INVALID_CONFIG"),
            (ExErrorKind::Io, "ERR_IO"),
            (ExErrorKind::Overflow, "ERR_OVERFLOW"),
        ];
        for (kind, expected_code) in cases {
            assert_eq!(kind.code(), expected_code, "Wrong code for {:?}", kind);
        }
    }

    #[test]
    fn test_precondition_kinds_are_recoverable() {
        assert!(ExErrorKind::ReceiverNotConnected.is_recoverable());
        assert!(ExErrorKind::InvalidMagnitude.is_recoverable());
        assert!(ExErrorKind::InsufficientFunds.is_recoverable());
        assert!(!ExErrorKind::Io.is_recoverable());
        assert!(!ExErrorKind::Overflow.is_recoverable());
    }

    #[test]
    fn test_balance_overflow_maps_to_play() {
        let err = PatternError::BalanceOverflow {
            balance: i64::MAX,
            delta: 5,
        };
        let ex: ExError = err.into();
        assert_eq!(ex.kind(), ExErrorKind::Overflow);
        assert_eq!(ex.op(), Some("play"));
    }

    #[test]
    fn test_invalid_magnitude_names_action() {
        let err = PatternError::InvalidMagnitude {
            action: "move".to_string(),
            magnitude: f64::INFINITY,
        };
        assert_eq!(
            err.to_string(),
            "Command `move` rejected: magnitude inf is not finite"
        );
        let ex: ExError = err.into();
        assert_eq!(ex.op(), Some("move"));
        assert_eq!(ex.code(), "ERR_INVALID_MAGNITUDE");
    }

    #[test]
    fn test_receiver_not_connected_message_names_action() {
        let err = PatternError::ReceiverNotConnected {
            action: "rise".to_string(),
            capability: "vertical".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Command `rise` failed to execute: no vertical receiver connected"
        );
    }

    #[test]
    fn test_conversion_to_ex_error() {
        let err = PatternError::InsufficientFunds {
            required: 10,
            available: 5,
        };
        let ex: ExError = err.into();
        assert_eq!(ex.kind(), ExErrorKind::InsufficientFunds);
        assert_eq!(ex.code(), "ERR_INSUFFICIENT_FUNDS");
        assert_eq!(ex.op(), Some("play"));
        assert!(ex.to_string().starts_with("[ERR_INSUFFICIENT_FUNDS] in operation 'play'"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: PatternError = io.into();
        assert!(matches!(err, PatternError::Io { .. }));
        assert_eq!(err.kind(), ExErrorKind::Io);
    }
}
