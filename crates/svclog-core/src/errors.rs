use thiserror::Error;

/// Result type alias using SvcLogError
pub type Result<T> = std::result::Result<T, SvcLogError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code used for programmatic handling,
/// structured log fields and test assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Structural/Validation
    InvalidInput,
    NotFound,
    AlreadyExists,

    // Integration/IO
    Io,
    Serialization,
    Persistence,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::AlreadyExists => "ERR_ALREADY_EXISTS",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification for programmatic handling plus context for
/// debugging. The storage layer reports all of its failures with this type.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity ID context (a log id, draft id or storage key)
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

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
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity_id: {})", entity_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Domain errors raised by the service log core
///
/// Validation failures are not errors: `rules::validation::validate` reports
/// them as a normal result. These variants cover the remaining failure modes.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SvcLogError {
    /// A log with this id is already in the log store
    #[error("Service log already exists: {log_id}")]
    LogAlreadyExists { log_id: String },

    /// No log with this id is in the log store
    #[error("Service log not found: {log_id}")]
    LogNotFound { log_id: String },

    /// A committed log needs both calendar dates
    #[error("Cannot build a service log without a {field}")]
    MissingDate { field: String },

    /// Settings failed to parse or hold out-of-range values
    #[error("Invalid settings: {reason}")]
    InvalidSettings { reason: String },
}

impl From<SvcLogError> for ExError {
    fn from(err: SvcLogError) -> Self {
        match err {
            SvcLogError::LogAlreadyExists { log_id } => ExError::new(ExErrorKind::AlreadyExists)
                .with_entity_id(log_id)
                .with_message("Service log id collides with an existing entry"),

            SvcLogError::LogNotFound { log_id } => ExError::new(ExErrorKind::NotFound)
                .with_entity_id(log_id)
                .with_message("Service log not found"),

            SvcLogError::MissingDate { field } => ExError::new(ExErrorKind::InvalidInput)
                .with_message(format!("Missing {}", field)),

            SvcLogError::InvalidSettings { reason } => {
                ExError::new(ExErrorKind::InvalidInput).with_message(reason)
            }
        }
    }
}

impl From<toml::de::Error> for SvcLogError {
    fn from(err: toml::de::Error) -> Self {
        SvcLogError::InvalidSettings {
            reason: err.to_string(),
        }
    }
}
