use thiserror::Error;

/// Result type alias using FitlogError
pub type Result<T> = std::result::Result<T, FitlogError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// This taxonomy provides a stable, structured classification of all errors
/// in Fitlog. Each kind maps to a stable error code that can be used for
/// programmatic error handling, testing, and user-facing reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlErrorKind {
    // Input
    InvalidInput,
    InvalidField,

    // Integration/IO
    Io,
    Serialization,
    Persistence,

    // Configuration
    Config,
}

impl FlErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            FlErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            FlErrorKind::InvalidField => "ERR_INVALID_FIELD",
            FlErrorKind::Io => "ERR_IO",
            FlErrorKind::Serialization => "ERR_SERIALIZATION",
            FlErrorKind::Persistence => "ERR_PERSISTENCE",
            FlErrorKind::Config => "ERR_CONFIG",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification for programmatic handling plus the operation,
/// collection, record and storage key involved, when known.
#[derive(Debug, Clone)]
pub struct FlError {
    kind: FlErrorKind,
    op: Option<String>,
    collection: Option<String>,
    record_id: Option<String>,
    storage_key: Option<String>,
    message: String,
    source: Option<Box<FlError>>,
}

impl FlError {
    /// Create a new error with the specified kind
    pub fn new(kind: FlErrorKind) -> Self {
        Self {
            kind,
            op: None,
            collection: None,
            record_id: None,
            storage_key: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add collection context
    pub fn with_collection(mut self, collection: impl Into<String>) -> Self {
        self.collection = Some(collection.into());
        self
    }

    /// Add record ID context
    pub fn with_record_id(mut self, id: impl Into<String>) -> Self {
        self.record_id = Some(id.into());
        self
    }

    /// Add storage key context
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = Some(key.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: FlError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> FlErrorKind {
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

    /// Get the collection context, if any
    pub fn collection(&self) -> Option<&str> {
        self.collection.as_deref()
    }

    /// Get the record ID context, if any
    pub fn record_id(&self) -> Option<&str> {
        self.record_id.as_deref()
    }

    /// Get the storage key context, if any
    pub fn storage_key(&self) -> Option<&str> {
        self.storage_key.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the source error, if any
    pub fn source_error(&self) -> Option<&FlError> {
        self.source.as_deref()
    }
}

impl std::fmt::Display for FlError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(collection) = &self.collection {
            write!(f, " (collection: {})", collection)?;
        }
        if let Some(record_id) = &self.record_id {
            write!(f, " (record_id: {})", record_id)?;
        }
        if let Some(key) = &self.storage_key {
            write!(f, " (storage_key: {})", key)?;
        }
        Ok(())
    }
}

impl std::error::Error for FlError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Domain-level error taxonomy for Fitlog operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FitlogError {
    /// A field value could not be parsed or is out of its domain
    #[error("Invalid value for field '{field}': {reason}")]
    InvalidField { field: String, reason: String },
}

impl FitlogError {
    /// Shorthand for an `InvalidField` error
    pub fn invalid_field(field: impl Into<String>, reason: impl Into<String>) -> Self {
        FitlogError::InvalidField {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Conversion from FitlogError to FlError
impl From<FitlogError> for FlError {
    fn from(err: FitlogError) -> Self {
        match err {
            FitlogError::InvalidField { field, reason } => FlError::new(FlErrorKind::InvalidField)
                .with_op("parse_field")
                .with_message(format!("Invalid value for field '{}': {}", field, reason)),
        }
    }
}
