use rolodex_core_types::RequestId;
use thiserror::Error;

/// Result type alias using RolodexError
pub type Result<T> = std::result::Result<T, RolodexError>;

/// Literal template for a generic save failure.
pub const FILE_OPS_ERROR_FORMAT: &str = "Could not save data due to the following error: {}";

/// Literal template for a save failure caused by missing permissions.
pub const FILE_OPS_PERMISSION_ERROR_FORMAT: &str =
    "Could not save data to file {} due to insufficient permissions to write to the file or the folder.";

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling, testing, and log correlation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Parsing
    InvalidInput,
    UnknownCommand,
    InvalidIndex,
    InvalidConfirmation,
    InvalidField,
    DuplicatePrefix,

    // Business rules
    InvalidDisplayedIndex,
    DuplicateRecord,
    NotFound,
    NoFieldEdited,
    NothingToUndo,

    // Persistence
    PermissionDenied,
    Io,
    DataLoad,
    Serialization,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::UnknownCommand => "ERR_UNKNOWN_COMMAND",
            ExErrorKind::InvalidIndex => "ERR_INVALID_INDEX",
            ExErrorKind::InvalidConfirmation => "ERR_INVALID_CONFIRMATION",
            ExErrorKind::InvalidField => "ERR_INVALID_FIELD",
            ExErrorKind::DuplicatePrefix => "ERR_DUPLICATE_PREFIX",
            ExErrorKind::InvalidDisplayedIndex => "ERR_INVALID_DISPLAYED_INDEX",
            ExErrorKind::DuplicateRecord => "ERR_DUPLICATE_RECORD",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::NoFieldEdited => "ERR_NO_FIELD_EDITED",
            ExErrorKind::NothingToUndo => "ERR_NOTHING_TO_UNDO",
            ExErrorKind::PermissionDenied => "ERR_PERMISSION_DENIED",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::DataLoad => "ERR_DATA_LOAD",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification plus optional context (operation, file path,
/// request id) for programmatic handling. The store crate reports every
/// failure in this shape.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    path: Option<String>,
    request_id: Option<RequestId>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            path: None,
            request_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add the file path the failure relates to
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Add request ID context
    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
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

    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
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
        if let Some(path) = &self.path {
            write!(f, " (path: {})", path)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Which side of the engine boundary an error belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Malformed or unrecognised input; nothing was executed
    Parse,
    /// The command was understood but could not be carried out, or its
    /// result could not be persisted
    Execution,
}

/// Error taxonomy for Rolodex operations
///
/// The `Display` output of every variant is the message shown to the user.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RolodexError {
    // ===== Parse Errors =====
    #[error("Invalid command format! \n{usage}")]
    InvalidCommandFormat { usage: String },

    #[error("Unknown command")]
    UnknownCommand { word: String },

    #[error("Index is not a non-zero unsigned integer.")]
    InvalidIndex { input: String },

    #[error("Invalid confirmation input. Please enter 'y' or 'n'.")]
    InvalidConfirmation { input: String },

    /// A field value failed its constraints; `reason` is the field's
    /// constraint message
    #[error("{reason}")]
    InvalidField { field: String, reason: String },

    #[error("Multiple values specified for the following single-valued field(s): {prefixes}")]
    DuplicatePrefixes { prefixes: String },

    // ===== Execution Errors =====
    #[error("The person index provided is invalid")]
    InvalidPersonDisplayedIndex { index: usize },

    #[error("This person already exists in the address book")]
    DuplicatePerson { name: String },

    #[error("Person not found in the address book: {name}")]
    PersonNotFound { name: String },

    #[error("At least one field to edit must be provided.")]
    NoFieldEdited,

    #[error("No command to undo!")]
    NothingToUndo,

    // ===== Persistence Errors =====
    #[error("Could not save data to file {path} due to insufficient permissions to write to the file or the folder.")]
    FilePermission { path: String },

    #[error("Could not save data due to the following error: {message}")]
    FileOps { message: String },

    #[error("Could not load data: {message}")]
    DataLoad { message: String },

    // ===== Internal Errors =====
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl RolodexError {
    /// Classify the error as a parse or an execution failure
    pub fn category(&self) -> ErrorCategory {
        match self {
            RolodexError::InvalidCommandFormat { .. }
            | RolodexError::UnknownCommand { .. }
            | RolodexError::InvalidIndex { .. }
            | RolodexError::InvalidConfirmation { .. }
            | RolodexError::InvalidField { .. }
            | RolodexError::DuplicatePrefixes { .. } => ErrorCategory::Parse,
            _ => ErrorCategory::Execution,
        }
    }

    pub fn is_parse_error(&self) -> bool {
        self.category() == ErrorCategory::Parse
    }

    /// Build an `InvalidCommandFormat` error carrying a command's usage text
    pub fn invalid_format(usage: impl Into<String>) -> Self {
        RolodexError::InvalidCommandFormat {
            usage: usage.into(),
        }
    }

    /// Build an `InvalidField` error for `field` with its constraint message
    pub fn invalid_field(field: &str, reason: impl Into<String>) -> Self {
        RolodexError::InvalidField {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}

impl From<RolodexError> for ExError {
    fn from(err: RolodexError) -> Self {
        let message = err.to_string();
        match err {
            RolodexError::InvalidCommandFormat { .. } => {
                ExError::new(ExErrorKind::InvalidInput).with_message(message)
            }
            RolodexError::UnknownCommand { word } => ExError::new(ExErrorKind::UnknownCommand)
                .with_op("parse_command")
                .with_message(format!("{}: {}", message, word)),
            RolodexError::InvalidIndex { .. } => {
                ExError::new(ExErrorKind::InvalidIndex).with_message(message)
            }
            RolodexError::InvalidConfirmation { .. } => {
                ExError::new(ExErrorKind::InvalidConfirmation)
                    .with_op("parse_confirmation")
                    .with_message(message)
            }
            RolodexError::InvalidField { field, reason } => {
                ExError::new(ExErrorKind::InvalidField)
                    .with_message(format!("{}: {}", field, reason))
            }
            RolodexError::DuplicatePrefixes { .. } => {
                ExError::new(ExErrorKind::DuplicatePrefix).with_message(message)
            }
            RolodexError::InvalidPersonDisplayedIndex { index } => {
                ExError::new(ExErrorKind::InvalidDisplayedIndex)
                    .with_message(format!("{} ({})", message, index))
            }
            RolodexError::DuplicatePerson { .. } => {
                ExError::new(ExErrorKind::DuplicateRecord).with_message(message)
            }
            RolodexError::PersonNotFound { .. } => {
                ExError::new(ExErrorKind::NotFound).with_message(message)
            }
            RolodexError::NoFieldEdited => {
                ExError::new(ExErrorKind::NoFieldEdited).with_message(message)
            }
            RolodexError::NothingToUndo => ExError::new(ExErrorKind::NothingToUndo)
                .with_op("undo")
                .with_message(message),
            RolodexError::FilePermission { path } => ExError::new(ExErrorKind::PermissionDenied)
                .with_path(path)
                .with_message(message),
            RolodexError::FileOps { .. } => ExError::new(ExErrorKind::Io).with_message(message),
            RolodexError::DataLoad { .. } => {
                ExError::new(ExErrorKind::DataLoad).with_message(message)
            }
            RolodexError::Serialization { .. } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }
            RolodexError::Internal { .. } => {
                ExError::new(ExErrorKind::Internal).with_message(message)
            }
        }
    }
}

/// Conversion from a structured persistence error back into the user-facing
/// taxonomy
///
/// Permission denials keep the offending path, every other I/O failure keeps
/// the underlying message.
impl From<ExError> for RolodexError {
    fn from(err: ExError) -> Self {
        match err.kind() {
            ExErrorKind::PermissionDenied => RolodexError::FilePermission {
                path: err.path().unwrap_or_default().to_string(),
            },
            ExErrorKind::Io => RolodexError::FileOps {
                message: err.message().to_string(),
            },
            ExErrorKind::DataLoad => RolodexError::DataLoad {
                message: err.message().to_string(),
            },
            ExErrorKind::Serialization => RolodexError::Serialization {
                message: err.message().to_string(),
            },
            _ => RolodexError::Internal {
                message: err.to_string(),
            },
        }
    }
}

impl From<serde_json::Error> for RolodexError {
    fn from(err: serde_json::Error) -> Self {
        RolodexError::Serialization {
            message: err.to_string(),
        }
    }
}
