//! Error types for generation and shrinking.

use std::fmt;

/// Failure raised while drawing a value from a strategy
#[derive(Debug, Clone, PartialEq)]
pub enum GenerationError {
    /// A filtered strategy found no acceptable value within its attempt budget
    ///
    /// Whether the predicate is satisfiable for the underlying strategy is the
    /// caller's responsibility; an unsatisfiable predicate surfaces here.
    Exhausted {
        attempts: usize,
        context: Option<String>,
    },
}

impl GenerationError {
    /// Create an exhaustion error without context
    pub fn exhausted(attempts: usize) -> Self {
        Self::Exhausted {
            attempts,
            context: None,
        }
    }

    /// Create an exhaustion error with context
    pub fn exhausted_with_context(attempts: usize, context: impl Into<String>) -> Self {
        Self::Exhausted {
            attempts,
            context: Some(context.into()),
        }
    }

    /// Number of samples drawn before giving up
    pub fn attempts(&self) -> usize {
        match self {
            GenerationError::Exhausted { attempts, .. } => *attempts,
        }
    }
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerationError::Exhausted { attempts, context } => {
                write!(f, "Generation exhausted after {} attempts", attempts)?;
                if let Some(ctx) = context {
                    write!(f, " (context: {})", ctx)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for GenerationError {}

/// Error type reported to consumers that evaluate properties
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyError {
    /// Property failed with a specific message and optional context
    PropertyFailed {
        message: String,
        context: Option<String>,
    },

    /// Test data could not be generated, as opposed to the property failing
    GenerationFailed(GenerationError),

    /// Internal error in the sampling machinery
    InternalError { message: String },
}

impl PropertyError {
    /// Create a simple property failed error
    pub fn property_failed(message: impl Into<String>) -> Self {
        Self::PropertyFailed {
            message: message.into(),
            context: None,
        }
    }

    /// Create a property failed error with context
    pub fn property_failed_with_context(
        message: impl Into<String>,
        context: impl Into<String>,
    ) -> Self {
        Self::PropertyFailed {
            message: message.into(),
            context: Some(context.into()),
        }
    }

    /// Create an internal error
    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::InternalError {
            message: message.into(),
        }
    }

    /// Whether this error came from generation rather than the property
    pub fn is_generation_failure(&self) -> bool {
        matches!(self, PropertyError::GenerationFailed(_))
    }
}

impl fmt::Display for PropertyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyError::PropertyFailed { message, context } => {
                write!(f, "Property failed: {}", message)?;
                if let Some(ctx) = context {
                    write!(f, " (context: {})", ctx)?;
                }
                Ok(())
            }
            PropertyError::GenerationFailed(error) => {
                write!(f, "Generation failed: {}", error)
            }
            PropertyError::InternalError { message } => {
                write!(f, "Internal error: {}", message)
            }
        }
    }
}

impl std::error::Error for PropertyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PropertyError::GenerationFailed(error) => Some(error),
            _ => None,
        }
    }
}

impl From<GenerationError> for PropertyError {
    fn from(error: GenerationError) -> Self {
        PropertyError::GenerationFailed(error)
    }
}
