//! Error types for size operations.
//!
//! Every fallible operation returns `Result<_, SizeError>`. A failed
//! operation never yields a partially built [`Size`](crate::Size) and
//! never modifies the receiver of an in-place operator.

/// Result type alias for size operations.
pub type SizeResult<T> = Result<T, SizeError>;

/// Error type for all size operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum SizeError {
    /// Malformed or unrecognized size specification, unit or factor text.
    #[error("invalid size specification '{input}': {reason}")]
    InvalidSpec {
        /// Text that was rejected.
        input: String,
        /// What was wrong with it.
        reason: String,
    },

    /// Result does not fit the requested fixed-width type.
    #[error("{operation} overflows u64: {value}")]
    Overflow {
        /// Operation that produced the value.
        operation: &'static str,
        /// Exact decimal rendering of the value that did not fit.
        value: String,
    },

    /// Division, modulo or rounding against a zero divisor or alignment.
    #[error("division by zero in {operation}")]
    ZeroDivision {
        /// Operation that received the zero operand.
        operation: &'static str,
    },

    /// Host could not provide memory for an intermediate buffer.
    #[error("failed to allocate memory for {context}")]
    AllocationFailure {
        /// What the allocation was for.
        context: &'static str,
    },
}

/// Discriminant of a [`SizeError`], for programmatic matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SizeErrorKind {
    /// See [`SizeError::InvalidSpec`].
    InvalidSpec,
    /// See [`SizeError::Overflow`].
    Overflow,
    /// See [`SizeError::ZeroDivision`].
    ZeroDivision,
    /// See [`SizeError::AllocationFailure`].
    AllocationFailure,
}

impl SizeError {
    /// Convenience constructor for [`SizeError::InvalidSpec`].
    pub fn invalid_spec(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidSpec {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Convenience constructor for [`SizeError::Overflow`].
    pub fn overflow(operation: &'static str, value: impl ToString) -> Self {
        Self::Overflow {
            operation,
            value: value.to_string(),
        }
    }

    /// Convenience constructor for [`SizeError::ZeroDivision`].
    pub const fn zero_division(operation: &'static str) -> Self {
        Self::ZeroDivision { operation }
    }

    /// Convenience constructor for [`SizeError::AllocationFailure`].
    pub const fn allocation_failure(context: &'static str) -> Self {
        Self::AllocationFailure { context }
    }

    /// The kind of failure, without its message payload.
    #[must_use]
    pub const fn kind(&self) -> SizeErrorKind {
        match self {
            Self::InvalidSpec { .. } => SizeErrorKind::InvalidSpec,
            Self::Overflow { .. } => SizeErrorKind::Overflow,
            Self::ZeroDivision { .. } => SizeErrorKind::ZeroDivision,
            Self::AllocationFailure { .. } => SizeErrorKind::AllocationFailure,
        }
    }
}

impl From<std::collections::TryReserveError> for SizeError {
    fn from(_: std::collections::TryReserveError) -> Self {
        Self::allocation_failure("string buffer")
    }
}
