use super::Error;

/// Error when resource configuration fails validation.
///
/// Every violation found in a configuration is reported, not only the first.
#[derive(Debug)]
pub(super) struct ValidationError {
    violations: Vec<Violation>,
}

/// A single attribute constraint violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// A required string attribute is empty.
    Empty { attribute: String },

    /// A string attribute holds a value outside the accepted set.
    NotOneOf {
        attribute: String,
        value: String,
        allowed: Vec<String>,
    },

    /// A string attribute holds a character it may not contain.
    Contains {
        attribute: String,
        value: String,
        character: char,
    },

    /// The attribute bag could not be bound to the configuration type.
    Malformed { message: String },
}

impl Violation {
    pub fn empty(attribute: impl Into<String>) -> Violation {
        Violation::Empty {
            attribute: attribute.into(),
        }
    }

    pub fn not_one_of(
        attribute: impl Into<String>,
        value: impl Into<String>,
        allowed: &[&str],
    ) -> Violation {
        Violation::NotOneOf {
            attribute: attribute.into(),
            value: value.into(),
            allowed: allowed.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn contains(
        attribute: impl Into<String>,
        value: impl Into<String>,
        character: char,
    ) -> Violation {
        Violation::Contains {
            attribute: attribute.into(),
            value: value.into(),
            character,
        }
    }

    pub fn malformed(message: impl Into<String>) -> Violation {
        Violation::Malformed {
            message: message.into(),
        }
    }
}

impl core::fmt::Display for Violation {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self {
            Violation::Empty { attribute } => write!(f, "{attribute:?} must not be empty"),
            Violation::NotOneOf {
                attribute,
                value,
                allowed,
            } => write!(f, "{attribute:?} expected one of {allowed:?}, got {value:?}"),
            Violation::Contains {
                attribute,
                value,
                character,
            } => write!(f, "{attribute:?} must not contain {character:?}, got {value:?}"),
            Violation::Malformed { message } => f.write_str(message),
        }
    }
}

impl std::error::Error for ValidationError {}

impl core::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("validation failed")?;
        let mut s = ": ";
        for violation in &self.violations {
            write!(f, "{s}{violation}")?;
            s = "; ";
        }
        Ok(())
    }
}

impl Error {
    /// Creates a validation error from the violations found in a configuration.
    pub fn validation(violations: Vec<Violation>) -> Error {
        Error::from(super::ErrorKind::Validation(ValidationError { violations }))
    }

    /// Returns `true` if this error, or any error it wraps, is a validation error.
    pub fn is_validation(&self) -> bool {
        self.any(|kind| matches!(kind, super::ErrorKind::Validation(_)))
    }

    /// Returns the violations carried by a validation error.
    pub fn violations(&self) -> &[Violation] {
        self.chain()
            .find_map(|err| match err.kind() {
                super::ErrorKind::Validation(err) => Some(&err.violations[..]),
                _ => None,
            })
            .unwrap_or(&[])
    }
}
