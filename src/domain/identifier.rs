//! Identifier validation shared by every resource id handed out by the REST service

use thiserror::Error;

/// Errors that can occur when validating a resource identifier
#[derive(Debug, Error, Clone, PartialEq)]
pub enum IdentifierError {
    #[error("{kind} ID cannot be empty")]
    Empty { kind: &'static str },

    #[error("{kind} ID cannot exceed {max} characters")]
    TooLong { kind: &'static str, max: usize },

    #[error("{kind} ID cannot contain whitespace, control characters or any of {reserved}")]
    InvalidCharacters {
        kind: &'static str,
        reserved: &'static str,
    },
}

pub const MAX_IDENTIFIER_LENGTH: usize = 128;

/// Characters that would change the meaning of a request URL built from an id
const URL_RESERVED: &str = "/?#&%+";

fn is_identifier_char(c: char) -> bool {
    !c.is_whitespace() && !c.is_control() && !URL_RESERVED.contains(c)
}

/// Validate an identifier of the given kind ("Team", "Match", ...)
///
/// Ids are opaque strings owned by the REST service, so anything that can
/// sit in a URL path segment or query value is accepted.
pub fn validate_identifier(kind: &'static str, id: &str) -> Result<(), IdentifierError> {
    if id.is_empty() {
        return Err(IdentifierError::Empty { kind });
    }

    if id.len() > MAX_IDENTIFIER_LENGTH {
        return Err(IdentifierError::TooLong {
            kind,
            max: MAX_IDENTIFIER_LENGTH,
        });
    }

    if !id.chars().all(is_identifier_char) {
        return Err(IdentifierError::InvalidCharacters {
            kind,
            reserved: URL_RESERVED,
        });
    }

    Ok(())
}
