// ⚠️ Input Errors - Reject at the boundary
// Unknown region/housing keys and negative child counts never reach the estimator

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidInput {
    #[error("Unknown region: '{0}' (expected bratislava, zapad, stred or vychod)")]
    UnknownRegion(String),

    #[error("Unknown housing type: '{0}' (expected najom, hypoteka or rodicia)")]
    UnknownHousing(String),

    #[error("Number of children cannot be negative, got {0}")]
    NegativeChildren(i64),

    #[error("Number of children is out of range: {0}")]
    TooManyChildren(i64),
}

impl InvalidInput {
    /// Name of the offending input field
    pub fn field(&self) -> &'static str {
        match self {
            InvalidInput::UnknownRegion(_) => "region",
            InvalidInput::UnknownHousing(_) => "housing",
            InvalidInput::NegativeChildren(_) | InvalidInput::TooManyChildren(_) => "children",
        }
    }
}

pub type Result<T> = std::result::Result<T, InvalidInput>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_value() {
        let err = InvalidInput::UnknownRegion("praha".to_string());
        assert!(err.to_string().contains("praha"));
        assert_eq!(err.field(), "region");

        let err = InvalidInput::NegativeChildren(-2);
        assert!(err.to_string().contains("-2"));
        assert_eq!(err.field(), "children");
    }
}
