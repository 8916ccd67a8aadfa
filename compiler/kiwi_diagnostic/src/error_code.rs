use std::fmt;

/// Error codes for front-end diagnostics.
///
/// E1xxx are parser errors, E9xxx internal errors.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    /// Unexpected token
    E1001,
    /// Unexpected end of input
    E1002,
    /// Reserved keyword where an identifier was expected
    E1003,
    /// Invalid grammar configuration
    E9001,
}

impl ErrorCode {
    /// Check if this is a parser error code.
    pub fn is_parser_error(&self) -> bool {
        matches!(self, ErrorCode::E1001 | ErrorCode::E1002 | ErrorCode::E1003)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E9001 => "E9001",
        }
    }

    /// Short human-readable title for the code.
    pub fn title(&self) -> &'static str {
        match self {
            ErrorCode::E1001 => "unexpected token",
            ErrorCode::E1002 => "unexpected end of input",
            ErrorCode::E1003 => "reserved keyword used as identifier",
            ErrorCode::E9001 => "invalid grammar configuration",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::ErrorCode;

    #[test]
    fn display_matches_as_str() {
        assert_eq!(ErrorCode::E1001.to_string(), "E1001");
        assert_eq!(ErrorCode::E9001.to_string(), "E9001");
    }

    #[test]
    fn parser_error_classification() {
        assert!(ErrorCode::E1001.is_parser_error());
        assert!(ErrorCode::E1002.is_parser_error());
        assert!(ErrorCode::E1003.is_parser_error());
        assert!(!ErrorCode::E9001.is_parser_error());
    }
}
