use thiserror::Error;

/// Errors from tokenizing a user-supplied signature pattern.
///
/// Both variants mean the same thing to a caller: the pattern is malformed
/// and this parse attempt is over. Whether that aborts the run or skips
/// one query is the caller's decision.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignatureError {
    #[error("malformed signature `{input}`: expected '(' after the return type")]
    MissingParen { input: String },

    #[error("malformed signature `{input}`: unbalanced parentheses")]
    UnbalancedParens { input: String },
}

impl SignatureError {
    pub fn input(&self) -> &str {
        match self {
            SignatureError::MissingParen { input } => input,
            SignatureError::UnbalancedParens { input } => input,
        }
    }
}
