//! Wildcard-aware structural equality over signatures.

use super::Signature;

/// A query argument consisting of this single character matches any
/// candidate type at that position.
pub const WILDCARD: &str = "*";

/// Checks whether `candidate` matches `query`.
///
/// True iff the normalized return types are equal, the argument counts
/// are equal, and every position is either wildcarded in the query or
/// equal under normalization. The wildcard test reads the query's raw
/// token and runs before the normalized comparison, so a wildcarded
/// position never looks at the candidate's spelling at all. Equality is
/// exact string equality over normalized text; order is significant.
///
/// Pure and allocation-free; the two signatures may live in independent
/// storages.
pub fn is_signature_match(query: &Signature<'_>, candidate: &Signature<'_>) -> bool {
    if query.ret_type_norm() != candidate.ret_type_norm() {
        return false;
    }
    if query.arg_count() != candidate.arg_count() {
        return false;
    }
    (0..query.arg_count())
        .all(|i| query.arg(i) == WILDCARD || query.arg_norm(i) == candidate.arg_norm(i))
}

#[cfg(test)]
mod tests {
    use crate::signature::{parse_function_signature, SignatureStorage};

    use super::*;

    fn matches(query: &str, candidate: &str) -> bool {
        let mut query_storage = SignatureStorage::new();
        let query = parse_function_signature(&mut query_storage, query).unwrap();
        let mut candidate_storage = SignatureStorage::new();
        let candidate = parse_function_signature(&mut candidate_storage, candidate).unwrap();
        is_signature_match(&query, &candidate)
    }

    #[test]
    fn wildcard_checks_raw_text_before_normalization() {
        // The candidate's argument would normalize oddly; a wildcard must
        // never look at it.
        assert!(matches("void(*)", "void(const struct   Node *)"));
    }

    #[test]
    fn wildcard_does_not_relax_arity() {
        assert!(!matches("int(*)", "int(int, int)"));
        assert!(!matches("int(*, *)", "int(int)"));
    }

    #[test]
    fn order_is_significant() {
        assert!(matches("int(int, char)", "int(int, char)"));
        assert!(!matches("int(int, char)", "int(char, int)"));
    }
}
