//! Signature pattern tokenizer.
//!
//! Splits a whole signature string like `int(int, char *)` into a return
//! type and an ordered argument list, respecting nested parentheses and
//! template angle brackets so that `void(std::map<int, int>)` is one
//! argument, not two.

use crate::errors::SignatureError;

use super::{Signature, SignatureStorage};

/// Parses a signature pattern into a [`Signature`] backed by `storage`.
///
/// The outermost parenthesis pair is found with a depth counter starting
/// at the first `(`; a missing `(` or a depth that never returns to zero
/// is a malformed signature. Argument tokens split at top-level commas
/// only, are trimmed, and empty tokens are dropped, so `void()` has zero
/// arguments and `f(,)` parses rather than erroring. The literal token
/// `*` is kept verbatim; only the matcher gives it meaning.
///
/// Resets the storage first.
pub fn parse_function_signature<'a>(
    storage: &'a mut SignatureStorage,
    input: &str,
) -> Result<Signature<'a>, SignatureError> {
    let open = input.find('(').ok_or_else(|| SignatureError::MissingParen {
        input: input.to_string(),
    })?;

    let mut depth = 0u32;
    let mut close = None;
    for (i, &b) in input.as_bytes().iter().enumerate().skip(open) {
        match b {
            b'(' => depth += 1,
            b')' => {
                depth -= 1;
                if depth == 0 {
                    close = Some(i);
                    break;
                }
            }
            _ => {}
        }
    }
    let close = close.ok_or_else(|| SignatureError::UnbalancedParens {
        input: input.to_string(),
    })?;

    storage.clear();
    storage.set_ret(&input[..open]);
    for token in TopLevelSplit::new(&input[open + 1..close]) {
        storage.push_arg(token);
    }
    Ok(storage.finish())
}

/// Iterator over an argument list's top-level comma-separated tokens.
///
/// Tracks nesting depth over `()` and `<>` so a comma inside a template
/// argument list or a function-pointer parameter list is not a separator.
/// Tokens are trimmed; empty tokens are skipped.
struct TopLevelSplit<'s> {
    rest: &'s str,
    done: bool,
}

impl<'s> TopLevelSplit<'s> {
    fn new(list: &'s str) -> Self {
        Self {
            rest: list,
            done: false,
        }
    }
}

impl<'s> Iterator for TopLevelSplit<'s> {
    type Item = &'s str;

    fn next(&mut self) -> Option<&'s str> {
        while !self.done {
            let mut depth = 0i32;
            let mut split = None;
            for (i, &b) in self.rest.as_bytes().iter().enumerate() {
                match b {
                    b'(' | b'<' => depth += 1,
                    b')' | b'>' => depth -= 1,
                    b',' if depth == 0 => {
                        split = Some(i);
                        break;
                    }
                    _ => {}
                }
            }
            let token = match split {
                Some(i) => {
                    let token = &self.rest[..i];
                    self.rest = &self.rest[i + 1..];
                    token
                }
                None => {
                    self.done = true;
                    self.rest
                }
            };
            let token = token.trim();
            if !token.is_empty() {
                return Some(token);
            }
        }
        None
    }
}
