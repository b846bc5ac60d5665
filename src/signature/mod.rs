//! Signature representation and matching engine.
//!
//! A [`Signature`] holds one function's type shape: return type and
//! ordered argument types, each in both its raw spelling and its
//! normalized form. All text lives in the [`SignatureStorage`]'s arena;
//! the signature itself is a non-owning view, so comparing two signatures
//! allocates nothing.

pub mod matcher;
pub mod normalize;
pub mod tokenizer;

pub use matcher::{is_signature_match, WILDCARD};
pub use normalize::normalize_type;
pub use tokenizer::parse_function_signature;

use crate::core::arena::{ArenaStr, StringArena};
use std::fmt;

/// Arena-backed builder for one [`Signature`].
///
/// Owns the arena and the raw/normalized argument tables. The tables are
/// filled in lockstep during construction, so the length invariant between
/// them holds structurally. Reusable across candidates in a hot loop via
/// [`clear`](SignatureStorage::clear); the borrow checker guarantees no
/// signature built before a clear can be read after it.
#[derive(Default)]
pub struct SignatureStorage {
    arena: StringArena,
    ret: ArenaStr,
    ret_norm: ArenaStr,
    args: Vec<ArenaStr>,
    args_norm: Vec<ArenaStr>,
}

impl SignatureStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a signature from spellings already split by position, as a
    /// source parser reports them. The spellings are not re-tokenized;
    /// only user-supplied pattern strings go through the tokenizer.
    ///
    /// Resets the storage first, so any previously built signature is
    /// gone.
    pub fn build<I, S>(&mut self, ret_type: &str, arg_types: I) -> Signature<'_>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.clear();
        self.set_ret(ret_type);
        for arg in arg_types {
            self.push_arg(arg.as_ref());
        }
        Signature { storage: self }
    }

    /// Drops all stored text and argument tables.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.ret = ArenaStr::default();
        self.ret_norm = ArenaStr::default();
        self.args.clear();
        self.args_norm.clear();
    }

    /// Access to the backing arena, e.g. for standalone normalization.
    pub fn arena_mut(&mut self) -> &mut StringArena {
        &mut self.arena
    }

    fn set_ret(&mut self, text: &str) {
        let trimmed = text.trim();
        self.ret = self.arena.intern(trimmed);
        self.ret_norm = normalize_type(&mut self.arena, trimmed);
    }

    fn push_arg(&mut self, text: &str) {
        let trimmed = text.trim();
        let raw = self.arena.intern(trimmed);
        let norm = normalize_type(&mut self.arena, trimmed);
        self.args.push(raw);
        self.args_norm.push(norm);
    }

    fn finish(&mut self) -> Signature<'_> {
        Signature { storage: self }
    }
}

/// One function's type shape, borrowed from its storage.
///
/// Immutable once constructed; normalization happened at construction
/// time, so every accessor is an O(1) arena slice.
#[derive(Clone, Copy)]
pub struct Signature<'a> {
    storage: &'a SignatureStorage,
}

impl<'a> Signature<'a> {
    /// Raw return type spelling, as written.
    pub fn ret_type(&self) -> &'a str {
        self.storage.arena.resolve(self.storage.ret)
    }

    /// Normalized return type.
    pub fn ret_type_norm(&self) -> &'a str {
        self.storage.arena.resolve(self.storage.ret_norm)
    }

    pub fn arg_count(&self) -> usize {
        self.storage.args.len()
    }

    /// Raw spelling of the argument at `index`.
    pub fn arg(&self, index: usize) -> &'a str {
        self.storage.arena.resolve(self.storage.args[index])
    }

    /// Normalized argument at `index`.
    pub fn arg_norm(&self, index: usize) -> &'a str {
        self.storage.arena.resolve(self.storage.args_norm[index])
    }

    /// Raw argument spellings in positional order.
    pub fn args(&self) -> impl Iterator<Item = &'a str> {
        let storage = self.storage;
        storage.args.iter().map(move |&view| storage.arena.resolve(view))
    }
}

impl fmt::Display for Signature<'_> {
    /// Renders `RetType(Arg0, Arg1, ..., ArgN-1)` from the raw stored
    /// text. Display only; never a comparison key.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.ret_type())?;
        for (i, arg) in self.args().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(arg)?;
        }
        f.write_str(")")
    }
}

impl fmt::Debug for Signature<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Signature({self})")
    }
}
