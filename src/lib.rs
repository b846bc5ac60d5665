// Export modules for library usage
pub mod analyzers;
pub mod cli;
pub mod commands;
pub mod core;
pub mod errors;
pub mod io;
pub mod signature;

// Re-export commonly used types
pub use crate::core::arena::{ArenaStr, Scratch, StringArena};
pub use crate::core::{FunctionDecl, Language, MatchRecord, ParseFailure, SearchResults};

pub use crate::errors::SignatureError;

pub use crate::signature::{
    is_signature_match, normalize_type, parse_function_signature, Signature, SignatureStorage,
    WILDCARD,
};

pub use crate::analyzers::{analyzer_for, Analyzer};

pub use crate::commands::search::{search_project, SearchConfig};

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};
pub use crate::io::walker::FileWalker;
