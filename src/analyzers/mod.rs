//! Language front-ends.
//!
//! The matching engine never parses C/C++ itself; it consumes function
//! declarations (return-type spelling, parameter-type spellings, file,
//! line) produced here by tree-sitter grammars.

pub mod c;
pub mod cpp;
mod decls;

use crate::core::{FunctionDecl, Language};
use anyhow::Result;
use std::path::PathBuf;

pub trait Analyzer: Send + Sync {
    /// Parses `content` and yields every function declaration found.
    fn parse(&self, content: &str, path: PathBuf) -> Result<Vec<FunctionDecl>>;

    fn language(&self) -> Language;
}

pub fn analyzer_for(language: Language) -> Box<dyn Analyzer> {
    match language {
        Language::C => Box::new(c::CAnalyzer::new()),
        Language::Cpp => Box::new(cpp::CppAnalyzer::new()),
    }
}
