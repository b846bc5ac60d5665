pub mod arena;

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Language {
    C,
    Cpp,
}

impl Language {
    pub fn from_extension(ext: &str) -> Option<Language> {
        match ext {
            "c" | "h" => Some(Language::C),
            "cc" | "cpp" | "cxx" | "c++" | "hpp" | "hh" | "hxx" => Some(Language::Cpp),
            _ => None,
        }
    }

    pub fn from_path(path: &Path) -> Option<Language> {
        path.extension()
            .and_then(|ext| Language::from_extension(&ext.to_string_lossy()))
    }

    pub fn from_name(name: &str) -> Option<Language> {
        match name.to_lowercase().as_str() {
            "c" => Some(Language::C),
            "cpp" | "c++" | "cxx" => Some(Language::Cpp),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Language::C => "c",
            Language::Cpp => "cpp",
        }
    }
}

/// One function declaration as reported by a language front-end: the
/// return-type spelling, the ordered parameter-type spellings, and where
/// it was declared.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FunctionDecl {
    pub name: String,
    pub ret_type: String,
    pub param_types: Vec<String>,
    pub file: PathBuf,
    pub line: usize,
}

/// A declaration that matched the query, rendered for output.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub name: String,
    pub signature: String,
    pub file: PathBuf,
    pub line: usize,
}

/// A candidate file that could not be read or parsed. Failures do not
/// abort the run; they accumulate and are surfaced once at the end.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseFailure {
    pub file: PathBuf,
    pub message: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchResults {
    pub pattern: String,
    pub files_searched: usize,
    pub matches: Vec<MatchRecord>,
    pub failures: Vec<ParseFailure>,
}
