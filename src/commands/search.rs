//! The search command: query parse, file discovery, per-file matching.

use crate::analyzers::analyzer_for;
use crate::core::{Language, MatchRecord, ParseFailure, SearchResults};
use crate::io::walker::FileWalker;
use crate::signature::{is_signature_match, parse_function_signature, Signature, SignatureStorage};
use anyhow::{anyhow, Context, Result};
use log::{debug, warn};
use rayon::prelude::*;
use std::path::{Path, PathBuf};

pub struct SearchConfig {
    pub path: PathBuf,
    pub pattern: String,
    pub languages: Vec<Language>,
    pub ignore_patterns: Vec<String>,
    pub parallel: bool,
}

/// Searches every candidate file under `config.path` for functions whose
/// signature matches `config.pattern`.
///
/// A malformed pattern is fatal. A file that cannot be read or parsed is
/// not: it lands in `SearchResults::failures` and the rest of the run
/// continues. Files are processed in parallel unless disabled; the query
/// signature is built once and shared read-only across workers.
pub fn search_project(config: &SearchConfig) -> Result<SearchResults> {
    let mut query_storage = SignatureStorage::new();
    let query = parse_function_signature(&mut query_storage, &config.pattern)
        .with_context(|| format!("invalid signature pattern `{}`", config.pattern))?;
    debug!("query signature: {query}");

    let files = FileWalker::new(config.path.clone())
        .with_languages(config.languages.clone())
        .with_ignore_patterns(config.ignore_patterns.clone())
        .walk()?;
    debug!("searching {} candidate files", files.len());

    let outcomes: Vec<FileOutcome> = if config.parallel {
        files.par_iter().map(|file| search_file(file, &query)).collect()
    } else {
        files.iter().map(|file| search_file(file, &query)).collect()
    };

    let mut matches = Vec::new();
    let mut failures = Vec::new();
    for outcome in outcomes {
        matches.extend(outcome.matches);
        failures.extend(outcome.failure);
    }
    matches.sort_by(|a, b| (&a.file, a.line).cmp(&(&b.file, b.line)));

    Ok(SearchResults {
        pattern: query.to_string(),
        files_searched: files.len(),
        matches,
        failures,
    })
}

struct FileOutcome {
    matches: Vec<MatchRecord>,
    failure: Option<ParseFailure>,
}

fn search_file(path: &Path, query: &Signature<'_>) -> FileOutcome {
    match scan_file(path, query) {
        Ok(matches) => FileOutcome {
            matches,
            failure: None,
        },
        Err(err) => {
            warn!("failed to search {}: {err:#}", path.display());
            FileOutcome {
                matches: Vec::new(),
                failure: Some(ParseFailure {
                    file: path.to_path_buf(),
                    message: format!("{err:#}"),
                }),
            }
        }
    }
}

fn scan_file(path: &Path, query: &Signature<'_>) -> Result<Vec<MatchRecord>> {
    let language = Language::from_path(path)
        .ok_or_else(|| anyhow!("unrecognized file extension for {}", path.display()))?;
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    let analyzer = analyzer_for(language);
    let decls = analyzer.parse(&content, path.to_path_buf())?;
    debug!("{}: {} declarations", path.display(), decls.len());

    let mut matches = Vec::new();
    let mut storage = SignatureStorage::new();
    for decl in decls {
        let candidate = storage.build(&decl.ret_type, &decl.param_types);
        if is_signature_match(query, &candidate) {
            matches.push(MatchRecord {
                signature: candidate.to_string(),
                name: decl.name,
                file: decl.file,
                line: decl.line,
            });
        }
    }
    Ok(matches)
}
