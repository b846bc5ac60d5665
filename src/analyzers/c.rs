use super::{decls, Analyzer};
use crate::core::{FunctionDecl, Language};
use anyhow::{anyhow, Context, Result};
use std::path::PathBuf;
use tree_sitter::Parser;

pub struct CAnalyzer;

impl CAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for CAnalyzer {
    fn parse(&self, content: &str, path: PathBuf) -> Result<Vec<FunctionDecl>> {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_c::LANGUAGE.into())
            .context("failed to load C grammar")?;
        let tree = parser
            .parse(content, None)
            .ok_or_else(|| anyhow!("C parser returned no tree for {}", path.display()))?;
        Ok(decls::collect_function_decls(&tree, content, &path))
    }

    fn language(&self) -> Language {
        Language::C
    }
}
