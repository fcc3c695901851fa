// Infrastructure implementations for awaitcheck.

pub mod concurrency;
pub mod source_loader;

use anyhow::{bail, Context, Result};
use tree_sitter::{Parser, Tree};

use crate::ports::SourceParser;

/// Parsing front end backed by the tree-sitter C# grammar.
pub struct CSharpParser;

impl CSharpParser {
    fn grammar() -> Result<Parser> {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_c_sharp::LANGUAGE.into())
            .context("Failed to load the C# grammar")?;
        Ok(parser)
    }
}

impl SourceParser for CSharpParser {
    /// Parse one file's text. A tree containing error nodes fails the whole
    /// file: the checker core has no defined behavior on malformed input.
    fn parse(&self, source: &str, file: &str) -> Result<Tree> {
        let mut parser = Self::grammar()?;
        let tree = match parser.parse(source, None) {
            Some(tree) => tree,
            None => bail!("Parser produced no tree for {}", file),
        };
        if tree.root_node().has_error() {
            bail!("Syntax error in {}", file);
        }
        Ok(tree)
    }
}
