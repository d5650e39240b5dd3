//! tree-sitter C front end
//!
//! Wraps the C grammar behind [`CParser`] and hands the rest of the crate a
//! [`SourceUnit`]: the parsed tree together with the original text and the
//! name locations resolve to. Input that does not parse cleanly is rejected
//! here, so classification never runs against a broken tree.

use std::fs;
use std::path::Path;
use thiserror::Error;
use tree_sitter::{Node, Tree};

#[derive(Error, Debug)]
pub enum ParserError {
    #[error("failed to read source file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to load C grammar: {0}")]
    Language(#[from] tree_sitter::LanguageError),

    #[error("parser produced no syntax tree for '{0}'")]
    Parse(String),

    #[error("'{0}' contains syntax errors")]
    Syntax(String),
}

/// One parsed translation unit.
#[derive(Debug)]
pub struct SourceUnit {
    name: String,
    text: String,
    tree: Tree,
}

impl SourceUnit {
    pub fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// File name a node's location resolves to. `None` for units built from
    /// an unnamed buffer; callers fall back to the last resolved name.
    pub fn file_name(&self) -> Option<&str> {
        if self.name.is_empty() {
            None
        } else {
            Some(&self.name)
        }
    }

    pub fn node_text(&self, node: Node<'_>) -> &str {
        node.utf8_text(self.text.as_bytes()).unwrap_or("")
    }

    /// Name of a `function_definition` node, descending through pointer and
    /// array declarators to the function declarator's identifier.
    pub fn function_name(&self, node: Node<'_>) -> Option<String> {
        let mut decl = node.child_by_field_name("declarator")?;
        while decl.kind() != "function_declarator" {
            decl = decl.child_by_field_name("declarator")?;
        }
        let name = decl.child_by_field_name("declarator")?;
        Some(self.node_text(name).to_string())
    }
}

/// C parser wrapper
pub struct CParser {
    parser: tree_sitter::Parser,
}

impl CParser {
    pub fn new() -> Result<Self, ParserError> {
        let mut parser = tree_sitter::Parser::new();
        parser.set_language(&tree_sitter_c::LANGUAGE.into())?;
        Ok(Self { parser })
    }

    pub fn parse_file(&mut self, path: &Path) -> Result<SourceUnit, ParserError> {
        let text = fs::read_to_string(path)?;
        self.parse_source(path.to_string_lossy().into_owned(), text)
    }

    /// Parse an in-memory buffer. `name` is what record locations report as
    /// the file name; an empty name models a unit without a resolvable file.
    pub fn parse_source(
        &mut self,
        name: impl Into<String>,
        text: String,
    ) -> Result<SourceUnit, ParserError> {
        let name = name.into();

        let tree = self
            .parser
            .parse(&text, None)
            .ok_or_else(|| ParserError::Parse(display_name(&name)))?;

        if tree.root_node().has_error() {
            return Err(ParserError::Syntax(display_name(&name)));
        }

        Ok(SourceUnit { name, text, tree })
    }
}

fn display_name(name: &str) -> String {
    if name.is_empty() {
        "<buffer>".to_string()
    } else {
        name.to_string()
    }
}
