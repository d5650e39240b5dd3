//! Syntax-tree front end

mod c;

pub use c::{CParser, ParserError, SourceUnit};
