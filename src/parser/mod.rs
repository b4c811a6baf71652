//! Lexing and parsing: a `pest` grammar ([`alan.pest`](alan.pest)) plus a
//! dispatch-by-rule conversion into our own [`crate::ast::Ast`].

mod build;
mod escape;

use log::error;
use pest::Parser;
use pest_derive::Parser;

use crate::ast::{Ast, NodeId};
use crate::diagnostics::Diagnostics;

#[derive(Parser)]
#[grammar = "parser/alan.pest"]
pub struct AlanParser;

impl AlanParser {
    pub fn parse_program(source: &str) -> pest::iterators::Pairs<Rule> {
        match Self::parse(Rule::program, source) {
            Ok(pairs) => pairs,
            Err(err) => {
                error!("failed to parse input ({err})");
                std::process::exit(1);
            }
        }
    }
}

/// Parse `source` into a fresh [`Ast`], returning the entry function's [`NodeId`].
/// Lexical/syntax errors are fatal and exit the process directly (there is no partial
/// AST to recover with), matching [`AlanParser::parse_program`]'s own behavior.
pub fn parse(source: &str, diagnostics: &Diagnostics) -> (Ast, Option<NodeId>) {
    let pairs = AlanParser::parse_program(source);
    let mut ast = Ast::new();
    let entry = build::build_program(&mut ast, diagnostics, pairs);
    ast.entry = entry;
    (ast, entry)
}
