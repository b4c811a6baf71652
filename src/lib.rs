//! The Alan compiler, as a library: parse a source file, run semantic analysis and
//! hidden-parameter inference, and emit LLVM IR. The `alanc` binary is a thin driver
//! over this crate.

pub mod ast;
pub mod codegen;
pub mod diagnostics;
pub mod parser;
pub mod semantic;
pub mod symbol;
pub mod types;

use inkwell::context::Context;
use inkwell::module::Module;

use ast::Ast;
use diagnostics::Diagnostics;

/// Run the full pipeline over `source`, reporting problems through `diagnostics`.
/// Returns `None` if compilation failed at any phase (the caller should exit
/// non-zero; [`Diagnostics::had_error`] has already been reported to stderr).
pub fn compile<'ctx>(source: &str, context: &'ctx Context, module_name: &str, diagnostics: &Diagnostics) -> Option<Module<'ctx>> {
    let (mut program, _entry) = parser::parse(source, diagnostics);

    semantic::analyze(&mut program, diagnostics);
    if diagnostics.had_error() {
        return None;
    }

    Some(codegen::compile(&program, context, module_name, diagnostics))
}

pub use ast::Ast as Program;

/// Parse only, for tooling that wants the tree without running semantic analysis
/// (e.g. a `--dump-ast` flag).
pub fn parse_only(source: &str, diagnostics: &Diagnostics) -> Ast {
    parser::parse(source, diagnostics).0
}
