#[macro_use]
extern crate pest_derive;

mod asm;
pub mod ast;
pub mod compiler;
pub mod interpreter;
pub mod typechecker;