//! Symbol-table entry kinds.

use crate::ast::{HiddenParam, NodeId, ParamMode};
use crate::types::Type;

#[derive(Debug, Clone)]
pub enum Entry {
    Variable(VariableEntry),
    Parameter(ParameterEntry),
    Function(FunctionEntry),
}

#[derive(Debug, Clone)]
pub struct VariableEntry {
    pub ty: Type,
    /// Nesting level of the scope this variable was declared in (frame-relative,
    /// not byte-relative — see `spec.md`'s Glossary).
    pub nesting_level: usize,
    /// Frame-relative declaration-order index, assigned by `Table::insert` at
    /// insertion time. Not read by codegen (which addresses locals by name), kept
    /// for parity with `spec.md` §3/§4.2's `insertEntry`/offset-counter contract.
    pub offset: usize,
}

#[derive(Debug, Clone)]
pub struct ParameterEntry {
    pub ty: Type,
    pub mode: ParamMode,
    pub nesting_level: usize,
    pub offset: usize,
}

impl ParameterEntry {
    /// Arrays may only ever be passed by reference; a by-value `IArray` parameter is
    /// a contradiction (there is nothing fixed-size to copy). Enforced at the point a
    /// parameter entry is built, mirroring the invariant the reference symbol table
    /// bakes into its own parameter constructor.
    pub fn new(ty: Type, mode: ParamMode, nesting_level: usize, offset: usize) -> Result<ParameterEntry, String> {
        if matches!(ty, Type::IArray { .. }) && mode != ParamMode::Reference {
            return Err(format!("array parameter of type '{ty}' must be passed by reference"));
        }
        Ok(ParameterEntry {
            ty,
            mode,
            nesting_level,
            offset,
        })
    }
}

#[derive(Debug, Clone)]
pub struct FunctionEntry {
    pub node: NodeId,
    pub params: Vec<(Type, ParamMode)>,
    pub hidden: Vec<HiddenParam>,
    pub returns: Type,
    /// The nesting level at which this function was declared; a sibling or nested
    /// function looks up a variable's level against this to decide whether a capture
    /// is local or must become a hidden parameter.
    pub nesting_level: usize,
    /// Number of `Ret` statements seen in this function's body, tracked the way
    /// `addReturn()`/`getReturns()` track it in `spec.md` §4.2 — written by
    /// `Table::add_return` as the body is analyzed, never consulted by codegen
    /// (which always synthesizes a well-formed terminator on its own; see
    /// `crate::codegen`'s missing-return handling for scenario S6).
    pub return_count: usize,
}

impl Entry {
    pub fn type_of(&self) -> Type {
        match self {
            Entry::Variable(v) => v.ty.clone(),
            Entry::Parameter(p) => p.ty.clone(),
            Entry::Function(f) => f.returns.clone(),
        }
    }

    pub fn is_function(&self) -> bool {
        matches!(self, Entry::Function(_))
    }
}
