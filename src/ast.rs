//! Arena-backed abstract syntax tree.
//!
//! Every node lives in one flat `Vec<Node>` owned by the [`Ast`] and is addressed by a
//! small `Copy` handle, [`NodeId`]. This departs from the node-holds-its-own-children
//! ownership style that pointer-based ASTs use: Alan has no closures or shared mutable
//! node state to justify reference-counted cells, so plain indices keep the tree cheap
//! to copy, traverse, and attach side tables to (see [`Ast::types`], [`Ast::hidden`]).

use std::collections::HashMap;

use crate::types::Type;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Span {
    pub line: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamMode {
    Value,
    Reference,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cond {
    True,
    False,
    Lt,
    Gt,
    Le,
    Ge,
    Eq,
    Neq,
    And,
    Or,
    Not,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
}

#[derive(Debug, Clone)]
pub enum NodeKind {
    IntLit(i64),
    ByteLit(u8),
    StringLit(String),
    /// A name reference, optionally indexed (`name[index]`).
    Var {
        name: String,
        index: Option<NodeId>,
    },
    Arith {
        op: ArithOp,
        lhs: NodeId,
        rhs: NodeId,
    },
    Condition {
        op: Cond,
        lhs: Option<NodeId>,
        rhs: Option<NodeId>,
    },
    IfElse {
        cond: NodeId,
        then_branch: NodeId,
        else_branch: Option<NodeId>,
    },
    While {
        cond: NodeId,
        body: NodeId,
    },
    /// A function call, usable as both expression and statement.
    Call {
        name: String,
        args: Vec<NodeId>,
    },
    Ret {
        value: Option<NodeId>,
    },
    Assign {
        target: NodeId,
        value: NodeId,
    },
    VarDecl {
        name: String,
        ty: Type,
    },
    Param {
        name: String,
        ty: Type,
        mode: ParamMode,
    },
    Func {
        name: String,
        params: Vec<NodeId>,
        ret: Type,
        locals: Vec<NodeId>,
        body: NodeId,
        /// Set once by [`crate::semantic`] to the node's final emitted symbol name,
        /// after the entry-function rename check has run.
        emitted_name: Option<String>,
    },
    Block {
        statements: Vec<NodeId>,
    },
}

/// A full parsed-and-annotated program: the arena plus the side tables the semantic
/// pass populates in place of mutating node payloads directly.
#[derive(Debug)]
pub struct Ast {
    nodes: Vec<NodeKind>,
    spans: Vec<Span>,
    /// Expression type annotations, written by the semantic analyzer and read by codegen.
    types: HashMap<NodeId, Type>,
    /// Hidden (captured free-variable) parameters synthesized per function node, keyed
    /// by the function's own `NodeId`. Populated by the hidden-parameter inference pass
    /// and consumed again, read-only, when call sites are fixed up.
    hidden: HashMap<NodeId, Vec<HiddenParam>>,
    /// The single node identified as the program's entry point (first `Func` child of
    /// the root block), if any.
    pub entry: Option<NodeId>,
    /// Resolved callee for each `Call` node: the declaring `Func` node the call's name
    /// bound to at that lexical point. Absent for calls to runtime library primitives,
    /// which have no AST node of their own.
    call_targets: HashMap<NodeId, NodeId>,
}

#[derive(Debug, Clone)]
pub struct HiddenParam {
    pub name: String,
    pub ty: Type,
}

impl Ast {
    pub fn new() -> Ast {
        Ast {
            nodes: Vec::new(),
            spans: Vec::new(),
            types: HashMap::new(),
            hidden: HashMap::new(),
            entry: None,
            call_targets: HashMap::new(),
        }
    }

    pub fn push(&mut self, kind: NodeKind, span: Span) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(kind);
        self.spans.push(span);
        id
    }

    pub fn get(&self, id: NodeId) -> &NodeKind {
        &self.nodes[id.0]
    }

    pub fn get_mut(&mut self, id: NodeId) -> &mut NodeKind {
        &mut self.nodes[id.0]
    }

    pub fn span(&self, id: NodeId) -> Span {
        self.spans[id.0]
    }

    pub fn line(&self, id: NodeId) -> usize {
        self.spans[id.0].line
    }

    pub fn set_type(&mut self, id: NodeId, ty: Type) {
        self.types.insert(id, ty);
    }

    pub fn type_of(&self, id: NodeId) -> Option<&Type> {
        self.types.get(&id)
    }

    pub fn set_hidden(&mut self, func: NodeId, hidden: Vec<HiddenParam>) {
        self.hidden.insert(func, hidden);
    }

    pub fn hidden_of(&self, func: NodeId) -> &[HiddenParam] {
        self.hidden.get(&func).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn set_call_target(&mut self, call: NodeId, target: NodeId) {
        self.call_targets.insert(call, target);
    }

    pub fn call_target_of(&self, call: NodeId) -> Option<NodeId> {
        self.call_targets.get(&call).copied()
    }
}

impl Default for Ast {
    fn default() -> Self {
        Self::new()
    }
}
