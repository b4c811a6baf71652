//! Semantic analysis: symbol resolution, type checking, hidden-parameter inference,
//! and entry-point bookkeeping.
//!
//! Runs as two structural walks over the same tree, mirroring the reference
//! compiler's separate analysis and call-fixup passes:
//!
//! 1. [`Pass::Collect`] builds the scope chain, type-checks every node, and records
//!    each captured non-local variable as a hidden parameter on every function
//!    between its home scope and the point of capture ([`Table::add_hidden`]).
//!    A function's hidden set can still grow after an earlier call to it has already
//!    been visited in source order (a capture discovered later in the same function's
//!    body, or in a sibling declared afterwards), so call sites cannot be fixed up
//!    in the same walk.
//! 2. [`Pass::FixCalls`] re-walks the tree once hidden sets are final, resolving each
//!    call's required hidden arguments by name in the caller's own (rebuilt) scope
//!    chain and appending synthesized [`crate::ast::NodeKind::Var`] nodes to the call's
//!    argument list.
//!
//! Both passes use the same recursive descent; re-running scope construction is
//! cheap and avoids keeping two tables instead of one alive across the program.

pub mod error;

use std::collections::HashMap;

use crate::ast::{Ast, HiddenParam, NodeId, NodeKind, ParamMode};
use crate::diagnostics::Diagnostics;
use crate::symbol::entry::{Entry, FunctionEntry};
use crate::symbol::table::{init_symbol_table, Lookup, Table};
use crate::types::{compatible_type, equal_type, Type};

use error::SemanticError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pass {
    Collect,
    FixCalls,
}

struct FuncFrame {
    id: NodeId,
    body_level: usize,
}

/// `spec.md` §7: semantic errors are fatal-on-first, no recovery, no continuation.
/// `Pass::FixCalls` only ever runs once `Pass::Collect` finished clean (see
/// [`analyze`]), so these checks only need to bite during `Pass::Collect` itself.
///
/// True once the first error of `Pass::Collect` has fired; traversal must stop
/// descending from this point on rather than keep type-checking past the failure.
fn halted(diag: &Diagnostics, pass: Pass) -> bool {
    pass == Pass::Collect && diag.had_error()
}

/// True while it is still safe to report a *new* diagnostic: still in the
/// error-producing pass, and no earlier error has already claimed "first".
fn reporting(diag: &Diagnostics, pass: Pass) -> bool {
    pass == Pass::Collect && !diag.had_error()
}

/// Run semantic analysis over `ast`, reporting problems through `diagnostics`.
/// Returns the symbol table as it stood at the end of the fix-up pass (mostly useful
/// for tests); codegen reads annotations back off the `ast` itself.
pub fn analyze(ast: &mut Ast, diagnostics: &Diagnostics) -> Table {
    let Some(entry) = ast.entry else {
        diagnostics.error(0, SemanticError::NoEntryPoint);
        return init_symbol_table();
    };

    let mut registry: HashMap<NodeId, FunctionEntry> = HashMap::new();
    seed_registry(ast, entry, &mut registry, 0);

    let mut table = init_symbol_table();
    let mut stack = Vec::new();
    analyze_func(ast, &mut table, diagnostics, entry, &mut registry, &mut stack, Pass::Collect);

    if let NodeKind::Func { name, emitted_name, .. } = ast.get_mut(entry) {
        *emitted_name = Some(if name == "main" {
            "__alan_main".to_string()
        } else {
            name.clone()
        });
    }

    if diagnostics.had_error() {
        return table;
    }

    let mut table2 = init_symbol_table();
    let mut stack2 = Vec::new();
    analyze_func(ast, &mut table2, diagnostics, entry, &mut registry, &mut stack2, Pass::FixCalls);
    table2
}

fn seed_registry(ast: &Ast, id: NodeId, registry: &mut HashMap<NodeId, FunctionEntry>, level: usize) {
    let NodeKind::Func { params, ret, .. } = ast.get(id) else {
        return;
    };
    let param_types = param_types_of(ast, params);
    registry.insert(
        id,
        FunctionEntry {
            node: id,
            params: param_types,
            hidden: Vec::new(),
            returns: ret.clone(),
            nesting_level: level,
            return_count: 0,
        },
    );
}

fn param_types_of(ast: &Ast, params: &[NodeId]) -> Vec<(Type, ParamMode)> {
    params
        .iter()
        .map(|p| match ast.get(*p) {
            NodeKind::Param { ty, mode, .. } => (ty.clone(), *mode),
            _ => unreachable!("internal error: param list contains non-Param node"),
        })
        .collect()
}

fn note_capture(
    ast: &mut Ast,
    table: &mut Table,
    registry: &mut HashMap<NodeId, FunctionEntry>,
    stack: &[FuncFrame],
    found_level: usize,
    name: &str,
    ty: Type,
) {
    table.add_hidden(found_level, name, ty.clone());
    for frame in stack {
        if frame.body_level <= found_level {
            continue;
        }
        let existing = ast.hidden_of(frame.id);
        if existing.iter().any(|h| h.name == name) {
            continue;
        }
        let mut hidden = existing.to_vec();
        hidden.push(HiddenParam {
            name: name.to_string(),
            ty: ty.clone(),
        });
        ast.set_hidden(frame.id, hidden.clone());
        if let Some(fe) = registry.get_mut(&frame.id) {
            fe.hidden = hidden;
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn analyze_func(
    ast: &mut Ast,
    table: &mut Table,
    diag: &Diagnostics,
    id: NodeId,
    registry: &mut HashMap<NodeId, FunctionEntry>,
    stack: &mut Vec<FuncFrame>,
    pass: Pass,
) {
    let (name, params, ret, locals, body) = match ast.get(id) {
        NodeKind::Func {
            name,
            params,
            ret,
            locals,
            body,
            ..
        } => (name.clone(), params.clone(), ret.clone(), locals.clone(), *body),
        _ => unreachable!("internal error: analyze_func called on non-Func node"),
    };

    table.open_scope(Some(name.clone()));
    let body_level = table.nesting_level();
    stack.push(FuncFrame { id, body_level });

    for p in &params {
        if halted(diag, pass) {
            break;
        }
        if let NodeKind::Param { name: pname, ty, mode } = ast.get(*p).clone() {
            match table.insert_parameter(&pname, ty, mode) {
                Ok(()) => {}
                Err(msg) => {
                    if reporting(diag, pass) {
                        diag.error(ast.line(*p), msg);
                    }
                }
            }
        }
    }

    if pass == Pass::FixCalls {
        if let Some(fe) = registry.get(&id).cloned() {
            for h in &fe.hidden {
                let _ = table.insert_parameter(&h.name, h.ty.clone(), ParamMode::Reference);
            }
        }
    }

    for local in &locals {
        if halted(diag, pass) {
            break;
        }
        match ast.get(*local).clone() {
            NodeKind::VarDecl { name: vname, ty } => {
                if reporting(diag, pass) && ty.is_array_like() && matches!(ty.element_of(), Type::Void) {
                    diag.error(ast.line(*local), SemanticError::ArrayOfVoid);
                }
                if halted(diag, pass) {
                    break;
                }
                match table.insert_variable(&vname, ty) {
                    Ok(()) => {}
                    Err(_) if reporting(diag, pass) => {
                        diag.error(ast.line(*local), SemanticError::DuplicateIdentifier { name: vname });
                    }
                    Err(_) => {}
                }
            }
            NodeKind::Func {
                name: fname,
                params: fparams,
                ret: fret,
                emitted_name,
                ..
            } => {
                let param_types = param_types_of(ast, &fparams);
                if pass == Pass::Collect {
                    let nesting_level = table.nesting_level();
                    if table
                        .insert_function(&fname, *local, param_types.clone(), fret.clone())
                        .is_err()
                        && reporting(diag, pass)
                    {
                        diag.error(ast.line(*local), SemanticError::DuplicateIdentifier { name: fname.clone() });
                    }
                    registry.insert(
                        *local,
                        FunctionEntry {
                            node: *local,
                            params: param_types,
                            hidden: Vec::new(),
                            returns: fret,
                            nesting_level,
                            return_count: 0,
                        },
                    );
                    if emitted_name.is_none() {
                        if let NodeKind::Func { emitted_name, .. } = ast.get_mut(*local) {
                            *emitted_name = Some(format!("{fname}.{}", local.0));
                        }
                    }
                } else {
                    let fe = registry.get(local).cloned().unwrap_or(FunctionEntry {
                        node: *local,
                        params: param_types,
                        hidden: Vec::new(),
                        returns: fret,
                        nesting_level: table.nesting_level(),
                        return_count: 0,
                    });
                    let _ = table.insert(&fname, Entry::Function(fe));
                }
                if halted(diag, pass) {
                    break;
                }
                analyze_func(ast, table, diag, *local, registry, stack, pass);
            }
            _ => unreachable!("internal error: non-declaration node in locals list"),
        }
    }

    if !halted(diag, pass) {
        analyze_block(ast, table, diag, body, &ret, &name, registry, stack, pass);
    }

    // A non-void function whose body has a path with no `Ret` is not a semantic
    // error: it still compiles, and the code generator synthesizes a zero return
    // of the right width for the path that falls off the end (see codegen).

    stack.pop();
    table.close_scope();
}

#[allow(clippy::too_many_arguments)]
fn analyze_block(
    ast: &mut Ast,
    table: &mut Table,
    diag: &Diagnostics,
    block: NodeId,
    ret_ty: &Type,
    func_name: &str,
    registry: &mut HashMap<NodeId, FunctionEntry>,
    stack: &mut Vec<FuncFrame>,
    pass: Pass,
) {
    if halted(diag, pass) {
        return;
    }
    let statements = match ast.get(block) {
        NodeKind::Block { statements } => statements.clone(),
        _ => unreachable!("internal error: analyze_block called on non-Block node"),
    };
    for stmt in statements {
        if halted(diag, pass) {
            break;
        }
        analyze_stmt(ast, table, diag, stmt, ret_ty, func_name, registry, stack, pass);
    }
}

#[allow(clippy::too_many_arguments)]
fn analyze_stmt(
    ast: &mut Ast,
    table: &mut Table,
    diag: &Diagnostics,
    id: NodeId,
    ret_ty: &Type,
    func_name: &str,
    registry: &mut HashMap<NodeId, FunctionEntry>,
    stack: &mut Vec<FuncFrame>,
    pass: Pass,
) {
    if halted(diag, pass) {
        return;
    }
    match ast.get(id).clone() {
        NodeKind::Block { .. } => analyze_block(ast, table, diag, id, ret_ty, func_name, registry, stack, pass),
        NodeKind::IfElse {
            cond,
            then_branch,
            else_branch,
        } => {
            analyze_cond(ast, table, diag, cond, registry, stack, pass);
            analyze_stmt(ast, table, diag, then_branch, ret_ty, func_name, registry, stack, pass);
            if let Some(else_id) = else_branch {
                analyze_stmt(ast, table, diag, else_id, ret_ty, func_name, registry, stack, pass);
            }
        }
        NodeKind::While { cond, body } => {
            analyze_cond(ast, table, diag, cond, registry, stack, pass);
            analyze_stmt(ast, table, diag, body, ret_ty, func_name, registry, stack, pass);
        }
        NodeKind::Assign { target, value } => {
            let target_ty = match ast.get(target).clone() {
                NodeKind::Var { name, index } => analyze_var(ast, table, diag, target, &name, index, registry, stack, pass),
                _ => {
                    if reporting(diag, pass) {
                        diag.error(ast.line(target), SemanticError::InvalidAssignmentTarget { name: "<expr>".into() });
                    }
                    Type::Void
                }
            };
            if halted(diag, pass) {
                return;
            }
            let value_ty = analyze_expr(ast, table, diag, value, registry, stack, pass);
            if reporting(diag, pass) && !compatible_type(&target_ty, &value_ty) {
                diag.error(
                    ast.line(id),
                    SemanticError::TypeMismatch {
                        expected: target_ty,
                        found: value_ty,
                    },
                );
            }
        }
        NodeKind::Call { .. } => {
            analyze_call(ast, table, diag, id, registry, stack, pass);
        }
        NodeKind::Ret { value } => {
            table.add_return();
            let found = value.map(|v| analyze_expr(ast, table, diag, v, registry, stack, pass));
            ast.set_type(id, found.clone().unwrap_or(Type::Void));
            if halted(diag, pass) {
                return;
            }
            if reporting(diag, pass) {
                match (ret_ty, &found) {
                    (Type::Void, Some(_)) => {
                        diag.error(ast.line(id), SemanticError::UnexpectedReturnValue { name: func_name.to_string() });
                    }
                    (Type::Void, None) => {}
                    (expected, Some(f)) if !equal_type(expected, f) => {
                        diag.error(
                            ast.line(id),
                            SemanticError::TypeMismatch {
                                expected: expected.clone(),
                                found: f.clone(),
                            },
                        );
                    }
                    (expected, None) => {
                        diag.error(
                            ast.line(id),
                            SemanticError::MissingReturnValue {
                                name: func_name.to_string(),
                                expected: expected.clone(),
                            },
                        );
                    }
                    _ => {}
                }
            }
        }
        other => unreachable!("internal error: unexpected statement node {other:?}"),
    }
}

#[allow(clippy::too_many_arguments)]
fn analyze_cond(
    ast: &mut Ast,
    table: &mut Table,
    diag: &Diagnostics,
    id: NodeId,
    registry: &mut HashMap<NodeId, FunctionEntry>,
    stack: &mut Vec<FuncFrame>,
    pass: Pass,
) {
    if halted(diag, pass) {
        return;
    }
    use crate::ast::Cond::*;
    let (op, lhs, rhs) = match ast.get(id) {
        NodeKind::Condition { op, lhs, rhs } => (*op, *lhs, *rhs),
        _ => unreachable!("internal error: analyze_cond called on non-Condition node"),
    };
    match op {
        True | False => {}
        Not => {
            analyze_cond(ast, table, diag, lhs.expect("Not has an operand"), registry, stack, pass);
        }
        And | Or => {
            analyze_cond(ast, table, diag, lhs.expect("And/Or has lhs"), registry, stack, pass);
            if halted(diag, pass) {
                return;
            }
            analyze_cond(ast, table, diag, rhs.expect("And/Or has rhs"), registry, stack, pass);
        }
        Lt | Gt | Le | Ge | Eq | Neq => {
            let l = analyze_expr(ast, table, diag, lhs.expect("relational has lhs"), registry, stack, pass);
            let r = analyze_expr(ast, table, diag, rhs.expect("relational has rhs"), registry, stack, pass);
            if reporting(diag, pass) && !equal_type(&l, &r) {
                diag.error(ast.line(id), SemanticError::IncompatibleOperands { lhs: l, rhs: r });
            }
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn analyze_expr(
    ast: &mut Ast,
    table: &mut Table,
    diag: &Diagnostics,
    id: NodeId,
    registry: &mut HashMap<NodeId, FunctionEntry>,
    stack: &mut Vec<FuncFrame>,
    pass: Pass,
) -> Type {
    if halted(diag, pass) {
        ast.set_type(id, Type::Void);
        return Type::Void;
    }
    let ty = match ast.get(id).clone() {
        NodeKind::IntLit(_) => Type::Int,
        NodeKind::ByteLit(_) => Type::Byte,
        // A string literal's compile-time footprint is fixed (`s.len() + 1` bytes for
        // the trailing NUL), but per the data model it is typed as `iarray byte` like
        // any other reference-parameter actual, not as a sized `Array`.
        NodeKind::StringLit(_) => Type::iarray(Type::Byte),
        NodeKind::Var { name, index } => analyze_var(ast, table, diag, id, &name, index, registry, stack, pass),
        NodeKind::Arith { lhs, rhs, .. } => {
            let l = analyze_expr(ast, table, diag, lhs, registry, stack, pass);
            let r = analyze_expr(ast, table, diag, rhs, registry, stack, pass);
            if reporting(diag, pass) && (!equal_type(&l, &Type::Int) || !equal_type(&r, &Type::Int)) {
                diag.error(ast.line(id), SemanticError::IncompatibleOperands { lhs: l, rhs: r });
            }
            Type::Int
        }
        NodeKind::Call { .. } => analyze_call(ast, table, diag, id, registry, stack, pass),
        other => unreachable!("internal error: unexpected expression node {other:?}"),
    };
    ast.set_type(id, ty.clone());
    ty
}

#[allow(clippy::too_many_arguments)]
fn analyze_var(
    ast: &mut Ast,
    table: &mut Table,
    diag: &Diagnostics,
    id: NodeId,
    name: &str,
    index: Option<NodeId>,
    registry: &mut HashMap<NodeId, FunctionEntry>,
    stack: &mut Vec<FuncFrame>,
    pass: Pass,
) -> Type {
    if halted(diag, pass) {
        ast.set_type(id, Type::Void);
        return Type::Void;
    }
    let Some((entry, level)) = table.lookup(name, Lookup::All) else {
        if reporting(diag, pass) {
            diag.error(ast.line(id), SemanticError::UndefinedIdentifier { name: name.to_string() });
        }
        ast.set_type(id, Type::Void);
        return Type::Void;
    };
    if entry.is_function() {
        if reporting(diag, pass) {
            diag.error(ast.line(id), SemanticError::NotAVariable { name: name.to_string() });
        }
        ast.set_type(id, Type::Void);
        return Type::Void;
    }
    let ty = entry.type_of();
    let current_level = table.nesting_level();
    if level > 0 && level < current_level {
        note_capture(ast, table, registry, stack, level, name, ty.clone());
    }
    let result = if let Some(idx) = index {
        if !ty.is_array_like() {
            if reporting(diag, pass) {
                diag.error(ast.line(id), SemanticError::IndexingNonArray { name: name.to_string() });
            }
            ast.set_type(id, Type::Void);
            return Type::Void;
        }
        if halted(diag, pass) {
            ast.set_type(id, Type::Void);
            return Type::Void;
        }
        let idx_ty = analyze_expr(ast, table, diag, idx, registry, stack, pass);
        if reporting(diag, pass) && !equal_type(&idx_ty, &Type::Int) {
            diag.error(ast.line(idx), SemanticError::IndexNotInt { found: idx_ty });
        }
        ty.element_of().clone()
    } else {
        ty
    };
    ast.set_type(id, result.clone());
    result
}

#[allow(clippy::too_many_arguments)]
fn analyze_call(
    ast: &mut Ast,
    table: &mut Table,
    diag: &Diagnostics,
    id: NodeId,
    registry: &mut HashMap<NodeId, FunctionEntry>,
    stack: &mut Vec<FuncFrame>,
    pass: Pass,
) -> Type {
    if halted(diag, pass) {
        ast.set_type(id, Type::Void);
        return Type::Void;
    }
    let (name, args) = match ast.get(id) {
        NodeKind::Call { name, args } => (name.clone(), args.clone()),
        _ => unreachable!("internal error: analyze_call called on non-Call node"),
    };
    let Some((entry, _level)) = table.lookup(&name, Lookup::All) else {
        if reporting(diag, pass) {
            diag.error(ast.line(id), SemanticError::UndefinedIdentifier { name });
        }
        for a in &args {
            if halted(diag, pass) {
                break;
            }
            analyze_expr(ast, table, diag, *a, registry, stack, pass);
        }
        ast.set_type(id, Type::Void);
        return Type::Void;
    };
    let Entry::Function(fe) = entry.clone() else {
        if reporting(diag, pass) {
            diag.error(ast.line(id), SemanticError::NotAFunction { name });
        }
        for a in &args {
            if halted(diag, pass) {
                break;
            }
            analyze_expr(ast, table, diag, *a, registry, stack, pass);
        }
        ast.set_type(id, Type::Void);
        return Type::Void;
    };

    if fe.node.0 != usize::MAX {
        ast.set_call_target(id, fe.node);
    }

    let mut arg_types: Vec<Type> = Vec::with_capacity(args.len());
    for a in &args {
        if halted(diag, pass) {
            ast.set_type(id, Type::Void);
            return Type::Void;
        }
        arg_types.push(analyze_expr(ast, table, diag, *a, registry, stack, pass));
    }

    if reporting(diag, pass) {
        if arg_types.len() < fe.params.len() {
            diag.error(ast.line(id), SemanticError::NotEnoughArguments { name: name.clone() });
        } else if arg_types.len() > fe.params.len() {
            diag.error(ast.line(id), SemanticError::TooManyArguments { name: name.clone() });
        } else {
            for (i, ((formal_ty, _mode), actual_ty)) in fe.params.iter().zip(arg_types.iter()).enumerate() {
                if !compatible_type(formal_ty, actual_ty) {
                    diag.error(
                        ast.line(id),
                        SemanticError::ArgumentTypeMismatch {
                            name: name.clone(),
                            index: i,
                            expected: formal_ty.clone(),
                            found: actual_ty.clone(),
                        },
                    );
                }
            }
        }
    }

    if pass == Pass::FixCalls {
        let mut extra = Vec::new();
        for h in &fe.hidden {
            let span = ast.span(id);
            extra.push(ast.push(
                NodeKind::Var {
                    name: h.name.clone(),
                    index: None,
                },
                span,
            ));
        }
        if let NodeKind::Call { args, .. } = ast.get_mut(id) {
            args.extend(extra);
        }
    }

    ast.set_type(id, fe.returns.clone());
    fe.returns
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::ast::NodeKind;
    use crate::diagnostics::Diagnostics;

    fn analyze(src: &str) -> (crate::ast::Ast, Diagnostics) {
        let diagnostics = Diagnostics::new("test.alan");
        let mut ast = crate::parser::parse(src, &diagnostics).0;
        super::analyze(&mut ast, &diagnostics);
        (ast, diagnostics)
    }

    fn func_named<'a>(ast: &'a crate::ast::Ast, id: crate::ast::NodeId) -> Option<&'a str> {
        match ast.get(id) {
            NodeKind::Func { name, .. } => Some(name),
            _ => None,
        }
    }

    fn find_local<'a>(ast: &'a crate::ast::Ast, func: crate::ast::NodeId, name: &str) -> Option<crate::ast::NodeId> {
        let NodeKind::Func { locals, .. } = ast.get(func) else {
            return None;
        };
        locals.iter().copied().find(|l| func_named(ast, *l) == Some(name))
    }

    #[test]
    fn directly_captured_variable_becomes_a_hidden_reference_parameter() {
        let (ast, diag) = analyze(
            r#"
            func outer(): proc {
              var x: int;
              func inner(): proc {
                x := x + 1;
              }
              x := 1;
              inner();
            }
            "#,
        );
        assert!(!diag.had_error());
        let outer = ast.entry.unwrap();
        assert!(ast.hidden_of(outer).is_empty());
        let inner = find_local(&ast, outer, "inner").unwrap();
        let hidden = ast.hidden_of(inner);
        assert_eq!(hidden.len(), 1);
        assert_eq!(hidden[0].name, "x");
        assert_eq!(hidden[0].ty, crate::types::Type::Int);
    }

    #[test]
    fn capture_threads_through_every_intervening_function() {
        let (ast, diag) = analyze(
            r#"
            func outer(): proc {
              var x: int;
              func middle(): proc {
                func inner(): proc {
                  x := x + 1;
                }
                inner();
              }
              x := 1;
              middle();
            }
            "#,
        );
        assert!(!diag.had_error());
        let outer = ast.entry.unwrap();
        let middle = find_local(&ast, outer, "middle").unwrap();
        let inner = find_local(&ast, middle, "inner").unwrap();
        assert_eq!(ast.hidden_of(middle).len(), 1, "middle must carry x through to inner");
        assert_eq!(ast.hidden_of(inner).len(), 1);
    }

    #[test]
    fn call_sites_are_rewritten_with_the_callees_hidden_arguments() {
        let (ast, diag) = analyze(
            r#"
            func outer(): proc {
              var x: int;
              func inner(): proc {
                x := x + 1;
              }
              x := 1;
              inner();
            }
            "#,
        );
        assert!(!diag.had_error());
        let outer = ast.entry.unwrap();
        let NodeKind::Func { body, .. } = ast.get(outer) else { unreachable!() };
        let NodeKind::Block { statements } = ast.get(*body) else { unreachable!() };
        let call = statements
            .iter()
            .find(|s| matches!(ast.get(**s), NodeKind::Call { .. }))
            .expect("inner() call statement");
        let NodeKind::Call { args, .. } = ast.get(*call) else { unreachable!() };
        assert_eq!(args.len(), 1, "the hidden x argument must have been appended");
    }

    #[test]
    fn sibling_variables_do_not_leak_into_each_others_scope() {
        let (_, diag) = analyze(
            r#"
            func outer(): proc {
              func a(): proc {
                var y: int;
                y := 1;
              }
              func b(): proc {
                y := 2;
              }
              a();
              b();
            }
            "#,
        );
        assert!(diag.had_error(), "b must not see a's local y");
    }

    #[test]
    fn duplicate_declaration_in_one_scope_is_rejected() {
        let (_, diag) = analyze(
            r#"
            func main(): proc {
              var x: int;
              var x: byte;
            }
            "#,
        );
        assert!(diag.had_error());
    }

    #[test]
    fn node_type_annotations_are_recorded_for_every_expression_and_return() {
        let (ast, diag) = analyze(
            r#"
            func main(): proc {
              var x: int;
              x := 1 + 2;
              return;
            }
            "#,
        );
        assert!(!diag.had_error());
        let main = ast.entry.unwrap();
        let NodeKind::Func { body, .. } = ast.get(main) else { unreachable!() };
        let NodeKind::Block { statements } = ast.get(*body) else { unreachable!() };
        let NodeKind::Assign { value, .. } = ast.get(statements[0]) else { unreachable!() };
        assert_eq!(ast.type_of(*value), Some(&crate::types::Type::Int));
        // A value-less `return` in a `proc` is annotated `typeVoid`.
        assert_eq!(ast.type_of(statements[1]), Some(&crate::types::Type::Void));
    }

    #[test]
    fn fixed_up_call_carries_one_hidden_argument_per_entry_in_the_callees_hidden_list() {
        let (ast, diag) = analyze(
            r#"
            func outer(): proc {
              var x: int;
              var y: int;
              func inner(): proc {
                x := x + 1;
                y := y + 1;
              }
              x := 1;
              y := 1;
              inner();
            }
            "#,
        );
        assert!(!diag.had_error());
        let outer = ast.entry.unwrap();
        let inner = find_local(&ast, outer, "inner").unwrap();
        let NodeKind::Func { body, .. } = ast.get(outer) else { unreachable!() };
        let NodeKind::Block { statements } = ast.get(*body) else { unreachable!() };
        let call = statements
            .iter()
            .find(|s| matches!(ast.get(**s), NodeKind::Call { .. }))
            .expect("inner() call statement");
        let NodeKind::Call { args, .. } = ast.get(*call) else { unreachable!() };
        assert_eq!(args.len(), ast.hidden_of(inner).len(), "hidden argument count must match the callee's hidden list");
        assert_eq!(args.len(), 2);
    }
}
