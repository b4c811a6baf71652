//! Pairs-to-`Ast` conversion: one `build_*` function per grammar rule, dispatching on
//! `pair.as_rule()`, mirroring the reference parser's `AstNode::from_*` family.

use pest::iterators::Pair;

use crate::ast::{ArithOp, Ast, Cond, NodeId, NodeKind, ParamMode, Span};
use crate::diagnostics::Diagnostics;
use crate::semantic::error::SemanticError;
use crate::types::Type;

use super::escape::decode;
use super::Rule;

fn line_of(pair: &Pair<Rule>) -> usize {
    pair.as_span().start_pos().line_col().0
}

fn span_of(pair: &Pair<Rule>) -> Span {
    Span { line: line_of(pair) }
}

pub fn build_program(ast: &mut Ast, diagnostics: &Diagnostics, pairs: pest::iterators::Pairs<Rule>) -> Option<NodeId> {
    let program_pair = pairs.into_iter().next()?;
    let func_def_pair = program_pair.into_inner().find(|p| p.as_rule() == Rule::func_def)?;
    Some(build_func_def(ast, diagnostics, func_def_pair))
}

fn build_func_def(ast: &mut Ast, diagnostics: &Diagnostics, pair: Pair<Rule>) -> NodeId {
    let span = span_of(&pair);
    let mut inner = pair.into_inner().peekable();
    let name = inner.next().expect("func_def has a name").as_str().to_string();

    let mut params = Vec::new();
    if inner.peek().map(|p| p.as_rule()) == Some(Rule::param_list) {
        let param_list = inner.next().unwrap();
        for param_pair in param_list.into_inner() {
            params.push(build_param(ast, diagnostics, param_pair));
        }
    }

    let ret_pair = inner.next().expect("func_def has a return type");
    let ret = build_ret_type(ret_pair);

    let mut locals = Vec::new();
    let mut statements = Vec::new();
    for p in inner {
        match p.as_rule() {
            Rule::local_def => locals.push(build_local_def(ast, diagnostics, p)),
            Rule::stmt => statements.push(build_stmt(ast, diagnostics, p)),
            other => unreachable!("internal error: unexpected func_def child {other:?}"),
        }
    }

    let body = ast.push(NodeKind::Block { statements }, span);
    ast.push(
        NodeKind::Func {
            name,
            params,
            ret,
            locals,
            body,
            emitted_name: None,
        },
        span,
    )
}

fn build_param(ast: &mut Ast, diagnostics: &Diagnostics, pair: Pair<Rule>) -> NodeId {
    let span = span_of(&pair);
    let mut inner = pair.into_inner().peekable();
    let mode = if inner.peek().map(|p| p.as_rule()) == Some(Rule::ref_kw) {
        inner.next();
        ParamMode::Reference
    } else {
        ParamMode::Value
    };
    let name = inner.next().expect("param has a name").as_str().to_string();
    let type_pair = inner.next().expect("param has a type");
    let ty = build_param_type(diagnostics, type_pair, mode, span.line, &name);
    // An array parameter declared without `reference` has already been reported by
    // `build_param_type`; coerce its mode so the symbol table doesn't raise a second,
    // less specific diagnostic for the same parameter.
    let mode = if ty.is_array_like() { ParamMode::Reference } else { mode };
    ast.push(NodeKind::Param { name, ty, mode }, span)
}

fn build_param_type(diagnostics: &Diagnostics, pair: Pair<Rule>, mode: ParamMode, line: usize, name: &str) -> Type {
    let child = pair.into_inner().next().expect("param_type has a child");
    match child.as_rule() {
        Rule::scalar_type => build_scalar_type(child),
        Rule::array_of_type => {
            let elem_pair = child.into_inner().next().expect("array_of_type has an element type");
            let elem = build_scalar_type(elem_pair);
            if mode != ParamMode::Reference {
                diagnostics.error(line, SemanticError::ArrayNotByReference { name: name.to_string() });
            }
            Type::iarray(elem)
        }
        other => unreachable!("internal error: unexpected param_type child {other:?}"),
    }
}

fn build_ret_type(pair: Pair<Rule>) -> Type {
    let child = pair.into_inner().next().expect("ret_type has a child");
    match child.as_rule() {
        Rule::proc_kw => Type::Void,
        Rule::scalar_type => build_scalar_type(child),
        other => unreachable!("internal error: unexpected ret_type child {other:?}"),
    }
}

fn build_scalar_type(pair: Pair<Rule>) -> Type {
    match pair.as_str() {
        "int" => Type::Int,
        "byte" => Type::Byte,
        other => unreachable!("internal error: unexpected scalar type '{other}'"),
    }
}

fn build_local_def(ast: &mut Ast, diagnostics: &Diagnostics, pair: Pair<Rule>) -> NodeId {
    let child = pair.into_inner().next().expect("local_def has a child");
    match child.as_rule() {
        Rule::var_def => build_var_def(ast, diagnostics, child),
        Rule::func_def => build_func_def(ast, diagnostics, child),
        other => unreachable!("internal error: unexpected local_def child {other:?}"),
    }
}

fn build_var_def(ast: &mut Ast, diagnostics: &Diagnostics, pair: Pair<Rule>) -> NodeId {
    let span = span_of(&pair);
    let mut inner = pair.into_inner();
    let name = inner.next().expect("var_def has a name").as_str().to_string();
    let ty_pair = inner.next().expect("var_def has a type");
    let ty = build_var_type(diagnostics, ty_pair);
    ast.push(NodeKind::VarDecl { name, ty }, span)
}

fn build_var_type(diagnostics: &Diagnostics, pair: Pair<Rule>) -> Type {
    let line = line_of(&pair);
    let child = pair.into_inner().next().expect("var_type has a child");
    match child.as_rule() {
        Rule::scalar_type => build_scalar_type(child),
        Rule::fixed_array_type => build_fixed_array_type(diagnostics, child),
        other => unreachable!("internal error: unexpected var_type child {other:?}, at line {line}"),
    }
}

fn build_fixed_array_type(diagnostics: &Diagnostics, pair: Pair<Rule>) -> Type {
    let line = line_of(&pair);
    let mut inner = pair.into_inner();
    let size: usize = inner
        .next()
        .expect("fixed_array_type has a size")
        .as_str()
        .parse()
        .expect("int_lit is a valid integer");
    let elem_pair = inner.next().expect("fixed_array_type has an element type");
    let elem = build_var_type(diagnostics, elem_pair);
    if elem == Type::Void {
        diagnostics.error(line, "array element type cannot be proc");
        return Type::array(size, Type::Int);
    }
    Type::array(size, elem)
}

fn build_stmt(ast: &mut Ast, diagnostics: &Diagnostics, pair: Pair<Rule>) -> NodeId {
    let child = pair.into_inner().next().expect("stmt has a child");
    match child.as_rule() {
        Rule::block => build_block(ast, diagnostics, child),
        Rule::if_stmt => build_if(ast, diagnostics, child),
        Rule::while_stmt => build_while(ast, diagnostics, child),
        Rule::return_stmt => build_return(ast, diagnostics, child),
        Rule::assign_stmt => build_assign(ast, diagnostics, child),
        Rule::call_stmt => build_call_stmt(ast, diagnostics, child),
        other => unreachable!("internal error: unexpected stmt child {other:?}"),
    }
}

fn build_block(ast: &mut Ast, diagnostics: &Diagnostics, pair: Pair<Rule>) -> NodeId {
    let span = span_of(&pair);
    let statements = pair.into_inner().map(|s| build_stmt(ast, diagnostics, s)).collect();
    ast.push(NodeKind::Block { statements }, span)
}

fn build_if(ast: &mut Ast, diagnostics: &Diagnostics, pair: Pair<Rule>) -> NodeId {
    let span = span_of(&pair);
    let mut inner = pair.into_inner();
    let cond = build_cond(ast, diagnostics, inner.next().expect("if_stmt has a condition"));
    let then_branch = build_stmt(ast, diagnostics, inner.next().expect("if_stmt has a then branch"));
    let else_branch = inner.next().map(|p| build_stmt(ast, diagnostics, p));
    ast.push(
        NodeKind::IfElse {
            cond,
            then_branch,
            else_branch,
        },
        span,
    )
}

fn build_while(ast: &mut Ast, diagnostics: &Diagnostics, pair: Pair<Rule>) -> NodeId {
    let span = span_of(&pair);
    let mut inner = pair.into_inner();
    let cond = build_cond(ast, diagnostics, inner.next().expect("while_stmt has a condition"));
    let body = build_stmt(ast, diagnostics, inner.next().expect("while_stmt has a body"));
    ast.push(NodeKind::While { cond, body }, span)
}

fn build_return(ast: &mut Ast, diagnostics: &Diagnostics, pair: Pair<Rule>) -> NodeId {
    let span = span_of(&pair);
    let value = pair.into_inner().next().map(|e| build_expr(ast, diagnostics, e));
    ast.push(NodeKind::Ret { value }, span)
}

fn build_assign(ast: &mut Ast, diagnostics: &Diagnostics, pair: Pair<Rule>) -> NodeId {
    let span = span_of(&pair);
    let mut inner = pair.into_inner();
    let target = build_lvalue(ast, diagnostics, inner.next().expect("assign_stmt has a target"));
    let value = build_expr(ast, diagnostics, inner.next().expect("assign_stmt has a value"));
    ast.push(NodeKind::Assign { target, value }, span)
}

fn build_call_stmt(ast: &mut Ast, diagnostics: &Diagnostics, pair: Pair<Rule>) -> NodeId {
    build_call(ast, diagnostics, pair.into_inner().next().expect("call_stmt has a call"))
}

fn build_cond(ast: &mut Ast, diagnostics: &Diagnostics, pair: Pair<Rule>) -> NodeId {
    let span = span_of(&pair);
    let mut children = pair.into_inner();
    let mut node = build_and_cond(ast, diagnostics, children.next().expect("cond has an and_cond"));
    for c in children {
        let rhs = build_and_cond(ast, diagnostics, c);
        node = ast.push(
            NodeKind::Condition {
                op: Cond::Or,
                lhs: Some(node),
                rhs: Some(rhs),
            },
            span,
        );
    }
    node
}

fn build_and_cond(ast: &mut Ast, diagnostics: &Diagnostics, pair: Pair<Rule>) -> NodeId {
    let span = span_of(&pair);
    let mut children = pair.into_inner();
    let mut node = build_not_cond(ast, diagnostics, children.next().expect("and_cond has a not_cond"));
    for c in children {
        let rhs = build_not_cond(ast, diagnostics, c);
        node = ast.push(
            NodeKind::Condition {
                op: Cond::And,
                lhs: Some(node),
                rhs: Some(rhs),
            },
            span,
        );
    }
    node
}

fn build_not_cond(ast: &mut Ast, diagnostics: &Diagnostics, pair: Pair<Rule>) -> NodeId {
    let span = span_of(&pair);
    let child = pair.into_inner().next().expect("not_cond has a child");
    match child.as_rule() {
        Rule::not_cond => {
            let inner = build_not_cond(ast, diagnostics, child);
            ast.push(
                NodeKind::Condition {
                    op: Cond::Not,
                    lhs: Some(inner),
                    rhs: None,
                },
                span,
            )
        }
        Rule::atom_cond => build_atom_cond(ast, diagnostics, child),
        other => unreachable!("internal error: unexpected not_cond child {other:?}"),
    }
}

fn build_atom_cond(ast: &mut Ast, diagnostics: &Diagnostics, pair: Pair<Rule>) -> NodeId {
    let span = span_of(&pair);
    match pair.as_str() {
        "true" => {
            return ast.push(
                NodeKind::Condition {
                    op: Cond::True,
                    lhs: None,
                    rhs: None,
                },
                span,
            )
        }
        "false" => {
            return ast.push(
                NodeKind::Condition {
                    op: Cond::False,
                    lhs: None,
                    rhs: None,
                },
                span,
            )
        }
        _ => {}
    }
    let mut inner = pair.into_inner();
    let first = inner.next().expect("atom_cond has a child");
    if first.as_rule() == Rule::cond {
        return build_cond(ast, diagnostics, first);
    }
    let lhs = build_expr(ast, diagnostics, first);
    let relop = inner.next().expect("atom_cond has a relational operator");
    let rhs = build_expr(ast, diagnostics, inner.next().expect("atom_cond has a right operand"));
    let op = match relop.as_str() {
        "<" => Cond::Lt,
        ">" => Cond::Gt,
        "<=" => Cond::Le,
        ">=" => Cond::Ge,
        "==" => Cond::Eq,
        "!=" => Cond::Neq,
        other => unreachable!("internal error: unexpected relational operator '{other}'"),
    };
    ast.push(
        NodeKind::Condition {
            op,
            lhs: Some(lhs),
            rhs: Some(rhs),
        },
        span,
    )
}

fn build_expr(ast: &mut Ast, diagnostics: &Diagnostics, pair: Pair<Rule>) -> NodeId {
    let span = span_of(&pair);
    let mut children = pair.into_inner();
    let mut node = build_term(ast, diagnostics, children.next().expect("expr has a term"));
    loop {
        let Some(op) = children.next() else { break };
        let rhs_pair = children.next().expect("addop is followed by a term");
        let rhs = build_term(ast, diagnostics, rhs_pair);
        let op = match op.as_str() {
            "+" => ArithOp::Add,
            "-" => ArithOp::Sub,
            other => unreachable!("internal error: unexpected additive operator '{other}'"),
        };
        node = ast.push(NodeKind::Arith { op, lhs: node, rhs }, span);
    }
    node
}

fn build_term(ast: &mut Ast, diagnostics: &Diagnostics, pair: Pair<Rule>) -> NodeId {
    let span = span_of(&pair);
    let mut children = pair.into_inner();
    let mut node = build_factor(ast, diagnostics, children.next().expect("term has a factor"));
    loop {
        let Some(op) = children.next() else { break };
        let rhs_pair = children.next().expect("mulop is followed by a factor");
        let rhs = build_factor(ast, diagnostics, rhs_pair);
        let op = match op.as_str() {
            "*" => ArithOp::Mul,
            "/" => ArithOp::Div,
            "%" => ArithOp::Mod,
            other => unreachable!("internal error: unexpected multiplicative operator '{other}'"),
        };
        node = ast.push(NodeKind::Arith { op, lhs: node, rhs }, span);
    }
    node
}

fn build_factor(ast: &mut Ast, diagnostics: &Diagnostics, pair: Pair<Rule>) -> NodeId {
    let span = span_of(&pair);
    let child = pair.into_inner().next().expect("factor has a child");
    match child.as_rule() {
        Rule::expr => build_expr(ast, diagnostics, child),
        Rule::factor => {
            let rhs = build_factor(ast, diagnostics, child);
            let zero = ast.push(NodeKind::IntLit(0), span);
            ast.push(
                NodeKind::Arith {
                    op: ArithOp::Sub,
                    lhs: zero,
                    rhs,
                },
                span,
            )
        }
        Rule::call => build_call(ast, diagnostics, child),
        Rule::lvalue => build_lvalue(ast, diagnostics, child),
        Rule::int_lit => {
            let v: i64 = child.as_str().parse().expect("int_lit is a valid integer");
            ast.push(NodeKind::IntLit(v), span)
        }
        Rule::byte_lit => {
            let raw = strip_quotes(child.as_str());
            let bytes = decode(raw);
            ast.push(NodeKind::ByteLit(bytes.first().copied().unwrap_or(0)), span)
        }
        Rule::string_lit => {
            let raw = strip_quotes(child.as_str());
            let bytes = decode(raw);
            let s = String::from_utf8(bytes).unwrap_or_default();
            ast.push(NodeKind::StringLit(s), span)
        }
        other => unreachable!("internal error: unexpected factor child {other:?}"),
    }
}

fn build_lvalue(ast: &mut Ast, diagnostics: &Diagnostics, pair: Pair<Rule>) -> NodeId {
    let span = span_of(&pair);
    let mut inner = pair.into_inner();
    let name = inner.next().expect("lvalue has a name").as_str().to_string();
    let index = inner.next().map(|p| build_expr(ast, diagnostics, p));
    ast.push(NodeKind::Var { name, index }, span)
}

fn build_call(ast: &mut Ast, diagnostics: &Diagnostics, pair: Pair<Rule>) -> NodeId {
    let span = span_of(&pair);
    let mut inner = pair.into_inner();
    let name = inner.next().expect("call has a name").as_str().to_string();
    let mut args = Vec::new();
    if let Some(arg_list) = inner.next() {
        for e in arg_list.into_inner() {
            args.push(build_expr(ast, diagnostics, e));
        }
    }
    ast.push(NodeKind::Call { name, args }, span)
}

fn strip_quotes(s: &str) -> &str {
    &s[1..s.len() - 1]
}
