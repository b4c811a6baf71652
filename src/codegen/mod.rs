//! LLVM IR emission.
//!
//! Functions are declared in one preorder sweep (so every call site, including
//! forward and mutually-recursive ones, resolves against an already-known LLVM
//! signature) and then defined one at a time; nesting in the source has no bearing on
//! nesting in the emitted module, since every Alan function — however deeply nested
//! lexically — becomes an independent top-level LLVM function. What nesting does
//! affect is the hidden reference parameters appended to a function's signature,
//! computed already by [`crate::semantic`].

pub mod context;
pub mod runtime;

use std::collections::HashMap;

use inkwell::context::Context;
use inkwell::module::Module;
use inkwell::types::BasicMetadataTypeEnum;
use inkwell::values::{BasicMetadataValueEnum, BasicValueEnum, FunctionValue, PointerValue};
use inkwell::IntPredicate;

use crate::ast::{Ast, Cond, NodeId, NodeKind, ParamMode};
use crate::diagnostics::Diagnostics;
use crate::types::Type;

use context::{CodegenContext, Storage};

struct FunctionInfo<'ctx> {
    value: FunctionValue<'ctx>,
    /// Explicit source parameters followed by synthesized hidden parameters, in the
    /// exact order the call-fixup pass appends matching actual arguments.
    param_layout: Vec<(String, Type, ParamMode)>,
    explicit_param_count: usize,
    ret: Type,
}

/// Emit a full module for `ast`, whose entry point is `ast.entry`. The caller is
/// expected to have already bailed out on `diagnostics.had_error()`.
pub fn compile<'ctx>(
    ast: &Ast,
    context: &'ctx Context,
    module_name: &str,
    diagnostics: &Diagnostics,
) -> Module<'ctx> {
    let mut ctx = CodegenContext::new(context, module_name);
    let entry = ast.entry.unwrap_or_else(|| {
        Diagnostics::internal("codegen invoked with no entry point");
    });

    let mut order = Vec::new();
    collect_functions(ast, entry, &mut order);

    let mut functions: HashMap<NodeId, FunctionInfo<'ctx>> = HashMap::new();
    for id in &order {
        declare_function(&mut ctx, ast, *id, &mut functions);
    }

    for id in &order {
        define_function(&mut ctx, ast, *id, &functions, diagnostics);
    }

    emit_main_shim(&mut ctx, &functions[&entry]);

    ctx.module
}

fn collect_functions(ast: &Ast, id: NodeId, out: &mut Vec<NodeId>) {
    out.push(id);
    let NodeKind::Func { locals, .. } = ast.get(id) else {
        return;
    };
    for local in locals {
        if matches!(ast.get(*local), NodeKind::Func { .. }) {
            collect_functions(ast, *local, out);
        }
    }
}

fn declare_function<'ctx>(
    ctx: &mut CodegenContext<'ctx>,
    ast: &Ast,
    id: NodeId,
    functions: &mut HashMap<NodeId, FunctionInfo<'ctx>>,
) {
    let NodeKind::Func {
        params, ret, emitted_name, ..
    } = ast.get(id)
    else {
        return;
    };

    let mut param_layout = Vec::new();
    for p in params {
        let NodeKind::Param { name, ty, mode } = ast.get(*p) else {
            continue;
        };
        param_layout.push((name.clone(), ty.clone(), *mode));
    }
    let explicit_param_count = param_layout.len();
    for h in ast.hidden_of(id) {
        param_layout.push((h.name.clone(), h.ty.clone(), ParamMode::Reference));
    }

    let llvm_params: Vec<BasicMetadataTypeEnum> = param_layout
        .iter()
        .map(|(_, ty, mode)| ctx.llvm_param_type(ty, *mode))
        .collect();

    let fn_type = match ret {
        Type::Void => ctx.context.void_type().fn_type(&llvm_params, false),
        other => ctx.llvm_type(other).fn_type(&llvm_params, false),
    };

    let name = emitted_name.clone().unwrap_or_else(|| {
        Diagnostics::internal("function reached codegen without an emitted name");
    });
    let value = ctx.module.add_function(&name, fn_type, None);

    functions.insert(
        id,
        FunctionInfo {
            value,
            param_layout,
            explicit_param_count,
            ret: ret.clone(),
        },
    );
}

fn define_function<'ctx>(
    ctx: &mut CodegenContext<'ctx>,
    ast: &Ast,
    id: NodeId,
    functions: &HashMap<NodeId, FunctionInfo<'ctx>>,
    diagnostics: &Diagnostics,
) {
    let NodeKind::Func { locals, body, ret, .. } = ast.get(id) else {
        return;
    };
    let info = &functions[&id];
    let entry_block = ctx.context.append_basic_block(info.value, "entry");
    ctx.enter_function(info.value, entry_block);

    for (i, (name, ty, mode)) in info.param_layout.iter().enumerate() {
        let llvm_param = info
            .value
            .get_nth_param(i as u32)
            .unwrap_or_else(|| Diagnostics::internal("parameter count mismatch in codegen"));
        if *mode == ParamMode::Reference || ty.is_array_like() {
            ctx.declare_local(name, Storage::Borrowed(llvm_param.into_pointer_value()), ty.clone());
        } else {
            let slot = ctx.builder.build_alloca(ctx.llvm_type(ty), name).unwrap();
            ctx.builder.build_store(slot, llvm_param).unwrap();
            ctx.declare_local(name, Storage::Owned(slot), ty.clone());
        }
    }

    for local in locals {
        if let NodeKind::VarDecl { name, ty } = ast.get(*local) {
            let slot = ctx.builder.build_alloca(ctx.llvm_type(ty), name).unwrap();
            ctx.declare_local(name, Storage::Owned(slot), ty.clone());
        }
    }

    gen_block(ctx, ast, functions, *body, diagnostics);

    // A path that falls off the end of a non-void function without hitting a `Ret`
    // is not a semantic error (see `crate::semantic`): synthesize a zero return of
    // the declared return type so the function stays well-formed.
    if !block_has_terminator(ctx) {
        match ret {
            Type::Void => {
                ctx.builder.build_return(None).unwrap();
            }
            Type::Int => {
                let zero = ctx.context.i32_type().const_int(0, false);
                ctx.builder.build_return(Some(&zero)).unwrap();
            }
            Type::Byte => {
                let zero = ctx.context.i8_type().const_int(0, false);
                ctx.builder.build_return(Some(&zero)).unwrap();
            }
            _ => Diagnostics::internal("function has non-scalar return type"),
        }
    }

    ctx.exit_function();
}

fn emit_main_shim<'ctx>(ctx: &mut CodegenContext<'ctx>, entry_info: &FunctionInfo<'ctx>) {
    let i32_t = ctx.context.i32_type();
    let fn_type = i32_t.fn_type(&[], false);
    let main_fn = ctx.module.add_function("main", fn_type, None);
    let block = ctx.context.append_basic_block(main_fn, "entry");
    ctx.builder.position_at_end(block);
    ctx.builder.build_call(entry_info.value, &[], "_").unwrap();
    ctx.builder.build_return(Some(&i32_t.const_int(0, false))).unwrap();
}

fn block_has_terminator(ctx: &CodegenContext) -> bool {
    ctx.builder
        .get_insert_block()
        .and_then(|b| b.get_terminator())
        .is_some()
}

fn gen_block<'ctx>(
    ctx: &mut CodegenContext<'ctx>,
    ast: &Ast,
    functions: &HashMap<NodeId, FunctionInfo<'ctx>>,
    block: NodeId,
    diagnostics: &Diagnostics,
) {
    let NodeKind::Block { statements } = ast.get(block) else {
        Diagnostics::internal("gen_block called on non-Block node");
    };
    for stmt in statements {
        if block_has_terminator(ctx) {
            break;
        }
        gen_stmt(ctx, ast, functions, *stmt, diagnostics);
    }
}

fn gen_stmt<'ctx>(
    ctx: &mut CodegenContext<'ctx>,
    ast: &Ast,
    functions: &HashMap<NodeId, FunctionInfo<'ctx>>,
    id: NodeId,
    diagnostics: &Diagnostics,
) {
    match ast.get(id) {
        NodeKind::Block { .. } => gen_block(ctx, ast, functions, id, diagnostics),
        NodeKind::IfElse {
            cond,
            then_branch,
            else_branch,
        } => {
            let cond_val = gen_cond(ctx, ast, functions, *cond, diagnostics);
            let function = ctx.current_function();
            let then_bb = ctx.context.append_basic_block(function, "if.then");
            let else_bb = ctx.context.append_basic_block(function, "if.else");
            let merge_bb = ctx.context.append_basic_block(function, "if.end");
            let has_else = else_branch.is_some();
            ctx.builder
                .build_conditional_branch(cond_val, then_bb, if has_else { else_bb } else { merge_bb })
                .unwrap();

            ctx.set_current_block(then_bb);
            gen_stmt(ctx, ast, functions, *then_branch, diagnostics);
            if !block_has_terminator(ctx) {
                ctx.builder.build_unconditional_branch(merge_bb).unwrap();
            }

            if let Some(else_id) = else_branch {
                ctx.set_current_block(else_bb);
                gen_stmt(ctx, ast, functions, *else_id, diagnostics);
                if !block_has_terminator(ctx) {
                    ctx.builder.build_unconditional_branch(merge_bb).unwrap();
                }
            } else {
                else_bb.remove_from_function().ok();
            }

            ctx.set_current_block(merge_bb);
        }
        NodeKind::While { cond, body } => {
            let function = ctx.current_function();
            let cond_bb = ctx.context.append_basic_block(function, "while.cond");
            let body_bb = ctx.context.append_basic_block(function, "while.body");
            let end_bb = ctx.context.append_basic_block(function, "while.end");

            ctx.builder.build_unconditional_branch(cond_bb).unwrap();
            ctx.set_current_block(cond_bb);
            let cond_val = gen_cond(ctx, ast, functions, *cond, diagnostics);
            ctx.builder.build_conditional_branch(cond_val, body_bb, end_bb).unwrap();

            ctx.set_current_block(body_bb);
            gen_stmt(ctx, ast, functions, *body, diagnostics);
            if !block_has_terminator(ctx) {
                ctx.builder.build_unconditional_branch(cond_bb).unwrap();
            }

            ctx.set_current_block(end_bb);
        }
        NodeKind::Assign { target, value } => {
            let value_val = gen_expr(ctx, ast, functions, *value, diagnostics);
            let addr = gen_lvalue(ctx, ast, functions, *target, diagnostics);
            ctx.builder.build_store(addr, value_val).unwrap();
        }
        NodeKind::Call { .. } => {
            gen_call(ctx, ast, functions, id, diagnostics);
        }
        NodeKind::Ret { value } => {
            match value {
                Some(v) => {
                    let val = gen_expr(ctx, ast, functions, *v, diagnostics);
                    ctx.builder.build_return(Some(&val)).unwrap();
                }
                None => {
                    ctx.builder.build_return(None).unwrap();
                }
            };
        }
        other => Diagnostics::internal(format!("unexpected statement node reached codegen: {other:?}")),
    }
}

fn gen_cond<'ctx>(
    ctx: &mut CodegenContext<'ctx>,
    ast: &Ast,
    functions: &HashMap<NodeId, FunctionInfo<'ctx>>,
    id: NodeId,
    diagnostics: &Diagnostics,
) -> inkwell::values::IntValue<'ctx> {
    let bool_t = ctx.context.bool_type();
    let NodeKind::Condition { op, lhs, rhs } = ast.get(id) else {
        Diagnostics::internal("gen_cond called on non-Condition node");
    };
    match op {
        Cond::True => bool_t.const_int(1, false),
        Cond::False => bool_t.const_int(0, false),
        Cond::Not => {
            let v = gen_cond(ctx, ast, functions, lhs.unwrap(), diagnostics);
            ctx.builder.build_not(v, "nottmp").unwrap()
        }
        Cond::And => {
            let l = gen_cond(ctx, ast, functions, lhs.unwrap(), diagnostics);
            let r = gen_cond(ctx, ast, functions, rhs.unwrap(), diagnostics);
            ctx.builder.build_and(l, r, "andtmp").unwrap()
        }
        Cond::Or => {
            let l = gen_cond(ctx, ast, functions, lhs.unwrap(), diagnostics);
            let r = gen_cond(ctx, ast, functions, rhs.unwrap(), diagnostics);
            ctx.builder.build_or(l, r, "ortmp").unwrap()
        }
        relational => {
            let l = gen_expr(ctx, ast, functions, lhs.unwrap(), diagnostics).into_int_value();
            let r = gen_expr(ctx, ast, functions, rhs.unwrap(), diagnostics).into_int_value();
            let pred = match relational {
                Cond::Lt => IntPredicate::SLT,
                Cond::Gt => IntPredicate::SGT,
                Cond::Le => IntPredicate::SLE,
                Cond::Ge => IntPredicate::SGE,
                Cond::Eq => IntPredicate::EQ,
                Cond::Neq => IntPredicate::NE,
                _ => unreachable!(),
            };
            ctx.builder.build_int_compare(pred, l, r, "cmptmp").unwrap()
        }
    }
}

fn gen_expr<'ctx>(
    ctx: &mut CodegenContext<'ctx>,
    ast: &Ast,
    functions: &HashMap<NodeId, FunctionInfo<'ctx>>,
    id: NodeId,
    diagnostics: &Diagnostics,
) -> BasicValueEnum<'ctx> {
    match ast.get(id) {
        NodeKind::IntLit(v) => ctx.context.i32_type().const_int(*v as u64, true).into(),
        NodeKind::ByteLit(v) => ctx.context.i8_type().const_int(*v as u64, false).into(),
        NodeKind::StringLit(s) => ctx
            .builder
            .build_global_string_ptr(s, "strlit")
            .unwrap()
            .as_pointer_value()
            .into(),
        NodeKind::Var { index: None, name } => {
            let (storage, ty) = ctx
                .lookup_local(name)
                .unwrap_or_else(|| Diagnostics::internal(format!("undeclared local '{name}' reached codegen")))
                .clone();
            let llvm_ty = ctx.llvm_type(&ty);
            ctx.builder.build_load(llvm_ty, storage.ptr(), name).unwrap()
        }
        NodeKind::Var { .. } => {
            let addr = gen_lvalue(ctx, ast, functions, id, diagnostics);
            let elem_ty = element_llvm_type(ctx, ast, id);
            ctx.builder.build_load(elem_ty, addr, "elemval").unwrap()
        }
        NodeKind::Arith { op, lhs, rhs } => {
            let l = gen_expr(ctx, ast, functions, *lhs, diagnostics).into_int_value();
            let r = gen_expr(ctx, ast, functions, *rhs, diagnostics).into_int_value();
            use crate::ast::ArithOp::*;
            match op {
                Add => ctx.builder.build_int_add(l, r, "addtmp").unwrap().into(),
                Sub => ctx.builder.build_int_sub(l, r, "subtmp").unwrap().into(),
                Mul => ctx.builder.build_int_mul(l, r, "multmp").unwrap().into(),
                Div => ctx.builder.build_int_signed_div(l, r, "divtmp").unwrap().into(),
                Mod => ctx.builder.build_int_signed_rem(l, r, "modtmp").unwrap().into(),
            }
        }
        NodeKind::Call { .. } => gen_call(ctx, ast, functions, id, diagnostics)
            .unwrap_or_else(|| Diagnostics::internal("call used as expression produced no value")),
        other => Diagnostics::internal(format!("unexpected expression node reached codegen: {other:?}")),
    }
}

fn element_llvm_type<'ctx>(ctx: &CodegenContext<'ctx>, ast: &Ast, var_id: NodeId) -> inkwell::types::BasicTypeEnum<'ctx> {
    let NodeKind::Var { name, .. } = ast.get(var_id) else {
        unreachable!()
    };
    let (_, ty) = ctx.lookup_local(name).expect("resolved at analysis time");
    ctx.llvm_type(ty.element_of())
}

/// Address of an lvalue: a bare `Var` yields its storage slot directly (for scalar
/// assignment or as a by-reference actual); an indexed `Var` yields the element's
/// address via a GEP, decaying an owned fixed-array slot through its `[0, i]` index
/// pair and indexing a borrowed (already-decayed) pointer with a bare `[i]`.
fn gen_lvalue<'ctx>(
    ctx: &mut CodegenContext<'ctx>,
    ast: &Ast,
    functions: &HashMap<NodeId, FunctionInfo<'ctx>>,
    id: NodeId,
    diagnostics: &Diagnostics,
) -> PointerValue<'ctx> {
    let NodeKind::Var { name, index } = ast.get(id) else {
        Diagnostics::internal("gen_lvalue called on a non-Var node")
    };
    let (storage, ty) = ctx
        .lookup_local(name)
        .unwrap_or_else(|| Diagnostics::internal(format!("undeclared local '{name}' reached codegen")))
        .clone();
    match index {
        None => storage.ptr(),
        Some(idx_id) => {
            let idx_val = gen_expr(ctx, ast, functions, *idx_id, diagnostics).into_int_value();
            let zero = ctx.context.i32_type().const_int(0, false);
            match storage {
                Storage::Owned(base) => {
                    let array_ty = ctx.llvm_type(&ty);
                    unsafe {
                        ctx.builder
                            .build_in_bounds_gep(array_ty, base, &[zero, idx_val], "elemptr")
                            .unwrap()
                    }
                }
                Storage::Borrowed(base) => {
                    let elem_ty = ctx.llvm_type(ty.element_of());
                    unsafe {
                        ctx.builder
                            .build_in_bounds_gep(elem_ty, base, &[idx_val], "elemptr")
                            .unwrap()
                    }
                }
            }
        }
    }
}

/// Address at which a whole array value lives, decayed to a pointer to its first
/// element: an owned fixed-size slot needs a `[0, 0]` GEP, a borrowed pointer is
/// already decayed.
fn array_decay<'ctx>(ctx: &CodegenContext<'ctx>, storage: Storage<'ctx>, ty: &Type) -> PointerValue<'ctx> {
    match storage {
        Storage::Borrowed(p) => p,
        Storage::Owned(base) => {
            let array_ty = ctx.llvm_type(ty);
            let zero = ctx.context.i32_type().const_int(0, false);
            unsafe {
                ctx.builder
                    .build_in_bounds_gep(array_ty, base, &[zero, zero], "decay")
                    .unwrap()
            }
        }
    }
}

fn gen_call<'ctx>(
    ctx: &mut CodegenContext<'ctx>,
    ast: &Ast,
    functions: &HashMap<NodeId, FunctionInfo<'ctx>>,
    id: NodeId,
    diagnostics: &Diagnostics,
) -> Option<BasicValueEnum<'ctx>> {
    let NodeKind::Call { name, args } = ast.get(id) else {
        Diagnostics::internal("gen_call called on a non-Call node");
    };

    // `ast.call_target_of` is the semantic analyzer's actually-resolved callee, which
    // already accounts for a user function shadowing a library name at an inner scope
    // (`Table::lookup`'s innermost-first `All` search). A bare name match against the
    // runtime primitives must only be consulted when there is *no* resolved user
    // target — i.e. the call genuinely bound to the library-scope entry — otherwise a
    // shadowing user function would silently get called with the runtime's fixed
    // arity instead of its own (hidden-argument-extended) signature.
    if let Some(target) = ast.call_target_of(id) {
        let info = &functions[&target];

        let mut llvm_args: Vec<BasicMetadataValueEnum> = Vec::new();
        for (i, a) in args.iter().enumerate().take(info.explicit_param_count) {
            let (_, formal_ty, mode) = &info.param_layout[i];
            llvm_args.push(gen_actual(ctx, ast, functions, *a, *mode, formal_ty, diagnostics));
        }
        for a in args.iter().skip(info.explicit_param_count) {
            // Hidden arguments are always synthesized bare Var nodes, passed by address.
            let addr = gen_lvalue(ctx, ast, functions, *a, diagnostics);
            llvm_args.push(addr.into());
        }

        let call_site = ctx.builder.build_call(info.value, &llvm_args, "calltmp").unwrap();
        return call_site.try_as_basic_value().left();
    }

    let rt_fn = ctx
        .runtime
        .lookup(name)
        .unwrap_or_else(|| Diagnostics::internal(format!("unresolved call to '{name}' reached codegen")));
    let mut llvm_args: Vec<BasicMetadataValueEnum> = Vec::new();
    for a in args {
        llvm_args.push(gen_runtime_actual(ctx, ast, functions, *a, diagnostics));
    }
    let call_site = ctx.builder.build_call(rt_fn, &llvm_args, "calltmp").unwrap();
    call_site.try_as_basic_value().left()
}

fn gen_actual<'ctx>(
    ctx: &mut CodegenContext<'ctx>,
    ast: &Ast,
    functions: &HashMap<NodeId, FunctionInfo<'ctx>>,
    arg_id: NodeId,
    mode: ParamMode,
    formal_ty: &Type,
    diagnostics: &Diagnostics,
) -> BasicMetadataValueEnum<'ctx> {
    if mode == ParamMode::Reference || formal_ty.is_array_like() {
        match ast.get(arg_id) {
            NodeKind::Var { name, index: None } => {
                let (storage, ty) = ctx.lookup_local(name).expect("resolved at analysis time").clone();
                if ty.is_array_like() {
                    array_decay(ctx, storage, &ty).into()
                } else {
                    storage.ptr().into()
                }
            }
            NodeKind::Var { .. } => gen_lvalue(ctx, ast, functions, arg_id, diagnostics).into(),
            // A string literal decays to a pointer to its global storage directly, the
            // same way it would for a runtime-primitive reference parameter: there is
            // no local slot to take the address of.
            NodeKind::StringLit(_) => gen_expr(ctx, ast, functions, arg_id, diagnostics).into(),
            other => Diagnostics::internal(format!("non-lvalue actual passed by reference: {other:?}")),
        }
    } else {
        gen_expr(ctx, ast, functions, arg_id, diagnostics).into()
    }
}

/// Runtime primitives take array actuals by a bare `i8*`/element pointer, never by
/// scalar reference, so the by-reference branch only ever needs the array-decay path.
fn gen_runtime_actual<'ctx>(
    ctx: &mut CodegenContext<'ctx>,
    ast: &Ast,
    functions: &HashMap<NodeId, FunctionInfo<'ctx>>,
    arg_id: NodeId,
    diagnostics: &Diagnostics,
) -> BasicMetadataValueEnum<'ctx> {
    match ast.get(arg_id) {
        NodeKind::Var { name, index: None } => {
            let (storage, ty) = ctx.lookup_local(name).expect("resolved at analysis time").clone();
            if ty.is_array_like() {
                array_decay(ctx, storage, &ty).into()
            } else {
                gen_expr(ctx, ast, functions, arg_id, diagnostics).into()
            }
        }
        _ => gen_expr(ctx, ast, functions, arg_id, diagnostics).into(),
    }
}
