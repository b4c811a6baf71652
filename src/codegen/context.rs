//! Per-compilation codegen state: the LLVM context/module/builder triple, the runtime
//! declarations, and the generation stack of currently-open function frames.
//!
//! The generation stack is one frame per function *currently being emitted*, not one
//! frame per lexical block: Alan's nested function declarations compile down to
//! sibling LLVM functions rather than nested blocks, so emitting a nested function
//! means pushing a fresh frame, emitting its body in full, then popping back to the
//! enclosing function and restoring the builder's insertion point there. This is the
//! load-bearing divergence from a flat block-scope stack.

use std::collections::HashMap;

use inkwell::basic_block::BasicBlock;
use inkwell::builder::Builder;
use inkwell::context::Context;
use inkwell::module::Module;
use inkwell::types::{BasicMetadataTypeEnum, BasicType, BasicTypeEnum};
use inkwell::values::{FunctionValue, PointerValue};
use inkwell::AddressSpace;

use crate::ast::ParamMode;
use crate::types::Type;

use super::runtime::Runtime;

/// Where a local's storage actually lives.
#[derive(Clone, Copy)]
pub enum Storage<'ctx> {
    /// An `alloca`'d slot owned by this frame: load/store through it directly.
    Owned(PointerValue<'ctx>),
    /// A pointer received from the caller (an explicit or hidden reference
    /// parameter): already the address to read/write through, never re-alloca'd.
    Borrowed(PointerValue<'ctx>),
}

impl<'ctx> Storage<'ctx> {
    pub fn ptr(&self) -> PointerValue<'ctx> {
        match self {
            Storage::Owned(p) | Storage::Borrowed(p) => *p,
        }
    }
}

pub struct Frame<'ctx> {
    pub function: FunctionValue<'ctx>,
    pub vars: HashMap<String, (Storage<'ctx>, Type)>,
    pub current_block: BasicBlock<'ctx>,
}

pub struct CodegenContext<'ctx> {
    pub context: &'ctx Context,
    pub module: Module<'ctx>,
    pub builder: Builder<'ctx>,
    pub runtime: Runtime<'ctx>,
    stack: Vec<Frame<'ctx>>,
}

impl<'ctx> CodegenContext<'ctx> {
    pub fn new(context: &'ctx Context, module_name: &str) -> CodegenContext<'ctx> {
        let module = context.create_module(module_name);
        let runtime = Runtime::declare(context, &module);
        CodegenContext {
            context,
            module,
            builder: context.create_builder(),
            runtime,
            stack: Vec::new(),
        }
    }

    pub fn enter_function(&mut self, function: FunctionValue<'ctx>, entry: BasicBlock<'ctx>) {
        self.stack.push(Frame {
            function,
            vars: HashMap::new(),
            current_block: entry,
        });
        self.builder.position_at_end(entry);
    }

    pub fn exit_function(&mut self) {
        self.stack.pop();
        if let Some(parent) = self.stack.last() {
            self.builder.position_at_end(parent.current_block);
        }
    }

    pub fn current_function(&self) -> FunctionValue<'ctx> {
        self.stack.last().expect("no open function frame").function
    }

    pub fn set_current_block(&mut self, block: BasicBlock<'ctx>) {
        self.stack.last_mut().expect("no open function frame").current_block = block;
        self.builder.position_at_end(block);
    }

    pub fn declare_local(&mut self, name: &str, storage: Storage<'ctx>, ty: Type) {
        self.stack
            .last_mut()
            .expect("no open function frame")
            .vars
            .insert(name.to_string(), (storage, ty));
    }

    pub fn lookup_local(&self, name: &str) -> Option<&(Storage<'ctx>, Type)> {
        self.stack.last()?.vars.get(name)
    }

    /// LLVM representation of an Alan value type: scalars map directly, fixed arrays
    /// become `[N x elem]`, and `IArray` (which only ever appears behind a pointer)
    /// maps to its element type, to be wrapped in a pointer by the caller.
    pub fn llvm_type(&self, ty: &Type) -> BasicTypeEnum<'ctx> {
        match ty {
            Type::Int => self.context.i32_type().into(),
            Type::Byte => self.context.i8_type().into(),
            Type::Array { size, elem } => self.llvm_type(elem).array_type(*size as u32).into(),
            Type::IArray { elem } => self.llvm_type(elem),
            Type::Void => unreachable!("internal error: void has no value representation"),
        }
    }

    /// LLVM representation of a formal parameter: reference-mode and array-like
    /// parameters pass a pointer to the element type; value-mode scalars pass the
    /// scalar directly.
    pub fn llvm_param_type(&self, ty: &Type, mode: ParamMode) -> BasicMetadataTypeEnum<'ctx> {
        if mode == ParamMode::Reference || ty.is_array_like() {
            let elem = if ty.is_array_like() { ty.element_of() } else { ty };
            self.llvm_type(elem).ptr_type(AddressSpace::default()).into()
        } else {
            self.llvm_type(ty).into()
        }
    }
}
