//! Declarations for the 13 runtime primitives linked in from the separately-built
//! `lib.c` support library. Signatures are fixed by that library's C ABI, not by
//! anything the compiler chooses; exact types are unrelated to whether the Rust
//! implementation would have picked differently.

use inkwell::context::Context;
use inkwell::module::Module;
use inkwell::values::FunctionValue;
use inkwell::AddressSpace;

pub struct Runtime<'ctx> {
    pub write_integer: FunctionValue<'ctx>,
    pub write_byte: FunctionValue<'ctx>,
    pub write_char: FunctionValue<'ctx>,
    pub write_string: FunctionValue<'ctx>,
    pub read_integer: FunctionValue<'ctx>,
    pub read_byte: FunctionValue<'ctx>,
    pub read_char: FunctionValue<'ctx>,
    pub read_string: FunctionValue<'ctx>,
    pub extend: FunctionValue<'ctx>,
    pub shrink: FunctionValue<'ctx>,
    pub strlen: FunctionValue<'ctx>,
    pub strcmp: FunctionValue<'ctx>,
    pub strcpy: FunctionValue<'ctx>,
    pub strcat: FunctionValue<'ctx>,
}

impl<'ctx> Runtime<'ctx> {
    pub fn declare(context: &'ctx Context, module: &Module<'ctx>) -> Runtime<'ctx> {
        let i32_t = context.i32_type();
        let i8_t = context.i8_type();
        let void_t = context.void_type();
        let ptr_t = i8_t.ptr_type(AddressSpace::default());

        let decl = |name: &str, fn_type| module.add_function(name, fn_type, None);

        Runtime {
            write_integer: decl("writeInteger", void_t.fn_type(&[i32_t.into()], false)),
            write_byte: decl("writeByte", void_t.fn_type(&[i8_t.into()], false)),
            write_char: decl("writeChar", void_t.fn_type(&[i8_t.into()], false)),
            write_string: decl("writeString", void_t.fn_type(&[ptr_t.into()], false)),
            read_integer: decl("readInteger", i32_t.fn_type(&[], false)),
            read_byte: decl("readByte", i8_t.fn_type(&[], false)),
            read_char: decl("readChar", i8_t.fn_type(&[], false)),
            read_string: decl("readString", void_t.fn_type(&[i32_t.into(), ptr_t.into()], false)),
            extend: decl("extend", i32_t.fn_type(&[i8_t.into()], false)),
            shrink: decl("shrink", i8_t.fn_type(&[i32_t.into()], false)),
            strlen: decl("strlen", i32_t.fn_type(&[ptr_t.into()], false)),
            strcmp: decl("strcmp", i32_t.fn_type(&[ptr_t.into(), ptr_t.into()], false)),
            strcpy: decl("strcpy", void_t.fn_type(&[ptr_t.into(), ptr_t.into()], false)),
            strcat: decl("strcat", void_t.fn_type(&[ptr_t.into(), ptr_t.into()], false)),
        }
    }

    pub fn lookup(&self, name: &str) -> Option<FunctionValue<'ctx>> {
        Some(match name {
            "writeInteger" => self.write_integer,
            "writeByte" => self.write_byte,
            "writeChar" => self.write_char,
            "writeString" => self.write_string,
            "readInteger" => self.read_integer,
            "readByte" => self.read_byte,
            "readChar" => self.read_char,
            "readString" => self.read_string,
            "extend" => self.extend,
            "shrink" => self.shrink,
            "strlen" => self.strlen,
            "strcmp" => self.strcmp,
            "strcpy" => self.strcpy,
            "strcat" => self.strcat,
            _ => return None,
        })
    }
}
