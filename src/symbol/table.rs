//! Scoped symbol table with hidden-parameter propagation.
//!
//! Scopes nest one per function body; level 0 is reserved for the runtime library
//! primitives ([`Table::add_libs`]), level 1 is the outermost user function. Each scope
//! owns a plain `Vec`-backed frame rather than a shared, reference-counted cell: Alan
//! functions never outlive the scope that declared them and nothing aliases a frame
//! from two places at once, so the extra indirection a closure-capable language needs
//! buys nothing here.

use std::collections::HashMap;

use crate::ast::{HiddenParam, NodeId, ParamMode};
use crate::types::Type;

use super::entry::{Entry, FunctionEntry, ParameterEntry, VariableEntry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    /// Only the innermost (current) scope.
    Current,
    /// The full enclosing scope chain, outermost-last.
    All,
}

struct Frame {
    nesting_level: usize,
    /// Name of the function this scope is the body of, `None` for the library scope.
    function_name: Option<String>,
    entries: HashMap<String, Entry>,
    /// Declaration order within the frame; its length at the moment of insertion is
    /// handed out as the entry's `offset` (`spec.md` §4.2's post-increment counter).
    order: Vec<String>,
    /// Number of `Ret` statements seen so far in this frame's body, written by
    /// `Table::add_return` and copied into the enclosing scope's `FunctionEntry` when
    /// this frame closes.
    return_count: usize,
}

pub struct Table {
    frames: Vec<Frame>,
}

impl Table {
    pub fn new() -> Table {
        Table { frames: Vec::new() }
    }

    pub fn nesting_level(&self) -> usize {
        self.frames.len().saturating_sub(1)
    }

    pub fn open_scope(&mut self, function_name: Option<String>) {
        let level = self.frames.len();
        self.frames.push(Frame {
            nesting_level: level,
            function_name,
            entries: HashMap::new(),
            order: Vec::new(),
            return_count: 0,
        });
    }

    /// Pop the innermost scope, dropping every entry declared at or above its
    /// nesting level. If the closing scope was a function body, its final
    /// `return_count` is copied into that function's `FunctionEntry` in the
    /// enclosing scope (mirroring `spec.md` §4.2's `addReturn`/`scopeType`
    /// contract — the count is tracked per-frame while the body is open because
    /// the `FunctionEntry` itself lives one scope further out).
    pub fn close_scope(&mut self) {
        let Some(frame) = self.frames.pop() else { return };
        if let Some(name) = &frame.function_name {
            if let Some(parent) = self.frames.last_mut() {
                if let Some(Entry::Function(fe)) = parent.entries.get_mut(name) {
                    fe.return_count = frame.return_count;
                }
            }
        }
    }

    /// Record a `Ret` statement against the innermost (currently open) function
    /// scope. Mirrors `spec.md` §4.2's `addReturn()`.
    pub fn add_return(&mut self) {
        if let Some(frame) = self.frames.last_mut() {
            frame.return_count += 1;
        }
    }

    /// Insert a new entry into the current (innermost) scope. Returns `Err` with the
    /// colliding entry if `name` is already declared in this exact scope (Alan forbids
    /// redeclaration within one scope, but shadowing an outer scope is fine).
    pub fn insert(&mut self, name: &str, entry: Entry) -> Result<(), Entry> {
        let frame = self.frames.last_mut().expect("no open scope");
        if let Some(existing) = frame.entries.get(name) {
            return Err(existing.clone());
        }
        frame.order.push(name.to_string());
        frame.entries.insert(name.to_string(), entry);
        Ok(())
    }

    pub fn insert_variable(&mut self, name: &str, ty: Type) -> Result<(), Entry> {
        let nesting_level = self.nesting_level();
        let offset = self.frames.last().map(|f| f.order.len()).unwrap_or(0);
        self.insert(
            name,
            Entry::Variable(VariableEntry {
                ty,
                nesting_level,
                offset,
            }),
        )
    }

    pub fn insert_parameter(&mut self, name: &str, ty: Type, mode: ParamMode) -> Result<(), String> {
        let nesting_level = self.nesting_level();
        let offset = self.frames.last().map(|f| f.order.len()).unwrap_or(0);
        let entry = ParameterEntry::new(ty, mode, nesting_level, offset)?;
        self.insert(name, Entry::Parameter(entry))
            .map_err(|_| format!("parameter '{name}' already declared"))
    }

    pub fn insert_function(
        &mut self,
        name: &str,
        node: NodeId,
        params: Vec<(Type, ParamMode)>,
        returns: Type,
    ) -> Result<(), Entry> {
        let nesting_level = self.nesting_level();
        self.insert(
            name,
            Entry::Function(FunctionEntry {
                node,
                params,
                hidden: Vec::new(),
                returns,
                nesting_level,
                return_count: 0,
            }),
        )
    }

    /// Look up `name`, either only in the current scope or walking outward through
    /// every enclosing scope until found. Returns the entry together with the nesting
    /// level of the scope it was found in.
    pub fn lookup(&self, name: &str, mode: Lookup) -> Option<(&Entry, usize)> {
        match mode {
            Lookup::Current => {
                let frame = self.frames.last()?;
                frame.entries.get(name).map(|e| (e, frame.nesting_level))
            }
            Lookup::All => {
                for frame in self.frames.iter().rev() {
                    if let Some(e) = frame.entries.get(name) {
                        return Some((e, frame.nesting_level));
                    }
                }
                None
            }
        }
    }

    pub fn current_function_name(&self) -> Option<&str> {
        self.frames.last()?.function_name.as_deref()
    }

    /// Propagate a hidden (by-reference capture) parameter through every scope between
    /// `from_level` (exclusive, where the variable actually lives) and the current
    /// scope (inclusive), synthesizing an intermediate parameter entry in each
    /// intervening function so the capture chains correctly through nested calls.
    ///
    /// Mirrors the reference compiler's `addHidden`/hidden-variable walk: a variable
    /// captured two levels down is threaded through every function in between as a
    /// pass-by-reference parameter, not just smuggled directly to the innermost use.
    pub fn add_hidden(&mut self, from_level: usize, name: &str, ty: Type) {
        for frame in self.frames.iter_mut() {
            if frame.nesting_level <= from_level || frame.function_name.is_none() {
                continue;
            }
            // Recording the Entry::Function's own hidden-parameter list happens in the
            // semantic analyzer (keyed by NodeId, via Ast::hidden); this loop only needs
            // to make the captured name resolvable as a local reference parameter in
            // every intervening scope so the rest of that scope's body can use it as if
            // it were declared locally.
            if !frame.entries.contains_key(name) {
                let offset = frame.order.len();
                let nesting_level = frame.nesting_level;
                frame.order.push(name.to_string());
                frame.entries.insert(
                    name.to_string(),
                    Entry::Parameter(ParameterEntry {
                        ty: ty.clone(),
                        mode: ParamMode::Reference,
                        nesting_level,
                        offset,
                    }),
                );
            }
        }
    }

    /// Seed the library scope (nesting level 0) with the 13 runtime primitives, so
    /// ordinary `Call` resolution finds them exactly like any user-declared function.
    pub fn add_libs(&mut self) {
        use Type::*;
        let iarray_byte = Type::iarray(Byte);
        let libs: &[(&str, &[(Type, ParamMode)], Type)] = &[
            ("writeInteger", &[], Void),
            ("writeByte", &[], Void),
            ("writeChar", &[], Void),
            ("writeString", &[], Void),
            ("readInteger", &[], Int),
            ("readByte", &[], Byte),
            ("readChar", &[], Byte),
            ("readString", &[], Void),
            ("extend", &[], Int),
            ("shrink", &[], Byte),
            ("strlen", &[], Int),
            ("strcmp", &[], Int),
            ("strcpy", &[], Void),
            ("strcat", &[], Void),
        ];
        // Exact per-primitive signatures (param lists differ; declared explicitly below
        // rather than in the slice above, since they aren't uniform).
        let sig = |name: &str| -> Vec<(Type, ParamMode)> {
            match name {
                "writeInteger" => vec![(Int, ParamMode::Value)],
                "writeByte" => vec![(Byte, ParamMode::Value)],
                "writeChar" => vec![(Byte, ParamMode::Value)],
                "writeString" => vec![(iarray_byte.clone(), ParamMode::Reference)],
                "readInteger" => vec![],
                "readByte" => vec![],
                "readChar" => vec![],
                "readString" => vec![
                    (Int, ParamMode::Value),
                    (iarray_byte.clone(), ParamMode::Reference),
                ],
                "extend" => vec![(Byte, ParamMode::Value)],
                "shrink" => vec![(Int, ParamMode::Value)],
                "strlen" => vec![(iarray_byte.clone(), ParamMode::Reference)],
                "strcmp" => vec![
                    (iarray_byte.clone(), ParamMode::Reference),
                    (iarray_byte.clone(), ParamMode::Reference),
                ],
                "strcpy" => vec![
                    (iarray_byte.clone(), ParamMode::Reference),
                    (iarray_byte.clone(), ParamMode::Reference),
                ],
                "strcat" => vec![
                    (iarray_byte.clone(), ParamMode::Reference),
                    (iarray_byte.clone(), ParamMode::Reference),
                ],
                _ => unreachable!(),
            }
        };
        for (name, _, ret) in libs {
            let params = sig(name);
            let _ = self.insert(
                name,
                Entry::Function(FunctionEntry {
                    node: NodeId(usize::MAX),
                    params,
                    hidden: Vec::new(),
                    returns: ret.clone(),
                    nesting_level: 0,
                    return_count: 0,
                }),
            );
        }
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}

pub fn init_symbol_table() -> Table {
    let mut table = Table::new();
    table.open_scope(None);
    table.add_libs();
    table
}

pub type HiddenSet = Vec<HiddenParam>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closing_the_innermost_scope_drops_its_entries_from_lookup() {
        let mut table = init_symbol_table();
        table.open_scope(Some("outer".to_string()));
        table.insert_variable("x", Type::Int).unwrap();
        assert!(table.lookup("x", Lookup::Current).is_some());

        table.close_scope();

        assert!(table.lookup("x", Lookup::All).is_none());
        // The library scope beneath it is untouched.
        assert!(table.lookup("writeInteger", Lookup::All).is_some());
    }
}
