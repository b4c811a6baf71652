pub mod entry;
pub mod table;

pub use entry::{Entry, FunctionEntry, ParameterEntry, VariableEntry};
pub use table::{init_symbol_table, Lookup, Table};
