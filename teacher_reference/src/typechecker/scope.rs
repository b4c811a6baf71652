use std::collections::HashMap;

use super::types::Type;

#[derive(Debug, Clone)]
pub struct Scope {
    stacks: Vec<HashMap<String, Type>>,
}

impl Scope {
    pub fn new() -> Scope {
        Scope {
            stacks: vec![HashMap::new()],
        }
    }

    pub fn enter_scope(&mut self) {
        self.stacks.push(HashMap::new())
    }

    pub fn exit_scope(&mut self) {
        self.stacks.pop();
    }

    pub fn add_variable(&mut self, name: impl ToString, type_id: Type) {
        self.stacks
            .last_mut()
            .and_then(|scope| scope.insert(name.to_string(), type_id));
    }

    pub fn get_variable(&mut self, name: impl ToString) -> Option<Type> {
        let name = name.to_string();
        self.stacks
            .iter()
            .rev()
            .find(|scope| scope.contains_key(&name))
            .and_then(|scope| scope.get(&name).cloned())
    }
}
