//! Per-compile mutable state.

use serde::{Deserialize, Serialize};

use crate::ast::Value;

/// A named placeholder and the value bound to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Binding {
    /// Placeholder name as it appears in the raw SQL (`@p1`, `@p2`, ...).
    pub name: String,
    pub value: Value,
}

/// Context for one `compile()` call.
///
/// Dialect compiler values carry configuration only; every mutable
/// intermediate (the binding list, the inline-mode flag) lives here, created
/// fresh per call and discarded after. That is what makes concurrent
/// `compile()` calls on a shared compiler safe without locking.
#[derive(Debug, Default)]
pub struct CompileContext {
    index: usize,
    pub bindings: Vec<Binding>,
    /// When set, values render as inline literals instead of placeholders.
    /// Used for JOIN ON clauses, which the drivers reject parameters in.
    pub inline_values: bool,
}

impl CompileContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a value to the binding list and return its placeholder.
    ///
    /// Placeholders are allocated in the order clauses are compiled, which is
    /// also their textual order in the SQL; the positional rewrite relies on
    /// the two orders matching.
    pub fn bind(&mut self, value: Value) -> String {
        self.index += 1;
        let name = format!("@p{}", self.index);
        self.bindings.push(Binding {
            name: name.clone(),
            value,
        });
        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_allocates_in_order() {
        let mut ctx = CompileContext::new();
        assert_eq!(ctx.bind(Value::Int(1)), "@p1");
        assert_eq!(ctx.bind(Value::Bool(true)), "@p2");
        assert_eq!(ctx.bindings.len(), 2);
        assert_eq!(ctx.bindings[0].name, "@p1");
    }
}
