//! Interned type bindings.
//!
//! A `BindingId` is the resolved identity of a type as produced by semantic
//! analysis. The resolver interns every type name exactly once, so two
//! reference sites that denote the same type carry the same id and identity
//! comparison is plain `==`. The rewriting pass depends on that guarantee
//! but does not enforce it; the table here is what enforces it.

use std::collections::HashMap;

/// Index into a `BindingTable`. Stable for the lifetime of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct BindingId(pub u32);

/// Interning table mapping type names to binding ids.
///
/// Append-only: ids are never invalidated or reused. One table is built per
/// resolver run and shared read-only by every pass that follows it.
#[derive(Debug, Default)]
pub struct BindingTable {
    names: Vec<String>,
    ids: HashMap<String, BindingId>,
}

impl BindingTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern `name`, returning the existing id if it was seen before.
    pub fn intern(&mut self, name: &str) -> BindingId {
        if let Some(&id) = self.ids.get(name) {
            return id;
        }
        let id = BindingId(self.names.len() as u32);
        self.names.push(name.to_string());
        self.ids.insert(name.to_string(), id);
        id
    }

    pub fn lookup(&self, name: &str) -> Option<BindingId> {
        self.ids.get(name).copied()
    }

    pub fn name_of(&self, id: BindingId) -> &str {
        &self.names[id.0 as usize]
    }

    /// Names in interning order, indexed by `BindingId`.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
