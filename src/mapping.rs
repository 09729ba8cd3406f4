//! Library-type to runtime-type mapping policy.
//!
//! The rewriting pass never decides *what* maps to what; it asks an oracle.
//! The oracle is built once before any compilation unit is processed and is
//! never mutated afterwards, so independent pass instances can read it from
//! multiple threads without synchronization.

use std::collections::HashMap;

use crate::ast::TypeRef;
use crate::bindings::{BindingId, BindingTable};

/// Mapping policy consulted at every reference site.
///
/// Two invariants hold for any correct implementation:
/// - `map_type` is idempotent: a mapping target maps to itself.
/// - `has_runtime_equivalent(b)` implies `map_type(b) != b`.
pub trait MappingOracle {
    /// Total mapping used at signature and supertype sites. Identity for
    /// types with no runtime equivalent.
    fn map_type(&self, b: BindingId) -> BindingId;

    fn has_runtime_equivalent(&self, b: BindingId) -> bool {
        self.map_type(b) != b
    }

    /// Partial mapping used at storage sites (fields, locals, cast
    /// targets). May decline even when `has_runtime_equivalent` holds,
    /// because storage representations follow stricter rules than
    /// signature contracts.
    fn map_declaration_type(&self, b: BindingId) -> Option<TypeRef>;

    /// The universal base type injected for classes with no written
    /// superclass.
    fn root_object_type(&self) -> TypeRef;

    /// Build a written reference for a runtime type binding.
    fn make_type_reference(&self, b: BindingId) -> TypeRef;
}

/// Table-driven `MappingOracle`. Content is configuration supplied by the
/// pipeline at startup; the crate ships no built-in type table.
///
/// The declaration-site table is deliberately independent of the total
/// map: an entry in one implies nothing about the other.
#[derive(Debug)]
pub struct TypeMap {
    root: BindingId,
    mapped: HashMap<BindingId, BindingId>,
    decl_mapped: HashMap<BindingId, BindingId>,
    /// Snapshot of the resolver's names, indexed by `BindingId`.
    names: Vec<String>,
}

impl TypeMap {
    /// Snapshot `table` and designate `root` as the root object type.
    /// Every binding used with this map must already be interned.
    pub fn new(table: &BindingTable, root: BindingId) -> Self {
        Self {
            root,
            mapped: HashMap::new(),
            decl_mapped: HashMap::new(),
            names: table.names().to_vec(),
        }
    }

    /// Register a total-map entry. Targets are never themselves remapped;
    /// registering a chain is a configuration bug.
    pub fn add_mapping(&mut self, from: BindingId, to: BindingId) {
        debug_assert_ne!(from, to, "identity entries are implicit");
        debug_assert!(
            !self.mapped.contains_key(&to),
            "mapping target must map to itself"
        );
        self.mapped.insert(from, to);
    }

    /// Register a declaration-site entry (fields, locals, cast targets).
    pub fn add_declaration_mapping(&mut self, from: BindingId, to: BindingId) {
        debug_assert_ne!(from, to, "identity entries are implicit");
        self.decl_mapped.insert(from, to);
    }

    fn reference(&self, b: BindingId) -> TypeRef {
        TypeRef::new(self.names[b.0 as usize].clone(), b)
    }
}

impl MappingOracle for TypeMap {
    fn map_type(&self, b: BindingId) -> BindingId {
        self.mapped.get(&b).copied().unwrap_or(b)
    }

    fn map_declaration_type(&self, b: BindingId) -> Option<TypeRef> {
        self.decl_mapped.get(&b).map(|&to| self.reference(to))
    }

    fn root_object_type(&self) -> TypeRef {
        self.reference(self.root)
    }

    fn make_type_reference(&self, b: BindingId) -> TypeRef {
        self.reference(b)
    }
}
