//! Type-substitution middle-end of a source-to-source translator.
//!
//! Consumes one compilation unit's resolved syntax tree and rewrites every
//! reference to a library type that has a designated runtime equivalent,
//! so that downstream emission produces target-runtime types. Parsing,
//! name resolution, mapping-table content, and code generation live in
//! other stages; this crate owns the tree model, the binding interner, the
//! mapping-oracle seam, the visitor infrastructure, and the pass itself.
//!
//! Pipeline position: parser → resolver → **type rewriting** → emitter.
//!
//! The oracle is immutable after startup, so independent compilation units
//! may be rewritten in parallel, one pass instance each.

pub mod span;
pub mod diagnostics;
pub mod ast;
pub mod bindings;
pub mod mapping;
pub mod visit;
pub mod rewrite;

pub use rewrite::rewrite_unit;
