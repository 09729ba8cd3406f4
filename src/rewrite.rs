//! Runtime type substitution pass.
//!
//! Rewrites every reference to a library type that has a designated
//! runtime equivalent, so that code generation emits runtime types instead
//! of source-language library types. Runs once per compilation unit, after
//! binding resolution and before emission, and mutates the tree in place.
//!
//! Two different mapping rules apply depending on the kind of reference
//! site. Signature and supertype sites (superclass, interface list, return
//! and parameter types) only describe a contract, so they use the oracle's
//! total `map_type`. Storage sites (fields, local variables, cast targets)
//! may need a more specific runtime representation, e.g. a wrapper for
//! fixed-size array-like types, so they use the partial
//! `map_declaration_type` and keep the written type whenever it declines.
//!
//! Sites whose binding could not be resolved (primitives, earlier resolver
//! failures already reported through diagnostics) are skipped silently.

use crate::ast::*;
use crate::bindings::BindingId;
use crate::diagnostics::TranslateError;
use crate::mapping::MappingOracle;
use crate::span::Spanned;
use crate::visit::{
    VisitMut, walk_expr_mut, walk_field_mut, walk_method_mut, walk_stmt_mut, walk_type_decl_mut,
};

/// Rewrite every type reference site in `unit` according to `oracle`.
///
/// The only failure mode is an internal inconsistency: a type that is
/// itself a mapping target must map to itself, and a violation means the
/// oracle or the resolver is broken, not that the input is bad. The tree
/// is not guaranteed to be usable after an error.
pub fn rewrite_unit<M: MappingOracle>(
    unit: &mut CompilationUnit,
    oracle: &M,
) -> Result<(), TranslateError> {
    let mut pass = TypeRewriter { oracle, failure: None };
    pass.visit_unit_mut(unit);
    match pass.failure {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

/// One instance per compilation unit; discarded after the traversal.
struct TypeRewriter<'a, M: MappingOracle> {
    oracle: &'a M,
    /// First internal inconsistency observed; traversal stops once set.
    failure: Option<TranslateError>,
}

impl<M: MappingOracle> TypeRewriter<'_, M> {
    /// Total mapping for signature sites: replace only when the mapped
    /// binding differs, skip unresolved references.
    fn rewrite_signature_site(&self, ty: &mut Spanned<TypeRef>) {
        let Some(binding) = ty.node.binding else {
            return; // primitives have no resolvable binding
        };
        let mapped = self.oracle.map_type(binding);
        if mapped != binding {
            ty.node = self.oracle.make_type_reference(mapped);
        }
    }

    /// Partial mapping for storage sites: replace the written type only if
    /// the declaration policy produces one. `binding` is the declarator's
    /// (or cast target's) resolved binding, not the written type's.
    fn rewrite_storage_site(&self, ty: &mut Spanned<TypeRef>, binding: Option<BindingId>) {
        let Some(binding) = binding else { return };
        if let Some(new_ty) = self.oracle.map_declaration_type(binding) {
            ty.node = new_ty;
        }
    }
}

impl<M: MappingOracle> VisitMut for TypeRewriter<'_, M> {
    fn visit_type_decl_mut(&mut self, decl: &mut Spanned<TypeDecl>) {
        if self.failure.is_some() {
            return;
        }

        // A type that is itself a mapping target must not be remapped to
        // something else; anything else means the oracle is inconsistent.
        if let Some(binding) = decl.node.binding {
            let mapped = self.oracle.map_type(binding);
            debug_assert_eq!(
                mapped, binding,
                "mapping target '{}' remaps to a different type",
                decl.node.name.node
            );
            if mapped != binding {
                self.failure = Some(TranslateError::internal(
                    format!(
                        "type '{}' is a mapping target but remaps to a different type",
                        decl.node.name.node
                    ),
                    decl.span,
                ));
                return;
            }
        }

        if !decl.node.is_interface() {
            match &decl.node.superclass {
                // Interfaces never receive an implicit superclass; concrete
                // declarations without a written one extend the root type.
                None => {
                    decl.node.superclass =
                        Some(Spanned::dummy(self.oracle.root_object_type()));
                }
                Some(superclass) => {
                    if let Some(binding) = superclass.node.binding {
                        if self.oracle.has_runtime_equivalent(binding) {
                            let mapped = self.oracle.map_type(binding);
                            let span = superclass.span;
                            decl.node.superclass = Some(Spanned::new(
                                self.oracle.make_type_reference(mapped),
                                span,
                            ));
                        }
                    }
                }
            }
        }

        // Index-for-index replacement; list length and order are invariant.
        for interface in &mut decl.node.interfaces {
            if let Some(binding) = interface.node.binding {
                if self.oracle.has_runtime_equivalent(binding) {
                    let mapped = self.oracle.map_type(binding);
                    interface.node = self.oracle.make_type_reference(mapped);
                }
            }
        }

        walk_type_decl_mut(self, decl);
    }

    fn visit_method_mut(&mut self, method: &mut Spanned<MethodDecl>) {
        if self.failure.is_some() {
            return;
        }

        if let Some(rt) = &mut method.node.return_type {
            self.rewrite_signature_site(rt);
        }
        for param in &mut method.node.params {
            self.rewrite_signature_site(&mut param.ty);
        }

        walk_method_mut(self, method);
    }

    fn visit_field_mut(&mut self, field: &mut FieldDecl) {
        // Each co-declared name carries its own binding; any declarator
        // with a declaration mapping rewrites the shared written type.
        for i in 0..field.declarators.len() {
            let binding = field.declarators[i].binding;
            self.rewrite_storage_site(&mut field.ty, binding);
        }
        walk_field_mut(self, field);
    }

    fn visit_stmt_mut(&mut self, stmt: &mut Spanned<Stmt>) {
        if let Stmt::LocalVar { ty, declarators } = &mut stmt.node {
            for declarator in declarators.iter() {
                self.rewrite_storage_site(ty, declarator.binding);
            }
        }
        walk_stmt_mut(self, stmt);
    }

    fn visit_expr_mut(&mut self, expr: &mut Spanned<Expr>) {
        // Only the written target type of a cast; the operand is left to
        // the generic traversal below.
        if let Expr::Cast { target_type, .. } = &mut expr.node {
            let binding = target_type.node.binding;
            self.rewrite_storage_site(target_type, binding);
        }
        walk_expr_mut(self, expr);
    }
}
