//! Syntax tree visitor infrastructure.
//!
//! Two visitor traits and corresponding walk functions for traversing a
//! resolved compilation unit:
//!
//! - `Visitor` — immutable reference traversal (analysis/collection passes)
//! - `VisitMut` — mutable reference traversal (in-place rewriting passes)
//!
//! Implement the trait for your pass, overriding only the methods you need.
//! Call the corresponding `walk_*` function inside your override to get the
//! default recursion; omit it to prune traversal at that node.
//!
//! Traversal is pre-order and depth-first in source order: a type
//! declaration's own reference sites (superclass, interface list) come
//! before its members, and a method's signature comes before its body.

use crate::ast::*;
use crate::span::Spanned;

// ============================================================================
// Visitor Trait (Read-Only)
// ============================================================================

/// Read-only visitor. Default implementations recurse into all children.
pub trait Visitor: Sized {
    fn visit_unit(&mut self, unit: &CompilationUnit) {
        walk_unit(self, unit);
    }

    fn visit_type_decl(&mut self, decl: &Spanned<TypeDecl>) {
        walk_type_decl(self, decl);
    }

    fn visit_field(&mut self, field: &FieldDecl) {
        walk_field(self, field);
    }

    fn visit_method(&mut self, method: &Spanned<MethodDecl>) {
        walk_method(self, method);
    }

    fn visit_block(&mut self, block: &Spanned<Block>) {
        walk_block(self, block);
    }

    fn visit_stmt(&mut self, stmt: &Spanned<Stmt>) {
        walk_stmt(self, stmt);
    }

    fn visit_expr(&mut self, expr: &Spanned<Expr>) {
        walk_expr(self, expr);
    }

    fn visit_type_ref(&mut self, ty: &Spanned<TypeRef>) {
        walk_type_ref(self, ty);
    }
}

// ============================================================================
// Walk Functions (Read-Only)
// ============================================================================

pub fn walk_unit<V: Visitor>(v: &mut V, unit: &CompilationUnit) {
    for decl in &unit.types {
        v.visit_type_decl(decl);
    }
}

pub fn walk_type_decl<V: Visitor>(v: &mut V, decl: &Spanned<TypeDecl>) {
    // Own reference sites before members
    if let Some(superclass) = &decl.node.superclass {
        v.visit_type_ref(superclass);
    }
    for interface in &decl.node.interfaces {
        v.visit_type_ref(interface);
    }
    for field in &decl.node.fields {
        v.visit_field(field);
    }
    for method in &decl.node.methods {
        v.visit_method(method);
    }
    for nested in &decl.node.nested {
        v.visit_type_decl(nested);
    }
}

pub fn walk_field<V: Visitor>(v: &mut V, field: &FieldDecl) {
    v.visit_type_ref(&field.ty);
    for declarator in &field.declarators {
        if let Some(init) = &declarator.init {
            v.visit_expr(init);
        }
    }
}

pub fn walk_method<V: Visitor>(v: &mut V, method: &Spanned<MethodDecl>) {
    // Signature before body
    for param in &method.node.params {
        v.visit_type_ref(&param.ty);
    }
    if let Some(rt) = &method.node.return_type {
        v.visit_type_ref(rt);
    }
    if let Some(body) = &method.node.body {
        v.visit_block(body);
    }
}

pub fn walk_block<V: Visitor>(v: &mut V, block: &Spanned<Block>) {
    for stmt in &block.node.stmts {
        v.visit_stmt(stmt);
    }
}

pub fn walk_stmt<V: Visitor>(v: &mut V, stmt: &Spanned<Stmt>) {
    match &stmt.node {
        Stmt::LocalVar { ty, declarators } => {
            v.visit_type_ref(ty);
            for declarator in declarators {
                if let Some(init) = &declarator.init {
                    v.visit_expr(init);
                }
            }
        }
        Stmt::Expr(expr) => v.visit_expr(expr),
        Stmt::Return(Some(expr)) => v.visit_expr(expr),
        Stmt::Return(None) => {}
        Stmt::If {
            condition,
            then_block,
            else_block,
        } => {
            v.visit_expr(condition);
            v.visit_block(then_block);
            if let Some(eb) = else_block {
                v.visit_block(eb);
            }
        }
        Stmt::While { condition, body } => {
            v.visit_expr(condition);
            v.visit_block(body);
        }
    }
}

pub fn walk_expr<V: Visitor>(v: &mut V, expr: &Spanned<Expr>) {
    match &expr.node {
        // Leaves — no children
        Expr::IntLit(_)
        | Expr::BoolLit(_)
        | Expr::StringLit(_)
        | Expr::NullLit
        | Expr::Ident(_) => {}

        Expr::FieldAccess { object, .. } => v.visit_expr(object),
        Expr::Call { args, .. } => {
            for arg in args {
                v.visit_expr(arg);
            }
        }
        Expr::MethodCall { object, args, .. } => {
            v.visit_expr(object);
            for arg in args {
                v.visit_expr(arg);
            }
        }
        Expr::BinOp { lhs, rhs, .. } => {
            v.visit_expr(lhs);
            v.visit_expr(rhs);
        }
        Expr::Cast { expr: inner, target_type } => {
            v.visit_expr(inner);
            v.visit_type_ref(target_type);
        }
    }
}

pub fn walk_type_ref<V: Visitor>(_v: &mut V, _ty: &Spanned<TypeRef>) {
    // TypeRef has no nested nodes to visit
}

// ============================================================================
// VisitMut Trait (In-Place Mutation)
// ============================================================================

/// Mutable visitor for in-place transformation passes.
/// Structurally identical to `Visitor` but takes `&mut` references.
pub trait VisitMut: Sized {
    fn visit_unit_mut(&mut self, unit: &mut CompilationUnit) {
        walk_unit_mut(self, unit);
    }

    fn visit_type_decl_mut(&mut self, decl: &mut Spanned<TypeDecl>) {
        walk_type_decl_mut(self, decl);
    }

    fn visit_field_mut(&mut self, field: &mut FieldDecl) {
        walk_field_mut(self, field);
    }

    fn visit_method_mut(&mut self, method: &mut Spanned<MethodDecl>) {
        walk_method_mut(self, method);
    }

    fn visit_block_mut(&mut self, block: &mut Spanned<Block>) {
        walk_block_mut(self, block);
    }

    fn visit_stmt_mut(&mut self, stmt: &mut Spanned<Stmt>) {
        walk_stmt_mut(self, stmt);
    }

    fn visit_expr_mut(&mut self, expr: &mut Spanned<Expr>) {
        walk_expr_mut(self, expr);
    }

    fn visit_type_ref_mut(&mut self, ty: &mut Spanned<TypeRef>) {
        walk_type_ref_mut(self, ty);
    }
}

// ============================================================================
// Walk Functions (Mutable) — structurally identical to Visitor versions
// ============================================================================

pub fn walk_unit_mut<V: VisitMut>(v: &mut V, unit: &mut CompilationUnit) {
    for decl in &mut unit.types {
        v.visit_type_decl_mut(decl);
    }
}

pub fn walk_type_decl_mut<V: VisitMut>(v: &mut V, decl: &mut Spanned<TypeDecl>) {
    if let Some(superclass) = &mut decl.node.superclass {
        v.visit_type_ref_mut(superclass);
    }
    for interface in &mut decl.node.interfaces {
        v.visit_type_ref_mut(interface);
    }
    for field in &mut decl.node.fields {
        v.visit_field_mut(field);
    }
    for method in &mut decl.node.methods {
        v.visit_method_mut(method);
    }
    for nested in &mut decl.node.nested {
        v.visit_type_decl_mut(nested);
    }
}

pub fn walk_field_mut<V: VisitMut>(v: &mut V, field: &mut FieldDecl) {
    v.visit_type_ref_mut(&mut field.ty);
    for declarator in &mut field.declarators {
        if let Some(init) = &mut declarator.init {
            v.visit_expr_mut(init);
        }
    }
}

pub fn walk_method_mut<V: VisitMut>(v: &mut V, method: &mut Spanned<MethodDecl>) {
    for param in &mut method.node.params {
        v.visit_type_ref_mut(&mut param.ty);
    }
    if let Some(rt) = &mut method.node.return_type {
        v.visit_type_ref_mut(rt);
    }
    if let Some(body) = &mut method.node.body {
        v.visit_block_mut(body);
    }
}

pub fn walk_block_mut<V: VisitMut>(v: &mut V, block: &mut Spanned<Block>) {
    for stmt in &mut block.node.stmts {
        v.visit_stmt_mut(stmt);
    }
}

pub fn walk_stmt_mut<V: VisitMut>(v: &mut V, stmt: &mut Spanned<Stmt>) {
    match &mut stmt.node {
        Stmt::LocalVar { ty, declarators } => {
            v.visit_type_ref_mut(ty);
            for declarator in declarators {
                if let Some(init) = &mut declarator.init {
                    v.visit_expr_mut(init);
                }
            }
        }
        Stmt::Expr(expr) => v.visit_expr_mut(expr),
        Stmt::Return(Some(expr)) => v.visit_expr_mut(expr),
        Stmt::Return(None) => {}
        Stmt::If {
            condition,
            then_block,
            else_block,
        } => {
            v.visit_expr_mut(condition);
            v.visit_block_mut(then_block);
            if let Some(eb) = else_block {
                v.visit_block_mut(eb);
            }
        }
        Stmt::While { condition, body } => {
            v.visit_expr_mut(condition);
            v.visit_block_mut(body);
        }
    }
}

pub fn walk_expr_mut<V: VisitMut>(v: &mut V, expr: &mut Spanned<Expr>) {
    match &mut expr.node {
        Expr::IntLit(_)
        | Expr::BoolLit(_)
        | Expr::StringLit(_)
        | Expr::NullLit
        | Expr::Ident(_) => {}

        Expr::FieldAccess { object, .. } => v.visit_expr_mut(object),
        Expr::Call { args, .. } => {
            for arg in args {
                v.visit_expr_mut(arg);
            }
        }
        Expr::MethodCall { object, args, .. } => {
            v.visit_expr_mut(object);
            for arg in args {
                v.visit_expr_mut(arg);
            }
        }
        Expr::BinOp { lhs, rhs, .. } => {
            v.visit_expr_mut(lhs);
            v.visit_expr_mut(rhs);
        }
        Expr::Cast { expr: inner, target_type } => {
            v.visit_expr_mut(inner);
            v.visit_type_ref_mut(target_type);
        }
    }
}

pub fn walk_type_ref_mut<V: VisitMut>(_v: &mut V, _ty: &mut Spanned<TypeRef>) {
    // No nested nodes
}
