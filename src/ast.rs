//! Resolved syntax tree for one compilation unit.
//!
//! This is the tree the rewriting pass mutates in place. It arrives already
//! parsed and binding-resolved: every type reference that semantic analysis
//! could resolve carries a `BindingId` into the run's `BindingTable`.
//! References with no resolvable binding (primitives, unresolved names)
//! carry `None` and are left alone by every pass.

use crate::bindings::BindingId;
use crate::span::Spanned;

#[derive(Debug, Clone, PartialEq)]
pub struct CompilationUnit {
    pub types: Vec<Spanned<TypeDecl>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeDeclKind {
    Class,
    Interface,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypeDecl {
    pub name: Spanned<String>,
    pub kind: TypeDeclKind,
    /// Resolved binding of the declared type itself.
    pub binding: Option<BindingId>,
    pub superclass: Option<Spanned<TypeRef>>,
    pub interfaces: Vec<Spanned<TypeRef>>,
    pub fields: Vec<FieldDecl>,
    pub methods: Vec<Spanned<MethodDecl>>,
    pub nested: Vec<Spanned<TypeDecl>>,
}

impl TypeDecl {
    pub fn is_interface(&self) -> bool {
        self.kind == TypeDeclKind::Interface
    }
}

/// A written type at a reference site. The `node` slot is what rewriting
/// passes replace; the span stays put.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeRef {
    pub name: String,
    pub binding: Option<BindingId>,
}

impl TypeRef {
    pub fn new(name: impl Into<String>, binding: BindingId) -> Self {
        Self { name: name.into(), binding: Some(binding) }
    }

    /// A reference the resolver could not (or does not) bind, e.g. a
    /// primitive type name.
    pub fn unresolved(name: impl Into<String>) -> Self {
        Self { name: name.into(), binding: None }
    }
}

/// One field declaration. Several names may share a written type
/// (`List a, b;`); each declarator carries its own resolved binding.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDecl {
    pub ty: Spanned<TypeRef>,
    pub declarators: Vec<Declarator>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Declarator {
    pub name: Spanned<String>,
    pub binding: Option<BindingId>,
    pub init: Option<Spanned<Expr>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MethodDecl {
    pub name: Spanned<String>,
    pub params: Vec<Param>,
    /// None for constructors.
    pub return_type: Option<Spanned<TypeRef>>,
    /// None for abstract and interface methods.
    pub body: Option<Spanned<Block>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub name: Spanned<String>,
    pub ty: Spanned<TypeRef>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub stmts: Vec<Spanned<Stmt>>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// Local variable declaration; same co-declared shape as `FieldDecl`.
    LocalVar {
        ty: Spanned<TypeRef>,
        declarators: Vec<Declarator>,
    },
    Expr(Spanned<Expr>),
    Return(Option<Spanned<Expr>>),
    If {
        condition: Spanned<Expr>,
        then_block: Spanned<Block>,
        else_block: Option<Spanned<Block>>,
    },
    While {
        condition: Spanned<Expr>,
        body: Spanned<Block>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    IntLit(i64),
    BoolLit(bool),
    StringLit(String),
    NullLit,
    Ident(String),
    FieldAccess {
        object: Box<Spanned<Expr>>,
        field: Spanned<String>,
    },
    Call {
        name: Spanned<String>,
        args: Vec<Spanned<Expr>>,
    },
    MethodCall {
        object: Box<Spanned<Expr>>,
        method: Spanned<String>,
        args: Vec<Spanned<Expr>>,
    },
    BinOp {
        op: BinOp,
        lhs: Box<Spanned<Expr>>,
        rhs: Box<Spanned<Expr>>,
    },
    Cast {
        expr: Box<Spanned<Expr>>,
        target_type: Spanned<TypeRef>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Eq,
    Neq,
    Lt,
    Gt,
    And,
    Or,
}
