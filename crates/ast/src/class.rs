use crate::{expr::Expr, function::Function, prop::PropName};
use global_common::{Span, Spanned};

#[derive(Debug, Clone, PartialEq)]
pub struct Class {
    pub span: Span,

    pub super_class: Option<Box<Expr>>,

    pub body: Vec<ClassMember>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ClassMember {
    Constructor(Constructor),
    /// `es2015`
    Method(ClassMethod),
}

impl Spanned for ClassMember {
    fn span(&self) -> Span {
        match *self {
            ClassMember::Constructor(ref c) => c.span,
            ClassMember::Method(ref m) => m.span,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassMethod {
    pub span: Span,

    pub key: PropName,

    pub function: Function,

    pub kind: MethodKind,

    pub is_static: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Constructor {
    pub span: Span,

    pub key: PropName,

    pub function: Function,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MethodKind {
    Method,
    Getter,
    Setter,
}

spanned_struct!(Class, ClassMethod, Constructor);
