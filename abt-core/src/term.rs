use derivative::Derivative;

use crate::{
    language::Language,
    visitor::{Visitable, Visitor},
};

/// A term of the object language `T`.
///
/// Nothing is checked at construction time: a term may have any number of
/// arguments and binders at each operator, see [`Term::check`] for validation.
#[derive(Derivative)]
#[derivative(
    Clone(bound = ""),
    Eq(bound = ""),
    PartialEq(bound = ""),
    Hash(bound = ""),
    Debug(bound = "")
)]
pub enum Term<T: Language + ?Sized> {
    Variable(T::Var),
    Operator { op: T::Op, args: Vec<BoundTerm<T>> },
}

/// One argument of an operator: the variables it binds and its body.
#[derive(Derivative)]
#[derivative(
    Clone(bound = ""),
    Eq(bound = ""),
    PartialEq(bound = ""),
    Hash(bound = ""),
    Debug(bound = "")
)]
pub struct BoundTerm<T: Language + ?Sized> {
    pub bindings: Vec<T::Var>,
    pub body: Term<T>,
}

impl<T: Language> Term<T> {
    pub fn variable(var: T::Var) -> Self {
        Self::Variable(var)
    }

    pub fn operator(op: T::Op, args: Vec<BoundTerm<T>>) -> Self {
        Self::Operator { op, args }
    }

    /// The operator at the root, if any.
    pub fn opid(&self) -> Option<&T::Op> {
        match self {
            Self::Variable(_) => None,
            Self::Operator { op, .. } => Some(op),
        }
    }

    /// Arguments of the root operator; empty for a variable.
    pub fn args(&self) -> &[BoundTerm<T>] {
        match self {
            Self::Variable(_) => &[],
            Self::Operator { args, .. } => args,
        }
    }

    pub fn is_variable(&self) -> bool {
        matches!(self, Self::Variable(_))
    }

    pub fn as_variable(&self) -> Option<&T::Var> {
        match self {
            Self::Variable(var) => Some(var),
            Self::Operator { .. } => None,
        }
    }

    /// Number of `Term` nodes, counting variables and operators.
    pub fn size(&self) -> usize {
        struct Size(usize);

        impl<'a, T: Language + 'a> Visitor<'a, T> for Size {
            fn visit_term(&mut self, _term: &'a Term<T>) {
                self.0 += 1;
            }
        }

        let mut size = Size(0);
        self.walk(&mut size);
        size.0
    }

    /// Operators in pre-order.
    pub fn opids(&self) -> Vec<&T::Op> {
        struct Opids<'a, T: Language>(Vec<&'a T::Op>);

        impl<'a, T: Language + 'a> Visitor<'a, T> for Opids<'a, T> {
            fn visit_operator(&mut self, op: &'a T::Op, _args: &'a [BoundTerm<T>]) {
                self.0.push(op);
            }
        }

        let mut opids = Opids(Vec::new());
        self.walk(&mut opids);
        opids.0
    }
}

impl<T: Language> BoundTerm<T> {
    pub fn new(bindings: Vec<T::Var>, body: Term<T>) -> Self {
        Self { bindings, body }
    }

    /// An argument binding no variables.
    pub fn unbound(body: Term<T>) -> Self {
        Self::new(Vec::new(), body)
    }

    pub fn bindings(&self) -> &[T::Var] {
        &self.bindings
    }

    pub fn body(&self) -> &Term<T> {
        &self.body
    }

    pub fn num_bound(&self) -> usize {
        self.bindings.len()
    }

    pub fn into_parts(self) -> (Vec<T::Var>, Term<T>) {
        (self.bindings, self.body)
    }
}

impl<T: Language> From<Term<T>> for BoundTerm<T> {
    fn from(body: Term<T>) -> Self {
        Self::unbound(body)
    }
}
