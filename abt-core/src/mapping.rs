//! Shape-preserving relabelling of terms.
//!
//! Binders are renamed with the same function as occurrences and no capture
//! check is made: renaming two distinct variables to one label can change
//! which binder an occurrence refers to.

use crate::{
    language::Language,
    term::{BoundTerm, Term},
};

impl<T: Language> Term<T> {
    /// Relabels every variable (bound or free) with `fv` and every operator
    /// with `fo`. Labels are visited in pre-order, binders before the body
    /// they scope over.
    pub fn structural_map<U: Language>(
        &self,
        mut fv: impl FnMut(&T::Var) -> U::Var,
        mut fo: impl FnMut(&T::Op) -> U::Op,
    ) -> Term<U> {
        self.map_with(&mut fv, &mut fo)
    }

    /// [`Term::structural_map`] with operators unchanged.
    pub fn map_vars<U: Language<Op = T::Op>>(&self, fv: impl FnMut(&T::Var) -> U::Var) -> Term<U> {
        self.structural_map(fv, |op: &T::Op| op.clone())
    }

    /// [`Term::structural_map`] with variables unchanged.
    pub fn map_ops<U: Language<Var = T::Var>>(&self, fo: impl FnMut(&T::Op) -> U::Op) -> Term<U> {
        self.structural_map(|var: &T::Var| var.clone(), fo)
    }

    /// Moves the term into a language whose labels convert from ours.
    pub fn convert<U: Language>(self) -> Term<U>
    where
        U::Var: From<T::Var>,
        U::Op: From<T::Op>,
    {
        match self {
            Self::Variable(var) => Term::Variable(var.into()),
            Self::Operator { op, args } => Term::Operator {
                op: op.into(),
                args: args.into_iter().map(BoundTerm::convert).collect(),
            },
        }
    }

    fn map_with<U: Language>(
        &self,
        fv: &mut impl FnMut(&T::Var) -> U::Var,
        fo: &mut impl FnMut(&T::Op) -> U::Op,
    ) -> Term<U> {
        match self {
            Self::Variable(var) => Term::Variable(fv(var)),
            Self::Operator { op, args } => Term::Operator {
                op: fo(op),
                args: args.iter().map(|arg| arg.map_with(fv, fo)).collect(),
            },
        }
    }
}

impl<T: Language> BoundTerm<T> {
    pub fn structural_map<U: Language>(
        &self,
        mut fv: impl FnMut(&T::Var) -> U::Var,
        mut fo: impl FnMut(&T::Op) -> U::Op,
    ) -> BoundTerm<U> {
        self.map_with(&mut fv, &mut fo)
    }

    pub fn convert<U: Language>(self) -> BoundTerm<U>
    where
        U::Var: From<T::Var>,
        U::Op: From<T::Op>,
    {
        BoundTerm {
            bindings: self.bindings.into_iter().map(Into::into).collect(),
            body: self.body.convert(),
        }
    }

    fn map_with<U: Language>(
        &self,
        fv: &mut impl FnMut(&T::Var) -> U::Var,
        fo: &mut impl FnMut(&T::Op) -> U::Op,
    ) -> BoundTerm<U> {
        BoundTerm {
            bindings: self.bindings.iter().map(&mut *fv).collect(),
            body: self.body.map_with(fv, fo),
        }
    }
}
