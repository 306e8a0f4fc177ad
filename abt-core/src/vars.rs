//! Free, bound and all variables of a term.
//!
//! Results are sequences, not sets: they keep traversal order and every
//! occurrence, so a variable used twice is listed twice. None of these consult
//! a signature and all are defined on ill-formed terms.

use crate::{
    language::Language,
    term::{BoundTerm, Term},
};

impl<T: Language> Term<T> {
    /// Occurrences not captured by an enclosing binder, in argument order.
    pub fn free_vars(&self) -> Vec<T::Var> {
        let mut vars = Vec::new();
        self.free_vars_into(&mut vars);
        vars
    }

    /// Binders, each argument's own binders before those inside its body.
    pub fn bound_vars(&self) -> Vec<T::Var> {
        let mut vars = Vec::new();
        self.bound_vars_into(&mut vars);
        vars
    }

    /// `free_vars` followed by `bound_vars`.
    pub fn all_vars(&self) -> Vec<T::Var> {
        let mut vars = self.free_vars();
        self.bound_vars_into(&mut vars);
        vars
    }

    pub fn is_closed(&self) -> bool {
        self.free_vars().is_empty()
    }

    fn free_vars_into(&self, vars: &mut Vec<T::Var>) {
        match self {
            Self::Variable(var) => vars.push(var.clone()),
            Self::Operator { args, .. } => {
                for arg in args {
                    arg.free_vars_into(vars);
                }
            }
        }
    }

    fn bound_vars_into(&self, vars: &mut Vec<T::Var>) {
        if let Self::Operator { args, .. } = self {
            for arg in args {
                arg.bound_vars_into(vars);
            }
        }
    }
}

impl<T: Language> BoundTerm<T> {
    /// Free variables of the body minus every occurrence of this argument's
    /// binders.
    pub fn free_vars(&self) -> Vec<T::Var> {
        let mut vars = Vec::new();
        self.free_vars_into(&mut vars);
        vars
    }

    pub fn bound_vars(&self) -> Vec<T::Var> {
        let mut vars = Vec::new();
        self.bound_vars_into(&mut vars);
        vars
    }

    fn free_vars_into(&self, vars: &mut Vec<T::Var>) {
        let start = vars.len();
        self.body.free_vars_into(vars);
        let body_vars = vars.split_off(start);
        vars.extend(
            body_vars
                .into_iter()
                .filter(|var| !self.bindings.contains(var)),
        );
    }

    fn bound_vars_into(&self, vars: &mut Vec<T::Var>) {
        vars.extend(self.bindings.iter().cloned());
        self.body.bound_vars_into(vars);
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use crate::term::{BoundTerm, Term, tests::*};

    fn names(vars: &[&str]) -> Vec<String> {
        vars.iter().map(|var| (*var).to_owned()).collect()
    }

    #[rstest]
    #[case(var("x"), &["x"], &[])]
    #[case(num(0), &[], &[])]
    #[case(identity(), &[], &["x"])]
    #[case(constant(), &["y"], &["x"])]
    #[case(application(), &["f", "x"], &[])]
    #[case(church_two(), &[], &["f", "x"])]
    #[case(shadowing(), &["x"], &["x", "x"])]
    #[case(let_program(), &["plus"], &["y"])]
    #[case(two_binders(), &[], &["x", "y"])]
    fn free_and_bound(#[case] term: Term<Lc>, #[case] free: &[&str], #[case] bound: &[&str]) {
        assert_eq!(term.free_vars(), names(free));
        assert_eq!(term.bound_vars(), names(bound));
        assert_eq!(
            term.all_vars(),
            names(free).into_iter().chain(names(bound)).collect::<Vec<_>>()
        );
    }

    #[test]
    fn duplicates_and_order_are_kept() {
        let term = app(app(var("g"), var("x")), lam("y", app(var("x"), var("y"))));
        assert_eq!(term.free_vars(), names(&["g", "x", "x"]));
    }

    #[test]
    fn binder_removes_every_occurrence() {
        let arg = BoundTerm::new(
            names(&["x", "z"]),
            app(app(var("x"), var("y")), app(var("z"), var("x"))),
        );
        assert_eq!(arg.free_vars(), names(&["y"]));
        assert_eq!(arg.bound_vars(), names(&["x", "z"]));
    }

    #[test]
    fn repeated_binder() {
        let term = Term::operator(
            LcOp::Lambda,
            vec![BoundTerm::new(names(&["x", "x"]), app(var("x"), var("y")))],
        );
        assert_eq!(term.free_vars(), names(&["y"]));
        assert_eq!(term.bound_vars(), names(&["x", "x"]));
    }

    #[test]
    fn own_binders_precede_inner_binders() {
        let term = let_in("a", lam("b", var("b")), lam("c", var("a")));
        assert_eq!(term.bound_vars(), names(&["b", "a", "c"]));
    }

    #[test]
    fn lambda_over_other_variable() {
        assert_eq!(lam("x", var("y")).free_vars(), names(&["y"]));
        assert_eq!(lam("x", var("x")).free_vars(), names(&[]));
    }

    #[rstest]
    #[case(var("x"), false)]
    #[case(num(0), true)]
    #[case(identity(), true)]
    #[case(constant(), false)]
    #[case(application(), false)]
    #[case(church_two(), true)]
    #[case(shadowing(), false)]
    #[case(let_program(), false)]
    #[case(two_binders(), true)]
    fn closed_iff_no_free_vars(#[case] term: Term<Lc>, #[case] closed: bool) {
        assert_eq!(term.is_closed(), closed);
        assert_eq!(term.free_vars().is_empty(), closed);
    }
}
