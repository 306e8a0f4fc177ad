use crate::{
    language::Language,
    term::{BoundTerm, Term},
};

#[allow(unused_variables)]
pub trait Visitor<'a, T: Language + 'a> {
    fn visit_term(&mut self, term: &'a Term<T>) {}
    fn visit_variable(&mut self, var: &'a T::Var) {}
    fn visit_operator(&mut self, op: &'a T::Op, args: &'a [BoundTerm<T>]) {}
    fn visit_bound_term(&mut self, bound_term: &'a BoundTerm<T>) {}
    fn visit_binder(&mut self, var: &'a T::Var) {}
    fn after_term(&mut self, term: &'a Term<T>) {}
    fn after_variable(&mut self, var: &'a T::Var) {}
    fn after_operator(&mut self, op: &'a T::Op, args: &'a [BoundTerm<T>]) {}
    fn after_bound_term(&mut self, bound_term: &'a BoundTerm<T>) {}
}

pub trait Visitable<'a, T: Language + 'a> {
    fn walk(&'a self, visitor: &mut impl Visitor<'a, T>);
}

impl<'a, T: Language + 'a> Visitable<'a, T> for Term<T> {
    fn walk(&'a self, visitor: &mut impl Visitor<'a, T>) {
        visitor.visit_term(self);
        match self {
            Term::Variable(var) => {
                visitor.visit_variable(var);
                visitor.after_variable(var);
            }
            Term::Operator { op, args } => {
                visitor.visit_operator(op, args);
                args.iter().for_each(|arg| arg.walk(visitor));
                visitor.after_operator(op, args);
            }
        }
        visitor.after_term(self);
    }
}

impl<'a, T: Language + 'a> Visitable<'a, T> for BoundTerm<T> {
    fn walk(&'a self, visitor: &mut impl Visitor<'a, T>) {
        visitor.visit_bound_term(self);
        self.bindings
            .iter()
            .for_each(|var| visitor.visit_binder(var));
        self.body.walk(visitor);
        visitor.after_bound_term(self);
    }
}
