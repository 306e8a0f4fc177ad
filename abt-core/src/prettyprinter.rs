use pretty::RcDoc;

use crate::{
    language::Language,
    term::{BoundTerm, Term},
};

pub trait PrettyPrint {
    fn to_doc(&self) -> RcDoc<'_, ()>;

    fn to_pretty(&self) -> String {
        self.to_doc()
            .pretty(usize::MAX)
            .to_string()
    }
}

/// Comma-separated list.
pub fn list<'a, T: 'a + PrettyPrint>(ts: impl IntoIterator<Item = &'a T>) -> RcDoc<'a, ()> {
    RcDoc::intersperse(
        ts.into_iter().map(PrettyPrint::to_doc),
        RcDoc::text(",").append(RcDoc::space()),
    )
}

/// Comma-separated list with parentheses around it.
pub fn paran_list<'a, T: 'a + PrettyPrint>(ts: impl IntoIterator<Item = &'a T>) -> RcDoc<'a, ()> {
    RcDoc::text("(").append(list(ts)).append(RcDoc::text(")"))
}

impl<T: Language> PrettyPrint for Term<T> {
    fn to_doc(&self) -> RcDoc<'_, ()> {
        match self {
            Self::Variable(var) => RcDoc::as_string(var),
            Self::Operator { op, args } => {
                if args.is_empty() {
                    RcDoc::as_string(op)
                } else {
                    RcDoc::as_string(op).append(paran_list(args))
                }
            }
        }
    }
}

impl<T: Language> PrettyPrint for BoundTerm<T> {
    fn to_doc(&self) -> RcDoc<'_, ()> {
        if self.bindings.is_empty() {
            self.body.to_doc()
        } else {
            RcDoc::intersperse(self.bindings.iter().map(RcDoc::as_string), RcDoc::space())
                .append(RcDoc::text("."))
                .append(RcDoc::space())
                .append(self.body.to_doc())
        }
    }
}

#[cfg(test)]
mod tests {
    use insta::assert_snapshot;
    use rstest::rstest;

    use super::PrettyPrint;
    use crate::term::{Term, tests::*};

    #[rstest]
    #[case(var("x"), "x")]
    #[case(num(2), "2")]
    #[case(identity(), "lam(x. x)")]
    #[case(application(), "app(f, x)")]
    #[case(two_binders(), "lam(x y. x)")]
    fn one_line(#[case] term: Term<Lc>, #[case] expected: &str) {
        assert_eq!(term.to_pretty(), expected);
    }

    #[rstest]
    #[case("church_two", church_two())]
    #[case("let_program", let_program())]
    fn pretty_print(#[case] name: &str, #[case] term: Term<Lc>) {
        assert_snapshot!(format!("pretty_print_{name}"), term.to_pretty());
    }
}
