use std::fmt::Display;

use itertools::Itertools;

use crate::{
    language::Language,
    term::{BoundTerm, Term},
};

impl<T: Language> Term<T> {
    /// Indented tree dump, one node per line.
    ///
    /// A variable prints as its label. An operator prints its label, then one
    /// line per argument: the indent grown by one space, the argument's
    /// binders separated by spaces, a `.`, and the argument's body.
    pub fn render(
        &self,
        indent: &str,
        fv: impl Fn(&T::Var) -> String,
        fo: impl Fn(&T::Op) -> String,
    ) -> String {
        let mut out = String::new();
        self.render_into(&mut out, indent, &fv, &fo);
        out
    }

    fn render_into(
        &self,
        out: &mut String,
        indent: &str,
        fv: &impl Fn(&T::Var) -> String,
        fo: &impl Fn(&T::Op) -> String,
    ) {
        match self {
            Self::Variable(var) => {
                out.push_str(&fv(var));
                out.push('\n');
            }
            Self::Operator { op, args } => {
                out.push_str(&fo(op));
                out.push('\n');
                let indent = format!("{indent} ");
                for arg in args {
                    arg.render_into(out, &indent, fv, fo);
                }
            }
        }
    }
}

impl<T: Language> BoundTerm<T> {
    fn render_into(
        &self,
        out: &mut String,
        indent: &str,
        fv: &impl Fn(&T::Var) -> String,
        fo: &impl Fn(&T::Op) -> String,
    ) {
        out.push_str(indent);
        out.push_str(&self.bindings.iter().map(fv).join(" "));
        out.push('.');
        self.body.render_into(out, indent, fv, fo);
    }
}

impl<T: Language> Display for Term<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render("", ToString::to_string, ToString::to_string))
    }
}
