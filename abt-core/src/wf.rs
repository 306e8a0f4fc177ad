use std::ops::ControlFlow;

use derivative::Derivative;
use thiserror::Error;
use tracing::Level;

use crate::{
    language::Language,
    signature::Signature,
    term::{BoundTerm, Term},
};

/// An operator whose arguments do not have the shape its signature declares.
#[derive(Derivative, Error)]
#[derivative(
    Clone(bound = ""),
    Eq(bound = ""),
    PartialEq(bound = ""),
    Debug(bound = "")
)]
#[error(
    "Arity mismatch at operator `{op}` (argument path {path:?}): expected {expected:?}, found {actual:?}"
)]
pub struct ArityMismatch<T: Language> {
    pub op: T::Op,
    pub expected: Vec<usize>,
    /// Binder counts of the arguments actually present.
    pub actual: Vec<usize>,
    /// First position where `expected` and `actual` differ. When one is a
    /// prefix of the other this is the length of the shorter one.
    pub index: usize,
    /// Argument indices leading from the root to the offending operator.
    pub path: Vec<usize>,
}

fn mismatch_index(expected: &[usize], actual: &[usize]) -> Option<usize> {
    expected
        .iter()
        .zip(actual)
        .position(|(e, a)| e != a)
        .or_else(|| (expected.len() != actual.len()).then_some(expected.len().min(actual.len())))
}

fn check_node<T: Language>(
    op: &T::Op,
    args: &[BoundTerm<T>],
    signature: &impl Signature<T>,
    path: &[usize],
) -> Result<(), ArityMismatch<T>> {
    let expected = signature.arity(op);
    let actual: Vec<usize> = args.iter().map(BoundTerm::num_bound).collect();
    match mismatch_index(&expected, &actual) {
        None => Ok(()),
        Some(index) => {
            tracing::debug!(%op, ?expected, ?actual, index, "rejected operator");
            Err(ArityMismatch {
                op: op.clone(),
                expected: expected.into_owned(),
                actual,
                index,
                path: path.to_vec(),
            })
        }
    }
}

/// Pre-order descent: an operator is checked before its arguments, arguments
/// left to right. Stops as soon as `report` breaks.
fn validate<T: Language>(
    term: &Term<T>,
    signature: &impl Signature<T>,
    path: &mut Vec<usize>,
    report: &mut impl FnMut(ArityMismatch<T>) -> ControlFlow<()>,
) -> ControlFlow<()> {
    if let Term::Operator { op, args } = term {
        if let Err(err) = check_node(op, args, signature, path) {
            report(err)?;
        }
        for (index, arg) in args.iter().enumerate() {
            path.push(index);
            validate(&arg.body, signature, path, report)?;
            path.pop();
        }
    }
    ControlFlow::Continue(())
}

impl<T: Language> Term<T> {
    /// Checks every operator against `signature`.
    ///
    /// # Errors
    ///
    /// Returns the first offending operator in pre-order.
    #[tracing::instrument(level = Level::DEBUG, skip_all, err(level = Level::DEBUG))]
    pub fn check(&self, signature: &impl Signature<T>) -> Result<(), ArityMismatch<T>> {
        let mut first = None;
        let flow = validate(self, signature, &mut Vec::new(), &mut |err| {
            first = Some(err);
            ControlFlow::Break(())
        });
        match (flow, first) {
            (ControlFlow::Break(()), Some(err)) => Err(err),
            _ => Ok(()),
        }
    }

    /// Like [`Term::check`] but collects every offending operator.
    #[tracing::instrument(level = Level::DEBUG, skip_all)]
    pub fn check_all(&self, signature: &impl Signature<T>) -> Vec<ArityMismatch<T>> {
        let mut errors = Vec::new();
        let flow = validate(self, signature, &mut Vec::new(), &mut |err| {
            errors.push(err);
            ControlFlow::Continue(())
        });
        debug_assert!(flow.is_continue());
        tracing::debug!(count = errors.len(), "validation finished");
        errors
    }

    pub fn is_well_formed(&self, signature: &impl Signature<T>) -> bool {
        self.check(signature).is_ok()
    }

    /// Closed and well-formed.
    pub fn is_program(&self, signature: &impl Signature<T>) -> bool {
        self.is_closed() && self.is_well_formed(signature)
    }
}
