use std::borrow::Cow;

use derivative::Derivative;
use indexmap::IndexMap;

use crate::language::Language;

/// Assigns every operator its arity vector: one entry per argument, giving
/// the number of variables that argument binds.
///
/// Implementations must be total and return the same vector for the same
/// operator every time.
pub trait Signature<T: Language + ?Sized> {
    fn arity(&self, op: &T::Op) -> Cow<'_, [usize]>;
}

impl<T: Language, F> Signature<T> for F
where
    F: Fn(&T::Op) -> Vec<usize>,
{
    fn arity(&self, op: &T::Op) -> Cow<'_, [usize]> {
        Cow::Owned(self(op))
    }
}

/// A signature given by an explicit table.
///
/// Operators missing from the table get the fallback arity, which is empty
/// (a constant) unless set with [`ArityTable::with_fallback`].
#[derive(Derivative)]
#[derivative(Clone(bound = ""), Debug(bound = ""), Default(bound = ""))]
pub struct ArityTable<T: Language + ?Sized> {
    arities: IndexMap<T::Op, Vec<usize>>,
    fallback: Vec<usize>,
}

impl<T: Language> ArityTable<T> {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_fallback(mut self, fallback: Vec<usize>) -> Self {
        self.fallback = fallback;
        self
    }

    #[must_use]
    pub fn with(mut self, op: T::Op, arity: Vec<usize>) -> Self {
        self.insert(op, arity);
        self
    }

    /// Returns the previous arity of `op`, if it had one.
    pub fn insert(&mut self, op: T::Op, arity: Vec<usize>) -> Option<Vec<usize>> {
        self.arities.insert(op, arity)
    }

    /// The arity declared for `op`, ignoring the fallback.
    pub fn get(&self, op: &T::Op) -> Option<&[usize]> {
        self.arities.get(op).map(Vec::as_slice)
    }

    pub fn fallback(&self) -> &[usize] {
        &self.fallback
    }

    pub fn len(&self) -> usize {
        self.arities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arities.is_empty()
    }

    /// Declared operators in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&T::Op, &[usize])> {
        self.arities.iter().map(|(op, arity)| (op, arity.as_slice()))
    }
}

impl<T: Language> Signature<T> for ArityTable<T> {
    fn arity(&self, op: &T::Op) -> Cow<'_, [usize]> {
        Cow::Borrowed(self.arities.get(op).unwrap_or(&self.fallback))
    }
}

impl<T: Language> FromIterator<(T::Op, Vec<usize>)> for ArityTable<T> {
    fn from_iter<I: IntoIterator<Item = (T::Op, Vec<usize>)>>(iter: I) -> Self {
        Self {
            arities: iter.into_iter().collect(),
            fallback: Vec::new(),
        }
    }
}

impl<T: Language> Extend<(T::Op, Vec<usize>)> for ArityTable<T> {
    fn extend<I: IntoIterator<Item = (T::Op, Vec<usize>)>>(&mut self, iter: I) {
        self.arities.extend(iter);
    }
}
