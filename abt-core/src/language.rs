use std::{
    fmt::{Debug, Display},
    hash::Hash,
};

/// Requirements on labels.
///
/// `Display` is used by the printers and in validation errors.
pub trait Syntax: Clone + Eq + Hash + Debug + Display {}
impl<T: Clone + Eq + Hash + Debug + Display> Syntax for T {}

/// Groups the label types of one object language.
///
/// Implementors are usually empty marker types, e.g.
///
/// ```
/// use abt_core::Language;
///
/// pub struct Untyped;
///
/// impl Language for Untyped {
///     type Op = &'static str;
///     type Var = String;
/// }
/// ```
pub trait Language {
    type Op: Syntax;
    type Var: Syntax;
}
