#![warn(clippy::all, rust_2018_idioms)]

//! Abstract binding trees: a term algebra over client-supplied variable and
//! operator labels, where every operator declares how many variables each of
//! its arguments binds.

pub mod debug;
pub mod language;
pub mod mapping;
pub mod prettyprinter;
pub mod signature;
pub mod term;
pub mod vars;
pub mod visitor;
pub mod wf;

pub use language::{Language, Syntax};
pub use prettyprinter::PrettyPrint;
pub use signature::{ArityTable, Signature};
pub use term::{BoundTerm, Term};
pub use wf::ArityMismatch;
