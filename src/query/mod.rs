//! Filter compilation and evaluation over the adverse-event dataset.

pub mod compile;
pub mod evaluate;

pub use compile::{compile, CompiledFilter};
pub use evaluate::{evaluate, QueryResult};
