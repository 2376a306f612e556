//! Command implementations for the heft CLI.
//!
//! - [`graph`] - Write the size-filtered module graph
//! - [`top`] - List the heaviest modules
//! - [`why`] - Explain why a module is in the bundle
//!
//! Each command lives in its own module and provides an `execute` function
//! that takes the parsed arguments and returns a Result.

pub mod graph;
pub mod top;
pub(crate) mod utils;
pub mod why;

pub use graph::execute as graph_execute;
pub use top::execute as top_execute;
pub use why::execute as why_execute;
