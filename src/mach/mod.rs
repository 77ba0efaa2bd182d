/*!
## Rust Machine Module

This Rust module stores and runs BASIC programs.

*/

mod eval;
mod exec;
mod listing;
mod operation;
mod runtime;
mod var;

pub use exec::{input_value, Flow};
pub use listing::Listing;
pub use operation::Operation;
pub use runtime::Event;
pub use runtime::Runtime;
pub use var::Var;

/// Longest line accepted from the console or a file.
pub const MAX_LINE_LEN: usize = 1024;

/// Default execution count at which a single line stops the program.
pub const DEFAULT_LINE_LIMIT: u32 = u32::MAX;

#[cfg(test)]
mod tests;
