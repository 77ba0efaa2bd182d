//! # Integer BASIC
//!
//! A small BASIC in the style of the line-numbered interpreters that
//! came with early home computers. Every value is a 32-bit integer.
//!
//! Run the executable and type statements. A line starting with a
//! number is stored as part of the program; anything else runs at once.
//! ```text
//! 10 INPUT N
//! 20 PRINT N * N
//! RUN
//!  ? 12
//! 144
//! ```
//!
//! A program file can be given on the command line and started with
//! `--run`. `--line-limit` caps how many times any single line may run.

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/chapter_1.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_1;

#[path = "doc/chapter_2.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_2;

pub mod lang;
pub mod mach;
pub mod term;
