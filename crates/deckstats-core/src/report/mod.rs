//! Report rendering.

mod console;

pub use console::*;
