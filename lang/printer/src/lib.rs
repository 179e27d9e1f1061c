//! Layout-aware pretty-printing of the generic program model, built on the
//! `pretty`-crate `Arena`/`DocBuilder` foundation.

mod format;
mod render;
mod tokens;
mod types;

pub use format::{format, DEFAULT_WIDTH};
pub use types::{Alloc, Builder, Print};
