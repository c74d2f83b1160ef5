mod compiler;
mod defines;
mod error;
mod mappings;
mod render;
mod table;

pub use compiler::*;
pub use defines::{CONST_ASSERTION_SUFFIX, DEFAULT_EXPORT_PREFIX};
pub use error::*;
pub use mappings::*;
pub use render::*;
pub use table::*;
