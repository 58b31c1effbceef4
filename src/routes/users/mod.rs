//! src/routes/users/mod.rs

mod get;
mod post;

pub use get::*;
pub use post::*;
