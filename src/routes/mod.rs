//! src/routes/mod.rs

mod api_info;
mod health_check;
mod users;

pub use api_info::*;
pub use health_check::*;
pub use users::*;
