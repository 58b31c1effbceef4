//! tests/api/main.rs

mod api_info;
mod helpers;
