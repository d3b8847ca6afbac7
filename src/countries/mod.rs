// src/countries/mod.rs
pub mod aliases;
pub mod resolve;

pub use aliases::ALIASES;
pub use resolve::{is_aggregate, to_code};
