pub mod core;
pub mod fetchers;
