//! Dashboard component modules
//!
//! Contains all individual rendering components

pub mod crypto;
pub mod footer;
pub mod header;
pub mod logs;
pub mod news;
pub mod weather;
