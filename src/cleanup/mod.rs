//! Cleanup module - tracking and deleting processed source folders

pub mod delete;
pub mod folders;

pub use delete::*;
pub use folders::*;
