//! Small helpers shared by services.

pub mod pagination;
pub mod text;
