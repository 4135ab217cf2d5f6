//! Domain types exposed by the catalog service layer.

pub mod book;
pub mod types;
