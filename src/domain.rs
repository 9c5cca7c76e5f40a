//! Domain model: bookmark records and alias rules

pub mod alias;
pub mod bookmark;
