//! Input handling for decoded image streams

pub mod image;
