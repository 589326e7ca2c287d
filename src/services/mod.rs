//! Core services for record formatting, batching, and export orchestration

pub mod batch;
pub mod format;
pub mod sink;
pub mod writer;
