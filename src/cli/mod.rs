//! Command-line interface plumbing

pub mod args;
