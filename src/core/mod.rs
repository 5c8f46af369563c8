//! Core functionality for keygate

pub mod keys;
