//! dynmat-cli: file-driven front end for the `dynmat` containers.
//!
//! Reads vectors and matrices from text files, applies a single operator and
//! renders the result in the container text format.
pub mod config;
pub mod input;
pub mod ops;
