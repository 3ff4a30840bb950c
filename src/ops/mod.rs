//! Elementwise and dense kernels
//!
//! Vector kernels operate on plain `f64` slices; matrix kernels operate on
//! [`crate::matrix::Matrix`]. Everything here is a pure computation that
//! validates shapes and reports failures through [`crate::error::Result`].

pub mod matrix;
pub mod vector;
