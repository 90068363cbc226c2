//! # Ring Module
//!
//! Modular arithmetic over Z/NZ: the [`Ring`] scalar operations, gcd helpers,
//! matrix operations (including inversion mod N) and [`ModularMatrix`].

pub mod helper;
pub mod math;
pub mod matrix_ops;
pub mod modular_matrix;

/// Represents a mathematical vector using a `Vec<i64>`.
pub type Vector = Vec<i64>;
/// Represents a mathematical matrix using a `Vec<Vec<i64>>`.
pub type Matrix = Vec<Vec<i64>>;

pub use helper::{extended_gcd, gcd};
pub use math::Ring;
pub use matrix_ops::{determinant, matrix_inverse};
pub use modular_matrix::ModularMatrix;
