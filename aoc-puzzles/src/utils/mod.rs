//! Shared helpers for puzzle solvers

pub mod text;
