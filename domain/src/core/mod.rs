//! Core domain primitives

pub mod error;
pub mod numeric;
pub mod string;
