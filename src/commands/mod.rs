//! Command implementations for memo2md

pub mod convert;
