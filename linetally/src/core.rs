// src/core.rs
pub mod category;
pub mod error;
pub mod exclude;
pub mod lines;
pub mod scanner;
