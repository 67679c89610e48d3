//! Main module for funyu library functionality

pub mod ast;
pub mod config;
pub mod formats;
pub mod inlines;
pub mod lexing;
pub mod parsing;
pub mod testing;
