//! Main module for tgifer library functionality

pub mod ast;
pub mod config;
pub mod extraction;
pub mod formats;
pub mod lexing;
pub mod loader;
pub mod parsing;
pub mod testing;
pub mod token;
