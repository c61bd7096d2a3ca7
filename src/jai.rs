//! Main module for jai-lex library functionality

pub mod config;
pub mod lexing;
pub mod outline;
pub mod structure;
