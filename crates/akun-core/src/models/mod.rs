//! Data models shared by the parser, the CLI and the WASM bindings.

pub mod account;
pub mod config;
