//! Library surface of the inquiry CLI: logging setup and the HTTP submit
//! capability. The binary's argument parsing and command dispatch live in
//! `main.rs`.

pub mod http;
pub mod logging;
