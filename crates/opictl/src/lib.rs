#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::redundant_pub_crate)]

//! Administrative CLI for an OPI resource server.
//!
//! Layout:
//! - `cli.rs`: argument surface and command dispatch
//! - `commands/`: command handlers grouped by backend
//! - `client.rs`: shared error types, deadlines, and logging setup
//! - `output.rs`: record renderers for table and JSON output
//! - `main.rs`: thin entrypoint delegating to `run()`

pub(crate) mod cli;
pub(crate) mod client;
pub(crate) mod commands;
pub(crate) mod output;

pub use cli::run;
