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

//! Typed HTTP client for an OPI resource server.
//!
//! Layout:
//! - `models.rs`: wire types for VRF and remote controller resources
//! - `network.rs`: VRF operations (create, delete, get, list, update)
//! - `storage.rs`: remote controller operations on the storage backend
//! - `transport.rs`: address handling, request plumbing, error classification
//! - `error.rs`: typed errors shared by every operation

pub mod error;
pub mod models;
pub mod network;
pub mod storage;

mod transport;

pub use error::{ClientError, ClientResult};
pub use network::VrfClient;
pub use reqwest::StatusCode;
pub use storage::NvmeControllerClient;
