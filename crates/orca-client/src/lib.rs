//! Read-only client for the Orca Security REST API.
//!
//! Fetches user and group records for downstream ingestion into a
//! graph-based asset inventory. Every request carries a bearer token; the
//! client exposes a connectivity check and two iteration operations that
//! await a caller-supplied callback once per record, strictly sequentially.
//!
//! Groups are yielded with their membership already resolved: listing the
//! groups costs one request, plus one membership request per group.
//!
//! # Example
//!
//! ```no_run
//! use orca_client::{OrcaClient, OrcaConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = OrcaConfig::new("api-token");
//! let client = OrcaClient::new(config)?;
//!
//! client.verify_authentication().await?;
//!
//! client
//!     .iterate_users(|user| async move {
//!         println!("{} <{}>", user.name, user.email);
//!         Ok(())
//!     })
//!     .await?;
//!
//! client
//!     .iterate_groups(|group| async move {
//!         println!("{} has {} members", group.name, group.users.len());
//!         Ok(())
//!     })
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod types;

pub use client::OrcaClient;
pub use config::{DEFAULT_BASE_URL, OrcaConfig};
pub use error::{OrcaError, OrcaResult};
pub use types::{OrcaGroup, OrcaGroupSummary, OrcaUser};
