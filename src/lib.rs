//! Client library for the Dev2Cloud sandbox management API.
//!
//! Callers request ephemeral database sandboxes (Postgres or Redis) and
//! receive connection credentials once server-side provisioning
//! completes. The client polls the sandbox status every second, bounded
//! by a caller-supplied timeout, and classifies failures deterministically.
//!
//! Two equivalent surfaces: [`Client`] (async) and [`blocking::Client`].
//!
//! ```no_run
//! use dev2cloud::{Client, CreateOptions, SandboxType};
//!
//! # async fn run() -> Result<(), dev2cloud::Error> {
//! let client = Client::from_env()?;
//! let sandbox = client
//!     .create_sandbox(SandboxType::Postgres, CreateOptions::default())
//!     .await?;
//! println!("connect: {}", sandbox.url.as_deref().unwrap_or("-"));
//! client.delete_sandbox(&sandbox.id).await?;
//! # Ok(())
//! # }
//! ```

pub mod blocking;
mod client;
mod config;
mod error;
mod models;
mod transport;

pub use client::{Client, CreateOptions};
pub use config::{API_KEY_ENV, Config, DEFAULT_BASE_URL};
pub use error::Error;
pub use models::{
    Credentials, PostgresCredentials, RedisCredentials, Sandbox, SandboxStatus, SandboxType,
};
