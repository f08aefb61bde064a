//! nationstates - rate-limited request client
//!
//! A [`Nationstates`] value is one request against the NationStates api: an
//! api kind, a target, a set of shards. Loading it goes through a
//! [`SlidingWindowLimiter`] shared by every request in the process, sleeping
//! and re-checking while the window is full. Once loaded, the collected
//! shards are available through [`Nationstates::collect`],
//! [`Nationstates::get`] and [`Nationstates::field`].
//!
//! The network side (URL construction, HTTP, parsing) is supplied by the
//! caller as a [`Transport`] implementation.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use nationstates::{LoadOptions, Nationstates, SafetyPreset, SlidingWindowLimiter};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let limiter = SlidingWindowLimiter::new();
//!
//!     let mut nation = Nationstates::builder("nation")
//!         .value("testlandia")
//!         .shard(["fullname", "motto"])
//!         .user_agent("Testlandia Census Bot")
//!         .build(HttpTransport::new(), limiter.clone())
//!         .await?;
//!
//!     nation.load(LoadOptions::preset(SafetyPreset::VerySafe)).await?;
//!     println!("{}", nation.get("fullname")?);
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - `nationstates_core` - Api kinds and request identity
//! - `nationstates_interface` - The `Transport` trait
//! - `nationstates_error` - Error types
//! - `nationstates_rate_limit` - Sliding window limiter, presets, configuration
//!
//! This crate (`nationstates`) re-exports everything for convenience.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod accessor;
mod builder;
mod loader;
mod request;

pub use builder::NationstatesBuilder;
pub use loader::LoadOptions;
pub use request::Nationstates;

// Re-export workspace crates
pub use nationstates_core::*;
pub use nationstates_error::*;
pub use nationstates_interface::*;
pub use nationstates_rate_limit::*;
