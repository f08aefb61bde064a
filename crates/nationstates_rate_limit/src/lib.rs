//! Sliding-window rate limiting for the NationStates api.
//!
//! The api bans clients that exceed its request budget, so every request
//! entity in a process consults one shared [`SlidingWindowLimiter`] before
//! touching the network. The limiter counts accepted requests inside a
//! trailing window and refuses new ones once a [`RateLimitPolicy`] is full.
//!
//! ## Presets
//!
//! Three named presets cover the usual budgets, see [`SafetyPreset`]:
//! - `safe` - 30 requests per 30 seconds (default)
//! - `not_safe` - 48 requests per 30 seconds
//! - `very_safe` - 25 requests per 30 seconds
//!
//! Preset values can be overridden through [`NationstatesConfig`].

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod limiter;
mod policy;

pub use config::{ClientConfig, NationstatesConfig, PolicyConfig, RateLimitConfig};
pub use limiter::SlidingWindowLimiter;
pub use policy::{RateLimitPolicy, SafetyPreset};
