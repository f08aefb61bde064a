//! Trait definitions for the nationstates request client.
//!
//! The request client owns rate limiting, retries and load state. Everything
//! that touches the network (URL construction, the HTTP round trip, parsing
//! the response) sits behind the [`Transport`] trait.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::Transport;
