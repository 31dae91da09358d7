//! Unified LLM interface types and traits.
//!
//! This crate provides the shared types used across all LLM providers:
//! `Message`, `Role`, `UpstreamError`, and the `LLM` trait. Providers
//! live in their own crates and implement `LLM` over HTTP transport.

pub use error::UpstreamError;
pub use message::{Message, Role};
pub use noop::NoopProvider;
pub use provider::LLM;
pub use reqwest::{self, Client};

mod error;
mod message;
mod noop;
mod provider;
