//! Synchronous JSON POST client with optional HTTP Basic Authentication.
//!
//! # Overview
//! One blocking request per client instance: configure a [`RequestSpec`]
//! (target URL, pre-serialized JSON payload, headers), construct a
//! [`PostRequest`], call [`PostRequest::perform`] once, then read the status
//! code and response body. Transport failures are errors; 4xx/5xx statuses
//! are valid outcomes the caller interprets.
//!
//! # Design
//! - `PostRequest` is single-use — its lifecycle is a tagged state
//!   (Configured, then Performed or Failed), never incidental field
//!   nullability.
//! - The payload is an already-serialized string; JSON serialization is the
//!   caller's concern.
//! - [`auth::encode_basic_auth`] is a pure leaf with no failure path.

pub mod auth;
pub mod client;
pub mod error;
pub mod http;

pub use auth::{encode_basic_auth, Credentials};
pub use client::PostRequest;
pub use error::ClientError;
pub use http::{RequestOutcome, RequestSpec};
