//! Single-use blocking POST client over the ureq transfer engine.
//!
//! # Design
//! A `PostRequest` owns exactly one request lifecycle. It is constructed
//! from a fixed [`RequestSpec`], performs at most one blocking transfer, and
//! then holds its [`RequestOutcome`] until dropped. The lifecycle is a
//! tagged state — `Configured`, then `Performed` or `Failed` — and outcome
//! accessors are defined only in `Performed`; elsewhere they return
//! [`ClientError::NotPerformed`] rather than a stale or partial value.
//!
//! Non-2xx statuses are data, not errors: the agent is built with
//! `http_status_as_error(false)` so the caller branches on the status code,
//! and only transport-level faults surface as [`ClientError::Transfer`].

use std::io::Read;

use ureq::http::Uri;
use ureq::Agent;

use crate::error::ClientError;
use crate::http::{RequestOutcome, RequestSpec};

/// Read chunk size for draining the response body.
const CHUNK_SIZE: usize = 8 * 1024;

#[derive(Debug)]
enum State {
    Configured,
    Performed(RequestOutcome),
    Failed,
}

/// A single blocking JSON POST.
///
/// Construct with [`PostRequest::new`], call [`perform`](Self::perform)
/// once, then read [`response_code`](Self::response_code) and
/// [`response_body`](Self::response_body). A new request needs a new
/// instance; the spec is never mutated mid-flight.
#[derive(Debug)]
pub struct PostRequest {
    agent: Agent,
    spec: RequestSpec,
    state: State,
}

impl PostRequest {
    /// Configure a client for one request.
    ///
    /// Fails fast with [`ClientError::Init`] if the target URL does not
    /// parse; no request is attempted in that case.
    pub fn new(spec: RequestSpec) -> Result<Self, ClientError> {
        Uri::try_from(spec.url.as_str()).map_err(|e| ClientError::Init(e.to_string()))?;
        let agent = Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Ok(Self {
            agent,
            spec,
            state: State::Configured,
        })
    }

    /// Execute the transfer, blocking until the full response body has
    /// arrived.
    ///
    /// On transport failure (unreachable host, TLS, timeout) the instance
    /// transitions to its terminal failed state and must not be reused.
    /// A second call on the same instance returns
    /// [`ClientError::AlreadyPerformed`].
    pub fn perform(&mut self) -> Result<(), ClientError> {
        if !matches!(self.state, State::Configured) {
            return Err(ClientError::AlreadyPerformed);
        }

        let mut builder = self.agent.post(&self.spec.url);
        for (name, value) in &self.spec.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let mut response = match builder.send(self.spec.payload.as_bytes()) {
            Ok(response) => response,
            Err(e) => {
                self.state = State::Failed;
                return Err(ClientError::Transfer(e.to_string()));
            }
        };

        let status = response.status().as_u16();
        let mut body = Vec::new();
        if let Err(e) = drain(response.body_mut().as_reader(), &mut body) {
            self.state = State::Failed;
            return Err(ClientError::Transfer(e.to_string()));
        }

        self.state = State::Performed(RequestOutcome { status, body });
        Ok(())
    }

    /// The HTTP status code. Defined only after `perform` succeeded.
    pub fn response_code(&self) -> Result<u16, ClientError> {
        self.outcome().map(|outcome| outcome.status)
    }

    /// The full response body. Defined only after `perform` succeeded.
    pub fn response_body(&self) -> Result<&[u8], ClientError> {
        self.outcome().map(|outcome| outcome.body.as_slice())
    }

    /// The completed outcome. Defined only after `perform` succeeded.
    pub fn outcome(&self) -> Result<&RequestOutcome, ClientError> {
        match &self.state {
            State::Performed(outcome) => Ok(outcome),
            State::Configured | State::Failed => Err(ClientError::NotPerformed),
        }
    }
}

/// Append the response body to `sink`, chunk by chunk in arrival order.
///
/// Chunk boundaries carry no meaning; the sink is a single growing buffer
/// owned by the client.
fn drain(mut reader: impl Read, sink: &mut Vec<u8>) -> std::io::Result<()> {
    let mut chunk = [0u8; CHUNK_SIZE];
    loop {
        let n = reader.read(&mut chunk)?;
        if n == 0 {
            return Ok(());
        }
        sink.extend_from_slice(&chunk[..n]);
    }
}
