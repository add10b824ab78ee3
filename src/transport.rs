//! The transport collaborator boundary
//!
//! This crate deliberately contains no socket, encryption, or discovery code:
//! the MIoT session (handshake, token encryption, request framing) is the
//! transport's business. The client only needs the two calls below — a
//! batched property read with per-property result codes, and a single
//! write/invoke.

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// MIoT result code for a successful per-property read
pub const CODE_SUCCESS: i32 = 0;

/// Address of one property in a batched read or a write
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyRequest {
    /// Service id
    pub siid: u32,
    /// Property id
    pub piid: u32,
}

/// Address of an action invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRequest {
    /// Service id
    pub siid: u32,
    /// Action id
    pub aiid: u32,
}

/// Per-property record of a batched read
///
/// The transport returns one record per requested property, in no particular
/// order; correlation is by `(siid, piid)` identity. `value` is present iff
/// `code` is [`CODE_SUCCESS`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyResult {
    /// Service id the record belongs to
    pub siid: u32,
    /// Property id the record belongs to
    pub piid: u32,
    /// MIoT result code; 0 means success
    pub code: i32,
    /// Raw scalar value, present on success only
    pub value: Option<Value>,
}

impl PropertyResult {
    /// A successful read record
    #[must_use]
    pub const fn ok(siid: u32, piid: u32, value: Value) -> Self {
        Self {
            siid,
            piid,
            code: CODE_SUCCESS,
            value: Some(value),
        }
    }

    /// A failed read record with a device-reported code
    #[must_use]
    pub const fn failed(siid: u32, piid: u32, code: i32) -> Self {
        Self {
            siid,
            piid,
            code,
            value: None,
        }
    }

    /// True if the device answered this property successfully
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code == CODE_SUCCESS
    }
}

/// A MIoT transport session for one device
///
/// Implementations wrap whatever carries the protocol — the miio UDP
/// transport, a cloud relay, or an in-process fake for tests. All methods
/// map transport-level failures (unreachable, timeout, device-reported
/// request failure) to [`crate::FryerError::Transport`]-family errors; this
/// layer never retries.
#[async_trait]
pub trait MiotTransport: Send + Sync {
    /// Read a batch of properties in one round trip
    ///
    /// Must return one [`PropertyResult`] per requested property whenever the
    /// round trip itself succeeds, even for properties the device failed to
    /// answer (those carry a non-zero code). Omitting a record is tolerated
    /// by the decoder but loses the failure code.
    ///
    /// # Errors
    ///
    /// Returns a transport-level error if the round trip fails entirely.
    async fn get_properties(&self, requests: &[PropertyRequest]) -> Result<Vec<PropertyResult>>;

    /// Write a single property
    ///
    /// # Errors
    ///
    /// Returns a transport-level error if the write fails or the device
    /// rejects it.
    async fn set_property(&self, request: PropertyRequest, value: Value) -> Result<()>;

    /// Invoke a single action with its arguments
    ///
    /// # Errors
    ///
    /// Returns a transport-level error if the invocation fails or the device
    /// rejects it.
    async fn call_action(&self, request: ActionRequest, args: Vec<Value>) -> Result<()>;
}
