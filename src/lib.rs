#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(rust_2018_idioms)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

//! # Airfryers 🍟
//!
//! A Rust library for controlling Xiaomi MIoT air fryers (the careli/silen
//! fryer family, e.g. `careli.fryer.maf02`).
//!
//! The fryer speaks the MIoT property/action model: a fixed schema maps
//! symbolic names like `target_temperature` or `start_cook` to numeric
//! `(siid, piid)` / `(siid, aiid)` addresses. This crate owns that mapping
//! layer end to end:
//!
//! - **Schema**: per-model-variant tables binding names to addresses,
//!   selected once from the model string at construction.
//! - **Status decoding**: one batched property read becomes a typed
//!   [`FryerStatus`] snapshot. Enumerated fields carry an explicit `Unknown`
//!   fallback, so firmware reporting values outside the published domains
//!   degrades a single field instead of failing the refresh.
//! - **Command encoding**: every controllable property and action has a
//!   validated constructor; range violations and unknown recipe presets are
//!   rejected before any I/O.
//! - **Recipe presets**: the eight built-in programs (`M0`..`M7`) with their
//!   parameter vectors, including the delimited serialization the
//!   `start_custom_cook` action expects.
//!
//! What this crate does **not** do: sockets, the miio encryption handshake,
//! and device discovery. Those live behind the [`MiotTransport`] trait — plug
//! in whatever carries the protocol for you.
//!
//! ## Quick Start
//!
//! ```no_run
//! use airfryers::{AirFryer, MiotTransport};
//! use std::sync::Arc;
//!
//! # async fn demo(transport: Arc<dyn MiotTransport>) -> airfryers::Result<()> {
//! let fryer = AirFryer::new(transport, "careli.fryer.maf02");
//!
//! // One batched read, decoded into a typed snapshot.
//! let status = fryer.refresh_status().await?;
//! println!(
//!     "{} at {:?}°C, {} min left",
//!     status.status,
//!     status.target_temperature,
//!     status.left_time.unwrap_or(0),
//! );
//!
//! // Validated commands; bad arguments never reach the device.
//! fryer.set_target_temperature(180).await?;
//! fryer.set_target_time(20).await?;
//! fryer.start_cook().await?;
//!
//! // Or run a built-in program.
//! fryer.start_custom_cook("M1").await?;
//! # Ok(())
//! # }
//! ```

/// Main device control interface
pub mod device;
/// Error types and handling
pub mod error;
/// Status decoding and command encoding
pub mod protocol;
/// Built-in recipe presets
pub mod recipes;
/// MIoT mapping tables and device variants
pub mod schema;
/// The transport collaborator boundary
pub mod transport;
/// Type definitions and data structures
pub mod types;

// Re-export the main types for convenient usage
pub use device::AirFryer;
pub use error::{FryerError, Result};
pub use protocol::{decode_status, Request};
pub use recipes::{RecipePreset, PRESETS, UNRECOGNIZED_RECIPE};
pub use schema::{DeviceVariant, MiotAddress, MiotSchema, MODEL_CARELI_MAF01, MODEL_CARELI_MAF02};
pub use transport::{
    ActionRequest, MiotTransport, PropertyRequest, PropertyResult, CODE_SUCCESS,
};
pub use types::{
    DeviceFault, FoodQuanty, FryerStatus, OperatingStatus, PreheatSwitch, TurnPot,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Recommended status poll interval in seconds
///
/// The fryer updates its reported state slowly; polling faster than this
/// gains nothing and risks overlapping round trips on slow networks.
pub const DEFAULT_SCAN_INTERVAL_SECS: u64 = 30;
