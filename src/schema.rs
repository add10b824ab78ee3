use crate::error::{FryerError, Result};
use tracing::warn;

/// Default careli model string, used when a caller does not know the model
pub const MODEL_CARELI_MAF02: &str = "careli.fryer.maf02";

/// First-generation careli model
pub const MODEL_CARELI_MAF01: &str = "careli.fryer.maf01";

/// MIoT address of one schema entry
///
/// Properties are addressed by `(siid, piid)` and actions by `(siid, aiid)`.
/// The actual wire encoding of these identifiers belongs to the transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MiotAddress {
    /// A readable (and possibly writable) device property
    Property {
        /// Service id
        siid: u32,
        /// Property id
        piid: u32,
    },
    /// An invokable device action
    Action {
        /// Service id
        siid: u32,
        /// Action id
        aiid: u32,
    },
}

/// Mapping/behavior profile a model string classifies into
///
/// The fryer family is sold under several vendor prefixes with slightly
/// different MIoT schemas. The profile is chosen once at client construction
/// and fixed for the client's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceVariant {
    /// `careli.fryer.*` models (maf01, maf02, ...) — the reference schema
    Careli,
    /// `silen.fryer.*` models
    Silen,
    /// `xiaomi.fryer.*` models
    Mi,
}

impl DeviceVariant {
    /// Classify a model string into a variant
    ///
    /// Unrecognized models fall back to the careli profile with a warning
    /// rather than refusing to construct; an unknown fryer is still more
    /// useful half-mapped than rejected.
    #[must_use]
    pub fn from_model(model: &str) -> Self {
        if model.starts_with("careli.fryer.") {
            Self::Careli
        } else if model.starts_with("silen.fryer.") {
            Self::Silen
        } else if model.starts_with("xiaomi.fryer.") {
            Self::Mi
        } else {
            warn!("unknown model `{}`, using careli profile", model);
            Self::Careli
        }
    }

    /// The mapping table for this variant
    #[must_use]
    pub fn schema(self) -> &'static MiotSchema {
        match self {
            Self::Careli => &CARELI_SCHEMA,
            Self::Silen => &SILEN_SCHEMA,
            Self::Mi => &MI_SCHEMA,
        }
    }
}

/// Read-only registry of symbolic name → MIoT address
///
/// Built once from static data; safe for concurrent lookup. Every name the
/// decoder or the command encoder uses must be present in the table for the
/// variant in use — a miss on a name this crate itself supplies is a defect,
/// which is why [`resolve`](Self::resolve) takes `&'static str`.
#[derive(Debug)]
pub struct MiotSchema {
    entries: &'static [(&'static str, MiotAddress)],
}

impl MiotSchema {
    /// Resolve a symbolic name to its address
    ///
    /// # Errors
    ///
    /// Returns [`FryerError::Schema`] if the name has no entry in this
    /// variant's table.
    pub fn resolve(&self, name: &'static str) -> Result<MiotAddress> {
        self.entries
            .iter()
            .find(|(entry_name, _)| *entry_name == name)
            .map(|(_, address)| *address)
            .ok_or(FryerError::Schema { name })
    }

    /// Iterate all readable properties as `(name, siid, piid)`
    ///
    /// This is the request set for a batched status read.
    pub fn properties(&self) -> impl Iterator<Item = (&'static str, u32, u32)> + '_ {
        self.entries.iter().filter_map(|(name, address)| match address {
            MiotAddress::Property { siid, piid } => Some((*name, *siid, *piid)),
            MiotAddress::Action { .. } => None,
        })
    }
}

// Schema for careli.fryer.maf01/maf02, per
// urn:miot-spec-v2:device:air-fryer:0000A0A4:careli-maf01:1
static CARELI_SCHEMA: MiotSchema = MiotSchema {
    entries: &[
        ("status", MiotAddress::Property { siid: 2, piid: 1 }),
        ("device_fault", MiotAddress::Property { siid: 2, piid: 2 }),
        ("target_time", MiotAddress::Property { siid: 2, piid: 3 }),
        ("target_temperature", MiotAddress::Property { siid: 2, piid: 4 }),
        ("left_time", MiotAddress::Property { siid: 2, piid: 5 }),
        ("recipe_id", MiotAddress::Property { siid: 3, piid: 1 }),
        ("recipe_name", MiotAddress::Property { siid: 3, piid: 2 }),
        ("appoint_time", MiotAddress::Property { siid: 3, piid: 5 }),
        ("food_quanty", MiotAddress::Property { siid: 3, piid: 6 }),
        ("preheat_switch", MiotAddress::Property { siid: 3, piid: 7 }),
        ("appoint_time_left", MiotAddress::Property { siid: 3, piid: 8 }),
        ("recipe_sync", MiotAddress::Property { siid: 3, piid: 9 }),
        ("turn_pot", MiotAddress::Property { siid: 3, piid: 10 }),
        ("start_cook", MiotAddress::Action { siid: 2, aiid: 1 }),
        ("cancel_cooking", MiotAddress::Action { siid: 2, aiid: 2 }),
        ("pause", MiotAddress::Action { siid: 2, aiid: 3 }),
        ("start_custom_cook", MiotAddress::Action { siid: 3, aiid: 1 }),
        ("resume_cooking", MiotAddress::Action { siid: 3, aiid: 2 }),
    ],
};

// silen.fryer.* has no turn-pot reminder.
static SILEN_SCHEMA: MiotSchema = MiotSchema {
    entries: &[
        ("status", MiotAddress::Property { siid: 2, piid: 1 }),
        ("device_fault", MiotAddress::Property { siid: 2, piid: 2 }),
        ("target_time", MiotAddress::Property { siid: 2, piid: 3 }),
        ("target_temperature", MiotAddress::Property { siid: 2, piid: 4 }),
        ("left_time", MiotAddress::Property { siid: 2, piid: 5 }),
        ("recipe_id", MiotAddress::Property { siid: 3, piid: 1 }),
        ("recipe_name", MiotAddress::Property { siid: 3, piid: 2 }),
        ("appoint_time", MiotAddress::Property { siid: 3, piid: 5 }),
        ("food_quanty", MiotAddress::Property { siid: 3, piid: 6 }),
        ("preheat_switch", MiotAddress::Property { siid: 3, piid: 7 }),
        ("appoint_time_left", MiotAddress::Property { siid: 3, piid: 8 }),
        ("recipe_sync", MiotAddress::Property { siid: 3, piid: 9 }),
        ("start_cook", MiotAddress::Action { siid: 2, aiid: 1 }),
        ("cancel_cooking", MiotAddress::Action { siid: 2, aiid: 2 }),
        ("pause", MiotAddress::Action { siid: 2, aiid: 3 }),
        ("start_custom_cook", MiotAddress::Action { siid: 3, aiid: 1 }),
        ("resume_cooking", MiotAddress::Action { siid: 3, aiid: 2 }),
    ],
};

// xiaomi.fryer.* has neither turn-pot nor app recipe sync.
static MI_SCHEMA: MiotSchema = MiotSchema {
    entries: &[
        ("status", MiotAddress::Property { siid: 2, piid: 1 }),
        ("device_fault", MiotAddress::Property { siid: 2, piid: 2 }),
        ("target_time", MiotAddress::Property { siid: 2, piid: 3 }),
        ("target_temperature", MiotAddress::Property { siid: 2, piid: 4 }),
        ("left_time", MiotAddress::Property { siid: 2, piid: 5 }),
        ("recipe_id", MiotAddress::Property { siid: 3, piid: 1 }),
        ("recipe_name", MiotAddress::Property { siid: 3, piid: 2 }),
        ("appoint_time", MiotAddress::Property { siid: 3, piid: 5 }),
        ("food_quanty", MiotAddress::Property { siid: 3, piid: 6 }),
        ("preheat_switch", MiotAddress::Property { siid: 3, piid: 7 }),
        ("appoint_time_left", MiotAddress::Property { siid: 3, piid: 8 }),
        ("start_cook", MiotAddress::Action { siid: 2, aiid: 1 }),
        ("cancel_cooking", MiotAddress::Action { siid: 2, aiid: 2 }),
        ("pause", MiotAddress::Action { siid: 2, aiid: 3 }),
        ("start_custom_cook", MiotAddress::Action { siid: 3, aiid: 1 }),
        ("resume_cooking", MiotAddress::Action { siid: 3, aiid: 2 }),
    ],
};
