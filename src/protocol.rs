//! Status decoding and command encoding for the MIoT property model
//!
//! The decoder turns one batched read (per-property success/failure records)
//! into a [`FryerStatus`] snapshot. It is pure and total: a property that is
//! missing, failed, or carries a value outside its known domain degrades to
//! `None`/`Unknown` with a warning, never failing the batch. Firmware in the
//! field reports values outside the published enumerations, so this
//! partial tolerance is the central correctness property of the layer.
//!
//! The encoder side builds [`Request`] values — validated, protocol-ready
//! writes and invocations — before any transport I/O happens.

use crate::{
    error::{FryerError, Result},
    recipes,
    schema::{MiotAddress, MiotSchema},
    transport::PropertyResult,
    types::FryerStatus,
};
use serde_json::Value;
use tracing::warn;

/// Locate the raw value for a named property in a result batch
///
/// Correlation is by `(siid, piid)` identity — the transport does not
/// guarantee result order. Yields `None` when the variant's schema lacks the
/// name, the transport omitted the record, or the record carries a failure
/// code.
fn raw_value<'a>(
    schema: &MiotSchema,
    results: &'a [PropertyResult],
    name: &'static str,
) -> Option<&'a Value> {
    let MiotAddress::Property { siid, piid } = schema.resolve(name).ok()? else {
        return None;
    };
    results
        .iter()
        .find(|result| result.siid == siid && result.piid == piid && result.is_ok())
        .and_then(|result| result.value.as_ref())
}

/// Decode an enumerated property, falling back to `Unknown`
///
/// Relies on every enumerated domain mapping out-of-set values (including
/// -1 itself) to its `Unknown` variant via `From<i64>`.
fn decode_enum<T>(name: &'static str, raw: Option<&Value>) -> T
where
    T: From<i64> + PartialEq,
{
    let unknown = T::from(-1);
    let Some(value) = raw else {
        return unknown;
    };
    match value.as_i64() {
        Some(code) => {
            let decoded = T::from(code);
            if decoded == unknown {
                warn!("unrecognized {} value {}, treating as Unknown", name, code);
            }
            decoded
        }
        None => {
            warn!("non-numeric {} value {}, treating as Unknown", name, value);
            unknown
        }
    }
}

fn decode_u32(raw: Option<&Value>) -> Option<u32> {
    raw.and_then(Value::as_u64).and_then(|v| u32::try_from(v).ok())
}

/// Decode a batched property read into a typed snapshot
///
/// Pure and stateless: decoding the same batch twice yields identical
/// snapshots. Never fails — unrecognized or missing values degrade per
/// field.
#[must_use]
pub fn decode_status(schema: &MiotSchema, results: &[PropertyResult]) -> FryerStatus {
    FryerStatus {
        status: decode_enum("status", raw_value(schema, results, "status")),
        device_fault: decode_enum("device_fault", raw_value(schema, results, "device_fault")),
        target_time: decode_u32(raw_value(schema, results, "target_time")),
        target_temperature: decode_u32(raw_value(schema, results, "target_temperature")),
        left_time: decode_u32(raw_value(schema, results, "left_time")),
        recipe_id: raw_value(schema, results, "recipe_id")
            .and_then(Value::as_str)
            .map(str::to_owned),
        appoint_time: decode_u32(raw_value(schema, results, "appoint_time")),
        food_quanty: decode_enum("food_quanty", raw_value(schema, results, "food_quanty")),
        preheat_switch: decode_enum(
            "preheat_switch",
            raw_value(schema, results, "preheat_switch"),
        ),
        appoint_time_left: decode_u32(raw_value(schema, results, "appoint_time_left")),
        recipe_sync: raw_value(schema, results, "recipe_sync").and_then(Value::as_i64),
        turn_pot: decode_enum("turn_pot", raw_value(schema, results, "turn_pot")),
    }
}

fn check_range(field: &'static str, value: i32, min: i32, max: i32) -> Result<()> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(FryerError::OutOfRange {
            field,
            value: i64::from(value),
            min: i64::from(min),
            max: i64::from(max),
        })
    }
}

/// A validated, protocol-ready device command
///
/// Constructed through the associated functions below, each of which
/// enforces its domain range before any transport I/O can happen. The name
/// is resolved against the client's schema at execution time.
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    /// Write one property
    Write {
        /// Symbolic property name
        name: &'static str,
        /// Value to write
        value: Value,
    },
    /// Invoke one action
    Invoke {
        /// Symbolic action name
        name: &'static str,
        /// Action arguments, already serialized
        args: Vec<Value>,
    },
}

impl Request {
    /// Set the scheduled delay before cooking starts
    ///
    /// # Errors
    ///
    /// Returns [`FryerError::OutOfRange`] unless `minutes` is within
    /// `0..=1440`.
    pub fn set_appoint_time(minutes: i32) -> Result<Self> {
        check_range("appoint_time", minutes, 0, 1440)?;
        Ok(Self::Write {
            name: "appoint_time",
            value: Value::from(minutes),
        })
    }

    /// Select a recipe by its raw token
    ///
    /// The schema places no constraint on the token at this layer; the
    /// device itself rejects ids it does not know.
    #[must_use]
    pub fn set_recipe_id(recipe_id: impl Into<String>) -> Self {
        Self::Write {
            name: "recipe_id",
            value: Value::from(recipe_id.into()),
        }
    }

    /// Set the food quantity code
    ///
    /// # Errors
    ///
    /// Returns [`FryerError::OutOfRange`] unless `code` is within `0..=5`.
    pub fn set_food_quanty(code: i32) -> Result<Self> {
        check_range("food_quanty", code, 0, 5)?;
        Ok(Self::Write {
            name: "food_quanty",
            value: Value::from(code),
        })
    }

    /// Set the cooking duration in minutes
    ///
    /// Unlike the appoint time, zero is not a valid duration.
    ///
    /// # Errors
    ///
    /// Returns [`FryerError::OutOfRange`] unless `minutes` is within
    /// `1..=1440`.
    pub fn set_target_time(minutes: i32) -> Result<Self> {
        check_range("target_time", minutes, 1, 1440)?;
        Ok(Self::Write {
            name: "target_time",
            value: Value::from(minutes),
        })
    }

    /// Set the cooking temperature in °C
    ///
    /// # Errors
    ///
    /// Returns [`FryerError::OutOfRange`] unless `celsius` is within
    /// `40..=200`.
    pub fn set_target_temperature(celsius: i32) -> Result<Self> {
        check_range("target_temperature", celsius, 40, 200)?;
        Ok(Self::Write {
            name: "target_temperature",
            value: Value::from(celsius),
        })
    }

    /// Start cooking with the current settings
    #[must_use]
    pub const fn start_cook() -> Self {
        Self::Invoke {
            name: "start_cook",
            args: Vec::new(),
        }
    }

    /// Cancel the current cooking program
    #[must_use]
    pub const fn cancel_cooking() -> Self {
        Self::Invoke {
            name: "cancel_cooking",
            args: Vec::new(),
        }
    }

    /// Pause the current cooking program
    #[must_use]
    pub const fn pause() -> Self {
        Self::Invoke {
            name: "pause",
            args: Vec::new(),
        }
    }

    /// Resume a paused cooking program
    #[must_use]
    pub const fn resume_cooking() -> Self {
        Self::Invoke {
            name: "resume_cooking",
            args: Vec::new(),
        }
    }

    /// Start one of the built-in cooking programs
    ///
    /// Resolves the token against the preset table and serializes the
    /// preset's parameter vector as the action's single string argument
    /// (e.g. `"M1,,15,200,0,3,0"`).
    ///
    /// # Errors
    ///
    /// Returns [`FryerError::UnknownPreset`] if the token matches no preset.
    pub fn start_custom_cook(preset_id: &str) -> Result<Self> {
        let preset = recipes::find(preset_id)
            .ok_or_else(|| FryerError::UnknownPreset(preset_id.to_string()))?;
        Ok(Self::Invoke {
            name: "start_custom_cook",
            args: vec![Value::from(preset.action_arg())],
        })
    }

    /// Symbolic name of the property or action this request targets
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Write { name, .. } | Self::Invoke { name, .. } => *name,
        }
    }

    /// True if this request is a property write (as opposed to an action)
    #[must_use]
    pub const fn is_write(&self) -> bool {
        matches!(self, Self::Write { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        schema::DeviceVariant,
        types::{DeviceFault, FoodQuanty, OperatingStatus, PreheatSwitch, TurnPot},
    };
    use serde_json::json;

    fn careli_batch() -> Vec<PropertyResult> {
        vec![
            PropertyResult::ok(2, 1, json!(4)),      // status: Cooking
            PropertyResult::ok(2, 2, json!(0)),      // device_fault: NoFaults
            PropertyResult::ok(2, 3, json!(15)),     // target_time
            PropertyResult::ok(2, 4, json!(200)),    // target_temperature
            PropertyResult::ok(2, 5, json!(9)),      // left_time
            PropertyResult::ok(3, 1, json!("M1")),   // recipe_id
            PropertyResult::ok(3, 2, json!("")),     // recipe_name (device-side)
            PropertyResult::ok(3, 5, json!(0)),      // appoint_time
            PropertyResult::ok(3, 6, json!(3)),      // food_quanty: Half
            PropertyResult::ok(3, 7, json!(1)),      // preheat_switch: Off
            PropertyResult::ok(3, 8, json!(0)),      // appoint_time_left
            PropertyResult::ok(3, 9, json!(0)),      // recipe_sync
            PropertyResult::ok(3, 10, json!(0)),     // turn_pot: NotTurnPot
        ]
    }

    #[test]
    fn test_decode_full_batch() {
        let schema = DeviceVariant::Careli.schema();
        let status = decode_status(schema, &careli_batch());

        assert_eq!(status.status, OperatingStatus::Cooking);
        assert_eq!(status.device_fault, DeviceFault::NoFaults);
        assert_eq!(status.target_time, Some(15));
        assert_eq!(status.target_temperature, Some(200));
        assert_eq!(status.left_time, Some(9));
        assert_eq!(status.recipe_id.as_deref(), Some("M1"));
        assert_eq!(status.recipe_name(), Some("French Fries"));
        assert_eq!(status.appoint_time, Some(0));
        assert_eq!(status.food_quanty, FoodQuanty::Half);
        assert_eq!(status.preheat_switch, PreheatSwitch::Off);
        assert_eq!(status.turn_pot, TurnPot::NotTurnPot);
        assert!(status.is_on());
    }

    #[test]
    fn test_decode_correlates_by_identity_not_position() {
        let schema = DeviceVariant::Careli.schema();
        let mut shuffled = careli_batch();
        shuffled.reverse();
        shuffled.swap(0, 5);

        let status = decode_status(schema, &shuffled);
        assert_eq!(status.status, OperatingStatus::Cooking);
        assert_eq!(status.target_temperature, Some(200));
        assert_eq!(status.recipe_id.as_deref(), Some("M1"));
    }

    #[test]
    fn test_decode_unknown_enum_value_does_not_fail_batch() {
        let schema = DeviceVariant::Careli.schema();
        let mut batch = careli_batch();
        batch[0] = PropertyResult::ok(2, 1, json!(99));

        let status = decode_status(schema, &batch);
        assert_eq!(status.status, OperatingStatus::Unknown);
        // The rest of the batch still decodes.
        assert_eq!(status.device_fault, DeviceFault::NoFaults);
        assert_eq!(status.target_time, Some(15));
    }

    #[test]
    fn test_decode_missing_and_failed_properties_degrade() {
        let schema = DeviceVariant::Careli.schema();
        let mut batch = careli_batch();
        // device_fault failed on the device, left_time omitted entirely.
        batch[1] = PropertyResult::failed(2, 2, -4004);
        batch.remove(4);

        let status = decode_status(schema, &batch);
        assert_eq!(status.device_fault, DeviceFault::Unknown);
        assert_eq!(status.left_time, None);
        assert_eq!(status.status, OperatingStatus::Cooking);
        assert_eq!(status.food_quanty, FoodQuanty::Half);
    }

    #[test]
    fn test_decode_ignores_value_on_failure_code() {
        let schema = DeviceVariant::Careli.schema();
        let mut batch = careli_batch();
        batch[0] = PropertyResult {
            siid: 2,
            piid: 1,
            code: 1,
            value: Some(json!(4)),
        };

        let status = decode_status(schema, &batch);
        assert_eq!(status.status, OperatingStatus::Unknown);
    }

    #[test]
    fn test_decode_non_numeric_enum_value() {
        let schema = DeviceVariant::Careli.schema();
        let mut batch = careli_batch();
        batch[8] = PropertyResult::ok(3, 6, json!("half"));

        let status = decode_status(schema, &batch);
        assert_eq!(status.food_quanty, FoodQuanty::Unknown);
    }

    #[test]
    fn test_decode_empty_batch() {
        let schema = DeviceVariant::Careli.schema();
        let status = decode_status(schema, &[]);

        assert_eq!(status.status, OperatingStatus::Unknown);
        assert_eq!(status.device_fault, DeviceFault::Unknown);
        assert_eq!(status.target_time, None);
        assert_eq!(status.recipe_id, None);
        assert_eq!(status.recipe_name(), None);
    }

    #[test]
    fn test_decode_is_idempotent() {
        let schema = DeviceVariant::Careli.schema();

        let batch = careli_batch();
        assert_eq!(decode_status(schema, &batch), decode_status(schema, &batch));

        // Also holds for partial batches, where fallback paths kick in.
        let partial = vec![PropertyResult::ok(2, 1, json!(4))];
        assert_eq!(
            decode_status(schema, &partial),
            decode_status(schema, &partial)
        );
    }

    #[test]
    fn test_appoint_time_bounds() {
        assert!(Request::set_appoint_time(0).is_ok());
        assert!(Request::set_appoint_time(1440).is_ok());
        assert!(Request::set_appoint_time(1441).unwrap_err().is_validation_error());
        assert!(Request::set_appoint_time(-1).unwrap_err().is_validation_error());
    }

    #[test]
    fn test_target_time_bounds() {
        // Zero duration is rejected, unlike the appoint time.
        assert!(Request::set_target_time(0).unwrap_err().is_validation_error());
        assert!(Request::set_target_time(1).is_ok());
        assert!(Request::set_target_time(1440).is_ok());
        assert!(Request::set_target_time(1441).is_err());
    }

    #[test]
    fn test_target_temperature_bounds() {
        assert!(Request::set_target_temperature(39).is_err());
        assert!(Request::set_target_temperature(40).is_ok());
        assert!(Request::set_target_temperature(200).is_ok());
        assert!(Request::set_target_temperature(201).is_err());
    }

    #[test]
    fn test_food_quanty_bounds() {
        assert!(Request::set_food_quanty(-1).is_err());
        assert!(Request::set_food_quanty(0).is_ok());
        assert!(Request::set_food_quanty(5).is_ok());
        assert!(Request::set_food_quanty(6).is_err());
    }

    #[test]
    fn test_out_of_range_error_details() {
        let error = Request::set_target_temperature(201).unwrap_err();
        match error {
            FryerError::OutOfRange { field, value, min, max } => {
                assert_eq!(field, "target_temperature");
                assert_eq!(value, 201);
                assert_eq!(min, 40);
                assert_eq!(max, 200);
            }
            other => panic!("expected OutOfRange, got {other:?}"),
        }
    }

    #[test]
    fn test_set_recipe_id_accepts_any_token() {
        let request = Request::set_recipe_id("whatever");
        assert_eq!(
            request,
            Request::Write {
                name: "recipe_id",
                value: json!("whatever"),
            }
        );
    }

    #[test]
    fn test_start_custom_cook_encoding() {
        let request = Request::start_custom_cook("M1").unwrap();
        assert_eq!(
            request,
            Request::Invoke {
                name: "start_custom_cook",
                args: vec![json!("M1,,15,200,0,3,0")],
            }
        );
    }

    #[test]
    fn test_start_custom_cook_unknown_preset() {
        let error = Request::start_custom_cook("M9").unwrap_err();
        assert!(matches!(error, FryerError::UnknownPreset(ref id) if id == "M9"));
    }

    #[test]
    fn test_plain_actions_encode_without_args() {
        for (request, name) in [
            (Request::start_cook(), "start_cook"),
            (Request::cancel_cooking(), "cancel_cooking"),
            (Request::pause(), "pause"),
            (Request::resume_cooking(), "resume_cooking"),
        ] {
            assert_eq!(request.name(), name);
            assert!(!request.is_write());
            assert_eq!(request, Request::Invoke { name, args: vec![] });
        }

        assert!(Request::set_recipe_id("M0").is_write());
    }
}
