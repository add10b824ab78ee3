use crate::recipes::{self, UNRECOGNIZED_RECIPE};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Operating status reported by the fryer
///
/// The set of values was taken from the careli fryer's MIoT specification.
/// Devices in the field occasionally report values outside this set
/// (firmware drift), which decode to [`OperatingStatus::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OperatingStatus {
    /// Value not recognized by this library
    Unknown = -1,
    /// Device is shut down
    Shutdown = 0,
    /// Device is in standby
    Standby = 1,
    /// Cooking is paused
    Pause = 2,
    /// A scheduled (appointed) cook is pending
    Appointment = 3,
    /// Device is cooking
    Cooking = 4,
    /// Device is preheating
    Preheat = 5,
    /// Cooking finished
    Cooked = 6,
    /// Preheating finished
    PreheatFinish = 7,
    /// Preheating paused
    PreheatPause = 8,
    /// Secondary pause state
    Pause2 = 9,
    /// Keeping food warm
    Keepwarm = 10,
    /// Keep-warm paused
    KeepwarmPause = 11,
    /// Keep-warm finished
    KeepwarmFinish = 12,
    /// Crispy roast program running
    CrispyRoast = 13,
    /// Degrease program running
    Degrease = 14,
}

impl From<i64> for OperatingStatus {
    fn from(value: i64) -> Self {
        match value {
            0 => Self::Shutdown,
            1 => Self::Standby,
            2 => Self::Pause,
            3 => Self::Appointment,
            4 => Self::Cooking,
            5 => Self::Preheat,
            6 => Self::Cooked,
            7 => Self::PreheatFinish,
            8 => Self::PreheatPause,
            9 => Self::Pause2,
            10 => Self::Keepwarm,
            11 => Self::KeepwarmPause,
            12 => Self::KeepwarmFinish,
            13 => Self::CrispyRoast,
            14 => Self::Degrease,
            _ => Self::Unknown,
        }
    }
}

impl fmt::Display for OperatingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown => write!(f, "Unknown"),
            Self::Shutdown => write!(f, "Shutdown"),
            Self::Standby => write!(f, "Standby"),
            Self::Pause => write!(f, "Pause"),
            Self::Appointment => write!(f, "Appointment"),
            Self::Cooking => write!(f, "Cooking"),
            Self::Preheat => write!(f, "Preheat"),
            Self::Cooked => write!(f, "Cooked"),
            Self::PreheatFinish => write!(f, "Preheat Finished"),
            Self::PreheatPause => write!(f, "Preheat Paused"),
            Self::Pause2 => write!(f, "Pause"),
            Self::Keepwarm => write!(f, "Keeping Warm"),
            Self::KeepwarmPause => write!(f, "Keep-warm Paused"),
            Self::KeepwarmFinish => write!(f, "Keep-warm Finished"),
            Self::CrispyRoast => write!(f, "Crispy Roast"),
            Self::Degrease => write!(f, "Degrease"),
        }
    }
}

/// Device fault codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeviceFault {
    /// Value not recognized by this library
    Unknown = -1,
    /// No faults
    NoFaults = 0,
    /// Fault E1
    E1 = 1,
    /// Fault E2
    E2 = 2,
    /// Fault E3
    E3 = 3,
}

impl From<i64> for DeviceFault {
    fn from(value: i64) -> Self {
        match value {
            0 => Self::NoFaults,
            1 => Self::E1,
            2 => Self::E2,
            3 => Self::E3,
            _ => Self::Unknown,
        }
    }
}

impl fmt::Display for DeviceFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown => write!(f, "Unknown"),
            Self::NoFaults => write!(f, "No Faults"),
            Self::E1 => write!(f, "E1"),
            Self::E2 => write!(f, "E2"),
            Self::E3 => write!(f, "E3"),
        }
    }
}

/// Food quantity loaded into the basket
///
/// The spelling `quanty` follows the device's own MIoT property name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FoodQuanty {
    /// Value not recognized by this library
    Unknown = -1,
    /// No quantity selected
    Null = 0,
    /// Single portion
    Single = 1,
    /// Double portion
    Double = 2,
    /// Half basket
    Half = 3,
    /// Full basket
    Full = 4,
}

impl From<i64> for FoodQuanty {
    fn from(value: i64) -> Self {
        match value {
            0 => Self::Null,
            1 => Self::Single,
            2 => Self::Double,
            3 => Self::Half,
            4 => Self::Full,
            _ => Self::Unknown,
        }
    }
}

impl fmt::Display for FoodQuanty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown => write!(f, "Unknown"),
            Self::Null => write!(f, "None"),
            Self::Single => write!(f, "Single"),
            Self::Double => write!(f, "Double"),
            Self::Half => write!(f, "Half"),
            Self::Full => write!(f, "Full"),
        }
    }
}

/// Turn-pot reminder state (flip the food mid-cook)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnPot {
    /// Value not recognized by this library
    Unknown = -1,
    /// No turn-pot reminder
    NotTurnPot = 0,
    /// Reminder switched off
    SwitchOff = 1,
    /// Turn-pot reminder active
    TurnPot = 2,
}

impl From<i64> for TurnPot {
    fn from(value: i64) -> Self {
        match value {
            0 => Self::NotTurnPot,
            1 => Self::SwitchOff,
            2 => Self::TurnPot,
            _ => Self::Unknown,
        }
    }
}

impl fmt::Display for TurnPot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown => write!(f, "Unknown"),
            Self::NotTurnPot => write!(f, "Not Turning"),
            Self::SwitchOff => write!(f, "Switched Off"),
            Self::TurnPot => write!(f, "Turn Pot"),
        }
    }
}

/// Preheat switch state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PreheatSwitch {
    /// Value not recognized by this library
    Unknown = -1,
    /// No preheat selection
    Null = 0,
    /// Preheat off
    Off = 1,
    /// Preheat on
    On = 2,
}

impl From<i64> for PreheatSwitch {
    fn from(value: i64) -> Self {
        match value {
            0 => Self::Null,
            1 => Self::Off,
            2 => Self::On,
            _ => Self::Unknown,
        }
    }
}

impl fmt::Display for PreheatSwitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown => write!(f, "Unknown"),
            Self::Null => write!(f, "None"),
            Self::Off => write!(f, "Off"),
            Self::On => write!(f, "On"),
        }
    }
}

/// Typed snapshot of one batched property read
///
/// A snapshot is always constructed in full, even from a partial batch:
/// properties the transport omitted or failed decode to `None` (scalars) or
/// `Unknown` (enumerated fields). It never fails to decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FryerStatus {
    /// Operating status
    pub status: OperatingStatus,
    /// Device fault code
    pub device_fault: DeviceFault,
    /// Target cooking time in minutes
    pub target_time: Option<u32>,
    /// Target temperature in °C
    pub target_temperature: Option<u32>,
    /// Remaining cooking time in minutes
    pub left_time: Option<u32>,
    /// Raw recipe id token (e.g. `"M1"`)
    pub recipe_id: Option<String>,
    /// Scheduled delay before cooking starts, in minutes
    pub appoint_time: Option<u32>,
    /// Food quantity selection
    pub food_quanty: FoodQuanty,
    /// Preheat switch state
    pub preheat_switch: PreheatSwitch,
    /// Remaining scheduled delay in minutes
    pub appoint_time_left: Option<u32>,
    /// Recipe synchronization counter
    pub recipe_sync: Option<i64>,
    /// Turn-pot reminder state
    pub turn_pot: TurnPot,
}

impl FryerStatus {
    /// True if the device is currently on
    ///
    /// The fryer counts as powered on unless it reports one of the resting
    /// states (shutdown, standby, cooked, secondary pause).
    #[must_use]
    pub fn is_on(&self) -> bool {
        !matches!(
            self.status,
            OperatingStatus::Shutdown
                | OperatingStatus::Standby
                | OperatingStatus::Cooked
                | OperatingStatus::Pause2
        )
    }

    /// Human-readable name of the selected recipe
    ///
    /// Derived by resolving [`recipe_id`](Self::recipe_id) against the preset
    /// table. Returns `None` when the device reported no recipe id, and the
    /// [`UNRECOGNIZED_RECIPE`] marker when the id is present but matches no
    /// known preset (custom recipes synced from the vendor app do this).
    #[must_use]
    pub fn recipe_name(&self) -> Option<&'static str> {
        let id = self.recipe_id.as_deref()?;
        Some(recipes::find(id).map_or(UNRECOGNIZED_RECIPE, |preset| preset.name))
    }
}

impl Default for FryerStatus {
    fn default() -> Self {
        Self {
            status: OperatingStatus::Unknown,
            device_fault: DeviceFault::Unknown,
            target_time: None,
            target_temperature: None,
            left_time: None,
            recipe_id: None,
            appoint_time: None,
            food_quanty: FoodQuanty::Unknown,
            preheat_switch: PreheatSwitch::Unknown,
            appoint_time_left: None,
            recipe_sync: None,
            turn_pot: TurnPot::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operating_status_from_i64() {
        assert_eq!(OperatingStatus::from(0), OperatingStatus::Shutdown);
        assert_eq!(OperatingStatus::from(4), OperatingStatus::Cooking);
        assert_eq!(OperatingStatus::from(14), OperatingStatus::Degrease);
        assert_eq!(OperatingStatus::from(15), OperatingStatus::Unknown);
        assert_eq!(OperatingStatus::from(99), OperatingStatus::Unknown);
        assert_eq!(OperatingStatus::from(-1), OperatingStatus::Unknown);
    }

    #[test]
    fn test_operating_status_full_domain() {
        // Every value in the closed 0..=14 domain maps to a non-Unknown variant.
        for raw in 0..=14 {
            assert_ne!(
                OperatingStatus::from(raw),
                OperatingStatus::Unknown,
                "value {raw} should be a known status"
            );
        }
    }

    #[test]
    fn test_device_fault_from_i64() {
        assert_eq!(DeviceFault::from(0), DeviceFault::NoFaults);
        assert_eq!(DeviceFault::from(3), DeviceFault::E3);
        assert_eq!(DeviceFault::from(4), DeviceFault::Unknown);
    }

    #[test]
    fn test_food_quanty_from_i64() {
        assert_eq!(FoodQuanty::from(0), FoodQuanty::Null);
        assert_eq!(FoodQuanty::from(4), FoodQuanty::Full);
        assert_eq!(FoodQuanty::from(5), FoodQuanty::Unknown);
    }

    #[test]
    fn test_turn_pot_and_preheat_from_i64() {
        assert_eq!(TurnPot::from(2), TurnPot::TurnPot);
        assert_eq!(TurnPot::from(3), TurnPot::Unknown);
        assert_eq!(PreheatSwitch::from(2), PreheatSwitch::On);
        assert_eq!(PreheatSwitch::from(7), PreheatSwitch::Unknown);
    }

    #[test]
    fn test_is_on_predicate() {
        let mut status = FryerStatus::default();

        for off in [
            OperatingStatus::Shutdown,
            OperatingStatus::Standby,
            OperatingStatus::Cooked,
            OperatingStatus::Pause2,
        ] {
            status.status = off;
            assert!(!status.is_on(), "{off} should count as off");
        }

        for on in [
            OperatingStatus::Cooking,
            OperatingStatus::Preheat,
            OperatingStatus::Appointment,
            OperatingStatus::Keepwarm,
            OperatingStatus::Unknown,
        ] {
            status.status = on;
            assert!(status.is_on(), "{on} should count as on");
        }
    }

    #[test]
    fn test_recipe_name_derivation() {
        let mut status = FryerStatus::default();
        assert_eq!(status.recipe_name(), None);

        status.recipe_id = Some("M1".to_string());
        assert_eq!(status.recipe_name(), Some("French Fries"));

        status.recipe_id = Some("M42".to_string());
        assert_eq!(status.recipe_name(), Some(UNRECOGNIZED_RECIPE));
    }
}
