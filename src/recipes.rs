//! Recipe presets built into the fryer firmware
//!
//! The careli fryers ship eight fixed cooking programs, addressed by the
//! tokens `M0`..`M7`. Starting a program through the `start_custom_cook`
//! action requires the full parameter vector serialized as one
//! comma-delimited string; the tables here carry those vectors.

/// One built-in cooking program
///
/// Parameter vector layout follows the device:
/// `[id, name, target_time, target_temperature, appoint_time, food_quanty, preheat]`.
/// The `name` slot is never transmitted (it serializes empty); the display
/// name here exists for callers rendering the program to a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecipePreset {
    /// Stable preset token (`"M0"`..`"M7"`)
    pub id: &'static str,
    /// Human-readable program name
    pub name: &'static str,
    /// Cooking duration in minutes
    pub target_time: u16,
    /// Cooking temperature in °C
    pub target_temperature: u16,
    /// Scheduled delay in minutes
    pub appoint_time: u16,
    /// Food quantity code
    pub food_quanty: u8,
    /// Preheat flag
    pub preheat: u8,
}

impl RecipePreset {
    /// Serialize the parameter vector for the `start_custom_cook` action
    ///
    /// Seven comma-delimited fields in the fixed device order; the name field
    /// is deliberately left empty.
    #[must_use]
    pub fn action_arg(&self) -> String {
        format!(
            "{},,{},{},{},{},{}",
            self.id,
            self.target_time,
            self.target_temperature,
            self.appoint_time,
            self.food_quanty,
            self.preheat
        )
    }
}

/// Marker returned by recipe-name derivation when the device reports a
/// recipe id with no matching preset
pub const UNRECOGNIZED_RECIPE: &str = "Unrecognized recipe";

/// The eight built-in presets, in token order
pub const PRESETS: [RecipePreset; 8] = [
    RecipePreset {
        id: "M0",
        name: "Manual",
        target_time: 0,
        target_temperature: 0,
        appoint_time: 0,
        food_quanty: 0,
        preheat: 0,
    },
    RecipePreset {
        id: "M1",
        name: "French Fries",
        target_time: 15,
        target_temperature: 200,
        appoint_time: 0,
        food_quanty: 3,
        preheat: 0,
    },
    RecipePreset {
        id: "M2",
        name: "Chicken Wings",
        target_time: 15,
        target_temperature: 180,
        appoint_time: 0,
        food_quanty: 1,
        preheat: 0,
    },
    RecipePreset {
        id: "M3",
        name: "Sweet Potato",
        target_time: 30,
        target_temperature: 200,
        appoint_time: 0,
        food_quanty: 1,
        preheat: 0,
    },
    RecipePreset {
        id: "M4",
        name: "Cake",
        target_time: 30,
        target_temperature: 160,
        appoint_time: 0,
        food_quanty: 0,
        preheat: 0,
    },
    RecipePreset {
        id: "M5",
        name: "Defrost",
        target_time: 15,
        target_temperature: 40,
        appoint_time: 0,
        food_quanty: 0,
        preheat: 0,
    },
    RecipePreset {
        id: "M6",
        name: "Dried Fruit",
        target_time: 240,
        target_temperature: 40,
        appoint_time: 0,
        food_quanty: 0,
        preheat: 0,
    },
    RecipePreset {
        id: "M7",
        name: "Yogurt",
        target_time: 480,
        target_temperature: 40,
        appoint_time: 0,
        food_quanty: 0,
        preheat: 0,
    },
];

/// Look up a preset by its token
///
/// Returns `None` for unknown tokens; callers decide whether that is a
/// validation failure (command path) or a decode fallback (status path).
#[must_use]
pub fn find(id: &str) -> Option<&'static RecipePreset> {
    PRESETS.iter().find(|preset| preset.id == id)
}
