//! A bounded numeric input widget for Bevy.
//!
//! Built using bevy_feathers. The field keeps the user's raw text and the
//! committed numeric value as separate state, so in-progress entries like
//! "-0.5" survive every keystroke, and clamps into bounds only when the
//! field loses focus.

pub mod number_input;

// Re-export the widget surface for convenience
pub use number_input::{
    Bounds, EditOutcome, EditState, NumberInput, NumberInputChanged, NumberInputConfig,
    NumberInputDisabled, NumberInputError, NumberInputPlugin, NumberInputProps, NumberInputSet,
    NumberInputState, spawn_number_input,
};
