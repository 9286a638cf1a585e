//! Bounded numeric input widget.
//!
//! Provides a text-editable number field with stepper affordances for
//! bevy_ui applications:
//! - Typing edits a string buffer, so decimal and negative entry is never
//!   truncated mid-keystroke
//! - Finished entries are reported immediately, unclamped
//! - Losing focus commits: floor (integer mode), clamp into bounds, report

pub mod config;
pub mod edit_state;
pub mod plugin;
pub mod stepper;
pub mod widget;

pub use config::NumberInputConfig;
pub use edit_state::{
    Bounds, EditOutcome, EditState, NumberInputError, canonical, is_incomplete_number,
};
pub use plugin::{NumberInputPlugin, NumberInputSet};
pub use stepper::{StepButton, StepDirection};
pub use widget::{
    NumberInput, NumberInputChanged, NumberInputDisabled, NumberInputProps, NumberInputState,
    NumberInputText, spawn_number_input,
};
