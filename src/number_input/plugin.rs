//! Number input plugin and system wiring.

use bevy::input_focus::InputDispatchPlugin;
use bevy::prelude::*;

use super::config::NumberInputConfig;
use super::widget::{
    apply_focus_changes, number_input_on_click, number_input_on_keyboard_input,
    reconcile_external_values, sync_display, write_back_value,
};

/// System sets for organizing number input systems.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum NumberInputSet {
    /// Commit on focus loss, fold host value writes into the buffer.
    Sync,
    /// Mirror buffers into the displayed text.
    Display,
}

/// Plugin that adds the number input observers and systems.
pub struct NumberInputPlugin;

impl Plugin for NumberInputPlugin {
    fn build(&self, app: &mut App) {
        // Focus tracking and keyboard routing come from bevy_input_focus;
        // skip it when the host (e.g. FeathersPlugins) already added it.
        if !app.is_plugin_added::<InputDispatchPlugin>() {
            app.add_plugins(InputDispatchPlugin);
        }

        app.init_resource::<NumberInputConfig>()
            // Pointer and keyboard input
            .add_observer(number_input_on_click)
            .add_observer(number_input_on_keyboard_input)
            // Value change processing
            .add_observer(write_back_value)
            // System ordering
            .configure_sets(
                Update,
                (NumberInputSet::Sync, NumberInputSet::Display).chain(),
            )
            .add_systems(
                Update,
                (
                    (apply_focus_changes, reconcile_external_values)
                        .chain()
                        .in_set(NumberInputSet::Sync),
                    sync_display.in_set(NumberInputSet::Display),
                ),
            );
    }
}
