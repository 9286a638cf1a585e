//! Increment/decrement stepper buttons for the number field.
//!
//! Steppers go through the live-edit path: they may push the value outside
//! the field's bounds, and the commit on focus loss is what clamps it back.

use bevy::ecs::hierarchy::ChildSpawnerCommands;
use bevy::ecs::observer::On;
use bevy::feathers::controls::{ButtonProps, button};
use bevy::prelude::*;
use bevy::ui_widgets::{Activate, observe};

use super::config::NumberInputConfig;
use super::widget::{
    NumberInput, NumberInputChanged, NumberInputDisabled, NumberInputState, step_magnitude,
};

/// Direction a stepper button moves the value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepDirection {
    Increment,
    Decrement,
}

/// Marker for stepper buttons. Stores the field entity the button drives.
#[derive(Component)]
pub struct StepButton {
    /// The field this button steps.
    pub target: Entity,
    /// Which way it steps.
    pub direction: StepDirection,
}

/// Observer for stepper button activation.
fn on_step_button(
    activate: On<Activate>,
    q_buttons: Query<&StepButton>,
    mut q_input: Query<(&NumberInput, &mut NumberInputState), Without<NumberInputDisabled>>,
    keys: Res<ButtonInput<KeyCode>>,
    mut commands: Commands,
) {
    let Ok(step_button) = q_buttons.get(activate.entity) else {
        return;
    };
    let Ok((input, mut state)) = q_input.get_mut(step_button.target) else {
        return;
    };

    let magnitude = step_magnitude(input, &keys);
    let delta = match step_button.direction {
        StepDirection::Increment => magnitude,
        StepDirection::Decrement => -magnitude,
    };

    let value = state.edit.nudge(delta);
    commands.trigger(NumberInputChanged {
        source: step_button.target,
        value,
    });
}

/// Spawns the stepper column next to a field.
pub(super) fn spawn_stepper(
    parent: &mut ChildSpawnerCommands<'_>,
    target: Entity,
    config: &NumberInputConfig,
) {
    parent
        .spawn(Node {
            display: Display::Flex,
            flex_direction: FlexDirection::Column,
            row_gap: Val::Px(2.0),
            ..default()
        })
        .with_children(|col| {
            for (glyph, direction) in [
                ("+", StepDirection::Increment),
                ("-", StepDirection::Decrement),
            ] {
                col.spawn((
                    button(
                        ButtonProps::default(),
                        StepButton { target, direction },
                        bevy::prelude::Spawn((
                            Text::new(glyph),
                            TextFont {
                                font_size: config.small_font_size,
                                ..default()
                            },
                        )),
                    ),
                    observe(on_step_button),
                ));
            }
        });
}
