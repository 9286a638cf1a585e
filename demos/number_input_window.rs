//! Demonstrates the bounded number input widget.
//!
//! Click a field and type to edit it; finished entries are reported
//! immediately, and clicking elsewhere (or pressing Enter) commits the
//! value, clamped into the field's bounds. The +/- buttons and arrow keys
//! step the value, with Shift for fine steps.

use bevy::feathers::FeathersPlugins;
use bevy::feathers::dark_theme::create_dark_theme;
use bevy::feathers::theme::{ThemeBackgroundColor, UiTheme};
use bevy::feathers::tokens;
use bevy::prelude::*;
use bevy::ui::Val::*;

use feathers_number_input::{
    Bounds, NumberInputChanged, NumberInputConfig, NumberInputPlugin, NumberInputProps,
    spawn_number_input,
};

fn main() {
    App::new()
        .add_plugins(DefaultPlugins)
        .add_plugins(FeathersPlugins)
        .insert_resource(UiTheme(create_dark_theme()))
        .add_plugins(NumberInputPlugin)
        .add_observer(log_changes)
        .add_systems(Startup, setup)
        .run();
}

fn setup(mut commands: Commands, config: Res<NumberInputConfig>) {
    commands.spawn(Camera2d);

    commands
        .spawn((
            Node {
                width: Percent(100.0),
                height: Percent(100.0),
                display: Display::Flex,
                flex_direction: FlexDirection::Column,
                row_gap: Px(12.0),
                padding: UiRect::all(Px(16.0)),
                ..default()
            },
            ThemeBackgroundColor(tokens::WINDOW_BG),
        ))
        .with_children(|root| {
            // Integer field: steps of 1, clamped to [1, 64] on commit
            spawn_number_input(
                root,
                NumberInputProps {
                    value: 4.0,
                    bounds: Bounds::new(1.0, 64.0).unwrap(),
                    label: Some("Images".to_string()),
                    ..default()
                },
                &config,
            );

            // Float field: fine decimal entry, clamped to [-1, 1]
            spawn_number_input(
                root,
                NumberInputProps {
                    value: 0.75,
                    bounds: Bounds::new(-1.0, 1.0).unwrap(),
                    integer_mode: false,
                    step: 0.1,
                    fine_step: 0.01,
                    label: Some("Strength".to_string()),
                    ..default()
                },
                &config,
            );

            // Disabled field ignores all input
            spawn_number_input(
                root,
                NumberInputProps {
                    value: 512.0,
                    bounds: Bounds::new(64.0, 2048.0).unwrap(),
                    step: 64.0,
                    label: Some("Size (locked)".to_string()),
                    disabled: true,
                    ..default()
                },
                &config,
            );
        });
}

fn log_changes(trigger: On<NumberInputChanged>) {
    info!("field {:?} reported {}", trigger.source, trigger.value);
}
