//! Number input widget - a bounded, text-editable numeric field.
//!
//! The widget mediates between a numeric value owned by the host and the
//! text the user is typing:
//! 1. Keystrokes edit a string buffer; finished literals are reported
//!    immediately (unclamped) via [`NumberInputChanged`]
//! 2. Losing focus commits the entry: floored in integer mode, clamped
//!    into bounds, reported unconditionally
//! 3. Stepper buttons and arrow keys offset the value by a configurable step

use bevy::ecs::entity::Entity;
use bevy::ecs::event::Event;
use bevy::ecs::hierarchy::ChildSpawnerCommands;
use bevy::ecs::observer::On;
use bevy::input::ButtonState;
use bevy::input::keyboard::{Key, KeyboardInput};
use bevy::input_focus::{FocusedInput, InputFocus};
use bevy::picking::events::{Click, Pointer};
use bevy::prelude::*;
use bevy::ui::Val::*;

use super::config::NumberInputConfig;
use super::edit_state::{Bounds, EditOutcome, EditState};
use super::stepper::spawn_stepper;

/// Props for spawning a NumberInput widget.
pub struct NumberInputProps {
    /// Initial committed value.
    pub value: f64,
    /// Inclusive range enforced at commit.
    pub bounds: Bounds,
    /// Floor parsed values toward negative infinity before reporting.
    pub integer_mode: bool,
    /// Offset applied by steppers and arrow keys.
    pub step: f64,
    /// Offset applied while Shift is held.
    pub fine_step: f64,
    /// Whether to spawn increment/decrement buttons.
    pub show_stepper: bool,
    /// Optional text label in front of the field.
    pub label: Option<String>,
    /// Spawn the field with input events ignored.
    pub disabled: bool,
}

impl Default for NumberInputProps {
    fn default() -> Self {
        Self {
            value: 0.0,
            bounds: Bounds::UNBOUNDED,
            integer_mode: true,
            step: 1.0,
            fine_step: 0.1,
            show_stepper: true,
            label: None,
            disabled: false,
        }
    }
}

/// A bounded numeric input field.
///
/// `value` is the committed value and the host's side of the contract: the
/// host may write it at any time, and the widget folds external writes into
/// its text buffer without clobbering an entry the user is in the middle of
/// typing.
#[derive(Component, Clone)]
#[require(NumberInputState)]
pub struct NumberInput {
    /// Current committed value.
    pub value: f64,
    /// Inclusive range enforced at commit (focus loss), not per keystroke.
    pub bounds: Bounds,
    /// Floor parsed values toward negative infinity before reporting.
    pub integer_mode: bool,
    /// Offset applied by steppers and arrow keys.
    pub step: f64,
    /// Offset applied while Shift is held.
    pub fine_step: f64,
}

/// Edit-session state for a NumberInput.
#[derive(Component)]
pub struct NumberInputState {
    /// Dual string/number editing state.
    pub edit: EditState,
    /// Whether this widget currently holds input focus.
    pub focused: bool,
}

impl Default for NumberInputState {
    fn default() -> Self {
        Self {
            edit: EditState::new(0.0, true),
            focused: false,
        }
    }
}

/// Marker that makes a NumberInput ignore all input events.
#[derive(Component)]
pub struct NumberInputDisabled;

/// Marker for the text child displaying the field contents.
#[derive(Component)]
pub struct NumberInputText;

/// Event emitted whenever the widget has a new value to report: a finished
/// live edit (unclamped), a stepper nudge (unclamped), or a commit on focus
/// loss (floored and clamped into bounds).
#[derive(Event, Clone, Debug)]
pub struct NumberInputChanged {
    /// The field entity that produced the value.
    pub source: Entity,
    /// The new value. Never NaN.
    pub value: f64,
}

// Observer: clicking the field takes input focus
pub(super) fn number_input_on_click(
    mut click: On<Pointer<Click>>,
    q_input: Query<Entity, (With<NumberInput>, Without<NumberInputDisabled>)>,
    mut input_focus: ResMut<InputFocus>,
) {
    if q_input.get(click.entity).is_ok() {
        click.propagate(false);
        input_focus.set(click.entity);
    }
}

/// Observer: keyboard input routed to the focused field.
pub(super) fn number_input_on_keyboard_input(
    trigger: On<FocusedInput<KeyboardInput>>,
    mut q_input: Query<(&NumberInput, &mut NumberInputState), Without<NumberInputDisabled>>,
    keys: Res<ButtonInput<KeyCode>>,
    mut input_focus: ResMut<InputFocus>,
    mut commands: Commands,
) {
    if trigger.input.state != ButtonState::Pressed {
        return;
    }

    let entity = trigger.focused_entity;
    let Ok((input, mut state)) = q_input.get_mut(entity) else {
        return;
    };

    match &trigger.input.logical_key {
        Key::Enter => {
            let value = state.edit.commit(input.bounds);
            commands.trigger(NumberInputChanged {
                source: entity,
                value,
            });
            // Clear the focused flag first so the focus-change sweep does
            // not commit a second time.
            state.focused = false;
            input_focus.clear();
        }
        Key::Escape => {
            state.edit.revert(input.value);
            state.focused = false;
            input_focus.clear();
        }
        Key::Backspace => {
            let mut text = state.edit.buffer().to_string();
            text.pop();
            if let EditOutcome::Propagate(value) = state.edit.edit(&text) {
                commands.trigger(NumberInputChanged {
                    source: entity,
                    value,
                });
            }
        }
        Key::ArrowUp => {
            let value = state.edit.nudge(step_magnitude(input, &keys));
            commands.trigger(NumberInputChanged {
                source: entity,
                value,
            });
        }
        Key::ArrowDown => {
            let value = state.edit.nudge(-step_magnitude(input, &keys));
            commands.trigger(NumberInputChanged {
                source: entity,
                value,
            });
        }
        Key::Character(c) => {
            // Only allow characters that can appear in a numeric literal.
            let valid = c.chars().all(|ch| {
                ch.is_ascii_digit()
                    || ch == '.'
                    || ch == '-'
                    || ch == 'e'
                    || ch == 'E'
                    || ch == '+'
            });
            if valid {
                let mut text = state.edit.buffer().to_string();
                text.push_str(c);
                if let EditOutcome::Propagate(value) = state.edit.edit(&text) {
                    commands.trigger(NumberInputChanged {
                        source: entity,
                        value,
                    });
                }
            }
        }
        _ => {}
    }
}

/// Step size for nudges, honoring the fine step while Shift is held.
pub(super) fn step_magnitude(input: &NumberInput, keys: &ButtonInput<KeyCode>) -> f64 {
    if keys.pressed(KeyCode::ShiftLeft) || keys.pressed(KeyCode::ShiftRight) {
        input.fine_step
    } else {
        input.step
    }
}

/// System: detects focus loss and runs the commit.
pub(super) fn apply_focus_changes(
    input_focus: Res<InputFocus>,
    mut q_input: Query<(Entity, &NumberInput, &mut NumberInputState)>,
    mut commands: Commands,
) {
    if !input_focus.is_changed() {
        return;
    }

    for (entity, input, mut state) in &mut q_input {
        let focused_now = input_focus.get() == Some(entity);
        if state.focused && !focused_now {
            let value = state.edit.commit(input.bounds);
            commands.trigger(NumberInputChanged {
                source: entity,
                value,
            });
        }
        if state.focused != focused_now {
            state.focused = focused_now;
        }
    }
}

/// System: folds host writes to `NumberInput::value` into the edit buffer.
/// Runs on change detection, so the widget's own reported values (echoed
/// back by [`write_back_value`] or the host) pass through here too; the
/// agreement check inside `reconcile` keeps them from resetting the buffer.
pub(super) fn reconcile_external_values(
    mut q_input: Query<(&NumberInput, &mut NumberInputState), Changed<NumberInput>>,
) {
    for (input, mut state) in &mut q_input {
        state.edit.reconcile(input.value);
    }
}

/// Observer: writes reported values back into the widget's `value`, keeping
/// the component authoritative for hosts that bind no store of their own.
/// Hosts with their own store observe [`NumberInputChanged`] as well.
pub(super) fn write_back_value(
    trigger: On<NumberInputChanged>,
    mut q_input: Query<&mut NumberInput>,
) {
    if let Ok(mut input) = q_input.get_mut(trigger.source) {
        if input.value != trigger.value {
            input.value = trigger.value;
        }
    }
}

/// System: mirrors the edit buffer into the field's text child. A trailing
/// bar on the focused field stands in for an editing cursor.
pub(super) fn sync_display(
    q_input: Query<(&NumberInputState, &Children), Changed<NumberInputState>>,
    mut q_text: Query<&mut Text, With<NumberInputText>>,
) {
    for (state, children) in &q_input {
        for child in children.iter() {
            if let Ok(mut text) = q_text.get_mut(child) {
                text.0 = if state.focused {
                    format!("{}|", state.edit.buffer())
                } else {
                    state.edit.buffer().to_string()
                };
            }
        }
    }
}

/// Spawns a number input (label, field, optional steppers) under `parent`.
/// Returns the field entity, which carries the [`NumberInput`] component.
pub fn spawn_number_input(
    parent: &mut ChildSpawnerCommands<'_>,
    props: NumberInputProps,
    config: &NumberInputConfig,
) -> Entity {
    let NumberInputProps {
        value,
        bounds,
        integer_mode,
        step,
        fine_step,
        show_stepper,
        label,
        disabled,
    } = props;

    let edit = EditState::new(value, integer_mode);
    // EditState::new floors in integer mode; start the component from the
    // same value so the first reconcile pass has nothing to rewrite.
    let value = edit.committed();
    let initial_text = edit.buffer().to_string();
    let mut field_entity = Entity::PLACEHOLDER;

    parent
        .spawn(Node {
            display: Display::Flex,
            flex_direction: FlexDirection::Row,
            align_items: AlignItems::Center,
            column_gap: config.label_gap,
            ..default()
        })
        .with_children(|row| {
            if let Some(label) = label {
                row.spawn((
                    Text::new(label),
                    TextFont {
                        font_size: config.body_font_size,
                        ..default()
                    },
                    TextColor(config.label_color),
                ));
            }

            let mut field = row.spawn((
                Node {
                    min_width: config.field_min_width,
                    padding: config.field_padding,
                    border: UiRect::all(Px(1.0)),
                    ..default()
                },
                BorderColor::all(config.border_color),
                BackgroundColor(config.field_background),
                NumberInput {
                    value,
                    bounds,
                    integer_mode,
                    step,
                    fine_step,
                },
                NumberInputState {
                    edit,
                    focused: false,
                },
                Interaction::default(),
            ));
            field.with_child((
                Text::new(initial_text),
                TextFont {
                    font_size: config.body_font_size,
                    ..default()
                },
                TextColor(config.text_color),
                NumberInputText,
            ));
            if disabled {
                field.insert(NumberInputDisabled);
            }
            field_entity = field.id();

            if show_stepper {
                spawn_stepper(row, field_entity, config);
            }
        });

    field_entity
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::number_input::plugin::NumberInputPlugin;
    use bevy::window::{PrimaryWindow, Window};

    /// Counts every value the widget reports.
    #[derive(Resource, Default)]
    struct ReportCount(usize);

    fn count_reports(_: On<NumberInputChanged>, mut count: ResMut<ReportCount>) {
        count.0 += 1;
    }

    fn test_app() -> App {
        let mut app = App::new();
        app.add_plugins((bevy::input::InputPlugin, NumberInputPlugin))
            .init_resource::<ReportCount>()
            .add_observer(count_reports);
        app
    }

    fn reports(app: &App) -> usize {
        app.world().resource::<ReportCount>().0
    }

    // Keyboard messages are only dispatched to the focused entity when a
    // primary window exists.
    fn spawn_primary_window(app: &mut App) -> Entity {
        app.world_mut()
            .spawn((Window::default(), PrimaryWindow))
            .id()
    }

    fn press_key(app: &mut App, window: Entity, logical_key: Key, key_code: KeyCode) {
        app.world_mut().write_message(KeyboardInput {
            key_code,
            logical_key,
            state: ButtonState::Pressed,
            text: None,
            repeat: false,
            window,
        });
        app.update();
    }

    fn spawn_field(app: &mut App, value: f64, bounds: Bounds) -> Entity {
        app.world_mut()
            .spawn((
                NumberInput {
                    value,
                    bounds,
                    integer_mode: true,
                    step: 1.0,
                    fine_step: 0.1,
                },
                NumberInputState {
                    edit: EditState::new(value, true),
                    focused: false,
                },
            ))
            .id()
    }

    #[test]
    fn external_write_updates_idle_buffer() {
        let mut app = test_app();
        let entity = spawn_field(&mut app, 5.0, Bounds::UNBOUNDED);
        app.update();

        app.world_mut()
            .get_mut::<NumberInput>(entity)
            .unwrap()
            .value = 8.0;
        app.update();

        let state = app.world().get::<NumberInputState>(entity).unwrap();
        assert_eq!(state.edit.buffer(), "8");
    }

    #[test]
    fn in_progress_entry_survives_external_write() {
        let mut app = test_app();
        let entity = spawn_field(&mut app, 5.0, Bounds::UNBOUNDED);
        app.update();

        app.world_mut()
            .get_mut::<NumberInputState>(entity)
            .unwrap()
            .edit
            .edit("0.");
        app.world_mut()
            .get_mut::<NumberInput>(entity)
            .unwrap()
            .value = 9.0;
        app.update();

        let state = app.world().get::<NumberInputState>(entity).unwrap();
        assert_eq!(state.edit.buffer(), "0.");
        assert_eq!(state.edit.committed(), 9.0);
    }

    #[test]
    fn focus_loss_commits_clamps_and_writes_back() {
        let mut app = test_app();
        let bounds = Bounds::new(1.0, 10.0).unwrap();
        let entity = spawn_field(&mut app, 5.0, bounds);
        app.update();

        app.world_mut().resource_mut::<InputFocus>().set(entity);
        app.update();
        assert!(app.world().get::<NumberInputState>(entity).unwrap().focused);

        app.world_mut()
            .get_mut::<NumberInputState>(entity)
            .unwrap()
            .edit
            .edit("15");
        app.world_mut().resource_mut::<InputFocus>().clear();
        app.update();

        let input = app.world().get::<NumberInput>(entity).unwrap();
        assert_eq!(input.value, 10.0);
        let state = app.world().get::<NumberInputState>(entity).unwrap();
        assert!(!state.focused);
        assert_eq!(state.edit.buffer(), "10");
    }

    #[test]
    fn reported_values_write_back_to_component() {
        let mut app = test_app();
        let entity = spawn_field(&mut app, 0.0, Bounds::UNBOUNDED);
        app.update();

        app.world_mut().trigger(NumberInputChanged {
            source: entity,
            value: 42.0,
        });
        app.update();

        let input = app.world().get::<NumberInput>(entity).unwrap();
        assert_eq!(input.value, 42.0);
        // The echoed value agrees with the buffer's reading after the
        // reconcile pass.
        let state = app.world().get::<NumberInputState>(entity).unwrap();
        assert_eq!(state.edit.buffer(), "42");
    }

    #[test]
    fn typed_digits_extend_buffer_and_report() {
        let mut app = test_app();
        let window = spawn_primary_window(&mut app);
        let entity = spawn_field(&mut app, 5.0, Bounds::UNBOUNDED);
        app.update();

        app.world_mut().resource_mut::<InputFocus>().set(entity);
        app.update();

        press_key(&mut app, window, Key::Character("7".into()), KeyCode::Digit7);

        let state = app.world().get::<NumberInputState>(entity).unwrap();
        assert_eq!(state.edit.buffer(), "57");
        assert_eq!(app.world().get::<NumberInput>(entity).unwrap().value, 57.0);
        assert_eq!(reports(&app), 1);
    }

    #[test]
    fn keyboard_rejects_non_numeric_characters() {
        let mut app = test_app();
        let window = spawn_primary_window(&mut app);
        let entity = spawn_field(&mut app, 5.0, Bounds::UNBOUNDED);
        app.update();

        app.world_mut().resource_mut::<InputFocus>().set(entity);
        app.update();

        press_key(&mut app, window, Key::Character("x".into()), KeyCode::KeyX);

        let state = app.world().get::<NumberInputState>(entity).unwrap();
        assert_eq!(state.edit.buffer(), "5");
        assert_eq!(reports(&app), 0);
    }

    #[test]
    fn enter_commits_clamps_and_releases_focus() {
        let mut app = test_app();
        let window = spawn_primary_window(&mut app);
        let entity = spawn_field(&mut app, 5.0, Bounds::new(1.0, 10.0).unwrap());
        app.update();

        app.world_mut().resource_mut::<InputFocus>().set(entity);
        app.update();

        // "5" + "1" -> live report of 51, out of range until commit.
        press_key(&mut app, window, Key::Character("1".into()), KeyCode::Digit1);
        assert_eq!(reports(&app), 1);

        press_key(&mut app, window, Key::Enter, KeyCode::Enter);

        let input = app.world().get::<NumberInput>(entity).unwrap();
        assert_eq!(input.value, 10.0);
        let state = app.world().get::<NumberInputState>(entity).unwrap();
        assert_eq!(state.edit.buffer(), "10");
        assert!(!state.focused);
        assert_eq!(app.world().resource::<InputFocus>().get(), None);
        // One live edit plus one commit; the focus-change sweep must not
        // commit a second time.
        assert_eq!(reports(&app), 2);
        app.update();
        assert_eq!(reports(&app), 2);
    }

    #[test]
    fn escape_restores_committed_display_without_reporting() {
        let mut app = test_app();
        let window = spawn_primary_window(&mut app);
        let entity = spawn_field(&mut app, 5.0, Bounds::UNBOUNDED);
        app.update();

        app.world_mut().resource_mut::<InputFocus>().set(entity);
        app.update();

        // Backspace leaves an interim empty buffer; nothing is reported.
        press_key(&mut app, window, Key::Backspace, KeyCode::Backspace);
        assert_eq!(
            app.world()
                .get::<NumberInputState>(entity)
                .unwrap()
                .edit
                .buffer(),
            ""
        );

        press_key(&mut app, window, Key::Escape, KeyCode::Escape);

        let state = app.world().get::<NumberInputState>(entity).unwrap();
        assert_eq!(state.edit.buffer(), "5");
        assert!(!state.focused);
        assert_eq!(reports(&app), 0);
    }

    #[test]
    fn focus_loss_commits_exactly_once() {
        let mut app = test_app();
        let entity = spawn_field(&mut app, 5.0, Bounds::new(1.0, 10.0).unwrap());
        app.update();

        app.world_mut().resource_mut::<InputFocus>().set(entity);
        app.update();

        app.world_mut()
            .get_mut::<NumberInputState>(entity)
            .unwrap()
            .edit
            .edit("15");
        app.world_mut().resource_mut::<InputFocus>().clear();
        app.update();
        app.update();

        assert_eq!(reports(&app), 1);
        assert_eq!(app.world().get::<NumberInput>(entity).unwrap().value, 10.0);
    }

    #[test]
    fn spawn_floors_integer_values_consistently() {
        let mut app = test_app();
        let config = NumberInputConfig::default();
        let mut field = Entity::PLACEHOLDER;
        {
            let world = app.world_mut();
            let mut commands = world.commands();
            commands.spawn(Node::default()).with_children(|parent| {
                field = spawn_number_input(
                    parent,
                    NumberInputProps {
                        value: 4.5,
                        ..default()
                    },
                    &config,
                );
            });
        }
        app.world_mut().flush();
        app.update();

        // Component and edit state start from the same floored value, so
        // the reconcile pass leaves the buffer alone.
        let input = app.world().get::<NumberInput>(field).unwrap();
        assert_eq!(input.value, 4.0);
        let state = app.world().get::<NumberInputState>(field).unwrap();
        assert_eq!(state.edit.buffer(), "4");
    }
}
