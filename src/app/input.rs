use raylib::prelude::*;

use neonscrap_sim::Controls;

const GAMEPAD: i32 = 0;
const STICK_DEADZONE: f32 = 0.3;

/// Merge keyboard, mouse and the first gamepad into one control state.
pub fn poll_controls(rl: &RaylibHandle) -> Controls {
    let key = |k: KeyboardKey| rl.is_key_down(k);
    let mut c = Controls {
        left: key(KeyboardKey::KEY_A) || key(KeyboardKey::KEY_LEFT),
        right: key(KeyboardKey::KEY_D) || key(KeyboardKey::KEY_RIGHT),
        up: key(KeyboardKey::KEY_W) || key(KeyboardKey::KEY_UP),
        down: key(KeyboardKey::KEY_S) || key(KeyboardKey::KEY_DOWN),
        jump: key(KeyboardKey::KEY_SPACE),
        boost: key(KeyboardKey::KEY_LEFT_SHIFT) || key(KeyboardKey::KEY_RIGHT_SHIFT),
        primary: rl.is_mouse_button_down(MouseButton::MOUSE_BUTTON_LEFT),
        secondary: rl.is_mouse_button_down(MouseButton::MOUSE_BUTTON_RIGHT)
            || key(KeyboardKey::KEY_F),
        exit_vehicle: key(KeyboardKey::KEY_X),
    };

    if rl.is_gamepad_available(GAMEPAD) {
        let button = |b: GamepadButton| rl.is_gamepad_button_down(GAMEPAD, b);
        let lx = rl.get_gamepad_axis_movement(GAMEPAD, GamepadAxis::GAMEPAD_AXIS_LEFT_X);
        let ly = rl.get_gamepad_axis_movement(GAMEPAD, GamepadAxis::GAMEPAD_AXIS_LEFT_Y);
        c.left |= lx < -STICK_DEADZONE || button(GamepadButton::GAMEPAD_BUTTON_LEFT_FACE_LEFT);
        c.right |= lx > STICK_DEADZONE || button(GamepadButton::GAMEPAD_BUTTON_LEFT_FACE_RIGHT);
        c.up |= ly < -STICK_DEADZONE || button(GamepadButton::GAMEPAD_BUTTON_LEFT_FACE_UP);
        c.down |= ly > STICK_DEADZONE || button(GamepadButton::GAMEPAD_BUTTON_LEFT_FACE_DOWN);
        c.jump |= button(GamepadButton::GAMEPAD_BUTTON_RIGHT_FACE_DOWN);
        c.boost |= button(GamepadButton::GAMEPAD_BUTTON_LEFT_TRIGGER_1);
        c.primary |= button(GamepadButton::GAMEPAD_BUTTON_RIGHT_TRIGGER_2);
        c.secondary |= button(GamepadButton::GAMEPAD_BUTTON_RIGHT_FACE_LEFT);
        c.exit_vehicle |= button(GamepadButton::GAMEPAD_BUTTON_RIGHT_FACE_RIGHT);
    }
    c
}

/// One-shot host actions, read on the frame the key goes down.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HostAction {
    SelectSlot(usize),
    CycleSlot(i32),
    Craft(usize),
    TogglePause,
    MapKey,
    UpgradeHealth,
    ExpandHotbar,
    CloseWorkbench,
    Save,
    Load,
    NewWorld,
    Respawn,
    ToggleGod,
    ForceDay,
    ForceNight,
    ClearForcedTime,
}

const DIGITS: [KeyboardKey; 9] = [
    KeyboardKey::KEY_ONE,
    KeyboardKey::KEY_TWO,
    KeyboardKey::KEY_THREE,
    KeyboardKey::KEY_FOUR,
    KeyboardKey::KEY_FIVE,
    KeyboardKey::KEY_SIX,
    KeyboardKey::KEY_SEVEN,
    KeyboardKey::KEY_EIGHT,
    KeyboardKey::KEY_NINE,
];

/// Digits pick hotbar slots, or craft with Ctrl held.
pub fn poll_host_actions(rl: &RaylibHandle) -> Vec<HostAction> {
    let mut out = Vec::new();
    let crafting =
        rl.is_key_down(KeyboardKey::KEY_LEFT_CONTROL) || rl.is_key_down(KeyboardKey::KEY_RIGHT_CONTROL);
    for (i, k) in DIGITS.iter().enumerate() {
        if rl.is_key_pressed(*k) {
            out.push(if crafting {
                HostAction::Craft(i)
            } else {
                HostAction::SelectSlot(i)
            });
        }
    }
    let pressed = [
        (KeyboardKey::KEY_P, HostAction::TogglePause),
        (KeyboardKey::KEY_ESCAPE, HostAction::TogglePause),
        (KeyboardKey::KEY_M, HostAction::MapKey),
        (KeyboardKey::KEY_H, HostAction::UpgradeHealth),
        (KeyboardKey::KEY_U, HostAction::ExpandHotbar),
        (KeyboardKey::KEY_TAB, HostAction::CloseWorkbench),
        (KeyboardKey::KEY_F5, HostAction::Save),
        (KeyboardKey::KEY_F9, HostAction::Load),
        (KeyboardKey::KEY_F2, HostAction::NewWorld),
        (KeyboardKey::KEY_R, HostAction::Respawn),
        (KeyboardKey::KEY_F1, HostAction::ToggleGod),
        (KeyboardKey::KEY_F3, HostAction::ForceDay),
        (KeyboardKey::KEY_F4, HostAction::ForceNight),
        (KeyboardKey::KEY_F6, HostAction::ClearForcedTime),
    ];
    for (k, action) in pressed {
        if rl.is_key_pressed(k) {
            out.push(action);
        }
    }
    if rl.is_gamepad_available(GAMEPAD)
        && rl.is_gamepad_button_pressed(GAMEPAD, GamepadButton::GAMEPAD_BUTTON_MIDDLE_RIGHT)
    {
        out.push(HostAction::TogglePause);
    }
    let wheel = rl.get_mouse_wheel_move();
    if wheel != 0.0 {
        out.push(HostAction::CycleSlot(if wheel > 0.0 { -1 } else { 1 }));
    }
    out
}
