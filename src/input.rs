use macroquad::prelude::{is_key_pressed, KeyCode};

use crate::game::{Command, Phase};
use crate::piece::Direction;

pub const BOUND_KEYS: [KeyCode; 7] = [
    KeyCode::Left,
    KeyCode::Right,
    KeyCode::Up,
    KeyCode::Down,
    KeyCode::Space,
    KeyCode::Enter,
    KeyCode::Escape,
];

/// Space rotates while a game is running and starts one otherwise.
pub fn command_for_key(key: KeyCode, phase: Phase) -> Option<Command> {
    let command = match key {
        KeyCode::Left => Command::Steer(Direction::Left),
        KeyCode::Right => Command::Steer(Direction::Right),
        KeyCode::Up => Command::Steer(Direction::Up),
        KeyCode::Down => Command::Steer(Direction::Down),
        KeyCode::Space => match phase {
            Phase::Idle | Phase::GameOver => Command::Start,
            Phase::Playing | Phase::Paused => Command::Rotate,
        },
        KeyCode::Enter => Command::Pause,
        KeyCode::Escape => Command::Quit,
        _ => return None,
    };
    Some(command)
}

/// Commands for every bound key pressed this frame.
pub fn pressed_commands(phase: Phase) -> Vec<Command> {
    BOUND_KEYS
        .iter()
        .filter(|&&key| is_key_pressed(key))
        .filter_map(|&key| command_for_key(key, phase))
        .collect()
}
