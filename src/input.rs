use std::collections::HashSet;
use winit::event::{ElementState, KeyboardInput, VirtualKeyCode};

use crate::app::Mode;
use crate::grid::Direction;

pub struct InputHandler {
    pressed_keys: HashSet<VirtualKeyCode>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            pressed_keys: HashSet::new(),
        }
    }

    pub fn handle_keyboard_input(&mut self, input: &KeyboardInput, mode: Mode) -> InputAction {
        if let Some(key_code) = input.virtual_keycode {
            match input.state {
                ElementState::Pressed => {
                    self.pressed_keys.insert(key_code);
                    self.handle_key_press(key_code, mode)
                }
                ElementState::Released => {
                    self.pressed_keys.remove(&key_code);
                    InputAction::None
                }
            }
        } else {
            InputAction::None
        }
    }

    fn handle_key_press(&mut self, key_code: VirtualKeyCode, mode: Mode) -> InputAction {
        match mode {
            Mode::Drawing => Self::handle_drawing_key(key_code),
            Mode::Naming => self.handle_naming_key(key_code),
            Mode::Gallery => Self::handle_gallery_key(key_code),
            Mode::ConfirmClear => Self::handle_confirm_key(key_code),
        }
    }

    fn handle_drawing_key(key_code: VirtualKeyCode) -> InputAction {
        match key_code {
            VirtualKeyCode::Up => InputAction::Move(Direction::Up),
            VirtualKeyCode::Down => InputAction::Move(Direction::Down),
            VirtualKeyCode::Left => InputAction::Move(Direction::Left),
            VirtualKeyCode::Right => InputAction::Move(Direction::Right),

            // Palette: digits hit the first ten swatches, brackets cycle.
            VirtualKeyCode::Key1 => InputAction::SelectColor(0),
            VirtualKeyCode::Key2 => InputAction::SelectColor(1),
            VirtualKeyCode::Key3 => InputAction::SelectColor(2),
            VirtualKeyCode::Key4 => InputAction::SelectColor(3),
            VirtualKeyCode::Key5 => InputAction::SelectColor(4),
            VirtualKeyCode::Key6 => InputAction::SelectColor(5),
            VirtualKeyCode::Key7 => InputAction::SelectColor(6),
            VirtualKeyCode::Key8 => InputAction::SelectColor(7),
            VirtualKeyCode::Key9 => InputAction::SelectColor(8),
            VirtualKeyCode::Key0 => InputAction::SelectColor(9),
            VirtualKeyCode::LBracket => InputAction::PreviousColor,
            VirtualKeyCode::RBracket => InputAction::NextColor,

            VirtualKeyCode::Minus => InputAction::MagnitudeDown,
            VirtualKeyCode::Equals => InputAction::MagnitudeUp,

            VirtualKeyCode::S => InputAction::BeginSave,
            VirtualKeyCode::G => InputAction::OpenGallery,
            VirtualKeyCode::C => InputAction::BeginClear,

            _ => InputAction::None,
        }
    }

    fn handle_naming_key(&self, key_code: VirtualKeyCode) -> InputAction {
        match key_code {
            VirtualKeyCode::Return => InputAction::Confirm,
            VirtualKeyCode::Escape => InputAction::Cancel,
            VirtualKeyCode::Back => InputAction::Backspace,
            _ => {
                if let Some(character) = self.key_code_to_char(key_code) {
                    InputAction::Char(character)
                } else {
                    InputAction::None
                }
            }
        }
    }

    fn handle_gallery_key(key_code: VirtualKeyCode) -> InputAction {
        match key_code {
            VirtualKeyCode::Up => InputAction::NavigateUp,
            VirtualKeyCode::Down => InputAction::NavigateDown,
            VirtualKeyCode::Return => InputAction::Confirm,
            VirtualKeyCode::Escape => InputAction::Cancel,
            VirtualKeyCode::D => InputAction::RemoveEntry,
            _ => InputAction::None,
        }
    }

    fn handle_confirm_key(key_code: VirtualKeyCode) -> InputAction {
        match key_code {
            VirtualKeyCode::Up => InputAction::NavigateUp,
            VirtualKeyCode::Down => InputAction::NavigateDown,
            VirtualKeyCode::Return => InputAction::Confirm,
            VirtualKeyCode::Escape => InputAction::Cancel,
            _ => InputAction::None,
        }
    }

    /// Printable characters for etching titles.
    fn key_code_to_char(&self, key_code: VirtualKeyCode) -> Option<char> {
        let shift_pressed = self.pressed_keys.contains(&VirtualKeyCode::LShift)
            || self.pressed_keys.contains(&VirtualKeyCode::RShift);

        match key_code {
            // Letters
            VirtualKeyCode::A => Some(if shift_pressed { 'A' } else { 'a' }),
            VirtualKeyCode::B => Some(if shift_pressed { 'B' } else { 'b' }),
            VirtualKeyCode::C => Some(if shift_pressed { 'C' } else { 'c' }),
            VirtualKeyCode::D => Some(if shift_pressed { 'D' } else { 'd' }),
            VirtualKeyCode::E => Some(if shift_pressed { 'E' } else { 'e' }),
            VirtualKeyCode::F => Some(if shift_pressed { 'F' } else { 'f' }),
            VirtualKeyCode::G => Some(if shift_pressed { 'G' } else { 'g' }),
            VirtualKeyCode::H => Some(if shift_pressed { 'H' } else { 'h' }),
            VirtualKeyCode::I => Some(if shift_pressed { 'I' } else { 'i' }),
            VirtualKeyCode::J => Some(if shift_pressed { 'J' } else { 'j' }),
            VirtualKeyCode::K => Some(if shift_pressed { 'K' } else { 'k' }),
            VirtualKeyCode::L => Some(if shift_pressed { 'L' } else { 'l' }),
            VirtualKeyCode::M => Some(if shift_pressed { 'M' } else { 'm' }),
            VirtualKeyCode::N => Some(if shift_pressed { 'N' } else { 'n' }),
            VirtualKeyCode::O => Some(if shift_pressed { 'O' } else { 'o' }),
            VirtualKeyCode::P => Some(if shift_pressed { 'P' } else { 'p' }),
            VirtualKeyCode::Q => Some(if shift_pressed { 'Q' } else { 'q' }),
            VirtualKeyCode::R => Some(if shift_pressed { 'R' } else { 'r' }),
            VirtualKeyCode::S => Some(if shift_pressed { 'S' } else { 's' }),
            VirtualKeyCode::T => Some(if shift_pressed { 'T' } else { 't' }),
            VirtualKeyCode::U => Some(if shift_pressed { 'U' } else { 'u' }),
            VirtualKeyCode::V => Some(if shift_pressed { 'V' } else { 'v' }),
            VirtualKeyCode::W => Some(if shift_pressed { 'W' } else { 'w' }),
            VirtualKeyCode::X => Some(if shift_pressed { 'X' } else { 'x' }),
            VirtualKeyCode::Y => Some(if shift_pressed { 'Y' } else { 'y' }),
            VirtualKeyCode::Z => Some(if shift_pressed { 'Z' } else { 'z' }),

            // Numbers
            VirtualKeyCode::Key0 => Some('0'),
            VirtualKeyCode::Key1 => Some('1'),
            VirtualKeyCode::Key2 => Some('2'),
            VirtualKeyCode::Key3 => Some('3'),
            VirtualKeyCode::Key4 => Some('4'),
            VirtualKeyCode::Key5 => Some('5'),
            VirtualKeyCode::Key6 => Some('6'),
            VirtualKeyCode::Key7 => Some('7'),
            VirtualKeyCode::Key8 => Some('8'),
            VirtualKeyCode::Key9 => Some('9'),

            // Title punctuation
            VirtualKeyCode::Minus => Some(if shift_pressed { '_' } else { '-' }),
            VirtualKeyCode::Period => Some('.'),
            VirtualKeyCode::Apostrophe => Some('\''),
            VirtualKeyCode::Space => Some(' '),

            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    None,
    Move(Direction),
    SelectColor(usize),
    NextColor,
    PreviousColor,
    MagnitudeUp,
    MagnitudeDown,
    BeginSave,
    OpenGallery,
    BeginClear,
    NavigateUp,
    NavigateDown,
    Confirm,
    Cancel,
    RemoveEntry,
    Char(char),
    Backspace,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[allow(deprecated)]
    fn press(key: VirtualKeyCode) -> KeyboardInput {
        KeyboardInput {
            scancode: 0,
            state: ElementState::Pressed,
            virtual_keycode: Some(key),
            modifiers: Default::default(),
        }
    }

    #[test]
    fn arrows_move_in_drawing_mode() {
        let mut handler = InputHandler::new();
        assert_eq!(
            handler.handle_keyboard_input(&press(VirtualKeyCode::Up), Mode::Drawing),
            InputAction::Move(Direction::Up)
        );
        assert_eq!(
            handler.handle_keyboard_input(&press(VirtualKeyCode::Right), Mode::Drawing),
            InputAction::Move(Direction::Right)
        );
    }

    #[test]
    fn arrows_navigate_in_gallery_mode() {
        let mut handler = InputHandler::new();
        assert_eq!(
            handler.handle_keyboard_input(&press(VirtualKeyCode::Up), Mode::Gallery),
            InputAction::NavigateUp
        );
        assert_eq!(
            handler.handle_keyboard_input(&press(VirtualKeyCode::Return), Mode::Gallery),
            InputAction::Confirm
        );
    }

    #[test]
    fn shift_produces_uppercase_titles() {
        let mut handler = InputHandler::new();
        assert_eq!(
            handler.handle_keyboard_input(&press(VirtualKeyCode::W), Mode::Naming),
            InputAction::Char('w')
        );
        handler.handle_keyboard_input(&press(VirtualKeyCode::LShift), Mode::Naming);
        assert_eq!(
            handler.handle_keyboard_input(&press(VirtualKeyCode::W), Mode::Naming),
            InputAction::Char('W')
        );
    }

    #[test]
    fn save_key_is_a_title_letter_while_naming() {
        let mut handler = InputHandler::new();
        assert_eq!(
            handler.handle_keyboard_input(&press(VirtualKeyCode::S), Mode::Drawing),
            InputAction::BeginSave
        );
        assert_eq!(
            handler.handle_keyboard_input(&press(VirtualKeyCode::S), Mode::Naming),
            InputAction::Char('s')
        );
    }
}
