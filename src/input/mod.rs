//! # Input Module
//!
//! Turns lines typed into the terminal into player inputs.

use crate::{Direction, Position};

/// Input handler for processing player commands.
///
/// Accepts WASD, arrow-key names and, when enabled, Vi-style `hjkl`.
#[derive(Debug, Clone)]
pub struct InputHandler {
    /// Whether to enable Vi-style movement keys (hjkl)
    pub vi_keys_enabled: bool,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl InputHandler {
    /// Creates a new input handler.
    pub fn new() -> Self {
        Self {
            vi_keys_enabled: true,
        }
    }

    /// Parses one line of input.
    ///
    /// Matching ignores case and surrounding whitespace. Returns `None`
    /// for anything unrecognized.
    ///
    /// # Examples
    ///
    /// ```
    /// use rrogue::{Direction, InputHandler, PlayerInput, Position};
    ///
    /// let input = InputHandler::new();
    /// assert_eq!(input.parse("w"), Some(PlayerInput::Move(Direction::Up)));
    /// assert_eq!(input.parse(" Left "), Some(PlayerInput::Move(Direction::Left)));
    /// assert_eq!(input.parse("look 2 3"), Some(PlayerInput::Look(Position::new(2, 3))));
    /// assert_eq!(input.parse("dance"), None);
    /// ```
    pub fn parse(&self, line: &str) -> Option<PlayerInput> {
        let line = line.trim().to_lowercase();
        let mut words = line.split_whitespace();
        let command = words.next()?;

        if command == "look" {
            let x = words.next()?.parse().ok()?;
            let y = words.next()?.parse().ok()?;
            if words.next().is_some() {
                return None;
            }
            return Some(PlayerInput::Look(Position::new(x, y)));
        }
        if words.next().is_some() {
            return None;
        }

        let input = match command {
            "w" | "up" => PlayerInput::Move(Direction::Up),
            "s" | "down" => PlayerInput::Move(Direction::Down),
            "a" | "left" => PlayerInput::Move(Direction::Left),
            "d" | "right" => PlayerInput::Move(Direction::Right),
            "k" if self.vi_keys_enabled => PlayerInput::Move(Direction::Up),
            "j" if self.vi_keys_enabled => PlayerInput::Move(Direction::Down),
            "h" if self.vi_keys_enabled => PlayerInput::Move(Direction::Left),
            "l" if self.vi_keys_enabled => PlayerInput::Move(Direction::Right),
            "q" | "quit" => PlayerInput::Quit,
            "?" | "help" => PlayerInput::Help,
            _ => return None,
        };
        Some(input)
    }

    /// One-line summary of the accepted commands.
    pub fn help_text(&self) -> &'static str {
        if self.vi_keys_enabled {
            "Move with w/a/s/d, h/j/k/l or up/down/left/right. \
             'look x y' describes a tile, '?' shows this help, 'q' quits."
        } else {
            "Move with w/a/s/d or up/down/left/right. \
             'look x y' describes a tile, '?' shows this help, 'q' quits."
        }
    }
}

/// Player input types that can be processed by the input handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerInput {
    /// Move one tile in a direction
    Move(Direction),
    /// Describe the tile at a position
    Look(Position),
    /// Show help information
    Help,
    /// Quit the game
    Quit,
}

/// The direction of a movement input.
pub fn input_to_direction(input: PlayerInput) -> Option<Direction> {
    match input {
        PlayerInput::Move(direction) => Some(direction),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movement_keys() {
        let input = InputHandler::new();
        let cases = [
            ("w", Direction::Up),
            ("a", Direction::Left),
            ("s", Direction::Down),
            ("d", Direction::Right),
            ("k", Direction::Up),
            ("h", Direction::Left),
            ("j", Direction::Down),
            ("l", Direction::Right),
            ("UP", Direction::Up),
            ("right", Direction::Right),
        ];
        for (line, direction) in cases {
            assert_eq!(input.parse(line), Some(PlayerInput::Move(direction)), "{}", line);
        }
    }

    #[test]
    fn test_vi_keys_can_be_disabled() {
        let input = InputHandler {
            vi_keys_enabled: false,
        };
        assert_eq!(input.parse("h"), None);
        assert_eq!(input.parse("a"), Some(PlayerInput::Move(Direction::Left)));
    }

    #[test]
    fn test_commands() {
        let input = InputHandler::new();
        assert_eq!(input.parse("q"), Some(PlayerInput::Quit));
        assert_eq!(input.parse("quit"), Some(PlayerInput::Quit));
        assert_eq!(input.parse("?"), Some(PlayerInput::Help));
        assert_eq!(input.parse("help"), Some(PlayerInput::Help));
    }

    #[test]
    fn test_look_needs_two_numbers() {
        let input = InputHandler::new();
        assert_eq!(input.parse("look 0 9"), Some(PlayerInput::Look(Position::new(0, 9))));
        assert_eq!(input.parse("look 1"), None);
        assert_eq!(input.parse("look x y"), None);
        assert_eq!(input.parse("look 1 2 3"), None);
    }

    #[test]
    fn test_garbage_is_ignored() {
        let input = InputHandler::new();
        assert_eq!(input.parse(""), None);
        assert_eq!(input.parse("   "), None);
        assert_eq!(input.parse("w w"), None);
        assert_eq!(input.parse("x"), None);
    }

    #[test]
    fn test_input_to_direction() {
        assert_eq!(
            input_to_direction(PlayerInput::Move(Direction::Down)),
            Some(Direction::Down)
        );
        assert_eq!(input_to_direction(PlayerInput::Quit), None);
    }
}
