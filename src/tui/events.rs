use grid48::engine::direction::Direction;

use super::error::Result;

pub(crate) trait EventSource {
    /// Block until the next event relevant to the game.
    fn next_event(&self) -> Result<Event>;
}

#[derive(Debug, PartialEq)]
pub(crate) enum Event {
    UserInput(UserInput),
    Resize,
}

#[derive(Debug, PartialEq)]
pub(crate) enum UserInput {
    Direction(Direction),
    NewGame,
    Quit,
}
