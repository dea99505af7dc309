use grid48::engine::direction::Direction;
use grid48::engine::game::{GameState, Turn};

use crate::tui::error::Result;
use crate::tui::events::{Event, EventSource, UserInput};
use crate::tui::frame::Frame;
use crate::tui::renderer::Renderer;

/// Tui48 connects a game to a renderer and a source of player input.
pub(crate) struct Tui48<R: Renderer, E: EventSource> {
    renderer: R,
    event_source: E,
    game: GameState,
}

impl<R: Renderer, E: EventSource> Tui48<R, E> {
    pub(crate) fn new(game: GameState, renderer: R, event_source: E) -> Self {
        Self {
            renderer,
            event_source,
            game,
        }
    }

    /// Run consumes the Tui48 instance and plays until the player quits, handling at most one
    /// direction per redraw. Returns the game as it stood when the player quit.
    pub(crate) fn run(mut self) -> Result<GameState> {
        loop {
            self.redraw()?;

            match self.event_source.next_event()? {
                Event::UserInput(UserInput::Direction(d)) => self.shift(d),
                Event::UserInput(UserInput::NewGame) => self.game.restart(),
                Event::UserInput(UserInput::Quit) => break,
                Event::Resize => self.renderer.clear()?,
            }
        }
        Ok(self.game)
    }
}

impl<R: Renderer, E: EventSource> Tui48<R, E> {
    fn redraw(&mut self) -> Result<()> {
        let (width, height) = self.renderer.size_hint()?;
        let frame = Frame::new(&self.game, width as usize, height as usize);
        self.renderer.render(&frame)
    }

    fn shift(&mut self, direction: Direction) {
        match self.game.handle_direction(direction) {
            Turn::Moved {
                score,
                spawned,
                lost,
                ..
            } => {
                log::debug!(
                    "moved {}: +{} points, spawned {:?}, lost: {}",
                    direction,
                    score,
                    spawned,
                    lost
                );
            }
            Turn::Unchanged => log::trace!("{} changed nothing", direction),
            Turn::Ignored => log::trace!("{} ignored, game is lost", direction),
        }
    }
}
