use std::io::Write;

use crossterm::{
    cursor,
    event::{self, Event as CrossTermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    style, terminal, ExecutableCommand, QueueableCommand,
};

use grid48::engine::direction::Direction;

use super::error::Result;
use super::events::{Event, EventSource, UserInput};
use super::frame::{Frame, Span};
use super::renderer::Renderer;

/// Crossterm draws frames on the alternate screen with the terminal in raw mode. Both are undone
/// when it is dropped.
pub(crate) struct Crossterm<T: Write> {
    w: Box<T>,
}

impl<T: Write> Crossterm<T> {
    pub(crate) fn new(mut w: Box<T>) -> Result<Self> {
        terminal::enable_raw_mode()?;
        w.execute(terminal::EnterAlternateScreen)?;
        w.execute(cursor::Hide)?;
        Ok(Self { w })
    }
}

impl<T: Write> Drop for Crossterm<T> {
    fn drop(&mut self) {
        if let Err(e) = self
            .w
            .execute(cursor::Show)
            .and_then(|w| w.execute(terminal::LeaveAlternateScreen))
        {
            log::error!("leaving alternate screen: {}", e);
        }
        if let Err(e) = terminal::disable_raw_mode() {
            log::error!("disabling raw mode: {}", e);
        }
    }
}

impl<T: Write> Renderer for Crossterm<T> {
    fn size_hint(&self) -> Result<(u16, u16)> {
        Ok(terminal::size()?)
    }

    fn render(&mut self, f: &Frame) -> Result<()> {
        self.w.queue(terminal::BeginSynchronizedUpdate)?;
        self.w.queue(style::ResetColor)?;
        self.w.queue(terminal::Clear(terminal::ClearType::All))?;
        for (y, line) in f.lines().iter().enumerate() {
            self.w.queue(cursor::MoveTo(0, y as u16))?;
            for span in line {
                self.queue(span)?;
            }
        }
        self.w.queue(terminal::EndSynchronizedUpdate)?;
        self.w.flush()?;
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.w.queue(style::ResetColor)?;
        self.w.queue(terminal::Clear(terminal::ClearType::All))?;
        self.w.flush()?;
        Ok(())
    }
}

impl<T: Write> Crossterm<T> {
    fn queue(&mut self, span: &Span) -> Result<()> {
        if let Some(bg) = &span.bg {
            self.w.queue(style::SetBackgroundColor(bg.clone().into()))?;
        }
        if let Some(fg) = &span.fg {
            self.w.queue(style::SetForegroundColor(fg.clone().into()))?;
        }
        if span.bold {
            self.w.queue(style::SetAttribute(style::Attribute::Bold))?;
        }
        self.w.queue(style::Print(&span.text))?;
        self.w.queue(style::SetAttribute(style::Attribute::Reset))?;
        self.w.queue(style::ResetColor)?;
        Ok(())
    }
}

#[derive(Default)]
pub(crate) struct CrosstermEvents;

impl EventSource for CrosstermEvents {
    /// Block until the next Crossterm event the game cares about.
    fn next_event(&self) -> Result<Event> {
        loop {
            match event::read()? {
                CrossTermEvent::Key(ke) => match handle_key_event(ke) {
                    Some(input) => return Ok(Event::UserInput(input)),
                    None => continue,
                },
                CrossTermEvent::Resize(_, _) => return Ok(Event::Resize),
                _ => continue,
            };
        }
    }
}

fn handle_key_event(ke: KeyEvent) -> Option<UserInput> {
    if ke.kind == KeyEventKind::Release {
        return None;
    }
    match ke.code {
        KeyCode::Left | KeyCode::Char('h') => Some(UserInput::Direction(Direction::Left)),
        KeyCode::Right | KeyCode::Char('l') => Some(UserInput::Direction(Direction::Right)),
        KeyCode::Up | KeyCode::Char('k') => Some(UserInput::Direction(Direction::Up)),
        KeyCode::Down | KeyCode::Char('j') => Some(UserInput::Direction(Direction::Down)),
        KeyCode::Char('c') if ke.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(UserInput::Quit)
        }
        KeyCode::Char('n') => Some(UserInput::NewGame),
        KeyCode::Char('q') | KeyCode::Esc => Some(UserInput::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod test {
    use rstest::*;

    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[rstest]
    #[case::arrow_left(press(KeyCode::Left), Some(UserInput::Direction(Direction::Left)))]
    #[case::arrow_right(press(KeyCode::Right), Some(UserInput::Direction(Direction::Right)))]
    #[case::arrow_up(press(KeyCode::Up), Some(UserInput::Direction(Direction::Up)))]
    #[case::arrow_down(press(KeyCode::Down), Some(UserInput::Direction(Direction::Down)))]
    #[case::vi_left(press(KeyCode::Char('h')), Some(UserInput::Direction(Direction::Left)))]
    #[case::vi_down(press(KeyCode::Char('j')), Some(UserInput::Direction(Direction::Down)))]
    #[case::new_game(press(KeyCode::Char('n')), Some(UserInput::NewGame))]
    #[case::quit(press(KeyCode::Char('q')), Some(UserInput::Quit))]
    #[case::escape(press(KeyCode::Esc), Some(UserInput::Quit))]
    #[case::ctrl_c(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL), Some(UserInput::Quit))]
    #[case::plain_c(press(KeyCode::Char('c')), None)]
    #[case::unbound(press(KeyCode::Enter), None)]
    #[case::release(
        KeyEvent::new_with_kind(KeyCode::Left, KeyModifiers::NONE, KeyEventKind::Release),
        None
    )]
    fn key_table(#[case] ke: KeyEvent, #[case] expected: Option<UserInput>) {
        assert_eq!(handle_key_event(ke), expected);
    }

    #[test]
    fn renders_every_span() {
        let mut out = Vec::new();
        {
            let mut crossterm = Crossterm { w: Box::new(&mut out) };
            let frame = Frame::default();
            crossterm.render(&frame).unwrap();
            crossterm
                .queue(&Span {
                    text: String::from("score: 4"),
                    fg: None,
                    bg: None,
                    bold: true,
                })
                .unwrap();
            crossterm.w.flush().unwrap();
        }
        let written = String::from_utf8_lossy(&out);
        assert!(written.contains("score: 4"));
    }
}
