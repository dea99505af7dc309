use textwrap::wrap;

use grid48::engine::game::GameState;
use grid48::engine::grid::Tile;

use super::colors::{board_background, board_foreground, tile_colors, Rgb};

/// Generates a 2048 text layout with legible numbers, for example on a 2 x 2 board:
///
///  score: 12
///  ╔═════════════════╗
///  ║                 ║
///  ║ xxxxxxx xxxxxxx ║
///  ║ xxxxxxx xxxxxxx ║
///  ║ xxxxxxx xxxxxxx ║
///  ║                 ║
///  ║ xxxxxxx xxxxxxx ║
///  ║ xxxxxxx xxxxxxx ║
///  ║ xxxxxxx xxxxxxx ║
///  ║                 ║
///  ╚═════════════════╝
///  status message, wrapped to the board width
const BOARD_BORDER_WIDTH: usize = 1;
const BOARD_X_PADDING: usize = 1;
const BOARD_Y_PADDING: usize = 1;
const TILE_HEIGHT: usize = 3;
/// Narrowest tile; tiles widen to keep at least one blank column on each side of the label.
const TILE_WIDTH: usize = 7;
const SCORE_LINES: usize = 1;
const MIN_STATUS_LINES: usize = 2;

const PLAYING_MESSAGE: &str = "arrows or hjkl to move, n for a new game, q to quit";

/// A run of characters drawn with the same colors.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Span {
    pub(crate) text: String,
    pub(crate) fg: Option<Rgb>,
    pub(crate) bg: Option<Rgb>,
    pub(crate) bold: bool,
}

impl Span {
    fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            fg: None,
            bg: None,
            bold: false,
        }
    }

    fn colored(text: impl Into<String>, fg: Rgb, bg: Rgb) -> Self {
        Self {
            text: text.into(),
            fg: Some(fg),
            bg: Some(bg),
            bold: false,
        }
    }

    fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

/// Frame is everything a renderer needs to draw one screen, line by line from the top left.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct Frame {
    lines: Vec<Vec<Span>>,
}

impl Frame {
    /// Lays out the game for a terminal of the given size. Terminals too small to hold the board
    /// get a short explanation instead.
    pub(crate) fn new(game: &GameState, width: usize, height: usize) -> Self {
        let (min_width, min_height) = Self::required_size(game);
        if width < min_width || height < min_height {
            log::debug!(
                "terminal {}x{} too small, need {}x{}",
                width,
                height,
                min_width,
                min_height
            );
            let message = format!(
                "terminal too small, required minimum size {} x {}",
                min_width, min_height
            );
            return Self {
                lines: Self::wrapped(&message, width.max(1))
                    .into_iter()
                    .take(height.max(1))
                    .collect(),
            };
        }

        let board_width = Self::board_width(game);
        let mut lines = Vec::with_capacity(min_height);
        lines.push(vec![Span::plain(format!("score: {}", game.score())).bold()]);
        lines.extend(Self::board(game));
        let message = if game.is_lost() {
            format!(
                "You lost :(  |  Score: {}. Press n for a new game or q to quit.",
                game.score()
            )
        } else {
            String::from(PLAYING_MESSAGE)
        };
        lines.extend(Self::wrapped(&message, board_width));
        Self { lines }
    }

    pub(crate) fn lines(&self) -> &[Vec<Span>] {
        &self.lines
    }

    /// The frame without colors, one string per line.
    pub(crate) fn text(&self) -> Vec<String> {
        self.lines
            .iter()
            .map(|line| line.iter().map(|span| span.text.as_str()).collect())
            .collect()
    }

    /// Smallest terminal that fits the board, the score and a couple of status lines.
    pub(crate) fn required_size(game: &GameState) -> (usize, usize) {
        let rows = game.grid().rows();
        let height = SCORE_LINES
            + 2 * BOARD_BORDER_WIDTH
            + rows * (TILE_HEIGHT + BOARD_Y_PADDING)
            + BOARD_Y_PADDING
            + MIN_STATUS_LINES;
        (Self::board_width(game), height)
    }
}

// private methods
impl Frame {
    fn board_width(game: &GameState) -> usize {
        let cols = game.grid().cols();
        let tile_width = Self::tile_width(game);
        2 * BOARD_BORDER_WIDTH + cols * (tile_width + BOARD_X_PADDING) + BOARD_X_PADDING
    }

    fn tile_width(game: &GameState) -> usize {
        let digits = game.max_tile().to_string().len();
        TILE_WIDTH.max(digits + 2)
    }

    fn wrapped(message: &str, width: usize) -> Vec<Vec<Span>> {
        wrap(message, width)
            .into_iter()
            .map(|s| vec![Span::plain(s.to_string())])
            .collect()
    }

    fn board(game: &GameState) -> Vec<Vec<Span>> {
        let inner_width = Self::board_width(game) - 2 * BOARD_BORDER_WIDTH;
        let tile_width = Self::tile_width(game);
        let (fg, bg) = (board_foreground(), board_background());

        let corner = boxy::Char::upper_left(boxy::Weight::Doubled);
        let horizontal: char = boxy::Char::horizontal(boxy::Weight::Doubled).into();
        let vertical: char = boxy::Char::vertical(boxy::Weight::Doubled).into();
        let upper_left: char = corner.clone().into();
        let upper_right: char = corner.clone().rotate_cw(1).into();
        let lower_right: char = corner.clone().rotate_cw(2).into();
        let lower_left: char = corner.rotate_ccw(1).into();

        let edge = |left: char, right: char| {
            let mut s = String::with_capacity(inner_width + 2);
            s.push(left);
            s.extend(std::iter::repeat(horizontal).take(inner_width));
            s.push(right);
            vec![Span::colored(s, fg.clone(), bg.clone())]
        };
        let side = || Span::colored(vertical.to_string(), fg.clone(), bg.clone());
        let padding = |width: usize| Span::colored(" ".repeat(width), fg.clone(), bg.clone());
        let blank = || vec![side(), padding(inner_width), side()];

        let mut lines = vec![edge(upper_left, upper_right)];
        for row in game.grid().rows_iter() {
            lines.extend(std::iter::repeat_with(&blank).take(BOARD_Y_PADDING));
            for tile_line in 0..TILE_HEIGHT {
                let mut line = vec![side()];
                for value in row {
                    line.push(padding(BOARD_X_PADDING));
                    line.push(Self::tile_span(
                        *value,
                        tile_width,
                        tile_line == TILE_HEIGHT / 2,
                    ));
                }
                line.push(padding(BOARD_X_PADDING));
                line.push(side());
                lines.push(line);
            }
        }
        lines.extend(std::iter::repeat_with(&blank).take(BOARD_Y_PADDING));
        lines.push(edge(lower_left, lower_right));
        lines
    }

    fn tile_span(value: Tile, width: usize, with_label: bool) -> Span {
        let colors = tile_colors(value);
        let label = if with_label && value > 0 {
            value.to_string()
        } else {
            String::new()
        };
        Span::colored(
            format!("{:^width$}", label, width = width),
            colors.foreground,
            colors.background,
        )
        .bold()
    }
}

#[cfg(test)]
mod test {
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    use grid48::engine::config::GameConfig;
    use grid48::engine::grid::Tile;

    use super::*;

    fn game(rows: Vec<Vec<Tile>>) -> GameState {
        let config = GameConfig::builder().fixed_start(rows).build().unwrap();
        GameState::from_config(config, SmallRng::seed_from_u64(42))
    }

    #[test]
    fn lays_out_a_2x2_board() {
        let game = game(vec![vec![2, 0], vec![0, 2048]]);
        let frame = Frame::new(&game, 80, 24);
        let text = frame.text();
        assert_eq!(text[0], "score: 0");
        assert_eq!(text[1], "╔═════════════════╗");
        assert_eq!(text[2], "║                 ║");
        assert_eq!(text[4], "║    2            ║");
        assert_eq!(text[8], "║          2048   ║");
        assert_eq!(text[11], "╚═════════════════╝");
        assert_eq!(text[12..].join(" "), PLAYING_MESSAGE);
    }

    #[test]
    fn every_board_line_has_the_same_width() {
        let game = game(vec![vec![2, 4, 8], vec![16, 32, 64], vec![128, 0, 0]]);
        let frame = Frame::new(&game, 120, 40);
        let (width, _) = Frame::required_size(&game);
        for line in &frame.text()[1..=15] {
            assert_eq!(line.chars().count(), width, "{:?}", line);
        }
    }

    #[test]
    fn wide_tiles_widen_the_board() {
        let game = game(vec![vec![1 << 31, 2], vec![0, 1 << 30]]);
        let (width, height) = Frame::required_size(&game);
        let frame = Frame::new(&game, width, height);
        assert_eq!(width, 2 + 2 * (12 + 1) + 1);
        for line in &frame.text()[1..=11] {
            assert_eq!(line.chars().count(), width, "{:?}", line);
        }
        assert!(frame.text()[4].contains("2147483648"));
    }

    #[test]
    fn lost_game_message() {
        let game = game(vec![vec![2, 4], vec![4, 2]]);
        let frame = Frame::new(&game, 80, 24);
        let status = frame.text()[12..].join(" ");
        assert!(status.starts_with("You lost :("), "{}", status);
        assert!(status.contains("Score: 0"), "{}", status);
    }

    #[test]
    fn terminal_too_small() {
        let game = game(vec![vec![2, 4], vec![4, 2]]);
        let frame = Frame::new(&game, 12, 5);
        let text = frame.text();
        assert!(text.len() <= 5);
        assert!(text.iter().all(|l| l.chars().count() <= 12));
        assert!(text.join(" ").starts_with("terminal too small"));
    }

    #[test]
    fn tiles_are_colored() {
        let game = game(vec![vec![2, 0], vec![0, 4]]);
        let frame = Frame::new(&game, 80, 24);
        let tile_line = &frame.lines()[4];
        let two = tile_line
            .iter()
            .find(|s| s.text.trim() == "2")
            .expect("the 2 tile is on this line");
        assert_eq!(two.bg, Some(tile_colors(2).background));
    }
}
