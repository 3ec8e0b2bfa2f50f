//! ANSI output: colors, cursor control, screen clearing, window title.
//!
//! Everything here writes escape sequences into any [`Write`]; nothing is
//! flushed implicitly. Callers usually pass a locked stdout and flush once.
//!
//! Colors use the 16-color SGR codes: dim/normal colors are `ESC[22;3Xm`,
//! bright ones `ESC[01;3Xm`. Only the eight base colors exist as
//! backgrounds.

use std::io::{self, Write};

/// Erase the whole screen and the scrollback.
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[3J";
/// Move the cursor to the top-left cell.
pub const CURSOR_HOME: &str = "\x1b[H";
/// Reset all SGR attributes.
pub const ATTRIBUTE_RESET: &str = "\x1b[0m";
/// Hide the cursor (DECTCEM off).
pub const CURSOR_HIDE: &str = "\x1b[?25l";
/// Show the cursor (DECTCEM on).
pub const CURSOR_SHOW: &str = "\x1b[?25h";
/// OSC 0 prefix: set icon name and window title.
pub const TITLE_PREFIX: &str = "\x1b]0;";
/// OSC terminator (BEL).
pub const TITLE_SUFFIX: &str = "\x07";

/// A 1-based terminal cell position (`x` is the column).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    /// Column.
    pub x: u16,
    /// Row.
    pub y: u16,
}

impl Position {
    /// Position at column `x`, row `y`.
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

/// Text color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    /// No color change.
    #[default]
    None,
    /// Black.
    Black,
    /// Blue.
    Blue,
    /// Green.
    Green,
    /// Cyan.
    Cyan,
    /// Red.
    Red,
    /// Magenta.
    Magenta,
    /// Brown (dark yellow).
    Brown,
    /// Grey (dim white).
    Grey,
    /// Dark grey (bright black).
    DarkGrey,
    /// Light blue.
    LightBlue,
    /// Light green.
    LightGreen,
    /// Light cyan.
    LightCyan,
    /// Light red.
    LightRed,
    /// Light magenta.
    LightMagenta,
    /// Yellow (bright).
    Yellow,
    /// White (bright).
    White,
}

impl Color {
    /// All colors except [`Color::None`].
    pub const PALETTE: [Color; 16] = [
        Color::Black,
        Color::Blue,
        Color::Green,
        Color::Cyan,
        Color::Red,
        Color::Magenta,
        Color::Brown,
        Color::Grey,
        Color::DarkGrey,
        Color::LightBlue,
        Color::LightGreen,
        Color::LightCyan,
        Color::LightRed,
        Color::LightMagenta,
        Color::Yellow,
        Color::White,
    ];

    /// Foreground SGR sequence; empty for [`Color::None`].
    pub const fn fg_sequence(self) -> &'static str {
        match self {
            Color::None => "",
            Color::Black => "\x1b[22;30m",
            Color::Red => "\x1b[22;31m",
            Color::Green => "\x1b[22;32m",
            Color::Brown => "\x1b[22;33m",
            Color::Blue => "\x1b[22;34m",
            Color::Magenta => "\x1b[22;35m",
            Color::Cyan => "\x1b[22;36m",
            Color::Grey => "\x1b[22;37m",
            Color::DarkGrey => "\x1b[01;30m",
            Color::LightRed => "\x1b[01;31m",
            Color::LightGreen => "\x1b[01;32m",
            Color::Yellow => "\x1b[01;33m",
            Color::LightBlue => "\x1b[01;34m",
            Color::LightMagenta => "\x1b[01;35m",
            Color::LightCyan => "\x1b[01;36m",
            Color::White => "\x1b[01;37m",
        }
    }

    /// Background SGR sequence, for the eight base colors only.
    ///
    /// Brown paints a yellow background and Grey a white one.
    pub const fn bg_sequence(self) -> Option<&'static str> {
        match self {
            Color::Black => Some("\x1b[40m"),
            Color::Red => Some("\x1b[41m"),
            Color::Green => Some("\x1b[42m"),
            Color::Brown => Some("\x1b[43m"),
            Color::Blue => Some("\x1b[44m"),
            Color::Magenta => Some("\x1b[45m"),
            Color::Cyan => Some("\x1b[46m"),
            Color::Grey => Some("\x1b[47m"),
            _ => None,
        }
    }

    /// Lowercase name, as used on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Color::None => "none",
            Color::Black => "black",
            Color::Blue => "blue",
            Color::Green => "green",
            Color::Cyan => "cyan",
            Color::Red => "red",
            Color::Magenta => "magenta",
            Color::Brown => "brown",
            Color::Grey => "grey",
            Color::DarkGrey => "darkgrey",
            Color::LightBlue => "lightblue",
            Color::LightGreen => "lightgreen",
            Color::LightCyan => "lightcyan",
            Color::LightRed => "lightred",
            Color::LightMagenta => "lightmagenta",
            Color::Yellow => "yellow",
            Color::White => "white",
        }
    }
}

/// Clear the screen and home the cursor.
pub fn clear_screen<W: Write>(out: &mut W) -> io::Result<()> {
    out.write_all(CLEAR_SCREEN.as_bytes())?;
    out.write_all(CURSOR_HOME.as_bytes())
}

/// Show or hide the cursor.
pub fn set_cursor_visible<W: Write>(out: &mut W, visible: bool) -> io::Result<()> {
    let seq = if visible { CURSOR_SHOW } else { CURSOR_HIDE };
    out.write_all(seq.as_bytes())
}

/// Reset colors and attributes.
pub fn reset_color<W: Write>(out: &mut W) -> io::Result<()> {
    out.write_all(ATTRIBUTE_RESET.as_bytes())
}

/// Move the cursor to `pos` (CUP, row first on the wire).
pub fn move_to<W: Write>(out: &mut W, pos: Position) -> io::Result<()> {
    write!(out, "\x1b[{};{}H", pos.y, pos.x)
}

/// Set the foreground, and the background when it is a base color.
///
/// A background of [`Color::None`] leaves the current background alone.
pub fn set_colors<W: Write>(out: &mut W, fg: Color, bg: Color) -> io::Result<()> {
    out.write_all(fg.fg_sequence().as_bytes())?;
    if let Some(seq) = bg.bg_sequence() {
        out.write_all(seq.as_bytes())?;
    }
    Ok(())
}

/// Set the terminal window title.
pub fn set_title<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    out.write_all(TITLE_PREFIX.as_bytes())?;
    out.write_all(title.as_bytes())?;
    out.write_all(TITLE_SUFFIX.as_bytes())
}

/// One piece of a styled line for [`write_segments`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Literal text.
    Text(&'a str),
    /// Cursor move.
    At(Position),
    /// Foreground color.
    Fg(Color),
    /// Foreground and background colors.
    Colors(Color, Color),
}

impl<'a> From<&'a str> for Segment<'a> {
    fn from(text: &'a str) -> Self {
        Segment::Text(text)
    }
}

impl From<Position> for Segment<'_> {
    fn from(pos: Position) -> Self {
        Segment::At(pos)
    }
}

impl From<Color> for Segment<'_> {
    fn from(color: Color) -> Self {
        Segment::Fg(color)
    }
}

impl From<(Color, Color)> for Segment<'_> {
    fn from((fg, bg): (Color, Color)) -> Self {
        Segment::Colors(fg, bg)
    }
}

/// Write segments in order. Returns the number of text bytes written,
/// escape sequences excluded.
pub fn write_segments<W: Write>(out: &mut W, segments: &[Segment<'_>]) -> io::Result<usize> {
    let mut written = 0;
    for segment in segments {
        match segment {
            Segment::Text(text) => {
                out.write_all(text.as_bytes())?;
                written += text.len();
            }
            Segment::At(pos) => move_to(out, *pos)?,
            Segment::Fg(color) => out.write_all(color.fg_sequence().as_bytes())?,
            Segment::Colors(fg, bg) => set_colors(out, *fg, *bg)?,
        }
    }
    Ok(written)
}

/// Terminal size as columns (`x`) and rows (`y`).
pub fn terminal_size() -> io::Result<Position> {
    let (cols, rows) = crossterm::terminal::size()?;
    Ok(Position::new(cols, rows))
}
