//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (engine, terminal rendering, persistence).
//!
//! # Board
//!
//! The field is a square grid of `size x size` cells:
//!
//! - **x**: 0-based column, grows to the right
//! - **y**: 0-based row, grows towards the bottom
//! - **Default size**: 9x9
//!
//! # Game Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `MIN_LINE_SIZE` | 5 | Shortest same-color run that is purged |
//! | `NEXT_BALLS_COUNT` | 3 | Balls placed per refill (and at start) |
//! | `COLOR_COUNT` | 7 | Number of ball colors |
//! | `DEFAULT_FIELD_SIZE` | 9 | Side length of a standard board |
//! | `MIN_FIELD_SIZE` | 2 | Smallest accepted side length |
//!
//! # Examples
//!
//! ```
//! use lines_types::{Ball, Cell, Color, Direction, MIN_LINE_SIZE};
//!
//! // Colors carry a stable wire index
//! assert_eq!(Color::Gold.index(), 3);
//! assert_eq!(Color::from_index(3), Some(Color::Gold));
//!
//! // Parse from string (case-insensitive)
//! assert_eq!(Color::from_str("Indigo"), Some(Color::Indigo));
//!
//! let ball = Ball::new(Color::Red);
//! assert_eq!(ball.color, Color::Red);
//!
//! // Cells are plain coordinates
//! let cell = Cell::new(2, 3);
//! assert_eq!(Direction::Left.offset(), (-1, 0));
//! assert_eq!(cell, Cell { x: 2, y: 3 });
//!
//! assert_eq!(MIN_LINE_SIZE, 5);
//! ```

/// Shortest run of same-colored balls that gets purged.
pub const MIN_LINE_SIZE: usize = 5;

/// Number of balls previewed and placed on every refill.
pub const NEXT_BALLS_COUNT: usize = 3;

/// Number of ball colors.
pub const COLOR_COUNT: usize = 7;

/// Side length of a standard board.
pub const DEFAULT_FIELD_SIZE: u8 = 9;

/// Smallest accepted side length.
///
/// A field must have more cells than a refill places, otherwise the opening
/// balls cannot be dealt.
pub const MIN_FIELD_SIZE: u8 = 2;

/// The seven ball colors.
///
/// Each color has a fixed serialization index, see [`Color::index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Blue,
    Green,
    Gold,
    Indigo,
    Aqua,
    Burgundy,
}

impl Color {
    /// All colors, ordered by wire index.
    pub const ALL: [Color; COLOR_COUNT] = [
        Color::Red,
        Color::Blue,
        Color::Green,
        Color::Gold,
        Color::Indigo,
        Color::Aqua,
        Color::Burgundy,
    ];

    /// Stable serialization index (0-6).
    pub fn index(&self) -> u8 {
        match self {
            Color::Red => 0,
            Color::Blue => 1,
            Color::Green => 2,
            Color::Gold => 3,
            Color::Indigo => 4,
            Color::Aqua => 5,
            Color::Burgundy => 6,
        }
    }

    /// Inverse of [`Color::index`].
    ///
    /// # Examples
    ///
    /// ```
    /// use lines_types::Color;
    ///
    /// assert_eq!(Color::from_index(0), Some(Color::Red));
    /// assert_eq!(Color::from_index(6), Some(Color::Burgundy));
    /// assert_eq!(Color::from_index(7), None);
    /// ```
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Color::Red),
            1 => Some(Color::Blue),
            2 => Some(Color::Green),
            3 => Some(Color::Gold),
            4 => Some(Color::Indigo),
            5 => Some(Color::Aqua),
            6 => Some(Color::Burgundy),
            _ => None,
        }
    }

    /// Parse color from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "red" => Some(Color::Red),
            "blue" => Some(Color::Blue),
            "green" => Some(Color::Green),
            "gold" => Some(Color::Gold),
            "indigo" => Some(Color::Indigo),
            "aqua" => Some(Color::Aqua),
            "burgundy" => Some(Color::Burgundy),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Blue => "blue",
            Color::Green => "green",
            Color::Gold => "gold",
            Color::Indigo => "indigo",
            Color::Aqua => "aqua",
            Color::Burgundy => "burgundy",
        }
    }
}

/// A ball is just a color tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ball {
    pub color: Color,
}

impl Ball {
    pub fn new(color: Color) -> Self {
        Self { color }
    }
}

/// A board coordinate.
///
/// Two cells with equal coordinates are the same cell. Whether a cell is
/// actually on a given field is decided by the field (see `Field::cell`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cell {
    pub x: u8,
    pub y: u8,
}

impl Cell {
    pub fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }
}

/// The four grid directions used for neighbor lookups.
///
/// - **Left**: `(x - 1, y)`
/// - **Right**: `(x + 1, y)`
/// - **Top**: `(x, y - 1)`
/// - **Bottom**: `(x, y + 1)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Top,
    Bottom,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Top,
        Direction::Bottom,
    ];

    /// Coordinate delta `(dx, dy)` of one step in this direction
    pub fn offset(&self) -> (i16, i16) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Top => (0, -1),
            Direction::Bottom => (0, 1),
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Top => Direction::Bottom,
            Direction::Bottom => Direction::Top,
        }
    }
}

/// Player intents produced by the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UiAction {
    /// Move the cursor one cell in a direction
    Cursor(Direction),
    /// Pick up the ball under the cursor, or send the selected ball there
    Select,
    /// Drop the current selection
    Cancel,
    /// Abandon the current game and deal a fresh one
    NewGame,
}

impl UiAction {
    /// Parse an action name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use lines_types::{Direction, UiAction};
    ///
    /// assert_eq!(UiAction::from_str("left"), Some(UiAction::Cursor(Direction::Left)));
    /// assert_eq!(UiAction::from_str("SELECT"), Some(UiAction::Select));
    /// assert_eq!(UiAction::from_str("jump"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "left" => Some(UiAction::Cursor(Direction::Left)),
            "right" => Some(UiAction::Cursor(Direction::Right)),
            "up" => Some(UiAction::Cursor(Direction::Top)),
            "down" => Some(UiAction::Cursor(Direction::Bottom)),
            "select" => Some(UiAction::Select),
            "cancel" => Some(UiAction::Cancel),
            "newgame" => Some(UiAction::NewGame),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UiAction::Cursor(Direction::Left) => "left",
            UiAction::Cursor(Direction::Right) => "right",
            UiAction::Cursor(Direction::Top) => "up",
            UiAction::Cursor(Direction::Bottom) => "down",
            UiAction::Select => "select",
            UiAction::Cancel => "cancel",
            UiAction::NewGame => "newGame",
        }
    }
}
