//! Console colors and foreground/background pairs

use std::fmt;

use crossterm::style::Color as TermColor;

use crate::error::{RecolorError, Result};

/// The sixteen console colors, plus the terminal's own default
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConsoleColor {
    Black,
    DarkBlue,
    DarkGreen,
    DarkCyan,
    DarkRed,
    DarkMagenta,
    DarkYellow,
    Gray,
    DarkGray,
    Blue,
    Green,
    Cyan,
    Red,
    Magenta,
    Yellow,
    White,
    /// Whatever the terminal uses when no color is set
    Default,
}

impl ConsoleColor {
    /// Colors addressable by number, in numeric order
    const NUMBERED: [ConsoleColor; 16] = [
        ConsoleColor::Black,
        ConsoleColor::DarkBlue,
        ConsoleColor::DarkGreen,
        ConsoleColor::DarkCyan,
        ConsoleColor::DarkRed,
        ConsoleColor::DarkMagenta,
        ConsoleColor::DarkYellow,
        ConsoleColor::Gray,
        ConsoleColor::DarkGray,
        ConsoleColor::Blue,
        ConsoleColor::Green,
        ConsoleColor::Cyan,
        ConsoleColor::Red,
        ConsoleColor::Magenta,
        ConsoleColor::Yellow,
        ConsoleColor::White,
    ];

    /// Look up a color by its number (0-15)
    pub fn from_index(n: u8) -> Option<Self> {
        Self::NUMBERED.get(usize::from(n)).copied()
    }

    /// Get the name of this color
    pub fn name(&self) -> &'static str {
        match self {
            ConsoleColor::Black => "Black",
            ConsoleColor::DarkBlue => "DarkBlue",
            ConsoleColor::DarkGreen => "DarkGreen",
            ConsoleColor::DarkCyan => "DarkCyan",
            ConsoleColor::DarkRed => "DarkRed",
            ConsoleColor::DarkMagenta => "DarkMagenta",
            ConsoleColor::DarkYellow => "DarkYellow",
            ConsoleColor::Gray => "Gray",
            ConsoleColor::DarkGray => "DarkGray",
            ConsoleColor::Blue => "Blue",
            ConsoleColor::Green => "Green",
            ConsoleColor::Cyan => "Cyan",
            ConsoleColor::Red => "Red",
            ConsoleColor::Magenta => "Magenta",
            ConsoleColor::Yellow => "Yellow",
            ConsoleColor::White => "White",
            ConsoleColor::Default => "Default",
        }
    }

    /// Parse a color name, ignoring case and surrounding spaces
    pub fn from_name(input: &str) -> Result<Self> {
        let name = input.trim_matches(' ');
        if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(RecolorError::ColorSyntax(input.to_string()));
        }
        Self::NUMBERED
            .iter()
            .chain(std::iter::once(&ConsoleColor::Default))
            .find(|color| color.name().eq_ignore_ascii_case(name))
            .copied()
            .ok_or_else(|| RecolorError::UnknownColor(name.to_string()))
    }
}

impl From<ConsoleColor> for TermColor {
    fn from(color: ConsoleColor) -> Self {
        match color {
            ConsoleColor::Black => TermColor::Black,
            ConsoleColor::DarkBlue => TermColor::DarkBlue,
            ConsoleColor::DarkGreen => TermColor::DarkGreen,
            ConsoleColor::DarkCyan => TermColor::DarkCyan,
            ConsoleColor::DarkRed => TermColor::DarkRed,
            ConsoleColor::DarkMagenta => TermColor::DarkMagenta,
            ConsoleColor::DarkYellow => TermColor::DarkYellow,
            ConsoleColor::Gray => TermColor::Grey,
            ConsoleColor::DarkGray => TermColor::DarkGrey,
            ConsoleColor::Blue => TermColor::Blue,
            ConsoleColor::Green => TermColor::Green,
            ConsoleColor::Cyan => TermColor::Cyan,
            ConsoleColor::Red => TermColor::Red,
            ConsoleColor::Magenta => TermColor::Magenta,
            ConsoleColor::Yellow => TermColor::Yellow,
            ConsoleColor::White => TermColor::White,
            ConsoleColor::Default => TermColor::Reset,
        }
    }
}

/// A foreground/background pair. An unset channel leaves the
/// terminal's current color for that channel untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub foreground: Option<ConsoleColor>,
    pub background: Option<ConsoleColor>,
}

impl Color {
    pub fn new(foreground: Option<ConsoleColor>, background: Option<ConsoleColor>) -> Self {
        Self { foreground, background }
    }

    /// The terminal's own colors on both channels
    pub fn ambient() -> Self {
        Self::new(Some(ConsoleColor::Default), Some(ConsoleColor::Default))
    }

    /// Parse a color specification.
    ///
    /// One or two hex digits give a packed color number, low nibble for
    /// the foreground and high nibble for the background (`c` is red on
    /// black, `1f` is white on dark blue). Anything else is `FG/BG` with
    /// color names, where either side may be left empty (`red`, `/blue`,
    /// `white/darkred`).
    pub fn parse(input: &str) -> Result<Self> {
        if is_packed_number(input) {
            let n = u8::from_str_radix(input, 16)
                .map_err(|_| RecolorError::ColorSyntax(input.to_string()))?;
            return Ok(Self::new(
                ConsoleColor::from_index(n & 0xf),
                ConsoleColor::from_index(n >> 4),
            ));
        }

        let (fg, bg) = match input.split_once('/') {
            Some((fg, bg)) => (fg, Some(bg)),
            None => (input, None),
        };
        Ok(Self::new(parse_channel(fg)?, bg.map(parse_channel).transpose()?.flatten()))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = |c: Option<ConsoleColor>| c.map_or("", |c| c.name());
        write!(f, "{}/{}", name(self.foreground), name(self.background))
    }
}

fn is_packed_number(input: &str) -> bool {
    matches!(input.len(), 1 | 2) && input.chars().all(|c| c.is_ascii_hexdigit())
}

fn parse_channel(input: &str) -> Result<Option<ConsoleColor>> {
    if input.is_empty() {
        return Ok(None);
    }
    ConsoleColor::from_name(input).map(Some)
}
