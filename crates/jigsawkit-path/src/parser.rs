//! Single-pass reader for the path mini-language.
//!
//! Grammar: a command letter followed by a fixed number of numeric arguments,
//! separated by whitespace and/or commas. Supported letters are `M L C Q A Z`,
//! case-sensitive and absolute only. Extra argument groups after a command
//! repeat it (`M` repeats as `L`).
//!
//! The reader never aborts. A command with an unknown letter or a short or
//! garbled argument list is skipped up to the next command letter and reported
//! as a [`PathError::MalformedPathCommand`] diagnostic.

use crate::command::{PathCommand, PathIR};
use crate::error::PathError;
use jigsawkit_core::Point;
use std::str::FromStr;
use tracing::warn;

/// Result of a lenient parse: whatever could be read plus what was skipped.
#[derive(Debug, Clone, Default)]
pub struct ParsedPath {
    pub path: PathIR,
    pub diagnostics: Vec<PathError>,
}

impl ParsedPath {
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CommandKind {
    Move,
    Line,
    Cubic,
    Quad,
    Arc,
    Close,
}

impl CommandKind {
    fn from_letter(letter: char) -> Result<Self, &'static str> {
        match letter {
            'M' => Ok(Self::Move),
            'L' => Ok(Self::Line),
            'C' => Ok(Self::Cubic),
            'Q' => Ok(Self::Quad),
            'A' => Ok(Self::Arc),
            'Z' => Ok(Self::Close),
            'm' | 'l' | 'c' | 'q' | 'a' | 'h' | 'v' | 's' | 't' => {
                Err("relative commands are not supported")
            }
            'z' => Err("commands are case-sensitive, use 'Z'"),
            'H' | 'V' | 'S' | 'T' => Err("unsupported command"),
            _ => Err("unknown command"),
        }
    }

    fn arity(self) -> usize {
        match self {
            Self::Move | Self::Line => 2,
            Self::Cubic => 6,
            Self::Quad => 4,
            Self::Arc => 7,
            Self::Close => 0,
        }
    }

    fn letter(self) -> char {
        match self {
            Self::Move => 'M',
            Self::Line => 'L',
            Self::Cubic => 'C',
            Self::Quad => 'Q',
            Self::Arc => 'A',
            Self::Close => 'Z',
        }
    }
}

struct Lexer<'a> {
    src: &'a [u8],
    pos: usize,
}

impl<'a> Lexer<'a> {
    fn new(src: &'a str) -> Self {
        Self {
            src: src.as_bytes(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.src.get(self.pos).copied()
    }

    fn at_end(&self) -> bool {
        self.pos >= self.src.len()
    }

    fn skip_separators(&mut self) {
        while let Some(b) = self.peek() {
            if b.is_ascii_whitespace() || b == b',' {
                self.pos += 1;
            } else {
                break;
            }
        }
    }

    /// Whether the next non-separator byte can start a number.
    fn number_ahead(&mut self) -> bool {
        self.skip_separators();
        matches!(self.peek(), Some(b) if b.is_ascii_digit() || b == b'-' || b == b'+' || b == b'.')
    }

    fn read_number(&mut self) -> Option<f64> {
        self.skip_separators();
        let start = self.pos;

        if matches!(self.peek(), Some(b'-') | Some(b'+')) {
            self.pos += 1;
        }
        let int_start = self.pos;
        while matches!(self.peek(), Some(b) if b.is_ascii_digit()) {
            self.pos += 1;
        }
        let mut digits = self.pos - int_start;
        if self.peek() == Some(b'.') {
            self.pos += 1;
            let frac_start = self.pos;
            while matches!(self.peek(), Some(b) if b.is_ascii_digit()) {
                self.pos += 1;
            }
            digits += self.pos - frac_start;
        }
        if digits == 0 {
            self.pos = start;
            return None;
        }
        if matches!(self.peek(), Some(b'e') | Some(b'E')) {
            let mark = self.pos;
            self.pos += 1;
            if matches!(self.peek(), Some(b'-') | Some(b'+')) {
                self.pos += 1;
            }
            let exp_start = self.pos;
            while matches!(self.peek(), Some(b) if b.is_ascii_digit()) {
                self.pos += 1;
            }
            if self.pos == exp_start {
                // Not an exponent after all.
                self.pos = mark;
            }
        }

        std::str::from_utf8(&self.src[start..self.pos])
            .ok()
            .and_then(|s| s.parse::<f64>().ok())
    }

    /// Arc flags are a single `0` or `1` and may be written without separators.
    fn read_flag(&mut self) -> Option<bool> {
        self.skip_separators();
        match self.peek() {
            Some(b'0') => {
                self.pos += 1;
                Some(false)
            }
            Some(b'1') => {
                self.pos += 1;
                Some(true)
            }
            _ => None,
        }
    }

    /// Advance to the next byte that could be a command letter.
    fn skip_to_next_command(&mut self) {
        while let Some(b) = self.peek() {
            if b.is_ascii_alphabetic() && b != b'e' && b != b'E' {
                break;
            }
            self.pos += 1;
        }
    }

    /// Character at `offset`, tolerating multi-byte input.
    fn char_at(&self, offset: usize) -> char {
        std::str::from_utf8(&self.src[offset..])
            .ok()
            .and_then(|s| s.chars().next())
            .unwrap_or('?')
    }
}

fn number(lexer: &mut Lexer<'_>, kind: CommandKind, what: &str) -> Result<f64, String> {
    lexer
        .read_number()
        .ok_or_else(|| format!("expected {} arguments, missing {}", kind.arity(), what))
}

fn point(lexer: &mut Lexer<'_>, kind: CommandKind, x: &str, y: &str) -> Result<Point, String> {
    let px = number(lexer, kind, x)?;
    let py = number(lexer, kind, y)?;
    Ok(Point::new(px, py))
}

fn read_arguments(lexer: &mut Lexer<'_>, kind: CommandKind) -> Result<PathCommand, String> {
    let command = match kind {
        CommandKind::Move => PathCommand::MoveTo(point(lexer, kind, "x", "y")?),
        CommandKind::Line => PathCommand::LineTo(point(lexer, kind, "x", "y")?),
        CommandKind::Cubic => PathCommand::CubicTo {
            ctrl1: point(lexer, kind, "x1", "y1")?,
            ctrl2: point(lexer, kind, "x2", "y2")?,
            to: point(lexer, kind, "x", "y")?,
        },
        CommandKind::Quad => PathCommand::QuadTo {
            ctrl: point(lexer, kind, "x1", "y1")?,
            to: point(lexer, kind, "x", "y")?,
        },
        CommandKind::Arc => {
            let rx = number(lexer, kind, "rx")?;
            let ry = number(lexer, kind, "ry")?;
            let x_axis_rotation = number(lexer, kind, "x-axis-rotation")?;
            let large_arc = lexer
                .read_flag()
                .ok_or_else(|| "large-arc flag must be 0 or 1".to_string())?;
            let sweep = lexer
                .read_flag()
                .ok_or_else(|| "sweep flag must be 0 or 1".to_string())?;
            PathCommand::ArcTo {
                rx,
                ry,
                x_axis_rotation,
                large_arc,
                sweep,
                to: point(lexer, kind, "x", "y")?,
            }
        }
        CommandKind::Close => PathCommand::ClosePath,
    };
    Ok(command)
}

/// Read a path string, skipping anything malformed.
pub fn parse_path(input: &str) -> ParsedPath {
    let mut lexer = Lexer::new(input);
    let mut parsed = ParsedPath::default();

    let report = |parsed: &mut ParsedPath, offset: usize, command: char, reason: String| {
        warn!(offset, %command, %reason, "Skipping malformed path command");
        parsed.diagnostics.push(PathError::MalformedPathCommand {
            offset,
            command,
            reason,
        });
    };

    loop {
        lexer.skip_separators();
        if lexer.at_end() {
            break;
        }

        let offset = lexer.pos;
        let letter = lexer.char_at(offset);
        if !letter.is_ascii_alphabetic() {
            report(
                &mut parsed,
                offset,
                letter,
                "expected a command letter".to_string(),
            );
            lexer.pos += letter.len_utf8().max(1);
            lexer.skip_to_next_command();
            continue;
        }
        lexer.pos += 1;

        let kind = match CommandKind::from_letter(letter) {
            Ok(kind) => kind,
            Err(reason) => {
                report(&mut parsed, offset, letter, reason.to_string());
                lexer.skip_to_next_command();
                continue;
            }
        };

        if kind == CommandKind::Close {
            parsed.path.push(PathCommand::ClosePath);
            if lexer.number_ahead() {
                report(
                    &mut parsed,
                    offset,
                    letter,
                    "'Z' takes no arguments".to_string(),
                );
                lexer.skip_to_next_command();
            }
            continue;
        }

        // First argument group, then implicit repetitions.
        let mut repeat_kind = kind;
        let mut first = true;
        loop {
            if !first && !lexer.number_ahead() {
                break;
            }
            match read_arguments(&mut lexer, repeat_kind) {
                Ok(command) => parsed.path.push(command),
                Err(reason) => {
                    report(&mut parsed, offset, repeat_kind.letter(), reason);
                    lexer.skip_to_next_command();
                    break;
                }
            }
            if repeat_kind == CommandKind::Move {
                repeat_kind = CommandKind::Line;
            }
            first = false;
        }
    }

    parsed
}

impl FromStr for PathIR {
    type Err = PathError;

    /// Strict parse: the first malformed command is an error.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parsed = parse_path(s);
        if parsed.diagnostics.is_empty() {
            Ok(parsed.path)
        } else {
            Err(parsed.diagnostics.swap_remove(0))
        }
    }
}
