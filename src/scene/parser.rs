use crate::foundation::core::{Mat4, Point};
use crate::scene::lexer::{Lexer, Token};

/// Control-file command keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `transform f0 .. f8`
    Transform,
    /// `point x y`
    Point,
}

impl Command {
    /// Keyword as written in the control file.
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Transform => "transform",
            Self::Point => "point",
        }
    }

    fn from_keyword(s: &str) -> Option<Self> {
        match s {
            "transform" => Some(Self::Transform),
            "point" => Some(Self::Point),
            _ => None,
        }
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Why a command's operands could not be read.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OperandError {
    #[error("expected {expected} numbers, input ended after {found}")]
    Truncated { expected: usize, found: usize },

    #[error("operand '{token}' at byte {offset} is not a finite number")]
    NotANumber { token: String, offset: usize },
}

/// A command whose operands were missing or not numbers.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("malformed `{command}` command at byte {offset}: {reason}")]
pub struct SceneParseError {
    /// Offending command.
    pub command: Command,
    /// Byte offset of the command keyword.
    pub offset: usize,
    /// What was wrong with its operands.
    pub reason: OperandError,
}

/// Result of scanning one revision of the control text.
///
/// When `error` is set, `transform` and `points` hold only what was read before the malformed
/// command; everything after it was ignored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedScene {
    /// Last `transform` command, packed into a [`Mat4`].
    pub transform: Option<Mat4>,
    /// `point` commands in file order.
    pub points: Vec<Point>,
    /// Number of unrecognized tokens skipped.
    pub skipped: usize,
    /// First malformed command, if any.
    pub error: Option<SceneParseError>,
}

impl ParsedScene {
    /// Return `true` when every command was well formed.
    pub fn is_complete(&self) -> bool {
        self.error.is_none()
    }
}

/// Scan control text into a transform and a point list.
///
/// Unknown tokens are skipped. Scanning stops at the first malformed command.
#[tracing::instrument(level = "trace", skip(text), fields(len = text.len()))]
pub fn parse(text: &str) -> ParsedScene {
    let mut out = ParsedScene::default();
    let mut lexer = Lexer::new(text);

    while let Some(tok) = lexer.next() {
        let Some(command) = Command::from_keyword(tok.text) else {
            tracing::trace!(token = tok.text, offset = tok.span.start, "skipping token");
            out.skipped += 1;
            continue;
        };

        let step = match command {
            Command::Transform => read_operands::<9>(&mut lexer, command, tok).map(|m| {
                out.transform = Some(Mat4::from_rows3(m));
            }),
            Command::Point => read_operands::<2>(&mut lexer, command, tok).map(|[x, y]| {
                out.points.push(Point::new(x, y));
            }),
        };

        if let Err(err) = step {
            out.error = Some(err);
            break;
        }
    }

    out
}

fn read_operands<const N: usize>(
    lexer: &mut Lexer<'_>,
    command: Command,
    keyword: Token<'_>,
) -> Result<[f64; N], SceneParseError> {
    let fail = |reason| SceneParseError {
        command,
        offset: keyword.span.start,
        reason,
    };

    let mut vals = [0.0; N];
    for (i, slot) in vals.iter_mut().enumerate() {
        let tok = lexer.next().ok_or_else(|| {
            fail(OperandError::Truncated {
                expected: N,
                found: i,
            })
        })?;
        *slot = parse_number(tok.text).ok_or_else(|| {
            fail(OperandError::NotANumber {
                token: tok.text.to_owned(),
                offset: tok.span.start,
            })
        })?;
    }
    Ok(vals)
}

fn parse_number(s: &str) -> Option<f64> {
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
#[path = "../../tests/unit/scene/parser.rs"]
mod tests;
