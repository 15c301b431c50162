//! Control-file scene: tokenizer, parser, sources and the per-frame scene state.

pub(crate) mod lexer;
/// `transform` / `point` command parser.
pub mod parser;
/// Control text sources polled once per frame.
pub mod source;
/// Scene state owned by the frame loop.
pub mod state;
