/// Byte range of a token in the control text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Span {
    pub(crate) start: usize,
    pub(crate) end: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Token<'a> {
    pub(crate) text: &'a str,
    pub(crate) span: Span,
}

/// Whitespace-delimited tokenizer. ASCII whitespace separates tokens; everything else,
/// including non-ASCII text, belongs to a token.
pub(crate) struct Lexer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    pub(crate) fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Offset where the next token would start, or the input length at the end.
    pub(crate) fn offset(&self) -> usize {
        let bytes = self.input.as_bytes();
        let mut i = self.pos;
        while i < bytes.len() && bytes[i].is_ascii_whitespace() {
            i += 1;
        }
        i
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        let bytes = self.input.as_bytes();
        let start = self.offset();
        if start >= bytes.len() {
            self.pos = bytes.len();
            return None;
        }

        let mut end = start;
        while end < bytes.len() && !bytes[end].is_ascii_whitespace() {
            end += 1;
        }
        self.pos = end;

        Some(Token {
            text: &self.input[start..end],
            span: Span { start, end },
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/lexer.rs"]
mod tests;
