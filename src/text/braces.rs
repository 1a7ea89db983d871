//! String- and comment-aware brace matching.
//!
//! The toolkit never parses C++; it only needs to know where a function body
//! ends. A raw `{`/`}` counter miscounts whenever a brace sits inside a string
//! literal or a comment, so all brace counting runs through a five-state
//! lexer: code, string literal, char literal, line comment, block comment.
//! Strings, char literals and line comments terminate at end of line; block
//! comments carry across lines.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LexState {
    Code,
    Str,
    CharLit,
    LineComment,
    BlockComment,
}

/// Structural brace movement observed on one line.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BraceDelta {
    pub opens: usize,
    pub closes: usize,
}

#[derive(Debug, Clone)]
struct Lexer {
    state: LexState,
    escaped: bool,
}

impl Lexer {
    fn new() -> Self {
        Self {
            state: LexState::Code,
            escaped: false,
        }
    }

    /// Processes one character. Returns the brace when it is structural
    /// (visible code, not literal/comment content), and whether the peeked
    /// character was consumed as the second half of a two-character token.
    fn feed(&mut self, c: char, peek: Option<char>) -> (Option<char>, bool) {
        match self.state {
            LexState::Code => match c {
                '"' => {
                    self.state = LexState::Str;
                    (None, false)
                }
                '\'' => {
                    self.state = LexState::CharLit;
                    (None, false)
                }
                '/' if peek == Some('/') => {
                    self.state = LexState::LineComment;
                    (None, true)
                }
                '/' if peek == Some('*') => {
                    self.state = LexState::BlockComment;
                    (None, true)
                }
                '{' | '}' => (Some(c), false),
                _ => (None, false),
            },
            LexState::Str => {
                if self.escaped {
                    self.escaped = false;
                } else if c == '\\' {
                    self.escaped = true;
                } else if c == '"' {
                    self.state = LexState::Code;
                }
                (None, false)
            }
            LexState::CharLit => {
                if self.escaped {
                    self.escaped = false;
                } else if c == '\\' {
                    self.escaped = true;
                } else if c == '\'' {
                    self.state = LexState::Code;
                }
                (None, false)
            }
            LexState::LineComment => (None, false),
            LexState::BlockComment => {
                if c == '*' && peek == Some('/') {
                    self.state = LexState::Code;
                    (None, true)
                } else {
                    (None, false)
                }
            }
        }
    }

    /// Strings, char literals and line comments cannot span lines.
    fn end_line(&mut self) {
        if self.state != LexState::BlockComment {
            self.state = LexState::Code;
        }
        self.escaped = false;
    }
}

/// Finds the byte index of the `}` matching the `{` at `open_idx`, or `None`
/// when the block never closes before end of input. `open_idx` must point at
/// an opening brace in code position.
pub fn find_block_end(text: &str, open_idx: usize) -> Option<usize> {
    debug_assert_eq!(text.as_bytes().get(open_idx), Some(&b'{'));
    let mut lexer = Lexer::new();
    let mut depth = 0usize;
    let mut chars = text[open_idx..].char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if c == '\n' {
            lexer.end_line();
            continue;
        }
        let peek = chars.peek().map(|&(_, next)| next);
        let (brace, consumed_peek) = lexer.feed(c, peek);
        if consumed_peek {
            chars.next();
        }
        match brace {
            Some('{') => depth += 1,
            Some('}') => {
                depth -= 1;
                if depth == 0 {
                    return Some(open_idx + i);
                }
            }
            _ => {}
        }
    }

    None
}

/// Per-line brace counter that carries block-comment state across lines.
/// Used by the line-oriented function-body remover.
#[derive(Debug)]
pub struct LineBraces {
    lexer: Lexer,
}

impl Default for LineBraces {
    fn default() -> Self {
        Self::new()
    }
}

impl LineBraces {
    pub fn new() -> Self {
        Self {
            lexer: Lexer::new(),
        }
    }

    /// Counts the structural braces on one line (without its newline).
    pub fn feed(&mut self, line: &str) -> BraceDelta {
        let mut delta = BraceDelta::default();
        let mut chars = line.chars().peekable();

        while let Some(c) = chars.next() {
            let peek = chars.peek().copied();
            let (brace, consumed_peek) = self.lexer.feed(c, peek);
            if consumed_peek {
                chars.next();
            }
            match brace {
                Some('{') => delta.opens += 1,
                Some('}') => delta.closes += 1,
                _ => {}
            }
        }

        self.lexer.end_line();
        delta
    }
}
