use std::{fmt, rc::Rc};

/// A location inside a source file.
///
/// Lines are 1-based and columns are 0-based. `index` is the byte offset of
/// the location from the start of the source, so it can be used to slice the
/// original text directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    /// Name of the file (or `<stdin>`) the position belongs to.
    pub file:  Rc<str>,
    /// 1-based line number.
    pub line:  usize,
    /// 0-based column, counted in characters.
    pub col:   usize,
    /// Byte offset from the start of the source.
    pub index: usize,
}

impl Position {
    /// Creates a position pointing at the first character of `file`.
    ///
    /// # Example
    /// ```
    /// use luminary::interpreter::position::Position;
    ///
    /// let start = Position::new("main.lum");
    /// assert_eq!((start.line, start.col, start.index), (1, 0, 0));
    /// ```
    #[must_use]
    pub fn new(file: impl Into<Rc<str>>) -> Self {
        Self { file:  file.into(),
               line:  1,
               col:   0,
               index: 0, }
    }

    /// Steps over `ch`.
    ///
    /// A newline moves to column 0 of the next line. `None` is the no-op
    /// step used when a token has no explicit end, and only moves the index
    /// and column by one.
    ///
    /// # Example
    /// ```
    /// use luminary::interpreter::position::Position;
    ///
    /// let mut pos = Position::new("main.lum");
    /// pos.advance(Some('a'));
    /// pos.advance(Some('\n'));
    /// assert_eq!((pos.line, pos.col, pos.index), (2, 0, 2));
    /// ```
    pub fn advance(&mut self, ch: Option<char>) {
        match ch {
            Some('\n') => {
                self.index += 1;
                self.line += 1;
                self.col = 0;
            },
            Some(ch) => {
                self.index += ch.len_utf8();
                self.col += 1;
            },
            None => {
                self.index += 1;
                self.col += 1;
            },
        }
    }

    /// Steps over every character of `text`.
    pub fn advance_through(&mut self, text: &str) {
        for ch in text.chars() {
            self.advance(Some(ch));
        }
    }

    /// Returns a copy of this position advanced by one no-op step.
    #[must_use]
    pub fn advanced(&self) -> Self {
        let mut next = self.clone();
        next.advance(None);
        next
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.col)
    }
}

/// A half-open source range `[start, end)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end:   Position,
}

impl Span {
    /// Creates a span. A missing end defaults to `start` advanced by one
    /// no-op step.
    #[must_use]
    pub fn new(start: Position, end: Option<Position>) -> Self {
        let end = end.unwrap_or_else(|| start.advanced());
        Self { start, end }
    }

    /// Returns the span running from the start of `self` to the end of
    /// `other`.
    #[must_use]
    pub fn to(&self, other: &Self) -> Self {
        Self { start: self.start.clone(),
               end:   other.end.clone(), }
    }
}
