/// A byte cursor over an HTML fragment.
///
/// Positions are byte indices into `s`. The parser only stops on ASCII
/// delimiters, so every position it slices at is a char boundary.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being parsed.
    pub s: &'a str,
    /// Current index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    pub fn pos(&self) -> usize {
        self.i
    }

    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Peeks at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.s.as_bytes().get(self.i).copied()
    }

    /// Checks if the remaining input starts with the given byte pattern.
    pub fn starts_with(&self, pat: &[u8]) -> bool {
        self.s.as_bytes()[self.i.min(self.s.len())..].starts_with(pat)
    }

    /// Advances by one byte, returning the consumed byte.
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.i += 1;
        Some(b)
    }

    pub fn bump_n(&mut self, n: usize) {
        self.i += n;
    }

    /// Byte index of the next occurrence of `b` at or after the cursor.
    pub fn find_byte(&self, b: u8) -> Option<usize> {
        self.s.as_bytes()[self.i.min(self.s.len())..]
            .iter()
            .position(|&x| x == b)
            .map(|p| self.i + p)
    }

    /// Byte index just past the next occurrence of `pat` at or after the cursor.
    pub fn find_end_of(&self, pat: &str) -> Option<usize> {
        self.s
            .get(self.i..)
            .and_then(|rest| rest.find(pat))
            .map(|p| self.i + p + pat.len())
    }

    /// Text between two byte positions.
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        &self.s[start..end]
    }
}
