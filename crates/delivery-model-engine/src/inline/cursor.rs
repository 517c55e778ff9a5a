/// A byte cursor over a rich-text value.
///
/// Cheap to clone, so parsers save a copy before attempting a construct and
/// restore it when the attempt fails.
#[derive(Clone)]
pub struct Cursor<'a> {
    pub s: &'a str,
    /// Current byte index into `s`.
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

    pub fn peek(&self) -> Option<u8> {
        self.s.as_bytes().get(self.i).copied()
    }

    /// Checks if the remaining input starts with `pat`, ignoring ASCII case.
    /// Markup tag and attribute names are case-insensitive.
    pub fn starts_with_ignore_case(&self, pat: &[u8]) -> bool {
        self.s
            .as_bytes()
            .get(self.i..self.i + pat.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(pat))
    }

    pub fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.i += 1;
        Some(b)
    }

    /// Advances by `n` bytes. The caller must ensure the bytes exist.
    pub fn bump_n(&mut self, n: usize) {
        self.i += n;
    }

    pub fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(|b| b.is_ascii_whitespace()) {
            self.i += 1;
        }
    }

    /// Advances while `pred` holds, returning the start of the consumed run.
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) -> usize {
        let start = self.i;
        while self.peek().is_some_and(&pred) {
            self.i += 1;
        }
        start
    }
}
