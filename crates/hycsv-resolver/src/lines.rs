/// Iterator over the lines of a text buffer
///
/// `\n`, `\r\n` and a lone `\r` all end a line. A terminator at the very end
/// does not produce an extra empty line.
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    rest: &'a str,
    consumed: usize,
}

impl<'a> Lines<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            rest: text,
            consumed: 0,
        }
    }

    /// Number of lines returned so far
    pub fn consumed(&self) -> usize {
        self.consumed
    }
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }
        let line = match self.rest.find(['\r', '\n']) {
            Some(end) => {
                let line = &self.rest[..end];
                let skip = if self.rest[end..].starts_with("\r\n") { 2 } else { 1 };
                self.rest = &self.rest[end + skip..];
                line
            }
            None => std::mem::take(&mut self.rest),
        };
        self.consumed += 1;
        Some(line)
    }
}
