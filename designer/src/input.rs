use std::io::{self, BufRead, Write};

/// Helper to read input from the player.
pub struct InputReader<B> {
    read: B,
    buf: String,
}

impl<B> InputReader<B> {
    pub fn new(read: B) -> Self {
        Self {
            read,
            buf: String::new(),
        }
    }
}

impl<B: BufRead> InputReader<B> {
    /// Print the prompt and read one line, trimmed and converted to ascii lower.
    /// Returns `None` at the end of input.
    pub fn read_input_lower<W: Write>(
        &mut self,
        prompt: &str,
        out: &mut W,
    ) -> io::Result<Option<&str>> {
        write!(out, "{}", prompt)?;
        out.flush()?;
        self.buf.clear();
        if self.read.read_line(&mut self.buf)? == 0 {
            writeln!(out)?;
            return Ok(None);
        }
        self.buf.make_ascii_lowercase();
        Ok(Some(self.buf.trim()))
    }
}
