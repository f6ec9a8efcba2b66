//! Line-oriented console I/O.
//!
//! Generic over `BufRead`/`Write` so the interview and menu can be driven
//! from in-memory buffers in tests.

use std::io::{BufRead, Write};

use color_eyre::eyre::Result;
use profilegen_core::validate::ValidationError;

pub(crate) struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub(crate) fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print one line.
    pub(crate) fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// Show `prompt` and read one line. `None` means end of input.
    pub(crate) fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{prompt}\n > ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }

        let answer = line.trim_end_matches(['\n', '\r']).to_string();
        Ok(Some(answer))
    }

    /// Keep asking until `check` accepts the answer.
    pub(crate) fn ask_until<T>(
        &mut self,
        prompt: &str,
        mut check: impl FnMut(&str) -> std::result::Result<T, ValidationError>,
    ) -> Result<Option<T>> {
        loop {
            let Some(answer) = self.ask(prompt)? else {
                return Ok(None);
            };
            match check(&answer) {
                Ok(value) => return Ok(Some(value)),
                Err(e) => self.say(&format!("❌ {e}. Please try again."))?,
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use profilegen_core::validate::normalize_color;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn ask_strips_line_ending() {
        let mut c = console("hello\r\n");
        assert_eq!(c.ask("Say hi").unwrap().as_deref(), Some("hello"));
        let out = String::from_utf8(c.into_output()).unwrap();
        assert!(out.starts_with("Say hi\n > "));
    }

    #[test]
    fn ask_reports_eof() {
        let mut c = console("");
        assert_eq!(c.ask("anything?").unwrap(), None);
    }

    #[test]
    fn ask_until_reprompts() {
        let mut c = console("blue\n#36BCF7\n");
        let color = c.ask_until("Colour", normalize_color).unwrap();
        assert_eq!(color.as_deref(), Some("36BCF7"));

        let out = String::from_utf8(c.into_output()).unwrap();
        assert_eq!(out.matches("Colour").count(), 2);
        assert!(out.contains("'blue' is not a 6-digit hex colour"));
    }
}
