//! Line-oriented console I/O.

use std::io::{self, BufRead, Write};

/// Prompts and output over any reader/writer pair.
///
/// The binary wires this to stdin and an `anstream` stdout; tests use an
/// in-memory cursor and buffer.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writes `label` and reads one line.
    ///
    /// Returns `None` at end of input. The trailing line terminator is removed
    /// and bytes that are not valid UTF-8 become U+FFFD.
    pub fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut bytes = Vec::new();
        if self.input.read_until(b'\n', &mut bytes)? == 0 {
            return Ok(None);
        }

        let line = String::from_utf8_lossy(&bytes);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    pub fn println(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{}", text)
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_prompt_reads_line() {
        let mut console = console("Rush\r\n2013\n");

        assert_eq!(console.prompt("Title: ").unwrap(), Some("Rush".to_string()));
        assert_eq!(console.prompt("Year: ").unwrap(), Some("2013".to_string()));
        assert_eq!(
            String::from_utf8(console.into_output()).unwrap(),
            "Title: Year: "
        );
    }

    #[test]
    fn test_prompt_keeps_inner_whitespace() {
        let mut console = console("  The Big Lebowski \n");

        assert_eq!(
            console.prompt("> ").unwrap(),
            Some("  The Big Lebowski ".to_string())
        );
    }

    #[test]
    fn test_prompt_at_end_of_input() {
        let mut console = console("");

        assert_eq!(console.prompt("> ").unwrap(), None);
    }

    #[test]
    fn test_prompt_replaces_invalid_utf8() {
        let input = vec![0xff, 0xfe, b'\n', b'7', b'\n'];
        let mut console = Console::new(Cursor::new(input), Vec::new());

        assert_eq!(
            console.prompt("> ").unwrap(),
            Some("\u{fffd}\u{fffd}".to_string())
        );
        assert_eq!(console.prompt("> ").unwrap(), Some("7".to_string()));
    }

    #[test]
    fn test_empty_line_is_not_end_of_input() {
        let mut console = console("\n");

        assert_eq!(console.prompt("> ").unwrap(), Some(String::new()));
    }
}
