//! Line-oriented interactive input

use std::io::{self, BufRead, ErrorKind, Write};

/// Outcome of a single prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// A non-empty line
    Value(String),
    /// An empty line
    Skip,
    /// End of input
    Cancelled,
}

/// Source of answers to prompts
pub trait InteractiveReader {
    /// Show `prompt` without a trailing newline and block for one line
    fn read_line(&mut self, prompt: &str) -> io::Result<Response>;
}

impl<T: InteractiveReader + ?Sized> InteractiveReader for &mut T {
    fn read_line(&mut self, prompt: &str) -> io::Result<Response> {
        (**self).read_line(prompt)
    }
}

/// Reads answers from a buffered input and writes prompts to an output
pub struct LineReader<R, W> {
    input: R,
    output: W,
}

impl LineReader<io::StdinLock<'static>, io::Stdout> {
    /// Reader bound to the process's stdin and stdout
    pub fn stdio() -> Self {
        LineReader::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> LineReader<R, W> {
    pub fn new(input: R, output: W) -> Self {
        LineReader { input, output }
    }

    /// Give back the output stream (used to inspect rendered prompts)
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> InteractiveReader for LineReader<R, W> {
    fn read_line(&mut self, prompt: &str) -> io::Result<Response> {
        self.output.write_all(prompt.as_bytes())?;
        self.output.flush()?;

        let mut line = String::new();
        let read = match self.input.read_line(&mut line) {
            Ok(read) => read,
            // Undecodable input counts as an empty answer
            Err(e) if e.kind() == ErrorKind::InvalidData => return Ok(Response::Skip),
            Err(e) => return Err(e),
        };

        if read == 0 {
            return Ok(Response::Cancelled);
        }

        let answer = strip_line_ending(&line);
        if answer.is_empty() {
            Ok(Response::Skip)
        } else {
            Ok(Response::Value(answer.to_string()))
        }
    }
}

fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_reads_values_and_renders_prompt() {
        let mut reader = LineReader::new(Cursor::new("hello\n"), Vec::new());
        let response = reader.read_line("1/1 <slug>: ").unwrap();

        assert_eq!(response, Response::Value("hello".to_string()));
        assert_eq!(reader.into_output(), b"1/1 <slug>: ");
    }

    #[test]
    fn test_strips_carriage_return() {
        let mut reader = LineReader::new(Cursor::new("value\r\n"), Vec::new());
        assert_eq!(
            reader.read_line("q").unwrap(),
            Response::Value("value".to_string())
        );
    }

    #[test]
    fn test_empty_line_is_skip() {
        let mut reader = LineReader::new(Cursor::new("\n\r\n"), Vec::new());
        assert_eq!(reader.read_line("q").unwrap(), Response::Skip);
        assert_eq!(reader.read_line("q").unwrap(), Response::Skip);
    }

    #[test]
    fn test_end_of_input_is_cancelled() {
        let mut reader = LineReader::new(Cursor::new("last"), Vec::new());
        assert_eq!(
            reader.read_line("q").unwrap(),
            Response::Value("last".to_string())
        );
        assert_eq!(reader.read_line("q").unwrap(), Response::Cancelled);
    }

    #[test]
    fn test_invalid_utf8_is_skip() {
        let mut reader = LineReader::new(Cursor::new(vec![0xff, 0xfe, b'\n']), Vec::new());
        assert_eq!(reader.read_line("q").unwrap(), Response::Skip);
    }
}
