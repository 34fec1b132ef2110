//! Interactive conversion sessions
//!
//! A session prompts for input, reads one line per prompt, converts the
//! color and writes the linear tuple. Readers and writers are generic so the
//! same procedure serves the terminal and in-memory tests.

use std::io::{BufRead, Write};

use srgb_transfer::{InputFormat, LinearRgb};

use crate::error::AppError;

const TITLE: &str = "Convert: sRGB -> linear RGB";
const COLOR_PROMPT: &str = "sRGB color: ";
const FORMAT_PROMPT: &str = "Format: ";

/// Simple mode: read a decimal `r g b` line and print its linear tuple.
pub fn run_simple<R: BufRead, W: Write>(input: R, output: W) -> Result<LinearRgb, AppError> {
    let mut session = Session::new(input, output);
    session.line(TITLE)?;
    session.convert(InputFormat::Decimal)
}

/// Multi-format mode: choose a format, then read and convert one color.
///
/// With `preset` the selector prompt is skipped and the given text is used
/// as the selector instead.
pub fn run_multi<R: BufRead, W: Write>(
    input: R,
    output: W,
    preset: Option<&str>,
) -> Result<LinearRgb, AppError> {
    let mut session = Session::new(input, output);
    session.line(TITLE)?;

    let format = match preset {
        Some(selector) => InputFormat::from_selector(selector)?,
        None => {
            session.line("Select the input format:")?;
            for format in InputFormat::ALL {
                session.line(&format!("  {format}"))?;
            }
            let selector = session.prompt(FORMAT_PROMPT, "format")?;
            InputFormat::from_selector(&selector)?
        }
    };
    tracing::debug!(?format, "Input format selected");

    session.convert(format)
}

struct Session<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn line(&mut self, text: &str) -> Result<(), AppError> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// Print `prompt` without a newline and read one line back.
    fn prompt(&mut self, prompt: &str, what: &'static str) -> Result<String, AppError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(AppError::UnexpectedEof(what));
        }
        let trimmed = line.strip_suffix('\n').unwrap_or(&line);
        let trimmed = trimmed.strip_suffix('\r').unwrap_or(trimmed);
        Ok(trimmed.to_string())
    }

    fn convert(&mut self, format: InputFormat) -> Result<LinearRgb, AppError> {
        self.line(format.instructions())?;
        let text = self.prompt(COLOR_PROMPT, "color")?;

        let encoded = format.parse(&text)?;
        tracing::debug!(?encoded, "Parsed sRGB color");

        let linear = LinearRgb::from(encoded);
        tracing::debug!(?linear, "Converted to linear RGB");

        self.line(&linear.to_string())?;
        Ok(linear)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_prompt_strips_crlf() {
        let mut output = Vec::new();
        let mut session = Session::new(Cursor::new("0 0 0\r\n"), &mut output);
        let line = session.prompt(COLOR_PROMPT, "color").unwrap();
        assert_eq!(line, "0 0 0");
    }

    #[test]
    fn test_prompt_without_newline_at_eof() {
        let mut output = Vec::new();
        let mut session = Session::new(Cursor::new("808080"), &mut output);
        let line = session.prompt(COLOR_PROMPT, "color").unwrap();
        assert_eq!(line, "808080");
    }

    #[test]
    fn test_prompt_empty_input_is_eof() {
        let mut output = Vec::new();
        let mut session = Session::new(Cursor::new(""), &mut output);
        let result = session.prompt(FORMAT_PROMPT, "format");
        assert!(matches!(result, Err(AppError::UnexpectedEof("format"))));
    }
}
