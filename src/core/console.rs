use std::io::{BufRead, Write};

use tracing::trace;

use crate::core::error::{KinematicsError, Result};

/// Drops `_` separators that sit between two digits (`1_000`). Any other
/// underscore is left in place so the parse rejects it.
fn strip_digit_separators(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    chars
        .iter()
        .enumerate()
        .filter(|&(i, &c)| {
            let between_digits = i > 0
                && chars[i - 1].is_ascii_digit()
                && chars.get(i + 1).is_some_and(|next| next.is_ascii_digit());
            !(c == '_' && between_digits)
        })
        .map(|(_, &c)| c)
        .collect()
}

pub fn parse_f64(value: &str) -> Result<f64> {
    let trimmed = value.trim();
    strip_digit_separators(trimmed)
        .parse::<f64>()
        .map_err(|source| KinematicsError::Parse {
            input: trimmed.to_string(),
            source,
        })
}

/// Prints `prompt` without a newline and parses the next line of `input`.
///
/// There is no retry: a line that isn't a number is returned as an error.
pub fn read_f64<R, W>(input: &mut R, output: &mut W, prompt: &str) -> Result<f64>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut line = String::new();
    let bytes = input.read_line(&mut line)?;
    if bytes == 0 {
        return Err(KinematicsError::UnexpectedEof);
    }
    trace!(line = line.trim_end(), "read console line");

    parse_f64(&line)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::{parse_f64, read_f64};
    use crate::core::error::KinematicsError;

    #[test]
    fn parses_surrounding_whitespace() {
        assert_eq!(parse_f64("  12.5\n").expect("valid number"), 12.5);
        assert_eq!(parse_f64("-3").expect("valid number"), -3.0);
        assert_eq!(parse_f64("1e3").expect("valid number"), 1000.0);
    }

    #[test]
    fn accepts_underscores_between_digits() {
        assert_eq!(parse_f64("1_000").expect("separated digits"), 1000.0);
        assert_eq!(parse_f64("2_5.0_5").expect("separated digits"), 25.05);
        assert_eq!(parse_f64("1e1_0").expect("separated exponent"), 1e10);
    }

    #[test]
    fn rejects_misplaced_underscores() {
        for text in ["_1", "1_", "1__0", "1_.5", "1._5"] {
            assert!(
                matches!(parse_f64(text), Err(KinematicsError::Parse { .. })),
                "text={text}"
            );
        }
    }

    #[test]
    fn reports_the_rejected_text() {
        let err = parse_f64("five\n").expect_err("not a number");

        assert_eq!(err.to_string(), "could not convert string to float: 'five'");
    }

    #[test]
    fn prompt_is_written_before_reading() {
        let mut input = Cursor::new("42\n");
        let mut output = Vec::new();
        let value = read_f64(&mut input, &mut output, "Value: ").expect("valid number");

        assert_eq!(value, 42.0);
        assert_eq!(String::from_utf8(output).expect("utf8"), "Value: ");
    }

    #[test]
    fn closed_input_is_an_error() {
        let mut input = Cursor::new("");
        let mut output = Vec::new();
        let err = read_f64(&mut input, &mut output, "Value: ").expect_err("no input");

        assert!(matches!(err, KinematicsError::UnexpectedEof));
    }
}
