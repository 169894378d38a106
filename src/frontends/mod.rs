//! Terminal front ends. Both take the session's [`InventoryClient`] as
//! explicit context and talk to the user through a [`Terminal`].
//!
//! [`InventoryClient`]: crate::clients::InventoryClient

pub mod form;
pub mod menu;

pub use form::*;
pub use menu::*;

use std::fmt::Display;
use std::io::{BufRead, Write};

use crate::inventory_actor::InventoryError;

/// Line-oriented user I/O over any reader/writer pair.
pub struct Terminal<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Prints `label` and reads one line. Returns `None` at end of input.
    pub fn prompt(&mut self, label: &str) -> Result<Option<String>, InventoryError> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    pub fn say(&mut self, text: impl Display) -> Result<(), InventoryError> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}

/// Parses a unit price. Must be a finite, non-negative number.
pub(crate) fn parse_price(field: &'static str, raw: &str) -> Result<f64, InventoryError> {
    match raw.trim().parse::<f64>() {
        Ok(price) if price.is_finite() && price >= 0.0 => Ok(price),
        _ => Err(InventoryError::InvalidNumber { field, value: raw.to_string() }),
    }
}

/// Parses a non-negative whole number such as a quantity or warranty period.
pub(crate) fn parse_count(field: &'static str, raw: &str) -> Result<u32, InventoryError> {
    raw.trim()
        .parse::<u32>()
        .map_err(|_| InventoryError::InvalidNumber { field, value: raw.to_string() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_prompt_strips_line_endings_and_reports_eof() {
        let mut terminal = Terminal::new(Cursor::new("first\r\nsecond\n"), Vec::new());
        assert_eq!(terminal.prompt("> ").unwrap().as_deref(), Some("first"));
        assert_eq!(terminal.prompt("> ").unwrap().as_deref(), Some("second"));
        assert_eq!(terminal.prompt("> ").unwrap(), None);

        let output = String::from_utf8(terminal.into_output()).unwrap();
        assert_eq!(output, "> > > ");
    }

    #[test]
    fn test_parse_numbers() {
        assert_eq!(parse_price("Price", " 2.5 "), Ok(2.5));
        assert_eq!(parse_count("Quantity", "4"), Ok(4));

        for bad in ["abc", "-1", "NaN", "inf", ""] {
            assert!(parse_price("Price", bad).is_err(), "accepted price {:?}", bad);
        }
        for bad in ["1.5", "-3", "x"] {
            assert_eq!(
                parse_count("Quantity", bad),
                Err(InventoryError::InvalidNumber { field: "Quantity", value: bad.to_string() })
            );
        }
    }
}
