//! Line-based prompting and the numeric validation helpers.
//!
//! Every helper loops until it gets something usable, so invalid input never
//! escapes as an error. The only way out of a loop other than valid input is
//! end of input, reported as [`MoviesError::InputClosed`].

use super::styles::{INVALID, PROMPT};
use movies::error::{MoviesError, Result};
use std::io::{BufRead, Write};
use std::str::FromStr;

pub struct Console<'io> {
    input: &'io mut dyn BufRead,
    output: &'io mut dyn Write,
}

fn parse_number<T: FromStr>(raw: &str) -> Option<T> {
    raw.trim().parse().ok()
}

pub fn parse_int(raw: &str) -> Option<i32> {
    parse_number(raw)
}

/// Finite floats only: the store cannot hold NaN or infinities.
pub fn parse_float(raw: &str) -> Option<f64> {
    parse_number::<f64>(raw).filter(|f| f.is_finite())
}

fn is_blank(raw: &str) -> bool {
    raw.trim().is_empty()
}

fn int_retry(raw: &str) -> String {
    format!(
        "{}{}",
        PROMPT.apply_to(format!("'{}'", raw)),
        INVALID.apply_to(" is not an Integer Number. Please enter an Integer: ")
    )
}

fn rating_retry(raw: &str) -> String {
    format!(
        "{}{}",
        PROMPT.apply_to(format!("'{}'", raw)),
        INVALID.apply_to(" is not a Number. Please enter a Number (0 to 10): ")
    )
}

fn number_retry(raw: &str) -> String {
    format!(
        "{}{}",
        PROMPT.apply_to(format!("'{}'", raw)),
        INVALID.apply_to(" is not a Number. Please enter a Number: ")
    )
}

impl<'io> Console<'io> {
    pub fn new(input: &'io mut dyn BufRead, output: &'io mut dyn Write) -> Self {
        Self { input, output }
    }

    pub fn out(&mut self) -> &mut dyn Write {
        &mut *self.output
    }

    /// Prints `prompt` (no newline) and reads one line without its terminator.
    pub fn read_line(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(MoviesError::InputClosed);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(line)
    }

    pub fn read_non_empty(&mut self, prompt: &str) -> Result<String> {
        loop {
            let line = self.read_line(prompt)?;
            if !line.is_empty() {
                return Ok(line);
            }
        }
    }

    fn validate<T>(
        &mut self,
        mut raw: String,
        parse: fn(&str) -> Option<T>,
        retry: fn(&str) -> String,
    ) -> Result<T> {
        loop {
            if let Some(value) = parse(&raw) {
                return Ok(value);
            }
            raw = self.read_line(&retry(&raw))?;
        }
    }

    // Blank means "no value" here instead of being rejected.
    fn validate_optional<T>(
        &mut self,
        mut raw: String,
        parse: fn(&str) -> Option<T>,
        retry: fn(&str) -> String,
    ) -> Result<Option<T>> {
        loop {
            if let Some(value) = parse(&raw) {
                return Ok(Some(value));
            }
            if is_blank(&raw) {
                return Ok(None);
            }
            raw = self.read_line(&retry(&raw))?;
        }
    }

    pub fn validate_int(&mut self, raw: String) -> Result<i32> {
        self.validate(raw, parse_int, int_retry)
    }

    pub fn validate_optional_int(&mut self, raw: String) -> Result<Option<i32>> {
        self.validate_optional(raw, parse_int, int_retry)
    }

    pub fn validate_float(&mut self, raw: String) -> Result<f64> {
        self.validate(raw, parse_float, rating_retry)
    }

    pub fn validate_optional_float(&mut self, raw: String) -> Result<Option<f64>> {
        self.validate_optional(raw, parse_float, number_retry)
    }

    pub fn read_int(&mut self, prompt: &str) -> Result<i32> {
        let raw = self.read_line(prompt)?;
        self.validate_int(raw)
    }

    pub fn read_float(&mut self, prompt: &str) -> Result<f64> {
        let raw = self.read_line(prompt)?;
        self.validate_float(raw)
    }

    /// Asks until the answer is Y/y (true) or N/n (false).
    pub fn read_yes_no(&mut self, prompt: &str) -> Result<bool> {
        loop {
            match self.read_line(prompt)?.as_str() {
                "Y" | "y" => return Ok(true),
                "N" | "n" => return Ok(false),
                _ => writeln!(self.output, "Please enter \"Y\" or \"N\"")?,
            }
        }
    }
}
