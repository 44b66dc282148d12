//! Compiled date patterns for day-key parsing and formatting.

use crate::date::Date;
use crate::error::CalendarError;

/// One element of a compiled pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    /// Four-digit year (`YYYY`).
    Year,
    /// Two-digit month (`MM`).
    Month,
    /// Two-digit day (`DD`).
    Day,
    /// A run of literal separator characters.
    Literal(String),
}

/// A compiled date pattern built from `YYYY`, `MM`, and `DD` tokens plus
/// literal separators, e.g. `YYYY-MM-DD` or `DD/MM/YYYY`.
///
/// Each of the three tokens must appear exactly once. The same compiled
/// pattern drives both [`parse`](DatePattern::parse) and
/// [`format`](DatePattern::format), so a formatted date always round-trips.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatePattern {
    pattern: String,
    tokens: Vec<Token>,
}

impl DatePattern {
    /// Compiles a pattern string.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidPattern`] if any of `YYYY`, `MM`,
    /// `DD` is missing or repeated.
    pub fn parse_pattern(pattern: &str) -> Result<Self, CalendarError> {
        let mut tokens = Vec::new();
        let mut rest = pattern;
        let mut counts = [0usize; 3];

        while !rest.is_empty() {
            if let Some(tail) = rest.strip_prefix("YYYY") {
                counts[0] += 1;
                tokens.push(Token::Year);
                rest = tail;
            } else if let Some(tail) = rest.strip_prefix("MM") {
                counts[1] += 1;
                tokens.push(Token::Month);
                rest = tail;
            } else if let Some(tail) = rest.strip_prefix("DD") {
                counts[2] += 1;
                tokens.push(Token::Day);
                rest = tail;
            } else {
                let mut chars = rest.chars();
                let c = chars.next().expect("rest is non-empty");
                match tokens.last_mut() {
                    Some(Token::Literal(lit)) => lit.push(c),
                    _ => tokens.push(Token::Literal(c.to_string())),
                }
                rest = chars.as_str();
            }
        }

        for (count, name) in counts.iter().zip(["YYYY", "MM", "DD"]) {
            if *count != 1 {
                return Err(CalendarError::InvalidPattern {
                    pattern: pattern.to_string(),
                    reason: format!("token {name} must appear exactly once (found {count})"),
                });
            }
        }

        Ok(Self {
            pattern: pattern.to_string(),
            tokens,
        })
    }

    /// Returns the original pattern string.
    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    /// Parses a date string under this pattern.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::UnparseableDate`] if the string does not
    /// match the pattern shape, or a validation error if the matched
    /// numbers do not form a real calendar date.
    pub fn parse(&self, input: &str) -> Result<Date, CalendarError> {
        let mut rest = input;
        let mut year = 0i32;
        let mut month = 0u8;
        let mut day = 0u8;

        for token in &self.tokens {
            match token {
                Token::Year => year = take_digits(&mut rest, 4, input, "year")? as i32,
                Token::Month => month = take_digits(&mut rest, 2, input, "month")? as u8,
                Token::Day => day = take_digits(&mut rest, 2, input, "day")? as u8,
                Token::Literal(lit) => {
                    rest = rest.strip_prefix(lit.as_str()).ok_or_else(|| {
                        CalendarError::UnparseableDate {
                            input: input.to_string(),
                            reason: format!("expected literal '{lit}' ({})", self.pattern),
                        }
                    })?;
                }
            }
        }

        if !rest.is_empty() {
            return Err(CalendarError::UnparseableDate {
                input: input.to_string(),
                reason: format!("trailing characters '{rest}' after pattern {}", self.pattern),
            });
        }

        Date::new(year, month, day)
    }

    /// Formats a date under this pattern, producing the canonical day key.
    pub fn format(&self, date: Date) -> String {
        let mut out = String::with_capacity(self.pattern.len());
        for token in &self.tokens {
            match token {
                Token::Year => out.push_str(&format!("{:04}", date.year())),
                Token::Month => out.push_str(&format!("{:02}", date.month())),
                Token::Day => out.push_str(&format!("{:02}", date.day())),
                Token::Literal(lit) => out.push_str(lit),
            }
        }
        out
    }
}

/// Consumes exactly `n` ASCII digits from the front of `rest`.
fn take_digits(
    rest: &mut &str,
    n: usize,
    input: &str,
    field: &str,
) -> Result<u32, CalendarError> {
    let prefix = rest.get(..n).filter(|p| p.bytes().all(|b| b.is_ascii_digit()));
    let Some(prefix) = prefix else {
        return Err(CalendarError::UnparseableDate {
            input: input.to_string(),
            reason: format!("expected {n}-digit {field}"),
        });
    };
    let value = prefix.parse::<u32>().expect("prefix is all ASCII digits");
    *rest = &rest[n..];
    Ok(value)
}
