//! Textual reader: parenthesized prefix notation over whitespace-delimited
//! atoms.
//!
//! An atom made entirely of decimal digits is an integer; every other atom
//! is a symbol - there are no negative literals, `-5` reads as a symbol.
//! Semicolons start a comment running to the end of the line.

use crate::error::LispError;
use crate::value::Value;

pub struct Reader {
    input: Vec<char>,
    position: usize,
}

impl Reader {
    pub fn new(input: &str) -> Self {
        Reader {
            input: input.chars().collect(),
            position: 0,
        }
    }

    fn current_char(&self) -> char {
        if self.position < self.input.len() {
            self.input[self.position]
        } else {
            '\0'
        }
    }

    fn advance(&mut self) {
        if self.position < self.input.len() {
            self.position += 1;
        }
    }

    fn is_eof(&self) -> bool {
        self.position >= self.input.len()
    }

    fn skip_whitespace(&mut self) {
        loop {
            while !self.is_eof() && self.current_char().is_whitespace() {
                self.advance();
            }
            if self.current_char() == ';' {
                while !self.is_eof() && self.current_char() != '\n' {
                    self.advance();
                }
            } else {
                break;
            }
        }
    }

    /// Read the next value, or `None` once only whitespace and comments
    /// remain.
    pub fn next_value(&mut self) -> Result<Option<Value>, LispError> {
        self.skip_whitespace();
        if self.is_eof() {
            return Ok(None);
        }
        match self.current_char() {
            '(' => self.read_list().map(Some),
            ')' => Err(LispError::SyntaxError(
                ") found with no list to close".to_string(),
            )),
            _ => self.read_atom().map(Some),
        }
    }

    fn read_list(&mut self) -> Result<Value, LispError> {
        self.advance(); // consume '('
        let mut items = Vec::new();
        loop {
            self.skip_whitespace();
            if self.is_eof() {
                // Lets the driver keep collecting lines for an open list.
                return Err(LispError::UnexpectedEof);
            }
            match self.current_char() {
                ')' => {
                    self.advance();
                    return Ok(Value::list(items));
                }
                '(' => items.push(self.read_list()?),
                _ => items.push(self.read_atom()?),
            }
        }
    }

    fn read_atom(&mut self) -> Result<Value, LispError> {
        let start = self.position;
        while !self.is_eof()
            && !self.current_char().is_whitespace()
            && !matches!(self.current_char(), '(' | ')' | ';')
        {
            self.advance();
        }
        let text: String = self.input[start..self.position].iter().collect();
        if text.chars().all(|c| c.is_ascii_digit()) {
            text.parse::<i64>().map(Value::Integer).map_err(|_| {
                LispError::SyntaxError(format!("integer literal out of range: {text}"))
            })
        } else {
            Ok(Value::symbol(&text))
        }
    }
}

/// Read exactly one value; an all-whitespace buffer is a syntax error.
pub fn read_one(input: &str) -> Result<Value, LispError> {
    Reader::new(input)
        .next_value()?
        .ok_or_else(|| LispError::SyntaxError("empty input".to_string()))
}

/// Read every value in the buffer.
pub fn read_all(input: &str) -> Result<Vec<Value>, LispError> {
    let mut reader = Reader::new(input);
    let mut values = Vec::new();
    while let Some(value) = reader.next_value()? {
        values.push(value);
    }
    Ok(values)
}
