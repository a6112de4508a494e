//! Reverse Polish Notation evaluation over [`BigNum`] values.

use num_traits::ops::checked::*;
use tracing::{debug, trace};

use crate::error::{EvalError, ParseError};
use crate::math::{operation::Operation, BigNum};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token<'a> {
    /// Optional '-' followed by ASCII digits.
    Number { text: &'a str, position: usize },
    Operator { op: Operation, position: usize },
}

/// ASCII space, \t, \n, \x0b, \x0c and \r. Unicode spaces are not separators.
fn is_space(c: char) -> bool {
    c.is_ascii_whitespace() || c == '\x0b'
}

/// Splits an expression into tokens. Stops after the first bad character.
pub struct Tokenizer<'a> {
    input: &'a str,
    /// byte offset into `input`
    offset: usize,
    /// character offset, used for error reporting
    position: usize,
    failed: bool,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            offset: 0,
            position: 0,
            failed: false,
        }
    }

    fn rest(&self) -> &'a str {
        &self.input[self.offset..]
    }

    fn advance(&mut self, bytes: usize, chars: usize) {
        self.offset += bytes;
        self.position += chars;
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.rest().chars().next().filter(|&c| is_space(c)) {
            self.advance(c.len_utf8(), 1);
        }
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Result<Token<'a>, EvalError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        self.skip_whitespace();

        let rest = self.rest();
        let mut chars = rest.chars();
        let first = chars.next()?;
        let position = self.position;

        let signed = first == '-' && chars.next().is_some_and(|c| c.is_ascii_digit());
        if first.is_ascii_digit() || signed {
            let sign_len = usize::from(signed);
            // all ascii, so bytes and characters line up
            let len = sign_len
                + rest[sign_len..]
                    .bytes()
                    .take_while(u8::is_ascii_digit)
                    .count();
            self.advance(len, len);
            return Some(Ok(Token::Number {
                text: &rest[..len],
                position,
            }));
        }

        if let Some(op) = Operation::from_char(first) {
            self.advance(first.len_utf8(), 1);
            return Some(Ok(Token::Operator { op, position }));
        }

        self.failed = true;
        Some(Err(EvalError::InvalidCharacter {
            ch: first,
            position,
        }))
    }
}

/// LIFO of operands. Every push reserves fallibly.
#[derive(Debug, Default)]
struct OperandStack {
    items: Vec<BigNum>,
}

impl OperandStack {
    fn push(&mut self, n: BigNum) -> Result<(), EvalError> {
        self.items
            .try_reserve(1)
            .map_err(|_| EvalError::OutOfMemory)?;
        self.items.push(n);
        Ok(())
    }

    /// Pops `b` (top) then `a`, returned as `(a, b)`.
    fn pop_pair(&mut self) -> Option<(BigNum, BigNum)> {
        if self.items.len() < 2 {
            return None;
        }
        let b = self.items.pop()?;
        let a = self.items.pop()?;
        Some((a, b))
    }

    fn finish(mut self) -> Result<BigNum, EvalError> {
        let remaining = self.items.len();
        match self.items.pop() {
            None => Err(EvalError::InsufficientOperands {
                op: None,
                position: 0,
            }),
            Some(result) if remaining == 1 => Ok(result),
            Some(_) => Err(EvalError::MissingOperator { remaining }),
        }
    }
}

fn parse_number(text: &str, position: usize) -> Result<BigNum, EvalError> {
    text.parse().map_err(|source| match source {
        ParseError::OutOfMemory => EvalError::OutOfMemory,
        source => EvalError::InvalidNumber { position, source },
    })
}

fn apply(stack: &mut OperandStack, op: Operation, position: usize) -> Result<BigNum, EvalError> {
    // division is rejected before the stack is touched
    let checked: fn(&BigNum, &BigNum) -> Option<BigNum> = match op {
        Operation::Add => CheckedAdd::checked_add,
        Operation::Sub => CheckedSub::checked_sub,
        Operation::Mul => CheckedMul::checked_mul,
        Operation::Div => return Err(EvalError::UnsupportedOperation { op, position }),
    };
    let (a, b) = stack.pop_pair().ok_or(EvalError::InsufficientOperands {
        op: Some(op),
        position,
    })?;
    trace!(%a, %b, %op, position, "applying operator");

    checked(&a, &b).ok_or(EvalError::OutOfMemory)
}

/// Evaluates a whole expression, returning the single value left on the stack.
pub fn evaluate(expression: &str) -> Result<BigNum, EvalError> {
    let mut stack = OperandStack::default();
    for token in Tokenizer::new(expression) {
        match token? {
            Token::Number { text, position } => {
                trace!(text, position, "number");
                stack.push(parse_number(text, position)?)?;
            }
            Token::Operator { op, position } => {
                let result = apply(&mut stack, op, position)?;
                stack.push(result)?;
            }
        }
    }
    debug!(depth = stack.items.len(), "input exhausted");
    stack.finish()
}
