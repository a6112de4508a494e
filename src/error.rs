use crate::math::operation::Operation;
use thiserror::Error;

/// Failure to build a [`BigNum`](crate::math::BigNum) from decimal text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("cannot parse integer from empty string")]
    Empty,
    #[error("invalid digit '{found}'")]
    InvalidDigit {
        found: char,
        /// byte offset inside the parsed text
        position: usize,
    },
    #[error("memory allocation failed")]
    OutOfMemory,
}

/// Everything that can stop an RPN evaluation. Positions are character offsets.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    #[error("Invalid character '{ch}' at position {position}")]
    InvalidCharacter { ch: char, position: usize },
    #[error("Invalid number at position {position}: {source}")]
    InvalidNumber {
        position: usize,
        #[source]
        source: ParseError,
    },
    #[error("Unsupported operation '{op}' at position {position}")]
    UnsupportedOperation { op: Operation, position: usize },
    #[error("{}", insufficient_message(.op, .position))]
    InsufficientOperands {
        /// `None` when the input ended without producing a value.
        op: Option<Operation>,
        position: usize,
    },
    #[error("Operation symbol is missed: {remaining} values left on the stack")]
    MissingOperator { remaining: usize },
    #[error("Memory allocation failed")]
    OutOfMemory,
}

fn insufficient_message(op: &Option<Operation>, position: &usize) -> String {
    match op {
        Some(op) => format!("Insufficient operands for '{op}' at position {position}"),
        None => "No result".to_owned(),
    }
}

impl EvalError {
    pub fn position(&self) -> Option<usize> {
        match self {
            EvalError::InvalidCharacter { position, .. }
            | EvalError::InvalidNumber { position, .. }
            | EvalError::UnsupportedOperation { position, .. }
            | EvalError::InsufficientOperands { position, .. } => Some(*position),
            EvalError::MissingOperator { .. } => Some(0),
            EvalError::OutOfMemory => None,
        }
    }

    pub fn exit_code(&self) -> u8 {
        match self {
            EvalError::OutOfMemory => 2,
            _ => 1,
        }
    }
}
