use std::fmt::{self, Write};
use std::str::FromStr;

use super::{
    limbs::{Limb, LimbBuffer, DIGITS_PER_LIMB},
    BigNum,
};
use crate::error::ParseError;

// only plain b10 integers: optional '-', then digits
pub fn parse(s: &str) -> Result<BigNum, ParseError> {
    let (negative, digits_at) = match s.strip_prefix('-') {
        Some(_) => (true, 1),
        None => (false, 0),
    };
    let digits = &s[digits_at..];
    if digits.is_empty() {
        return Err(ParseError::Empty);
    }
    if let Some((i, found)) = digits.char_indices().find(|(_, c)| !c.is_ascii_digit()) {
        return Err(ParseError::InvalidDigit {
            found,
            position: digits_at + i,
        });
    }

    // leading zeros, but keep one digit so "000" still reads as zero
    let significant = digits.trim_start_matches('0');
    let significant = if significant.is_empty() { "0" } else { significant };

    let chunks = significant.as_bytes().rchunks(DIGITS_PER_LIMB);
    let mut limbs =
        LimbBuffer::try_with_capacity(chunks.len()).map_err(|_| ParseError::OutOfMemory)?;
    for chunk in chunks {
        let limb = chunk
            .iter()
            .fold(0 as Limb, |acc, d| acc * 10 + Limb::from(d - b'0'));
        limbs.push(limb);
    }

    Ok(BigNum::from_limbs(limbs, negative))
}

pub fn fmt(n: &BigNum) -> String {
    let mut out = String::with_capacity(n.limbs().len() * DIGITS_PER_LIMB + 1);
    // writing into a String cannot fail
    let _ = write_decimal(n, &mut out);
    out
}

fn write_decimal<W: Write>(n: &BigNum, out: &mut W) -> fmt::Result {
    if n.is_negative() && !n.is_zero() {
        out.write_char('-')?;
    }
    let mut limbs = n.limbs().iter().rev();
    if let Some(top) = limbs.next() {
        write!(out, "{top}")?;
    }
    for limb in limbs {
        write!(out, "{limb:09}")?;
    }
    Ok(())
}

impl FromStr for BigNum {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

impl fmt::Display for BigNum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_decimal(self, f)
    }
}
