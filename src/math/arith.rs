//! Schoolbook arithmetic over base 10^9 limbs.
//!
//! Every algorithm reserves its whole output buffer up front with a fallible
//! reservation, so allocation failure comes back as an error instead of an abort.

use std::cmp::Ordering;
use std::collections::TryReserveError;
use std::ops::{Add, Mul, Neg, Sub};

use num_traits::{CheckedAdd, CheckedMul, CheckedSub, One, Zero};

use super::bignum::{cmp_limbs, BigNum};
use super::limbs::{DoubleLimb, Limb, LimbBuffer, BASE};

/// |a| + |b|
pub fn add_magnitudes(a: &[Limb], b: &[Limb]) -> Result<LimbBuffer, TryReserveError> {
    let len = a.len().max(b.len());
    let mut out = LimbBuffer::try_with_capacity(len + 1)?;
    let mut carry: DoubleLimb = 0;
    let mut i = 0;
    while i < len || carry != 0 {
        let sum = carry
            + a.get(i).map_or(0, |&l| DoubleLimb::from(l))
            + b.get(i).map_or(0, |&l| DoubleLimb::from(l));
        out.push((sum % BASE) as Limb);
        carry = sum / BASE;
        i += 1;
    }
    Ok(out)
}

/// |a| - |b|, requires |a| >= |b|.
pub fn sub_magnitudes(a: &[Limb], b: &[Limb]) -> Result<LimbBuffer, TryReserveError> {
    debug_assert_ne!(cmp_limbs(a, b), Ordering::Less);
    let mut out = LimbBuffer::try_with_capacity(a.len())?;
    let mut borrow: i64 = 0;
    for (i, &limb) in a.iter().enumerate() {
        let mut diff = i64::from(limb) - borrow - b.get(i).map_or(0, |&l| i64::from(l));
        if diff < 0 {
            diff += BASE as i64;
            borrow = 1;
        } else {
            borrow = 0;
        }
        out.push(diff as Limb);
    }
    Ok(out)
}

/// |a| * |b|
pub fn mul_magnitudes(a: &[Limb], b: &[Limb]) -> Result<LimbBuffer, TryReserveError> {
    let mut out = LimbBuffer::try_with_capacity(a.len() + b.len())?;
    out.resize(a.len() + b.len());
    for (i, &ai) in a.iter().enumerate() {
        let ai = DoubleLimb::from(ai);
        let mut carry: DoubleLimb = 0;
        let mut j = 0;
        while j < b.len() || carry != 0 {
            let bj = b.get(j).map_or(0, |&l| DoubleLimb::from(l));
            let cur = DoubleLimb::from(out.get(i + j)) + ai * bj + carry;
            out.set(i + j, (cur % BASE) as Limb);
            carry = cur / BASE;
            j += 1;
        }
    }
    Ok(out)
}

fn add_signed(
    a: &[Limb],
    a_negative: bool,
    b: &[Limb],
    b_negative: bool,
) -> Result<BigNum, TryReserveError> {
    if a_negative == b_negative {
        return Ok(BigNum::from_limbs(add_magnitudes(a, b)?, a_negative));
    }
    match cmp_limbs(a, b) {
        Ordering::Equal => Ok(BigNum::zero()),
        Ordering::Greater => Ok(BigNum::from_limbs(sub_magnitudes(a, b)?, a_negative)),
        Ordering::Less => Ok(BigNum::from_limbs(sub_magnitudes(b, a)?, b_negative)),
    }
}

impl BigNum {
    pub fn try_add(&self, other: &Self) -> Result<Self, TryReserveError> {
        add_signed(self.limbs(), self.negative, other.limbs(), other.negative)
    }

    /// `self + (-other)`, reading `other` with its sign flipped instead of copying it.
    pub fn try_sub(&self, other: &Self) -> Result<Self, TryReserveError> {
        add_signed(self.limbs(), self.negative, other.limbs(), !other.negative)
    }

    pub fn try_mul(&self, other: &Self) -> Result<Self, TryReserveError> {
        let limbs = mul_magnitudes(self.limbs(), other.limbs())?;
        Ok(BigNum::from_limbs(limbs, self.negative != other.negative))
    }
}

impl CheckedAdd for BigNum {
    fn checked_add(&self, v: &Self) -> Option<Self> {
        self.try_add(v).ok()
    }
}

impl CheckedSub for BigNum {
    fn checked_sub(&self, v: &Self) -> Option<Self> {
        self.try_sub(v).ok()
    }
}

impl CheckedMul for BigNum {
    fn checked_mul(&self, v: &Self) -> Option<Self> {
        self.try_mul(v).ok()
    }
}

// The operator impls treat allocation failure the way std collections do.
macro_rules! forward_binop {
    ($trait:ident, $method:ident, $try:ident) => {
        impl<'a> $trait<&'a BigNum> for &'a BigNum {
            type Output = BigNum;

            fn $method(self, rhs: &'a BigNum) -> BigNum {
                match self.$try(rhs) {
                    Ok(n) => n,
                    Err(e) => panic!("limb allocation failed: {e}"),
                }
            }
        }

        impl $trait<BigNum> for BigNum {
            type Output = BigNum;

            fn $method(self, rhs: BigNum) -> BigNum {
                (&self).$method(&rhs)
            }
        }
    };
}

forward_binop!(Add, add, try_add);
forward_binop!(Sub, sub, try_sub);
forward_binop!(Mul, mul, try_mul);

impl Neg for BigNum {
    type Output = BigNum;

    fn neg(mut self) -> BigNum {
        self.negative = !self.negative && !self.is_zero();
        self
    }
}

impl Zero for BigNum {
    fn zero() -> Self {
        BigNum::zero()
    }

    fn is_zero(&self) -> bool {
        BigNum::is_zero(self)
    }
}

impl One for BigNum {
    fn one() -> Self {
        BigNum::from(1u64)
    }
}
