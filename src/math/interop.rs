//! Conversions to and from `num_bigint::BigInt`, used to cross-check the arithmetic.

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{ToPrimitive, Zero};

use super::limbs::{Limb, LimbBuffer, BASE};
use super::BigNum;

impl From<&BigNum> for BigInt {
    fn from(n: &BigNum) -> Self {
        let base = BigUint::from(BASE);
        let magnitude = n
            .limbs()
            .iter()
            .rev()
            .fold(BigUint::zero(), |acc, &limb| acc * &base + limb);
        let sign = if n.is_negative() { Sign::Minus } else { Sign::Plus };
        BigInt::from_biguint(sign, magnitude)
    }
}

impl From<&BigInt> for BigNum {
    fn from(n: &BigInt) -> Self {
        let base = BigUint::from(BASE);
        let mut magnitude = n.magnitude().clone();
        let mut limbs = LimbBuffer::new();
        loop {
            let limb = (&magnitude % &base).to_u32().unwrap_or_default() as Limb;
            limbs.push(limb);
            magnitude /= &base;
            if magnitude.is_zero() {
                break;
            }
        }
        BigNum::from_limbs(limbs, n.sign() == Sign::Minus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::quickcheck;

    #[test]
    fn known_values() {
        let big: BigInt = "-123456789012345678901234567890".parse().unwrap();
        let n = BigNum::from(&big);
        assert_eq!(n.to_string(), "-123456789012345678901234567890");
        assert_eq!(BigInt::from(&n), big);
        assert_eq!(BigNum::from(&BigInt::zero()), BigNum::zero());
    }

    quickcheck! {
        fn conversion_round_trip(n: BigNum) -> bool {
            let big = BigInt::from(&n);
            big.to_string() == n.to_string() && BigNum::from(&big) == n
        }
    }
}
