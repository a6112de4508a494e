use super::limbs::{DoubleLimb, Limb, LimbBuffer, BASE};
use std::cmp::Ordering;

#[cfg(test)]
use quickcheck::{Arbitrary, Gen};

/// Signed arbitrary precision integer in base 10^9.
///
/// Always normalized: at least one limb, no high order zero limbs, and zero
/// is never negative. That makes the derived equality and hashing exact.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BigNum {
    pub(crate) limbs: LimbBuffer,
    pub(crate) negative: bool,
}

impl Default for BigNum {
    fn default() -> Self {
        Self::zero()
    }
}

impl BigNum {
    pub fn zero() -> Self {
        Self {
            limbs: LimbBuffer::from(vec![0]),
            negative: false,
        }
    }

    /// Builds a value from raw limbs, least significant first. Every limb must be below 10^9.
    pub(crate) fn from_limbs(limbs: LimbBuffer, negative: bool) -> Self {
        debug_assert!(limbs.as_slice().iter().all(|&l| (l as DoubleLimb) < BASE));
        let mut n = Self { limbs, negative };
        n.normalize();
        n
    }

    /// Trims high order zero limbs down to a single limb and clears the sign of zero.
    pub fn normalize(&mut self) {
        while self.limbs.len() > 1 && self.limbs.last() == Some(0) {
            self.limbs.pop();
        }
        if self.limbs.is_empty() {
            self.limbs.push(0);
        }
        if self.is_zero() {
            self.negative = false;
        }
    }

    pub fn is_zero(&self) -> bool {
        self.limbs.len() == 1 && self.limbs.get(0) == 0
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    pub fn limbs(&self) -> &[Limb] {
        self.limbs.as_slice()
    }

    /// Compares absolute values. Limb count decides first since both sides are normalized.
    pub fn cmp_magnitude(&self, other: &Self) -> Ordering {
        cmp_limbs(self.limbs(), other.limbs())
    }
}

pub(crate) fn cmp_limbs(a: &[Limb], b: &[Limb]) -> Ordering {
    a.len()
        .cmp(&b.len())
        .then_with(|| a.iter().rev().cmp(b.iter().rev()))
}

impl Ord for BigNum {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => self.cmp_magnitude(other),
            (true, true) => self.cmp_magnitude(other).reverse(),
        }
    }
}

impl PartialOrd for BigNum {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<u64> for BigNum {
    fn from(mut value: u64) -> Self {
        let mut limbs = LimbBuffer::new();
        if value == 0 {
            limbs.push(0);
        }
        while value > 0 {
            limbs.push((value % BASE) as Limb);
            value /= BASE;
        }
        Self::from_limbs(limbs, false)
    }
}

impl From<i64> for BigNum {
    fn from(value: i64) -> Self {
        let mut n = Self::from(value.unsigned_abs());
        n.negative = value < 0;
        n
    }
}

#[cfg(test)]
impl Arbitrary for BigNum {
    fn arbitrary(g: &mut Gen) -> Self {
        let limbs: Vec<Limb> = Vec::<Limb>::arbitrary(g)
            .into_iter()
            .map(|l| l % BASE as Limb)
            .collect();
        Self::from_limbs(LimbBuffer::from(limbs), bool::arbitrary(g))
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let negative = self.negative;
        Box::new(
            self.limbs()
                .to_vec()
                .shrink()
                .map(move |limbs| Self::from_limbs(LimbBuffer::from(limbs), negative)),
        )
    }
}
