use std::collections::TryReserveError;

/// One base 10^9 digit group.
pub type Limb = u32;
/// Wide enough for `(BASE - 1)^2 + (BASE - 1) + carry`.
pub type DoubleLimb = u64;

pub const BASE: DoubleLimb = 1_000_000_000;
pub const DIGITS_PER_LIMB: usize = 9;

/// Growable storage for limbs, least significant first.
///
/// Out of range reads give 0 and out of range writes do nothing, callers keep
/// their indices in bounds. Shrinking never gives memory back.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct LimbBuffer {
    data: Vec<Limb>,
}

impl LimbBuffer {
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Empty buffer with room for `capacity` limbs, failing instead of aborting.
    pub fn try_with_capacity(capacity: usize) -> Result<Self, TryReserveError> {
        let mut buf = Self::new();
        buf.try_reserve(capacity)?;
        Ok(buf)
    }

    pub fn try_reserve(&mut self, additional: usize) -> Result<(), TryReserveError> {
        self.data.try_reserve(additional)
    }

    pub fn push(&mut self, value: Limb) {
        self.data.push(value);
    }

    pub fn pop(&mut self) -> Limb {
        self.data.pop().unwrap_or_default()
    }

    pub fn get(&self, index: usize) -> Limb {
        self.data.get(index).copied().unwrap_or_default()
    }

    pub fn set(&mut self, index: usize, value: Limb) {
        if let Some(slot) = self.data.get_mut(index) {
            *slot = value;
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn last(&self) -> Option<Limb> {
        self.data.last().copied()
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Pads with zeros when growing, truncates when shrinking.
    pub fn resize(&mut self, new_len: usize) {
        self.data.resize(new_len, 0);
    }

    pub fn as_slice(&self) -> &[Limb] {
        &self.data
    }
}

impl From<Vec<Limb>> for LimbBuffer {
    fn from(data: Vec<Limb>) -> Self {
        Self { data }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_pop_and_defaults() {
        let mut buf = LimbBuffer::new();
        assert!(buf.is_empty());
        assert_eq!(buf.pop(), 0);

        buf.push(7);
        buf.push(11);
        assert_eq!(buf.len(), 2);
        assert_eq!(buf.last(), Some(11));
        assert_eq!(buf.pop(), 11);
        assert_eq!(buf.as_slice(), &[7]);
    }

    #[test]
    fn out_of_range_access_is_silent() {
        let mut buf = LimbBuffer::from(vec![1, 2, 3]);
        assert_eq!(buf.get(3), 0);
        buf.set(10, 99);
        assert_eq!(buf.as_slice(), &[1, 2, 3]);
        buf.set(1, 42);
        assert_eq!(buf.get(1), 42);
    }

    #[test]
    fn resize_pads_and_truncates() {
        let mut buf = LimbBuffer::from(vec![5]);
        buf.resize(4);
        assert_eq!(buf.as_slice(), &[5, 0, 0, 0]);
        buf.resize(1);
        assert_eq!(buf.as_slice(), &[5]);
    }

    #[test]
    fn clear_keeps_capacity() {
        let mut buf = LimbBuffer::try_with_capacity(64).unwrap();
        for i in 0..64 {
            buf.push(i);
        }
        let capacity = buf.data.capacity();
        buf.clear();
        assert!(buf.is_empty());
        assert_eq!(buf.data.capacity(), capacity);
    }

    #[test]
    fn clone_is_independent() {
        let mut a = LimbBuffer::from(vec![1, 2]);
        let b = a.clone();
        a.set(0, 9);
        assert_eq!(b.as_slice(), &[1, 2]);
    }
}
