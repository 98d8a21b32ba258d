//! Structural hashing over the same field model the codecs use.
//!
//! Hashes combine per-field values with small odd multipliers; an absent
//! optional field contributes a fixed 0 sentinel so presence itself is part
//! of the hash. Floats hash by bit pattern (structural equality on payloads
//! is `PartialEq`, so the usual `Hash`/`Eq` pairing does not apply here).

use chrono::{DateTime, Utc};

use super::Seconds;

pub const SEED: u64 = 17;

/// One combining step: `h * 31 + field`.
pub fn combine(h: u64, field: u64) -> u64 {
    h.wrapping_mul(31).wrapping_add(field)
}

pub fn hash_str(s: &str) -> u64 {
    s.bytes().fold(SEED, |h, b| combine(h, u64::from(b)))
}

pub trait WireHash {
    fn wire_hash(&self) -> u64;
}

macro_rules! int_hash {
    ($($ty:ty),*) => {$(
        impl WireHash for $ty {
            fn wire_hash(&self) -> u64 {
                *self as u64
            }
        }
    )*};
}

int_hash!(u32, u64, i32, i64, usize);

impl WireHash for bool {
    fn wire_hash(&self) -> u64 {
        u64::from(*self)
    }
}

impl WireHash for f32 {
    fn wire_hash(&self) -> u64 {
        u64::from(self.to_bits())
    }
}

impl WireHash for f64 {
    fn wire_hash(&self) -> u64 {
        self.to_bits()
    }
}

impl WireHash for String {
    fn wire_hash(&self) -> u64 {
        hash_str(self)
    }
}

impl WireHash for DateTime<Utc> {
    fn wire_hash(&self) -> u64 {
        self.timestamp_micros() as u64
    }
}

impl WireHash for Seconds {
    fn wire_hash(&self) -> u64 {
        u64::from(self.0)
    }
}

impl<T: WireHash> WireHash for Option<T> {
    fn wire_hash(&self) -> u64 {
        match self {
            None => 0,
            Some(v) => v.wire_hash(),
        }
    }
}

impl<T: WireHash> WireHash for Vec<T> {
    fn wire_hash(&self) -> u64 {
        self.iter().fold(SEED, |h, v| combine(h, v.wire_hash()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_optional_hashes_to_sentinel() {
        assert_eq!(None::<u32>.wire_hash(), 0);
        // An empty-but-present string still differs from absent.
        assert_ne!(Some(String::new()).wire_hash(), None::<String>.wire_hash());
    }

    #[test]
    fn sequences_hash_in_order() {
        let ab = vec!["a".to_string(), "b".to_string()];
        let ba = vec!["b".to_string(), "a".to_string()];
        assert_ne!(ab.wire_hash(), ba.wire_hash());
    }

    #[test]
    fn string_hash_is_stable() {
        assert_eq!(hash_str("Available"), hash_str("Available"));
        assert_ne!(hash_str("Available"), hash_str("Unavailable"));
    }
}
