/// Conventional starting value for [`combine`].
pub const CHECKSUM_SEED: i32 = 1;

/// Fixed-width field hash compatible with the JVM `hashCode` contract.
///
/// Checksums built from these values match stored JVM checksums bit for bit.
pub trait StableHash {
    fn stable_hash(&self) -> i32;
}

impl StableHash for i32 {
    fn stable_hash(&self) -> i32 {
        *self
    }
}

impl StableHash for u32 {
    fn stable_hash(&self) -> i32 {
        *self as i32
    }
}

impl StableHash for i64 {
    fn stable_hash(&self) -> i32 {
        let bits = *self as u64;
        (bits ^ (bits >> 32)) as i32
    }
}

impl StableHash for bool {
    fn stable_hash(&self) -> i32 {
        if *self {
            1231
        } else {
            1237
        }
    }
}

impl StableHash for str {
    fn stable_hash(&self) -> i32 {
        // Polynomial over UTF-16 code units.
        self.encode_utf16()
            .fold(0i32, |acc, unit| acc.wrapping_mul(31).wrapping_add(i32::from(unit)))
    }
}

impl StableHash for String {
    fn stable_hash(&self) -> i32 {
        self.as_str().stable_hash()
    }
}

/// `None` contributes the same as an empty string.
impl<T: StableHash> StableHash for Option<T> {
    fn stable_hash(&self) -> i32 {
        self.as_ref().map_or(0, StableHash::stable_hash)
    }
}

impl<T: StableHash + ?Sized> StableHash for &T {
    fn stable_hash(&self) -> i32 {
        (**self).stable_hash()
    }
}

/// Incremental order-sensitive checksum: `acc = 31 * acc + hash(field)`, wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checksum(i32);

impl Checksum {
    pub fn new(seed: i32) -> Self {
        Self(seed)
    }

    #[must_use]
    pub fn field<T: StableHash + ?Sized>(self, value: &T) -> Self {
        Self(self.0.wrapping_mul(31).wrapping_add(value.stable_hash()))
    }

    pub fn finish(self) -> i32 {
        self.0
    }
}

impl Default for Checksum {
    fn default() -> Self {
        Self::new(CHECKSUM_SEED)
    }
}

/// Folds `fields` into `seed` in order.
pub fn combine(seed: i32, fields: &[&dyn StableHash]) -> i32 {
    fields
        .iter()
        .fold(Checksum::new(seed), |acc, field| acc.field(*field))
        .finish()
}

/// Checksum of a single string field, seeded with [`CHECKSUM_SEED`].
pub fn checksum_str(value: &str) -> i32 {
    Checksum::default().field(value).finish()
}
