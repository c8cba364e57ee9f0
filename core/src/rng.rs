//! Deterministic random number generation.
//!
//! RULE: Nothing in the desk may call any platform RNG.
//! All randomness flows through DatasetRng instances derived
//! from the single master seed of the session.
//!
//! Each dataset gets its own RNG stream, seeded deterministically
//! from (master_seed XOR slot_index * golden ratio). This means:
//!   - Adding a new dataset never changes existing datasets' streams.
//!   - Changing the application count never shifts the trend series.

use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;

/// A named, deterministic RNG for a single dataset.
pub struct DatasetRng {
    pub name: &'static str,
    inner: Pcg64Mcg,
}

impl DatasetRng {
    /// Create a dataset RNG from the master seed and a stable
    /// slot index. The index must never change once assigned.
    pub fn new(master_seed: u64, slot_index: u64) -> Self {
        let derived_seed = master_seed ^ (slot_index.wrapping_mul(0x9e37_79b9_7f4a_7c15));
        Self {
            name: "unnamed",
            inner: Pcg64Mcg::seed_from_u64(derived_seed),
        }
    }

    pub fn with_name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// Roll a u64 in [0, n).
    pub fn next_u64_below(&mut self, n: u64) -> u64 {
        use rand::RngCore;
        assert!(n > 0, "n must be > 0");
        self.inner.next_u64() % n
    }

    /// Roll an integer in [low, high). Returns `low` for an empty range.
    pub fn range(&mut self, low: u32, high: u32) -> u32 {
        if high <= low {
            return low;
        }
        low + self.next_u64_below(u64::from(high - low)) as u32
    }

    /// Uniform pick from a non-empty slice.
    pub fn pick<T: Copy>(&mut self, items: &[T]) -> T {
        items[self.next_u64_below(items.len() as u64) as usize]
    }
}

/// All dataset RNGs for a single session, indexed by stable slot.
pub struct RngBank {
    master_seed: u64,
}

impl RngBank {
    pub fn new(master_seed: u64) -> Self {
        Self { master_seed }
    }

    pub fn for_slot(&self, slot: DatasetSlot) -> DatasetRng {
        DatasetRng::new(self.master_seed, slot as u64).with_name(slot.name())
    }
}

/// Stable dataset slot assignments.
/// NEVER reorder or remove entries; only append.
/// Reordering changes every dataset's seed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u64)]
pub enum DatasetSlot {
    Applications = 0,
    Trend = 1,
    // Add new datasets here, append only.
}

impl DatasetSlot {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Applications => "applications",
            Self::Trend => "trend",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_slot_same_stream() {
        let bank = RngBank::new(7);
        let mut a = bank.for_slot(DatasetSlot::Trend);
        let mut b = bank.for_slot(DatasetSlot::Trend);
        for _ in 0..32 {
            assert_eq!(a.next_u64_below(1_000_000), b.next_u64_below(1_000_000));
        }
    }

    #[test]
    fn slots_are_independent_streams() {
        let bank = RngBank::new(7);
        let mut apps = bank.for_slot(DatasetSlot::Applications);
        let mut trend = bank.for_slot(DatasetSlot::Trend);
        let a: Vec<u64> = (0..8).map(|_| apps.next_u64_below(u64::MAX)).collect();
        let t: Vec<u64> = (0..8).map(|_| trend.next_u64_below(u64::MAX)).collect();
        assert_ne!(a, t);
        assert_eq!(apps.name, "applications");
    }

    #[test]
    fn range_stays_in_bounds() {
        let mut rng = RngBank::new(99).for_slot(DatasetSlot::Applications);
        for _ in 0..1_000 {
            let v = rng.range(300, 1000);
            assert!((300..1000).contains(&v), "out of range: {v}");
        }
        assert_eq!(rng.range(5, 5), 5);
    }
}
