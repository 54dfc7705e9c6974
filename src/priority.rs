//! Sources of node priorities.
//!
//! A treap stays balanced in expectation only if priorities are drawn independently of the keys.
//! `RandomPriority` is the default source. Seeding it makes the shape of a treap, and therefore
//! every rotation it performs, reproducible.

use rand::{Rng, SeedableRng, XorShiftRng};

/// The smallest priority drawn by `RandomPriority::new`.
pub const DEFAULT_MIN_PRIORITY: u32 = 1;

/// The largest priority drawn by `RandomPriority::new`.
pub const DEFAULT_MAX_PRIORITY: u32 = 100;

/// A source of priorities for newly created nodes.
///
/// Any `FnMut() -> u32` closure that is also `Clone` is a priority source, which is convenient
/// when a test needs to dictate the exact priorities of a sequence of insertions.
pub trait PrioritySource {
    /// Returns the priority of the next node.
    fn next_priority(&mut self) -> u32;

    /// Returns an independent source for a treap split off from the one owning `self`.
    fn fork(&mut self) -> Self
    where
        Self: Sized;
}

/// Draws priorities uniformly from an inclusive range using a xorshift generator.
///
/// # Examples
///
/// ```
/// use treap_collections::priority::{PrioritySource, RandomPriority};
///
/// let mut priorities = RandomPriority::seeded_with_range([1, 2, 3, 4], 10, 20);
/// for _ in 0..100 {
///     let priority = priorities.next_priority();
///     assert!(10 <= priority && priority <= 20);
/// }
/// ```
#[derive(Clone)]
pub struct RandomPriority {
    rng: XorShiftRng,
    low: u32,
    high: u32,
}

impl RandomPriority {
    /// Constructs a source seeded from the operating system that draws from
    /// `DEFAULT_MIN_PRIORITY..=DEFAULT_MAX_PRIORITY`.
    pub fn new() -> Self {
        Self::with_range(DEFAULT_MIN_PRIORITY, DEFAULT_MAX_PRIORITY)
    }

    /// Constructs a source seeded from the operating system that draws from `low..=high`.
    ///
    /// # Panics
    ///
    /// Panics if `low > high`.
    pub fn with_range(low: u32, high: u32) -> Self {
        assert!(low <= high, "priority range {}..={} is empty", low, high);
        RandomPriority {
            rng: rand::weak_rng(),
            low,
            high,
        }
    }

    /// Constructs a deterministic source that draws from the default range.
    ///
    /// # Panics
    ///
    /// Panics if `seed` is all zeros.
    pub fn from_seed(seed: [u32; 4]) -> Self {
        Self::seeded_with_range(seed, DEFAULT_MIN_PRIORITY, DEFAULT_MAX_PRIORITY)
    }

    /// Constructs a deterministic source that draws from `low..=high`.
    ///
    /// # Panics
    ///
    /// Panics if `seed` is all zeros or if `low > high`.
    pub fn seeded_with_range(seed: [u32; 4], low: u32, high: u32) -> Self {
        assert!(low <= high, "priority range {}..={} is empty", low, high);
        RandomPriority {
            rng: XorShiftRng::from_seed(seed),
            low,
            high,
        }
    }
}

impl PrioritySource for RandomPriority {
    fn next_priority(&mut self) -> u32 {
        let span = u64::from(self.high - self.low) + 1;
        self.low + self.rng.gen_range(0, span) as u32
    }

    fn fork(&mut self) -> Self {
        RandomPriority {
            rng: self.rng.gen(),
            low: self.low,
            high: self.high,
        }
    }
}

impl Default for RandomPriority {
    fn default() -> Self {
        Self::new()
    }
}

impl<F> PrioritySource for F
where
    F: FnMut() -> u32 + Clone,
{
    fn next_priority(&mut self) -> u32 {
        self()
    }

    fn fork(&mut self) -> Self {
        self.clone()
    }
}
