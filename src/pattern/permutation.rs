use rand::{Rng, SeedableRng, rngs::StdRng, seq::SliceRandom};

/// Fixed bijection from pixel index to pixel index
///
/// Generated once at startup and never mutated. Patterns use it to give
/// every pixel an uncorrelated phase offset.
#[derive(Debug, Clone)]
pub struct PermutationTable<const N: usize> {
    table: [usize; N],
}

impl<const N: usize> PermutationTable<N> {
    /// Identity mapping, mostly useful for tests
    pub fn identity() -> Self {
        Self {
            table: core::array::from_fn(|i| i),
        }
    }

    /// Random permutation drawn from the given generator
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut table = Self::identity();
        table.table.shuffle(rng);
        table
    }

    /// Reproducible random permutation
    pub fn from_seed(seed: u64) -> Self {
        Self::shuffled(&mut StdRng::seed_from_u64(seed))
    }

    /// Image of pixel `i`, or `i` itself when out of range
    #[inline]
    pub fn get(&self, i: usize) -> usize {
        self.table.get(i).copied().unwrap_or(i)
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.table
    }
}

impl<const N: usize> Default for PermutationTable<N> {
    fn default() -> Self {
        Self::shuffled(&mut rand::rng())
    }
}
