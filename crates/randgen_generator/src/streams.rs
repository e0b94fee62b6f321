//! Parallel streams derived by repeated jumps.
//!
//! Stream `i` of a [`StreamSet`] is the root generator jumped `i` times, so
//! streams never overlap within the jump distance of the algorithm. Parallel
//! fills assign each stream a fixed contiguous chunk of the output, which
//! makes the result independent of how rayon schedules the chunks.

use rayon::prelude::*;

use randgen_core::{AnyBitGenerator, BitGenerator, RandomError, Result};
use randgen_distributions::Distribution;

use crate::generator::Generator;

/// A fixed set of independent generators for parallel work.
///
/// # Examples
///
/// ```rust
/// use randgen_core::{BitGeneratorKind, SeedSequence};
/// use randgen_generator::{Generator, StreamSet};
///
/// let root = Generator::from_kind(BitGeneratorKind::Philox, &SeedSequence::from(7_u64));
/// let mut streams = StreamSet::from_root(&root, 4).unwrap();
///
/// let mut out = vec![0.0; 1000];
/// streams.par_fill_with(&mut out, |g| g.standard_normal()).unwrap();
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StreamSet<B: BitGenerator = AnyBitGenerator> {
    streams: Vec<Generator<B>>,
}

impl<B: BitGenerator + Clone> StreamSet<B> {
    /// Derives `n` streams from `root`; stream 0 is a copy of `root`.
    ///
    /// # Errors
    ///
    /// Returns [`RandomError::InvalidParameter`] if `n` is zero, or
    /// [`RandomError::UnsupportedOperation`] if `n > 1` and the bit
    /// generator has no jump.
    pub fn from_root(root: &Generator<B>, n: usize) -> Result<Self> {
        if n == 0 {
            return Err(RandomError::invalid_parameter(
                "streams",
                "must be at least 1, got 0",
            ));
        }
        let mut streams = Vec::with_capacity(n);
        let mut current = root.clone();
        for _ in 1..n {
            let next = current.jumped(1)?;
            streams.push(current);
            current = next;
        }
        streams.push(current);
        tracing::debug!(kind = %root.kind(), streams = n, "stream set created");
        Ok(Self { streams })
    }
}

impl<B: BitGenerator> StreamSet<B> {
    /// Number of streams.
    #[inline]
    pub fn len(&self) -> usize {
        self.streams.len()
    }

    /// Always `false`; a stream set holds at least one stream.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.streams.is_empty()
    }

    /// Returns stream `i`, if present.
    pub fn get(&self, i: usize) -> Option<&Generator<B>> {
        self.streams.get(i)
    }

    /// Returns stream `i` mutably, if present.
    pub fn get_mut(&mut self, i: usize) -> Option<&mut Generator<B>> {
        self.streams.get_mut(i)
    }

    /// Iterates over the streams in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Generator<B>> {
        self.streams.iter()
    }

    /// Iterates mutably over the streams in order.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Generator<B>> {
        self.streams.iter_mut()
    }

    /// Unwraps the streams.
    pub fn into_inner(self) -> Vec<Generator<B>> {
        self.streams
    }

    /// Chunk length for an output of `len` items: `ceil(len / streams)`.
    #[inline]
    pub fn chunk_len(&self, len: usize) -> usize {
        len.div_ceil(self.streams.len()).max(1)
    }
}

impl<B: BitGenerator + Send> StreamSet<B> {
    /// Fills `out` in parallel, chunk `i` from stream `i` in index order.
    ///
    /// The output and the final stream states depend only on the streams
    /// and `out.len()`, not on thread scheduling.
    ///
    /// # Errors
    ///
    /// Returns a sampling error from one of the chunks; other chunks may
    /// have been filled.
    pub fn par_fill_with<T, F>(&mut self, out: &mut [T], draw: F) -> Result<()>
    where
        T: Send,
        F: Fn(&mut Generator<B>) -> Result<T> + Sync,
    {
        let chunk = self.chunk_len(out.len());
        tracing::debug!(len = out.len(), chunk, streams = self.len(), "parallel fill");
        out.par_chunks_mut(chunk)
            .zip(self.streams.par_iter_mut())
            .try_for_each(|(slots, stream)| stream.fill_with(slots, &draw))
    }

    /// Fills `out` in parallel with samples from `distribution`.
    pub fn par_fill<D>(&mut self, distribution: &D, out: &mut [D::Output]) -> Result<()>
    where
        D: Distribution + Sync,
        D::Output: Send,
    {
        self.par_fill_with(out, |g| g.sample(distribution))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use randgen_core::generators::{Pcg64, SplitMix64};
    use randgen_core::SeedableBitGenerator;

    fn root(seed: u64) -> Generator<Pcg64> {
        Generator::seed_from_u64(seed)
    }

    #[test]
    fn test_stream_i_is_root_jumped_i_times() {
        let root = root(11);
        let streams = StreamSet::from_root(&root, 5).unwrap();
        assert_eq!(streams.len(), 5);
        for (i, stream) in streams.iter().enumerate() {
            assert_eq!(stream, &root.jumped(i as u64).unwrap());
        }
    }

    #[test]
    fn test_zero_streams_rejected() {
        assert!(matches!(
            StreamSet::from_root(&root(1), 0),
            Err(RandomError::InvalidParameter { name: "streams", .. })
        ));
    }

    #[test]
    fn test_single_stream_needs_no_jump() {
        let root = Generator::<SplitMix64>::seed_from_u64(1);
        let streams = StreamSet::from_root(&root, 1).unwrap();
        assert_eq!(streams.get(0), Some(&root));
        assert!(matches!(
            StreamSet::from_root(&root, 2),
            Err(RandomError::UnsupportedOperation { .. })
        ));
    }

    #[test]
    fn test_chunk_len_rounds_up() {
        let streams = StreamSet::from_root(&root(1), 4).unwrap();
        assert_eq!(streams.chunk_len(10), 3);
        assert_eq!(streams.chunk_len(8), 2);
        assert_eq!(streams.chunk_len(0), 1);
    }

    #[test]
    fn test_par_fill_matches_sequential_chunks() {
        let root = root(12);
        let mut parallel = StreamSet::from_root(&root, 3).unwrap();
        let mut sequential = parallel.clone();

        let mut out = vec![0.0; 100];
        parallel.par_fill_with(&mut out, |g| g.standard_normal()).unwrap();

        let chunk = sequential.chunk_len(out.len());
        let mut expected = vec![0.0; 100];
        for (slots, stream) in expected.chunks_mut(chunk).zip(sequential.iter_mut()) {
            stream.fill_standard_normal(slots).unwrap();
        }
        assert_eq!(out, expected);
        assert_eq!(parallel, sequential);
    }

    #[test]
    fn test_short_output_leaves_spare_streams() {
        let mut streams = StreamSet::from_root(&root(13), 4).unwrap();
        let untouched = streams.get(3).cloned();
        let mut out = [0_u64; 3];
        streams.par_fill_with(&mut out, |g| Ok(g.random_raw())).unwrap();
        assert_eq!(streams.get(3).cloned(), untouched);
    }
}
