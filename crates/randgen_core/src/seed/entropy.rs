//! Entropy source boundary.

use crate::types::{RandomError, Result};

/// Opaque provider of seed words.
///
/// Blanket-implemented for every [`rand::RngCore`], so `rand::rngs::OsRng`
/// and test doubles such as `rand::rngs::mock::StepRng` plug in directly.
pub trait EntropySource {
    /// Fills `dest` with entropy.
    ///
    /// # Errors
    ///
    /// Returns [`RandomError::EntropyUnavailable`] when the source fails.
    fn fill_words(&mut self, dest: &mut [u32]) -> Result<()>;
}

impl<R: rand::RngCore + ?Sized> EntropySource for R {
    fn fill_words(&mut self, dest: &mut [u32]) -> Result<()> {
        let mut bytes = vec![0u8; dest.len() * 4];
        self.try_fill_bytes(&mut bytes)
            .map_err(|err| RandomError::EntropyUnavailable(err.to_string()))?;
        for (word, chunk) in dest.iter_mut().zip(bytes.chunks_exact(4)) {
            *word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }
        Ok(())
    }
}
