//! Proportional random sampling of records for external verification.
//!
//! A dataset of `n` records is verified on `n / min_examples` of them (floor
//! division). The sample therefore grows by one record per `min_examples`
//! submitted, so larger datasets are verified at the same coarse intensity
//! rather than more densely. This scaling is intentional.
//!
//! The randomness source is always passed in. Production code seeds it from
//! entropy (or `PROOF_SAMPLE_SEED`); tests pass a fixed-seed [`StdRng`].
//!
//! [`StdRng`]: rand::rngs::StdRng


use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

/// Number of records drawn from a dataset of `dataset_len` records.
///
/// `min_examples` must be non-zero; the configuration layer rejects zero.
pub fn sample_size(dataset_len: usize, min_examples: usize) -> usize {
    dataset_len / min_examples
}

/// Draws [`sample_size`] records uniformly at random without replacement.
///
/// Performs no minimum-size check of its own: a dataset smaller than
/// `min_examples` yields an empty sample.
pub fn sample<'a, T, R>(dataset: &'a [T], min_examples: usize, rng: &mut R) -> Vec<&'a T>
where
    R: Rng + ?Sized,
{
    let amount = sample_size(dataset.len(), min_examples);
    debug!(
        dataset_len = dataset.len(),
        min_examples, amount, "Sampling records for verification"
    );

    dataset.choose_multiple(rng, amount).collect()
}
