use rand::RngExt;

use crate::error::Error;
use crate::source::Source;

/// A uniformly random permutation of the source's elements.
///
/// Materializes the source, then runs a Fisher–Yates pass — every
/// permutation equally likely, no sort-by-random-keys bias. Uses the
/// thread-local generator; [`shuffle_with`] takes a caller-supplied one.
pub fn shuffle<S>(source: S) -> Vec<S::Item>
where
    S: Source,
{
    shuffle_with(source, &mut rand::rng())
}

/// [`shuffle`] with an explicit random generator.
///
/// # Examples
///
/// ```
/// use rand::{SeedableRng, rngs::StdRng};
/// use seqops::{restartable, shuffle_with};
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let mut shuffled = shuffle_with(restartable(1..=6), &mut rng);
///
/// shuffled.sort();
/// assert_eq!(shuffled, [1, 2, 3, 4, 5, 6]);
/// ```
pub fn shuffle_with<S, R>(source: S, rng: &mut R) -> Vec<S::Item>
where
    S: Source,
    R: RngExt + ?Sized,
{
    let mut items: Vec<_> = source.traverse().collect();

    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }

    items
}

/// `n` elements chosen uniformly at random, without replacement.
///
/// Requires a source with a knowable length — an unbounded or
/// unknown-length single-pass source fails eagerly with
/// [`Error::UnsupportedSource`] rather than buffering forever. Asking for
/// more elements than exist fails with [`Error::SampleSizeExceeded`].
pub fn sample<S>(source: S, n: usize) -> Result<Vec<S::Item>, Error>
where
    S: Source,
{
    sample_with(source, n, &mut rand::rng())
}

/// [`sample`] with an explicit random generator.
pub fn sample_with<S, R>(source: S, n: usize, rng: &mut R) -> Result<Vec<S::Item>, Error>
where
    S: Source,
    R: RngExt + ?Sized,
{
    if source.len_hint().is_none() {
        return Err(Error::UnsupportedSource {
            operation: "sample",
        });
    }

    let mut items: Vec<_> = source.traverse().collect();

    if n > items.len() {
        return Err(Error::SampleSizeExceeded {
            requested: n,
            population: items.len(),
        });
    }

    // Partial Fisher–Yates: settle the first n positions, drop the rest.
    for i in 0..n {
        let j = rng.random_range(i..items.len());
        items.swap(i, j);
    }

    items.truncate(n);
    Ok(items)
}


#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::{sample_with, shuffle_with};
    use crate::{Error, restartable, sample, single_pass};

    #[test]
    fn seeded_shuffles_are_reproducible_and_seed_sensitive() {
        let nums: Vec<i64> = (0..10).collect();

        let run = |seed: u64| {
            let mut rng = StdRng::seed_from_u64(seed);
            shuffle_with(restartable(nums.clone()), &mut rng)
        };

        assert_eq!(run(3), run(3));

        // 10! orderings; twenty seeds agreeing on one would mean the
        // generator is not driving the permutation at all.
        let orderings: std::collections::HashSet<Vec<i64>> = (0..20).map(run).collect();
        assert!(orderings.len() > 1);
    }

    #[test]
    fn samples_are_distinct_members_of_the_population() {
        let mut rng = StdRng::seed_from_u64(11);

        for _ in 0..50 {
            let picked = sample_with(restartable(1..=6), 2, &mut rng).unwrap();

            assert_eq!(picked.len(), 2);
            assert_ne!(picked[0], picked[1]);
            assert!(picked.iter().all(|n| (1..=6).contains(n)));
        }
    }

    #[test]
    fn oversampling_is_an_error() {
        assert_eq!(
            sample(restartable(1..=6), 7),
            Err(Error::SampleSizeExceeded {
                requested: 7,
                population: 6
            })
        );
    }

    #[test]
    fn unknown_length_sources_are_refused() {
        let unknowable = single_pass((0..100).filter(|n| n % 2 == 0));

        assert_eq!(
            sample(unknowable, 3),
            Err(Error::UnsupportedSource {
                operation: "sample"
            })
        );
    }

    #[test]
    fn sampling_everything_returns_a_permutation() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut all = sample_with(restartable(1..=6), 6, &mut rng).unwrap();

        all.sort_unstable();
        assert_eq!(all, [1, 2, 3, 4, 5, 6]);
    }
}
