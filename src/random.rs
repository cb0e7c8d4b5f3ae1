//! Random selection over lexicon pools.
//!
//! All randomness used during assembly flows through [`RandomSource`], so a test can
//! pin a case down with [`seeded`] or with a scripted source of its own. Production
//! callers use [`entropy`].

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

use crate::error::CaseError;

/// Source of uniformly distributed indices.
///
/// Implementations only need [`next_index`](RandomSource::next_index); callers never
/// pass a bound of zero.
pub trait RandomSource {
    /// Uniform integer in `0..bound`.
    fn next_index(&mut self, bound: usize) -> usize;

    /// Uniform float in `[0, 1)`.
    fn next_float(&mut self) -> f64 {
        const STEPS: usize = 1 << 24;
        self.next_index(STEPS) as f64 / STEPS as f64
    }
}

impl RandomSource for StdRng {
    fn next_index(&mut self, bound: usize) -> usize {
        self.gen_range(0..bound)
    }

    fn next_float(&mut self) -> f64 {
        self.gen()
    }
}

impl RandomSource for ThreadRng {
    fn next_index(&mut self, bound: usize) -> usize {
        self.gen_range(0..bound)
    }

    fn next_float(&mut self) -> f64 {
        self.gen()
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_index(&mut self, bound: usize) -> usize {
        (**self).next_index(bound)
    }

    fn next_float(&mut self) -> f64 {
        (**self).next_float()
    }
}

/// Deterministic source; the same seed always yields the same case.
pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Non-deterministic source for production use.
pub fn entropy() -> StdRng {
    StdRng::from_entropy()
}

/// Pick one element uniformly.
pub fn pick_one<'a, T, R>(rng: &mut R, pool: &'a [T], name: &str) -> Result<&'a T, CaseError>
where
    R: RandomSource + ?Sized,
{
    if pool.is_empty() {
        return Err(CaseError::EmptyPool {
            pool: name.to_string(),
        });
    }
    let idx = rng.next_index(pool.len());
    log::trace!("pick_one {}: {}/{}", name, idx, pool.len());
    Ok(&pool[idx])
}

/// Pick `n` distinct elements (by position) in random order, without replacement.
pub fn pick_many<'a, T, R>(
    rng: &mut R,
    pool: &'a [T],
    n: usize,
    name: &str,
) -> Result<Vec<&'a T>, CaseError>
where
    R: RandomSource + ?Sized,
{
    if n > pool.len() {
        return Err(CaseError::PoolExhausted {
            pool: name.to_string(),
            requested: n,
            available: pool.len(),
        });
    }
    // Partial Fisher-Yates over positions.
    let mut order: Vec<usize> = (0..pool.len()).collect();
    for i in 0..n {
        let j = i + rng.next_index(pool.len() - i);
        order.swap(i, j);
    }
    log::trace!("pick_many {}: {:?}", name, &order[..n]);
    Ok(order[..n].iter().map(|&i| &pool[i]).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    /// Replays a fixed list of raw values, reduced modulo the requested bound.
    struct Scripted(Vec<usize>, usize);

    impl RandomSource for Scripted {
        fn next_index(&mut self, bound: usize) -> usize {
            let v = self.0[self.1 % self.0.len()];
            self.1 += 1;
            v % bound
        }
    }

    #[test]
    fn pick_one_empty_pool_fails() {
        let pool: [&str; 0] = [];
        let err = pick_one(&mut seeded(1), &pool, "cities").unwrap_err();
        assert_eq!(err, CaseError::EmptyPool { pool: "cities".into() });
    }

    #[test]
    fn pick_one_follows_source() {
        let pool = ["a", "b", "c"];
        let mut src = Scripted(vec![2, 0], 0);
        assert_eq!(*pick_one(&mut src, &pool, "p").unwrap(), "c");
        assert_eq!(*pick_one(&mut src, &pool, "p").unwrap(), "a");
    }

    #[test]
    fn pick_many_is_distinct_and_sized() {
        let pool: Vec<u32> = (0..10).collect();
        let mut rng = seeded(99);
        for _ in 0..50 {
            let picked = pick_many(&mut rng, &pool, 4, "clues").unwrap();
            assert_eq!(picked.len(), 4);
            let unique: HashSet<_> = picked.iter().collect();
            assert_eq!(unique.len(), 4);
        }
    }

    #[test]
    fn pick_many_whole_pool_is_permutation() {
        let pool = ["w", "x", "y", "z"];
        let mut picked: Vec<&str> = pick_many(&mut seeded(5), &pool, 4, "p")
            .unwrap()
            .into_iter()
            .copied()
            .collect();
        picked.sort();
        assert_eq!(picked, vec!["w", "x", "y", "z"]);
    }

    #[test]
    fn pick_many_rejects_oversized_request() {
        let pool = ["a", "b", "c"];
        let err = pick_many(&mut seeded(1), &pool, 4, "clue templates").unwrap_err();
        assert_eq!(
            err,
            CaseError::PoolExhausted {
                pool: "clue templates".into(),
                requested: 4,
                available: 3
            }
        );
    }

    #[test]
    fn seeded_sources_repeat() {
        let pool: Vec<u32> = (0..100).collect();
        let a = pick_many(&mut seeded(7), &pool, 10, "p").unwrap();
        let b = pick_many(&mut seeded(7), &pool, 10, "p").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn default_float_stays_in_unit_interval() {
        let mut src = Scripted(vec![0, usize::MAX], 0);
        let lo = src.next_float();
        let hi = src.next_float();
        assert_eq!(lo, 0.0);
        assert!(hi < 1.0);
    }
}
