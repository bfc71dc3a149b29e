//! Uniform random selection over a candidate list.
//!
//! Both the "pick from what is stored" path and the "fall back to presets"
//! path go through [`pick_from`], so they cannot drift apart.

use rand::Rng;
use rand::seq::SliceRandom;

/// Pick one element of `candidates` uniformly at random, `None` when empty.
pub fn pick_from<'a, T, R>(candidates: &'a [T], rng: &mut R) -> Option<&'a T>
where
    R: Rng + ?Sized,
{
    candidates.choose(rng)
}

/// [`pick_from`] with the thread-local generator.
#[must_use]
pub fn pick_one<T>(candidates: &[T]) -> Option<&T> {
    pick_from(candidates, &mut rand::thread_rng())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn test_empty_yields_none() {
        let empty: [&str; 0] = [];
        assert!(pick_one(&empty).is_none());
    }

    #[test]
    fn test_pick_is_member() {
        let menu = ["红烧肉", "水煮鱼", "口水鸡"];
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let picked = pick_from(&menu, &mut rng).unwrap();
            assert!(menu.contains(picked));
        }
    }

    #[test]
    fn test_selection_is_roughly_uniform() {
        let menu = ["a", "b", "c", "d"];
        let trials = 40_000;
        let mut rng = StdRng::seed_from_u64(20_240_601);
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for _ in 0..trials {
            *counts.entry(*pick_from(&menu, &mut rng).unwrap()).or_default() += 1;
        }
        let expected = trials / menu.len();
        for item in menu {
            let got = counts.get(item).copied().unwrap_or(0);
            assert!(
                got.abs_diff(expected) < expected / 10,
                "{item} picked {got} times, expected about {expected}"
            );
        }
    }
}
