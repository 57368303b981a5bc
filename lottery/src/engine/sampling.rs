//! Pool sampling with refill on exhaustion

use rand::Rng;

/// Draw `count` elements from `pool`.
///
/// With `allow_repeat` every pick is independent and uniform over the whole
/// pool. Without it picks are removed from a working copy, and the working
/// copy is refilled from `pool` once it runs dry, so repeats only appear
/// after every element has been drawn once.
///
/// An empty pool yields nothing regardless of `count`.
pub fn draw_from_pool<'a, T, R>(pool: &'a [T], count: usize, allow_repeat: bool, rng: &mut R) -> Vec<&'a T>
where
    R: Rng + ?Sized,
{
    if pool.is_empty() {
        return Vec::new();
    }

    let mut drawn = Vec::with_capacity(count);

    if allow_repeat {
        for _ in 0..count {
            drawn.push(&pool[rng.gen_range(0..pool.len())]);
        }
        return drawn;
    }

    let mut working: Vec<&T> = Vec::with_capacity(pool.len());
    for _ in 0..count {
        if working.is_empty() {
            working.extend(pool.iter());
        }
        let index = rng.gen_range(0..working.len());
        drawn.push(working.swap_remove(index));
    }
    drawn
}
