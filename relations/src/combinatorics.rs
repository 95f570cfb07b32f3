//! Combinatorial helpers: ordered-pair enumeration and integer divisors.
//!
//! Predicates that look for counter-evidence (symmetry, transitivity, total
//! order) must quantify over every pair that *could* be an edge, not only
//! over the edges that exist. [`pairs`] provides that cross product.

use std::collections::BTreeSet;

use crate::error::RelationError;
use crate::graph::Pair;

/// Returns the cross product `domain × image` as a set of ordered pairs.
///
/// # Examples
///
/// ```
/// use relkit::combinatorics::pairs;
///
/// let all = pairs(&[1, 2], &[3]);
/// assert_eq!(all.into_iter().collect::<Vec<_>>(), vec![(1, 3), (2, 3)]);
/// ```
#[must_use]
pub fn pairs<N: Copy + Ord>(domain: &[N], image: &[N]) -> BTreeSet<Pair<N>> {
    domain
        .iter()
        .flat_map(|&x| image.iter().map(move |&y| (x, y)))
        .collect()
}

/// Returns `domain × domain`.
#[must_use]
pub fn square<N: Copy + Ord>(domain: &[N]) -> BTreeSet<Pair<N>> {
    pairs(domain, domain)
}

/// Returns every positive divisor of `n`, including `1` and `n`.
///
/// # Errors
///
/// Returns [`RelationError::InvalidArgument`] if `n <= 0`.
///
/// # Examples
///
/// ```
/// let d = relkit::combinatorics::divisors(20).unwrap();
/// assert_eq!(d.into_iter().collect::<Vec<_>>(), vec![1, 2, 4, 5, 10, 20]);
/// ```
pub fn divisors(n: i64) -> Result<BTreeSet<i64>, RelationError> {
    if n <= 0 {
        return Err(RelationError::InvalidArgument(format!(
            "divisors are only defined for positive integers, got {n}"
        )));
    }
    // Trial division on the shrinking cofactor; `p <= rest / p` cannot overflow.
    let mut factors: Vec<(i64, u32)> = Vec::new();
    let mut rest = n;
    let mut p = 2;
    while p <= rest / p {
        if rest % p == 0 {
            let mut power = 0;
            while rest % p == 0 {
                rest /= p;
                power += 1;
            }
            factors.push((p, power));
        }
        p += 1;
    }
    if rest > 1 {
        factors.push((rest, 1));
    }

    let mut result = BTreeSet::from([1]);
    for (prime, power) in factors {
        let mut grown = BTreeSet::new();
        for &d in &result {
            let mut multiple = d;
            grown.insert(multiple);
            for _ in 0..power {
                // Every product is a divisor of `n`, so it stays in range.
                multiple *= prime;
                grown.insert(multiple);
            }
        }
        result = grown;
    }
    Ok(result)
}

/// Greatest common divisor (always non-negative).
#[must_use]
pub fn gcd(a: i64, b: i64) -> i64 {
    let (mut a, mut b) = (a.abs(), b.abs());
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Least common multiple (non-negative, `0` if either input is `0`), or
/// `None` when it does not fit in an `i64`.
#[must_use]
pub fn lcm(a: i64, b: i64) -> Option<i64> {
    if a == 0 || b == 0 {
        return Some(0);
    }
    (a / gcd(a, b)).checked_mul(b)?.checked_abs()
}
