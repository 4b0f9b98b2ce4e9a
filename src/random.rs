//! In-place randomization of sequences
//!
//! Two algorithms are provided:
//!
//! | Function                | Order   | Pinned value | Draw range |
//! |-------------------------|---------|--------------|------------|
//! | [`shuffle`]             | forward | -            | `[i, n-1]` |
//! | [`shuffle_except`]      | reverse | yes          | `[0, i]`   |
//!
//! Both work on any `&mut [T]`, so a `Vec<T>` and a `[T; N]` are handled by the
//! same code. Nothing is allocated and nothing is returned; the caller's
//! sequence is permuted where it lies.
//!
//! # Random source
//!
//! There is no shared generator. The plain functions draw from the calling
//! thread's [`rand::rng()`], the `_with` functions take any [`rand::Rng`] so
//! a seeded generator can be injected.
//!
//! # Concurrency
//!
//! No internal locking is done. A sequence shared between threads has to be
//! guarded by the caller (e.g. a `Mutex<Vec<T>>`) before it is shuffled.
//!
//! # Example
//! ```
//! use codehelpers::random::Randomize;
//!
//! let mut cards = vec!["ace", "king", "queen", "jack"];
//! cards.randomize_except(&"ace");
//! assert_eq!(cards.len(), 4);
//! ```

use std::ops::RangeInclusive;

use rand::Rng;
use tracing::trace;

/// Shuffles `sequence` in place using the thread-local generator.
///
/// Sequences of length 0 or 1 are left untouched.
pub fn shuffle<T>(sequence: &mut [T]) {
    shuffle_with(sequence, &mut rand::rng());
}

/// Shuffles `sequence` in place with a forward Fisher-Yates pass.
///
/// For every `i` an index `r` is drawn uniformly from `[i, n-1]` and the
/// elements at `i` and `r` are swapped, so every permutation is equally
/// likely given a uniform `rng`.
///
/// # Example
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use codehelpers::random::shuffle_with;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let mut values = [1, 2, 3, 4, 5];
/// shuffle_with(&mut values, &mut rng);
///
/// let mut sorted = values;
/// sorted.sort();
/// assert_eq!(sorted, [1, 2, 3, 4, 5]);
/// ```
pub fn shuffle_with<T, R: Rng + ?Sized>(sequence: &mut [T], rng: &mut R) {
    shuffle_by(sequence, |range| rng.random_range(range));
}

/// Shuffles `sequence` in place, skipping every element equal to `pinned`,
/// using the thread-local generator.
///
/// See [`shuffle_except_with`] for the exact semantics.
pub fn shuffle_except<T: PartialEq>(sequence: &mut [T], pinned: &T) {
    shuffle_except_with(sequence, pinned, &mut rand::rng());
}

/// Shuffles `sequence` in place while holding back the value `pinned`.
///
/// The pass walks from the last index down to 0. On its own turn, any
/// element equal to `pinned` is skipped: it is neither moved nor used as the
/// source of a swap. Every other element is swapped with an index drawn from
/// `[0, i]`, redrawing while the draw hits the slot where `pinned` was first
/// found.
///
/// The protection is partial:
///
/// * only the *first* occurrence's slot is excluded as a swap target, so a
///   duplicate of `pinned` further along may still be moved by another
///   element's turn;
/// * when `pinned` is absent nothing is excluded and the pass is a plain
///   reverse Fisher-Yates.
///
/// Never fails and always terminates. At `i == 0` the only candidate is 0,
/// so that step is a self-swap and no draw is made.
pub fn shuffle_except_with<T: PartialEq, R: Rng + ?Sized>(
    sequence: &mut [T],
    pinned: &T,
    rng: &mut R,
) {
    shuffle_except_by(sequence, pinned, |range| rng.random_range(range));
}

/// Forward Fisher-Yates; `draw` must return a value inside the given range.
pub(crate) fn shuffle_by<T, F>(sequence: &mut [T], mut draw: F)
where
    F: FnMut(RangeInclusive<usize>) -> usize,
{
    let len = sequence.len();
    if len < 2 {
        return;
    }

    for i in 0..len {
        let r = draw(i..=len - 1);
        sequence.swap(i, r);
    }
}

/// Reverse pass with own-turn skip and single-index rejection.
pub(crate) fn shuffle_except_by<T, F>(sequence: &mut [T], pinned: &T, mut draw: F)
where
    T: PartialEq,
    F: FnMut(RangeInclusive<usize>) -> usize,
{
    let len = sequence.len();
    if len < 2 {
        return;
    }

    let excluded = sequence.iter().position(|item| item == pinned);
    trace!(len, excluded = ?excluded, "shuffling around pinned value");

    for i in (0..len).rev() {
        if sequence[i] == *pinned {
            continue;
        }

        let r = if i == 0 {
            0
        } else {
            // At most one of the i + 1 candidates is rejected.
            loop {
                let candidate = draw(0..=i);
                if Some(candidate) != excluded {
                    break candidate;
                }
            }
        };

        sequence.swap(i, r);
    }
}

/// Method-call access to the randomizers for slices, `Vec`s and arrays.
pub trait Randomize<T> {
    /// See [`shuffle`].
    fn randomize(&mut self);

    /// See [`shuffle_with`].
    fn randomize_with<R: Rng + ?Sized>(&mut self, rng: &mut R);

    /// See [`shuffle_except`].
    fn randomize_except(&mut self, pinned: &T)
    where
        T: PartialEq;

    /// See [`shuffle_except_with`].
    fn randomize_except_with<R: Rng + ?Sized>(&mut self, pinned: &T, rng: &mut R)
    where
        T: PartialEq;
}

impl<T> Randomize<T> for [T] {
    fn randomize(&mut self) {
        shuffle(self);
    }

    fn randomize_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        shuffle_with(self, rng);
    }

    fn randomize_except(&mut self, pinned: &T)
    where
        T: PartialEq,
    {
        shuffle_except(self, pinned);
    }

    fn randomize_except_with<R: Rng + ?Sized>(&mut self, pinned: &T, rng: &mut R)
    where
        T: PartialEq,
    {
        shuffle_except_with(self, pinned, rng);
    }
}
