//! Selection seam for the random cafe operation.

use rand::Rng;

/// Chooses one position out of `len` candidates.
///
/// Production code samples uniformly on every call; tests substitute a
/// deterministic picker.
#[cfg_attr(test, mockall::automock)]
pub trait CafePicker: Send + Sync {
    /// Return an index in `0..len`, or `None` when `len` is zero.
    fn pick(&self, len: usize) -> Option<usize>;
}

/// Uniform picker backed by the thread-local RNG.
///
/// # Examples
/// ```
/// use cafe_directory::domain::ports::{CafePicker, ThreadRngCafePicker};
///
/// let picker = ThreadRngCafePicker;
/// assert_eq!(picker.pick(0), None);
/// assert!(picker.pick(3).is_some_and(|index| index < 3));
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngCafePicker;

impl CafePicker for ThreadRngCafePicker {
    fn pick(&self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        Some(rand::thread_rng().gen_range(0..len))
    }
}

/// Picker that always chooses the same position, wrapping around `len`.
#[cfg(test)]
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureCafePicker(pub usize);

#[cfg(test)]
impl CafePicker for FixtureCafePicker {
    fn pick(&self, len: usize) -> Option<usize> {
        self.0.checked_rem(len)
    }
}
