use crate::PseudoRandomNumberGenerator;

/// Returns a random integer in the range `[min, max)`.
pub fn range(prng: &mut dyn PseudoRandomNumberGenerator, min: u64, max: u64) -> u64 {
    prng.next().rem_euclid(max - min) + min
}

/// Returns a random percentage roll in the range `[1, 100]`.
pub fn roll_percent(prng: &mut dyn PseudoRandomNumberGenerator) -> u8 {
    range(prng, 1, 101) as u8
}

/// Returns a random element from the given slice.
///
/// A slice with a single element does not advance the generator.
pub fn sample_slice<'a, T>(
    prng: &mut dyn PseudoRandomNumberGenerator,
    slice: &'a [T],
) -> Option<&'a T> {
    match slice.len() {
        0 => None,
        1 => slice.first(),
        len => slice.get(range(prng, 0, len as u64) as usize),
    }
}
