//! Alignment arithmetic helpers.

/// Rounds `value` up to the nearest multiple of `alignment`.
///
/// `alignment` must be a power of two.
#[inline]
pub const fn round_up(value: usize, alignment: usize) -> usize {
    debug_assert!(alignment.is_power_of_two());
    (value + alignment - 1) & !(alignment - 1)
}

/// Rounds `value` down to the nearest multiple of `alignment`.
///
/// `alignment` must be a power of two.
#[inline]
pub const fn round_down(value: usize, alignment: usize) -> usize {
    debug_assert!(alignment.is_power_of_two());
    value & !(alignment - 1)
}

/// Returns `true` if `ptr` is aligned to `alignment` bytes.
#[inline]
pub fn is_aligned(ptr: *const u8, alignment: usize) -> bool {
    debug_assert!(alignment.is_power_of_two());
    (ptr as usize) & (alignment - 1) == 0
}
