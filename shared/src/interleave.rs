//! Morton (Z-order) bit interleaving.
//!
//! A Morton code stores an `x` coordinate in its even bits and a `y`
//! coordinate in its odd bits. Walking Morton codes in increasing order visits
//! a square grid quadrant by quadrant, which is what gives the tile schedule
//! its spatially scattered visiting order.

/// Compacts the even bits of `n` into a plain integer.
#[inline]
fn compact_even_bits(mut n: u64) -> u32 {
    n &= 0x5555_5555_5555_5555;
    n = (n ^ (n >> 1)) & 0x3333_3333_3333_3333;
    n = (n ^ (n >> 2)) & 0x0f0f_0f0f_0f0f_0f0f;
    n = (n ^ (n >> 4)) & 0x00ff_00ff_00ff_00ff;
    n = (n ^ (n >> 8)) & 0x0000_ffff_0000_ffff;
    n = (n ^ (n >> 16)) & 0x0000_0000_ffff_ffff;
    n as u32
}

/// Spreads the bits of `n` out so that they occupy the even bit positions.
#[inline]
fn spread_bits(n: u32) -> u64 {
    let mut n = u64::from(n);
    n = (n | (n << 16)) & 0x0000_ffff_0000_ffff;
    n = (n | (n << 8)) & 0x00ff_00ff_00ff_00ff;
    n = (n | (n << 4)) & 0x0f0f_0f0f_0f0f_0f0f;
    n = (n | (n << 2)) & 0x3333_3333_3333_3333;
    n = (n | (n << 1)) & 0x5555_5555_5555_5555;
    n
}

/// Extracts the `x` component of a Morton code.
///
/// ```
/// # use vision_shared::reverse_interleave_x;
/// assert_eq!(reverse_interleave_x(0b0100), 2);
/// assert_eq!(reverse_interleave_x(0b1000), 0);
/// ```
#[inline]
pub fn reverse_interleave_x(n: u64) -> u32 {
    compact_even_bits(n)
}

/// Extracts the `y` component of a Morton code.
///
/// ```
/// # use vision_shared::reverse_interleave_y;
/// assert_eq!(reverse_interleave_y(0b1000), 2);
/// assert_eq!(reverse_interleave_y(0b0100), 0);
/// ```
#[inline]
pub fn reverse_interleave_y(n: u64) -> u32 {
    compact_even_bits(n >> 1)
}

/// Builds the Morton code of `(x, y)`. Inverse of the two functions above.
#[inline]
pub fn interleave(x: u32, y: u32) -> u64 {
    spread_bits(x) | (spread_bits(y) << 1)
}
