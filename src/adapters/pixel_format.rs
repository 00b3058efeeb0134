//! Pixel format conversion helpers for presentation adapters.

use rayon::prelude::*;

use crate::core::data::colour::Colour;

/// Copies RGB pixel data to RGBA format, setting alpha to 255.
///
/// # Panics
/// Panics if `src` is not a whole number of RGB pixels or if `dst` does not
/// hold exactly one RGBA pixel for each of them.
pub fn copy_rgb_to_rgba(src: &[u8], dst: &mut [u8]) {
    assert!(
        src.len() % 3 == 0,
        "src length {} is not a multiple of 3",
        src.len()
    );
    let expected_dst_len = (src.len() / 3) * 4;
    assert_eq!(
        dst.len(),
        expected_dst_len,
        "dst length {} does not match expected {}",
        dst.len(),
        expected_dst_len
    );

    dst.par_chunks_exact_mut(4)
        .zip(src.par_chunks_exact(3))
        .for_each(|(dst_pixel, src_pixel)| {
            dst_pixel[..3].copy_from_slice(src_pixel);
            dst_pixel[3] = u8::MAX;
        });
}

/// Paints every RGBA pixel in `dst` with an opaque `colour`.
pub fn fill_rgba(dst: &mut [u8], colour: Colour) {
    dst.par_chunks_exact_mut(4).for_each(|dst_pixel| {
        dst_pixel.copy_from_slice(&[colour.r, colour.g, colour.b, u8::MAX]);
    });
}
