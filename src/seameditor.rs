// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seam removal
//!
//! Takes an image and a seam and builds a new image one pixel
//! narrower (or shorter).  The source image is never touched; the
//! seam is checked in full before the new buffer is even allocated.

use crate::errors::CarveError;
use crate::flipper::{transpose, Flipper};
use image::{GenericImageView, ImageBuffer, Pixel};

/// Check that `seam` can be removed, as a vertical seam, from an image
/// of the given dimensions.
pub fn validate_vertical_seam(seam: &[u32], (width, height): (u32, u32)) -> Result<(), CarveError> {
    if width <= 1 {
        return Err(CarveError::seam(format!(
            "cannot remove a seam from an image {} pixel wide",
            width
        )));
    }

    if seam.len() != height as usize {
        return Err(CarveError::seam(format!(
            "seam has {} entries, expected {}",
            seam.len(),
            height
        )));
    }

    if let Some((i, x)) = seam.iter().enumerate().find(|(_, x)| **x >= width) {
        return Err(CarveError::seam(format!(
            "entry {} is {}, outside 0..{}",
            i, x, width
        )));
    }

    if let Some(i) = seam
        .windows(2)
        .position(|pair| (i64::from(pair[0]) - i64::from(pair[1])).abs() > 1)
    {
        return Err(CarveError::seam(format!(
            "entries {} and {} ({} and {}) are not adjacent",
            i,
            i + 1,
            seam[i],
            seam[i + 1]
        )));
    }

    Ok(())
}

/// Remove a vertical seam, one x-coordinate per row.  In each row
/// the pixels left of the seam are copied as-is and everything right
/// of it shifts one column left to close the gap.
pub fn remove_vertical_seam<I, P>(
    image: &I,
    seam: &[u32],
) -> Result<ImageBuffer<P, Vec<P::Subpixel>>, CarveError>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel + 'static,
    P::Subpixel: 'static,
{
    let (width, height) = image.dimensions();
    validate_vertical_seam(seam, (width, height))?;

    let mut imgbuf = ImageBuffer::new(width - 1, height);
    for (y, &cut) in (0..height).zip(seam) {
        for x in 0..(width - 1) {
            let source = if x < cut { x } else { x + 1 };
            imgbuf.put_pixel(x, y, image.get_pixel(source, y));
        }
    }
    Ok(imgbuf)
}

/// Remove a horizontal seam, one y-coordinate per column.  The image
/// is flipped, the seam removed as though it were vertical, and the
/// result flipped back.
pub fn remove_horizontal_seam<I, P>(
    image: &I,
    seam: &[u32],
) -> Result<ImageBuffer<P, Vec<P::Subpixel>>, CarveError>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel + 'static,
    P::Subpixel: 'static,
{
    let carved = remove_vertical_seam(&Flipper::new(image), seam)?;
    Ok(transpose(&carved))
}
