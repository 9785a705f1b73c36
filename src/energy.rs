// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the energy of an image
//!
//! The energy of a pixel is the dual-gradient magnitude: the Euclidean
//! norm of the colour difference across the pixel horizontally and
//! vertically.  Borders wrap around, so the left-hand neighbour of
//! column zero is the last column and the pixel above row zero is the
//! bottom row.  This is not edge clamping, and it changes every border
//! energy; don't "fix" it.

use crate::cq;
use crate::twodmap::TwoDimensionalMap;
use image::{GenericImageView, GrayImage, Luma, Pixel, Rgb};
use itertools::zip;
use tracing::trace;

// Takes the channels (R,G,B) from two pixels and maps the difference
// between each channel, squares it, and then sums them all up.  This
// is the rusty expression of:
//
//        |Δx|² = (Δrx)²+(Δgx)²+(Δbx)²
//        |Δy|² = (Δry)²+(Δgy)²+(Δby)²
//       e(x,y) = √(|Δx|²+|Δy|²)
//
// Each squared difference is an integer below 2^18, so the sums are
// exact in an f64 and the result never depends on summation order.
fn gradient_of_pair(p1: &Rgb<u8>, p2: &Rgb<u8>) -> f64 {
    zip(p1.channels(), p2.channels())
        .map(|(c1, c2)| {
            let delta = f64::from(*c1) - f64::from(*c2);
            delta * delta
        })
        .sum()
}

/// The energy of the single pixel at `(x, y)`.  The caller is
/// responsible for keeping the address inside the image; see
/// `SeamCarver::energy` for the checked version.
pub fn energy_of_pixel<I>(image: &I, x: u32, y: u32) -> f64
where
    I: GenericImageView<Pixel = Rgb<u8>>,
{
    let (width, height) = image.dimensions();
    let (mw, mh) = (width - 1, height - 1);

    let (left, right, up, down) = (
        cq!(x == 0, mw, x - 1),
        cq!(x >= mw, 0, x + 1),
        cq!(y == 0, mh, y - 1),
        cq!(y >= mh, 0, y + 1),
    );

    let delta_x = gradient_of_pair(&image.get_pixel(right, y), &image.get_pixel(left, y));
    let delta_y = gradient_of_pair(&image.get_pixel(x, down), &image.get_pixel(x, up));
    (delta_x + delta_y).sqrt()
}

/// Image -> Energy Map
///
/// Compute the energy of every pixel in an image.
#[cfg(not(feature = "threaded"))]
pub fn calculate_energy<I>(image: &I) -> TwoDimensionalMap<f64>
where
    I: GenericImageView<Pixel = Rgb<u8>> + Sync,
{
    use itertools::iproduct;

    let (width, height) = image.dimensions();
    trace!(width, height, "building energy map");
    let mut emap = TwoDimensionalMap::new(width, height);
    for (y, x) in iproduct!(0..height, 0..width) {
        emap[(x, y)] = energy_of_pixel(image, x, y);
    }
    emap
}

/// Image -> Energy Map
///
/// Compute the energy of every pixel in an image.  Every cell is
/// independent of every other, so the map is cut into bands of whole
/// rows with `chunks_mut` and each band is filled on its own scoped
/// thread.  The numbers are identical to the single-threaded build.
#[cfg(feature = "threaded")]
pub fn calculate_energy<I>(image: &I) -> TwoDimensionalMap<f64>
where
    I: GenericImageView<Pixel = Rgb<u8>> + Sync,
{
    let (width, height) = image.dimensions();
    let threads = num_cpus::get().max(1);
    let band = ((height as usize + threads - 1) / threads).max(1);
    trace!(width, height, threads, band, "building energy map");

    let mut emap = TwoDimensionalMap::new(width, height);
    if emap.as_slice().is_empty() {
        return emap;
    }
    let row_length = width as usize;
    crossbeam::scope(|scope| {
        for (index, chunk) in emap
            .as_mut_slice()
            .chunks_mut(band * row_length)
            .enumerate()
        {
            scope.spawn(move |_| {
                let top = index * band;
                for (offset, cell) in chunk.iter_mut().enumerate() {
                    let x = (offset % row_length) as u32;
                    let y = (top + offset / row_length) as u32;
                    *cell = energy_of_pixel(image, x, y);
                }
            });
        }
    })
    .unwrap_or_else(|panic| std::panic::resume_unwind(panic));
    emap
}

/// Render an energy map as a greyscale image, scaled so that the
/// highest energy in the map is white.  A map with no energy at all
/// comes out black.
pub fn energy_to_image(energy: &TwoDimensionalMap<f64>) -> GrayImage {
    let (width, height) = energy.dimensions();
    let factor = energy.as_slice().iter().cloned().fold(0.0f64, f64::max);
    GrayImage::from_fn(width, height, |x, y| {
        let level = cq!(factor > 0.0, energy[(x, y)] / factor * 255.0, 0.0);
        Luma([level.round().min(255.0) as u8])
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, RgbImage};
    use itertools::iproduct;

    // A 3x4 test card, in row-major RGB.
    const IMAGE_DATA: [u8; 36] = [
        255, 101, 51, 255, 101, 153, 255, 101, 255, //
        255, 153, 51, 255, 153, 153, 255, 153, 255, //
        255, 203, 51, 255, 204, 153, 255, 205, 255, //
        255, 255, 51, 255, 255, 153, 255, 255, 255, //
    ];

    fn card() -> RgbImage {
        ImageBuffer::from_raw(3, 4, IMAGE_DATA.to_vec()).unwrap()
    }

    #[test]
    fn interior_pixel_uses_direct_neighbours() {
        // Left (255,153,51), right (255,153,255), up (255,101,153),
        // down (255,204,153).
        let image = card();
        let dx2 = 204.0f64 * 204.0;
        let dy2 = 103.0f64 * 103.0;
        assert_eq!(energy_of_pixel(&image, 1, 1), (dx2 + dy2).sqrt());
        assert_eq!(energy_of_pixel(&image, 1, 1), 52225f64.sqrt());
        assert_eq!(energy_of_pixel(&image, 1, 2), 52024f64.sqrt());
    }

    #[test]
    fn centre_of_a_three_by_three() {
        let image: RgbImage = ImageBuffer::from_raw(
            3,
            3,
            vec![
                10, 20, 30, 40, 50, 60, 70, 80, 90, //
                15, 25, 35, 45, 55, 65, 95, 105, 115, //
                5, 5, 5, 200, 150, 100, 1, 2, 3, //
            ],
        )
        .unwrap();
        // Right minus left: (80, 80, 80).  Down minus up: (160, 100, 40).
        let dx2 = 3.0 * 80.0 * 80.0;
        let dy2 = 160.0 * 160.0 + 100.0 * 100.0 + 40.0 * 40.0;
        assert_eq!(energy_of_pixel(&image, 1, 1), f64::sqrt(dx2 + dy2));
        assert_eq!(energy_of_pixel(&image, 1, 1), 56400f64.sqrt());
    }

    #[test]
    fn empty_image_gives_an_empty_map() {
        let emap = calculate_energy(&RgbImage::new(0, 3));
        assert_eq!(emap.dimensions(), (0, 3));
        assert!(emap.as_slice().is_empty());

        let emap = calculate_energy(&RgbImage::new(4, 0));
        assert_eq!(emap.dimensions(), (4, 0));
    }

    #[test]
    fn borders_wrap_around() {
        // (0, 0): left wraps to (2, 0), up wraps to (0, 3).
        let image = card();
        assert_eq!(energy_of_pixel(&image, 0, 0), 20808f64.sqrt());
        // (2, 3): right wraps to (0, 3), down wraps to (2, 0).
        assert_eq!(energy_of_pixel(&image, 2, 3), 21220f64.sqrt());
    }

    #[test]
    fn uniform_image_has_no_energy() {
        let image = RgbImage::from_pixel(5, 3, Rgb([12, 200, 77]));
        let emap = calculate_energy(&image);
        assert!(emap.as_slice().iter().all(|e| *e == 0.0));
    }

    #[test]
    fn single_pixel_has_no_energy() {
        let image = RgbImage::from_pixel(1, 1, Rgb([1, 2, 3]));
        assert_eq!(energy_of_pixel(&image, 0, 0), 0.0);
    }

    #[test]
    fn energy_map_matches_pixel_energy() {
        let image = card();
        let emap = calculate_energy(&image);
        assert_eq!(emap.dimensions(), (3, 4));
        for (y, x) in iproduct!(0..4, 0..3) {
            assert_eq!(emap[(x, y)], energy_of_pixel(&image, x, y));
            assert!(emap[(x, y)] >= 0.0);
        }
    }

    #[test]
    fn energy_image_scales_to_the_maximum() {
        let emap = TwoDimensionalMap::from_vec(2, 2, vec![0.0, 50.0, 100.0, 25.0]).unwrap();
        let image = energy_to_image(&emap);
        assert_eq!(image.into_raw(), vec![0, 128, 255, 64]);
    }

    #[test]
    fn flat_energy_image_is_black() {
        let emap: TwoDimensionalMap<f64> = TwoDimensionalMap::new(3, 2);
        assert!(energy_to_image(&emap).into_raw().iter().all(|p| *p == 0));
    }
}
