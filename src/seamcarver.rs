// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! SeamCarver - the carving workbench
//!
//! Owns a picture and answers questions about it (its size, the
//! energy of a pixel, the next cheapest seam in either direction), and
//! removes seams from it one at a time.  Deciding how many seams to
//! take, and in which order, is left to the caller.

use crate::energy::{calculate_energy, energy_of_pixel};
use crate::errors::CarveError;
use crate::seameditor;
use crate::seamgraph::{calculate_horizontal_seam, calculate_vertical_seam};
use crate::twodmap::TwoDimensionalMap;
use image::RgbImage;
use tracing::debug;

/// A picture being carved.
///
/// Every removal builds a complete replacement picture and swaps it in,
/// so a failed removal leaves the carver exactly as it was.
#[derive(Debug, Clone)]
pub struct SeamCarver {
    picture: RgbImage,
}

impl SeamCarver {
    /// Creates a new SeamCarver with an image to be carved.  An image
    /// with no pixels in it is refused.
    pub fn new(picture: RgbImage) -> Result<Self, CarveError> {
        let (width, height) = picture.dimensions();
        if width == 0 || height == 0 {
            return Err(CarveError::InvalidArgument(format!(
                "cannot carve an empty {}x{} picture",
                width, height
            )));
        }
        Ok(SeamCarver { picture })
    }

    /// A copy of the current picture.
    pub fn picture(&self) -> RgbImage {
        self.picture.clone()
    }

    /// Give up the carver and keep the picture.
    pub fn into_picture(self) -> RgbImage {
        self.picture
    }

    pub fn width(&self) -> u32 {
        self.picture.width()
    }

    pub fn height(&self) -> u32 {
        self.picture.height()
    }

    /// Energy of the pixel at column `x`, row `y`.
    pub fn energy(&self, x: u32, y: u32) -> Result<f64, CarveError> {
        let (width, height) = self.picture.dimensions();
        if x >= width || y >= height {
            return Err(CarveError::OutOfRange {
                x,
                y,
                width,
                height,
            });
        }
        Ok(energy_of_pixel(&self.picture, x, y))
    }

    /// The energy of every pixel in the current picture.
    pub fn energy_map(&self) -> TwoDimensionalMap<f64> {
        calculate_energy(&self.picture)
    }

    /// The cheapest top-to-bottom seam: one column index per row.
    pub fn find_vertical_seam(&self) -> Vec<u32> {
        let seam = calculate_vertical_seam(&self.picture);
        debug!(width = self.width(), height = self.height(), ?seam, "found vertical seam");
        seam
    }

    /// The cheapest left-to-right seam: one row index per column.
    pub fn find_horizontal_seam(&self) -> Vec<u32> {
        let seam = calculate_horizontal_seam(&self.picture);
        debug!(width = self.width(), height = self.height(), ?seam, "found horizontal seam");
        seam
    }

    /// Remove a vertical seam, making the picture one pixel narrower.
    pub fn remove_vertical_seam(&mut self, seam: &[u32]) -> Result<(), CarveError> {
        self.picture = seameditor::remove_vertical_seam(&self.picture, seam)?;
        debug!(width = self.width(), height = self.height(), "removed vertical seam");
        Ok(())
    }

    /// Remove a horizontal seam, making the picture one pixel shorter.
    pub fn remove_horizontal_seam(&mut self, seam: &[u32]) -> Result<(), CarveError> {
        self.picture = seameditor::remove_horizontal_seam(&self.picture, seam)?;
        debug!(width = self.width(), height = self.height(), "removed horizontal seam");
        Ok(())
    }
}
