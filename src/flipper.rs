// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Image dimensional flipper

//! A utility proxy for the ImageRS "GenericImageView" trait that maps
//! the width to the original height, and vice versa, as well as every
//! x to y and vice versa.
//!
//! Every seam algorithm in this crate is written for vertical seams
//! only.  Handing one of them a `Flipper` instead of the image turns
//! each column into a row, so the same code finds (or removes) a
//! horizontal seam, and the answer comes back as one row index per
//! original column.  `transpose` is the same trick made concrete: it
//! copies the flipped view into a fresh buffer, which is how the
//! carved result gets turned back the right way up.

use image::{GenericImageView, ImageBuffer, Pixel};
use itertools::iproduct;

/// A transposed, zero-copy view of an image.
pub struct Flipper<'a, I: GenericImageView> {
    pub image: &'a I,
}

impl<'a, I: GenericImageView> Flipper<'a, I> {
    pub fn new(image: &'a I) -> Self {
        Flipper { image }
    }
}

impl<'a, I: GenericImageView> GenericImageView for Flipper<'a, I> {
    type Pixel = I::Pixel;
    type InnerImageView = I;

    fn dimensions(&self) -> (u32, u32) {
        let (x, y) = self.image.dimensions();
        (y, x)
    }

    fn width(&self) -> u32 {
        self.image.height()
    }

    fn height(&self) -> u32 {
        self.image.width()
    }

    fn get_pixel(&self, x: u32, y: u32) -> Self::Pixel {
        self.image.get_pixel(y, x)
    }

    fn inner(&self) -> &Self::InnerImageView {
        self.image
    }

    fn bounds(&self) -> (u32, u32, u32, u32) {
        let (x1, y1, x2, y2) = self.image.bounds();
        (y1, x1, y2, x2)
    }
}

/// Materialize the transpose of an image: the result is `height`
/// pixels wide and `width` pixels tall, and `result(i, j)` is
/// `image(j, i)`.  Transposing twice gives back the original.
pub fn transpose<I, P>(image: &I) -> ImageBuffer<P, Vec<P::Subpixel>>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel + 'static,
    P::Subpixel: 'static,
{
    let flipped = Flipper::new(image);
    let (width, height) = flipped.dimensions();
    let mut imgbuf = ImageBuffer::new(width, height);
    for (y, x) in iproduct!(0..height, 0..width) {
        imgbuf.put_pixel(x, y, flipped.get_pixel(x, y));
    }
    imgbuf
}
