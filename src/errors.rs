// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The ways a carve can fail.
//!
//! Every failure here is a precondition violation detected before the
//! carver touches its picture, so an `Err` always means the picture is
//! exactly as it was before the call.

use failure::Fail;

/// Errors produced by the seam carver.
#[derive(Debug, Fail, PartialEq)]
pub enum CarveError {
    /// The picture handed to the carver cannot be carved at all.
    #[fail(display = "invalid argument: {}", _0)]
    InvalidArgument(String),

    /// A pixel address outside the current picture.
    #[fail(
        display = "pixel ({}, {}) is outside the {}x{} picture",
        x, y, width, height
    )]
    OutOfRange {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// A seam that cannot be removed from the current picture.
    #[fail(display = "invalid seam: {}", _0)]
    InvalidSeam(String),
}

impl CarveError {
    pub(crate) fn seam<S: Into<String>>(reason: S) -> Self {
        CarveError::InvalidSeam(reason.into())
    }
}
