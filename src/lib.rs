// #![deny(missing_docs)]

//! Dual-gradient seam carving.
//!
//! `SeamCarver` owns a picture and removes one seam at a time; the free
//! functions underneath it work on anything that implements the
//! `image` crate's `GenericImageView` with RGB pixels.

extern crate image;

mod ternary;

pub mod errors;
pub use errors::CarveError;

pub mod twodmap;
pub use twodmap::TwoDimensionalMap;

pub mod energy;
pub use energy::{calculate_energy, energy_of_pixel, energy_to_image};

pub mod seamgraph;
pub use seamgraph::{calculate_horizontal_seam, calculate_vertical_seam, energy_to_vertical_seam};

pub mod flipper;
pub use flipper::{transpose, Flipper};

pub mod seameditor;
pub use seameditor::{remove_horizontal_seam, remove_vertical_seam};

pub mod seamcarver;
pub use seamcarver::SeamCarver;

