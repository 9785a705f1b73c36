// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use seamcarve::{energy_to_image, SeamCarver};

extern crate clap;
extern crate image;

use clap::{App, Arg, ArgMatches};
use failure::{bail, format_err, Error};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

// This is silly and basically a reimplementation of `bool` and `not`,
// but it makes it much clearer in the code what I'm doing.  And I
// like that.
#[derive(PartialEq, Copy, Clone, Debug)]
enum Carve {
    Width,
    Height,
}

impl Carve {
    fn turn(self) -> Self {
        if self == Carve::Width {
            Carve::Height
        } else {
            Carve::Width
        }
    }
}

fn carveonce(carver: &mut SeamCarver, direction: Carve) -> Result<(), Error> {
    match direction {
        Carve::Width => {
            let seam = carver.find_vertical_seam();
            carver.remove_vertical_seam(&seam)?;
        }
        Carve::Height => {
            let seam = carver.find_horizontal_seam();
            carver.remove_horizontal_seam(&seam)?;
        }
    }
    debug!(?direction, width = carver.width(), height = carver.height(), "carved");
    Ok(())
}

// Alternate between the two directions while both still need
// carving, then finish off whichever is left over.
fn carve(carver: &mut SeamCarver, newwidth: u32, newheight: u32) -> Result<(), Error> {
    if newwidth == 0 || newheight == 0 {
        bail!("seamcarve cannot carve an image down to nothing");
    }
    if carver.width() < newwidth || carver.height() < newheight {
        bail!("seamcarve cannot upscale an image");
    }

    let mut direction = Carve::Width;
    while carver.width() > newwidth && carver.height() > newheight {
        carveonce(carver, direction)?;
        direction = direction.turn();
    }
    while carver.width() > newwidth {
        carveonce(carver, Carve::Width)?;
    }
    while carver.height() > newheight {
        carveonce(carver, Carve::Height)?;
    }
    info!(width = carver.width(), height = carver.height(), "carving complete");
    Ok(())
}

fn seam_to_string(seam: &[u32]) -> String {
    seam.iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

// Prints a short account of the carver's view of the image, and then
// takes one seam in each direction.
fn report(carver: &mut SeamCarver) -> Result<(), Error> {
    println!("energy(0, 0): {:.2}", carver.energy(0, 0)?);
    println!("width: {}", carver.width());
    println!("height: {}", carver.height());
    let horizontal = carver.find_horizontal_seam();
    println!("horizontal seam: {}", seam_to_string(&horizontal));
    let vertical = carver.find_vertical_seam();
    println!("vertical seam: {}", seam_to_string(&vertical));

    if carver.width() > 1 {
        carver.remove_vertical_seam(&vertical)?;
    }
    if carver.height() > 1 {
        let horizontal = carver.find_horizontal_seam();
        carver.remove_horizontal_seam(&horizontal)?;
    }
    println!("after carving: {}x{}", carver.width(), carver.height());
    Ok(())
}

fn dimension(matches: &ArgMatches, name: &str, current: u32) -> Result<u32, Error> {
    match matches.value_of(name) {
        None => Ok(current),
        Some(value) => value
            .parse::<u32>()
            .map_err(|_| format_err!("--{} must be a whole number, not '{}'", name, value)),
    }
}

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let matches = App::new("seamcarve")
        .version("0.1.0")
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Dual-gradient seam carving")
        .arg(
            Arg::with_name("image")
                .help("The image to carve")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("width")
                .help("The width to carve the image down to")
                .short("W")
                .long("width")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("height")
                .help("The height to carve the image down to")
                .short("H")
                .long("height")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("output")
                .help("Where to write the carved image")
                .short("o")
                .long("output")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("energy")
                .help("Where to write a greyscale picture of the energy map")
                .short("e")
                .long("energy")
                .takes_value(true),
        )
        .get_matches();

    let path = matches
        .value_of("image")
        .ok_or_else(|| format_err!("no image given"))?;
    let image = image::open(path)?.to_rgb();
    let mut carver = SeamCarver::new(image)?;
    info!(path, width = carver.width(), height = carver.height(), "loaded");

    if let Some(energy_path) = matches.value_of("energy") {
        energy_to_image(&carver.energy_map()).save(energy_path)?;
        info!(path = energy_path, "wrote energy map");
    }

    let resizing = matches.is_present("width") || matches.is_present("height");
    let newwidth = dimension(&matches, "width", carver.width())?;
    let newheight = dimension(&matches, "height", carver.height())?;
    if resizing {
        carve(&mut carver, newwidth, newheight)?;
    }

    match matches.value_of("output") {
        Some(output) => {
            carver.into_picture().save(output)?;
            info!(path = output, "wrote carved image");
        }
        None if !resizing && !matches.is_present("energy") => report(&mut carver)?,
        None => {}
    }
    Ok(())
}
