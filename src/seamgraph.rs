// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Find the minimum-energy vertical seam of an energy map.
//!
//! The energy map is treated as a directed acyclic graph that is never
//! actually built.  Vertex 0 is a virtual source with an edge to every
//! pixel in the top row; pixel `(x, y)` is vertex `1 + y * width + x`
//! and has edges to the (up to) three pixels below it,
//! `(x - 1, y + 1)`, `(x, y + 1)` and `(x + 1, y + 1)`.  The weight of
//! an edge is the energy of the pixel it points at.
//!
//! Every real edge goes down a row, so vertex numbering is already a
//! topological order, and the shortest path from the source to each
//! vertex can be settled in a single pass over the vertices: source
//! first, then row-major.  The seam is the shortest path to any vertex
//! in the bottom row.

use crate::energy::calculate_energy;
use crate::flipper::Flipper;
use crate::twodmap::TwoDimensionalMap;
use image::{GenericImageView, Rgb};

/// The virtual source vertex.
const SOURCE: usize = 0;

/// Distances and back-pointers for every vertex of the seam graph.
struct SeamGraph<'a> {
    energy: &'a TwoDimensionalMap<f64>,
    width: usize,
    height: usize,
    dist_to: Vec<f64>,
    edge_to: Vec<usize>,
}

impl<'a> SeamGraph<'a> {
    fn new(energy: &'a TwoDimensionalMap<f64>) -> Self {
        let (width, height) = (energy.width() as usize, energy.height() as usize);
        let vertices = width * height + 1;
        SeamGraph {
            energy,
            width,
            height,
            dist_to: vec![std::f64::INFINITY; vertices],
            edge_to: vec![SOURCE; vertices],
        }
    }

    fn vertex(&self, x: usize, y: usize) -> usize {
        1 + y * self.width + x
    }

    fn coordinates(&self, vertex: usize) -> (usize, usize) {
        let offset = vertex - 1;
        (offset % self.width, offset / self.width)
    }

    fn relax(&mut self, vertex: usize) {
        if vertex == SOURCE {
            self.dist_to[SOURCE] = 0.0;
            return;
        }

        let (x, y) = self.coordinates(vertex);
        let weight = self.energy[(x as u32, y as u32)];
        if y == 0 {
            self.dist_to[vertex] = self.dist_to[SOURCE] + weight;
            self.edge_to[vertex] = SOURCE;
            return;
        }

        // The three candidate parents, in the order they are examined:
        // straight up, up-left, up-right.  Only a strictly shorter path
        // displaces an earlier candidate, so straight up wins ties.
        let above = y - 1;
        for px in [Some(x), x.checked_sub(1), Some(x + 1)]
            .iter()
            .filter_map(|c| *c)
        {
            if px >= self.width {
                continue;
            }
            let parent = self.vertex(px, above);
            let candidate = self.dist_to[parent] + weight;
            if candidate < self.dist_to[vertex] {
                self.dist_to[vertex] = candidate;
                self.edge_to[vertex] = parent;
            }
        }
    }

    fn shortest_paths(mut self) -> Self {
        for vertex in 0..self.dist_to.len() {
            self.relax(vertex);
        }
        self
    }

    // The bottom-row vertex with the shortest path.  Scanning left to
    // right and only replacing on a strictly smaller distance keeps the
    // leftmost of any tied minima.
    fn cheapest_bottom_vertex(&self) -> usize {
        let bottom = self.height - 1;
        let mut champion = self.vertex(0, bottom);
        for x in 1..self.width {
            let vertex = self.vertex(x, bottom);
            if self.dist_to[vertex] < self.dist_to[champion] {
                champion = vertex;
            }
        }
        champion
    }

    // Working backwards, generate a vec of x coordinates that map to
    // the seam, reverse and return.
    fn seam(&self) -> Vec<u32> {
        let mut vertex = self.cheapest_bottom_vertex();
        let mut seam = Vec::with_capacity(self.height);
        while vertex != SOURCE {
            let (x, _) = self.coordinates(vertex);
            seam.push(x as u32);
            vertex = self.edge_to[vertex];
        }
        seam.reverse();
        seam
    }
}

/// Given an energy map, return the list of x-coordinates that, when
/// mapped with the range (0..height), give the XY coordinates for each
/// pixel in the seam to be removed.  A map with no pixels has no
/// seam.
pub fn energy_to_vertical_seam(energy: &TwoDimensionalMap<f64>) -> Vec<u32> {
    if energy.as_slice().is_empty() {
        return Vec::new();
    }
    SeamGraph::new(energy).shortest_paths().seam()
}

/// A convenience wrapper: Given an image, get back a vector with the
/// next top-to-bottom seam for that image.
pub fn calculate_vertical_seam<I>(image: &I) -> Vec<u32>
where
    I: GenericImageView<Pixel = Rgb<u8>> + Sync,
{
    energy_to_vertical_seam(&calculate_energy(image))
}

/// A convenience wrapper: Given an image, get back a vector with the
/// next left-to-right seam for that image, one y-coordinate per
/// column.  This is the vertical seam of the flipped image.
pub fn calculate_horizontal_seam<I>(image: &I) -> Vec<u32>
where
    I: GenericImageView<Pixel = Rgb<u8>> + Sync,
{
    calculate_vertical_seam(&Flipper::new(image))
}
