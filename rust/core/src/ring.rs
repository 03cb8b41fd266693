// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Boundary rings and their signed planar area
//!
//! A ring is an ordered, implicitly closed loop of 2D points. Its signed
//! area follows the shoelace formula: counter-clockwise rings are positive,
//! clockwise rings are negative. A ring with exactly two vertices encodes a
//! circular obstruction (a round column) whose diameter is the x-distance
//! between the two points; its area is always negative.

use crate::error::{Error, Result};
use nalgebra::Point2;
use std::f64::consts::PI;

/// One boundary segment as reported by the model, in traversal order.
///
/// Arcs are reduced to their chord: only `start` and `end` take part in
/// the area computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundarySegment {
    pub start: Point2<f64>,
    pub end: Point2<f64>,
    /// Whether the source curve was an arc
    pub is_arc: bool,
}

impl BoundarySegment {
    /// Create a straight segment
    pub fn line(start: Point2<f64>, end: Point2<f64>) -> Self {
        Self {
            start,
            end,
            is_arc: false,
        }
    }

    /// Create an arc segment (approximated by its chord)
    pub fn arc(start: Point2<f64>, end: Point2<f64>) -> Self {
        Self {
            start,
            end,
            is_arc: true,
        }
    }
}

/// Rotational sense of a ring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winding {
    CounterClockwise,
    Clockwise,
    /// Zero signed area
    Degenerate,
}

impl Winding {
    /// Winding implied by a signed area
    pub fn from_signed_area(area: f64) -> Self {
        if area > 0.0 {
            Winding::CounterClockwise
        } else if area < 0.0 {
            Winding::Clockwise
        } else {
            Winding::Degenerate
        }
    }
}

/// An ordered, implicitly closed loop of boundary points
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryRing {
    points: Vec<Point2<f64>>,
    arc_segments: usize,
    /// Number of segments the ring was assembled from, if any
    segments: Option<usize>,
}

impl BoundaryRing {
    /// Create a ring from points in traversal order
    pub fn new(points: Vec<Point2<f64>>) -> Self {
        Self {
            points,
            arc_segments: 0,
            segments: None,
        }
    }

    /// Assemble a ring from boundary segments in traversal order.
    ///
    /// The start point of every segment is taken as a vertex, then the end
    /// point of the final segment is appended once to close the loop.
    /// Interior segment end points are never read, so small mismatches
    /// between adjacent segments do not leak into the ring.
    ///
    /// The closing point is never compared with the first one. It is
    /// dropped from [`vertices`](Self::vertices) and the shoelace sum wraps
    /// around instead, so a two-segment loop is always the circular form.
    pub fn from_segments(segments: &[BoundarySegment]) -> Result<Self> {
        let last = segments
            .last()
            .ok_or_else(|| Error::malformed_ring(0, "boundary loop has no segments"))?;

        let mut points = Vec::with_capacity(segments.len() + 1);
        points.extend(segments.iter().map(|s| s.start));
        points.push(last.end);

        let arc_segments = segments.iter().filter(|s| s.is_arc).count();
        if arc_segments > 0 {
            tracing::trace!(arc_segments, "arc boundary segments approximated by chords");
        }

        Ok(Self {
            points,
            arc_segments,
            segments: Some(segments.len()),
        })
    }

    /// All stored points, including an explicit closing point if present
    pub fn points(&self) -> &[Point2<f64>] {
        &self.points
    }

    /// Number of arc segments that were reduced to chords
    pub fn arc_segments(&self) -> usize {
        self.arc_segments
    }

    /// Number of segments the ring was assembled from, `None` for point rings
    pub fn segment_count(&self) -> Option<usize> {
        self.segments
    }

    /// Distinct vertices of the ring
    ///
    /// For a ring assembled from segments this is the start point of every
    /// segment; the appended closing point is left out.
    pub fn vertices(&self) -> &[Point2<f64>] {
        match self.segments {
            Some(_) => &self.points[..self.points.len() - 1],
            None => &self.points,
        }
    }

    /// Signed area of the ring, see [`signed_area`]
    pub fn signed_area(&self) -> Result<f64> {
        match self.segments {
            // A lone segment folds back onto itself and encloses nothing
            Some(1) => Ok(0.0),
            _ => signed_area(self.vertices()),
        }
    }

    /// Winding direction derived from the signed area
    pub fn winding(&self) -> Result<Winding> {
        self.signed_area().map(Winding::from_signed_area)
    }

    /// Whether this ring uses the two-vertex circular obstruction encoding
    pub fn is_circular(&self) -> bool {
        self.vertices().len() == 2
    }
}

/// Compute the signed area of an implicitly closed ring of vertices
///
/// Positive = counter-clockwise, Negative = clockwise.
/// Exactly two vertices are read as a circle of diameter `|x1 - x0|` and
/// always yield the negative circle area, so circular columns subtract.
/// Fewer than two vertices is a [`Error::MalformedRing`].
pub fn signed_area(vertices: &[Point2<f64>]) -> Result<f64> {
    let n = vertices.len();
    match n {
        0 | 1 => Err(Error::malformed_ring(
            n,
            "at least 2 vertices are required",
        )),
        2 => {
            let diameter = (vertices[1].x - vertices[0].x).abs();
            Ok(-PI * diameter * diameter * 0.25)
        }
        _ => Ok(shoelace(vertices)),
    }
}

/// Plain shoelace sum over a wrapped-around vertex list
fn shoelace(vertices: &[Point2<f64>]) -> f64 {
    let n = vertices.len();
    let mut area = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        area += vertices[i].x * vertices[j].y;
        area -= vertices[j].x * vertices[i].y;
    }
    area * 0.5
}
