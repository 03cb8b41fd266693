// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Room shapes and net interior area

use crate::error::{Error, Result};
use crate::ring::{BoundaryRing, BoundarySegment, Winding};

/// Gross area below which a room is treated as a stale, deleted room
pub const DEFAULT_MIN_GROSS_AREA: f64 = 1e-4;

/// All boundary rings of one room
///
/// The first ring is the outer boundary (counter-clockwise), every further
/// ring is an island such as a column (clockwise).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoomShape {
    rings: Vec<BoundaryRing>,
}

impl RoomShape {
    pub fn new(rings: Vec<BoundaryRing>) -> Self {
        Self { rings }
    }

    /// Build a shape from boundary loops, one segment list per ring
    pub fn from_loops(loops: &[Vec<BoundarySegment>]) -> Result<Self> {
        let rings = loops
            .iter()
            .map(|segments| BoundaryRing::from_segments(segments))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { rings })
    }

    pub fn rings(&self) -> &[BoundaryRing] {
        &self.rings
    }

    pub fn outer(&self) -> Option<&BoundaryRing> {
        self.rings.first()
    }

    pub fn islands(&self) -> &[BoundaryRing] {
        self.rings.get(1..).unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.rings.is_empty()
    }

    /// Sum of the signed areas of every ring
    ///
    /// Islands are wound clockwise, so their area is subtracted without any
    /// special casing. No winding correction happens here.
    pub fn total_signed_area(&self) -> Result<f64> {
        self.rings
            .iter()
            .try_fold(0.0, |acc, ring| -> Result<f64> { Ok(acc + ring.signed_area()?) })
    }

    /// Check that the outer ring is counter-clockwise and islands are not
    pub fn validate_winding(&self) -> Result<()> {
        if let Some(outer) = self.outer() {
            if outer.winding()? != Winding::CounterClockwise {
                return Err(Error::malformed_ring(
                    outer.vertices().len(),
                    "outer boundary must be wound counter-clockwise",
                ));
            }
        }

        for (index, island) in self.islands().iter().enumerate() {
            if island.winding()? == Winding::CounterClockwise {
                return Err(Error::malformed_ring(
                    island.vertices().len(),
                    format!("island {} must be wound clockwise", index + 1),
                ));
            }
        }

        Ok(())
    }
}

/// Net interior area of a room: outer ring minus all islands
///
/// A gross area under `min_gross_area` marks a stale room left in the model;
/// it yields 0 without looking at the rings.
pub fn net_interior_area(shape: &RoomShape, gross_area: f64, min_gross_area: f64) -> Result<f64> {
    if gross_area < min_gross_area {
        return Ok(0.0);
    }
    shape.total_signed_area()
}
