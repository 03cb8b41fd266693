// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Room dump input format.
//!
//! The dump is a JSON array written by the model-access side: one object per
//! room with identity, gross area and volume, level and boundary loops in
//! traversal order.

use anyhow::{Context, Result};
use roominfo_core::{BoundarySegment, LevelRecord, Point2, RoomShape, SourceRoom};
use serde::Deserialize;
use std::path::Path;

/// Room as stored in the dump.
#[derive(Debug, Clone, Deserialize)]
pub struct RoomInput {
    pub name: String,
    pub number: String,
    pub element_id: i64,
    /// Gross area in model units.
    pub area: f64,
    /// Gross volume in model units.
    #[serde(default)]
    pub volume: f64,
    pub level: LevelInput,
    /// Boundary loops: outer first, then islands.
    #[serde(default)]
    pub boundaries: Vec<Vec<SegmentInput>>,
}

/// Level reference.
#[derive(Debug, Clone, Deserialize)]
pub struct LevelInput {
    pub name: String,
    pub elevation: f64,
}

/// Boundary segment with its end points.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct SegmentInput {
    pub start: [f64; 2],
    pub end: [f64; 2],
    #[serde(default)]
    pub arc: bool,
}

impl From<SegmentInput> for BoundarySegment {
    fn from(segment: SegmentInput) -> Self {
        BoundarySegment {
            start: Point2::new(segment.start[0], segment.start[1]),
            end: Point2::new(segment.end[0], segment.end[1]),
            is_arc: segment.arc,
        }
    }
}

impl RoomInput {
    /// Convert into a source room, assembling boundary rings.
    pub fn into_source(self) -> roominfo_core::Result<SourceRoom> {
        let loops: Vec<Vec<BoundarySegment>> = self
            .boundaries
            .into_iter()
            .map(|segments| segments.into_iter().map(BoundarySegment::from).collect())
            .collect();
        let shape = RoomShape::from_loops(&loops)?;

        Ok(SourceRoom {
            name: self.name,
            number: self.number,
            element_id: self.element_id,
            gross_area: self.area,
            gross_volume: self.volume,
            level: LevelRecord::new(self.level.name, self.level.elevation),
            shape,
        })
    }
}

/// Parse a room dump from JSON text.
pub fn parse_rooms(content: &str) -> Result<Vec<SourceRoom>> {
    let rooms: Vec<RoomInput> = serde_json::from_str(content).context("invalid room dump")?;
    rooms
        .into_iter()
        .map(|room| {
            let element_id = room.element_id;
            room.into_source()
                .with_context(|| format!("room {} has invalid boundaries", element_id))
        })
        .collect()
}

/// Read and parse a room dump file.
pub fn load_rooms(path: &Path) -> Result<Vec<SourceRoom>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read '{}'", path.display()))?;
    let rooms = parse_rooms(&content)?;
    tracing::debug!(path = %path.display(), rooms = rooms.len(), "Loaded room dump");
    Ok(rooms)
}
