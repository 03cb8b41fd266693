// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Room and level records

use crate::shape::RoomShape;

/// A named building level at a signed elevation from the reference datum
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LevelRecord {
    pub name: String,
    pub elevation: f64,
}

impl LevelRecord {
    pub fn new(name: impl Into<String>, elevation: f64) -> Self {
        Self {
            name: name.into(),
            elevation,
        }
    }
}

/// A room as handed over by the model-access collaborator
#[derive(Debug, Clone)]
pub struct SourceRoom {
    pub name: String,
    pub number: String,
    /// Stable element identifier in the source model
    pub element_id: i64,
    /// Gross area reported by the model
    pub gross_area: f64,
    /// Gross volume reported by the model (authoritative)
    pub gross_volume: f64,
    pub level: LevelRecord,
    pub shape: RoomShape,
}

/// A fully computed catalog entry
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoomRecord {
    name: String,
    number: String,
    element_id: i64,
    gross_area: f64,
    gross_volume: f64,
    net_area: f64,
    height: f64,
    level: LevelRecord,
    level_sequence: i32,
}

impl RoomRecord {
    /// Create a record from a source room and its computed net interior area.
    ///
    /// Line breaks are removed from the room name. The level sequence number
    /// stays 0 until the catalog assigns it.
    pub(crate) fn new(source: &SourceRoom, net_area: f64) -> Self {
        let name: String = source
            .name
            .chars()
            .filter(|c| *c != '\n' && *c != '\r')
            .collect();

        Self {
            name,
            number: source.number.clone(),
            element_id: source.element_id,
            gross_area: source.gross_area,
            gross_volume: source.gross_volume,
            net_area,
            height: estimate_height(source.gross_volume, net_area),
            level: source.level.clone(),
            level_sequence: 0,
        }
    }

    pub(crate) fn set_level_sequence(&mut self, sequence: i32) {
        self.level_sequence = sequence;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn element_id(&self) -> i64 {
        self.element_id
    }

    pub fn gross_area(&self) -> f64 {
        self.gross_area
    }

    pub fn gross_volume(&self) -> f64 {
        self.gross_volume
    }

    /// Net interior area: outer boundary minus islands
    pub fn net_area(&self) -> f64 {
        self.net_area
    }

    /// Average interior height
    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn level(&self) -> &LevelRecord {
        &self.level
    }

    /// Floor index: 0 for the first above-grade level, negative below grade
    pub fn level_sequence(&self) -> i32 {
        self.level_sequence
    }
}

/// Average interior height from gross volume and net interior area
///
/// Zero net area yields 0.
#[inline]
pub fn estimate_height(gross_volume: f64, net_area: f64) -> f64 {
    if net_area != 0.0 {
        gross_volume / net_area
    } else {
        0.0
    }
}
