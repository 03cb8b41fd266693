// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Tabular report rows for export

use crate::room::RoomRecord;
use crate::units::{round_to, LengthUnit};

/// One exported row, in SI units
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReportRow {
    /// Level name
    pub level: String,
    /// Floor number (0 = first above-grade level)
    pub level_sequence: i32,
    pub name: String,
    pub number: String,
    pub element_id: i64,
    /// Net interior floor area in square metres
    pub floor_area_m2: f64,
    /// Average ceiling height in metres
    pub ceiling_height_m: f64,
}

impl ReportRow {
    pub fn from_record(room: &RoomRecord, unit: LengthUnit, decimals: u32) -> Self {
        Self {
            level: room.level().name.clone(),
            level_sequence: room.level_sequence(),
            name: room.name().to_string(),
            number: room.number().to_string(),
            element_id: room.element_id(),
            floor_area_m2: round_to(unit.area_to_square_metres(room.net_area()), decimals),
            ceiling_height_m: round_to(unit.length_to_metres(room.height()), decimals),
        }
    }
}

/// Convert records to rows, keeping their order
pub fn report_rows(rooms: &[RoomRecord], unit: LengthUnit, decimals: u32) -> Vec<ReportRow> {
    rooms
        .iter()
        .map(|room| ReportRow::from_record(room, unit, decimals))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::room::{LevelRecord, SourceRoom};
    use crate::shape::RoomShape;

    #[test]
    fn test_row_in_square_metres() {
        let source = SourceRoom {
            name: "Office".into(),
            number: "204".into(),
            element_id: 311,
            gross_area: 100.0,
            gross_volume: 900.0,
            level: LevelRecord::new("2F", 12.0),
            shape: RoomShape::default(),
        };
        // 100 sq ft at 9 ft
        let record = RoomRecord::new(&source, 100.0);
        let row = ReportRow::from_record(&record, LengthUnit::Feet, 3);

        assert_eq!(row.level, "2F");
        assert_eq!(row.number, "204");
        assert_eq!(row.floor_area_m2, 9.29);
        assert_eq!(row.ceiling_height_m, 2.743);
    }
}
