// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Report output.

use anyhow::{Context, Result};
use roominfo_core::{CatalogOutcome, LengthUnit, ReportRow, SequencedLevel};
use serde::Serialize;
use std::io::Write;
use std::path::Path;

/// Whether the catalog covers every room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
    Complete,
    Cancelled,
}

/// Exported document.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogReport {
    pub status: RunStatus,
    /// No room has a gross volume; heights are all zero.
    pub no_volumes: bool,
    /// Unit the source values were converted from.
    pub source_unit: LengthUnit,
    pub levels: Vec<SequencedLevel>,
    pub rooms: Vec<ReportRow>,
}

impl CatalogReport {
    pub fn new(outcome: &CatalogOutcome, unit: LengthUnit, decimals: u32) -> Self {
        let catalog = outcome.catalog();
        Self {
            status: if outcome.is_cancelled() {
                RunStatus::Cancelled
            } else {
                RunStatus::Complete
            },
            no_volumes: catalog.has_no_volumes(),
            source_unit: unit,
            levels: catalog.levels().levels().to_vec(),
            rooms: catalog.report(unit, decimals),
        }
    }
}

/// Write the report as pretty JSON to a file, or to stdout when no path is given.
pub fn write_report(report: &CatalogReport, path: Option<&Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;

    match path {
        Some(path) => {
            std::fs::write(path, json)
                .with_context(|| format!("cannot write '{}'", path.display()))?;
            tracing::info!(path = %path.display(), rooms = report.rooms.len(), "Report written");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", json)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use roominfo_core::{
        BoundaryRing, LevelRecord, Point2, RoomCatalogBuilder, RoomShape, SourceRoom,
    };

    #[test]
    fn test_report_json_shape() {
        let room = SourceRoom {
            name: "Archive".into(),
            number: "B10".into(),
            element_id: 1,
            gross_area: 1.0,
            gross_volume: 0.0,
            level: LevelRecord::new("B1", -3.0),
            shape: RoomShape::new(vec![BoundaryRing::new(vec![
                Point2::new(0.0, 0.0),
                Point2::new(1.0, 0.0),
                Point2::new(1.0, 1.0),
                Point2::new(0.0, 1.0),
            ])]),
        };
        let outcome = RoomCatalogBuilder::default().build(&[room]).unwrap();
        let report = CatalogReport::new(&outcome, LengthUnit::Metre, 3);
        let value = serde_json::to_value(&report).unwrap();

        assert_eq!(value["status"], "complete");
        assert_eq!(value["no_volumes"], true);
        assert_eq!(value["source_unit"], "metre");
        assert_eq!(value["rooms"][0]["number"], "B10");
        assert_eq!(value["rooms"][0]["floor_area_m2"], 1.0);
        assert_eq!(value["levels"][0]["sequence"], 0);
    }
}
