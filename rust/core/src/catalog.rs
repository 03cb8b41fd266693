// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Room catalog construction
//!
//! Rooms are processed one at a time: net interior area, then average
//! height. Once every room is in (or the caller cancelled), the records are
//! ordered by level elevation and room number, the levels in use are
//! numbered, and each record receives its floor number.

use crate::error::Result;
use crate::levels::{distinct_levels, sequence_levels, LevelSequence};
use crate::report::{report_rows, ReportRow};
use crate::room::{RoomRecord, SourceRoom};
use crate::shape::{net_interior_area, DEFAULT_MIN_GROSS_AREA};
use crate::units::LengthUnit;

/// Options for catalog construction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatalogOptions {
    /// Rooms with a smaller gross area are treated as stale (net area 0)
    pub min_gross_area: f64,
    /// Reject shapes whose outer ring is not counter-clockwise or whose
    /// islands are not clockwise
    pub validate_winding: bool,
}

impl Default for CatalogOptions {
    fn default() -> Self {
        Self {
            min_gross_area: DEFAULT_MIN_GROSS_AREA,
            validate_winding: true,
        }
    }
}

/// Progress after a room has been processed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub processed: usize,
    pub total: usize,
}

impl Progress {
    /// Rounded percentage, clamped to 100
    pub fn percent(&self) -> u32 {
        if self.total == 0 {
            return 100;
        }
        let percent = (self.processed as f64 / self.total as f64 * 100.0).round() as u32;
        percent.min(100)
    }
}

/// Receives progress notifications and is polled for cancellation
pub trait ProgressObserver {
    /// Called after each room; must return promptly
    fn room_processed(&mut self, progress: Progress);

    /// Polled once per room, after the notification
    fn is_cancelled(&self) -> bool {
        false
    }
}

/// Observer that ignores progress and never cancels
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressObserver for NoProgress {
    fn room_processed(&mut self, _progress: Progress) {}
}

/// Ordered rooms with their level numbering
#[derive(Debug, Clone, Default)]
pub struct RoomCatalog {
    rooms: Vec<RoomRecord>,
    levels: LevelSequence,
}

impl RoomCatalog {
    /// Rooms sorted by level elevation, then room number
    pub fn rooms(&self) -> &[RoomRecord] {
        &self.rooms
    }

    /// Levels referenced by the rooms, with their floor numbers
    pub fn levels(&self) -> &LevelSequence {
        &self.levels
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// True when no room carries a gross volume, which usually means the
    /// model was saved without computed room volumes
    pub fn has_no_volumes(&self) -> bool {
        self.rooms.iter().all(|r| r.gross_volume() == 0.0)
    }

    /// Tabular rows in catalog order, converted to SI units
    pub fn report(&self, unit: LengthUnit, decimals: u32) -> Vec<ReportRow> {
        report_rows(&self.rooms, unit, decimals)
    }

    pub fn into_rooms(self) -> Vec<RoomRecord> {
        self.rooms
    }
}

/// Result of a catalog run that did not fail
#[derive(Debug, Clone)]
pub enum CatalogOutcome {
    /// Every room was processed
    Complete(RoomCatalog),
    /// The caller cancelled; only the rooms processed before cancellation
    /// are present, each fully computed
    Cancelled(RoomCatalog),
}

impl CatalogOutcome {
    pub fn catalog(&self) -> &RoomCatalog {
        match self {
            CatalogOutcome::Complete(catalog) | CatalogOutcome::Cancelled(catalog) => catalog,
        }
    }

    pub fn into_catalog(self) -> RoomCatalog {
        match self {
            CatalogOutcome::Complete(catalog) | CatalogOutcome::Cancelled(catalog) => catalog,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, CatalogOutcome::Cancelled(_))
    }
}

/// Builds a [`RoomCatalog`] from source rooms
#[derive(Debug, Clone, Default)]
pub struct RoomCatalogBuilder {
    options: CatalogOptions,
}

impl RoomCatalogBuilder {
    pub fn new(options: CatalogOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &CatalogOptions {
        &self.options
    }

    /// Build the catalog without progress reporting
    pub fn build(&self, rooms: &[SourceRoom]) -> Result<CatalogOutcome> {
        self.build_with_progress(rooms, &mut NoProgress)
    }

    /// Build the catalog, notifying `observer` after each room
    ///
    /// Any room failure aborts the whole run with an error naming the room.
    pub fn build_with_progress<P>(
        &self,
        rooms: &[SourceRoom],
        observer: &mut P,
    ) -> Result<CatalogOutcome>
    where
        P: ProgressObserver + ?Sized,
    {
        let total = rooms.len();
        let mut records = Vec::with_capacity(total);
        let mut cancelled = false;

        for (index, source) in rooms.iter().enumerate() {
            let record = self
                .process_room(source)
                .map_err(|e| e.in_room(source.element_id, &source.number))?;

            tracing::debug!(
                element_id = record.element_id(),
                number = %record.number(),
                net_area = record.net_area(),
                height = record.height(),
                "Processed room"
            );
            records.push(record);

            observer.room_processed(Progress {
                processed: index + 1,
                total,
            });
            if observer.is_cancelled() {
                cancelled = true;
                break;
            }
        }

        let catalog = Self::assemble(records)?;

        if cancelled {
            tracing::warn!(
                processed = catalog.len(),
                total,
                "Room catalog cancelled; result is partial"
            );
            return Ok(CatalogOutcome::Cancelled(catalog));
        }

        tracing::info!(
            rooms = catalog.len(),
            levels = catalog.levels().len(),
            basements = catalog.levels().basement_count(),
            "Room catalog built"
        );
        if catalog.has_no_volumes() {
            tracing::warn!(
                rooms = catalog.len(),
                "No room has a gross volume; enable area and volume computation in the model and export again"
            );
        }

        Ok(CatalogOutcome::Complete(catalog))
    }

    /// Compute the record of a single room (floor number not yet assigned)
    pub fn process_room(&self, source: &SourceRoom) -> Result<RoomRecord> {
        if self.options.validate_winding && source.gross_area >= self.options.min_gross_area {
            source.shape.validate_winding()?;
        }

        let net_area = net_interior_area(
            &source.shape,
            source.gross_area,
            self.options.min_gross_area,
        )?;

        Ok(RoomRecord::new(source, net_area))
    }

    /// Order the records, number the levels in use and back-fill floor numbers
    fn assemble(mut rooms: Vec<RoomRecord>) -> Result<RoomCatalog> {
        rooms.sort_by(|a, b| {
            a.level()
                .elevation
                .total_cmp(&b.level().elevation)
                .then_with(|| a.number().cmp(b.number()))
        });

        let levels = sequence_levels(&distinct_levels(rooms.iter().map(|r| r.level())));

        for room in &mut rooms {
            let sequence = levels.require(&room.level().name)?;
            room.set_level_sequence(sequence);
        }

        Ok(RoomCatalog { rooms, levels })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::ring::BoundaryRing;
    use crate::room::LevelRecord;
    use crate::shape::RoomShape;
    use approx::assert_relative_eq;
    use nalgebra::Point2;

    fn square_room(id: i64, number: &str, level: (&str, f64), side: f64, volume: f64) -> SourceRoom {
        let ring = BoundaryRing::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(side, 0.0),
            Point2::new(side, side),
            Point2::new(0.0, side),
        ]);
        SourceRoom {
            name: format!("Room {}", number),
            number: number.to_string(),
            element_id: id,
            gross_area: side * side,
            gross_volume: volume,
            level: LevelRecord::new(level.0, level.1),
            shape: RoomShape::new(vec![ring]),
        }
    }

    struct CancelAfter {
        limit: usize,
        seen: Vec<Progress>,
    }

    impl ProgressObserver for CancelAfter {
        fn room_processed(&mut self, progress: Progress) {
            self.seen.push(progress);
        }

        fn is_cancelled(&self) -> bool {
            self.seen.len() >= self.limit
        }
    }

    #[test]
    fn test_ordering_and_numbering() {
        let rooms = vec![
            square_room(1, "201", ("2F", 3.0), 2.0, 12.0),
            square_room(2, "101", ("1F", 0.0), 3.0, 27.0),
            square_room(3, "B02", ("B1", -4.0), 2.0, 16.0),
            square_room(4, "102", ("1F", 0.0), 1.0, 3.0),
        ];
        let outcome = RoomCatalogBuilder::default().build(&rooms).unwrap();
        assert!(!outcome.is_cancelled());

        let catalog = outcome.catalog();
        let order: Vec<&str> = catalog.rooms().iter().map(|r| r.number()).collect();
        assert_eq!(order, vec!["B02", "101", "102", "201"]);

        let floors: Vec<i32> = catalog.rooms().iter().map(|r| r.level_sequence()).collect();
        assert_eq!(floors, vec![-1, 0, 0, 1]);

        assert_relative_eq!(catalog.rooms()[1].height(), 3.0, epsilon = 1e-12);
        assert_eq!(catalog.levels().len(), 3);
    }

    #[test]
    fn test_cancellation_keeps_processed_rooms() {
        let rooms = vec![
            square_room(1, "101", ("1F", 0.0), 2.0, 12.0),
            square_room(2, "102", ("1F", 0.0), 2.0, 12.0),
            square_room(3, "201", ("2F", 3.0), 2.0, 12.0),
        ];
        let mut observer = CancelAfter {
            limit: 2,
            seen: Vec::new(),
        };
        let outcome = RoomCatalogBuilder::default()
            .build_with_progress(&rooms, &mut observer)
            .unwrap();

        assert!(outcome.is_cancelled());
        assert_eq!(observer.seen.len(), 2);
        assert_eq!(observer.seen[1], Progress { processed: 2, total: 3 });

        let catalog = outcome.into_catalog();
        assert_eq!(catalog.len(), 2);
        assert!(catalog.rooms().iter().all(|r| r.net_area() == 4.0 && r.height() == 3.0));
        assert_eq!(catalog.levels().len(), 1);
    }

    #[test]
    fn test_failure_names_the_room() {
        let mut bad = square_room(7, "X1", ("1F", 0.0), 2.0, 8.0);
        bad.shape = RoomShape::new(vec![BoundaryRing::new(vec![Point2::new(0.0, 0.0)])]);
        let rooms = vec![square_room(1, "101", ("1F", 0.0), 2.0, 12.0), bad];

        let err = RoomCatalogBuilder::default().build(&rooms).unwrap_err();
        match &err {
            Error::Room { element_id, number, .. } => {
                assert_eq!(*element_id, 7);
                assert_eq!(number, "X1");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(matches!(err.root_cause(), Error::MalformedRing { .. }));
    }

    #[test]
    fn test_winding_validation_can_be_disabled() {
        let mut room = square_room(1, "101", ("1F", 0.0), 2.0, 12.0);
        let reversed: Vec<_> = room.shape.rings()[0].points().iter().rev().cloned().collect();
        room.shape = RoomShape::new(vec![BoundaryRing::new(reversed)]);

        assert!(RoomCatalogBuilder::default().process_room(&room).is_err());

        let lenient = RoomCatalogBuilder::new(CatalogOptions {
            validate_winding: false,
            ..Default::default()
        });
        let record = lenient.process_room(&room).unwrap();
        assert_relative_eq!(record.net_area(), -4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_stale_room_is_kept_with_zero_height() {
        let mut stale = square_room(9, "900", ("1F", 0.0), 2.0, 0.0);
        stale.gross_area = 0.0;
        let outcome = RoomCatalogBuilder::default().build(&[stale]).unwrap();
        let room = &outcome.catalog().rooms()[0];

        assert_eq!(room.net_area(), 0.0);
        assert_eq!(room.height(), 0.0);
        assert!(outcome.catalog().has_no_volumes());
    }

    #[test]
    fn test_progress_percent() {
        assert_eq!(Progress { processed: 1, total: 3 }.percent(), 33);
        assert_eq!(Progress { processed: 2, total: 3 }.percent(), 67);
        assert_eq!(Progress { processed: 3, total: 3 }.percent(), 100);
        assert_eq!(Progress { processed: 0, total: 0 }.percent(), 100);
    }

    #[test]
    fn test_empty_input() {
        let outcome = RoomCatalogBuilder::default().build(&[]).unwrap();
        assert!(outcome.catalog().is_empty());
        assert!(outcome.catalog().levels().is_empty());
        assert!(outcome.catalog().has_no_volumes());
    }
}
