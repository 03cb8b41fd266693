// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # RoomInfo Core
//!
//! Normalizes rooms extracted from a building model into an ordered,
//! annotated catalog ready for tabular export.
//!
//! ## Overview
//!
//! - **Net interior area**: shoelace area of every boundary ring of a room,
//!   summed so that clockwise islands (columns, shafts) are subtracted
//! - **Average height**: gross volume divided by net interior area
//! - **Floor numbering**: levels in use are numbered by elevation with the
//!   first above-grade level at 0 and basements negative
//! - **Catalog**: rooms ordered by level elevation, then room number
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use roominfo_core::{RoomCatalogBuilder, CatalogOutcome, LengthUnit};
//!
//! let outcome = RoomCatalogBuilder::default().build(&source_rooms)?;
//! if outcome.catalog().has_no_volumes() {
//!     eprintln!("model has no room volumes");
//! }
//! for row in outcome.catalog().report(LengthUnit::Feet, 3) {
//!     println!("{} {} {} {:.3}", row.level, row.number, row.name, row.floor_area_m2);
//! }
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization support for records and report rows

pub mod catalog;
pub mod error;
pub mod levels;
pub mod report;
pub mod ring;
pub mod room;
pub mod shape;
pub mod units;

pub use catalog::{
    CatalogOptions, CatalogOutcome, NoProgress, Progress, ProgressObserver, RoomCatalog,
    RoomCatalogBuilder,
};
pub use error::{Error, Result};
pub use levels::{distinct_levels, is_below_grade, sequence_levels, LevelSequence, SequencedLevel};
pub use report::{report_rows, ReportRow};
pub use ring::{signed_area, BoundaryRing, BoundarySegment, Winding};
pub use room::{estimate_height, LevelRecord, RoomRecord, SourceRoom};
pub use shape::{net_interior_area, RoomShape, DEFAULT_MIN_GROSS_AREA};
pub use units::{round_to, LengthUnit};

// Re-export nalgebra point type for convenience
pub use nalgebra::Point2;
