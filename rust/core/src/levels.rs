// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Floor numbering from level elevations
//!
//! Levels are ordered by elevation and numbered contiguously so that the
//! first above-grade level is 0, basements are negative and upper floors
//! count up by one per level.
//!
//! A level counts as a basement when its elevation is negative and at least
//! a third of its story height lies below the datum. The story height is
//! approximated by the elevation gap to the next level up, so the topmost
//! level is never classified.

use crate::error::{Error, Result};
use crate::room::LevelRecord;
use rustc_hash::{FxHashMap, FxHashSet};

/// A level with its assigned floor number
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SequencedLevel {
    pub level: LevelRecord,
    pub sequence: i32,
    /// Classified as a below-grade story
    pub below_grade: bool,
}

/// Mapping from level name to floor number, in ascending elevation order
#[derive(Debug, Clone, Default)]
pub struct LevelSequence {
    levels: Vec<SequencedLevel>,
    by_name: FxHashMap<String, i32>,
    basement_count: usize,
}

impl LevelSequence {
    /// Floor number of a level, if the level is part of the sequence
    pub fn get(&self, name: &str) -> Option<i32> {
        self.by_name.get(name).copied()
    }

    /// Floor number of a level, failing when the level is unknown
    pub fn require(&self, name: &str) -> Result<i32> {
        self.get(name).ok_or_else(|| Error::IncompleteLevelMapping {
            level: name.to_string(),
        })
    }

    /// Levels in ascending elevation order
    pub fn levels(&self) -> &[SequencedLevel] {
        &self.levels
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Number of levels classified as below grade
    pub fn basement_count(&self) -> usize {
        self.basement_count
    }
}

/// Whether a level qualifies as a basement given the next level's elevation
#[inline]
pub fn is_below_grade(elevation: f64, next_elevation: f64) -> bool {
    elevation < 0.0 && (next_elevation - elevation).abs() / 3.0 <= elevation.abs()
}

/// Assign floor numbers to a set of distinct levels
///
/// Levels are sorted by elevation (stable, so equal elevations keep their
/// input order). Numbering starts at minus the basement count.
pub fn sequence_levels(levels: &[LevelRecord]) -> LevelSequence {
    let mut sorted: Vec<&LevelRecord> = levels.iter().collect();
    sorted.sort_by(|a, b| a.elevation.total_cmp(&b.elevation));

    let below_grade: Vec<bool> = (0..sorted.len())
        .map(|i| {
            sorted
                .get(i + 1)
                .is_some_and(|next| is_below_grade(sorted[i].elevation, next.elevation))
        })
        .collect();
    let basement_count = below_grade.iter().filter(|b| **b).count();

    let mut sequence = -(basement_count as i32);
    let mut result = Vec::with_capacity(sorted.len());
    let mut by_name = FxHashMap::default();

    for (level, below_grade) in sorted.into_iter().zip(below_grade) {
        by_name.entry(level.name.clone()).or_insert(sequence);
        result.push(SequencedLevel {
            level: level.clone(),
            sequence,
            below_grade,
        });
        sequence += 1;
    }

    tracing::debug!(
        levels = result.len(),
        basements = basement_count,
        "Sequenced levels"
    );

    LevelSequence {
        levels: result,
        by_name,
        basement_count,
    }
}

/// Distinct levels by name, first occurrence wins
pub fn distinct_levels<'a, I>(levels: I) -> Vec<LevelRecord>
where
    I: IntoIterator<Item = &'a LevelRecord>,
{
    let mut seen: FxHashSet<&'a str> = FxHashSet::default();
    let mut result = Vec::new();
    for level in levels {
        if seen.insert(level.name.as_str()) {
            result.push(level.clone());
        }
    }
    result
}
