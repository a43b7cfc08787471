//! Puzzle catalog
//!
//! Loads puzzle records from JSON, validates each description against the
//! board grammar, and samples study sets. The JSON field names (`id`,
//! `desc`, `minimalMoves`) are a stable contract with external puzzle
//! sources; `minimalMoves` is opaque to the engine and only echoed back to
//! consumers as a move budget.

use std::io::Read;

use log::warn;
use rand::seq::IndexedRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::board::Board;

/// Lowest minimal-move level served to players.
pub const MIN_LEVEL: u32 = 2;

/// Highest minimal-move level served to players.
pub const MAX_LEVEL: u32 = 20;

/// One puzzle record as served by external puzzle sources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Puzzle {
    pub id: String,
    pub desc: String,
    pub minimal_moves: u32,
}

/// A loaded set of puzzle records.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    puzzles: Vec<Puzzle>,
}

impl Catalog {
    pub fn new(puzzles: Vec<Puzzle>) -> Catalog {
        Catalog { puzzles }
    }

    /// Deserialize a catalog from a JSON array of records.
    pub fn from_json_str(json: &str) -> serde_json::Result<Catalog> {
        Ok(Catalog { puzzles: serde_json::from_str(json)? })
    }

    /// Deserialize a catalog from a JSON reader.
    pub fn from_reader<R: Read>(reader: R) -> serde_json::Result<Catalog> {
        Ok(Catalog { puzzles: serde_json::from_reader(reader)? })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.puzzles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.puzzles.is_empty()
    }

    #[inline]
    pub fn puzzles(&self) -> &[Puzzle] {
        &self.puzzles
    }

    /// Look up a record by identifier.
    pub fn by_id(&self, id: &str) -> Option<&Puzzle> {
        self.puzzles.iter().find(|p| p.id == id)
    }

    /// Drop records that cannot be served: descriptions that fail to parse,
    /// boards containing walls, and levels outside
    /// [`MIN_LEVEL`]..=[`MAX_LEVEL`]. Each drop is logged.
    pub fn retain_valid(&mut self) {
        self.puzzles.retain(|p| {
            if !(MIN_LEVEL..=MAX_LEVEL).contains(&p.minimal_moves) {
                warn!("puzzle {}: level {} out of range, skipping", p.id, p.minimal_moves);
                return false;
            }
            match p.desc.parse::<Board>() {
                Err(err) => {
                    warn!("puzzle {}: {err}, skipping", p.id);
                    false
                }
                Ok(board) => {
                    if board.pieces().iter().any(|piece| piece.is_fixed()) {
                        warn!("puzzle {}: contains walls, skipping", p.id);
                        return false;
                    }
                    true
                }
            }
        });
    }

    /// Pick one puzzle per level in [`MIN_LEVEL`]..=[`MAX_LEVEL`], ordered
    /// by ascending level. Levels with no candidates are skipped.
    pub fn sample_one_per_level<R: Rng>(&self, rng: &mut R) -> Vec<Puzzle> {
        let mut selected = Vec::new();
        for level in MIN_LEVEL..=MAX_LEVEL {
            let pool: Vec<&Puzzle> =
                self.puzzles.iter().filter(|p| p.minimal_moves == level).collect();
            if let Some(choice) = pool.choose(rng) {
                selected.push((*choice).clone());
            }
        }
        selected
    }

    /// Pick any one record uniformly at random.
    pub fn sample_any<R: Rng>(&self, rng: &mut R) -> Option<&Puzzle> {
        self.puzzles.choose(rng)
    }
}
