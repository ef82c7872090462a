//! Serializable snapshot of a built atlas

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::Result;
use crate::atlas::Atlas;
use crate::board::{Board, GameStatus};
use crate::identifiers::{StateId, UniqueId};

/// One state as handed to a presentation consumer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateRecord<Id> {
    pub id: Id,
    /// 9-character row-major encoding, `.`/`X`/`O`
    pub board: String,
    /// Number of occupied cells
    pub marks: usize,
    pub status: GameStatus,
}

/// One state set together with its transition edges.
///
/// `edges` is indexed parallel to `states`: row `i` lists the successors of
/// the state with id `i + 1`, sorted ascending and empty for terminals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateSetDocument<Id> {
    pub count: usize,
    pub edge_count: usize,
    pub states: Vec<StateRecord<Id>>,
    pub edges: Vec<Vec<Id>>,
}

impl<Id> StateSetDocument<Id> {
    fn from_parts(states: Vec<StateRecord<Id>>, edges: Vec<Vec<Id>>) -> Self {
        Self {
            count: states.len(),
            edge_count: edges.iter().map(Vec::len).sum(),
            states,
            edges,
        }
    }
}

/// The complete export payload: both state sets, their edges, and the
/// mapping from every full state to its symmetry class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtlasDocument {
    pub full: StateSetDocument<StateId>,
    pub unique: StateSetDocument<UniqueId>,
    /// Class id of each full state, indexed by full id minus one
    pub class_of: Vec<UniqueId>,
}

impl AtlasDocument {
    /// Assemble the document from a built atlas.
    pub fn from_atlas(atlas: &Atlas) -> Self {
        let full_states = atlas
            .space()
            .iter()
            .map(|(id, board)| record(id, board))
            .collect();
        let full_edges = atlas
            .full_transitions()
            .rows()
            .map(|row| row.to_vec())
            .collect();

        let unique_states = atlas
            .reduced()
            .iter()
            .map(|(id, board)| record(id, board))
            .collect();
        let unique_edges = atlas
            .unique_transitions()
            .rows()
            .map(|row| row.to_vec())
            .collect();

        Self {
            full: StateSetDocument::from_parts(full_states, full_edges),
            unique: StateSetDocument::from_parts(unique_states, unique_edges),
            class_of: atlas.reduced().class_map().to_vec(),
        }
    }

    /// Save the document as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or written.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Load a document from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or does not contain a
    /// valid document.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let document = serde_json::from_reader(file)?;
        Ok(document)
    }
}

fn record<Id>(id: Id, board: &Board) -> StateRecord<Id> {
    StateRecord {
        id,
        board: board.encode(),
        marks: board.occupied_count(),
        status: board.status(),
    }
}
