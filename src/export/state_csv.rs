//! CSV export of a single state set

use std::path::Path;

use serde::Serialize;

use super::document::StateSetDocument;
use crate::Result;

/// One CSV row: state fields plus its successor ids
#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    id: u32,
    board: &'a str,
    marks: usize,
    status: &'a str,
    targets: String,
}

/// Write a state set to CSV, one row per state.
///
/// Successor ids are joined with spaces in the `targets` column so the file
/// stays one row per state. Returns the number of rows written.
///
/// # Errors
///
/// Returns an error if the file cannot be created or a row cannot be
/// written.
pub fn write_csv<Id, P>(set: &StateSetDocument<Id>, path: P) -> Result<usize>
where
    Id: Copy + Into<u32>,
    P: AsRef<Path>,
{
    let mut writer = csv::Writer::from_path(path)?;

    for (record, targets) in set.states.iter().zip(&set.edges) {
        let targets = targets
            .iter()
            .map(|&id| {
                let id: u32 = id.into();
                id.to_string()
            })
            .collect::<Vec<_>>()
            .join(" ");

        writer.serialize(CsvRow {
            id: record.id.into(),
            board: &record.board,
            marks: record.marks,
            status: record.status.as_str(),
            targets,
        })?;
    }

    writer.flush()?;
    Ok(set.states.len())
}
