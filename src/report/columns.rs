use crate::constants::columns::{LOSER_PREFIX, TOURNAMENT, WINNER_PREFIX};
use crate::constants::roster::MAX_SLOTS;
use crate::data_fetcher::models::{MatchRecord, TournamentMetadata};

/// Total number of report columns
pub const COLUMN_COUNT: usize = TOURNAMENT.len() + 2 * MAX_SLOTS;

/// Report header: tournament columns, then `w1..w9`, then `l1..l9`
pub fn header() -> Vec<String> {
    TOURNAMENT
        .iter()
        .map(|c| c.to_string())
        .chain(slot_names(WINNER_PREFIX))
        .chain(slot_names(LOSER_PREFIX))
        .collect()
}

fn slot_names(prefix: &str) -> impl Iterator<Item = String> + '_ {
    (1..=MAX_SLOTS).map(move |i| format!("{prefix}{i}"))
}

/// Pads (or truncates) a name list to exactly [`MAX_SLOTS`] cells
fn fixed_slots(names: &[String]) -> impl Iterator<Item = String> + '_ {
    (0..MAX_SLOTS).map(move |i| names.get(i).cloned().unwrap_or_default())
}

/// One report line: tournament metadata followed by one match's players
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputRow {
    cells: Vec<String>,
}

impl OutputRow {
    pub fn new(metadata: &TournamentMetadata, record: &MatchRecord) -> Self {
        let cells = [
            metadata.name.clone(),
            metadata.start.clone(),
            metadata.region.clone(),
            metadata.prize_pool.clone(),
        ]
        .into_iter()
        .chain(fixed_slots(&record.winners))
        .chain(fixed_slots(&record.losers))
        .collect();

        OutputRow { cells }
    }

    pub fn cells(&self) -> &[String] {
        &self.cells
    }

    /// Cell under a header name, if the column exists
    pub fn get(&self, column: &str) -> Option<&str> {
        header()
            .iter()
            .position(|c| c == column)
            .map(|i| self.cells[i].as_str())
    }
}

/// Cross-joins the single metadata row with every match record
pub fn build_rows(metadata: &TournamentMetadata, records: &[MatchRecord]) -> Vec<OutputRow> {
    records
        .iter()
        .map(|record| OutputRow::new(metadata, record))
        .collect()
}
