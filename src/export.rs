//! Scorecard report export.
//!
//! One sheet per card: both cards of the first innings, then the second
//! innings' cards if anyone batted or bowled in it. Each sheet is written
//! as its own CSV file named after the innings and the sheet, rows keyed
//! by player name.

use derive_getters::Getters;
use derive_more::{Display, Error};
use std::path::{Path, PathBuf};
use strictly_cricket::{BATTING_COLUMNS, BOWLING_COLUMNS, InningsNumber, InningsState, MatchState};
use tracing::{debug, info, instrument};

/// A table of one scorecard.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Sheet {
    /// Innings the card belongs to.
    innings: InningsNumber,
    /// Sheet name, e.g. `"India Batting"`.
    name: String,
    /// Column headers, player column first.
    header: Vec<String>,
    /// One row per player in entry order.
    rows: Vec<Vec<String>>,
}

impl Sheet {
    fn batting(number: InningsNumber, innings: &InningsState) -> Self {
        Self {
            innings: number,
            name: format!("{} Batting", innings.batting_team()),
            header: std::iter::once("Batsman")
                .chain(BATTING_COLUMNS)
                .map(String::from)
                .collect(),
            rows: innings
                .batting_card()
                .iter()
                .map(|(name, stats)| std::iter::once(name.to_string()).chain(stats.row()).collect())
                .collect(),
        }
    }

    fn bowling(number: InningsNumber, innings: &InningsState) -> Self {
        Self {
            innings: number,
            name: format!("{} Bowling", innings.bowling_team()),
            header: std::iter::once("Bowler")
                .chain(BOWLING_COLUMNS)
                .map(String::from)
                .collect(),
            rows: innings
                .bowling_card()
                .iter()
                .map(|(name, stats)| std::iter::once(name.to_string()).chain(stats.row()).collect())
                .collect(),
        }
    }

    /// File name for the sheet: innings number, then the name with unsafe
    /// characters replaced.
    pub fn file_name(&self) -> String {
        let stem: String = self
            .name
            .chars()
            .map(|c| if c.is_alphanumeric() || c == '-' { c } else { '_' })
            .collect();
        format!("{}_{}.csv", self.innings.number(), stem)
    }

    /// Writes the sheet as CSV.
    #[instrument(skip(self, writer), fields(sheet = %self.name))]
    pub fn write_csv<W: std::io::Write>(&self, writer: W) -> Result<(), ExportError> {
        let mut csv = csv::Writer::from_writer(writer);
        csv.write_record(&self.header)?;
        for row in &self.rows {
            csv.write_record(row)?;
        }
        csv.flush()?;
        Ok(())
    }
}

/// Builds the report sheets for a match.
#[instrument(skip(state))]
pub fn report_sheets(state: &MatchState) -> Vec<Sheet> {
    let mut sheets = vec![
        Sheet::batting(InningsNumber::First, state.innings1()),
        Sheet::bowling(InningsNumber::First, state.innings1()),
    ];
    if let Some(innings2) = state.innings2() {
        if !innings2.batting_card().is_empty() {
            sheets.push(Sheet::batting(InningsNumber::Second, innings2));
        }
        if !innings2.bowling_card().is_empty() {
            sheets.push(Sheet::bowling(InningsNumber::Second, innings2));
        }
    }
    debug!(count = sheets.len(), "Report sheets built");
    sheets
}

/// Writes every report sheet to `dir`, creating it if needed.
#[instrument(skip(state, dir), fields(dir = %dir.as_ref().display()))]
pub fn write_report(state: &MatchState, dir: impl AsRef<Path>) -> Result<Vec<PathBuf>, ExportError> {
    let dir = dir.as_ref();
    std::fs::create_dir_all(dir)?;

    let mut written = Vec::new();
    for sheet in report_sheets(state) {
        let path = dir.join(sheet.file_name());
        if written.contains(&path) {
            return Err(ExportError::new(format!(
                "Sheets '{}' share the file {}",
                sheet.name(),
                path.display()
            )));
        }
        let file = std::fs::File::create(&path)?;
        sheet.write_csv(file)?;
        written.push(path);
    }

    info!(files = written.len(), "Match report written");
    Ok(written)
}

/// Report export error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Export error: {} at {}:{}", message, file, line)]
pub struct ExportError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ExportError {
    /// Creates a new export error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<csv::Error> for ExportError {
    #[track_caller]
    fn from(err: csv::Error) -> Self {
        Self::new(format!("CSV error: {}", err))
    }
}

impl From<std::io::Error> for ExportError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("I/O error: {}", err))
    }
}
