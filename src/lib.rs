//! Strictly Scorebook - text front end for the `strictly_cricket` engine
//!
//! Everything a scorer touches lives here; every scoring rule lives in the
//! engine crate.
//!
//! # Architecture
//!
//! - **Setup**: TOML match setup with defaults
//! - **Console**: one-line command parser
//! - **Session**: interactive scoring loop over any reader and writer
//! - **Script**: replay of a recorded match
//! - **Scoreboard**: plain-text status, cards and result
//! - **Export**: scorecard sheets as CSV
//!
//! # Example
//!
//! ```
//! use strictly_scorebook::{MatchScript, SetupFile};
//!
//! let script = MatchScript::new(
//!     SetupFile::default(),
//!     vec!["bat Ann".into(), "off Bea".into(), "bowl Cat".into(), "4".into()],
//! );
//! let progress = script.play().unwrap();
//! assert_eq!(*progress.state().current().runs(), 4);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod console;
mod export;
mod scoreboard;
mod script;
mod session;
mod setup;

// Crate-level exports - Console parsing
pub use console::{ConsoleCommand, HELP, ParseError, parse_command};

// Crate-level exports - Report export
pub use export::{ExportError, Sheet, report_sheets, write_report};

// Crate-level exports - Text rendering
pub use scoreboard::{render_cards, render_result, render_status};

// Crate-level exports - Scripts and sessions
pub use script::{MatchScript, ScriptError};
pub use session::{Flow, ScoringSession};

// Crate-level exports - Setup
pub use setup::{SetupError, SetupFile};
