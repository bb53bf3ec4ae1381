//! Who is facing, who is at the other end, and who is bowling.

use super::error::InvalidInputError;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// The two batsmen at the crease and the current bowler.
///
/// Slots are `None` until the scorer names a player, after a dismissal
/// vacates the striker's slot, and after an innings ends.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StrikeState {
    on_strike: Option<String>,
    off_strike: Option<String>,
    bowler: Option<String>,
}

impl StrikeState {
    /// Creates an empty strike state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Batsman facing the next ball.
    pub fn on_strike(&self) -> Option<&str> {
        self.on_strike.as_deref()
    }

    /// Batsman at the non-striker's end.
    pub fn off_strike(&self) -> Option<&str> {
        self.off_strike.as_deref()
    }

    /// Current bowler.
    pub fn bowler(&self) -> Option<&str> {
        self.bowler.as_deref()
    }

    /// Puts a batsman on strike.
    #[instrument(skip(self))]
    pub fn set_on_strike(&mut self, name: &str) -> Result<(), InvalidInputError> {
        let name = validate_name(name)?;
        if self.off_strike.as_deref() == Some(name.as_str()) {
            return Err(InvalidInputError::SameBatsman(name));
        }
        self.on_strike = Some(name);
        Ok(())
    }

    /// Puts a batsman at the non-striker's end.
    #[instrument(skip(self))]
    pub fn set_off_strike(&mut self, name: &str) -> Result<(), InvalidInputError> {
        let name = validate_name(name)?;
        if self.on_strike.as_deref() == Some(name.as_str()) {
            return Err(InvalidInputError::SameBatsman(name));
        }
        self.off_strike = Some(name);
        Ok(())
    }

    /// Brings a bowler on.
    #[instrument(skip(self))]
    pub fn set_bowler(&mut self, name: &str) -> Result<(), InvalidInputError> {
        self.bowler = Some(validate_name(name)?);
        Ok(())
    }

    /// Batsmen change ends.
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.on_strike, &mut self.off_strike);
        debug!(on_strike = ?self.on_strike, off_strike = ?self.off_strike, "Strike rotated");
    }

    /// Empties the slot holding `name`, if any.
    pub fn vacate(&mut self, name: &str) {
        if self.on_strike.as_deref() == Some(name) {
            self.on_strike = None;
        } else if self.off_strike.as_deref() == Some(name) {
            self.off_strike = None;
        }
    }

    /// Resets every slot.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

fn validate_name(name: &str) -> Result<String, InvalidInputError> {
    if name.trim().is_empty() {
        Err(InvalidInputError::EmptyName)
    } else {
        Ok(name.to_string())
    }
}
