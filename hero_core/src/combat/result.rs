//! Combat result types

use super::combatant::Side;

/// Why a fight ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombatEnd {
    /// One side dropped to 0 hit points
    Knockout,
    /// The action cap was hit and remaining health decided it
    RoundLimit,
}

/// Outcome of a resolved fight
#[derive(Debug, Clone, PartialEq)]
pub struct CombatResult {
    pub winner: Side,
    pub winner_name: String,
    pub loser_name: String,
    /// Number of attacks made
    pub rounds: u32,
    pub end: CombatEnd,
    pub challenger_hp: u32,
    pub challenger_max_hp: u32,
    pub opponent_hp: u32,
    pub opponent_max_hp: u32,
    /// Experience earned by the winner
    pub experience_awarded: u64,
    /// Narrative, one line per event
    pub log: Vec<String>,
}

impl CombatResult {
    pub fn challenger_won(&self) -> bool {
        self.winner == Side::Challenger
    }

    pub fn hp_of(&self, side: Side) -> (u32, u32) {
        match side {
            Side::Challenger => (self.challenger_hp, self.challenger_max_hp),
            Side::Opponent => (self.opponent_hp, self.opponent_max_hp),
        }
    }
}
