use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// One share of the bill. Ids are positional (1..=N) within a draft.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Participant {
    pub id: u32,
    pub name: String,
    pub amount: f64,
    pub is_fixed: bool,
}

/// A finalized bill: an immutable snapshot of the draft at save time.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Bill {
    pub id: u32,
    pub title: String,
    pub total_amount: f64,
    pub participants: Vec<Participant>,
    pub saved_at: DateTime<Local>,
}
