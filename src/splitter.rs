use thiserror::Error;

use crate::model::{Bill, Participant};

// These strings are shown to the user verbatim; do not reword casually.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter a valid amount for the bill.")]
    InvalidBillAmount,
    #[error("Number of people must be greater than zero.")]
    InvalidHeadcount,
    #[error("Please enter a valid amount.")]
    InvalidParticipantAmount,
    #[error("Please fill in all fields before saving.")]
    MissingFields,
}

/// Owns the whole session: the draft form, the editable participant
/// list, the registry of saved bills, and the detail-view selection.
/// Every user action maps to exactly one method; a method that returns
/// `Err` leaves the state untouched.
#[derive(Debug, Default)]
pub struct BillSplitter {
    title: String,
    total_text: String,
    count_text: String,
    participants: Vec<Participant>,
    saved: Vec<Bill>,
    selected: Option<usize>,
}

impl BillSplitter {
    pub fn new() -> Self {
        Self {
            count_text: "0".to_string(),
            ..Self::default()
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn total_text(&self) -> &str {
        &self.total_text
    }

    pub fn count_text(&self) -> &str {
        &self.count_text
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn saved_bills(&self) -> &[Bill] {
        &self.saved
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_total_text(&mut self, total: impl Into<String>) {
        self.total_text = total.into();
    }

    pub fn set_count_text(&mut self, count: impl Into<String>) {
        self.count_text = count.into();
    }

    /// Splits the form total evenly across a fresh participant list,
    /// replacing any previous draft. Per-person amounts are rounded to
    /// cents individually, so the sum may drift from the total by a few
    /// cents; that drift is accepted, not corrected.
    pub fn generate_participants(&mut self) -> Result<(), ValidationError> {
        let total = parse_amount(&self.total_text).ok_or(ValidationError::InvalidBillAmount)?;
        let count = parse_headcount(&self.count_text).ok_or(ValidationError::InvalidHeadcount)?;

        let per_person = round2(total / count as f64);
        self.participants = (1..=count)
            .map(|id| Participant {
                id,
                name: String::new(),
                amount: per_person,
                is_fixed: false,
            })
            .collect();
        Ok(())
    }

    /// Renames one participant. Names are free text, empty allowed, and
    /// an unknown id is a silent no-op.
    pub fn set_participant_name(&mut self, id: u32, name: impl Into<String>) {
        if let Some(p) = self.participants.iter_mut().find(|p| p.id == id) {
            p.name = name.into();
        }
    }

    /// Pins one participant to a manually entered amount, then spreads
    /// the remainder of the original form total equally over everyone
    /// still unpinned. Apply-then-recompute: the edited record's new
    /// amount is part of the fixed sum. The share is not clamped, so
    /// overshooting the total pushes the others negative.
    pub fn set_participant_amount(
        &mut self,
        id: u32,
        amount_text: &str,
    ) -> Result<(), ValidationError> {
        let amount =
            parse_amount(amount_text).ok_or(ValidationError::InvalidParticipantAmount)?;
        let total = parse_amount(&self.total_text).ok_or(ValidationError::InvalidBillAmount)?;

        let Some(edited) = self.participants.iter_mut().find(|p| p.id == id) else {
            return Ok(());
        };
        edited.amount = amount;
        edited.is_fixed = true;

        let fixed_sum: f64 = self
            .participants
            .iter()
            .filter(|p| p.is_fixed)
            .map(|p| p.amount)
            .sum();
        let remaining = total - fixed_sum;

        let open: Vec<usize> = self
            .participants
            .iter()
            .enumerate()
            .filter(|(_, p)| !p.is_fixed && p.id != id)
            .map(|(i, _)| i)
            .collect();

        if !open.is_empty() {
            let share = round2(remaining / open.len() as f64);
            for i in open {
                self.participants[i].amount = share;
            }
        }
        Ok(())
    }

    /// Snapshots the draft into the registry and resets the form to its
    /// initial state. The new bill's id is its 1-based position.
    pub fn save_bill(&mut self) -> Result<&Bill, ValidationError> {
        if self.title.is_empty() || self.total_text.is_empty() || self.participants.is_empty() {
            return Err(ValidationError::MissingFields);
        }
        let total_amount =
            parse_amount(&self.total_text).ok_or(ValidationError::InvalidBillAmount)?;

        let bill = Bill {
            id: self.saved.len() as u32 + 1,
            title: std::mem::take(&mut self.title),
            total_amount,
            participants: std::mem::take(&mut self.participants),
            saved_at: chrono::Local::now(),
        };
        self.saved.push(bill);

        self.total_text.clear();
        self.count_text = "0".to_string();
        Ok(self.saved.last().unwrap())
    }

    pub fn select_bill(&mut self, index: usize) {
        if index < self.saved.len() {
            self.selected = Some(index);
        }
    }

    pub fn close_detail(&mut self) {
        self.selected = None;
    }

    pub fn selected_bill(&self) -> Option<&Bill> {
        self.selected.and_then(|i| self.saved.get(i))
    }

    /// Current sum of draft amounts, for display next to the total.
    pub fn draft_sum(&self) -> f64 {
        round2(self.participants.iter().map(|p| p.amount).sum())
    }
}

/// Strict replacement for loose string-to-number parsing: the text must
/// be a finite number greater than zero.
fn parse_amount(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v > 0.0)
}

fn parse_headcount(text: &str) -> Option<u32> {
    text.trim().parse::<u32>().ok().filter(|n| *n > 0)
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
