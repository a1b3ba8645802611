use chrono::{Datelike, NaiveDate};
use serde::{Serialize, Serializer};
use std::fmt;
use thiserror::Error;

use society_core::{Category, Lookup, PaymentMode, Provenance, Transaction, TransactionType};

/// Calendar date as read from text. Components are not range checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccurredOn {
    /// Year digits after two-digit expansion ("2025", "125")
    pub year: String,
    pub month: u32,
    pub day: u32,
}

impl OccurredOn {
    pub fn new(year: impl Into<String>, month: u32, day: u32) -> Self {
        Self {
            year: year.into(),
            month,
            day,
        }
    }

    /// The real calendar date, if the components describe one.
    pub fn as_naive_date(&self) -> Option<NaiveDate> {
        let year: i32 = self.year.parse().ok()?;
        NaiveDate::from_ymd_opt(year, self.month, self.day)
    }
}

impl From<NaiveDate> for OccurredOn {
    fn from(d: NaiveDate) -> Self {
        Self::new(format!("{:04}", d.year()), d.month(), d.day())
    }
}

impl fmt::Display for OccurredOn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl Serialize for OccurredOn {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Fields pulled out of the text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedFields {
    /// 0 when no amount was found
    pub amount: u64,
    pub transaction_type: TransactionType,
    pub category: Category,
    /// Never read from text; always Upi for now
    pub payment_mode: PaymentMode,
    pub flat_reference: Option<String>,
    pub party_name: Option<String>,
    pub occurred_on: OccurredOn,
}

/// Candidate ledger row awaiting confirmation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProposedTransaction {
    pub id: String,
    pub apartment_id: String,
    pub flat_id: Option<String>,
    pub party_id: Option<String>,
    pub date: OccurredOn,
    pub transaction_type: TransactionType,
    pub category: Category,
    pub amount: u64,
    pub payment_mode: PaymentMode,
    pub narration: String,
    pub provenance: Provenance,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ProposalError {
    #[error("Date {0} is not a valid calendar date")]
    InvalidDate(String),
}

impl TryFrom<ProposedTransaction> for Transaction {
    type Error = ProposalError;

    fn try_from(p: ProposedTransaction) -> Result<Self, Self::Error> {
        let date = p
            .date
            .as_naive_date()
            .ok_or_else(|| ProposalError::InvalidDate(p.date.to_string()))?;
        Ok(Transaction {
            id: p.id,
            apartment_id: p.apartment_id,
            flat_id: p.flat_id,
            date,
            transaction_type: p.transaction_type,
            category: p.category,
            amount: p.amount,
            payment_mode: p.payment_mode,
            narration: p.narration,
            provenance: p.provenance,
        })
    }
}

/// Advisory data-quality notes. Never block the proposal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseWarning {
    MissingFlatForMaintenance,
    AmountNotDetected,
    InvalidDate { iso: String },
    FlatNotFound { token: String },
    FlatAmbiguous { token: String },
    PartyNotFound { name: String },
    PartyAmbiguous { name: String },
}

impl fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseWarning::MissingFlatForMaintenance => {
                f.write_str("No flat number specified for maintenance receipt")
            }
            ParseWarning::AmountNotDetected => f.write_str("Amount not detected or is zero"),
            ParseWarning::InvalidDate { iso } => {
                write!(f, "Date {iso} is not a valid calendar date")
            }
            ParseWarning::FlatNotFound { token } => {
                write!(f, "Flat {token} not found in directory")
            }
            ParseWarning::FlatAmbiguous { token } => {
                write!(f, "Flat {token} matches multiple apartments")
            }
            ParseWarning::PartyNotFound { name } => {
                write!(f, "Party {name} not found in directory")
            }
            ParseWarning::PartyAmbiguous { name } => {
                write!(f, "Party {name} matches multiple residents")
            }
        }
    }
}

impl Serialize for ParseWarning {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Directory lookups performed for this parse
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub flat: Lookup,
    pub party: Lookup,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseResult {
    pub input: String,
    pub parsed: ParsedFields,
    pub proposed_transaction: ProposedTransaction,
    pub explanation: String,
    pub warnings: Vec<ParseWarning>,
    pub resolution: Resolution,
}

impl ParseResult {
    pub fn warning_messages(&self) -> Vec<String> {
        self.warnings.iter().map(ToString::to_string).collect()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}
