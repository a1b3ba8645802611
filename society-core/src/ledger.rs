//! Ledger record types shared by the entry parser and the store

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of ledger movement
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TransactionType {
    #[serde(rename = "maintenance_receipt")]
    MaintenanceReceipt,
    #[serde(rename = "other_receipt")]
    OtherReceipt,
    #[serde(rename = "expense")]
    Expense,
}

impl TransactionType {
    /// Stored name (snake case)
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::MaintenanceReceipt => "maintenance_receipt",
            TransactionType::OtherReceipt => "other_receipt",
            TransactionType::Expense => "expense",
        }
    }

    /// Human label: the stored name with the underscore turned into a space
    pub fn label(&self) -> &'static str {
        match self {
            TransactionType::MaintenanceReceipt => "maintenance receipt",
            TransactionType::OtherReceipt => "other receipt",
            TransactionType::Expense => "expense",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ledger categories (fixed vocabulary)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Category {
    #[serde(rename = "maintenance")]
    Maintenance,
    #[serde(rename = "electricity")]
    Electricity,
    #[serde(rename = "water")]
    Water,
    #[serde(rename = "security")]
    Security,
    #[serde(rename = "housekeeping")]
    Housekeeping,
    #[serde(rename = "repairs")]
    Repairs,
    #[serde(rename = "other")]
    Other,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Maintenance,
        Category::Electricity,
        Category::Water,
        Category::Security,
        Category::Housekeeping,
        Category::Repairs,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Maintenance => "maintenance",
            Category::Electricity => "electricity",
            Category::Water => "water",
            Category::Security => "security",
            Category::Housekeeping => "housekeeping",
            Category::Repairs => "repairs",
            Category::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the money moved
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum PaymentMode {
    #[serde(rename = "cash")]
    Cash,
    #[serde(rename = "bank")]
    Bank,
    #[default]
    #[serde(rename = "upi")]
    Upi,
    #[serde(rename = "other")]
    Other,
}

impl PaymentMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMode::Cash => "cash",
            PaymentMode::Bank => "bank",
            PaymentMode::Upi => "upi",
            PaymentMode::Other => "other",
        }
    }
}

impl fmt::Display for PaymentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a ledger record came from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Provenance {
    /// Typed into the manual entry form
    #[serde(rename = "ui")]
    Ui,
    /// Imported from a CSV file
    #[serde(rename = "csv")]
    Csv,
    /// Machine-derived from free text
    #[serde(rename = "nlp")]
    Nlp,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Apartment {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ResidentRole {
    #[serde(rename = "owner")]
    Owner,
    #[serde(rename = "tenant")]
    Tenant,
}

/// A person attached to a flat
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Resident {
    pub party_id: String,
    pub name: String,
    pub role: ResidentRole,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Flat {
    pub flat_id: String,
    pub apartment_id: String,
    /// Door number as written on the flat, e.g. "A-101"
    pub number: String,
    #[serde(default)]
    pub residents: Vec<Resident>,
}

/// Persisted ledger row
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: String,
    pub apartment_id: String,
    pub flat_id: Option<String>,
    pub date: NaiveDate,
    pub transaction_type: TransactionType,
    pub category: Category,
    /// Whole rupees
    pub amount: u64,
    pub payment_mode: PaymentMode,
    pub narration: String,
    pub provenance: Provenance,
}
