//! Deterministic keyword rules mapping free text to a transaction type and
//! ledger category.
//!
//! Both cascades are first-match-wins over a lowercase copy of the input.

use society_core::{Category, TransactionType};

/// Result of classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classified {
    pub transaction_type: TransactionType,
    pub category: Category,
}

pub fn classify(text: &str) -> Classified {
    let lower = text.to_lowercase();
    let transaction_type = transaction_type(&lower);
    Classified {
        transaction_type,
        category: category(&lower, transaction_type),
    }
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}

/// Expense keywords are checked first, so "maintenance expense" is an expense.
fn transaction_type(lower: &str) -> TransactionType {
    if contains_any(lower, &["expense", "paid", "electricity", "water"]) {
        return TransactionType::Expense;
    }

    if contains_any(lower, &["maintenance", "received"]) {
        return TransactionType::MaintenanceReceipt;
    }

    TransactionType::OtherReceipt
}

fn category(lower: &str, transaction_type: TransactionType) -> Category {
    if lower.contains("electricity") {
        return Category::Electricity;
    }
    if lower.contains("water") {
        return Category::Water;
    }
    if lower.contains("security") {
        return Category::Security;
    }
    if lower.contains("housekeeping") {
        return Category::Housekeeping;
    }
    // also catches "repairs", "repaired"
    if lower.contains("repair") {
        return Category::Repairs;
    }

    // Fallback
    match transaction_type {
        TransactionType::Expense => Category::Other,
        TransactionType::MaintenanceReceipt | TransactionType::OtherReceipt => {
            Category::Maintenance
        }
    }
}
