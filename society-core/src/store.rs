//! Ledger store seam.
//!
//! Callers own the store and pass it to whatever needs it; nothing here is
//! global. `InMemoryLedger` is the reference implementation.

use thiserror::Error;

use crate::directory::FlatDirectory;
use crate::ledger::{Apartment, Flat, Transaction};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum StoreError {
    #[error("Duplicate transaction id: {0}")]
    DuplicateId(String),

    #[error("Unknown apartment: {0}")]
    UnknownApartment(String),

    #[error("Unknown flat: {0}")]
    UnknownFlat(String),

    #[error("Flat {flat_id} does not belong to apartment {apartment_id}")]
    FlatNotInApartment {
        flat_id: String,
        apartment_id: String,
    },
}

pub trait LedgerStore {
    fn apartments(&self) -> &[Apartment];
    fn flats(&self) -> &[Flat];
    fn transactions(&self) -> &[Transaction];
    fn record(&mut self, txn: Transaction) -> Result<(), StoreError>;
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryLedger {
    apartments: Vec<Apartment>,
    flats: Vec<Flat>,
    transactions: Vec<Transaction>,
}

impl InMemoryLedger {
    pub fn new(apartments: Vec<Apartment>, flats: Vec<Flat>) -> Self {
        Self {
            apartments,
            flats,
            transactions: Vec::new(),
        }
    }

    /// Snapshot of apartments and flats for the entry parser.
    pub fn directory(&self) -> FlatDirectory {
        FlatDirectory::new(self.apartments.clone(), self.flats.clone())
    }

    fn check(&self, txn: &Transaction) -> Result<(), StoreError> {
        if self.transactions.iter().any(|t| t.id == txn.id) {
            return Err(StoreError::DuplicateId(txn.id.clone()));
        }
        if !self.apartments.iter().any(|a| a.id == txn.apartment_id) {
            return Err(StoreError::UnknownApartment(txn.apartment_id.clone()));
        }
        if let Some(flat_id) = &txn.flat_id {
            let flat = self
                .flats
                .iter()
                .find(|f| &f.flat_id == flat_id)
                .ok_or_else(|| StoreError::UnknownFlat(flat_id.clone()))?;
            if flat.apartment_id != txn.apartment_id {
                return Err(StoreError::FlatNotInApartment {
                    flat_id: flat_id.clone(),
                    apartment_id: txn.apartment_id.clone(),
                });
            }
        }
        Ok(())
    }
}

impl LedgerStore for InMemoryLedger {
    fn apartments(&self) -> &[Apartment] {
        &self.apartments
    }

    fn flats(&self) -> &[Flat] {
        &self.flats
    }

    fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    fn record(&mut self, txn: Transaction) -> Result<(), StoreError> {
        self.check(&txn)?;
        tracing::debug!(id = %txn.id, amount = txn.amount, "recorded transaction");
        self.transactions.push(txn);
        Ok(())
    }
}
