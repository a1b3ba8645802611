//! society-core: ledger types, flat directory, store seam, clock and id sources

pub mod directory;
pub mod ids;
pub mod ledger;
pub mod store;
pub mod time;

pub use directory::{FlatDirectory, Lookup, normalize_flat_number};
pub use ids::{IdGenerator, SequentialIds, UuidIds};
pub use ledger::{
    Apartment, Category, Flat, PaymentMode, Provenance, Resident, ResidentRole, Transaction,
    TransactionType,
};
pub use store::{InMemoryLedger, LedgerStore, StoreError};
pub use time::{Clock, FixedClock, SystemClock, ZonedClock};
