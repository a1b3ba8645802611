//! Independent extractors, each run over the raw input.

pub mod amount;
pub mod date;
pub mod flat;
pub mod party;

pub use amount::first_amount;
pub use date::first_date;
pub use flat::first_flat_reference;
pub use party::guess_party_name;
