//! society-entry: Smart Quick Entry, a rule-based parser turning a short
//! sentence ("maintenance 5000 Rajesh A-101 15/01/2025") into a proposed
//! ledger transaction with an explanation and warnings.

pub mod classify;
pub mod extract;
pub mod parser;
pub mod types;

pub use classify::{Classified, classify};
pub use parser::{ParserOptions, TransactionTextParser};
pub use types::{
    OccurredOn, ParseResult, ParseWarning, ParsedFields, ProposalError, ProposedTransaction,
    Resolution,
};

/// Parse with defaults: UTC today, uuid ids, no directory.
pub fn parse(input: &str) -> ParseResult {
    TransactionTextParser::new().parse(input)
}
