//! Smart Quick Entry: one sentence in, one proposed ledger row out.
//!
//! `parse` never fails. Anything uncertain (missing amount, missing flat,
//! unknown names) lands in `ParseResult::warnings` and the caller decides
//! whether to commit the proposal.

use society_core::{
    Clock, FlatDirectory, IdGenerator, Lookup, PaymentMode, Provenance, SystemClock,
    TransactionType, UuidIds,
};

use crate::classify::classify;
use crate::extract::{first_amount, first_date, first_flat_reference, guess_party_name};
use crate::types::{
    OccurredOn, ParseResult, ParseWarning, ParsedFields, ProposedTransaction, Resolution,
};

pub const NARRATION_PREFIX: &str = "NLP Entry: ";
pub const DEFAULT_APARTMENT_ID: &str = "apt-1";
/// Flat id fabricated in legacy placeholder mode
pub const PLACEHOLDER_FLAT_ID: &str = "flat-1";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserOptions {
    /// Apartment used when no flat resolves through the directory
    pub default_apartment_id: String,
    /// Warn when an extracted date is not a real calendar date
    pub validate_dates: bool,
    /// Attach `PLACEHOLDER_FLAT_ID` to any flat token when no directory is
    /// supplied, matching the old demo screen
    pub legacy_placeholders: bool,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            default_apartment_id: DEFAULT_APARTMENT_ID.to_string(),
            validate_dates: false,
            legacy_placeholders: false,
        }
    }
}

pub struct TransactionTextParser<'d> {
    options: ParserOptions,
    directory: Option<&'d FlatDirectory>,
    clock: Box<dyn Clock>,
    ids: Box<dyn IdGenerator>,
}

impl Default for TransactionTextParser<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'d> TransactionTextParser<'d> {
    /// UTC clock, uuid ids, no directory.
    pub fn new() -> Self {
        Self {
            options: ParserOptions::default(),
            directory: None,
            clock: Box::new(SystemClock),
            ids: Box::new(UuidIds),
        }
    }

    pub fn with_options(mut self, options: ParserOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_directory(mut self, directory: &'d FlatDirectory) -> Self {
        self.directory = Some(directory);
        self
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn with_ids(mut self, ids: impl IdGenerator + 'static) -> Self {
        self.ids = Box::new(ids);
        self
    }

    pub fn parse(&self, input: &str) -> ParseResult {
        let classified = classify(input);
        let extracted_date = first_date(input);

        let parsed = ParsedFields {
            amount: first_amount(input),
            transaction_type: classified.transaction_type,
            category: classified.category,
            payment_mode: PaymentMode::Upi,
            flat_reference: first_flat_reference(input),
            party_name: guess_party_name(input),
            occurred_on: extracted_date
                .clone()
                .unwrap_or_else(|| OccurredOn::from(self.clock.today())),
        };

        let resolution = self.resolve(&parsed);
        let resolved_flat = resolution
            .flat
            .resolved_id()
            .and_then(|id| self.directory.and_then(|d| d.flat(id)));

        let apartment_id = resolved_flat
            .map(|f| f.apartment_id.clone())
            .unwrap_or_else(|| self.options.default_apartment_id.clone());
        let apartment_name = resolved_flat
            .and_then(|f| self.directory.and_then(|d| d.apartment(&f.apartment_id)))
            .map(|a| a.name.as_str());

        let flat_id = match (&resolution.flat, &parsed.flat_reference) {
            (Lookup::Resolved { id }, _) => Some(id.clone()),
            (Lookup::NotAttempted, Some(_)) if self.options.legacy_placeholders => {
                Some(PLACEHOLDER_FLAT_ID.to_string())
            }
            _ => None,
        };

        let explanation = explain(&parsed, apartment_name);
        let warnings = self.warnings(&parsed, extracted_date.as_ref(), &resolution);

        let proposed_transaction = ProposedTransaction {
            id: self.ids.next_id(),
            apartment_id,
            flat_id,
            party_id: resolution.party.resolved_id().map(String::from),
            date: parsed.occurred_on.clone(),
            transaction_type: parsed.transaction_type,
            category: parsed.category,
            amount: parsed.amount,
            payment_mode: parsed.payment_mode,
            narration: format!("{NARRATION_PREFIX}{input}"),
            provenance: Provenance::Nlp,
        };

        tracing::debug!(
            amount = parsed.amount,
            transaction_type = %parsed.transaction_type,
            category = %parsed.category,
            flat = ?parsed.flat_reference,
            date = %parsed.occurred_on,
            warnings = warnings.len(),
            "parsed quick entry"
        );

        ParseResult {
            input: input.to_string(),
            parsed,
            proposed_transaction,
            explanation,
            warnings,
            resolution,
        }
    }

    fn resolve(&self, parsed: &ParsedFields) -> Resolution {
        let Some(directory) = self.directory else {
            return Resolution {
                flat: Lookup::NotAttempted,
                party: Lookup::NotAttempted,
            };
        };
        let flat = directory.resolve_flat(parsed.flat_reference.as_deref());
        let party = directory.resolve_party(parsed.party_name.as_deref(), flat.resolved_id());
        Resolution { flat, party }
    }

    fn warnings(
        &self,
        parsed: &ParsedFields,
        extracted_date: Option<&OccurredOn>,
        resolution: &Resolution,
    ) -> Vec<ParseWarning> {
        let mut warnings = Vec::new();

        if parsed.flat_reference.is_none()
            && parsed.transaction_type == TransactionType::MaintenanceReceipt
        {
            warnings.push(ParseWarning::MissingFlatForMaintenance);
        }
        if parsed.amount == 0 {
            warnings.push(ParseWarning::AmountNotDetected);
        }

        if self.options.validate_dates {
            if let Some(date) = extracted_date.filter(|d| d.as_naive_date().is_none()) {
                warnings.push(ParseWarning::InvalidDate {
                    iso: date.to_string(),
                });
            }
        }

        match &resolution.flat {
            Lookup::Unmatched { token } => warnings.push(ParseWarning::FlatNotFound {
                token: token.clone(),
            }),
            Lookup::Ambiguous { token, .. } => warnings.push(ParseWarning::FlatAmbiguous {
                token: token.clone(),
            }),
            Lookup::NotAttempted | Lookup::NoToken | Lookup::Resolved { .. } => {}
        }
        match &resolution.party {
            Lookup::Unmatched { token } => warnings.push(ParseWarning::PartyNotFound {
                name: token.clone(),
            }),
            Lookup::Ambiguous { token, .. } => warnings.push(ParseWarning::PartyAmbiguous {
                name: token.clone(),
            }),
            Lookup::NotAttempted | Lookup::NoToken | Lookup::Resolved { .. } => {}
        }

        warnings
    }
}

/// "Parsed as maintenance receipt of ₹5000 for maintenance (Flat: A-101) from Rajesh"
fn explain(parsed: &ParsedFields, apartment_name: Option<&str>) -> String {
    let mut s = format!(
        "Parsed as {} of ₹{} for {}",
        parsed.transaction_type.label(),
        parsed.amount,
        parsed.category
    );
    if let Some(flat) = &parsed.flat_reference {
        s.push_str(&format!(" (Flat: {flat})"));
        if let Some(name) = apartment_name {
            s.push_str(&format!(" at {name}"));
        }
    }
    if let Some(party) = &parsed.party_name {
        s.push_str(&format!(" from {party}"));
    }
    s
}
