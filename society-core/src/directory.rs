//! Flat directory: resolves tokens pulled out of free text to real records.
//!
//! Loaded from TOML:
//!
//! ```toml
//! [[apartments]]
//! id = "apt-1"
//! name = "Green Valley Heights"
//!
//! [[flats]]
//! flat_id = "flat-1"
//! apartment_id = "apt-1"
//! number = "A-101"
//!
//! [[flats.residents]]
//! party_id = "party-1"
//! name = "Rajesh Kumar"
//! role = "owner"
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::ledger::{Apartment, Flat, Resident};

/// Outcome of looking a token up in the directory.
///
/// `NoToken` (nothing to look up) and `Unmatched` (looked up, not found) are
/// deliberately distinct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Lookup {
    /// No directory was supplied
    NotAttempted,
    NoToken,
    Resolved { id: String },
    Unmatched { token: String },
    Ambiguous { token: String, candidates: Vec<String> },
}

impl Lookup {
    pub fn resolved_id(&self) -> Option<&str> {
        match self {
            Lookup::Resolved { id } => Some(id),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlatDirectory {
    #[serde(default)]
    pub apartments: Vec<Apartment>,
    #[serde(default)]
    pub flats: Vec<Flat>,
}

/// "b-202", "B202" and " B-202 " all normalize to "B202".
pub fn normalize_flat_number(s: &str) -> String {
    s.trim()
        .chars()
        .filter(|c| *c != '-')
        .flat_map(|c| c.to_uppercase())
        .collect()
}

/// Lowercase words with surrounding ASCII punctuation dropped ("Rajesh," -> "rajesh").
fn name_tokens(s: &str) -> Vec<String> {
    s.split_whitespace()
        .map(|t| t.trim_matches(|c: char| c.is_ascii_punctuation()).to_lowercase())
        .filter(|t| !t.is_empty())
        .collect()
}

impl FlatDirectory {
    pub fn new(apartments: Vec<Apartment>, flats: Vec<Flat>) -> Self {
        Self { apartments, flats }
    }

    pub fn from_toml_str(s: &str) -> Result<Self> {
        let dir: FlatDirectory = toml::from_str(s).context("parse flat directory")?;
        for flat in &dir.flats {
            if dir.apartment(&flat.apartment_id).is_none() {
                tracing::warn!(
                    flat = %flat.number,
                    apartment = %flat.apartment_id,
                    "flat references an apartment missing from the directory"
                );
            }
        }
        Ok(dir)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let s = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
        Self::from_toml_str(&s).with_context(|| format!("load {}", path.display()))
    }

    pub fn apartment(&self, id: &str) -> Option<&Apartment> {
        self.apartments.iter().find(|a| a.id == id)
    }

    pub fn flat(&self, flat_id: &str) -> Option<&Flat> {
        self.flats.iter().find(|f| f.flat_id == flat_id)
    }

    /// Flats with this door number, ignoring case and hyphens. The same
    /// number can exist in several apartments.
    pub fn find_flats(&self, number: &str) -> Vec<&Flat> {
        let wanted = normalize_flat_number(number);
        self.flats
            .iter()
            .filter(|f| normalize_flat_number(&f.number) == wanted)
            .collect()
    }

    pub fn resolve_flat(&self, token: Option<&str>) -> Lookup {
        let Some(token) = token else {
            return Lookup::NoToken;
        };
        let found = self.find_flats(token);
        let outcome = match found.as_slice() {
            [] => Lookup::Unmatched {
                token: token.to_string(),
            },
            [flat] => Lookup::Resolved {
                id: flat.flat_id.clone(),
            },
            _ => Lookup::Ambiguous {
                token: token.to_string(),
                candidates: found.iter().map(|f| f.flat_id.clone()).collect(),
            },
        };
        tracing::debug!(token, ?outcome, "flat lookup");
        outcome
    }

    /// Resolve a guessed party name to a resident's party id.
    ///
    /// A resident matches when every word of the guess appears in the
    /// resident's name. Residents of `prefer_flat` win over everyone else.
    pub fn resolve_party(&self, name: Option<&str>, prefer_flat: Option<&str>) -> Lookup {
        let Some(name) = name else {
            return Lookup::NoToken;
        };
        let guess = name_tokens(name);
        if guess.is_empty() {
            return Lookup::NoToken;
        }

        let matches = |r: &Resident| {
            let have = name_tokens(&r.name);
            guess.iter().all(|g| have.contains(g))
        };

        let mut candidates: Vec<&Resident> = Vec::new();
        if let Some(flat) = prefer_flat.and_then(|id| self.flat(id)) {
            candidates.extend(flat.residents.iter().filter(|r| matches(r)));
        }
        if candidates.is_empty() {
            candidates.extend(
                self.flats
                    .iter()
                    .flat_map(|f| f.residents.iter())
                    .filter(|r| matches(r)),
            );
        }

        let mut ids: Vec<String> = Vec::new();
        for r in candidates {
            if !ids.contains(&r.party_id) {
                ids.push(r.party_id.clone());
            }
        }

        let outcome = match ids.len() {
            0 => Lookup::Unmatched {
                token: name.to_string(),
            },
            1 => Lookup::Resolved { id: ids.remove(0) },
            _ => Lookup::Ambiguous {
                token: name.to_string(),
                candidates: ids,
            },
        };
        tracing::debug!(name, ?outcome, "party lookup");
        outcome
    }
}
