//! Country records and name lookup.
//!
//! Players type country names freely, so lookups go through `normalize`:
//! accents are dropped, punctuation runs become single spaces, and case is
//! ignored. "Côte d’Ivoire", "cote d'ivoire" and "COTE-D-IVOIRE" all resolve
//! to the same record.

use rustc_hash::FxHashMap;
use serde::Deserialize;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use super::geo::Coordinate;
use crate::core::error::{GameError, Result};
use crate::core::rng::GameRng;

/// A country the location and flag games can ask about.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(try_from = "CountryRecord")]
pub struct Country {
    /// Accepted names; the first is the canonical display name.
    pub names: Vec<String>,
    pub location: Coordinate,
    pub continent: String,
    /// ISO 3166-1 alpha-2 code, used for flag images.
    pub code: Option<String>,
}

impl Country {
    #[must_use]
    pub fn canonical_name(&self) -> &str {
        &self.names[0]
    }

    /// Flag image URL, when the country has a code.
    #[must_use]
    pub fn flag_url(&self) -> Option<String> {
        self.code
            .as_ref()
            .map(|code| format!("https://flagcdn.com/w320/{}.png", code.to_ascii_lowercase()))
    }

    /// Whether `input` names this country.
    #[must_use]
    pub fn matches(&self, input: &str) -> bool {
        let key = normalize(input);
        self.names.iter().any(|name| normalize(name) == key)
    }
}

/// On-disk shape: `name` is either one string or a list of aliases.
#[derive(Deserialize)]
struct CountryRecord {
    name: NameField,
    lat: f64,
    lng: f64,
    continent: String,
    #[serde(default)]
    code: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NameField {
    One(String),
    Many(Vec<String>),
}

impl TryFrom<CountryRecord> for Country {
    type Error = String;

    fn try_from(record: CountryRecord) -> std::result::Result<Self, Self::Error> {
        let names = match record.name {
            NameField::One(name) => vec![name],
            NameField::Many(names) => names,
        };
        if names.is_empty() || names.iter().any(|n| normalize(n).is_empty()) {
            return Err("country record needs at least one non-empty name".to_string());
        }
        Ok(Country {
            names,
            location: Coordinate::new(record.lat, record.lng),
            continent: record.continent,
            code: record.code,
        })
    }
}

/// Letters whose accent is part of the glyph and survives decomposition.
fn fold_stroke(c: char) -> char {
    match c {
        'ø' | 'Ø' => 'o',
        'ł' | 'Ł' => 'l',
        'đ' | 'Đ' => 'd',
        'ı' => 'i',
        other => other,
    }
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || matches!(c, '.' | '-' | '_' | '\'' | '\u{2019}')
}

/// Canonical lookup key for a place name.
///
/// ```
/// use arcade_rules::games::where_in_world::normalize;
///
/// assert_eq!(normalize("  São Tomé and Príncipe "), "sao tome and principe");
/// assert_eq!(normalize("Côte d’Ivoire"), "cote d ivoire");
/// assert_eq!(normalize("U.S.A."), "u s a");
/// ```
#[must_use]
pub fn normalize(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut pending_space = false;

    for c in name.nfd() {
        if is_separator(c) {
            pending_space = true;
            continue;
        }
        if is_combining_mark(c) {
            continue;
        }
        if pending_space && !out.is_empty() {
            out.push(' ');
        }
        pending_space = false;
        out.extend(fold_stroke(c).to_lowercase());
    }

    out
}

/// Every known country, indexed by normalized alias.
#[derive(Clone, Debug, Default)]
pub struct Atlas {
    countries: Vec<Country>,
    aliases: FxHashMap<String, usize>,
}

impl Atlas {
    /// Parse a JSON array of country records.
    pub fn from_json(json: &str) -> Result<Self> {
        let countries: Vec<Country> = serde_json::from_str(json)?;
        Ok(Self::from_countries(countries))
    }

    pub fn from_countries(countries: Vec<Country>) -> Self {
        let mut aliases = FxHashMap::default();

        for (idx, country) in countries.iter().enumerate() {
            for name in &country.names {
                let key = normalize(name);
                if let Some(&existing) = aliases.get(&key) {
                    if existing != idx {
                        tracing::warn!(alias = %name, "alias already taken, keeping first");
                    }
                    continue;
                }
                aliases.insert(key, idx);
            }
        }
        tracing::debug!(countries = countries.len(), aliases = aliases.len(), "atlas loaded");

        Self { countries, aliases }
    }

    /// Look up a country by any alias.
    #[must_use]
    pub fn resolve(&self, input: &str) -> Option<&Country> {
        self.resolve_index(input).map(|idx| &self.countries[idx])
    }

    #[must_use]
    pub fn resolve_index(&self, input: &str) -> Option<usize> {
        self.aliases.get(&normalize(input)).copied()
    }

    #[must_use]
    pub fn get(&self, idx: usize) -> Option<&Country> {
        self.countries.get(idx)
    }

    /// Index of a random country.
    pub fn random_index(&self, rng: &mut GameRng) -> Result<usize> {
        if self.countries.is_empty() {
            return Err(GameError::NotEnoughEntries { needed: 1, available: 0 });
        }
        Ok(rng.gen_range_usize(0..self.countries.len()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.countries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Country> {
        self.countries.iter()
    }
}
