use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;

use crate::models::{JurisdictionTable, TableError};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProviderError {
    #[error("jurisdiction '{0}' not found")]
    NotFound(String),

    #[error("invalid jurisdiction data: {0}")]
    InvalidData(String),

    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("I/O error: {0}")]
    Io(String),
}

/// Short listing entry for a jurisdiction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JurisdictionSummary {
    pub code: String,
    pub name: String,
    pub currency: String,
    pub regions: Vec<String>,
}

impl From<&JurisdictionTable> for JurisdictionSummary {
    fn from(table: &JurisdictionTable) -> Self {
        Self {
            code: table.code.clone(),
            name: table.name.clone(),
            currency: table.currency.code.clone(),
            regions: table.regions.keys().cloned().collect(),
        }
    }
}

/// Source of jurisdiction bracket tables.
///
/// Codes are matched case-insensitively. Implementations hand out tables
/// that already passed [`JurisdictionTable::validate`].
pub trait JurisdictionProvider: Send + Sync {
    fn jurisdiction(
        &self,
        code: &str,
    ) -> Result<JurisdictionTable, ProviderError>;

    /// All known jurisdictions, sorted by code.
    fn list_jurisdictions(&self) -> Result<Vec<JurisdictionSummary>, ProviderError>;
}

/// In-memory provider over a fixed set of tables.
#[derive(Debug, Clone, Default)]
pub struct StaticProvider {
    tables: BTreeMap<String, JurisdictionTable>,
}

impl StaticProvider {
    /// Builds a provider, validating every table and rejecting duplicate
    /// codes.
    pub fn new(tables: impl IntoIterator<Item = JurisdictionTable>) -> Result<Self, ProviderError> {
        let mut by_code = BTreeMap::new();

        for table in tables {
            table
                .validate()
                .map_err(|e: TableError| invalid_table(&table.code, e))?;

            let code = normalize_code(&table.code);
            if by_code.contains_key(&code) {
                return Err(ProviderError::InvalidData(format!(
                    "duplicate jurisdiction '{code}'"
                )));
            }
            by_code.insert(code, table);
        }

        Ok(Self { tables: by_code })
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

impl JurisdictionProvider for StaticProvider {
    fn jurisdiction(
        &self,
        code: &str,
    ) -> Result<JurisdictionTable, ProviderError> {
        self.tables
            .get(&normalize_code(code))
            .cloned()
            .ok_or_else(|| ProviderError::NotFound(code.to_string()))
    }

    fn list_jurisdictions(&self) -> Result<Vec<JurisdictionSummary>, ProviderError> {
        Ok(self.tables.values().map(JurisdictionSummary::from).collect())
    }
}

/// Canonical form of a jurisdiction or region code.
pub fn normalize_code(code: &str) -> String {
    code.trim().to_ascii_uppercase()
}

fn invalid_table(
    code: &str,
    error: TableError,
) -> ProviderError {
    ProviderError::InvalidData(format!("{code}: {error}"))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::models::{Currency, Region, TaxBracket};

    fn table(
        code: &str,
        name: &str,
    ) -> JurisdictionTable {
        JurisdictionTable {
            code: code.to_string(),
            name: name.to_string(),
            currency: Currency {
                code: "EUR".to_string(),
                symbol: "€".to_string(),
            },
            brackets: vec![
                TaxBracket::bounded(dec!(0), dec!(24000), dec!(0)),
                TaxBracket::bounded(dec!(24001), dec!(40000), dec!(10)),
                TaxBracket::unbounded(dec!(40001), dec!(15)),
            ],
            regions: BTreeMap::new(),
        }
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let provider = StaticProvider::new([table("AD", "Andorra")]).unwrap();

        let found = provider.jurisdiction(" ad ").unwrap();

        assert_eq!(found.name, "Andorra");
    }

    #[test]
    fn unknown_code_is_not_found() {
        let provider = StaticProvider::new([table("AD", "Andorra")]).unwrap();

        assert_eq!(
            provider.jurisdiction("ZZ"),
            Err(ProviderError::NotFound("ZZ".to_string()))
        );
    }

    #[test]
    fn listing_is_sorted_by_code() {
        let provider =
            StaticProvider::new([table("FR", "France"), table("AD", "Andorra")]).unwrap();

        let codes: Vec<_> = provider
            .list_jurisdictions()
            .unwrap()
            .into_iter()
            .map(|s| s.code)
            .collect();

        assert_eq!(codes, vec!["AD", "FR"]);
    }

    #[test]
    fn summary_lists_region_codes() {
        let mut us = table("US", "United States");
        us.regions.insert(
            "CA".to_string(),
            Region {
                code: "CA".to_string(),
                name: "California".to_string(),
                surcharge_rate: dec!(13.3),
            },
        );

        let summary = JurisdictionSummary::from(&us);

        assert_eq!(summary.regions, vec!["CA"]);
        assert_eq!(summary.currency, "EUR");
    }

    #[test]
    fn duplicate_codes_are_rejected() {
        let result = StaticProvider::new([table("AD", "Andorra"), table("ad", "Andorra again")]);

        assert_eq!(
            result.map(|p| p.len()),
            Err(ProviderError::InvalidData(
                "duplicate jurisdiction 'AD'".to_string()
            ))
        );
    }

    #[test]
    fn invalid_tables_are_rejected() {
        let mut broken = table("AD", "Andorra");
        broken.brackets.pop();

        let result = StaticProvider::new([broken]);

        assert_eq!(
            result.map(|p| p.len()),
            Err(ProviderError::InvalidData(
                "AD: last bracket must be unbounded".to_string()
            ))
        );
    }
}
