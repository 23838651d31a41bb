use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use taxscope_core::{Currency, JurisdictionTable, Region, TableError, TaxBracket, UpperBound};
use thiserror::Error;
use tracing::{debug, info};

pub const JURISDICTIONS_FILE: &str = "jurisdictions.csv";
pub const BRACKETS_FILE: &str = "brackets.csv";
pub const REGIONS_FILE: &str = "regions.csv";

static CODE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{2,3}$").expect("code pattern is valid"));

/// Errors that can occur when loading a jurisdiction catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("CSV parse error in {file}: {message}")]
    CsvParse { file: &'static str, message: String },

    #[error("invalid code '{code}' in {file} (expected 2-3 upper-case letters)")]
    InvalidCode { file: &'static str, code: String },

    #[error("jurisdiction '{0}' is defined more than once")]
    DuplicateJurisdiction(String),

    #[error("region '{region}' is defined more than once for '{jurisdiction}'")]
    DuplicateRegion { jurisdiction: String, region: String },

    #[error("{file} references unknown jurisdiction '{code}'")]
    UnknownJurisdiction { file: &'static str, code: String },

    #[error("jurisdiction '{0}' has no brackets")]
    NoBrackets(String),

    #[error("jurisdiction '{code}': {source}")]
    InvalidTable {
        code: String,
        #[source]
        source: TableError,
    },

    #[error("cannot access {path}: {message}")]
    Io { path: String, message: String },
}

/// A row of `jurisdictions.csv`.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct JurisdictionRecord {
    pub code: String,
    pub name: String,
    pub currency: String,
    pub symbol: String,
}

/// A row of `brackets.csv`. Brackets are listed lowest first; an empty
/// `max` marks the unbounded top bracket.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct BracketRecord {
    pub jurisdiction: String,
    #[serde(deserialize_with = "deserialize_decimal")]
    pub min: Decimal,
    #[serde(deserialize_with = "deserialize_optional_decimal")]
    pub max: Option<Decimal>,
    #[serde(deserialize_with = "deserialize_decimal")]
    pub rate: Decimal,
}

/// A row of `regions.csv`.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct RegionRecord {
    pub jurisdiction: String,
    pub code: String,
    pub name: String,
    #[serde(deserialize_with = "deserialize_decimal")]
    pub surcharge_rate: Decimal,
}

fn deserialize_decimal<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    s.trim().parse::<Decimal>().map_err(serde::de::Error::custom)
}

fn deserialize_optional_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => s
            .trim()
            .parse::<Decimal>()
            .map(Some)
            .map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

fn read_records<T, R>(
    reader: R,
    file: &'static str,
) -> Result<Vec<T>, CatalogError>
where
    T: for<'de> Deserialize<'de>,
    R: Read,
{
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    csv_reader
        .deserialize()
        .collect::<Result<Vec<T>, _>>()
        .map_err(|e| CatalogError::CsvParse {
            file,
            message: e.to_string(),
        })
}

fn check_code(
    code: &str,
    file: &'static str,
) -> Result<(), CatalogError> {
    if CODE_PATTERN.is_match(code) {
        Ok(())
    } else {
        Err(CatalogError::InvalidCode {
            file,
            code: code.to_string(),
        })
    }
}

/// Loader for jurisdiction catalogs stored as three CSV files.
///
/// ```text
/// jurisdictions.csv  code,name,currency,symbol
/// brackets.csv       jurisdiction,min,max,rate
/// regions.csv        jurisdiction,code,name,surcharge_rate
/// ```
///
/// Rates are percentages (`22` for 22%).
pub struct CatalogLoader;

impl CatalogLoader {
    /// Parse a catalog from three CSV readers.
    ///
    /// Tables are returned in `jurisdictions.csv` order, each validated with
    /// [`JurisdictionTable::validate`].
    pub fn parse<J, B, R>(
        jurisdictions: J,
        brackets: B,
        regions: R,
    ) -> Result<Vec<JurisdictionTable>, CatalogError>
    where
        J: Read,
        B: Read,
        R: Read,
    {
        let jurisdiction_records: Vec<JurisdictionRecord> =
            read_records(jurisdictions, JURISDICTIONS_FILE)?;
        let bracket_records: Vec<BracketRecord> = read_records(brackets, BRACKETS_FILE)?;
        let region_records: Vec<RegionRecord> = read_records(regions, REGIONS_FILE)?;

        Self::assemble(jurisdiction_records, bracket_records, region_records)
    }

    /// Build validated tables from already-parsed records.
    pub fn assemble(
        jurisdictions: Vec<JurisdictionRecord>,
        brackets: Vec<BracketRecord>,
        regions: Vec<RegionRecord>,
    ) -> Result<Vec<JurisdictionTable>, CatalogError> {
        let mut tables: Vec<JurisdictionTable> = Vec::with_capacity(jurisdictions.len());
        let mut index: HashMap<String, usize> = HashMap::new();

        for record in jurisdictions {
            check_code(&record.code, JURISDICTIONS_FILE)?;
            if index.contains_key(&record.code) {
                return Err(CatalogError::DuplicateJurisdiction(record.code));
            }
            index.insert(record.code.clone(), tables.len());
            tables.push(JurisdictionTable {
                code: record.code,
                name: record.name,
                currency: Currency {
                    code: record.currency,
                    symbol: record.symbol,
                },
                brackets: Vec::new(),
                regions: Default::default(),
            });
        }

        for record in brackets {
            let position = *index.get(&record.jurisdiction).ok_or_else(|| {
                CatalogError::UnknownJurisdiction {
                    file: BRACKETS_FILE,
                    code: record.jurisdiction.clone(),
                }
            })?;
            tables[position].brackets.push(TaxBracket {
                min: record.min,
                max: UpperBound::from(record.max),
                rate: record.rate,
            });
        }

        for record in regions {
            check_code(&record.code, REGIONS_FILE)?;
            let position = *index.get(&record.jurisdiction).ok_or_else(|| {
                CatalogError::UnknownJurisdiction {
                    file: REGIONS_FILE,
                    code: record.jurisdiction.clone(),
                }
            })?;
            let table = &mut tables[position];
            if table.regions.contains_key(&record.code) {
                return Err(CatalogError::DuplicateRegion {
                    jurisdiction: record.jurisdiction,
                    region: record.code,
                });
            }
            table.regions.insert(
                record.code.clone(),
                Region {
                    code: record.code,
                    name: record.name,
                    surcharge_rate: record.surcharge_rate,
                },
            );
        }

        for table in &tables {
            if table.brackets.is_empty() {
                return Err(CatalogError::NoBrackets(table.code.clone()));
            }
            table
                .validate()
                .map_err(|source| CatalogError::InvalidTable {
                    code: table.code.clone(),
                    source,
                })?;
            debug!(
                jurisdiction = %table.code,
                brackets = table.brackets.len(),
                regions = table.regions.len(),
                "jurisdiction loaded"
            );
        }

        Ok(tables)
    }

    /// Load a catalog from a directory holding the three CSV files.
    ///
    /// `regions.csv` is optional; without it no jurisdiction has regions.
    pub fn load_dir(dir: &Path) -> Result<Vec<JurisdictionTable>, CatalogError> {
        let jurisdictions = open(&dir.join(JURISDICTIONS_FILE))?;
        let brackets = open(&dir.join(BRACKETS_FILE))?;

        let regions_path = dir.join(REGIONS_FILE);
        let tables = if regions_path.exists() {
            Self::parse(jurisdictions, brackets, open(&regions_path)?)?
        } else {
            debug!(path = %regions_path.display(), "no regions file, loading without regions");
            Self::parse(
                jurisdictions,
                brackets,
                "jurisdiction,code,name,surcharge_rate\n".as_bytes(),
            )?
        };

        info!(
            path = %dir.display(),
            jurisdictions = tables.len(),
            "catalog loaded"
        );

        Ok(tables)
    }

    /// Write tables as a catalog directory readable by [`CatalogLoader::load_dir`].
    /// The directory must already exist; existing files are overwritten.
    pub fn write_dir(
        tables: &[JurisdictionTable],
        dir: &Path,
    ) -> Result<(), CatalogError> {
        let jurisdictions = tables.iter().map(|t| JurisdictionRecord {
            code: t.code.clone(),
            name: t.name.clone(),
            currency: t.currency.code.clone(),
            symbol: t.currency.symbol.clone(),
        });
        let brackets = tables.iter().flat_map(|t| {
            t.brackets.iter().map(|b| BracketRecord {
                jurisdiction: t.code.clone(),
                min: b.min,
                max: b.max.as_option(),
                rate: b.rate,
            })
        });
        let regions = tables.iter().flat_map(|t| {
            t.regions.values().map(|r| RegionRecord {
                jurisdiction: t.code.clone(),
                code: r.code.clone(),
                name: r.name.clone(),
                surcharge_rate: r.surcharge_rate,
            })
        });

        write_records(&dir.join(JURISDICTIONS_FILE), JURISDICTIONS_FILE, jurisdictions)?;
        write_records(&dir.join(BRACKETS_FILE), BRACKETS_FILE, brackets)?;
        write_records(&dir.join(REGIONS_FILE), REGIONS_FILE, regions)?;

        Ok(())
    }
}

fn open(path: &Path) -> Result<File, CatalogError> {
    File::open(path).map_err(|e| io_error(path, e))
}

fn io_error(
    path: &Path,
    error: std::io::Error,
) -> CatalogError {
    CatalogError::Io {
        path: path.display().to_string(),
        message: error.to_string(),
    }
}

fn write_records<T: Serialize>(
    path: &Path,
    file: &'static str,
    records: impl Iterator<Item = T>,
) -> Result<(), CatalogError> {
    let csv_error = |e: csv::Error| CatalogError::CsvParse {
        file,
        message: e.to_string(),
    };

    let mut writer = csv::Writer::from_path(path).map_err(csv_error)?;
    for record in records {
        writer.serialize(record).map_err(csv_error)?;
    }
    writer.flush().map_err(|e| io_error(path, e))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    const JURISDICTIONS: &str = "code,name,currency,symbol\n\
        US,United States,USD,$\n\
        AD,Andorra,EUR,€\n";

    const BRACKETS: &str = "jurisdiction,min,max,rate\n\
        US,0,11000,10\n\
        US,11001,44725,12\n\
        US,44726,,22\n\
        AD,0,24000,0\n\
        AD,24001,40000,10\n\
        AD,40001,,15\n";

    const REGIONS: &str = "jurisdiction,code,name,surcharge_rate\n\
        US,CA,California,13.3\n\
        US,TX,Texas,0\n";

    fn parse(
        jurisdictions: &str,
        brackets: &str,
        regions: &str,
    ) -> Result<Vec<JurisdictionTable>, CatalogError> {
        CatalogLoader::parse(
            jurisdictions.as_bytes(),
            brackets.as_bytes(),
            regions.as_bytes(),
        )
    }

    // =========================================================================
    // well-formed catalogs
    // =========================================================================

    #[test]
    fn parse_keeps_jurisdiction_file_order() {
        let tables = parse(JURISDICTIONS, BRACKETS, REGIONS).expect("Failed to parse catalog");

        let codes: Vec<_> = tables.iter().map(|t| t.code.as_str()).collect();
        assert_eq!(codes, vec!["US", "AD"]);
    }

    #[test]
    fn parse_builds_brackets_in_file_order() {
        let tables = parse(JURISDICTIONS, BRACKETS, REGIONS).expect("Failed to parse catalog");

        assert_eq!(
            tables[0].brackets,
            vec![
                TaxBracket::bounded(dec!(0), dec!(11000), dec!(10)),
                TaxBracket::bounded(dec!(11001), dec!(44725), dec!(12)),
                TaxBracket::unbounded(dec!(44726), dec!(22)),
            ]
        );
    }

    #[test]
    fn parse_attaches_regions() {
        let tables = parse(JURISDICTIONS, BRACKETS, REGIONS).expect("Failed to parse catalog");

        let california = tables[0].region("CA").expect("CA present");
        assert_eq!(california.name, "California");
        assert_eq!(california.surcharge_rate, dec!(13.3));
        assert!(tables[1].regions.is_empty());
    }

    #[test]
    fn parse_keeps_currency_metadata() {
        let tables = parse(JURISDICTIONS, BRACKETS, REGIONS).expect("Failed to parse catalog");

        assert_eq!(tables[1].currency.code, "EUR");
        assert_eq!(tables[1].currency.symbol, "€");
    }

    #[test]
    fn parse_tolerates_whitespace_around_values() {
        let brackets = "jurisdiction,min,max,rate\n\
            US, 0 , 11000 ,10\n\
            US,11001, ,12\n\
            AD,0,,0\n";

        let tables = parse(JURISDICTIONS, brackets, REGIONS).expect("Failed to parse catalog");

        assert_eq!(tables[0].brackets[1].max, UpperBound::Unbounded);
    }

    // =========================================================================
    // rejected catalogs
    // =========================================================================

    #[test]
    fn parse_rejects_bad_decimal() {
        let brackets = "jurisdiction,min,max,rate\nUS,abc,,10\n";

        let err = parse(JURISDICTIONS, brackets, REGIONS).expect_err("Should fail");

        let CatalogError::CsvParse { file, .. } = err else {
            panic!("Expected CsvParse error, got: {:?}", err);
        };
        assert_eq!(file, BRACKETS_FILE);
    }

    #[test]
    fn parse_rejects_missing_column() {
        let err = parse("code,name\nUS,United States\n", BRACKETS, REGIONS)
            .expect_err("Should fail");

        let CatalogError::CsvParse { message, .. } = err else {
            panic!("Expected CsvParse error, got: {:?}", err);
        };
        assert!(
            message.contains("missing field"),
            "Expected 'missing field' in error, got: {}",
            message
        );
    }

    #[test]
    fn parse_rejects_lower_case_code() {
        let jurisdictions = "code,name,currency,symbol\nus,United States,USD,$\n";

        let err = parse(jurisdictions, "jurisdiction,min,max,rate\n", REGIONS)
            .expect_err("Should fail");

        assert!(matches!(err, CatalogError::InvalidCode { ref code, .. } if code == "us"));
    }

    #[test]
    fn parse_rejects_duplicate_jurisdiction() {
        let jurisdictions = "code,name,currency,symbol\nUS,United States,USD,$\nUS,Again,USD,$\n";

        let err = parse(jurisdictions, BRACKETS, REGIONS).expect_err("Should fail");

        assert!(matches!(err, CatalogError::DuplicateJurisdiction(ref code) if code == "US"));
    }

    #[test]
    fn parse_rejects_bracket_for_unknown_jurisdiction() {
        let brackets = "jurisdiction,min,max,rate\nZZ,0,,10\n";

        let err = parse(JURISDICTIONS, brackets, REGIONS).expect_err("Should fail");

        assert!(matches!(
            err,
            CatalogError::UnknownJurisdiction { file: BRACKETS_FILE, ref code } if code == "ZZ"
        ));
    }

    #[test]
    fn parse_rejects_duplicate_region() {
        let regions = "jurisdiction,code,name,surcharge_rate\nUS,CA,California,13.3\nUS,CA,Cali,1\n";

        let err = parse(JURISDICTIONS, BRACKETS, regions).expect_err("Should fail");

        assert!(matches!(err, CatalogError::DuplicateRegion { ref region, .. } if region == "CA"));
    }

    #[test]
    fn parse_rejects_jurisdiction_without_brackets() {
        let brackets = "jurisdiction,min,max,rate\nUS,0,,10\n";

        let err = parse(JURISDICTIONS, brackets, REGIONS).expect_err("Should fail");

        assert!(matches!(err, CatalogError::NoBrackets(ref code) if code == "AD"));
    }

    #[test]
    fn parse_rejects_invalid_table() {
        let brackets = "jurisdiction,min,max,rate\n\
            US,0,11000,10\n\
            US,20000,,12\n\
            AD,0,,0\n";

        let err = parse(JURISDICTIONS, brackets, REGIONS).expect_err("Should fail");

        let CatalogError::InvalidTable { code, source } = err else {
            panic!("Expected InvalidTable error, got: {:?}", err);
        };
        assert_eq!(code, "US");
        assert_eq!(
            source,
            TableError::Gap {
                index: 1,
                gap: dec!(9000)
            }
        );
    }

    #[test]
    fn parse_rejects_surcharge_out_of_range() {
        let regions = "jurisdiction,code,name,surcharge_rate\nUS,CA,California,133\n";

        let err = parse(JURISDICTIONS, BRACKETS, regions).expect_err("Should fail");

        assert!(matches!(
            err,
            CatalogError::InvalidTable {
                source: TableError::SurchargeOutOfRange { .. },
                ..
            }
        ));
    }

    #[test]
    fn empty_catalog_is_allowed() {
        let tables = parse(
            "code,name,currency,symbol\n",
            "jurisdiction,min,max,rate\n",
            "jurisdiction,code,name,surcharge_rate\n",
        )
        .expect("Failed to parse catalog");

        assert!(tables.is_empty());
    }
}
