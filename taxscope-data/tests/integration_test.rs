//! Catalog loading from disk and through the provider registry.

use std::fs;
use std::path::Path;

use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;
use taxscope_core::provider::SourceConfig;
use taxscope_core::{JurisdictionProvider, ProgressiveTaxCalculator};
use taxscope_data::{CatalogError, CatalogLoader, builtin_catalog, default_registry};

const JURISDICTIONS: &str = "code,name,currency,symbol\nZZ,Testland,TST,T\n";
const BRACKETS: &str = "jurisdiction,min,max,rate\nZZ,0,1000,10\nZZ,1001,,20\n";
const REGIONS: &str = "jurisdiction,code,name,surcharge_rate\nZZ,NO,North,5\n";

fn write_catalog(
    dir: &Path,
    regions: Option<&str>,
) {
    fs::write(dir.join("jurisdictions.csv"), JURISDICTIONS).expect("write jurisdictions");
    fs::write(dir.join("brackets.csv"), BRACKETS).expect("write brackets");
    if let Some(regions) = regions {
        fs::write(dir.join("regions.csv"), regions).expect("write regions");
    }
}

// =============================================================================
// directory loading
// =============================================================================

#[test]
fn load_dir_reads_all_three_files() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_catalog(dir.path(), Some(REGIONS));

    let tables = CatalogLoader::load_dir(dir.path()).expect("Failed to load catalog");

    assert_eq!(tables.len(), 1);
    assert_eq!(tables[0].brackets.len(), 2);
    assert_eq!(tables[0].region("no").map(|r| r.surcharge_rate), Some(dec!(5)));
}

#[test]
fn load_dir_without_regions_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_catalog(dir.path(), None);

    let tables = CatalogLoader::load_dir(dir.path()).expect("Failed to load catalog");

    assert!(tables[0].regions.is_empty());
}

#[test]
fn load_dir_missing_brackets_is_io_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join("jurisdictions.csv"), JURISDICTIONS).unwrap();

    let err = CatalogLoader::load_dir(dir.path()).expect_err("Should fail");

    let CatalogError::Io { path, .. } = err else {
        panic!("Expected Io error, got: {:?}", err);
    };
    assert!(path.ends_with("brackets.csv"), "unexpected path {path}");
}

#[test]
fn exported_builtin_catalog_loads_back_unchanged() {
    let dir = tempfile::tempdir().expect("tempdir");
    let original = builtin_catalog().expect("builtin catalog");

    CatalogLoader::write_dir(&original, dir.path()).expect("Failed to write catalog");
    let reloaded = CatalogLoader::load_dir(dir.path()).expect("Failed to load catalog");

    assert_eq!(reloaded, original);
}

// =============================================================================
// registry and calculation
// =============================================================================

#[test]
fn csv_source_serves_tables_for_calculation() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_catalog(dir.path(), Some(REGIONS));

    let provider = default_registry()
        .create(&SourceConfig {
            source: "csv".to_string(),
            location: Some(dir.path().display().to_string()),
        })
        .expect("Failed to create provider");
    let table = provider.jurisdiction("zz").expect("ZZ present");

    let result = ProgressiveTaxCalculator::new(&table)
        .compute(dec!(3000), Some("NO"))
        .unwrap();

    // 1000 @ 10% + 2000 @ 20% + 3000 @ 5%
    assert_eq!(result.total_tax, dec!(650));
    assert_eq!(result.net_income, dec!(2350));
}

#[test]
fn builtin_united_states_reference_figure() {
    let provider = default_registry()
        .create(&SourceConfig::default())
        .expect("Failed to create provider");
    let us = provider.jurisdiction("US").unwrap();

    let plain = ProgressiveTaxCalculator::new(&us)
        .compute(dec!(50000), None)
        .unwrap();
    let california = ProgressiveTaxCalculator::new(&us)
        .compute(dec!(50000), Some("CA"))
        .unwrap();

    assert_eq!(plain.total_tax, dec!(6307.5));
    assert_eq!(california.total_tax, dec!(12957.5));
}

#[test]
fn every_builtin_jurisdiction_computes() {
    let provider = default_registry().create(&SourceConfig::default()).unwrap();

    for summary in provider.list_jurisdictions().unwrap() {
        let table = provider.jurisdiction(&summary.code).unwrap();
        let result = ProgressiveTaxCalculator::new(&table)
            .compute(dec!(1000000), None)
            .unwrap();

        assert!(result.total_tax >= dec!(0), "{}", summary.code);
        assert!(result.total_tax < result.gross_income, "{}", summary.code);
    }
}

#[test]
fn unknown_code_is_not_found() {
    let provider = default_registry().create(&SourceConfig::default()).unwrap();

    assert!(provider.jurisdiction("XX").is_err());
}
