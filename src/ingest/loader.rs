//! CSV ingestion and cleaning
//!
//! Turns the semicolon-delimited occurrence file into a clean
//! [`RecordCollection`]:
//!
//! - aggregate rollup rows (national totals, "all regimes" totals, the
//!   `999` pseudo-department) are excluded; they are not strata;
//! - rows with missing or unparseable numeric fields are skipped and
//!   counted, never fatal;
//! - the pathology name is resolved to the most specific hierarchy level,
//!   the department code is normalized and resolved to a display name.
//!
//! Only I/O and CSV-structure problems surface as errors; row-level noise
//! is a logging concern.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::Instant;

use csv::ReaderBuilder;
use indicatif::ProgressBar;
use log::warn;

use crate::config::AnalysisConfig;
use crate::error::{AnalysisError, Result};
use crate::ingest::geography::DepartmentResolver;
use crate::ingest::hierarchy::resolve_pathology;
use crate::models::RecordCollection;
use crate::models::record::Record;
use crate::models::types::{Sex, normalize_department};
use crate::utils::logging;

/// Aggregate sentinel marking "all regimes" rollup rows
pub const AGGREGATE_PATHOLOGY: &str = "Total consommants tous régimes";

/// Stratum indicator marking total-population rollup rows
pub const TOTAL_POPULATION_INDICATOR: &str = "POP_TOT_IND";

/// Pseudo-department code carrying national totals
pub const NATIONAL_DEPARTMENT: &str = "999";

/// Header positions of the required columns
struct Columns {
    year: usize,
    level1: usize,
    level2: usize,
    level3: usize,
    age_band: usize,
    sex: usize,
    department: usize,
    indicator: usize,
    cases: usize,
    population: usize,
    prevalence: usize,
}

impl Columns {
    fn from_headers(headers: &csv::StringRecord) -> Result<Self> {
        let position = |name: &str| -> Result<usize> {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or_else(|| AnalysisError::MissingColumn(name.to_string()))
        };

        Ok(Self {
            year: position("annee")?,
            level1: position("patho_niv1")?,
            level2: position("patho_niv2")?,
            level3: position("patho_niv3")?,
            age_band: position("libelle_classe_age")?,
            sex: position("libelle_sexe")?,
            department: position("dept")?,
            indicator: position("top")?,
            cases: position("Ntop")?,
            population: position("Npop")?,
            prevalence: position("prev")?,
        })
    }
}

/// Load cleaned records from any reader carrying the semicolon-delimited
/// source format.
///
/// An input with zero usable rows yields an empty collection (the engine
/// handles empty collections everywhere); use
/// [`load_records_from_path`] to treat that as an error for real files.
pub fn load_records<R: Read>(
    reader: R,
    resolver: &dyn DepartmentResolver,
) -> Result<RecordCollection> {
    let (records, excluded, skipped) = read_records(reader, resolver, None)?;

    if records.is_empty() {
        warn!("Source contained no usable records ({excluded} aggregate rows, {skipped} skipped)");
    }

    Ok(RecordCollection::new(records))
}

/// Load cleaned records from a file on disk.
///
/// Shows a progress spinner for the multi-million-row source when enabled
/// in the configuration, and fails with
/// [`AnalysisError::EmptySource`] when the file yields no usable record.
pub fn load_records_from_path(
    path: &Path,
    resolver: &dyn DepartmentResolver,
    config: &AnalysisConfig,
) -> Result<RecordCollection> {
    logging::log_load_start(path);
    let start = Instant::now();

    let file = File::open(path)?;
    let spinner = config
        .show_progress
        .then(|| logging::create_spinner(Some("Reading occurrence records")));

    let outcome = read_records(file, resolver, spinner.as_ref());
    if let Some(pb) = &spinner {
        logging::finish_and_clear(pb);
    }
    let (records, excluded, skipped) = outcome?;

    logging::log_load_complete(path, records.len(), excluded, skipped, Some(start.elapsed()));

    if records.is_empty() {
        return Err(AnalysisError::EmptySource(path.to_path_buf()));
    }

    Ok(RecordCollection::new(records))
}

fn read_records<R: Read>(
    reader: R,
    resolver: &dyn DepartmentResolver,
    progress: Option<&ProgressBar>,
) -> Result<(Vec<Record>, usize, usize)> {
    let mut csv_reader = ReaderBuilder::new()
        .delimiter(b';')
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let columns = Columns::from_headers(csv_reader.headers()?)?;

    let mut records = Vec::new();
    let mut excluded = 0usize;
    let mut skipped = 0usize;
    let mut scanned = 0usize;

    for row in csv_reader.records() {
        let row = row?;
        scanned += 1;

        if let Some(pb) = progress {
            if scanned % 100_000 == 0 {
                pb.set_message(format!("{scanned} rows scanned"));
            }
        }

        let field = |index: usize| row.get(index).unwrap_or("");

        // Aggregate rollup rows are not strata
        if field(columns.level1) == AGGREGATE_PATHOLOGY
            || field(columns.indicator) == TOTAL_POPULATION_INDICATOR
            || field(columns.department) == NATIONAL_DEPARTMENT
        {
            excluded += 1;
            continue;
        }

        let Some((pathology, pathology_level)) = resolve_pathology(
            field(columns.level1),
            field(columns.level2),
            field(columns.level3),
        ) else {
            skipped += 1;
            continue;
        };

        // Incomplete or non-numeric rows are dropped, matching the
        // ingestion invariants the engine assumes
        let (Ok(year), Ok(case_count), Ok(population), Ok(prevalence)) = (
            field(columns.year).parse::<i32>(),
            field(columns.cases).parse::<u64>(),
            field(columns.population).parse::<u64>(),
            field(columns.prevalence).parse::<f64>(),
        ) else {
            skipped += 1;
            continue;
        };

        let department_code = normalize_department(field(columns.department));
        if department_code.is_empty() {
            skipped += 1;
            continue;
        }

        let mut record = Record::new(
            year,
            pathology,
            pathology_level,
            field(columns.age_band).to_string(),
            Sex::from(field(columns.sex)),
            department_code,
            case_count,
            population,
            prevalence,
        );

        if let Some(name) = resolver.resolve(&record.department_code) {
            record = record.with_department_name(name);
        }

        records.push(record);
    }

    Ok((records, excluded, skipped))
}
