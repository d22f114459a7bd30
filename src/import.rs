//! Batch import of samples from CSV exports, one sample per row.

use crate::quality::{metric_definitions, Domain, RawValue, Sample};
use std::fs::File;
use std::io::Read;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum SampleImportError {
    #[error("failed to read sample export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid sample CSV data: {0}")]
    Csv(#[from] csv::Error),
}

/// Header spellings found in the published milk dataset.
const HEADER_ALIASES: &[(&str, &str)] = &[("temprature", "temperature"), ("color", "colour")];

pub struct SampleImporter;

impl SampleImporter {
    pub fn from_path(
        domain: Domain,
        path: impl AsRef<Path>,
    ) -> Result<Vec<Sample>, SampleImportError> {
        let file = File::open(path)?;
        Self::from_reader(domain, file)
    }

    /// Columns that name no metric are ignored, as are empty cells; the
    /// evaluator reports whatever is then missing.
    pub fn from_reader<R: Read>(domain: Domain, reader: R) -> Result<Vec<Sample>, SampleImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let columns: Vec<Option<&'static str>> = csv_reader
            .headers()?
            .iter()
            .map(|header| metric_key_for(domain, header))
            .collect();

        let mut samples = Vec::new();
        for record in csv_reader.records() {
            let record = record?;
            let sample: Sample = columns
                .iter()
                .zip(record.iter())
                .filter_map(|(key, cell)| {
                    let key = (*key)?;
                    (!cell.is_empty()).then(|| (key, RawValue::from(cell)))
                })
                .collect();
            samples.push(sample);
        }

        Ok(samples)
    }
}

fn metric_key_for(domain: Domain, header: &str) -> Option<&'static str> {
    let normalized = header.trim().to_ascii_lowercase().replace(' ', "_");
    let normalized = HEADER_ALIASES
        .iter()
        .find(|(alias, _)| *alias == normalized)
        .map_or(normalized.as_str(), |(_, key)| *key);

    metric_definitions(domain)
        .iter()
        .map(|definition| definition.key)
        .find(|key| key.eq_ignore_ascii_case(normalized))
}
