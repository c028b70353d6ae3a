//! One transformer per source dataset. Each reads its whole input file
//! from the base data directory, asserts reified associations row by
//! row, and serializes the accumulated graph through a
//! [`crate::store::ShardWriter`].

use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::association::Provenance;
use crate::config::Config;
use crate::error::{Result, TransformError};
use crate::vocab::Vocabulary;

pub mod disease;
pub mod drug;
pub mod gene_predictive;
pub mod gene_textmined;
pub mod mondo;
pub mod pathogen;

pub use disease::Disease2Phenotype;
pub use drug::Drug2Phenotype;
pub use gene_predictive::GenePredictive2Phenotype;
pub use gene_textmined::GeneTextMined2Phenotype;
pub use mondo::Mondo2Phenotype;
pub use pathogen::Pathogen2Phenotype;

/// Everything a transformer needs for one run. Each transformer owns
/// its own graph; only the data directory and the namespace bindings
/// are shared.
pub struct TransformContext {
    pub data_dir: PathBuf,
    pub vocab: Vocabulary,
}

impl TransformContext {
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            data_dir,
            vocab: Vocabulary::new(),
        }
    }
}

/// Outcome of one dataset run.
#[derive(Debug)]
pub struct RunSummary {
    pub rows: usize,
    pub associations: usize,
    pub triples: usize,
    pub outputs: Vec<PathBuf>,
}

/// Fixed provenance constants for one dataset. These describe the
/// curation of the source file, not anything computed per row.
#[derive(Debug, Clone, Copy)]
pub struct DatasetMeta {
    pub creator: &'static str,
    pub created_on: NaiveDate,
    pub source: &'static str,
}

impl DatasetMeta {
    pub fn provenance(&self) -> Provenance<'static> {
        Provenance {
            creator: Some(self.creator),
            created_on: Some(self.created_on),
            source: Some(self.source),
        }
    }
}

/// Core trait all dataset transformers implement.
pub trait DatasetTransformer {
    /// Unique identifier for this dataset.
    fn name(&self) -> &'static str;

    /// Run the full read, transform, serialize pass.
    fn run(&self, ctx: &TransformContext) -> Result<RunSummary>;
}

/// All transformers in their fixed execution order.
pub fn all(config: &Config) -> Vec<Box<dyn DatasetTransformer>> {
    vec![
        Box::new(Disease2Phenotype::new()),
        Box::new(Drug2Phenotype::new()),
        Box::new(GeneTextMined2Phenotype::new(config.flush.gene_textmined_rows)),
        Box::new(Pathogen2Phenotype::new()),
        Box::new(Mondo2Phenotype::new()),
        Box::new(GenePredictive2Phenotype::new(config.flush.gene_predictive_rows)),
    ]
}

/// Split one delimited line into exactly `expected` columns. A row with
/// any other column count is fatal for the whole run.
pub(crate) fn split_columns<'a>(
    line: &'a str,
    delimiter: char,
    expected: usize,
    path: &Path,
    line_no: usize,
) -> Result<Vec<&'a str>> {
    let fields: Vec<&str> = line.split(delimiter).collect();
    if fields.len() != expected {
        return Err(TransformError::MalformedRow {
            path: path.display().to_string(),
            line: line_no,
            reason: format!("expected {} columns, found {}", expected, fields.len()),
        });
    }
    Ok(fields)
}
