//! Pathogen to phenotype associations from the PathoPhenoDB JSON
//! export.
//!
//! Each record carries a taxon, a list of disease entries whose first
//! `method` field names how the record was curated, and a list of
//! phenotypes. The evidence set is derived once per pathogen and applied
//! to every one of its phenotype associations.

use chrono::NaiveDate;
use oxrdf::NamedNode;
use serde::Deserialize;
use tracing::info;

use super::{DatasetMeta, DatasetTransformer, RunSummary, TransformContext};
use crate::association::{attach_evidence, attach_provenance, create_association};
use crate::constants::{PATHOGEN_DATASET, PATHOGEN_INPUT};
use crate::error::Result;
use crate::evidence::EvidenceCode;
use crate::normalize::{curie_to_local, strip_angle_brackets};
use crate::store::{ShardWriter, TripleStore};
use crate::vocab::Vocabulary;

#[derive(Debug, Deserialize)]
struct PathogenRecord {
    #[serde(rename = "TaxID")]
    tax_id: String,
    #[serde(rename = "Diseases", default)]
    diseases: Vec<DiseaseEntry>,
    #[serde(rename = "Phenotypes", default)]
    phenotypes: Vec<PhenotypeEntry>,
}

#[derive(Debug, Deserialize)]
struct DiseaseEntry {
    #[serde(default)]
    method: String,
}

#[derive(Debug, Deserialize)]
struct PhenotypeEntry {
    #[serde(default)]
    id: String,
}

pub struct Pathogen2Phenotype;

impl Pathogen2Phenotype {
    pub fn new() -> Self {
        Self
    }

    fn meta() -> DatasetMeta {
        DatasetMeta {
            creator: "Senay Kafkas",
            created_on: NaiveDate::from_ymd_opt(2019, 3, 21).expect("valid date"),
            source: "http://patho.phenomebrowser.net/",
        }
    }
}

impl Default for Pathogen2Phenotype {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve a taxon or phenotype reference: absolute URIs are used
/// verbatim, CURIEs are flattened into the OBO namespace. Empty
/// references resolve to nothing and the caller skips them.
fn entity_resource(vocab: &Vocabulary, raw: &str) -> Result<Option<NamedNode>> {
    let cleaned = strip_angle_brackets(raw);
    if cleaned.is_empty() {
        return Ok(None);
    }
    let node = if cleaned.starts_with("http://") || cleaned.starts_with("https://") {
        NamedNode::new(cleaned)?
    } else {
        vocab.obo.resource(&curie_to_local(&cleaned))?
    };
    Ok(Some(node))
}

impl DatasetTransformer for Pathogen2Phenotype {
    fn name(&self) -> &'static str {
        PATHOGEN_DATASET
    }

    fn run(&self, ctx: &TransformContext) -> Result<RunSummary> {
        let input = ctx.data_dir.join(PATHOGEN_INPUT);
        let content = std::fs::read_to_string(&input)?;
        let records: Vec<PathogenRecord> = serde_json::from_str(&content)?;
        info!(records = records.len(), "loaded pathogen records");

        let meta = Self::meta();
        let mut store = TripleStore::new();
        let mut writer = ShardWriter::new(&ctx.data_dir, PATHOGEN_DATASET, None);
        let mut associations = 0;

        for record in &records {
            let Some(pathogen) = entity_resource(&ctx.vocab, &record.tax_id)? else {
                writer.row_done(&mut store)?;
                continue;
            };

            // Evidence policy comes from the first disease entry only.
            let evidence = record
                .diseases
                .first()
                .map(|d| EvidenceCode::from_method_text(&d.method))
                .unwrap_or_default();

            for entry in &record.phenotypes {
                let Some(phenotype) = entity_resource(&ctx.vocab, &entry.id)? else {
                    continue;
                };
                let association = create_association(&mut store, &pathogen, &phenotype)?;
                for code in &evidence {
                    attach_evidence(&mut store, &association, *code);
                }
                attach_provenance(&mut store, &association, &meta.provenance())?;
                associations += 1;
            }

            writer.row_done(&mut store)?;
        }

        let report = writer.finish(&mut store)?;
        Ok(RunSummary {
            rows: records.len(),
            associations,
            triples: report.triples,
            outputs: report.shards,
        })
    }
}
