//! DOID disease to phenotype associations, text-mined upstream.

use chrono::NaiveDate;
use tracing::info;

use super::{split_columns, DatasetMeta, DatasetTransformer, RunSummary, TransformContext};
use crate::association::{attach_evidence, attach_provenance, create_association};
use crate::constants::{DISEASE_DATASET, DISEASE_INPUT};
use crate::error::Result;
use crate::evidence::EvidenceCode;
use crate::normalize::curie_to_local;
use crate::store::{ShardWriter, TripleStore};

/// One disease/phenotype pair from the formatted DOID extract, with
/// both identifiers already flattened to local names.
struct DiseaseRow {
    disease: String,
    phenotype: String,
}

pub struct Disease2Phenotype;

impl Disease2Phenotype {
    pub fn new() -> Self {
        Self
    }

    fn meta() -> DatasetMeta {
        DatasetMeta {
            creator: "Sara Althubaiti",
            created_on: NaiveDate::from_ymd_opt(2018, 11, 7).expect("valid date"),
            source: "http://aber-owl.net/aber-owl/diseasephenotypes/",
        }
    }
}

impl Default for Disease2Phenotype {
    fn default() -> Self {
        Self::new()
    }
}

impl DatasetTransformer for Disease2Phenotype {
    fn name(&self) -> &'static str {
        DISEASE_DATASET
    }

    fn run(&self, ctx: &TransformContext) -> Result<RunSummary> {
        let input = ctx.data_dir.join(DISEASE_INPUT);
        let content = std::fs::read_to_string(&input)?;

        let mut rows = Vec::new();
        for (idx, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let fields = split_columns(line, '\t', 2, &input, idx + 1)?;
            rows.push(DiseaseRow {
                disease: curie_to_local(fields[0]),
                phenotype: curie_to_local(fields[1]),
            });
        }
        info!(rows = rows.len(), "loaded disease/phenotype pairs");

        let meta = Self::meta();
        let mut store = TripleStore::new();
        let mut writer = ShardWriter::new(&ctx.data_dir, DISEASE_DATASET, None);
        let mut associations = 0;

        for row in &rows {
            if row.disease.is_empty() || row.phenotype.is_empty() {
                writer.row_done(&mut store)?;
                continue;
            }
            let disease = ctx.vocab.pheno.resource(&row.disease)?;
            let phenotype = ctx.vocab.pheno.resource(&row.phenotype)?;

            let association = create_association(&mut store, &disease, &phenotype)?;
            attach_evidence(&mut store, &association, EvidenceCode::TextMining);
            attach_provenance(&mut store, &association, &meta.provenance())?;
            associations += 1;

            writer.row_done(&mut store)?;
        }

        let report = writer.finish(&mut store)?;
        Ok(RunSummary {
            rows: rows.len(),
            associations,
            triples: report.triples,
            outputs: report.shards,
        })
    }
}
