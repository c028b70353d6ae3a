//! MONDO disease to phenotype associations from curated annotations.
//! The input carries a header row, which is skipped.

use chrono::NaiveDate;
use tracing::info;

use super::{split_columns, DatasetMeta, DatasetTransformer, RunSummary, TransformContext};
use crate::association::{attach_evidence, attach_provenance, create_association};
use crate::constants::{MONDO_DATASET, MONDO_INPUT};
use crate::error::Result;
use crate::evidence::EvidenceCode;
use crate::normalize::curie_to_local;
use crate::store::{ShardWriter, TripleStore};

struct MondoRow {
    disease: String,
    phenotype: String,
}

pub struct Mondo2Phenotype;

impl Mondo2Phenotype {
    pub fn new() -> Self {
        Self
    }

    fn meta() -> DatasetMeta {
        DatasetMeta {
            creator: "Marwa Abdelhakim",
            created_on: NaiveDate::from_ymd_opt(2020, 1, 10).expect("valid date"),
            source: "https://hpo.jax.org/app/download/annotation",
        }
    }
}

impl Default for Mondo2Phenotype {
    fn default() -> Self {
        Self::new()
    }
}

impl DatasetTransformer for Mondo2Phenotype {
    fn name(&self) -> &'static str {
        MONDO_DATASET
    }

    fn run(&self, ctx: &TransformContext) -> Result<RunSummary> {
        let input = ctx.data_dir.join(MONDO_INPUT);
        let content = std::fs::read_to_string(&input)?;

        let mut rows = Vec::new();
        for (idx, line) in content.lines().enumerate() {
            if idx == 0 || line.trim().is_empty() {
                continue;
            }
            let fields = split_columns(line, '\t', 2, &input, idx + 1)?;
            rows.push(MondoRow {
                disease: curie_to_local(fields[0]),
                phenotype: curie_to_local(fields[1]),
            });
        }
        info!(rows = rows.len(), "loaded mondo/phenotype pairs");

        let meta = Self::meta();
        let mut store = TripleStore::new();
        let mut writer = ShardWriter::new(&ctx.data_dir, MONDO_DATASET, None);
        let mut associations = 0;

        for row in &rows {
            if row.disease.is_empty() || row.phenotype.is_empty() {
                writer.row_done(&mut store)?;
                continue;
            }
            let disease = ctx.vocab.pheno.resource(&row.disease)?;
            let phenotype = ctx.vocab.pheno.resource(&row.phenotype)?;

            let association = create_association(&mut store, &disease, &phenotype)?;
            attach_evidence(&mut store, &association, EvidenceCode::ManualCuration);
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
