//! PubChem drug to phenotype associations from the side-effect extract.
//!
//! Drug identifiers arrive as `CID`-prefixed PubChem compound ids;
//! phenotypes arrive as angle-bracketed absolute URIs and are used
//! verbatim once the brackets are stripped.

use chrono::NaiveDate;
use oxrdf::NamedNode;
use tracing::info;

use super::{split_columns, DatasetMeta, DatasetTransformer, RunSummary, TransformContext};
use crate::association::{attach_evidence, attach_provenance, create_association};
use crate::constants::{DRUG_DATASET, DRUG_INPUT};
use crate::error::Result;
use crate::evidence::EvidenceCode;
use crate::normalize::{strip_angle_brackets, strip_prefix_token};
use crate::store::{ShardWriter, TripleStore};

struct DrugRow {
    drug: String,
    phenotype: String,
}

pub struct Drug2Phenotype;

impl Drug2Phenotype {
    pub fn new() -> Self {
        Self
    }

    fn meta() -> DatasetMeta {
        DatasetMeta {
            creator: "Sara Althubaiti",
            created_on: NaiveDate::from_ymd_opt(2018, 11, 28).expect("valid date"),
            source: "http://sideeffects.embl.de/",
        }
    }
}

impl Default for Drug2Phenotype {
    fn default() -> Self {
        Self::new()
    }
}

impl DatasetTransformer for Drug2Phenotype {
    fn name(&self) -> &'static str {
        DRUG_DATASET
    }

    fn run(&self, ctx: &TransformContext) -> Result<RunSummary> {
        let input = ctx.data_dir.join(DRUG_INPUT);
        let content = std::fs::read_to_string(&input)?;

        let mut rows = Vec::new();
        for (idx, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let fields = split_columns(line, ' ', 2, &input, idx + 1)?;
            rows.push(DrugRow {
                drug: strip_prefix_token(fields[0], "CID"),
                phenotype: strip_angle_brackets(fields[1]),
            });
        }
        info!(rows = rows.len(), "loaded drug/phenotype pairs");

        let meta = Self::meta();
        let mut store = TripleStore::new();
        let mut writer = ShardWriter::new(&ctx.data_dir, DRUG_DATASET, None);
        let mut associations = 0;

        for row in &rows {
            if row.drug.is_empty() || row.phenotype.is_empty() {
                writer.row_done(&mut store)?;
                continue;
            }
            let drug = ctx.vocab.pubchem.resource(&row.drug)?;
            let phenotype = NamedNode::new(row.phenotype.clone())?;

            let association = create_association(&mut store, &drug, &phenotype)?;
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
