//! Predicted gene to phenotype associations ranked by a similarity
//! score. The score column is validated but not carried into the graph.
//! Serialized in numbered shards every `flush_every` rows.

use chrono::NaiveDate;
use tracing::info;

use super::{split_columns, DatasetMeta, DatasetTransformer, RunSummary, TransformContext};
use crate::association::{attach_evidence, attach_provenance, create_association};
use crate::constants::{GENE_PREDICTIVE_DATASET, GENE_PREDICTIVE_INPUT};
use crate::error::Result;
use crate::evidence::EvidenceCode;
use crate::normalize::{clean_cell, curie_to_local};
use crate::store::{ShardWriter, TripleStore};

struct PredictionRow {
    gene: String,
    phenotype: String,
}

pub struct GenePredictive2Phenotype {
    flush_every: usize,
}

impl GenePredictive2Phenotype {
    pub fn new(flush_every: usize) -> Self {
        Self { flush_every }
    }

    fn meta() -> DatasetMeta {
        DatasetMeta {
            creator: "Robert Hoehndorf",
            created_on: NaiveDate::from_ymd_opt(2019, 6, 3).expect("valid date"),
            source: "https://doi.org/10.1093/nar/gkr538",
        }
    }
}

impl DatasetTransformer for GenePredictive2Phenotype {
    fn name(&self) -> &'static str {
        GENE_PREDICTIVE_DATASET
    }

    fn run(&self, ctx: &TransformContext) -> Result<RunSummary> {
        let input = ctx.data_dir.join(GENE_PREDICTIVE_INPUT);
        let content = std::fs::read_to_string(&input)?;

        let mut rows = Vec::new();
        for (idx, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            // Columns: Entrez gene, phenotype, prediction score.
            let fields = split_columns(line, '\t', 3, &input, idx + 1)?;
            rows.push(PredictionRow {
                gene: clean_cell(fields[0]),
                phenotype: curie_to_local(fields[1]),
            });
        }
        info!(rows = rows.len(), "loaded predicted gene/phenotype rows");

        let meta = Self::meta();
        let flush = (self.flush_every > 0).then_some(self.flush_every);
        let mut store = TripleStore::new();
        let mut writer = ShardWriter::new(&ctx.data_dir, GENE_PREDICTIVE_DATASET, flush);
        let mut associations = 0;

        for row in &rows {
            if row.gene.is_empty() || row.phenotype.is_empty() {
                writer.row_done(&mut store)?;
                continue;
            }
            let gene = ctx.vocab.gene.resource(&row.gene)?;
            let phenotype = ctx.vocab.pheno.resource(&row.phenotype)?;

            let association = create_association(&mut store, &gene, &phenotype)?;
            attach_evidence(&mut store, &association, EvidenceCode::PhenotypicSimilarity);
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
