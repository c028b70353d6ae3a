//! Text-mined gene to phenotype associations from the merged
//! human/mouse literature extracts.
//!
//! A row names up to three subjects for the same phenotype: an optional
//! MGI marker and one or two Entrez genes packed into a single column.
//! This is the largest input, so the graph is serialized in numbered
//! shards every `flush_every` rows.

use chrono::NaiveDate;
use tracing::info;

use super::{split_columns, DatasetMeta, DatasetTransformer, RunSummary, TransformContext};
use crate::association::{attach_evidence, attach_provenance, create_association};
use crate::constants::{GENE_PAIR_SEPARATOR, GENE_TEXTMINED_DATASET, GENE_TEXTMINED_INPUT};
use crate::error::Result;
use crate::evidence::EvidenceCode;
use crate::normalize::{clean_cell, curie_to_local};
use crate::store::{ShardWriter, TripleStore};

/// One literature-extract row; identifiers are cleaned but may be empty.
struct GeneRow {
    mgi: String,
    gene1: String,
    gene2: String,
    phenotype: String,
}

impl GeneRow {
    fn parse(fields: &[&str]) -> Self {
        let (gene1, gene2) = match fields[1].split_once(GENE_PAIR_SEPARATOR) {
            Some((first, second)) => (clean_cell(first), clean_cell(second)),
            None => (clean_cell(fields[1]), String::new()),
        };
        Self {
            mgi: clean_cell(fields[0]),
            gene1,
            gene2,
            phenotype: curie_to_local(fields[2]),
        }
    }
}

pub struct GeneTextMined2Phenotype {
    flush_every: usize,
}

impl GeneTextMined2Phenotype {
    pub fn new(flush_every: usize) -> Self {
        Self { flush_every }
    }

    fn meta() -> DatasetMeta {
        DatasetMeta {
            creator: "Senay Kafkas",
            created_on: NaiveDate::from_ymd_opt(2019, 2, 14).expect("valid date"),
            source: "https://www.ncbi.nlm.nih.gov/pubmed/",
        }
    }
}

impl DatasetTransformer for GeneTextMined2Phenotype {
    fn name(&self) -> &'static str {
        GENE_TEXTMINED_DATASET
    }

    fn run(&self, ctx: &TransformContext) -> Result<RunSummary> {
        let input = ctx.data_dir.join(GENE_TEXTMINED_INPUT);
        let content = std::fs::read_to_string(&input)?;

        let mut rows = Vec::new();
        for (idx, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            // Columns: MGI marker, packed Entrez gene pair, phenotype, NPMI score.
            let fields = split_columns(line, '\t', 4, &input, idx + 1)?;
            rows.push(GeneRow::parse(&fields));
        }
        info!(rows = rows.len(), "loaded text-mined gene/phenotype rows");

        let meta = Self::meta();
        let flush = (self.flush_every > 0).then_some(self.flush_every);
        let mut store = TripleStore::new();
        let mut writer = ShardWriter::new(&ctx.data_dir, GENE_TEXTMINED_DATASET, flush);
        let mut associations = 0;

        for row in &rows {
            if row.phenotype.is_empty() {
                writer.row_done(&mut store)?;
                continue;
            }
            let phenotype = ctx.vocab.pheno.resource(&row.phenotype)?;

            if !row.mgi.is_empty() {
                let marker = ctx.vocab.mgi.resource(&row.mgi)?;
                let association = create_association(&mut store, &marker, &phenotype)?;
                attach_evidence(&mut store, &association, EvidenceCode::TextMining);
                attach_provenance(&mut store, &association, &meta.provenance())?;
                associations += 1;
            }
            for gene in [&row.gene1, &row.gene2] {
                if gene.is_empty() {
                    continue;
                }
                let gene = ctx.vocab.gene.resource(gene)?;
                let association = create_association(&mut store, &gene, &phenotype)?;
                attach_evidence(&mut store, &association, EvidenceCode::TextMining);
                attach_provenance(&mut store, &association, &meta.provenance())?;
                associations += 1;
            }

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
