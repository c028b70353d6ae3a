/// Dataset name and file name constants to ensure consistency across
/// the transformers, the CLI, and the run summaries.

// Dataset names (used for tracing spans and output stems)
pub const DISEASE_DATASET: &str = "disease2phenotype";
pub const DRUG_DATASET: &str = "drug2phenotype";
pub const GENE_TEXTMINED_DATASET: &str = "gene2phenotype_textmined";
pub const PATHOGEN_DATASET: &str = "pathogen2phenotype";
pub const MONDO_DATASET: &str = "mondo2phenotype";
pub const GENE_PREDICTIVE_DATASET: &str = "gene2phenotype_predictive";

// Input file names, resolved against the base data directory
pub const DISEASE_INPUT: &str = "DOID-Phenotypes-Formated.txt";
pub const DRUG_INPUT: &str = "Drug-phenotypes.txt";
pub const GENE_TEXTMINED_INPUT: &str = "merged.human.mouse.TM.extracts.expanded+NPMI.rank25.txt";
pub const PATHOGEN_INPUT: &str = "pathogens.4web.v3.txt";
pub const MONDO_INPUT: &str = "mondo-phenotypes.txt";
pub const GENE_PREDICTIVE_INPUT: &str = "gene-phenotype-predictions.txt";

// Default row thresholds for the two datasets large enough to shard
pub const GENE_TEXTMINED_FLUSH_ROWS: usize = 150_000;
pub const GENE_PREDICTIVE_FLUSH_ROWS: usize = 200_000;

/// Optional settings file looked up inside the data directory.
pub const CONFIG_FILE: &str = "transform.toml";

/// Marker separating the two gene columns of the text-mined extract.
pub const GENE_PAIR_SEPARATOR: &str = "_#_";
