use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use phenodb_transformer::config::Config;
use phenodb_transformer::datasets::{self, DatasetTransformer, TransformContext};
use phenodb_transformer::logging;

#[derive(Parser)]
#[command(name = "phenodb_transformer")]
#[command(about = "Transforms phenotype association datasets into RDF graphs")]
#[command(version = "0.1.0")]
struct Cli {
    /// Base directory holding the source datasets; RDF output is written here too
    #[arg(default_value_os_t = default_data_dir())]
    data_dir: PathBuf,
}

fn default_data_dir() -> PathBuf {
    match std::env::var_os("HOME") {
        Some(home) => PathBuf::from(home).join("phenodb").join("data"),
        None => PathBuf::from("data"),
    }
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    logging::init_logging();

    let cli = Cli::parse();
    let config = Config::load(&cli.data_dir)?;
    let ctx = TransformContext::new(cli.data_dir);

    println!(
        "🧬 Transforming phenotype association datasets in {}",
        ctx.data_dir.display()
    );

    for transformer in datasets::all(&config) {
        let span = tracing::info_span!("dataset", name = transformer.name());
        let _enter = span.enter();

        info!("starting transform");
        let summary = transformer.run(&ctx)?;
        info!(
            rows = summary.rows,
            associations = summary.associations,
            triples = summary.triples,
            "transform finished"
        );

        println!("\n📊 Results for {}:", transformer.name());
        println!("   Rows read: {}", summary.rows);
        println!("   Associations: {}", summary.associations);
        println!("   Triples written: {}", summary.triples);
        for output in &summary.outputs {
            println!("   Output file: {}", output.display());
        }
    }

    println!("\n✅ All datasets transformed");
    Ok(())
}
