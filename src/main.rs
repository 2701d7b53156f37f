use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use onkun_furigana::{export, process_reader, KanjiReadingIndex};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "onkun-furigana")]
#[command(about = "Annotate JMdictFurigana entries with on'yomi and kun'yomi furigana")]
struct Cli {
    /// KANJIDIC2 XML, optionally gzipped.
    #[arg(long, env = "KANJIDIC_PATH", default_value = "kanjidic2.xml.gz")]
    kanjidic: PathBuf,
    /// Corpus with one `headword|yomi|mapping` record per line.
    #[arg(long, env = "CORPUS_PATH", default_value = "JmdictFurigana.txt")]
    corpus: PathBuf,
    /// Where to write the CSV table.
    #[arg(long, env = "OUTPUT_PATH", default_value = "JmdictFurigana_onkun.csv")]
    output: PathBuf,
    /// Only read this many lines of the corpus.
    #[arg(long)]
    limit: Option<usize>,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let start = Instant::now();
    let index = KanjiReadingIndex::open(&cli.kanjidic)
        .with_context(|| format!("failed to load {}", cli.kanjidic.display()))?;
    info!("kanji dictionary loaded in {} ms", start.elapsed().as_millis());

    let corpus = File::open(&cli.corpus)
        .with_context(|| format!("failed to open {}", cli.corpus.display()))?;
    let batch = process_reader(BufReader::new(corpus), &index, cli.limit)
        .with_context(|| format!("failed to read {}", cli.corpus.display()))?;

    let output = File::create(&cli.output)
        .with_context(|| format!("failed to create {}", cli.output.display()))?;
    export::write_csv(BufWriter::new(output), &batch.records)
        .with_context(|| format!("failed to write {}", cli.output.display()))?;
    info!(
        "wrote {} rows to {} in {} ms",
        batch.records.len(),
        cli.output.display(),
        start.elapsed().as_millis()
    );
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
