use anyhow::{Context, Result};
use bucket_core::export::write_csv;
use bucket_core::load::{load_config, load_dictionary};
use bucket_core::{Analyzer, AnalyzerConfig, CategoryDictionary, CategoryReport, CompiledDictionary, FrequencyTable, MatchMode, Normalizer};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use std::fs::{self, File};
use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;

const DICTIONARY_ENV: &str = "BUCKETER_DICTIONARY";

#[derive(Parser)]
#[command(name = "bucketer")]
#[command(about = "Sort messages into keyword categories and rank frequent words", long_about = None)]
struct Cli {
    #[command(flatten)]
    common: Common,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Default)]
struct Common {
    /// JSON config file (mode, limit, nfkc, dictionary, stopwords)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Category dictionary JSON (falls back to $BUCKETER_DICTIONARY, then the built-in one)
    #[arg(long, global = true)]
    dictionary: Option<PathBuf>,
    /// Newline-separated stop-word list
    #[arg(long, global = true)]
    stopwords: Option<PathBuf>,
    /// Match on word stems instead of exact lowercase words
    #[arg(long, global = true, default_value_t = false)]
    stemmed: bool,
    /// Apply NFKC normalization to the input first
    #[arg(long, global = true, default_value_t = false)]
    nfkc: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List the most frequent words
    TopWords {
        /// Messages file, one per line (stdin when omitted)
        #[arg(long)]
        input: Option<PathBuf>,
        #[arg(long)]
        limit: Option<usize>,
        /// Print JSON instead of a ranked list
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Bucket words into categories
    Categorize {
        #[arg(long)]
        input: Option<PathBuf>,
        #[arg(long)]
        limit: Option<usize>,
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Write the category table as CSV (Category,Words)
    Export {
        #[arg(long)]
        input: Option<PathBuf>,
        /// Output CSV path (stdout when omitted)
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Validate a dictionary and list keywords that can never match
    CheckDictionary,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(io::stderr).init();
    let cli = Cli::parse();
    let limit = match &cli.command {
        Commands::TopWords { limit, .. } | Commands::Categorize { limit, .. } => *limit,
        _ => None,
    };
    let config = resolve_config(&cli.common, limit, std::env::var(DICTIONARY_ENV).ok().map(PathBuf::from))?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::TopWords { input, json, .. } => {
            let analyzer = Analyzer::new(&config)?;
            let table = analyzer.top_words(&read_input(input)?)?;
            if json {
                serde_json::to_writer_pretty(&mut out, &table)?;
                writeln!(out)?;
            } else {
                render_ranking(&mut out, &table)?;
            }
        }
        Commands::Categorize { input, json, .. } => {
            let analyzer = Analyzer::new(&config)?;
            let report = analyzer.categorize(&read_input(input)?)?;
            if json {
                serde_json::to_writer_pretty(&mut out, &report)?;
                writeln!(out)?;
            } else {
                render_report(&mut out, &report)?;
            }
        }
        Commands::Export { input, output } => {
            let analyzer = Analyzer::new(&config)?;
            let report = analyzer.categorize(&read_input(input)?)?;
            match output {
                Some(path) => {
                    let f = File::create(&path).with_context(|| format!("creating {}", path.display()))?;
                    write_csv(&report.rows, BufWriter::new(f))?;
                    tracing::info!(path = %path.display(), rows = report.rows.len(), "wrote CSV export");
                }
                None => write_csv(&report.rows, &mut out)?,
            }
        }
        Commands::CheckDictionary => {
            let dict = match &config.dictionary {
                Some(path) => load_dictionary(path)?,
                None => CategoryDictionary::builtin()?,
            };
            let compiled = CompiledDictionary::compile(&dict, Normalizer::new(config.mode));
            render_check(&mut out, &dict, &compiled)?;
        }
    }
    Ok(())
}

/// Config file first, then flags and environment on top.
fn resolve_config(common: &Common, limit: Option<usize>, env_dictionary: Option<PathBuf>) -> Result<AnalyzerConfig> {
    let mut config = match &common.config {
        Some(path) => load_config(path)?,
        None => AnalyzerConfig::default(),
    };
    if let Some(path) = common.dictionary.clone().or(env_dictionary) {
        config.dictionary = Some(path);
    }
    if let Some(path) = &common.stopwords {
        config.stopwords = Some(path.clone());
    }
    if common.stemmed {
        config.mode = MatchMode::Stemmed;
    }
    if common.nfkc {
        config.nfkc = true;
    }
    if let Some(limit) = limit {
        config.limit = limit;
    }
    Ok(config)
}

fn read_input(input: Option<PathBuf>) -> Result<String> {
    match input {
        Some(path) => fs::read_to_string(&path).with_context(|| format!("reading {}", path.display())),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn render_ranking<W: Write>(out: &mut W, table: &FrequencyTable) -> Result<()> {
    for (rank, wc) in table.iter().enumerate() {
        writeln!(out, "{}. {} ({} occurrences)", rank + 1, wc.word, wc.count)?;
    }
    Ok(())
}

fn render_report<W: Write>(out: &mut W, report: &CategoryReport) -> Result<()> {
    let width = report.rows.iter().map(|r| r.category.len()).max().unwrap_or(0);
    for row in &report.rows {
        writeln!(out, "{:<width$}  {}", row.category, row.joined_words())?;
    }
    if !report.miscellaneous_top.is_empty() {
        writeln!(out)?;
        writeln!(out, "Top words in Miscellaneous")?;
        render_ranking(out, &report.miscellaneous_top)?;
    }
    Ok(())
}

fn render_check<W: Write>(out: &mut W, dict: &CategoryDictionary, compiled: &CompiledDictionary) -> Result<()> {
    writeln!(
        out,
        "{} categories, {} keywords ({:?} matching)",
        dict.len(),
        dict.keyword_count(),
        compiled.normalizer().mode()
    )?;
    let dead: Vec<(&str, &str)> = compiled.unmatchable_keywords().collect();
    if dead.is_empty() {
        return Ok(());
    }
    writeln!(out, "{} keywords can never match a single word:", dead.len())?;
    for (category, keyword) in dead {
        writeln!(out, "  {category}: {keyword}")?;
    }
    Ok(())
}
