use crate::config::AnalyzerConfig;
use crate::dictionary::CategoryDictionary;
use crate::stopwords::StopWordSet;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

fn read_text(path: &Path) -> Result<String> {
    let mut f = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let mut buf = String::new();
    f.read_to_string(&mut buf).with_context(|| format!("reading {}", path.display()))?;
    Ok(buf)
}

/// Load and validate a JSON category dictionary.
pub fn load_dictionary<P: AsRef<Path>>(path: P) -> Result<CategoryDictionary> {
    let path = path.as_ref();
    let dict = CategoryDictionary::from_json(&read_text(path)?)
        .with_context(|| format!("invalid category dictionary {}", path.display()))?;
    tracing::info!(path = %path.display(), categories = dict.len(), keywords = dict.keyword_count(), "loaded category dictionary");
    Ok(dict)
}

/// Load a newline-separated stop-word list.
pub fn load_stopwords<P: AsRef<Path>>(path: P) -> Result<StopWordSet> {
    let path = path.as_ref();
    let set = StopWordSet::parse(&read_text(path)?);
    tracing::info!(path = %path.display(), words = set.len(), "loaded stop words");
    Ok(set)
}

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AnalyzerConfig> {
    let path = path.as_ref();
    let config: AnalyzerConfig = serde_json::from_str(&read_text(path)?)
        .with_context(|| format!("invalid config {}", path.display()))?;
    Ok(config)
}
