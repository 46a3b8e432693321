use anyhow::{bail, Context, Result};
use core::Document;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// One raw dataset row. The manga dump carries many more columns; serde
/// ignores everything beyond the fields named here.
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(default, alias = "id")]
    manga_id: Option<u32>,
    title: String,
    synopsis: Option<String>,
}

/// Load a corpus from a CSV, JSON, or JSONL file, dispatched on extension.
/// Rows without a synopsis are dropped; missing-value and duplicate counts
/// are logged, not treated as errors. A missing file fails fast.
pub fn load_corpus(path: &Path) -> Result<Vec<Document>> {
    if !path.is_file() {
        bail!("dataset not found: {}", path.display());
    }
    let records = match path.extension().and_then(|s| s.to_str()) {
        Some("csv") => read_csv(path)?,
        Some("jsonl") => read_jsonl(path)?,
        Some("json") => read_json(path)?,
        other => bail!("unsupported dataset extension {other:?} for {}", path.display()),
    };
    Ok(filter_records(records))
}

fn read_csv(path: &Path) -> Result<Vec<RawRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;
    let mut records = Vec::new();
    for row in reader.deserialize() {
        let record: RawRecord = row.context("malformed csv row")?;
        records.push(record);
    }
    Ok(records)
}

fn read_jsonl(path: &Path) -> Result<Vec<RawRecord>> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let reader = BufReader::new(file);
    let mut records = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let record: RawRecord = serde_json::from_str(&line).context("malformed jsonl line")?;
        records.push(record);
    }
    Ok(records)
}

fn read_json(path: &Path) -> Result<Vec<RawRecord>> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let records: Vec<RawRecord> =
        serde_json::from_reader(BufReader::new(file)).context("malformed json array")?;
    Ok(records)
}

fn filter_records(records: Vec<RawRecord>) -> Vec<Document> {
    let total = records.len();
    let mut seen: HashSet<(String, String)> = HashSet::new();
    let mut missing = 0usize;
    let mut duplicates = 0usize;
    let mut corpus = Vec::new();

    for (row, record) in records.into_iter().enumerate() {
        let synopsis = match record.synopsis {
            Some(s) if !s.trim().is_empty() => s,
            _ => {
                missing += 1;
                continue;
            }
        };
        if !seen.insert((record.title.clone(), synopsis.clone())) {
            duplicates += 1;
        }
        corpus.push(Document {
            id: record.manga_id.unwrap_or(row as u32),
            title: record.title,
            synopsis,
        });
    }

    tracing::info!(
        total,
        kept = corpus.len(),
        missing_synopsis = missing,
        duplicates,
        "loaded corpus"
    );
    corpus
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn csv_rows_without_synopsis_are_dropped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("manga.csv");
        let mut f = File::create(&path).unwrap();
        writeln!(f, "manga_id,title,synopsis,genres").unwrap();
        writeln!(f, "1,Dragon Tale,a boy and his dragon,Fantasy").unwrap();
        writeln!(f, "2,No Story,,Drama").unwrap();
        writeln!(f, "3,Blade Girl,a girl finds a magic sword,Action").unwrap();

        let corpus = load_corpus(&path).unwrap();
        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus[0].id, 1);
        assert_eq!(corpus[1].title, "Blade Girl");
    }

    #[test]
    fn jsonl_rows_load_with_fallback_ids() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("manga.jsonl");
        let mut f = File::create(&path).unwrap();
        writeln!(f, r#"{{"title":"Dragon Tale","synopsis":"a boy and his dragon"}}"#).unwrap();
        writeln!(f).unwrap();
        writeln!(f, r#"{{"id":7,"title":"Blade Girl","synopsis":"a magic sword"}}"#).unwrap();

        let corpus = load_corpus(&path).unwrap();
        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus[0].id, 0);
        assert_eq!(corpus[1].id, 7);
    }

    #[test]
    fn missing_file_fails_fast() {
        assert!(load_corpus(Path::new("/nonexistent/manga.csv")).is_err());
    }

    #[test]
    fn unsupported_extension_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("manga.parquet");
        File::create(&path).unwrap();
        assert!(load_corpus(&path).is_err());
    }
}
