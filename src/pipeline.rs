//! Runs whole corpus records through the furigana builder and the on/kun classifier.

use crate::{
    error::Result,
    flag::Flags,
    furigana,
    kanjidic::KanjiReadingIndex,
    onkun,
};
use std::io::BufRead;
use tracing::{debug, info};

/// A line of the corpus: `headword|yomi|mapping`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CorpusRecord {
    pub headword: String,
    pub yomi: String,
    pub mapping: String,
}

/// A corpus record with its final furigana.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AnnotatedRecord {
    pub headword: String,
    pub yomi: String,
    /// Bracketed furigana with on'yomi in katakana.
    pub furigana: String,
    pub flags: Flags,
}

/// The output of a run over a corpus.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Batch {
    pub records: Vec<AnnotatedRecord>,
    /// Records dropped because their mapping could not be used.
    pub malformed: usize,
    /// Blank lines, comments and lines without exactly three fields.
    pub skipped: usize,
}

/// Parses a corpus line. Returns None for blank lines, comments and lines that do not have
/// exactly three `|`-separated fields.
pub fn parse_line(line: &str) -> Option<CorpusRecord> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    let mut fields = line.split('|');
    match (fields.next(), fields.next(), fields.next(), fields.next()) {
        (Some(headword), Some(yomi), Some(mapping), None) => Some(CorpusRecord {
            headword: headword.to_string(),
            yomi: yomi.to_string(),
            mapping: mapping.to_string(),
        }),
        _ => None,
    }
}

/// Builds the furigana of a record and classifies its single-kanji readings.
/// Fails if the mapping is malformed.
pub fn annotate(record: &CorpusRecord, index: &KanjiReadingIndex) -> Result<AnnotatedRecord> {
    let bracketed = furigana::build(&record.headword, &record.mapping)?;
    let mut flags = bracketed.flags();
    let (furigana, classification_flags) = onkun::rewrite(&bracketed.to_string(), index);
    flags.extend(classification_flags.iter());
    Ok(AnnotatedRecord {
        headword: record.headword.clone(),
        yomi: record.yomi.clone(),
        furigana,
        flags,
    })
}

/// Annotates every record, dropping those with malformed mappings.
pub fn process<'a, I>(records: I, index: &KanjiReadingIndex) -> Batch
where
    I: IntoIterator<Item = &'a CorpusRecord>,
{
    let mut batch = Batch::default();
    for record in records {
        push(&mut batch, record, index);
    }
    batch
}

/// Reads and annotates a corpus, stopping after `limit` lines if given.
/// Lines that are not records are skipped, failing to read the stream is fatal.
pub fn process_reader<R: BufRead>(
    reader: R,
    index: &KanjiReadingIndex,
    limit: Option<usize>,
) -> Result<Batch> {
    let mut batch = Batch::default();
    for (i, line) in reader.lines().enumerate() {
        if limit.is_some_and(|limit| i >= limit) {
            break;
        }
        let line = line?;
        match parse_line(&line) {
            Some(record) => push(&mut batch, &record, index),
            None => batch.skipped += 1,
        }
    }
    info!(
        "annotated {} records, skipped {} lines, dropped {} malformed records",
        batch.records.len(),
        batch.skipped,
        batch.malformed
    );
    Ok(batch)
}

fn push(batch: &mut Batch, record: &CorpusRecord, index: &KanjiReadingIndex) {
    match annotate(record, index) {
        Ok(annotated) => batch.records.push(annotated),
        // annotating does no I/O, so this is a malformed mapping
        Err(err) => {
            debug!("dropping {}: {err}", record.headword);
            batch.malformed += 1;
        }
    }
}
