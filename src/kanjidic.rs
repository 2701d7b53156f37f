//! Models and parses the readings in KANJIDIC2.
//! See <https://www.edrdg.org/wiki/index.php/KANJIDIC_Project>

use crate::{
    error::{Error, Result},
    reading,
};
use flate2::read::GzDecoder;
use quick_xml::{
    events::{BytesStart, Event},
    Reader,
};
use std::{
    collections::{HashMap, HashSet},
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};
use tracing::{debug, info};

/// The on'yomi and kun'yomi of a kanji.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KanjiReadings {
    /// On'yomi, in hiragana.
    pub on: HashSet<String>,
    /// Kun'yomi as written in the dictionary, possibly with a leading dash and a dot before the okurigana.
    pub kun: HashSet<String>,
}

impl KanjiReadings {
    /// On'yomi are converted to hiragana, kun'yomi are stored as given.
    pub fn new<I, J>(on: I, kun: J) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
        J: IntoIterator,
        J::Item: Into<String>,
    {
        Self {
            on: on
                .into_iter()
                .map(|r| reading::kata_to_hira(r.as_ref()))
                .collect(),
            kun: kun.into_iter().map(Into::into).collect(),
        }
    }
}

/// Kanji readings keyed by kanji. Built once and only read afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KanjiReadingIndex {
    entries: HashMap<char, KanjiReadings>,
}

impl KanjiReadingIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, kanji: char, readings: KanjiReadings) {
        self.entries.insert(kanji, readings);
    }

    /// Returns None for kanji that are not in the dictionary.
    pub fn get(&self, kanji: char) -> Option<&KanjiReadings> {
        self.entries.get(&kanji)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Opens a KANJIDIC2 file, decompressing it first if the path ends in `.gz`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| Error::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let index = if path.extension().is_some_and(|ext| ext == "gz") {
            Self::from_kanjidic2(BufReader::new(GzDecoder::new(file)))?
        } else {
            Self::from_kanjidic2(BufReader::new(file))?
        };
        info!("loaded readings for {} kanji from {}", index.len(), path.display());
        Ok(index)
    }

    /// Reads the `ja_on` and `ja_kun` readings of every `<character>` in KANJIDIC2 XML.
    pub fn from_kanjidic2<R: BufRead>(r: R) -> Result<Self> {
        let mut reader = Reader::from_reader(r);
        let mut buf = vec![];

        let mut index = Self::new();
        // state for the <character> being read
        let mut literal = String::new();
        let mut readings = KanjiReadings::default();
        let mut in_reading_meaning = false;
        let mut field = Field::None;
        let mut text = String::new();

        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Start(e) => match e.name().as_ref() {
                    b"character" => {
                        literal.clear();
                        readings = KanjiReadings::default();
                    }
                    b"literal" => {
                        field = Field::Literal;
                        text.clear();
                    }
                    b"reading_meaning" => in_reading_meaning = true,
                    b"reading" if in_reading_meaning => {
                        field = match r_type(&e)?.as_deref() {
                            Some("ja_on") => Field::On,
                            Some("ja_kun") => Field::Kun,
                            _ => Field::None,
                        };
                        text.clear();
                    }
                    _ => {}
                },
                Event::Text(t) if field != Field::None => text.push_str(&t.unescape()?),
                Event::End(e) => match e.name().as_ref() {
                    b"literal" | b"reading" => {
                        let value = text.trim();
                        match field {
                            Field::Literal => literal = value.to_string(),
                            Field::On if !value.is_empty() => {
                                readings.on.insert(reading::kata_to_hira(value));
                            }
                            Field::Kun if !value.is_empty() => {
                                readings.kun.insert(value.to_string());
                            }
                            _ => {}
                        }
                        field = Field::None;
                    }
                    b"reading_meaning" => in_reading_meaning = false,
                    b"character" => {
                        let mut chars = literal.chars();
                        match (chars.next(), chars.next()) {
                            (Some(kanji), None) => {
                                index.insert(kanji, std::mem::take(&mut readings));
                            }
                            _ => debug!("skipping character with literal {literal:?}"),
                        }
                    }
                    _ => {}
                },
                Event::Eof => break,
                _ => {}
            }
            buf.clear();
        }

        Ok(index)
    }
}

impl FromIterator<(char, KanjiReadings)> for KanjiReadingIndex {
    fn from_iter<T: IntoIterator<Item = (char, KanjiReadings)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

// the element whose text is currently being collected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    None,
    Literal,
    On,
    Kun,
}

fn r_type(e: &BytesStart<'_>) -> Result<Option<String>> {
    for attr in e.attributes() {
        let attr = attr?;
        if attr.key.as_ref() == b"r_type" {
            return Ok(Some(attr.unescape_value()?.into_owned()));
        }
    }
    Ok(None)
}
