#![doc = include_str!("../README.md")]

pub mod error;
pub mod export;
mod flag;
mod furigana;
pub mod kanjidic;
pub mod mapping;
pub mod onkun;
pub mod pipeline;
pub mod reading;
mod utils;

pub use self::error::{Error, Result, SegmentFault};
pub use self::flag::{Flag, Flags};
pub use self::furigana::{build, Furigana, Token};
pub use self::kanjidic::{KanjiReadingIndex, KanjiReadings};
pub use self::onkun::{classify, rewrite, Classification};
pub use self::pipeline::{annotate, process, process_reader, AnnotatedRecord, Batch, CorpusRecord};
pub use self::utils::{is_kana, is_kanji};
