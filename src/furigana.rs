use crate::{
    error::{Error, Result, SegmentFault},
    flag::{Flag, Flags},
    mapping::{self, MappingSegment},
    utils,
};
use std::{collections::HashMap, fmt::Display};

/// A word with bracketed furigana, e.g. `煮[に] 崩[くず]れ`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Furigana {
    /// The word split into units, left to right.
    pub tokens: Vec<Token>,
    /// Whether some reading covers several characters.
    pub jukujikun: bool,
}

impl Furigana {
    /// Flags that concern the mapping as a whole.
    pub fn flags(&self) -> Flags {
        let mut flags = Flags::new();
        if self.jukujikun {
            flags.insert(Flag::Jukujikun);
        }
        flags
    }
}

/// Prints the tokens separated by spaces.
impl Display for Furigana {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{token}")?;
        }
        Ok(())
    }
}

/// A unit of the annotated word.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Token {
    /// A segment of the original word.
    pub base: String,
    /// The furigana of the segment. None for characters without a mapping.
    pub reading: Option<String>,
    /// Kana following the segment, written without brackets.
    pub okurigana: String,
}

impl Token {
    fn bare(c: char) -> Self {
        Self {
            base: c.to_string(),
            reading: None,
            okurigana: String::new(),
        }
    }
}

/// Prints the token as `base[reading]okurigana`.
impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.base)?;
        if let Some(reading) = &self.reading {
            write!(f, "[{reading}]")?;
        }
        write!(f, "{}", self.okurigana)
    }
}

/// Attaches the readings in the mapping to the headword.
///
/// Kana directly after a mapped segment are attached to it as okurigana, and kana without a
/// mapping of their own are attached to whatever precedes them.
/// When several segments start at the same index, the last one is used.
pub fn build(headword: &str, mapping: &str) -> Result<Furigana> {
    let chars = headword.chars().collect::<Vec<_>>();
    let segments = mapping::parse(mapping)?;

    if let Some(segment) = segments.iter().find(|s| s.end >= chars.len()) {
        return Err(Error::malformed(
            &segment.to_string(),
            SegmentFault::RangeExceedsHeadword {
                end: segment.end,
                len: chars.len(),
            },
        ));
    }
    let jukujikun = segments.iter().any(MappingSegment::is_range);
    let starts = segments
        .iter()
        .map(|s| (s.start, s))
        .collect::<HashMap<_, _>>();

    let mut tokens: Vec<Token> = vec![];
    let mut i = 0;
    while i < chars.len() {
        if let Some(segment) = starts.get(&i) {
            let mut token = Token {
                base: chars[i..=segment.end].iter().collect(),
                reading: Some(segment.reading.clone()),
                okurigana: String::new(),
            };
            i = segment.end + 1;
            while i < chars.len() && !starts.contains_key(&i) && utils::is_kana(chars[i]) {
                token.okurigana.push(chars[i]);
                i += 1;
            }
            tokens.push(token);
        } else {
            let c = chars[i];
            match tokens.last_mut() {
                Some(previous) if utils::is_kana(c) => previous.okurigana.push(c),
                _ => tokens.push(Token::bare(c)),
            }
            i += 1;
        }
    }

    Ok(Furigana { tokens, jukujikun })
}

#[cfg(test)]
mod test {
    use super::*;

    fn furigana(headword: &str, mapping: &str) -> String {
        build(headword, mapping).unwrap().to_string()
    }

    #[test]
    fn attaches_okurigana() {
        let furigana = build("煮崩れ", "0:に;1:くず").unwrap();
        assert_eq!(furigana.to_string(), "煮[に] 崩[くず]れ");
        assert!(furigana.flags().is_empty());
        assert_eq!(furigana.tokens[1].okurigana, "れ");
    }

    #[test]
    fn flags_jukujikun() {
        let furigana = build("経帷子", "0-2:きょうかたびら").unwrap();
        assert_eq!(furigana.to_string(), "経帷子[きょうかたびら]");
        assert!(furigana.flags().contains(Flag::Jukujikun));
    }

    #[test]
    fn attaches_katakana_tail() {
        assert_eq!(furigana("赤ゲット", "0:あか"), "赤[あか]ゲット");
    }

    #[test]
    fn one_token_per_kanji() {
        assert_eq!(
            furigana(
                "赤十字条約",
                "0:せき;1:じゅう;2:じ;3:じょう;4:やく"
            ),
            "赤[せき] 十[じゅう] 字[じ] 条[じょう] 約[やく]"
        );
    }

    #[test]
    fn okurigana_stops_at_next_segment() {
        assert_eq!(
            furigana("取り扱い", "0:と;2:あつか"),
            "取[と]り 扱[あつか]い"
        );
    }

    #[test]
    fn unmapped_characters() {
        // leading kana have nothing to attach to
        assert_eq!(furigana("お茶", "1:ちゃ"), "お 茶[ちゃ]");
        // stray kana attach to the previous token, even a bare one
        assert_eq!(furigana("〇つ", ""), "〇つ");
        assert_eq!(furigana("Ｘ線", "1:せん"), "Ｘ 線[せん]");
        assert_eq!(furigana("ひらがな", ""), "ひらがな");
        assert_eq!(furigana("", ""), "");
    }

    #[test]
    fn last_duplicate_start_wins() {
        assert_eq!(furigana("日", "0:ひ;0:にち"), "日[にち]");
    }

    #[test]
    fn rejects_range_past_headword() {
        for mapping in ["0:に;3:くず", "1-3:くずれ"] {
            match build("煮崩れ", mapping) {
                Err(Error::MalformedSegment { fault, .. }) => assert_eq!(
                    fault,
                    SegmentFault::RangeExceedsHeadword { end: 3, len: 3 }
                ),
                other => panic!("expected a malformed segment, got {other:?}"),
            }
        }
    }
}
