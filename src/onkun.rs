//! Classifies the readings of single-kanji brackets as on'yomi or kun'yomi.

use crate::{
    flag::{Flag, Flags},
    kanjidic::KanjiReadingIndex,
    reading, utils,
};
use regex::{Captures, Regex};
use std::{collections::HashSet, fmt::Display, sync::OnceLock};

/// A run of kanji followed by a reading in ASCII or fullwidth brackets.
static BRACKET_PATTERN: OnceLock<Regex> = OnceLock::new();

fn bracket_pattern() -> &'static Regex {
    BRACKET_PATTERN.get_or_init(|| {
        Regex::new(concat!(
            r"(?P<kanji>[\x{3400}-\x{4DBF}\x{4E00}-\x{9FFF}\x{F900}-\x{FAFF}々〆ヵヶ]+)",
            r"(?P<open>\[|［)(?P<reading>[^\]］]+)(?P<close>\]|］)",
        ))
        .expect("Invalid bracket regex pattern")
    })
}

/// The kind of a kanji reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Classification {
    On,
    Kun,
    /// The reading is both an on'yomi and a kun'yomi of the kanji.
    Ambiguous,
    /// The reading is neither, or the kanji is not in the index.
    Unknown,
}

impl Classification {
    pub fn label(self) -> &'static str {
        match self {
            Self::On => "on",
            Self::Kun => "kun",
            Self::Ambiguous => "ambiguous",
            Self::Unknown => "unknown",
        }
    }

    /// The flag raised for a bracket with this classification, if any.
    pub fn flag(self) -> Option<Flag> {
        match self {
            Self::Ambiguous => Some(Flag::Ambiguous),
            Self::Unknown => Some(Flag::Unknown),
            Self::On | Self::Kun => None,
        }
    }
}

impl Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Classifies a reading (in hiragana) of a single kanji.
/// Sokuonbin forms of on'yomi and okurigana-less forms of kun'yomi count as matches.
pub fn classify(kanji: char, furigana: &str, index: &KanjiReadingIndex) -> Classification {
    let Some(readings) = index.get(kanji) else {
        return Classification::Unknown;
    };
    let furigana = furigana.trim();

    let on = readings
        .on
        .iter()
        .flat_map(|o| reading::on_variants(o.trim()))
        .collect::<HashSet<_>>();
    let kun = readings
        .kun
        .iter()
        .flat_map(|k| reading::kun_variants(k))
        .collect::<HashSet<_>>();

    match (on.contains(furigana), kun.contains(furigana)) {
        (true, true) => Classification::Ambiguous,
        (true, false) => Classification::On,
        (false, true) => Classification::Kun,
        (false, false) => Classification::Unknown,
    }
}

/// Rewrites the on'yomi brackets of single kanji in the text to katakana.
///
/// Kun'yomi brackets are left as they are. Ambiguous and unknown readings are left as they are
/// and flagged, as are brackets that cover several kanji.
/// Rewriting the output again changes nothing.
pub fn rewrite(text: &str, index: &KanjiReadingIndex) -> (String, Flags) {
    let mut flags = Flags::new();
    let rewritten = bracket_pattern().replace_all(text, |caps: &Captures<'_>| {
        let kanji = &caps["kanji"];
        let mut chars = kanji.chars();
        let single = match (chars.next(), chars.next()) {
            (Some(c), None) if utils::is_kanji(c) => Some(c),
            _ => None,
        };
        let Some(c) = single else {
            flags.insert(Flag::MultiKanjiFuri);
            return caps[0].to_string();
        };

        let furigana = &caps["reading"];
        let classification = classify(c, &reading::kata_to_hira(furigana), index);
        match classification {
            Classification::On => format!(
                "{kanji}{}{}{}",
                &caps["open"],
                reading::hira_to_kata(furigana),
                &caps["close"]
            ),
            _ => {
                flags.extend(classification.flag());
                caps[0].to_string()
            }
        }
    });
    (rewritten.into_owned(), flags)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::kanjidic::KanjiReadings;

    fn index() -> KanjiReadingIndex {
        [
            ('水', KanjiReadings::new(["スイ"], ["みず", "みず-"])),
            ('曜', KanjiReadings::new(["ヨウ"], Vec::<String>::new())),
            ('日', KanjiReadings::new(["ニチ", "ジツ"], ["ひ", "-び", "-か"])),
            ('学', KanjiReadings::new(["ガク"], ["まな.ぶ"])),
            ('崩', KanjiReadings::new(["ホウ"], ["くず.れる", "-くず.れ"])),
            ('生', KanjiReadings::new(["セイ", "ショウ"], ["い.きる", "せい"])),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn classifies_readings() {
        let index = index();
        assert_eq!(classify('水', "すい", &index), Classification::On);
        assert_eq!(classify('水', "みず", &index), Classification::Kun);
        assert_eq!(classify('日', "び", &index), Classification::Kun);
        assert_eq!(classify('生', "せい", &index), Classification::Ambiguous);
        assert_eq!(classify('水', "うお", &index), Classification::Unknown);
        assert_eq!(classify('煮', "に", &index), Classification::Unknown);
    }

    #[test]
    fn classifies_variants() {
        let index = index();
        // sokuonbin
        assert_eq!(classify('学', "がっ", &index), Classification::On);
        assert_eq!(classify('日', "にっ", &index), Classification::On);
        // stem and full form of dotted kun'yomi
        assert_eq!(classify('学', "まな", &index), Classification::Kun);
        assert_eq!(classify('学', "まなぶ", &index), Classification::Kun);
        assert_eq!(classify('崩', "くず", &index), Classification::Kun);
        // surrounding whitespace
        assert_eq!(classify('水', " すい ", &index), Classification::On);
    }

    #[test]
    fn on_classification_comes_from_variants() {
        let index = index();
        for (kanji, furigana) in [('学', "がっ"), ('日', "じっ"), ('水', "すい")] {
            assert_eq!(classify(kanji, furigana, &index), Classification::On);
            let stored = &index.get(kanji).unwrap().on;
            assert!(stored
                .iter()
                .any(|o| reading::on_variants(o).contains(furigana)));
        }
    }

    #[test]
    fn rewrites_on_readings() {
        let (text, flags) = rewrite("水[すい] 曜[よう] 日[び]", &index());
        assert_eq!(text, "水[スイ] 曜[ヨウ] 日[び]");
        assert!(flags.is_empty());
    }

    #[test]
    fn flags_unclassified_brackets() {
        let (text, flags) = rewrite("煮[に] 崩[くず]れ", &index());
        assert_eq!(text, "煮[に] 崩[くず]れ");
        assert_eq!(flags.to_string(), "unknown");

        let (text, flags) = rewrite("生[せい]", &index());
        assert_eq!(text, "生[せい]");
        assert_eq!(flags.to_string(), "ambiguous");
    }

    #[test]
    fn leaves_multi_kanji_brackets() {
        let (text, flags) = rewrite("経帷子[きょうかたびら]", &index());
        assert_eq!(text, "経帷子[きょうかたびら]");
        assert!(flags.contains(Flag::MultiKanjiFuri));
        assert!(!flags.contains(Flag::Unknown));
    }

    #[test]
    fn accepts_fullwidth_brackets() {
        let (text, flags) = rewrite("水［すい］ 日［ひ］", &index());
        assert_eq!(text, "水［スイ］ 日［ひ］");
        assert!(flags.is_empty());
    }

    #[test]
    fn ignores_text_outside_brackets() {
        let (text, flags) = rewrite("すい ひらがな 水", &index());
        assert_eq!(text, "すい ひらがな 水");
        assert!(flags.is_empty());
    }

    #[test]
    fn rewriting_is_idempotent() {
        let index = index();
        for input in [
            "水[すい] 曜[よう] 日[び]",
            "学[がっ] 生[せい] 煮[に]",
            "経帷子[きょうかたびら] 崩[くず]れ",
        ] {
            let (once, flags_once) = rewrite(input, &index);
            let (twice, flags_twice) = rewrite(&once, &index);
            assert_eq!(once, twice);
            assert_eq!(flags_once, flags_twice);
        }
    }
}
