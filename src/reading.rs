//! Reading normalisation: folding between kana scripts and expanding dictionary readings
//! into the forms they can take inside a word.

use std::collections::HashSet;

// distance between a hiragana character and its katakana counterpart
const UNICODE_KANA_TABLE_DISTANCE: u32 = 0x60;

/// Converts katakana in the text to hiragana, leaving everything else (including ー) as is.
pub fn kata_to_hira(text: &str) -> String {
    text.chars().map(kata_to_hira_char).collect()
}

/// Converts hiragana in the text to katakana, leaving everything else as is.
pub fn hira_to_kata(text: &str) -> String {
    text.chars().map(hira_to_kata_char).collect()
}

fn kata_to_hira_char(c: char) -> char {
    if ('ァ'..='ヶ').contains(&c) || c == 'ヽ' || c == 'ヾ' {
        shift(c, |c| c - UNICODE_KANA_TABLE_DISTANCE)
    } else {
        c
    }
}

fn hira_to_kata_char(c: char) -> char {
    if ('ぁ'..='ゖ').contains(&c) || c == 'ゝ' || c == 'ゞ' {
        shift(c, |c| c + UNICODE_KANA_TABLE_DISTANCE)
    } else {
        c
    }
}

fn shift(c: char, f: impl Fn(u32) -> u32) -> char {
    char::from_u32(f(c as u32)).unwrap_or(c)
}

/// Strips surrounding whitespace and the leading dash KANJIDIC uses for readings that only
/// appear as a suffix.
pub fn normalize_kun(reading: &str) -> &str {
    let reading = reading.trim();
    reading.strip_prefix('-').unwrap_or(reading)
}

/// The forms a kun'yomi can take in a bracket.
/// For a dotted reading such as `くず.れる` these are the stem before the dot and the whole
/// reading without the dot, since the okurigana may or may not be covered by the bracket.
pub fn kun_variants(reading: &str) -> HashSet<String> {
    let reading = normalize_kun(reading);
    let mut variants = HashSet::new();
    if let Some((stem, _)) = reading.split_once('.') {
        variants.insert(stem.trim().to_string());
        variants.insert(reading.replace('.', "").trim().to_string());
    } else {
        variants.insert(reading.to_string());
    }
    variants
}

/// The forms an on'yomi (in hiragana) can take in a bracket: the reading itself, and its
/// sokuonbin form when the final mora can be doubled (がく → がっ).
pub fn on_variants(reading: &str) -> HashSet<String> {
    let mut variants = HashSet::new();
    variants.insert(reading.to_string());
    if let Some(stem) = reading.strip_suffix(|c: char| matches!(c, 'く' | 'き' | 'つ' | 'ち')) {
        variants.insert(format!("{stem}っ"));
    }
    variants
}

#[cfg(test)]
mod test {
    use super::*;

    fn set(items: &[&str]) -> HashSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn folds_scripts() {
        assert_eq!(kata_to_hira("スイ"), "すい");
        assert_eq!(kata_to_hira("ヴァイオリン"), "ゔぁいおりん");
        assert_eq!(hira_to_kata("じょう"), "ジョウ");
        assert_eq!(hira_to_kata("ゖ"), "ヶ");
    }

    #[test]
    fn leaves_other_characters() {
        assert_eq!(kata_to_hira("ラーメン"), "らーめん");
        assert_eq!(kata_to_hira("ヷ"), "ヷ");
        assert_eq!(hira_to_kata("水[すい]"), "水[スイ]");
        assert_eq!(hira_to_kata("abc"), "abc");
    }

    #[test]
    fn normalizes_kun() {
        assert_eq!(normalize_kun(" -くず.れる "), "くず.れる");
        assert_eq!(normalize_kun("--か"), "-か");
        assert_eq!(normalize_kun("あま-"), "あま-");
    }

    #[test]
    fn expands_dotted_kun() {
        assert_eq!(kun_variants("くず.れる"), set(&["くず", "くずれる"]));
        assert_eq!(kun_variants("-に.る"), set(&["に", "にる"]));
        assert_eq!(kun_variants("みず"), set(&["みず"]));
    }

    #[test]
    fn expands_sokuonbin() {
        assert_eq!(on_variants("がく"), set(&["がく", "がっ"]));
        assert_eq!(on_variants("てき"), set(&["てき", "てっ"]));
        assert_eq!(on_variants("とつ"), set(&["とつ", "とっ"]));
        assert_eq!(on_variants("いち"), set(&["いち", "いっ"]));
        assert_eq!(on_variants("すい"), set(&["すい"]));
        assert_eq!(on_variants(""), set(&[""]));
    }
}
