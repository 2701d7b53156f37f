//! Character classes.

/// ぁ-ゖ, without the iteration marks and combining sound marks at the end of the block.
pub fn is_hiragana(c: char) -> bool {
    ('ぁ'..='ゖ').contains(&c)
}

/// ァ-ヺ, without the middle dot and iteration marks at the end of the block.
pub fn is_katakana(c: char) -> bool {
    ('ァ'..='ヺ').contains(&c)
}

/// Characters that can trail a kanji without a reading of their own.
pub fn is_kana(c: char) -> bool {
    is_hiragana(c) || is_katakana(c) || c == 'ー'
}

/// Characters that can carry a bracketed reading.
pub fn is_kanji(c: char) -> bool {
    let c32 = c as u32;
    // CJK Unified Ideographs Extension A
    (0x3400..=0x4DBF).contains(&c32)
        // CJK Unified Ideographs
        || (0x4E00..=0x9FFF).contains(&c32)
        // CJK Compatibility Ideographs
        || (0xF900..=0xFAFF).contains(&c32)
        || matches!(c, '々' | '〆' | 'ヵ' | 'ヶ')
}
