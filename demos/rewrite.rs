//! `onkun_furigana::rewrite` uses kanji readings to write the on'yomi in bracketed furigana in katakana.

use onkun_furigana::{KanjiReadingIndex, KanjiReadings};

fn main() {
    let mut index = KanjiReadingIndex::new();
    index.insert('水', KanjiReadings::new(["スイ"], ["みず"]));
    index.insert('曜', KanjiReadings::new(["ヨウ"], Vec::<String>::new()));
    index.insert('日', KanjiReadings::new(["ニチ", "ジツ"], ["ひ", "-び", "-か"]));
    let (text, flags) = onkun_furigana::rewrite("水[すい] 曜[よう] 日[び]", &index);
    println!("{text} | flags: {flags}");
}
