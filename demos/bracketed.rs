//! `onkun_furigana::build` attaches the readings of a mapping to the headword, without any kanji
//! dictionary.

fn main() {
    for line in [
        "煮崩れ|にくずれ|0:に;1:くず",
        "赤十字条約|せきじゅうじじょうやく|0:せき;1:じゅう;2:じ;3:じょう;4:やく",
        "赤ゲット|あかゲット|0:あか",
        "経帷子|きょうかたびら|0-2:きょうかたびら",
    ] {
        let record = onkun_furigana::pipeline::parse_line(line).unwrap();
        let furigana = onkun_furigana::build(&record.headword, &record.mapping).unwrap();
        println!("{} => {} | flags: {}", record.headword, furigana, furigana.flags());
    }
}
