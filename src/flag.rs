//! Labels marking records that need a second look.

use std::{collections::BTreeSet, fmt::Display};

/// A reason to review an annotated record.
/// The variants are ordered the same way as their labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Flag {
    /// A single-kanji reading matched both an on'yomi and a kun'yomi.
    Ambiguous,
    /// A bracket spans several kanji, so it was not classified.
    MultiKanjiFuri,
    /// A single-kanji reading matched neither an on'yomi nor a kun'yomi, or the kanji is not in the dictionary.
    Unknown,
    /// The mapping assigns one reading to several characters (jukujikun, ateji).
    Jukujikun,
}

impl Flag {
    pub fn label(self) -> &'static str {
        match self {
            Self::Ambiguous => "ambiguous",
            Self::MultiKanjiFuri => "multi_kanji_furi",
            Self::Unknown => "unknown",
            Self::Jukujikun => "当て字・熟字訓",
        }
    }
}

impl Display for Flag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// The flags raised anywhere in a record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Flags(BTreeSet<Flag>);

impl Flags {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, flag: Flag) {
        self.0.insert(flag);
    }

    pub fn contains(&self, flag: Flag) -> bool {
        self.0.contains(&flag)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Flag> + '_ {
        self.0.iter().copied()
    }
}

impl Extend<Flag> for Flags {
    fn extend<T: IntoIterator<Item = Flag>>(&mut self, iter: T) {
        self.0.extend(iter);
    }
}

impl FromIterator<Flag> for Flags {
    fn from_iter<T: IntoIterator<Item = Flag>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Sorted labels separated by single spaces.
impl Display for Flags {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, flag) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{flag}")?;
        }
        Ok(())
    }
}
