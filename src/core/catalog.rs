//! # Symbol Catalog
//!
//! The static mapping from English tokens to hieroglyph glyphs.
//!
//! ```text
//! MAPPING: &[(key, symbol)]    // definition order, never mutated
//!     │
//!     ├── Catalog::lookup()              exact key → symbol (translator)
//!     ├── Catalog::displayable_entries() cards shown in the UI
//!     └── Catalog::reverse_lookup()      symbol → first key in table order
//! ```
//!
//! The table is an ordered slice rather than a map so that iteration order is
//! part of the contract: several keys share one glyph (`c`/`k`, `e`/`i`/`y`,
//! `o`/`u`/`w`, ...), and reverse lookup returns whichever comes first.

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

/// Longest key in [`MAPPING`], in code points.
pub const MAX_KEY_LEN: usize = 10;

/// Every translatable token, in definition order.
pub const MAPPING: &[(&str, &str)] = &[
    // Alphabetic signs
    ("a", "𓄿"),
    ("b", "𓃀"),
    ("c", "𓎡"),
    ("d", "𓂧"),
    ("e", "𓇋"),
    ("f", "𓆑"),
    ("g", "𓎼"),
    ("h", "𓉔"),
    ("i", "𓇋"),
    ("j", "𓆳"),
    ("k", "𓎡"),
    ("l", "𓃭"),
    ("m", "𓅓"),
    ("n", "𓈖"),
    ("o", "𓍯"),
    ("p", "𓊪"),
    ("q", "𓈎"),
    ("r", "𓂋"),
    ("s", "𓋴"),
    ("t", "𓏏"),
    ("u", "𓍯"),
    ("v", "𓆑"),
    ("w", "𓍯"),
    ("x", "𓐍"),
    ("y", "𓇋"),
    ("z", "𓊃"),
    // Logograms
    ("sun", "𓇳"),
    ("water", "𓈖"),
    ("life", "𓋹"),
    ("god", "𓊹"),
    ("king", "𓇓"),
    ("house", "𓉐"),
    ("man", "𓀀"),
    ("woman", "𓁐"),
    ("bird", "𓅿"),
    ("eye", "𓁹"),
    ("hand", "𓂧"),
    ("foot", "𓃀"),
    ("heart", "𓄣"),
    ("mouth", "𓂋"),
    ("love", "𓅓𓂋"),
    ("good", "𓄤"),
    ("beautiful", "𓄤𓆑"),
    ("great", "𓄿𓄿"),
    ("small", "𓈖𓂧𓋴"),
    ("big", "𓄿𓄿"),
    ("cat", "𓅓𓇋𓅱"),
    ("dog", "𓃛"),
    ("lion", "𓃭"),
    ("snake", "𓆑"),
    ("fish", "𓂋𓅓"),
    ("tree", "𓇳𓏏"),
    ("flower", "𓆸"),
    ("star", "𓇼"),
    ("moon", "𓇹"),
    ("earth", "𓇾"),
    ("sky", "𓇯"),
    ("fire", "𓊖"),
    ("wind", "𓇳𓄿"),
    ("peace", "𓊵"),
    ("war", "𓌨"),
    ("temple", "𓉟"),
    ("pyramid", "𓉴"),
    ("pharaoh", "𓇓𓅱"),
    ("egypt", "𓎡𓅓𓏏"),
    ("nile", "𓇋𓏏𓂋"),
    ("desert", "𓂧𓈙𓂋"),
    ("gold", "𓈖𓃀𓅱"),
    ("silver", "𓈖𓃀"),
    ("copper", "𓃀𓇋𓄿"),
    ("stone", "𓇋𓈖𓂋"),
    ("bread", "𓏏"),
    ("beer", "𓏲𓈖𓎡"),
    ("meat", "𓇋𓅱𓆑"),
    ("milk", "𓇋𓂋𓏏"),
    ("honey", "𓃀𓇋𓏏"),
    ("wine", "𓇋𓂋𓊪"),
    // Numerals
    ("1", "𓏺"),
    ("2", "𓏻"),
    ("3", "𓏼"),
    ("4", "𓏽"),
    ("5", "𓏾"),
    ("6", "𓏿"),
    ("7", "𓐀"),
    ("8", "𓐁"),
    ("9", "𓐂"),
    ("10", "𓎆"),
    // Separators
    (" ", " "),
    (".", "𓊪"),
    (",", "𓊪"),
    ("!", "𓊪"),
    ("?", "𓊪"),
];

/// Word keys browsable as cards. Other word keys still translate.
pub const DISPLAY_WORDS: &[&str] = &[
    "sun", "water", "life", "god", "king", "house", "man", "woman", "bird", "eye", "hand", "foot",
    "heart", "mouth", "love", "good", "beautiful", "cat", "dog", "lion", "snake", "fish", "tree",
    "flower", "star", "moon", "earth", "sky", "fire", "wind", "peace", "temple", "pyramid",
    "pharaoh", "egypt", "nile", "desert", "gold", "bread", "beer", "wine",
];

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Letter,
    Word,
}

impl Category {
    /// Single code point keys are letters, everything else is a word.
    pub fn for_key(key: &str) -> Self {
        let mut chars = key.chars();
        match (chars.next(), chars.next()) {
            (Some(_), None) => Category::Letter,
            _ => Category::Word,
        }
    }

    /// Parse a category label, ignoring case.
    pub fn from_label(label: &str) -> Option<Self> {
        if label.eq_ignore_ascii_case("letter") {
            Some(Category::Letter)
        } else if label.eq_ignore_ascii_case("word") {
            Some(Category::Word)
        } else {
            None
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Letter => "letter",
            Category::Word => "word",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A catalog record as handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolEntry {
    pub key: String,
    pub symbol: String,
    pub category: Category,
}

impl SymbolEntry {
    pub fn new(key: impl Into<String>, symbol: impl Into<String>) -> Self {
        let key = key.into();
        let category = Category::for_key(&key);
        Self {
            key,
            symbol: symbol.into(),
            category,
        }
    }
}

/// Read-only view over [`MAPPING`] with a key index for O(1) lookups.
pub struct Catalog {
    pairs: &'static [(&'static str, &'static str)],
    index: HashMap<&'static str, &'static str>,
}

static CATALOG: LazyLock<Catalog> = LazyLock::new(|| Catalog::from_pairs(MAPPING));

/// The process-wide catalog, built on first use.
pub fn catalog() -> &'static Catalog {
    &CATALOG
}

impl Catalog {
    pub fn from_pairs(pairs: &'static [(&'static str, &'static str)]) -> Self {
        let mut index = HashMap::with_capacity(pairs.len());
        for &(key, symbol) in pairs {
            // First definition wins, mirroring reverse lookup order.
            index.entry(key).or_insert(symbol);
        }
        Self { pairs, index }
    }

    pub fn lookup(&self, key: &str) -> Option<&'static str> {
        self.index.get(key).copied()
    }

    /// All entries in definition order.
    pub fn entries(&self) -> impl Iterator<Item = SymbolEntry> + '_ {
        self.pairs
            .iter()
            .map(|&(key, symbol)| SymbolEntry::new(key, symbol))
    }

    /// Single-character keys plus the [`DISPLAY_WORDS`] allow-list, in
    /// definition order.
    pub fn displayable_entries(&self) -> Vec<SymbolEntry> {
        self.entries()
            .filter(|entry| {
                entry.category == Category::Letter || DISPLAY_WORDS.contains(&entry.key.as_str())
            })
            .collect()
    }

    /// First key in definition order whose symbol is `symbol`.
    ///
    /// Not injective: `reverse_lookup("𓇋")` is `"e"`, never `"i"` or `"y"`.
    pub fn reverse_lookup(&self, symbol: &str) -> Option<&'static str> {
        self.pairs
            .iter()
            .find(|&&(_, value)| value == symbol)
            .map(|&(key, _)| key)
    }
}
