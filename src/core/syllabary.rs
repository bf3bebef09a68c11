// File: src/core/syllabary.rs
//! Ethiopic syllabary layout: consonant blocks and vowel-order arithmetic.
//!
//! Every consonant owns an 8-aligned block of codepoints starting at
//! U+1200. Regular blocks hold orders 1..=7 at offsets 0..=6. The
//! labialized series (ቈ ኈ ኰ ጐ) only encode five orders at irregular
//! offsets and are listed in an explicit exception table that is
//! consulted before the stride rule.

use crate::core::types::{Radical, VowelOrder};
use crate::error::{Error, Result};
use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

const ETHIOPIC_START: u32 = 0x1200;
const ETHIOPIC_END: u32 = 0x137F;
const BLOCK_STRIDE: u32 = 8;

/// First-order characters of the uniform blocks.
const REGULAR_ROWS: [char; 34] = [
    'ሀ', 'ለ', 'ሐ', 'መ', 'ሠ', 'ረ', 'ሰ', 'ሸ', 'ቀ', 'በ', 'ቨ', 'ተ', 'ቸ', 'ኀ', 'ነ', 'ኘ', 'አ',
    'ከ', 'ኸ', 'ወ', 'ዐ', 'ዘ', 'ዠ', 'የ', 'ደ', 'ጀ', 'ገ', 'ጠ', 'ጨ', 'ጰ', 'ጸ', 'ፀ', 'ፈ', 'ፐ',
];

/// (order, offset) pairs of the labialized blocks: no 2nd or 7th order.
const LABIALIZED_LAYOUT: &[(u8, u32)] = &[(1, 0), (3, 2), (4, 3), (5, 4), (6, 5)];

const IRREGULAR_ROWS: [(char, &[(u8, u32)]); 4] = [
    ('ቈ', LABIALIZED_LAYOUT),
    ('ኈ', LABIALIZED_LAYOUT),
    ('ኰ', LABIALIZED_LAYOUT),
    ('ጐ', LABIALIZED_LAYOUT),
];

/// Fallback preference per requested order, closest vowel quality first.
const PROXIMITY: [[u8; 7]; 7] = [
    [1, 4, 6, 5, 3, 7, 2],
    [2, 7, 6, 3, 1, 4, 5],
    [3, 5, 6, 1, 4, 2, 7],
    [4, 1, 7, 5, 6, 3, 2],
    [5, 3, 1, 4, 6, 7, 2],
    [6, 1, 4, 3, 2, 5, 7],
    [7, 2, 4, 1, 5, 6, 3],
];

static TABLE: LazyLock<CodepointVowelTable> = LazyLock::new(CodepointVowelTable::build);

/// Process-wide, read-only view of the syllabary.
pub fn table() -> &'static CodepointVowelTable {
    &TABLE
}

/// Whether `c` lies in the Ethiopic block, modeled or not.
pub fn is_ethiopic(c: char) -> bool {
    (ETHIOPIC_START..=ETHIOPIC_END).contains(&(c as u32))
}

/// Maps any syllable to its block's radical.
pub fn base_order_of(c: char) -> Result<Radical> {
    table().decompose(c).map(|(radical, _)| radical)
}

/// Syllable for `radical` carrying `order`.
pub fn with_order(radical: Radical, order: VowelOrder) -> Result<char> {
    table().with_order(radical, order)
}

/// Splits a syllable into radical and vowel order.
pub fn decompose(c: char) -> Result<(Radical, VowelOrder)> {
    table().decompose(c)
}

pub struct CodepointVowelTable {
    regular: HashSet<char>,
    irregular: HashMap<char, &'static [(u8, u32)]>,
}

impl CodepointVowelTable {
    fn build() -> Self {
        Self {
            regular: REGULAR_ROWS.into_iter().collect(),
            irregular: IRREGULAR_ROWS.into_iter().collect(),
        }
    }

    pub fn radicals(&self) -> impl Iterator<Item = Radical> + '_ {
        REGULAR_ROWS
            .iter()
            .chain(IRREGULAR_ROWS.iter().map(|(base, _)| base))
            .map(|&c| Radical::new_unchecked(c))
    }

    pub fn supports(&self, radical: Radical, order: VowelOrder) -> bool {
        match self.irregular.get(&radical.as_char()) {
            Some(layout) => layout.iter().any(|&(o, _)| o == order.get()),
            None => self.regular.contains(&radical.as_char()),
        }
    }

    pub fn supported_orders(&self, radical: Radical) -> Vec<VowelOrder> {
        VowelOrder::all().filter(|&o| self.supports(radical, o)).collect()
    }

    /// The requested order if the block encodes it, else the closest one
    /// it does encode.
    pub fn nearest_supported(&self, radical: Radical, order: VowelOrder) -> VowelOrder {
        PROXIMITY[usize::from(order.get() - 1)]
            .iter()
            .map(|&o| VowelOrder::of(o))
            .find(|&o| self.supports(radical, o))
            .unwrap_or(order)
    }

    pub fn with_order(&self, radical: Radical, order: VowelOrder) -> Result<char> {
        let base = radical.as_char() as u32;
        let offset = match self.irregular.get(&radical.as_char()) {
            Some(layout) => layout
                .iter()
                .find(|&&(o, _)| o == order.get())
                .map(|&(_, offset)| offset),
            None if self.regular.contains(&radical.as_char()) => Some(u32::from(order.get() - 1)),
            None => None,
        };
        offset
            .and_then(|offset| char::from_u32(base + offset))
            .ok_or(Error::InvalidOrder {
                radical: radical.as_char(),
                order: order.get(),
            })
    }

    pub fn decompose(&self, c: char) -> Result<(Radical, VowelOrder)> {
        if !is_ethiopic(c) {
            return Err(Error::UnknownCharacter { ch: c });
        }
        let code = c as u32;
        let offset = (code - ETHIOPIC_START) % BLOCK_STRIDE;
        let base = char::from_u32(code - offset).ok_or(Error::UnknownCharacter { ch: c })?;

        let order = match self.irregular.get(&base) {
            Some(layout) => layout
                .iter()
                .find(|&&(_, off)| off == offset)
                .map(|&(o, _)| o),
            None if self.regular.contains(&base) && offset < 7 => Some(offset as u8 + 1),
            None => None,
        };
        order
            .and_then(VowelOrder::new)
            .map(|o| (Radical::new_unchecked(base), o))
            .ok_or(Error::UnknownCharacter { ch: c })
    }
}
