// src/core/types.rs
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The vowel grade realized on a consonant, 1 (ግዕዝ) through 7 (ሳብዕ).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct VowelOrder(u8);

impl VowelOrder {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 7;

    pub const GEEZ: Self = Self(1);
    pub const KAIB: Self = Self(2);
    pub const SALIS: Self = Self(3);
    pub const RABI: Self = Self(4);
    pub const HAMIS: Self = Self(5);
    pub const SADIS: Self = Self(6);
    pub const SABI: Self = Self(7);

    /// Builds an order from a template literal. Panics on anything outside
    /// 1..=7: template tables are code, so a bad literal is a bug.
    pub const fn of(n: u8) -> Self {
        assert!(n >= Self::MIN && n <= Self::MAX, "vowel order out of range");
        Self(n)
    }

    pub fn new(n: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&n).then_some(Self(n))
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    pub fn all() -> impl Iterator<Item = Self> {
        (Self::MIN..=Self::MAX).map(Self)
    }
}

impl TryFrom<u8> for VowelOrder {
    type Error = String;

    fn try_from(n: u8) -> std::result::Result<Self, String> {
        Self::new(n).ok_or_else(|| format!("vowel order {n} is outside 1..=7"))
    }
}

impl From<VowelOrder> for u8 {
    fn from(order: VowelOrder) -> Self {
        order.0
    }
}

impl fmt::Display for VowelOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A base consonant, identified by its first-order (bare) character.
///
/// Radicals are only minted by the syllabary, which guarantees the
/// character is the first-order member of a known block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub struct Radical(char);

impl Radical {
    pub(crate) const fn new_unchecked(c: char) -> Self {
        Self(c)
    }

    /// Normalizes any syllable of a block to that block's radical.
    pub fn from_char(c: char) -> Result<Self> {
        crate::core::syllabary::base_order_of(c)
    }

    pub const fn as_char(self) -> char {
        self.0
    }
}

/// Only first-order characters of a known block are radicals.
impl TryFrom<char> for Radical {
    type Error = Error;

    fn try_from(c: char) -> Result<Self> {
        let radical = Radical::from_char(c)?;
        if radical.as_char() != c {
            return Err(Error::InvalidRoot(format!("{c:?} is not a first-order radical")));
        }
        Ok(radical)
    }
}

impl From<Radical> for char {
    fn from(radical: Radical) -> Self {
        radical.0
    }
}

impl fmt::Display for Radical {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An ordered triliteral or quadriliteral consonantal root.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RootRecord")]
pub struct Root {
    radicals: Vec<Radical>,
}

/// Wire shape of a `Root`; decoding goes through `Root::new`.
#[derive(Deserialize)]
struct RootRecord {
    radicals: Vec<Radical>,
}

impl TryFrom<RootRecord> for Root {
    type Error = Error;

    fn try_from(record: RootRecord) -> Result<Self> {
        Root::new(record.radicals)
    }
}

impl Root {
    pub fn new(radicals: Vec<Radical>) -> Result<Self> {
        match radicals.len() {
            3 | 4 => Ok(Self { radicals }),
            n => Err(Error::InvalidRoot(format!(
                "expected 3 or 4 radicals, got {n}"
            ))),
        }
    }

    /// Parses a root written in any vowel orders, e.g. "ቀተለ" or "ቅትል".
    pub fn parse(input: &str) -> Result<Self> {
        let radicals = input
            .trim()
            .chars()
            .map(|c| {
                Radical::from_char(c)
                    .map_err(|_| Error::InvalidRoot(format!("{c:?} is not an Ethiopic consonant")))
            })
            .collect::<Result<Vec<_>>>()?;
        Self::new(radicals)
    }

    pub fn radicals(&self) -> &[Radical] {
        &self.radicals
    }

    pub fn len(&self) -> usize {
        self.radicals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.radicals.is_empty()
    }

    pub fn is_quadriliteral(&self) -> bool {
        self.radicals.len() == 4
    }

    /// 1-based radical access: `c(1)` is C1.
    pub fn c(&self, position: usize) -> Radical {
        self.radicals[position - 1]
    }
}

impl fmt::Display for Root {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in &self.radicals {
            write!(f, "{r}")?;
        }
        Ok(())
    }
}

impl FromStr for Root {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Structural class of a root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum VerbType {
    StrongTriradical,
    Geminate,
    LongVowel,
    OInitial,
    WeakFinal,
    Laryngeal,
    Quadriliteral,
    PrefixedQuadriliteral,
}

impl VerbType {
    pub const ALL: [VerbType; 8] = [
        VerbType::StrongTriradical,
        VerbType::Geminate,
        VerbType::LongVowel,
        VerbType::OInitial,
        VerbType::WeakFinal,
        VerbType::Laryngeal,
        VerbType::Quadriliteral,
        VerbType::PrefixedQuadriliteral,
    ];

    pub fn radical_count(self) -> usize {
        match self {
            VerbType::Quadriliteral | VerbType::PrefixedQuadriliteral => 4,
            VerbType::StrongTriradical
            | VerbType::Geminate
            | VerbType::LongVowel
            | VerbType::OInitial
            | VerbType::WeakFinal
            | VerbType::Laryngeal => 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            VerbType::StrongTriradical => "strong triradical",
            VerbType::Geminate => "geminate",
            VerbType::LongVowel => "long-vowel",
            VerbType::OInitial => "o-initial",
            VerbType::WeakFinal => "weak-final",
            VerbType::Laryngeal => "laryngeal",
            VerbType::Quadriliteral => "quadriliteral",
            VerbType::PrefixedQuadriliteral => "prefixed quadriliteral",
        }
    }
}

impl fmt::Display for VerbType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Derivational stem (voice/valence).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Stem {
    Basic,
    Passive,
    Causative,
    CausativePassive,
    Reciprocal,
}

impl Stem {
    pub const ALL: [Stem; 5] = [
        Stem::Basic,
        Stem::Passive,
        Stem::Causative,
        Stem::CausativePassive,
        Stem::Reciprocal,
    ];

    /// Traditional stem number, I through V.
    pub fn number(self) -> u8 {
        match self {
            Stem::Basic => 1,
            Stem::Passive => 2,
            Stem::Causative => 3,
            Stem::CausativePassive => 4,
            Stem::Reciprocal => 5,
        }
    }

    pub fn geez_name(self) -> &'static str {
        match self {
            Stem::Basic => "ቀዳማይ",
            Stem::Passive => "ተገብሮ",
            Stem::Causative => "አሳሳቢ",
            Stem::CausativePassive => "አስተሳሳቢ",
            Stem::Reciprocal => "ተሣሣቢ",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Stem::Basic => "basic",
            Stem::Passive => "passive",
            Stem::Causative => "causative",
            Stem::CausativePassive => "causative-passive",
            Stem::Reciprocal => "reciprocal",
        }
    }
}

impl fmt::Display for Stem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Stem {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Stem::ALL
            .into_iter()
            .find(|stem| stem.name() == wanted || stem.number().to_string() == wanted)
            .ok_or_else(|| Error::UnknownFeature(s.to_string()))
    }
}

/// Aspect/mood category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Tense {
    Perfective,
    Imperfective,
    Jussive,
    Imperative,
    Gerund,
}

impl Tense {
    pub const ALL: [Tense; 5] = [
        Tense::Perfective,
        Tense::Imperfective,
        Tense::Jussive,
        Tense::Imperative,
        Tense::Gerund,
    ];

    /// Imperfective and jussive carry a subject prefix; the rest mark the
    /// subject with suffixes only.
    pub fn takes_subject_prefix(self) -> bool {
        matches!(self, Tense::Imperfective | Tense::Jussive)
    }

    pub fn geez_name(self) -> &'static str {
        match self {
            Tense::Perfective => "ቀዳማይ አንቀጽ",
            Tense::Imperfective => "ካልኣይ አንቀጽ",
            Tense::Jussive => "ሣልሳይ አንቀጽ",
            Tense::Imperative => "ትእዛዝ",
            Tense::Gerund => "ቦዝ አንቀጽ",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Tense::Perfective => "perfective",
            Tense::Imperfective => "imperfective",
            Tense::Jussive => "jussive",
            Tense::Imperative => "imperative",
            Tense::Gerund => "gerund",
        }
    }
}

impl fmt::Display for Tense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Tense {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        Tense::ALL
            .into_iter()
            .find(|tense| tense.name() == wanted)
            .ok_or_else(|| Error::UnknownFeature(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Person {
    First,
    Second,
    Third,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Number {
    Singular,
    Plural,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Masculine,
    Feminine,
    Common,
}

/// Person/number/gender bundle of the grammatical subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SubjectAgreement {
    ThirdMascSg,
    ThirdFemSg,
    SecondMascSg,
    SecondFemSg,
    FirstSg,
    ThirdMascPl,
    ThirdFemPl,
    SecondMascPl,
    SecondFemPl,
    FirstPl,
}

impl SubjectAgreement {
    pub const ALL: [SubjectAgreement; 10] = [
        SubjectAgreement::ThirdMascSg,
        SubjectAgreement::ThirdFemSg,
        SubjectAgreement::SecondMascSg,
        SubjectAgreement::SecondFemSg,
        SubjectAgreement::FirstSg,
        SubjectAgreement::ThirdMascPl,
        SubjectAgreement::ThirdFemPl,
        SubjectAgreement::SecondMascPl,
        SubjectAgreement::SecondFemPl,
        SubjectAgreement::FirstPl,
    ];

    pub fn person(self) -> Person {
        use SubjectAgreement::*;
        match self {
            FirstSg | FirstPl => Person::First,
            SecondMascSg | SecondFemSg | SecondMascPl | SecondFemPl => Person::Second,
            ThirdMascSg | ThirdFemSg | ThirdMascPl | ThirdFemPl => Person::Third,
        }
    }

    pub fn number(self) -> Number {
        use SubjectAgreement::*;
        match self {
            ThirdMascSg | ThirdFemSg | SecondMascSg | SecondFemSg | FirstSg => Number::Singular,
            ThirdMascPl | ThirdFemPl | SecondMascPl | SecondFemPl | FirstPl => Number::Plural,
        }
    }

    pub fn gender(self) -> Gender {
        use SubjectAgreement::*;
        match self {
            ThirdMascSg | SecondMascSg | ThirdMascPl | SecondMascPl => Gender::Masculine,
            ThirdFemSg | SecondFemSg | ThirdFemPl | SecondFemPl => Gender::Feminine,
            FirstSg | FirstPl => Gender::Common,
        }
    }

    /// Short code such as "3ms" or "1p".
    pub fn code(self) -> &'static str {
        use SubjectAgreement::*;
        match self {
            ThirdMascSg => "3ms",
            ThirdFemSg => "3fs",
            SecondMascSg => "2ms",
            SecondFemSg => "2fs",
            FirstSg => "1s",
            ThirdMascPl => "3mp",
            ThirdFemPl => "3fp",
            SecondMascPl => "2mp",
            SecondFemPl => "2fp",
            FirstPl => "1p",
        }
    }
}

impl fmt::Display for SubjectAgreement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for SubjectAgreement {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        let wanted = match wanted.as_str() {
            "1cs" => "1s",
            "1cp" => "1p",
            other => other,
        };
        SubjectAgreement::ALL
            .into_iter()
            .find(|agr| agr.code() == wanted)
            .ok_or_else(|| Error::UnknownFeature(s.to_string()))
    }
}

/// Which part of the word a consonant slot belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlotKind {
    SubjectPrefix,
    StemAffix,
    /// Root radical, 1-based (C1..C4).
    Radical(u8),
}

impl fmt::Display for SlotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlotKind::SubjectPrefix => f.write_str("subj"),
            SlotKind::StemAffix => f.write_str("stem"),
            SlotKind::Radical(n) => write!(f, "C{n}"),
        }
    }
}

/// What happened to a slot between the template and the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlotNote {
    /// A subject vowel suffix merged into the final radical.
    Fused,
    /// Doubled in pronunciation, written once.
    Geminated,
    /// Identical C2/C3 written as one unit.
    Collapsed,
    /// Long vowel fixed regardless of tense.
    Pinned,
    /// Final glide replaced by the vowel on C2.
    GlideVowel,
    /// Not written at all.
    Dropped,
    /// Causative ʔa merged into the subject prefix.
    Absorbed,
    /// Order swapped for one the consonant can carry.
    Substituted,
}

/// One consonant slot of a generated word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotAssignment {
    pub kind: SlotKind,
    pub consonant: Radical,
    pub template_order: VowelOrder,
    /// `None` when the slot is not written.
    pub realized: Option<VowelOrder>,
    pub notes: Vec<SlotNote>,
}

impl SlotAssignment {
    pub fn is_written(&self) -> bool {
        self.realized.is_some()
    }
}

/// A generated surface word and its full breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConjugatedForm {
    pub surface: String,
    pub root: Root,
    pub verb_type: VerbType,
    pub stem: Stem,
    pub tense: Tense,
    pub agreement: SubjectAgreement,
    pub slots: Vec<SlotAssignment>,
    /// Characters written after the last consonant slot.
    pub suffix: String,
}

impl ConjugatedForm {
    /// Realized order per root position (C1..Cn), `None` when not written.
    pub fn root_orders(&self) -> Vec<Option<VowelOrder>> {
        self.slots
            .iter()
            .filter(|s| matches!(s.kind, SlotKind::Radical(_)))
            .map(|s| s.realized)
            .collect()
    }

    pub fn slot(&self, kind: SlotKind) -> Option<&SlotAssignment> {
        self.slots.iter().find(|s| s.kind == kind)
    }
}

/// One analysis hypothesis for a surface word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisCandidate {
    pub root: Root,
    pub verb_type: VerbType,
    pub stem: Stem,
    pub tense: Tense,
    pub agreement: SubjectAgreement,
    /// Specificity score; higher ranks first.
    pub score: u32,
    pub prefix: String,
    pub suffix: String,
    /// Orders read off the residual root syllables.
    pub observed_orders: Vec<VowelOrder>,
}

impl AnalysisCandidate {
    pub fn matches(&self, root: &Root, stem: Stem, tense: Tense, agreement: SubjectAgreement) -> bool {
        &self.root == root && self.stem == stem && self.tense == tense && self.agreement == agreement
    }
}
