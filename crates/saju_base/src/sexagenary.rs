//! The sexagenary (60-term) stem-branch cycle (육십갑자 / 六十甲子).
//!
//! Only stem/branch combinations of equal parity exist, giving 60 of the 120
//! possible pairs. Cycle index `i` pairs stem `i mod 10` with branch
//! `i mod 12`; index 0 is Jia-Zi (甲子).

use serde::{Deserialize, Serialize};

use crate::branch::Branch;
use crate::element::Polarity;
use crate::error::SajuError;
use crate::stem::Stem;

/// A valid (stem, branch) combination of the 60-cycle.
///
/// Construction always goes through the parity check, so every value of
/// this type is one of the 60 cycle terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPair")]
pub struct SexagenaryPair {
    stem: Stem,
    branch: Branch,
}

/// A sexagenary pair placed at a chart position.
pub type Pillar = SexagenaryPair;

#[derive(Deserialize)]
struct RawPair {
    stem: Stem,
    branch: Branch,
}

impl TryFrom<RawPair> for SexagenaryPair {
    type Error = SajuError;

    fn try_from(raw: RawPair) -> Result<Self, Self::Error> {
        Self::new(raw.stem, raw.branch).ok_or(SajuError::Parse("stem/branch parity mismatch"))
    }
}

impl SexagenaryPair {
    /// Pair a stem and branch. Returns None when their polarities differ.
    pub const fn new(stem: Stem, branch: Branch) -> Option<Self> {
        if stem.index() % 2 == branch.index() % 2 {
            Some(Self { stem, branch })
        } else {
            None
        }
    }

    /// Term at a cycle index (wraps modulo 60, negative values allowed).
    pub const fn from_index(i: i64) -> Self {
        let i = i.rem_euclid(60);
        Self {
            stem: Stem::wrapping(i),
            branch: Branch::wrapping(i),
        }
    }

    /// 0-based cycle index (Jia-Zi=0 .. Gui-Hai=59).
    pub const fn index(self) -> u8 {
        let s = self.stem.index() as i32;
        let b = self.branch.index() as i32;
        (6 * s - 5 * b).rem_euclid(60) as u8
    }

    pub const fn stem(self) -> Stem {
        self.stem
    }

    pub const fn branch(self) -> Branch {
        self.branch
    }

    pub const fn polarity(self) -> Polarity {
        self.stem.polarity()
    }

    /// Term `n` steps along the cycle (negative steps go backwards).
    pub const fn offset(self, n: i64) -> Self {
        Self::from_index(self.index() as i64 + n)
    }

    /// Hanzi form, e.g. "甲子".
    pub fn hanzi(self) -> String {
        format!("{}{}", self.stem.hanzi(), self.branch.hanzi())
    }

    /// Korean reading, e.g. "갑자".
    pub fn korean(self) -> String {
        format!("{}{}", self.stem.korean(), self.branch.korean())
    }

    /// Pinyin form, e.g. "Jia-Zi".
    pub fn name(self) -> String {
        format!("{}-{}", self.stem.name(), self.branch.name())
    }

    /// The two branches left unpaired by this term's ten-day week (xun void).
    pub const fn void_branches(self) -> [Branch; 2] {
        let start = (self.branch.index() as i64) - (self.stem.index() as i64);
        [Branch::wrapping(start + 10), Branch::wrapping(start + 11)]
    }
}

impl std::fmt::Display for SexagenaryPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem.hanzi(), self.branch.hanzi())
    }
}

/// All 60 terms in cycle order.
pub fn all_pairs() -> impl Iterator<Item = SexagenaryPair> {
    (0..60).map(SexagenaryPair::from_index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branch::ALL_BRANCHES;
    use crate::stem::ALL_STEMS;

    #[test]
    fn exactly_sixty_valid_pairs() {
        let valid = ALL_STEMS
            .iter()
            .flat_map(|&s| ALL_BRANCHES.iter().map(move |&b| (s, b)))
            .filter(|&(s, b)| SexagenaryPair::new(s, b).is_some())
            .count();
        assert_eq!(valid, 60);
    }

    #[test]
    fn index_roundtrip() {
        for i in 0..60 {
            let p = SexagenaryPair::from_index(i);
            assert_eq!(p.index() as i64, i);
            assert_eq!(SexagenaryPair::new(p.stem(), p.branch()), Some(p));
        }
    }

    #[test]
    fn index_zero_is_jia_zi() {
        let p = SexagenaryPair::from_index(0);
        assert_eq!(p.stem(), Stem::Jia);
        assert_eq!(p.branch(), Branch::Zi);
        assert_eq!(p.hanzi(), "甲子");
        assert_eq!(p.korean(), "갑자");
    }

    #[test]
    fn last_is_gui_hai() {
        let p = SexagenaryPair::from_index(59);
        assert_eq!(p.hanzi(), "癸亥");
        assert_eq!(p.offset(1), SexagenaryPair::from_index(0));
        assert_eq!(SexagenaryPair::from_index(-1), p);
    }

    #[test]
    fn mismatched_parity_rejected() {
        assert_eq!(SexagenaryPair::new(Stem::Jia, Branch::Chou), None);
    }

    #[test]
    fn void_of_jia_zi_week() {
        // 甲子 week runs 甲子..癸酉, leaving 戌 and 亥
        let p = SexagenaryPair::from_index(0);
        assert_eq!(p.void_branches(), [Branch::Xu, Branch::Hai]);
        // 甲戌 week leaves 申 and 酉
        let p = SexagenaryPair::from_index(10);
        assert_eq!(p.void_branches(), [Branch::Shen, Branch::You]);
        // every member of a week shares its void
        for i in 0..10 {
            assert_eq!(
                SexagenaryPair::from_index(i).void_branches(),
                [Branch::Xu, Branch::Hai]
            );
        }
    }

    #[test]
    fn serde_rejects_invalid_pair() {
        let ok: Result<SexagenaryPair, _> =
            serde_json::from_str(r#"{"stem":"Geng","branch":"Chen"}"#);
        assert!(ok.is_ok());
        let bad: Result<SexagenaryPair, _> =
            serde_json::from_str(r#"{"stem":"Geng","branch":"Mao"}"#);
        assert!(bad.is_err());
    }
}
