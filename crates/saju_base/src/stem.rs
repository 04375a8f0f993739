//! The ten Heavenly Stems (천간 / 天干).
//!
//! Stem `i` carries element `i / 2` (Wood, Fire, Earth, Metal, Water) and is
//! yang when `i` is even.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::element::{Element, Polarity};
use crate::error::SajuError;

/// One of the ten Heavenly Stems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum Stem {
    Jia,
    Yi,
    Bing,
    Ding,
    Wu,
    Ji,
    Geng,
    Xin,
    Ren,
    Gui,
}

/// All ten stems in cycle order (index 0 = Jia).
pub const ALL_STEMS: [Stem; 10] = [
    Stem::Jia,
    Stem::Yi,
    Stem::Bing,
    Stem::Ding,
    Stem::Wu,
    Stem::Ji,
    Stem::Geng,
    Stem::Xin,
    Stem::Ren,
    Stem::Gui,
];

const STEM_HANZI: [&str; 10] = ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];
const STEM_KOREAN: [&str; 10] = ["갑", "을", "병", "정", "무", "기", "경", "신", "임", "계"];
const STEM_NAMES: [&str; 10] = [
    "Jia", "Yi", "Bing", "Ding", "Wu", "Ji", "Geng", "Xin", "Ren", "Gui",
];

impl Stem {
    /// 0-based index (Jia=0 .. Gui=9).
    pub const fn index(self) -> u8 {
        match self {
            Self::Jia => 0,
            Self::Yi => 1,
            Self::Bing => 2,
            Self::Ding => 3,
            Self::Wu => 4,
            Self::Ji => 5,
            Self::Geng => 6,
            Self::Xin => 7,
            Self::Ren => 8,
            Self::Gui => 9,
        }
    }

    /// Stem from a 0-based index. Returns None for index >= 10.
    pub const fn from_index(i: u8) -> Option<Self> {
        if i < 10 {
            Some(ALL_STEMS[i as usize])
        } else {
            None
        }
    }

    /// Stem from any integer, wrapping into the 10-cycle.
    pub const fn wrapping(i: i64) -> Self {
        ALL_STEMS[i.rem_euclid(10) as usize]
    }

    /// Pinyin name.
    pub const fn name(self) -> &'static str {
        STEM_NAMES[self.index() as usize]
    }

    pub const fn hanzi(self) -> &'static str {
        STEM_HANZI[self.index() as usize]
    }

    /// Korean reading (갑, 을, ...).
    pub const fn korean(self) -> &'static str {
        STEM_KOREAN[self.index() as usize]
    }

    pub const fn element(self) -> Element {
        Element::from_index(self.index() / 2)
    }

    pub const fn polarity(self) -> Polarity {
        Polarity::from_parity(self.index())
    }

    /// Stem `n` steps later in the cycle (negative steps go backwards).
    pub const fn offset(self, n: i64) -> Self {
        Self::wrapping(self.index() as i64 + n)
    }
}

impl std::fmt::Display for Stem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.hanzi())
    }
}

impl FromStr for Stem {
    type Err = SajuError;

    /// Accepts pinyin (case-insensitive), Hanzi, or Korean.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        ALL_STEMS
            .iter()
            .copied()
            .find(|st| {
                st.name().eq_ignore_ascii_case(t) || st.hanzi() == t || st.korean() == t
            })
            .ok_or_else(|| SajuError::UnknownStem(s.to_string()))
    }
}
