//! The twelve Earthly Branches (지지 / 地支).
//!
//! Each branch carries an element, a polarity (yang when its index is even),
//! a zodiac animal, and a two-hour window of the day starting at 23:00 for Zi.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::element::{Element, Polarity};
use crate::error::SajuError;

/// One of the twelve Earthly Branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum Branch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

/// All twelve branches in cycle order (index 0 = Zi).
pub const ALL_BRANCHES: [Branch; 12] = [
    Branch::Zi,
    Branch::Chou,
    Branch::Yin,
    Branch::Mao,
    Branch::Chen,
    Branch::Si,
    Branch::Wu,
    Branch::Wei,
    Branch::Shen,
    Branch::You,
    Branch::Xu,
    Branch::Hai,
];

const BRANCH_NAMES: [&str; 12] = [
    "Zi", "Chou", "Yin", "Mao", "Chen", "Si", "Wu", "Wei", "Shen", "You", "Xu", "Hai",
];
const BRANCH_HANZI: [&str; 12] = [
    "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
];
const BRANCH_KOREAN: [&str; 12] = [
    "자", "축", "인", "묘", "진", "사", "오", "미", "신", "유", "술", "해",
];
const ANIMAL_NAMES: [&str; 12] = [
    "Rat", "Ox", "Tiger", "Rabbit", "Dragon", "Snake", "Horse", "Goat", "Monkey", "Rooster",
    "Dog", "Pig",
];
const ANIMAL_KOREAN: [&str; 12] = [
    "쥐", "소", "호랑이", "토끼", "용", "뱀", "말", "양", "원숭이", "닭", "개", "돼지",
];

impl Branch {
    /// 0-based index (Zi=0 .. Hai=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Zi => 0,
            Self::Chou => 1,
            Self::Yin => 2,
            Self::Mao => 3,
            Self::Chen => 4,
            Self::Si => 5,
            Self::Wu => 6,
            Self::Wei => 7,
            Self::Shen => 8,
            Self::You => 9,
            Self::Xu => 10,
            Self::Hai => 11,
        }
    }

    /// Branch from a 0-based index. Returns None for index >= 12.
    pub const fn from_index(i: u8) -> Option<Self> {
        if i < 12 {
            Some(ALL_BRANCHES[i as usize])
        } else {
            None
        }
    }

    /// Branch from any integer, wrapping into the 12-cycle.
    pub const fn wrapping(i: i64) -> Self {
        ALL_BRANCHES[i.rem_euclid(12) as usize]
    }

    /// Pinyin name.
    pub const fn name(self) -> &'static str {
        BRANCH_NAMES[self.index() as usize]
    }

    pub const fn hanzi(self) -> &'static str {
        BRANCH_HANZI[self.index() as usize]
    }

    /// Korean reading (자, 축, ...).
    pub const fn korean(self) -> &'static str {
        BRANCH_KOREAN[self.index() as usize]
    }

    /// English zodiac animal.
    pub const fn animal(self) -> &'static str {
        ANIMAL_NAMES[self.index() as usize]
    }

    /// Korean zodiac animal (띠).
    pub const fn animal_korean(self) -> &'static str {
        ANIMAL_KOREAN[self.index() as usize]
    }

    pub const fn element(self) -> Element {
        match self {
            Self::Yin | Self::Mao => Element::Wood,
            Self::Si | Self::Wu => Element::Fire,
            Self::Chen | Self::Xu | Self::Chou | Self::Wei => Element::Earth,
            Self::Shen | Self::You => Element::Metal,
            Self::Hai | Self::Zi => Element::Water,
        }
    }

    pub const fn polarity(self) -> Polarity {
        Polarity::from_parity(self.index())
    }

    /// Branch `n` steps later in the cycle (negative steps go backwards).
    pub const fn offset(self, n: i64) -> Self {
        Self::wrapping(self.index() as i64 + n)
    }

    /// The branch six positions away.
    pub const fn opposite(self) -> Self {
        self.offset(6)
    }

    /// Local hour window as `(start_hour, end_hour)`, end exclusive.
    ///
    /// Zi spans 23:00–01:00, Chou 01:00–03:00, and so on.
    pub const fn hour_window(self) -> (u32, u32) {
        let start = (23 + 2 * self.index() as u32) % 24;
        (start, (start + 2) % 24)
    }

    /// Branch of the two-hour bucket containing `hour` (0..=23).
    ///
    /// Bucket 0 (Zi) covers 23:00–00:59.
    pub const fn from_hour(hour: u32) -> Self {
        ALL_BRANCHES[(((hour + 1) / 2) % 12) as usize]
    }
}

impl std::fmt::Display for Branch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.hanzi())
    }
}

impl FromStr for Branch {
    type Err = SajuError;

    /// Accepts pinyin (case-insensitive), Hanzi, Korean, or English animal.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        ALL_BRANCHES
            .iter()
            .copied()
            .find(|b| {
                b.name().eq_ignore_ascii_case(t)
                    || b.hanzi() == t
                    || b.korean() == t
                    || b.animal().eq_ignore_ascii_case(t)
            })
            .ok_or_else(|| SajuError::UnknownBranch(s.to_string()))
    }
}
