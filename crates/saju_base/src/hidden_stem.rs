//! Hidden stems (지장간 / 地藏干): the stems stored inside each branch.
//!
//! Every branch holds a main stem (정기) of its own element; most also hold
//! a middle stem (중기) and a residue stem (여기) carried over from the
//! neighbouring season. 子, 卯 and 酉 hold no middle stem.

use serde::{Deserialize, Serialize};

use crate::branch::Branch;
use crate::element::Element;
use crate::pillar::{FourPillars, Position};
use crate::stem::Stem;

/// The stems hidden in one branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HiddenStems {
    pub main: Stem,
    pub middle: Option<Stem>,
    pub residue: Option<Stem>,
}

impl HiddenStems {
    /// Present stems, main first.
    pub fn iter(&self) -> impl Iterator<Item = Stem> + '_ {
        std::iter::once(self.main).chain(self.middle).chain(self.residue)
    }

    /// Weight in tenths that this branch lends to `element`: 10 for the
    /// main stem, 5 for the middle stem and 3 for the residue.
    pub fn weight_for(&self, element: Element) -> u32 {
        let mut weight = 0;
        if self.main.element() == element {
            weight += 10;
        }
        if self.middle.is_some_and(|s| s.element() == element) {
            weight += 5;
        }
        if self.residue.is_some_and(|s| s.element() == element) {
            weight += 3;
        }
        weight
    }
}

/// Hidden stem table.
pub const fn hidden_stems(branch: Branch) -> HiddenStems {
    use Branch as B;
    use Stem as S;
    let (main, middle, residue) = match branch {
        B::Zi => (S::Gui, None, Some(S::Ren)),
        B::Chou => (S::Ji, Some(S::Xin), Some(S::Gui)),
        B::Yin => (S::Jia, Some(S::Bing), Some(S::Wu)),
        B::Mao => (S::Yi, None, Some(S::Jia)),
        B::Chen => (S::Wu, Some(S::Gui), Some(S::Yi)),
        B::Si => (S::Bing, Some(S::Geng), Some(S::Wu)),
        B::Wu => (S::Ding, Some(S::Ji), Some(S::Bing)),
        B::Wei => (S::Ji, Some(S::Yi), Some(S::Ding)),
        B::Shen => (S::Geng, Some(S::Ren), Some(S::Wu)),
        B::You => (S::Xin, None, Some(S::Geng)),
        B::Xu => (S::Wu, Some(S::Ding), Some(S::Xin)),
        B::Hai => (S::Ren, Some(S::Jia), Some(S::Wu)),
    };
    HiddenStems {
        main,
        middle,
        residue,
    }
}

/// Hidden stems of every present chart branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartHiddenStems {
    pub year: HiddenStems,
    pub month: HiddenStems,
    pub day: HiddenStems,
    pub hour: Option<HiddenStems>,
}

impl ChartHiddenStems {
    pub fn of(pillars: &FourPillars) -> Self {
        Self {
            year: hidden_stems(pillars.year.branch()),
            month: hidden_stems(pillars.month.branch()),
            day: hidden_stems(pillars.day.branch()),
            hour: pillars.hour.map(|h| hidden_stems(h.branch())),
        }
    }

    pub fn get(&self, position: Position) -> Option<HiddenStems> {
        match position {
            Position::Year => Some(self.year),
            Position::Month => Some(self.month),
            Position::Day => Some(self.day),
            Position::Hour => self.hour,
        }
    }

    /// Summed [`HiddenStems::weight_for`] over all present branches.
    pub fn weight_for(&self, element: Element) -> u32 {
        [Some(self.year), Some(self.month), Some(self.day), self.hour]
            .iter()
            .flatten()
            .map(|h| h.weight_for(element))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branch::ALL_BRANCHES;
    use crate::date::{CivilDate, LocalTime};
    use crate::pillar::{ChartConfig, four_pillars};

    #[test]
    fn main_stem_shares_branch_element() {
        for b in ALL_BRANCHES {
            assert_eq!(hidden_stems(b).main.element(), b.element(), "{b}");
        }
    }

    #[test]
    fn cardinal_branches_have_no_middle() {
        let without: Vec<Branch> = ALL_BRANCHES
            .into_iter()
            .filter(|&b| hidden_stems(b).middle.is_none())
            .collect();
        assert_eq!(without, vec![Branch::Zi, Branch::Mao, Branch::You]);
        for b in ALL_BRANCHES {
            assert!(hidden_stems(b).residue.is_some());
        }
    }

    #[test]
    fn known_entries() {
        let yin = hidden_stems(Branch::Yin);
        assert_eq!(yin.iter().collect::<Vec<_>>(), vec![Stem::Jia, Stem::Bing, Stem::Wu]);
        let hai = hidden_stems(Branch::Hai);
        assert_eq!((hai.main, hai.middle), (Stem::Ren, Some(Stem::Jia)));
        assert_eq!(hidden_stems(Branch::Zi).iter().count(), 2);
    }

    #[test]
    fn weights() {
        // 丑: 己 earth main, 辛 metal middle, 癸 water residue
        let chou = hidden_stems(Branch::Chou);
        assert_eq!(chou.weight_for(Element::Earth), 10);
        assert_eq!(chou.weight_for(Element::Metal), 5);
        assert_eq!(chou.weight_for(Element::Water), 3);
        assert_eq!(chou.weight_for(Element::Wood), 0);
    }

    #[test]
    fn chart_hidden_stems_follow_positions() {
        // 庚午 辛巳 庚辰 癸未
        let fp = four_pillars(
            &CivilDate::new(1990, 5, 15).unwrap(),
            Some(LocalTime::new(14, 30).unwrap()),
            &ChartConfig::default(),
        );
        let h = ChartHiddenStems::of(&fp);
        assert_eq!(h.year.main, Stem::Ding);
        assert_eq!(h.month.main, Stem::Bing);
        assert_eq!(h.day.main, Stem::Wu);
        assert_eq!(h.get(Position::Hour).map(|s| s.main), Some(Stem::Ji));
        // metal: 巳 middle 庚 (5) + 辰 none + 午 none + 未 none
        assert_eq!(h.weight_for(Element::Metal), 5);
        // earth: 午 middle 己 5, 巳 residue 戊 3, 辰 main 戊 10, 未 main 己 10
        assert_eq!(h.weight_for(Element::Earth), 28);
    }
}
