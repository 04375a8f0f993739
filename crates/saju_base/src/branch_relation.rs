//! Branch relations: six combines, six clashes, harms, resentments,
//! punishments, three-harmony trines and directional groups, plus
//! chart-wide detection.

use serde::{Deserialize, Serialize};

use crate::branch::Branch;
use crate::element::Element;
use crate::pillar::{FourPillars, Position};

// ---------------------------------------------------------------------------
// Pair tables
// ---------------------------------------------------------------------------

/// Element produced by a six-combine (육합) pair, or None if the pair does not combine.
///
/// 子丑 Earth, 寅亥 Wood, 卯戌 Fire, 辰酉 Metal, 巳申 Water, 午未 Fire.
pub const fn combine_element(a: Branch, b: Branch) -> Option<Element> {
    let (x, y) = (a.index(), b.index());
    if (x + y) % 12 != 1 {
        return None;
    }
    let low = if x < y { x } else { y };
    match low {
        0 => Some(Element::Earth),
        2 => Some(Element::Wood),
        3 => Some(Element::Fire),
        4 => Some(Element::Metal),
        5 => Some(Element::Water),
        _ => Some(Element::Fire),
    }
}

/// Six-combine (육합) test. Symmetric; identical branches never combine.
pub const fn is_combine(a: Branch, b: Branch) -> bool {
    combine_element(a, b).is_some()
}

/// Clash (충) test: branches six positions apart.
pub const fn is_clash(a: Branch, b: Branch) -> bool {
    (a.index() + 12 - b.index()) % 12 == 6
}

/// Harm (해) test: 子未, 丑午, 寅巳, 卯辰, 申亥, 酉戌.
pub const fn is_harm(a: Branch, b: Branch) -> bool {
    (a.index() + b.index()) % 12 == 7
}

/// Resentment (원진) partner of a branch.
///
/// 子未, 丑午, 寅酉, 卯申, 辰亥, 巳戌.
pub const fn resentment_partner(b: Branch) -> Branch {
    match b {
        Branch::Zi => Branch::Wei,
        Branch::Chou => Branch::Wu,
        Branch::Yin => Branch::You,
        Branch::Mao => Branch::Shen,
        Branch::Chen => Branch::Hai,
        Branch::Si => Branch::Xu,
        Branch::Wu => Branch::Chou,
        Branch::Wei => Branch::Zi,
        Branch::Shen => Branch::Mao,
        Branch::You => Branch::Yin,
        Branch::Xu => Branch::Si,
        Branch::Hai => Branch::Chen,
    }
}

/// Resentment (원진) test.
pub const fn is_resentment(a: Branch, b: Branch) -> bool {
    resentment_partner(a).index() == b.index()
}

// ---------------------------------------------------------------------------
// Group tables
// ---------------------------------------------------------------------------

/// Element of the three-harmony trine (삼합) a branch belongs to.
///
/// 申子辰 Water, 亥卯未 Wood, 寅午戌 Fire, 巳酉丑 Metal.
pub const fn trine_element(b: Branch) -> Element {
    match b.index() % 4 {
        0 => Element::Water,
        1 => Element::Metal,
        2 => Element::Fire,
        _ => Element::Wood,
    }
}

/// The three branches of a trine, in cycle order.
pub const fn trine_members(b: Branch) -> [Branch; 3] {
    let base = (b.index() % 4) as i64;
    [
        Branch::wrapping(base),
        Branch::wrapping(base + 4),
        Branch::wrapping(base + 8),
    ]
}

/// Two distinct branches of the same trine.
pub const fn is_trine_pair(a: Branch, b: Branch) -> bool {
    a.index() != b.index() && a.index() % 4 == b.index() % 4
}

/// Seasonal direction of a branch (방합).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// 寅卯辰, Wood.
    East,
    /// 巳午未, Fire.
    South,
    /// 申酉戌, Metal.
    West,
    /// 亥子丑, Water.
    North,
}

impl Direction {
    pub const fn of(b: Branch) -> Self {
        match ((b.index() + 10) % 12) / 3 {
            0 => Self::East,
            1 => Self::South,
            2 => Self::West,
            _ => Self::North,
        }
    }

    pub const fn element(self) -> Element {
        match self {
            Self::East => Element::Wood,
            Self::South => Element::Fire,
            Self::West => Element::Metal,
            Self::North => Element::Water,
        }
    }

    pub const fn members(self) -> [Branch; 3] {
        match self {
            Self::East => [Branch::Yin, Branch::Mao, Branch::Chen],
            Self::South => [Branch::Si, Branch::Wu, Branch::Wei],
            Self::West => [Branch::Shen, Branch::You, Branch::Xu],
            Self::North => [Branch::Hai, Branch::Zi, Branch::Chou],
        }
    }
}

/// Two distinct branches of the same directional group.
pub fn is_direction_pair(a: Branch, b: Branch) -> bool {
    a != b && Direction::of(a) == Direction::of(b)
}

// ---------------------------------------------------------------------------
// Punishments
// ---------------------------------------------------------------------------

/// Punishment (형 / 刑) groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PunishmentKind {
    /// 寅巳申, punishment of ingratitude (무은지형).
    Ungrateful,
    /// 丑戌未, punishment of leaning on power (지세지형).
    Power,
    /// 子卯, punishment of rudeness (무례지형).
    Rude,
    /// 辰, 午, 酉 or 亥 appearing twice (자형).
    SelfPunishment,
}

/// All punishment kinds in detection order.
pub const ALL_PUNISHMENTS: [PunishmentKind; 4] = [
    PunishmentKind::Ungrateful,
    PunishmentKind::Power,
    PunishmentKind::SelfPunishment,
    PunishmentKind::Rude,
];

impl PunishmentKind {
    pub const fn members(self) -> &'static [Branch] {
        match self {
            Self::Ungrateful => &[Branch::Yin, Branch::Si, Branch::Shen],
            Self::Power => &[Branch::Chou, Branch::Xu, Branch::Wei],
            Self::Rude => &[Branch::Zi, Branch::Mao],
            Self::SelfPunishment => &[Branch::Chen, Branch::Wu, Branch::You, Branch::Hai],
        }
    }

    pub const fn korean(self) -> &'static str {
        match self {
            Self::Ungrateful => "무은지형",
            Self::Power => "지세지형",
            Self::Rude => "무례지형",
            Self::SelfPunishment => "자형",
        }
    }

    pub const fn hanzi(self) -> &'static str {
        match self {
            Self::Ungrateful => "無恩之刑",
            Self::Power => "持勢之刑",
            Self::Rude => "無禮之刑",
            Self::SelfPunishment => "自刑",
        }
    }
}

/// Branches that punish themselves when doubled (辰午酉亥).
pub const fn is_self_punishing(b: Branch) -> bool {
    matches!(b, Branch::Chen | Branch::Wu | Branch::You | Branch::Hai)
}

/// Punishment between two branches, if any.
///
/// Two distinct members of 寅巳申 or 丑戌未, the 子卯 pair, or a
/// self-punishing branch paired with itself.
pub const fn punishment(a: Branch, b: Branch) -> Option<PunishmentKind> {
    use Branch::*;
    match (a, b) {
        (Yin | Si | Shen, Yin | Si | Shen) if a.index() != b.index() => {
            Some(PunishmentKind::Ungrateful)
        }
        (Chou | Xu | Wei, Chou | Xu | Wei) if a.index() != b.index() => Some(PunishmentKind::Power),
        (Zi, Mao) | (Mao, Zi) => Some(PunishmentKind::Rude),
        _ if a.index() == b.index() && is_self_punishing(a) => Some(PunishmentKind::SelfPunishment),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Chart detection
// ---------------------------------------------------------------------------

/// Kind of pairwise branch relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BranchPairKind {
    Combine,
    Clash,
    Harm,
    Resentment,
}

impl BranchPairKind {
    pub const fn korean(self) -> &'static str {
        match self {
            Self::Combine => "육합",
            Self::Clash => "충",
            Self::Harm => "해",
            Self::Resentment => "원진",
        }
    }
}

/// A relation found between the branches at two chart positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchFinding {
    pub kind: BranchPairKind,
    pub first: Position,
    pub second: Position,
    pub branches: (Branch, Branch),
    /// Resulting element, for combines.
    pub element: Option<Element>,
}

/// A complete trine or directional group formed by three chart positions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupFinding {
    pub element: Element,
    /// Directional group, or None for a trine.
    pub direction: Option<Direction>,
    pub positions: Vec<Position>,
}

/// A punishment formed by branches at two or more chart positions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PunishmentFinding {
    pub kind: PunishmentKind,
    /// Distinct member branches present, in table order.
    pub branches: Vec<Branch>,
    /// Every position holding one of `branches`, in chart order.
    pub positions: Vec<Position>,
}

/// All branch relations among the present positions of a chart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchRelationSet {
    pub combines: Vec<BranchFinding>,
    pub clashes: Vec<BranchFinding>,
    pub harms: Vec<BranchFinding>,
    pub resentments: Vec<BranchFinding>,
    /// Partial or complete 寅巳申 / 丑戌未 groups, doubled self-punishing
    /// branches and the 子卯 pair.
    pub punishments: Vec<PunishmentFinding>,
    /// Complete three-harmony trines.
    pub trines: Vec<GroupFinding>,
    /// Complete directional groups.
    pub directions: Vec<GroupFinding>,
}

impl BranchRelationSet {
    pub fn is_empty(&self) -> bool {
        self.combines.is_empty()
            && self.clashes.is_empty()
            && self.harms.is_empty()
            && self.resentments.is_empty()
            && self.punishments.is_empty()
            && self.trines.is_empty()
            && self.directions.is_empty()
    }
}

/// Detect relations across every unordered pair of present positions.
pub fn detect_branch_relations(pillars: &FourPillars) -> BranchRelationSet {
    let present: Vec<(Position, Branch)> = pillars.iter().map(|(p, pl)| (p, pl.branch())).collect();
    let mut set = BranchRelationSet::default();

    for (i, &(pa, a)) in present.iter().enumerate() {
        for &(pb, b) in &present[i + 1..] {
            if a == b {
                continue;
            }
            let finding = |kind, element| BranchFinding {
                kind,
                first: pa,
                second: pb,
                branches: (a, b),
                element,
            };
            if let Some(e) = combine_element(a, b) {
                set.combines.push(finding(BranchPairKind::Combine, Some(e)));
            }
            if is_clash(a, b) {
                set.clashes.push(finding(BranchPairKind::Clash, None));
            }
            if is_harm(a, b) {
                set.harms.push(finding(BranchPairKind::Harm, None));
            }
            if is_resentment(a, b) {
                set.resentments.push(finding(BranchPairKind::Resentment, None));
            }
        }
    }

    set.punishments = detect_punishments(&present);

    for members in [0, 1, 2, 3].map(|i| trine_members(Branch::wrapping(i))) {
        if let Some(positions) = group_positions(&present, &members) {
            set.trines.push(GroupFinding {
                element: trine_element(members[0]),
                direction: None,
                positions,
            });
        }
    }
    for dir in [Direction::East, Direction::South, Direction::West, Direction::North] {
        if let Some(positions) = group_positions(&present, &dir.members()) {
            set.directions.push(GroupFinding {
                element: dir.element(),
                direction: Some(dir),
                positions,
            });
        }
    }

    set
}

/// Punishments among the present branches.
///
/// A three-branch group counts once two of its members are present; a
/// self-punishing branch counts once it appears at two positions.
fn detect_punishments(present: &[(Position, Branch)]) -> Vec<PunishmentFinding> {
    let mut found = Vec::new();
    for kind in ALL_PUNISHMENTS {
        let members = kind.members();
        let groups: Vec<Vec<Branch>> = match kind {
            PunishmentKind::SelfPunishment => members
                .iter()
                .filter(|&&m| present.iter().filter(|(_, b)| *b == m).count() >= 2)
                .map(|&m| vec![m])
                .collect(),
            _ => {
                let hits: Vec<Branch> = members
                    .iter()
                    .copied()
                    .filter(|&m| present.iter().any(|(_, b)| *b == m))
                    .collect();
                let needed = if kind == PunishmentKind::Rude { members.len() } else { 2 };
                if hits.len() >= needed { vec![hits] } else { Vec::new() }
            }
        };
        for branches in groups {
            let positions = present
                .iter()
                .filter(|(_, b)| branches.contains(b))
                .map(|(p, _)| *p)
                .collect();
            found.push(PunishmentFinding {
                kind,
                branches,
                positions,
            });
        }
    }
    found
}

/// Positions holding every member of `group`, or None if any member is absent.
fn group_positions(present: &[(Position, Branch)], group: &[Branch; 3]) -> Option<Vec<Position>> {
    let mut positions = Vec::new();
    for member in group {
        let first = present.iter().find(|(_, b)| b == member)?;
        positions.push(first.0);
    }
    positions.sort();
    Some(positions)
}
