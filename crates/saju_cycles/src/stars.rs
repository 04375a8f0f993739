//! Auspicious and inauspicious stars (신살).
//!
//! Each star is a table lookup keyed on the day stem, the year, month or
//! day branch, or the day pillar. The lookup result is searched for among
//! the chart's present pillars.

use saju_base::{Branch as B, FourPillars, Position, SexagenaryPair, Stem as S};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Star identity
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StarKind {
    /// 길신
    Auspicious,
    /// 흉신
    Inauspicious,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Star {
    HeavenlyNoble,
    HeavenlyVirtue,
    MonthlyVirtue,
    LiteraryStar,
    AcademicHall,
    GoldenCarriage,
    HeavenlyOfficial,
    PeachBlossom,
    TravellingHorse,
    Canopy,
    WhiteTiger,
    GhostGate,
    GoatBlade,
    Void,
    Resentment,
    KuiGang,
}

/// All stars in report order: auspicious first.
pub const ALL_STARS: [Star; 16] = [
    Star::HeavenlyNoble,
    Star::HeavenlyVirtue,
    Star::MonthlyVirtue,
    Star::LiteraryStar,
    Star::AcademicHall,
    Star::GoldenCarriage,
    Star::HeavenlyOfficial,
    Star::PeachBlossom,
    Star::TravellingHorse,
    Star::Canopy,
    Star::WhiteTiger,
    Star::GhostGate,
    Star::GoatBlade,
    Star::Void,
    Star::Resentment,
    Star::KuiGang,
];

impl Star {
    pub const fn kind(self) -> StarKind {
        match self {
            Self::HeavenlyNoble
            | Self::HeavenlyVirtue
            | Self::MonthlyVirtue
            | Self::LiteraryStar
            | Self::AcademicHall
            | Self::GoldenCarriage
            | Self::HeavenlyOfficial => StarKind::Auspicious,
            _ => StarKind::Inauspicious,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::HeavenlyNoble => "Heavenly Noble",
            Self::HeavenlyVirtue => "Heavenly Virtue",
            Self::MonthlyVirtue => "Monthly Virtue",
            Self::LiteraryStar => "Literary Star",
            Self::AcademicHall => "Academic Hall",
            Self::GoldenCarriage => "Golden Carriage",
            Self::HeavenlyOfficial => "Heavenly Official",
            Self::PeachBlossom => "Peach Blossom",
            Self::TravellingHorse => "Travelling Horse",
            Self::Canopy => "Canopy",
            Self::WhiteTiger => "White Tiger",
            Self::GhostGate => "Ghost Gate",
            Self::GoatBlade => "Goat Blade",
            Self::Void => "Void",
            Self::Resentment => "Resentment",
            Self::KuiGang => "Kui Gang",
        }
    }

    pub const fn korean(self) -> &'static str {
        match self {
            Self::HeavenlyNoble => "천을귀인",
            Self::HeavenlyVirtue => "천덕귀인",
            Self::MonthlyVirtue => "월덕귀인",
            Self::LiteraryStar => "문창귀인",
            Self::AcademicHall => "학당귀인",
            Self::GoldenCarriage => "금여록",
            Self::HeavenlyOfficial => "천관귀인",
            Self::PeachBlossom => "도화살",
            Self::TravellingHorse => "역마살",
            Self::Canopy => "화개살",
            Self::WhiteTiger => "백호대살",
            Self::GhostGate => "귀문관살",
            Self::GoatBlade => "양인살",
            Self::Void => "공망",
            Self::Resentment => "원진살",
            Self::KuiGang => "괴강살",
        }
    }

    pub const fn hanzi(self) -> &'static str {
        match self {
            Self::HeavenlyNoble => "天乙貴人",
            Self::HeavenlyVirtue => "天德貴人",
            Self::MonthlyVirtue => "月德貴人",
            Self::LiteraryStar => "文昌貴人",
            Self::AcademicHall => "學堂貴人",
            Self::GoldenCarriage => "金輿祿",
            Self::HeavenlyOfficial => "天官貴人",
            Self::PeachBlossom => "桃花殺",
            Self::TravellingHorse => "驛馬殺",
            Self::Canopy => "華蓋殺",
            Self::WhiteTiger => "白虎大殺",
            Self::GhostGate => "鬼門關殺",
            Self::GoatBlade => "羊刃殺",
            Self::Void => "空亡",
            Self::Resentment => "怨嗔殺",
            Self::KuiGang => "魁罡殺",
        }
    }
}

impl std::fmt::Display for Star {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Lookup tables
// ---------------------------------------------------------------------------

/// 천을귀인: day stem → two branches.
pub const fn heavenly_noble(day: S) -> [B; 2] {
    match day {
        S::Jia | S::Wu | S::Geng => [B::Chou, B::Wei],
        S::Yi | S::Ji => [B::Zi, B::Shen],
        S::Bing | S::Ding => [B::Hai, B::You],
        S::Xin => [B::Yin, B::Wu],
        S::Ren | S::Gui => [B::Mao, B::Si],
    }
}

/// Target of 천덕귀인, which is a stem for eight months and a branch for
/// the four cardinal months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VirtueTarget {
    Stem(S),
    Branch(B),
}

/// 천덕귀인: month branch → stem or branch.
pub const fn heavenly_virtue(month: B) -> VirtueTarget {
    match month {
        B::Yin => VirtueTarget::Stem(S::Ding),
        B::Mao => VirtueTarget::Branch(B::Shen),
        B::Chen => VirtueTarget::Stem(S::Ren),
        B::Si => VirtueTarget::Stem(S::Xin),
        B::Wu => VirtueTarget::Branch(B::Hai),
        B::Wei => VirtueTarget::Stem(S::Jia),
        B::Shen => VirtueTarget::Stem(S::Gui),
        B::You => VirtueTarget::Branch(B::Yin),
        B::Xu => VirtueTarget::Stem(S::Bing),
        B::Hai => VirtueTarget::Stem(S::Yi),
        B::Zi => VirtueTarget::Branch(B::Si),
        B::Chou => VirtueTarget::Stem(S::Geng),
    }
}

/// 월덕귀인: month branch trine → stem.
pub const fn monthly_virtue(month: B) -> S {
    match month.index() % 4 {
        // 申子辰
        0 => S::Ren,
        // 巳酉丑
        1 => S::Geng,
        // 寅午戌
        2 => S::Bing,
        // 亥卯未
        _ => S::Jia,
    }
}

/// 문창귀인: day stem → branch.
pub const fn literary_star(day: S) -> B {
    match day {
        S::Jia => B::Si,
        S::Yi => B::Wu,
        S::Bing | S::Wu => B::Shen,
        S::Ding | S::Ji => B::You,
        S::Geng => B::Hai,
        S::Xin => B::Zi,
        S::Ren => B::Yin,
        S::Gui => B::Mao,
    }
}

/// 학당귀인: day stem → branch.
pub const fn academic_hall(day: S) -> B {
    match day {
        S::Jia | S::Yi | S::Gui => B::Hai,
        S::Bing | S::Ding | S::Wu => B::Yin,
        S::Ji | S::Geng => B::Si,
        S::Xin | S::Ren => B::Shen,
    }
}

/// 금여록: day stem → branch.
pub const fn golden_carriage(day: S) -> B {
    match day {
        S::Jia => B::Chen,
        S::Yi => B::Si,
        S::Bing | S::Wu => B::Wei,
        S::Ding | S::Ji => B::Shen,
        S::Geng => B::Xu,
        S::Xin => B::Hai,
        S::Ren => B::Chou,
        S::Gui => B::Yin,
    }
}

/// 천관귀인: day stem → branch.
pub const fn heavenly_official(day: S) -> B {
    match day {
        S::Jia => B::Wei,
        S::Yi => B::Chen,
        S::Bing | S::Wu => B::Si,
        S::Ding | S::Ji => B::Yin,
        S::Geng => B::Hai,
        S::Xin => B::Xu,
        S::Ren => B::You,
        S::Gui => B::Shen,
    }
}

/// 도화살: year branch trine → branch.
pub const fn peach_blossom(year: B) -> B {
    match year.index() % 4 {
        0 => B::You,
        1 => B::Wu,
        2 => B::Mao,
        _ => B::Zi,
    }
}

/// 역마살: year branch trine → branch.
pub const fn travelling_horse(year: B) -> B {
    match year.index() % 4 {
        0 => B::Yin,
        1 => B::Hai,
        2 => B::Shen,
        _ => B::Si,
    }
}

/// 화개살: year branch trine → branch.
pub const fn canopy(year: B) -> B {
    match year.index() % 4 {
        0 => B::Chen,
        1 => B::Chou,
        2 => B::Xu,
        _ => B::Wei,
    }
}

/// 백호대살: month branch → branch eight steps on.
pub const fn white_tiger(month: B) -> B {
    month.offset(8)
}

/// 귀문관살: day branch → branches at the other positions.
pub const fn ghost_gate(day: B) -> &'static [B] {
    match day {
        B::Zi => &[B::You],
        B::Chou => &[B::Wu],
        B::Yin => &[B::Si, B::Wei],
        B::Mao => &[B::Chen, B::Si],
        B::Chen => &[B::Mao, B::Yin],
        B::Si => &[B::Yin, B::Mao],
        B::Wu => &[B::Chou, B::Hai],
        B::Wei => &[B::Zi, B::Yin],
        B::Shen => &[B::Hai],
        B::You => &[B::Xu, B::Zi],
        B::Xu => &[B::You, B::Wei],
        B::Hai => &[B::Wu, B::Shen],
    }
}

/// 양인살: day stem → branch.
pub const fn goat_blade(day: S) -> B {
    match day {
        S::Jia => B::Mao,
        S::Yi => B::Chen,
        S::Bing | S::Wu => B::Wu,
        S::Ding | S::Ji => B::Wei,
        S::Geng => B::You,
        S::Xin => B::Xu,
        S::Ren => B::Zi,
        S::Gui => B::Chou,
    }
}

/// 괴강: 庚辰, 壬辰, 庚戌, 壬戌.
pub fn is_kui_gang(day: SexagenaryPair) -> bool {
    matches!(day.stem(), S::Geng | S::Ren) && matches!(day.branch(), B::Chen | B::Xu)
}

// ---------------------------------------------------------------------------
// Detection
// ---------------------------------------------------------------------------

/// A star present in a chart, with every position it sits at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarFinding {
    pub star: Star,
    pub positions: Vec<Position>,
}

/// Overall leaning of a chart's stars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StarBalance {
    /// At least three auspicious stars and at most two inauspicious ones.
    MostlyAuspicious,
    /// At least three inauspicious stars and at most two auspicious ones.
    MostlyInauspicious,
    Balanced,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarReport {
    pub auspicious: Vec<StarFinding>,
    pub inauspicious: Vec<StarFinding>,
    pub balance: StarBalance,
}

impl StarReport {
    /// Finding for a star, if present.
    pub fn get(&self, star: Star) -> Option<&StarFinding> {
        self.auspicious
            .iter()
            .chain(self.inauspicious.iter())
            .find(|f| f.star == star)
    }

    pub fn contains(&self, star: Star) -> bool {
        self.get(star).is_some()
    }
}

fn branch_positions(pillars: &FourPillars, mut hit: impl FnMut(Position, B) -> bool) -> Vec<Position> {
    pillars
        .iter()
        .filter(|&(pos, p)| hit(pos, p.branch()))
        .map(|(pos, _)| pos)
        .collect()
}

fn stem_positions(pillars: &FourPillars, target: S) -> Vec<Position> {
    pillars
        .iter()
        .filter(|(_, p)| p.stem() == target)
        .map(|(pos, _)| pos)
        .collect()
}

fn positions_of(pillars: &FourPillars, star: Star) -> Vec<Position> {
    let day = pillars.day_master();
    let year_branch = pillars.year.branch();
    let month_branch = pillars.month.branch();
    let day_branch = pillars.day.branch();

    match star {
        Star::HeavenlyNoble => {
            let targets = heavenly_noble(day);
            branch_positions(pillars, |_, b| targets.contains(&b))
        }
        Star::HeavenlyVirtue => match heavenly_virtue(month_branch) {
            VirtueTarget::Stem(s) => stem_positions(pillars, s),
            VirtueTarget::Branch(t) => branch_positions(pillars, |_, b| b == t),
        },
        Star::MonthlyVirtue => stem_positions(pillars, monthly_virtue(month_branch)),
        Star::LiteraryStar => branch_positions(pillars, |_, b| b == literary_star(day)),
        Star::AcademicHall => branch_positions(pillars, |_, b| b == academic_hall(day)),
        Star::GoldenCarriage => branch_positions(pillars, |_, b| b == golden_carriage(day)),
        Star::HeavenlyOfficial => branch_positions(pillars, |_, b| b == heavenly_official(day)),
        Star::PeachBlossom => branch_positions(pillars, |_, b| b == peach_blossom(year_branch)),
        Star::TravellingHorse => {
            branch_positions(pillars, |_, b| b == travelling_horse(year_branch))
        }
        Star::Canopy => branch_positions(pillars, |_, b| b == canopy(year_branch)),
        Star::WhiteTiger => branch_positions(pillars, |_, b| b == white_tiger(month_branch)),
        Star::GhostGate => {
            let targets = ghost_gate(day_branch);
            branch_positions(pillars, |pos, b| pos != Position::Day && targets.contains(&b))
        }
        Star::GoatBlade => branch_positions(pillars, |_, b| b == goat_blade(day)),
        Star::Void => {
            let year_void = pillars.year.void_branches();
            let day_void = pillars.day.void_branches();
            branch_positions(pillars, |_, b| year_void.contains(&b) || day_void.contains(&b))
        }
        Star::Resentment => branch_positions(pillars, |_, b| {
            b == saju_base::resentment_partner(year_branch)
        }),
        Star::KuiGang => {
            if is_kui_gang(pillars.day) {
                vec![Position::Day]
            } else {
                Vec::new()
            }
        }
    }
}

/// Find every star present among a chart's pillars.
pub fn find_stars(pillars: &FourPillars) -> StarReport {
    let mut auspicious = Vec::new();
    let mut inauspicious = Vec::new();
    for star in ALL_STARS {
        let positions = positions_of(pillars, star);
        if positions.is_empty() {
            continue;
        }
        let finding = StarFinding { star, positions };
        match star.kind() {
            StarKind::Auspicious => auspicious.push(finding),
            StarKind::Inauspicious => inauspicious.push(finding),
        }
    }

    let (good, bad) = (auspicious.len(), inauspicious.len());
    let balance = if good >= 3 && bad <= 2 {
        StarBalance::MostlyAuspicious
    } else if bad >= 3 && good <= 2 {
        StarBalance::MostlyInauspicious
    } else {
        StarBalance::Balanced
    };

    StarReport {
        auspicious,
        inauspicious,
        balance,
    }
}
