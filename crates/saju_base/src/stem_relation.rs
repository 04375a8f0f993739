//! Stem combinations (천간합) and stem clashes (천간충).

use crate::element::Element;
use crate::stem::Stem;

/// Element produced by a stem combination, or None.
///
/// Stems five apart combine: 甲己 Earth, 乙庚 Metal, 丙辛 Water,
/// 丁壬 Wood, 戊癸 Fire.
pub const fn stem_combine_element(a: Stem, b: Stem) -> Option<Element> {
    let (x, y) = (a.index(), b.index());
    if (x + 10 - y) % 10 != 5 {
        return None;
    }
    let low = if x < y { x } else { y };
    // 甲己 → Earth (index 2), each following pair one step along the cycle
    Some(Element::from_index(low + 2))
}

pub const fn is_stem_combine(a: Stem, b: Stem) -> bool {
    stem_combine_element(a, b).is_some()
}

/// Stem clash: 甲庚, 乙辛, 丙壬, 丁癸.
///
/// Same polarity, controlling elements, excluding earth stems.
pub const fn is_stem_clash(a: Stem, b: Stem) -> bool {
    let (x, y) = (a.index(), b.index());
    let low = if x < y { x } else { y };
    let high = if x < y { y } else { x };
    high - low == 6 && low < 4
}
