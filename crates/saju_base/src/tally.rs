//! Element and polarity counts over the stems and branches of a chart.

use serde::{Deserialize, Serialize};

use crate::element::{ALL_ELEMENTS, Element, Polarity};
use crate::pillar::FourPillars;

/// Count of symbols per element. Every element is always present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ElementTally {
    pub wood: u8,
    pub fire: u8,
    pub earth: u8,
    pub metal: u8,
    pub water: u8,
}

impl ElementTally {
    pub const fn get(&self, element: Element) -> u8 {
        match element {
            Element::Wood => self.wood,
            Element::Fire => self.fire,
            Element::Earth => self.earth,
            Element::Metal => self.metal,
            Element::Water => self.water,
        }
    }

    fn bump(&mut self, element: Element) {
        let slot = match element {
            Element::Wood => &mut self.wood,
            Element::Fire => &mut self.fire,
            Element::Earth => &mut self.earth,
            Element::Metal => &mut self.metal,
            Element::Water => &mut self.water,
        };
        *slot += 1;
    }

    pub fn total(&self) -> u32 {
        ALL_ELEMENTS.iter().map(|&e| self.get(e) as u32).sum()
    }

    /// `(element, count)` pairs in generation-cycle order.
    pub fn entries(&self) -> [(Element, u8); 5] {
        ALL_ELEMENTS.map(|e| (e, self.get(e)))
    }

    /// Element with the highest count; ties resolve to the earliest in cycle order.
    pub fn dominant(&self) -> Element {
        let mut best = Element::Wood;
        for e in ALL_ELEMENTS {
            if self.get(e) > self.get(best) {
                best = e;
            }
        }
        best
    }

    /// Elements with a zero count.
    pub fn missing(&self) -> Vec<Element> {
        ALL_ELEMENTS
            .iter()
            .copied()
            .filter(|&e| self.get(e) == 0)
            .collect()
    }
}

/// Count of yang and yin symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PolarityTally {
    pub yang: u8,
    pub yin: u8,
}

impl PolarityTally {
    pub const fn get(&self, polarity: Polarity) -> u8 {
        match polarity {
            Polarity::Yang => self.yang,
            Polarity::Yin => self.yin,
        }
    }

    pub fn total(&self) -> u32 {
        self.yang as u32 + self.yin as u32
    }
}

/// Tally elements over all present stems and branches.
pub fn element_tally(pillars: &FourPillars) -> ElementTally {
    let mut tally = ElementTally::default();
    for (_, p) in pillars.iter() {
        tally.bump(p.stem().element());
        tally.bump(p.branch().element());
    }
    tally
}

/// Tally polarities over all present stems and branches.
pub fn polarity_tally(pillars: &FourPillars) -> PolarityTally {
    let mut tally = PolarityTally::default();
    for (_, p) in pillars.iter() {
        for pol in [p.stem().polarity(), p.branch().polarity()] {
            match pol {
                Polarity::Yang => tally.yang += 1,
                Polarity::Yin => tally.yin += 1,
            }
        }
    }
    tally
}
