//! Static element roster the bubble field samples from
//!
//! Each entry carries the display symbol, the atomic number (which doubles
//! as the size weight) and a family color. The list is consumed read-only
//! at spawn time.

/// One entry of the element roster
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Element {
    /// Display symbol drawn inside the bubble
    pub symbol: &'static str,
    /// Atomic number; doubles as the size weight
    pub number: u32,
    /// Base fill color as a hex triplet
    pub color: &'static str,
}

/// Nominal bubble radius for an element before depth scaling (px)
#[inline]
pub fn base_radius(number: u32) -> f32 {
    18.0 + (number as f32).sqrt() * 1.6
}

// Family palette
const ALKALI: &str = "#ff6b6b";
const ALKALINE_EARTH: &str = "#ffa94d";
const TRANSITION_3D: &str = "#74c0fc";
const TRANSITION_4D: &str = "#4dabf7";
const POST_TRANSITION: &str = "#63e6be";
const METALLOID: &str = "#38d9a9";
const NONMETAL: &str = "#ffd43b";
const HALOGEN: &str = "#da77f2";
const NOBLE_GAS: &str = "#b197fc";

/// Elements H through Xe
pub const ELEMENTS: &[Element] = &[
    Element { symbol: "H", number: 1, color: NONMETAL },
    Element { symbol: "He", number: 2, color: NOBLE_GAS },
    Element { symbol: "Li", number: 3, color: ALKALI },
    Element { symbol: "Be", number: 4, color: ALKALINE_EARTH },
    Element { symbol: "B", number: 5, color: METALLOID },
    Element { symbol: "C", number: 6, color: NONMETAL },
    Element { symbol: "N", number: 7, color: NONMETAL },
    Element { symbol: "O", number: 8, color: NONMETAL },
    Element { symbol: "F", number: 9, color: HALOGEN },
    Element { symbol: "Ne", number: 10, color: NOBLE_GAS },
    Element { symbol: "Na", number: 11, color: ALKALI },
    Element { symbol: "Mg", number: 12, color: ALKALINE_EARTH },
    Element { symbol: "Al", number: 13, color: POST_TRANSITION },
    Element { symbol: "Si", number: 14, color: METALLOID },
    Element { symbol: "P", number: 15, color: NONMETAL },
    Element { symbol: "S", number: 16, color: NONMETAL },
    Element { symbol: "Cl", number: 17, color: HALOGEN },
    Element { symbol: "Ar", number: 18, color: NOBLE_GAS },
    Element { symbol: "K", number: 19, color: ALKALI },
    Element { symbol: "Ca", number: 20, color: ALKALINE_EARTH },
    Element { symbol: "Sc", number: 21, color: TRANSITION_3D },
    Element { symbol: "Ti", number: 22, color: TRANSITION_3D },
    Element { symbol: "V", number: 23, color: TRANSITION_3D },
    Element { symbol: "Cr", number: 24, color: TRANSITION_3D },
    Element { symbol: "Mn", number: 25, color: TRANSITION_3D },
    Element { symbol: "Fe", number: 26, color: TRANSITION_3D },
    Element { symbol: "Co", number: 27, color: TRANSITION_3D },
    Element { symbol: "Ni", number: 28, color: TRANSITION_3D },
    Element { symbol: "Cu", number: 29, color: TRANSITION_3D },
    Element { symbol: "Zn", number: 30, color: TRANSITION_3D },
    Element { symbol: "Ga", number: 31, color: POST_TRANSITION },
    Element { symbol: "Ge", number: 32, color: METALLOID },
    Element { symbol: "As", number: 33, color: METALLOID },
    Element { symbol: "Se", number: 34, color: NONMETAL },
    Element { symbol: "Br", number: 35, color: HALOGEN },
    Element { symbol: "Kr", number: 36, color: NOBLE_GAS },
    Element { symbol: "Rb", number: 37, color: ALKALI },
    Element { symbol: "Sr", number: 38, color: ALKALINE_EARTH },
    Element { symbol: "Y", number: 39, color: TRANSITION_4D },
    Element { symbol: "Zr", number: 40, color: TRANSITION_4D },
    Element { symbol: "Nb", number: 41, color: TRANSITION_4D },
    Element { symbol: "Mo", number: 42, color: TRANSITION_4D },
    Element { symbol: "Tc", number: 43, color: TRANSITION_4D },
    Element { symbol: "Ru", number: 44, color: TRANSITION_4D },
    Element { symbol: "Rh", number: 45, color: TRANSITION_4D },
    Element { symbol: "Pd", number: 46, color: TRANSITION_4D },
    Element { symbol: "Ag", number: 47, color: TRANSITION_4D },
    Element { symbol: "Cd", number: 48, color: TRANSITION_4D },
    Element { symbol: "In", number: 49, color: POST_TRANSITION },
    Element { symbol: "Sn", number: 50, color: POST_TRANSITION },
    Element { symbol: "Sb", number: 51, color: METALLOID },
    Element { symbol: "Te", number: 52, color: METALLOID },
    Element { symbol: "I", number: 53, color: HALOGEN },
    Element { symbol: "Xe", number: 54, color: NOBLE_GAS },
];
