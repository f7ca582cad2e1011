//! Synthetic Vedic chart generation

use crate::seed::ChartSeed;
use crate::yoga;
use jyotish_core::{Planet, UserContext, ZodiacSign};
use serde::{Deserialize, Serialize};

pub const NAKSHATRAS: [&str; 27] = [
    "Ashwini",
    "Bharani",
    "Krittika",
    "Rohini",
    "Mrigashira",
    "Ardra",
    "Punarvasu",
    "Pushya",
    "Ashlesha",
    "Magha",
    "Purva Phalguni",
    "Uttara Phalguni",
    "Hasta",
    "Chitra",
    "Swati",
    "Vishakha",
    "Anuradha",
    "Jyeshtha",
    "Mula",
    "Purva Ashadha",
    "Uttara Ashadha",
    "Shravana",
    "Dhanishta",
    "Shatabhisha",
    "Purva Bhadrapada",
    "Uttara Bhadrapada",
    "Revati",
];

/// Vimshottari sequence
pub const DASHA_LORDS: [Planet; 9] = [
    Planet::Ketu,
    Planet::Venus,
    Planet::Sun,
    Planet::Moon,
    Planet::Mars,
    Planet::Rahu,
    Planet::Jupiter,
    Planet::Saturn,
    Planet::Mercury,
];

// Draw offsets. Planet draws add the planet's index.
const SIGN_DRAW: u32 = 0;
const HOUSE_DRAW: u32 = 10;
const DEGREE_DRAW: u32 = 20;
const RETROGRADE_DRAW: u32 = 30;
const ASCENDANT_DRAW: u32 = 100;
const MOON_SIGN_DRAW: u32 = 101;
const ASCENDANT_DEGREE_DRAW: u32 = 150;
const NAKSHATRA_DRAW: u32 = 200;
const PADA_DRAW: u32 = 250;
const MAHADASHA_DRAW: u32 = 500;
const ANTARDASHA_DRAW: u32 = 600;
// Shared with the wealth and success yoga draws
const DASHA_START_DRAW: u32 = 700;
const DASHA_END_DRAW: u32 = 800;

const RETROGRADE_THRESHOLD: f64 = 0.75;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanetPosition {
    pub planet: Planet,
    pub sign: ZodiacSign,
    /// 1..=12
    pub house: u8,
    /// 0..30
    pub degree: u8,
    pub retrograde: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HouseSlot {
    pub house: u8,
    pub sign: ZodiacSign,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyntheticChart {
    pub ascendant: ZodiacSign,
    pub ascendant_degree: u8,
    pub moon_sign: ZodiacSign,
    pub sun_sign: ZodiacSign,
    pub nakshatra: String,
    pub nakshatra_pada: u8,
    pub planet_positions: Vec<PlanetPosition>,
    pub houses: Vec<HouseSlot>,
    pub yogas: Vec<String>,
    pub current_dasha: String,
    pub antardasha: String,
    pub dasha_end: String,
}

impl SyntheticChart {
    pub fn position(&self, planet: Planet) -> Option<&PlanetPosition> {
        self.planet_positions.iter().find(|p| p.planet == planet)
    }
}

/// Builds charts from birth dates with no external data
#[derive(Debug, Clone, Copy, Default)]
pub struct ChartSynthesizer;

impl ChartSynthesizer {
    pub fn new() -> Self {
        Self
    }

    pub fn generate(&self, user: &UserContext) -> SyntheticChart {
        let seed = ChartSeed::from_timestamp(user.birth_timestamp());
        self.generate_from(seed, user.zodiac_sign)
    }

    /// Same seed, same chart. `sun_sign` is copied through unchanged.
    pub fn generate_from(&self, seed: ChartSeed, sun_sign: ZodiacSign) -> SyntheticChart {
        let planet_positions: Vec<PlanetPosition> = Planet::ALL
            .iter()
            .enumerate()
            .map(|(i, &planet)| {
                let i = i as u32;
                PlanetPosition {
                    planet,
                    sign: ZodiacSign::from_index(seed.pick(SIGN_DRAW + i, 12)),
                    house: seed.pick(HOUSE_DRAW + i, 12) as u8 + 1,
                    degree: seed.pick(DEGREE_DRAW + i, 30) as u8,
                    retrograde: !planet.is_luminary()
                        && seed.random(RETROGRADE_DRAW + i) > RETROGRADE_THRESHOLD,
                }
            })
            .collect();

        let ascendant_index = seed.pick(ASCENDANT_DRAW, 12);
        let houses = (0..12)
            .map(|k| HouseSlot {
                house: k as u8 + 1,
                sign: ZodiacSign::from_index(ascendant_index + k),
            })
            .collect();

        let yogas = yoga::detect(seed, &planet_positions);

        let maha = seed.pick(MAHADASHA_DRAW, DASHA_LORDS.len());
        let antar = (maha + seed.pick(ANTARDASHA_DRAW, 4)) % DASHA_LORDS.len();
        let dasha_end = format!(
            "{}-{}",
            2025 + seed.pick(DASHA_START_DRAW, 15),
            2030 + seed.pick(DASHA_END_DRAW, 10)
        );

        SyntheticChart {
            ascendant: ZodiacSign::from_index(ascendant_index),
            ascendant_degree: seed.pick(ASCENDANT_DEGREE_DRAW, 30) as u8,
            moon_sign: ZodiacSign::from_index(seed.pick(MOON_SIGN_DRAW, 12)),
            sun_sign,
            nakshatra: NAKSHATRAS[seed.pick(NAKSHATRA_DRAW, NAKSHATRAS.len())].to_string(),
            nakshatra_pada: seed.pick(PADA_DRAW, 4) as u8 + 1,
            planet_positions,
            houses,
            yogas,
            current_dasha: format!("{} Mahadasha", DASHA_LORDS[maha]),
            antardasha: format!("{} Antardasha", DASHA_LORDS[antar]),
            dasha_end,
        }
    }
}
