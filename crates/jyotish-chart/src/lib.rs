//! Deterministic synthetic birth charts and almanac fallbacks

mod almanac;
mod chart;
mod resolve;
mod seed;
mod yoga;

pub use almanac::{daily_horoscope, panchang, DailyHoroscope, Panchang};
pub use chart::{
    ChartSynthesizer, HouseSlot, PlanetPosition, SyntheticChart, DASHA_LORDS, NAKSHATRAS,
};
pub use resolve::{resolve_chart, ChartSource, ResolvedChart};
pub use seed::ChartSeed;
