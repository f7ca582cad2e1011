//! Yoga detection: positional rules plus seeded flavour yogas

use crate::chart::PlanetPosition;
use crate::seed::ChartSeed;
use jyotish_core::Planet;

const GAJAKESARI: &str = "Gajakesari Yoga - Wisdom & Fame";
const BUDHADITYA: &str = "Budhaditya Yoga - Intelligence";

/// Moon/Jupiter house distances that form Gajakesari
const KENDRA_DISTANCES: [u8; 4] = [0, 4, 7, 10];

struct SeededYoga {
    name: &'static str,
    draw: u32,
    threshold: f64,
}

const SEEDED_YOGAS: &[SeededYoga] = &[
    SeededYoga {
        name: "Chandra-Mangal Yoga - Wealth",
        draw: 700,
        threshold: 0.5,
    },
    SeededYoga {
        name: "Raja Yoga - Success",
        draw: 800,
        threshold: 0.6,
    },
    SeededYoga {
        name: "Dhana Yoga - Prosperity",
        draw: 900,
        threshold: 0.7,
    },
];

const DEFAULT_YOGAS: [&str; 2] = ["Shubha Yoga - Auspicious", "Dhana Yoga - Prosperity"];

/// Rule-based yogas first, then seeded ones; defaults when nothing fires
pub(crate) fn detect(seed: ChartSeed, positions: &[PlanetPosition]) -> Vec<String> {
    let find = |planet: Planet| positions.iter().find(|p| p.planet == planet);
    let mut yogas = Vec::new();

    if let (Some(moon), Some(jupiter)) = (find(Planet::Moon), find(Planet::Jupiter)) {
        if KENDRA_DISTANCES.contains(&moon.house.abs_diff(jupiter.house)) {
            yogas.push(GAJAKESARI.to_string());
        }
    }

    if let (Some(sun), Some(mercury)) = (find(Planet::Sun), find(Planet::Mercury)) {
        if sun.sign == mercury.sign {
            yogas.push(BUDHADITYA.to_string());
        }
    }

    for yoga in SEEDED_YOGAS {
        if seed.random(yoga.draw) > yoga.threshold {
            yogas.push(yoga.name.to_string());
        }
    }

    if yogas.is_empty() {
        yogas = DEFAULT_YOGAS.iter().map(|y| y.to_string()).collect();
    }
    yogas
}
