mod common;

use common::birth_dates;
use jyotish_chart::{ChartSeed, ChartSynthesizer, DASHA_LORDS, NAKSHATRAS};
use jyotish_core::{Planet, UserContext, ZodiacSign};

fn user_born(date: chrono::NaiveDate) -> UserContext {
    UserContext::new("Test", date, "Somewhere").unwrap()
}

#[test]
fn test_ranges_hold_across_two_centuries() {
    let synth = ChartSynthesizer::new();
    for date in birth_dates(97) {
        let chart = synth.generate(&user_born(date));

        assert_eq!(chart.planet_positions.len(), 9, "{}", date);
        for p in &chart.planet_positions {
            assert!((1..=12).contains(&p.house), "{} {:?}", date, p);
            assert!(p.degree < 30, "{} {:?}", date, p);
        }
        assert!(chart.ascendant_degree < 30);
        assert!((1..=4).contains(&chart.nakshatra_pada));
        assert!(NAKSHATRAS.contains(&chart.nakshatra.as_str()));
        assert!(!chart.yogas.is_empty());

        let maha = chart.current_dasha.trim_end_matches(" Mahadasha");
        let known_lord = DASHA_LORDS.iter().any(|l| l.name() == maha);
        assert!(known_lord, "{}", chart.current_dasha);
    }
}

#[test]
fn test_known_chart_for_1990_05_15() {
    let user = common::sample_user();
    let chart = ChartSynthesizer::new().generate(&user);

    assert_eq!(chart.sun_sign, ZodiacSign::Taurus);
    assert_eq!(chart.ascendant, ZodiacSign::Sagittarius);
    assert_eq!(chart.ascendant_degree, 2);
    assert_eq!(chart.moon_sign, ZodiacSign::Taurus);
    assert_eq!(chart.nakshatra, "Ashlesha");
    assert_eq!(chart.nakshatra_pada, 2);
    assert_eq!(chart.yogas, ["Dhana Yoga - Prosperity"]);
    assert_eq!(chart.current_dasha, "Mars Mahadasha");
    assert_eq!(chart.antardasha, "Jupiter Antardasha");
    assert_eq!(chart.dasha_end, "2027-2032");

    let expected: [(Planet, ZodiacSign, u8, u8, bool); 9] = [
        (Planet::Sun, ZodiacSign::Sagittarius, 4, 3, false),
        (Planet::Moon, ZodiacSign::Virgo, 12, 20, false),
        (Planet::Mars, ZodiacSign::Leo, 7, 27, false),
        (Planet::Mercury, ZodiacSign::Aquarius, 11, 13, true),
        (Planet::Jupiter, ZodiacSign::Cancer, 3, 16, false),
        (Planet::Venus, ZodiacSign::Aquarius, 7, 4, true),
        (Planet::Saturn, ZodiacSign::Scorpio, 4, 27, false),
        (Planet::Rahu, ZodiacSign::Sagittarius, 7, 28, false),
        (Planet::Ketu, ZodiacSign::Aries, 5, 29, false),
    ];
    let actual: Vec<_> = chart
        .planet_positions
        .iter()
        .map(|p| (p.planet, p.sign, p.house, p.degree, p.retrograde))
        .collect();
    assert_eq!(actual, expected);
}

#[test]
fn test_known_chart_for_1984_11_02() {
    let date = chrono::NaiveDate::from_ymd_opt(1984, 11, 2).unwrap();
    let chart = ChartSynthesizer::new().generate(&user_born(date));

    assert_eq!(chart.ascendant, ZodiacSign::Aquarius);
    assert_eq!(chart.ascendant_degree, 23);
    assert_eq!(chart.moon_sign, ZodiacSign::Scorpio);
    assert_eq!(chart.nakshatra, "Ashlesha");
    assert_eq!(chart.nakshatra_pada, 1);
    // Moon in house 7, Jupiter in 11
    assert_eq!(chart.yogas, ["Gajakesari Yoga - Wisdom & Fame"]);
    assert_eq!(chart.current_dasha, "Jupiter Mahadasha");
    assert_eq!(chart.antardasha, "Saturn Antardasha");
    assert_eq!(chart.dasha_end, "2026-2031");
}

#[test]
fn test_luminaries_never_retrograde() {
    let synth = ChartSynthesizer::new();
    for date in birth_dates(13) {
        let chart = synth.generate(&user_born(date));
        for planet in [Planet::Sun, Planet::Moon] {
            let position = chart.position(planet).unwrap();
            assert!(!position.retrograde, "{} {} retrograde", date, planet);
        }
    }
}

#[test]
fn test_some_charts_have_retrograde_planets() {
    let synth = ChartSynthesizer::new();
    let any_retrograde = birth_dates(31)
        .map(|d| synth.generate(&user_born(d)))
        .any(|c| c.planet_positions.iter().any(|p| p.retrograde));
    assert!(any_retrograde);
}

#[test]
fn test_same_birth_date_same_chart() {
    let synth = ChartSynthesizer::new();
    for date in birth_dates(3653) {
        let a = synth.generate(&UserContext::new("A", date, "X").unwrap());
        let b = synth.generate(&UserContext::new("B", date, "Y").unwrap());
        assert_eq!(a, b, "{}", date);
    }
}

#[test]
fn test_generate_matches_explicit_seed() {
    let user = user_born(chrono::NaiveDate::from_ymd_opt(1975, 12, 1).unwrap());
    let seed = ChartSeed::from_timestamp(user.birth_timestamp());
    assert_eq!(seed.millis(), 186_624_000_000);

    let synth = ChartSynthesizer::new();
    let explicit = synth.generate_from(seed, ZodiacSign::Sagittarius);
    assert_eq!(synth.generate(&user), explicit);
}

#[test]
fn test_houses_rotate_from_ascendant() {
    let synth = ChartSynthesizer::new();
    for date in birth_dates(701) {
        let chart = synth.generate(&user_born(date));
        let signs: Vec<ZodiacSign> = chart.houses.iter().map(|h| h.sign).collect();
        let expected: Vec<ZodiacSign> = (0..12)
            .map(|k| ZodiacSign::from_index(chart.ascendant.index() + k))
            .collect();
        assert_eq!(signs, expected);
    }
}
