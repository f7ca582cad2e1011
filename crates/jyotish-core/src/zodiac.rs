//! Zodiac reference data: sign profiles and date-based sign derivation

use crate::types::ZodiacSign;
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

/// Static profile shown alongside a user's sign
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ZodiacProfile {
    pub element: Element,
    pub ruling_planet: &'static str,
    pub symbol: &'static str,
    pub dates: &'static str,
    pub traits: &'static [&'static str],
    pub compatibility: &'static [ZodiacSign],
    pub lucky_numbers: &'static [u32],
    pub lucky_colors: &'static [&'static str],
    pub description: &'static str,
}

use ZodiacSign::*;

const PROFILES: [ZodiacProfile; 12] = [
    ZodiacProfile {
        element: Element::Fire,
        ruling_planet: "Mars",
        symbol: "♈",
        dates: "March 21 - April 19",
        traits: &["Courageous", "Determined", "Confident", "Enthusiastic", "Optimistic"],
        compatibility: &[Leo, Sagittarius, Gemini, Aquarius],
        lucky_numbers: &[1, 8, 17],
        lucky_colors: &["Red", "Scarlet"],
        description: "Aries is the first sign of the zodiac, symbolizing new beginnings and bold action. Those born under this sign are natural leaders, full of energy and enthusiasm.",
    },
    ZodiacProfile {
        element: Element::Earth,
        ruling_planet: "Venus",
        symbol: "♉",
        dates: "April 20 - May 20",
        traits: &["Reliable", "Patient", "Practical", "Devoted", "Responsible"],
        compatibility: &[Virgo, Capricorn, Cancer, Pisces],
        lucky_numbers: &[2, 6, 9, 12, 24],
        lucky_colors: &["Green", "Pink"],
        description: "Taurus is an earth sign represented by the bull. Taureans are known for their reliability, practicality, and devotion to those they love.",
    },
    ZodiacProfile {
        element: Element::Air,
        ruling_planet: "Mercury",
        symbol: "♊",
        dates: "May 21 - June 20",
        traits: &["Gentle", "Affectionate", "Curious", "Adaptable", "Quick learner"],
        compatibility: &[Libra, Aquarius, Aries, Leo],
        lucky_numbers: &[5, 7, 14, 23],
        lucky_colors: &["Light Green", "Yellow"],
        description: "Gemini is an air sign symbolized by the twins. Geminis are known for their versatility, communication skills, and intellectual curiosity.",
    },
    ZodiacProfile {
        element: Element::Water,
        ruling_planet: "Moon",
        symbol: "♋",
        dates: "June 21 - July 22",
        traits: &["Tenacious", "Highly imaginative", "Loyal", "Emotional", "Persuasive"],
        compatibility: &[Scorpio, Pisces, Taurus, Virgo],
        lucky_numbers: &[2, 3, 15, 20],
        lucky_colors: &["White", "Silver"],
        description: "Cancer is a water sign symbolized by the crab. Those born under this sign are deeply intuitive and sentimental, valuing home and family above all.",
    },
    ZodiacProfile {
        element: Element::Fire,
        ruling_planet: "Sun",
        symbol: "♌",
        dates: "July 23 - August 22",
        traits: &["Creative", "Passionate", "Generous", "Warm-hearted", "Cheerful"],
        compatibility: &[Aries, Sagittarius, Gemini, Libra],
        lucky_numbers: &[1, 3, 10, 19],
        lucky_colors: &["Gold", "Orange", "Yellow"],
        description: "Leo is a fire sign symbolized by the lion. Leos are natural-born leaders with a flair for drama and creativity.",
    },
    ZodiacProfile {
        element: Element::Earth,
        ruling_planet: "Mercury",
        symbol: "♍",
        dates: "August 23 - September 22",
        traits: &["Loyal", "Analytical", "Kind", "Hardworking", "Practical"],
        compatibility: &[Taurus, Capricorn, Cancer, Scorpio],
        lucky_numbers: &[5, 14, 15, 23, 32],
        lucky_colors: &["Grey", "Beige", "Pale Yellow"],
        description: "Virgo is an earth sign known for its attention to detail and methodical approach to life. Virgos are deeply caring and always strive for perfection.",
    },
    ZodiacProfile {
        element: Element::Air,
        ruling_planet: "Venus",
        symbol: "♎",
        dates: "September 23 - October 22",
        traits: &["Cooperative", "Diplomatic", "Gracious", "Fair-minded", "Social"],
        compatibility: &[Gemini, Aquarius, Leo, Sagittarius],
        lucky_numbers: &[4, 6, 13, 15, 24],
        lucky_colors: &["Pink", "Blue"],
        description: "Libra is an air sign symbolized by the scales. Librans are known for their love of balance, harmony, and justice.",
    },
    ZodiacProfile {
        element: Element::Water,
        ruling_planet: "Pluto, Mars",
        symbol: "♏",
        dates: "October 23 - November 21",
        traits: &["Resourceful", "Brave", "Passionate", "Stubborn", "True friend"],
        compatibility: &[Cancer, Pisces, Virgo, Capricorn],
        lucky_numbers: &[8, 11, 18, 22],
        lucky_colors: &["Scarlet", "Rust", "Red"],
        description: "Scorpio is a water sign known for its intensity and passion. Scorpios are resourceful, determined, and fiercely loyal.",
    },
    ZodiacProfile {
        element: Element::Fire,
        ruling_planet: "Jupiter",
        symbol: "♐",
        dates: "November 22 - December 21",
        traits: &["Generous", "Idealistic", "Great sense of humor", "Adventurous", "Optimistic"],
        compatibility: &[Aries, Leo, Libra, Aquarius],
        lucky_numbers: &[3, 7, 9, 12, 21],
        lucky_colors: &["Blue", "Purple"],
        description: "Sagittarius is a fire sign symbolized by the archer. Sagittarians are known for their love of freedom, adventure, and philosophical thinking.",
    },
    ZodiacProfile {
        element: Element::Earth,
        ruling_planet: "Saturn",
        symbol: "♑",
        dates: "December 22 - January 19",
        traits: &["Responsible", "Disciplined", "Self-control", "Good managers", "Ambitious"],
        compatibility: &[Taurus, Virgo, Scorpio, Pisces],
        lucky_numbers: &[4, 8, 13, 22],
        lucky_colors: &["Brown", "Black", "Grey"],
        description: "Capricorn is an earth sign symbolized by the sea-goat. Capricorns are known for their ambition, determination, and practical approach to life.",
    },
    ZodiacProfile {
        element: Element::Air,
        ruling_planet: "Uranus, Saturn",
        symbol: "♒",
        dates: "January 20 - February 18",
        traits: &["Progressive", "Original", "Independent", "Humanitarian", "Intellectual"],
        compatibility: &[Gemini, Libra, Aries, Sagittarius],
        lucky_numbers: &[4, 7, 11, 22, 29],
        lucky_colors: &["Blue", "Blue-green", "Grey"],
        description: "Aquarius is an air sign symbolized by the water-bearer. Aquarians are known for their progressive thinking and humanitarian values.",
    },
    ZodiacProfile {
        element: Element::Water,
        ruling_planet: "Neptune, Jupiter",
        symbol: "♓",
        dates: "February 19 - March 20",
        traits: &["Compassionate", "Artistic", "Intuitive", "Gentle", "Wise"],
        compatibility: &[Cancer, Scorpio, Taurus, Capricorn],
        lucky_numbers: &[3, 9, 12, 15, 18, 24],
        lucky_colors: &["Mauve", "Lilac", "Purple", "Violet", "Sea green"],
        description: "Pisces is a water sign symbolized by two fish. Pisceans are known for their empathy, artistic talents, and deep emotional sensitivity.",
    },
];

/// Tropical date ranges as inclusive `(month, day)` bounds, Capricorn split across the year
const SIGN_RANGES: [(ZodiacSign, (u32, u32), (u32, u32)); 13] = [
    (Capricorn, (1, 1), (1, 19)),
    (Aquarius, (1, 20), (2, 18)),
    (Pisces, (2, 19), (3, 20)),
    (Aries, (3, 21), (4, 19)),
    (Taurus, (4, 20), (5, 20)),
    (Gemini, (5, 21), (6, 20)),
    (Cancer, (6, 21), (7, 22)),
    (Leo, (7, 23), (8, 22)),
    (Virgo, (8, 23), (9, 22)),
    (Libra, (9, 23), (10, 22)),
    (Scorpio, (10, 23), (11, 21)),
    (Sagittarius, (11, 22), (12, 21)),
    (Capricorn, (12, 22), (12, 31)),
];

impl ZodiacSign {
    /// Sun sign for a birth date
    pub fn from_birth_date(date: NaiveDate) -> Self {
        let md = (date.month(), date.day());
        SIGN_RANGES
            .iter()
            .find(|(_, start, end)| *start <= md && md <= *end)
            .map(|(sign, _, _)| *sign)
            .unwrap_or(Capricorn)
    }

    pub fn profile(self) -> &'static ZodiacProfile {
        &PROFILES[self.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2001, m, d).unwrap()
    }

    #[test]
    fn test_boundary_dates() {
        assert_eq!(ZodiacSign::from_birth_date(date(1, 19)), Capricorn);
        assert_eq!(ZodiacSign::from_birth_date(date(1, 20)), Aquarius);
        assert_eq!(ZodiacSign::from_birth_date(date(1, 31)), Aquarius);
        assert_eq!(ZodiacSign::from_birth_date(date(2, 18)), Aquarius);
        assert_eq!(ZodiacSign::from_birth_date(date(2, 19)), Pisces);
        assert_eq!(ZodiacSign::from_birth_date(date(3, 20)), Pisces);
        assert_eq!(ZodiacSign::from_birth_date(date(3, 21)), Aries);
        assert_eq!(ZodiacSign::from_birth_date(date(12, 21)), Sagittarius);
        assert_eq!(ZodiacSign::from_birth_date(date(12, 22)), Capricorn);
        assert_eq!(ZodiacSign::from_birth_date(date(12, 31)), Capricorn);
    }

    #[test]
    fn test_every_day_of_year_has_a_sign() {
        let mut day = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        while day.year() == 2000 {
            let sign = ZodiacSign::from_birth_date(day);
            assert!(ZodiacSign::ALL.contains(&sign));
            day = day.succ_opt().unwrap();
        }
    }

    #[test]
    fn test_profile_lookup() {
        let profile = Scorpio.profile();
        assert_eq!(profile.element, Element::Water);
        assert_eq!(profile.ruling_planet, "Pluto, Mars");
        assert!(profile.compatibility.contains(&Pisces));
        let aries = Aries.profile();
        assert!(aries.description.starts_with("Aries is the first sign"));
    }

    #[test]
    fn test_profile_serializes_camel_case() {
        let json = serde_json::to_value(Leo.profile()).unwrap();
        assert_eq!(json["rulingPlanet"], "Sun");
        assert_eq!(json["luckyNumbers"][0], 1);
        assert_eq!(json["compatibility"][0], "Aries");
    }
}
