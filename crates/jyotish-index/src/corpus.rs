//! Seeded astrology knowledge base

use crate::document::{Category, KnowledgeDocument};
use jyotish_core::{Planet, ZodiacSign};

enum Tag {
    Sign(ZodiacSign),
    House(u8),
    Planet(Planet),
    Topic(&'static str),
}

struct SeedDoc {
    id: &'static str,
    text: &'static str,
    keywords: &'static [&'static str],
    category: Category,
    tag: Tag,
}

const SEED: &[SeedDoc] = &[
    // Zodiac signs
    SeedDoc {
        id: "aries_traits",
        text: "Aries is the first sign of the zodiac, ruled by Mars. Aries people are natural leaders, courageous, energetic, and pioneering. They can be impatient and impulsive. Best careers include entrepreneurship, military, sports, and leadership roles.",
        keywords: &["aries", "mars", "leader", "courage", "career", "fire"],
        category: Category::Zodiac,
        tag: Tag::Sign(ZodiacSign::Aries),
    },
    SeedDoc {
        id: "taurus_traits",
        text: "Taurus is an earth sign ruled by Venus. Taurus individuals are reliable, patient, practical, and devoted. They value stability and comfort. Best careers include banking, art, music, and culinary arts.",
        keywords: &["taurus", "venus", "earth", "stability", "career", "patient"],
        category: Category::Zodiac,
        tag: Tag::Sign(ZodiacSign::Taurus),
    },
    SeedDoc {
        id: "gemini_traits",
        text: "Gemini is an air sign ruled by Mercury. Geminis are adaptable, curious, communicative, and witty. They love learning and variety. Best careers include journalism, teaching, sales, and writing.",
        keywords: &["gemini", "mercury", "air", "communication", "career", "curious"],
        category: Category::Zodiac,
        tag: Tag::Sign(ZodiacSign::Gemini),
    },
    SeedDoc {
        id: "cancer_traits",
        text: "Cancer is a water sign ruled by the Moon. Cancer people are nurturing, protective, intuitive, and emotional. They value home and family. Best careers include nursing, real estate, hospitality, and counseling.",
        keywords: &["cancer", "moon", "water", "family", "career", "emotional", "nurturing"],
        category: Category::Zodiac,
        tag: Tag::Sign(ZodiacSign::Cancer),
    },
    SeedDoc {
        id: "leo_traits",
        text: "Leo is a fire sign ruled by the Sun. Leos are confident, dramatic, creative, and generous. They love attention and admiration. Best careers include entertainment, politics, management, and performing arts.",
        keywords: &["leo", "sun", "fire", "creative", "career", "confident", "leadership"],
        category: Category::Zodiac,
        tag: Tag::Sign(ZodiacSign::Leo),
    },
    SeedDoc {
        id: "virgo_traits",
        text: "Virgo is an earth sign ruled by Mercury. Virgos are analytical, practical, hardworking, and detail-oriented. They strive for perfection. Best careers include healthcare, accounting, research, and editing.",
        keywords: &["virgo", "mercury", "earth", "analytical", "career", "practical"],
        category: Category::Zodiac,
        tag: Tag::Sign(ZodiacSign::Virgo),
    },
    SeedDoc {
        id: "libra_traits",
        text: "Libra is an air sign ruled by Venus. Librans are diplomatic, fair-minded, social, and harmonious. They seek balance in all things. Best careers include law, diplomacy, fashion, and counseling.",
        keywords: &["libra", "venus", "air", "balance", "career", "diplomatic", "relationship"],
        category: Category::Zodiac,
        tag: Tag::Sign(ZodiacSign::Libra),
    },
    SeedDoc {
        id: "scorpio_traits",
        text: "Scorpio is a water sign ruled by Pluto and Mars. Scorpios are passionate, resourceful, determined, and intense. They have deep emotions. Best careers include psychology, investigation, surgery, and research.",
        keywords: &["scorpio", "pluto", "mars", "water", "intense", "career", "passionate"],
        category: Category::Zodiac,
        tag: Tag::Sign(ZodiacSign::Scorpio),
    },
    SeedDoc {
        id: "sagittarius_traits",
        text: "Sagittarius is a fire sign ruled by Jupiter. Sagittarians are adventurous, optimistic, philosophical, and freedom-loving. They seek knowledge. Best careers include travel, teaching, publishing, and philosophy.",
        keywords: &["sagittarius", "jupiter", "fire", "adventure", "career", "travel", "optimistic"],
        category: Category::Zodiac,
        tag: Tag::Sign(ZodiacSign::Sagittarius),
    },
    SeedDoc {
        id: "capricorn_traits",
        text: "Capricorn is an earth sign ruled by Saturn. Capricorns are ambitious, disciplined, responsible, and practical. They value achievement. Best careers include business, politics, engineering, and administration.",
        keywords: &["capricorn", "saturn", "earth", "ambitious", "career", "disciplined"],
        category: Category::Zodiac,
        tag: Tag::Sign(ZodiacSign::Capricorn),
    },
    SeedDoc {
        id: "aquarius_traits",
        text: "Aquarius is an air sign ruled by Uranus. Aquarians are innovative, humanitarian, independent, and progressive. They think differently. Best careers include technology, science, social work, and invention.",
        keywords: &["aquarius", "uranus", "air", "innovative", "career", "humanitarian"],
        category: Category::Zodiac,
        tag: Tag::Sign(ZodiacSign::Aquarius),
    },
    SeedDoc {
        id: "pisces_traits",
        text: "Pisces is a water sign ruled by Neptune. Pisceans are compassionate, artistic, intuitive, and dreamy. They are deeply spiritual. Best careers include arts, healing, music, and spirituality.",
        keywords: &["pisces", "neptune", "water", "artistic", "career", "intuitive", "spiritual"],
        category: Category::Zodiac,
        tag: Tag::Sign(ZodiacSign::Pisces),
    },
    // Houses
    SeedDoc {
        id: "house_1",
        text: "The 1st House (Ascendant/Lagna) represents self, personality, physical appearance, and how others perceive you. It shows your approach to life and first impressions you make.",
        keywords: &["1st house", "first house", "ascendant", "lagna", "personality", "self", "appearance"],
        category: Category::Houses,
        tag: Tag::House(1),
    },
    SeedDoc {
        id: "house_2",
        text: "The 2nd House represents wealth, family, speech, and values. It shows your relationship with money, material possessions, and self-worth.",
        keywords: &["2nd house", "second house", "wealth", "money", "family", "values"],
        category: Category::Houses,
        tag: Tag::House(2),
    },
    SeedDoc {
        id: "house_7",
        text: "The 7th House represents marriage, partnerships, and relationships. It shows the type of partner you attract and your approach to committed relationships. It is the house of spouse and business partnerships.",
        keywords: &["7th house", "seventh house", "marriage", "partner", "spouse", "relationship", "love"],
        category: Category::Houses,
        tag: Tag::House(7),
    },
    SeedDoc {
        id: "house_10",
        text: "The 10th House represents career, reputation, and public image. It shows your professional life, achievements, and how the world sees your accomplishments. It is the most important house for career success.",
        keywords: &["10th house", "tenth house", "career", "profession", "job", "reputation", "success"],
        category: Category::Houses,
        tag: Tag::House(10),
    },
    // Planets
    SeedDoc {
        id: "sun_meaning",
        text: "The Sun represents soul, ego, vitality, father, and authority. A strong Sun gives leadership, confidence, and success. A weak Sun may cause lack of confidence, health issues, and problems with father.",
        keywords: &["sun", "surya", "soul", "ego", "father", "authority", "confidence", "leader"],
        category: Category::Planets,
        tag: Tag::Planet(Planet::Sun),
    },
    SeedDoc {
        id: "moon_meaning",
        text: "The Moon represents mind, emotions, mother, and mental peace. A strong Moon gives emotional stability, creativity, and intuition. A weak Moon may cause anxiety, mood swings, and mental stress.",
        keywords: &["moon", "chandra", "mind", "emotions", "mother", "mental", "anxiety", "feelings"],
        category: Category::Planets,
        tag: Tag::Planet(Planet::Moon),
    },
    SeedDoc {
        id: "saturn_meaning",
        text: "Saturn represents karma, discipline, delays, hard work, and life lessons. Saturn transits bring challenges that lead to growth. Saturn teaches through restrictions, patience, and perseverance. Sade Sati is a 7.5 year Saturn transit.",
        keywords: &["saturn", "shani", "karma", "discipline", "delay", "work", "sade sati", "challenge"],
        category: Category::Planets,
        tag: Tag::Planet(Planet::Saturn),
    },
    SeedDoc {
        id: "jupiter_meaning",
        text: "Jupiter represents wisdom, expansion, luck, spirituality, and teachers. A strong Jupiter brings prosperity, knowledge, and good fortune. Jupiter is the greatest benefic planet and blesses with children and wealth.",
        keywords: &["jupiter", "guru", "wisdom", "luck", "fortune", "wealth", "spiritual", "teacher"],
        category: Category::Planets,
        tag: Tag::Planet(Planet::Jupiter),
    },
    // General topics
    SeedDoc {
        id: "love_compatibility",
        text: "In Vedic astrology, love and relationship compatibility is analyzed through the 7th house, Venus placement, and Moon sign compatibility. Fire signs (Aries, Leo, Sagittarius) match well with Air signs (Gemini, Libra, Aquarius). Earth signs (Taurus, Virgo, Capricorn) match with Water signs (Cancer, Scorpio, Pisces).",
        keywords: &["love", "compatibility", "relationship", "marriage", "partner", "7th house", "venus"],
        category: Category::General,
        tag: Tag::Topic("love"),
    },
    SeedDoc {
        id: "career_guidance",
        text: "Career in astrology is seen through the 10th house lord, planets in 10th house, and aspects on it. The 6th house shows daily work and service. The 2nd house shows income. Saturn placement strongly influences career discipline and success through hard work.",
        keywords: &["career", "job", "work", "profession", "10th house", "income", "success"],
        category: Category::General,
        tag: Tag::Topic("career"),
    },
    SeedDoc {
        id: "health_astrology",
        text: "Health in astrology is analyzed through the 6th house (disease), 8th house (chronic issues), and 1st house (vitality). Each zodiac sign rules specific body parts. Mars rules blood and energy, Saturn rules bones, Mercury rules nervous system.",
        keywords: &["health", "disease", "body", "wellness", "6th house", "medical"],
        category: Category::General,
        tag: Tag::Topic("health"),
    },
];

/// The fixed knowledge base, in seeding order
pub fn seed_documents() -> Vec<KnowledgeDocument> {
    SEED.iter()
        .map(|seed| {
            let mut doc = KnowledgeDocument::new(
                seed.id,
                seed.text,
                seed.keywords.iter().map(|k| k.to_string()).collect(),
                seed.category,
            );
            match seed.tag {
                Tag::Sign(sign) => doc.sign = Some(sign),
                Tag::House(house) => doc.house = Some(house),
                Tag::Planet(planet) => doc.planet = Some(planet),
                Tag::Topic(topic) => doc.topic = Some(topic.to_string()),
            }
            doc
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_size_and_unique_ids() {
        let docs = seed_documents();
        assert_eq!(docs.len(), 23);

        let ids: HashSet<_> = docs.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids.len(), docs.len());
    }

    #[test]
    fn test_every_sign_has_a_traits_document() {
        let docs = seed_documents();
        for sign in ZodiacSign::ALL {
            assert!(
                docs.iter()
                    .any(|d| d.category == Category::Zodiac && d.sign == Some(sign)),
                "missing traits for {}",
                sign
            );
        }
    }

    #[test]
    fn test_keywords_are_lowercase() {
        for doc in seed_documents() {
            for keyword in &doc.keywords {
                assert_eq!(keyword, &keyword.to_lowercase(), "{}", doc.id);
            }
        }
    }
}
