use chrono::NaiveDate;
use jyotish_core::{UserContext, ZodiacSign};

pub(crate) const GUIDANCE_SYSTEM_PROMPT: &str = "You are Jyotish, a wise and mystical astrologer who provides cosmic guidance with warmth and wisdom. Use the astrological knowledge provided to give accurate, personalized guidance.";

const DEFAULT_SEEKER: &str = "the seeker";

pub(crate) fn guidance_query(sign: ZodiacSign) -> String {
    format!("{} daily guidance horoscope traits", sign)
}

pub(crate) fn daily_guidance_prompt(
    name: Option<&str>,
    sign: ZodiacSign,
    today: NaiveDate,
    context: &str,
) -> String {
    let name = name
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .unwrap_or(DEFAULT_SEEKER);
    format!(
        "Generate a personalized daily guidance message for {name}, who is a {sign}.

Today is {today}.

{context}

Please provide:
1. A warm greeting with their zodiac emoji
2. Today's cosmic energy overview (2-3 sentences)
3. Key focus area for the day
4. A piece of actionable advice
5. An inspirational closing thought

Keep the tone warm, encouraging, and mystical but not overly dramatic. Around 150-200 words.",
        name = name,
        sign = sign,
        today = today.format("%A, %B %-d, %Y"),
        context = context,
    )
}

pub(crate) fn chat_system_prompt(user: &UserContext, context: &str) -> String {
    format!(
        "You are Jyotish, a friendly and knowledgeable AI astrology assistant powered by Vedic astrology wisdom.

USER CONTEXT:
- Name: {name}
- Zodiac Sign: {sign}
- Date of Birth: {dob}
- Place of Birth: {place}

{context}

GUIDELINES:
1. Be warm, mystical, and encouraging
2. Use the RELEVANT ASTROLOGY KNOWLEDGE provided above to give accurate answers
3. Reference their zodiac traits in your answers
4. Keep responses concise (100-200 words)
5. Never provide medical, legal, or financial advice
6. Use occasional emojis for warmth ✨🌙⭐",
        name = user.name,
        sign = user.zodiac_sign,
        dob = user.date_of_birth.format("%Y-%m-%d"),
        place = user.place_of_birth,
        context = context,
    )
}
