//! Offline responses used whenever generation is unavailable or fails

use jyotish_core::{UserContext, ZodiacSign};

pub const FALLBACK_NOTICE: &str =
    "AI guidance requires GROQ_API_KEY. Get free key at console.groq.com";

/// Hand-written daily guidance for `sign`
pub fn curated_guidance(sign: ZodiacSign) -> &'static str {
    match sign {
        ZodiacSign::Aries => "🔥 Greetings, brave Aries! Today's fiery energy aligns with your natural warrior spirit. The cosmos encourages you to channel your passion into productive endeavors. Focus on initiating new projects, but remember to pause and breathe before making important decisions. Your natural leadership will shine through—trust your instincts while remaining open to others' perspectives. May your day be filled with courage and victory!",
        ZodiacSign::Taurus => "🌍 Dear Taurus, the earth beneath you is stable and supportive today. The celestial energies favor patience and persistence. Trust in the slow and steady approach that has always served you well. Focus on nurturing your relationships and appreciating life's simple pleasures. Your unwavering determination will lead to lasting success.",
        ZodiacSign::Gemini => "🌬️ Curious Gemini, your twin nature finds harmony today! Communication flows easily—use this gift to connect deeply with others. Your adaptable mind is your greatest asset. Embrace new ideas and share your knowledge. The stars encourage intellectual pursuits and meaningful conversations.",
        ZodiacSign::Cancer => "🌙 Gentle Cancer, the moon wraps you in protective light today. Honor your emotions and let your intuition guide you. Home and family matters bring joy. Your nurturing nature is needed—offer your care freely. Trust your gut feelings, for they are especially accurate now.",
        ZodiacSign::Leo => "☀️ Magnificent Leo, the sun shines brightly on your path today! Your natural radiance attracts positive attention. Share your warmth generously. Creative expression is favored—let your inner artist shine. Your confidence and generosity will inspire those around you.",
        ZodiacSign::Virgo => "🌿 Thoughtful Virgo, details that others miss will be clear to your discerning eye today. Trust your analytical gifts while remaining open to imperfection. Focus on organization and self-improvement. Your dedication to excellence serves you well.",
        ZodiacSign::Libra => "⚖️ Graceful Libra, balance is your gift, and today it serves you well. Harmony in relationships comes naturally. Trust your sense of justice and create beauty wherever you go. Artistic and romantic energies are heightened.",
        ZodiacSign::Scorpio => "🦂 Intense Scorpio, deep waters reveal hidden truths today. Your transformative power is strong—use it wisely. Intuition is especially sharp; trust those deep insights. The stars support profound emotional and spiritual growth.",
        ZodiacSign::Sagittarius => "🏹 Adventurous Sagittarius, the call to adventure beckons! Expansion awaits through travel, learning, or philosophy. Aim your arrow high. Your optimism is contagious—spread it generously. The universe supports your quest for truth.",
        ZodiacSign::Capricorn => "🏔️ Steadfast Capricorn, your steady climb continues with purpose. Structure and discipline are your allies. The summit is closer than you realize. Balance ambition with self-care. The stars honor your dedication.",
        ZodiacSign::Aquarius => "💫 Visionary Aquarius, innovation flows through you today! Your unique perspective offers solutions others cannot see. Embrace your individuality and inspire positive change. The cosmos supports forward-thinking ideas.",
        ZodiacSign::Pisces => "🌊 Mystical Pisces, creative and spiritual energy embraces you today. Trust your dreams and artistic impulses. Your compassion is a gift—share it freely. Intuition flows strongly; pay attention to synchronicities.",
    }
}

/// Templated chat reply naming the user and their sign
pub fn chat_fallback(user: &UserContext) -> String {
    format!(
        "Namaste, {}! ✨ As a {}, you carry unique cosmic gifts. To enable AI chat, please add your free Groq API key from console.groq.com. In the meantime, explore your zodiac profile and Kundli chart on the dashboard!",
        user.name, user.zodiac_sign
    )
}
