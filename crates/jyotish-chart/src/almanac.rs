//! Offline almanac: templated daily horoscope and a calendar-indexed panchang

use crate::chart::NAKSHATRAS;
use chrono::{Datelike, NaiveDate};
use jyotish_core::ZodiacSign;
use serde::{Deserialize, Serialize};

const TITHIS: [&str; 16] = [
    "Pratipada",
    "Dwitiya",
    "Tritiya",
    "Chaturthi",
    "Panchami",
    "Shashthi",
    "Saptami",
    "Ashtami",
    "Navami",
    "Dashami",
    "Ekadashi",
    "Dwadashi",
    "Trayodashi",
    "Chaturdashi",
    "Purnima",
    "Amavasya",
];

/// The panchang only cycles through the first ten lunar mansions
const PANCHANG_NAKSHATRAS: usize = 10;

const PANCHANG_YOGAS: [&str; 5] = ["Vishkumbha", "Priti", "Ayushman", "Saubhagya", "Shobhana"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyHoroscope {
    pub sign: ZodiacSign,
    pub date: NaiveDate,
    pub general: String,
    pub love: String,
    pub career: String,
    pub health: String,
    pub lucky_time: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Panchang {
    pub date: NaiveDate,
    pub tithi: String,
    pub nakshatra: String,
    pub yoga: String,
    pub sunrise: String,
    pub sunset: String,
    pub moonrise: String,
    pub rahukaal: String,
}

pub fn daily_horoscope(sign: ZodiacSign, date: NaiveDate) -> DailyHoroscope {
    DailyHoroscope {
        sign,
        date,
        general: format!(
            "Today brings new opportunities for {}. Trust your instincts and embrace the changes coming your way.",
            sign
        ),
        love: "Romance is in the air. Express your feelings openly to strengthen bonds.".into(),
        career: "Professional growth is highlighted. Take initiative on pending projects.".into(),
        health: "Focus on self-care and maintain a balanced routine.".into(),
        lucky_time: "2:00 PM - 4:00 PM".into(),
    }
}

/// Names are picked by day of month modulo each list length
pub fn panchang(date: NaiveDate) -> Panchang {
    let day = date.day() as usize;
    Panchang {
        date,
        tithi: TITHIS[day % TITHIS.len()].into(),
        nakshatra: NAKSHATRAS[day % PANCHANG_NAKSHATRAS].into(),
        yoga: PANCHANG_YOGAS[day % PANCHANG_YOGAS.len()].into(),
        sunrise: "06:45 AM".into(),
        sunset: "06:15 PM".into(),
        moonrise: "08:30 PM".into(),
        rahukaal: "10:30 AM - 12:00 PM".into(),
    }
}
