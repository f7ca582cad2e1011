use chrono::{NaiveDate, Utc};
use jyotish_chart::daily_horoscope;
use jyotish_core::ZodiacSign;

pub fn run(sign: ZodiacSign, date: Option<NaiveDate>) -> anyhow::Result<()> {
    let date = date.unwrap_or_else(|| Utc::now().date_naive());
    let horoscope = daily_horoscope(sign, date);
    println!("{}", serde_json::to_string_pretty(&horoscope)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_with_explicit_date() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 19);
        assert!(run(ZodiacSign::Gemini, date).is_ok());
    }
}
