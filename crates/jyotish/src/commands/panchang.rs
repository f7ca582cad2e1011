use chrono::{NaiveDate, Utc};

pub fn run(date: Option<NaiveDate>) -> anyhow::Result<()> {
    let date = date.unwrap_or_else(|| Utc::now().date_naive());
    let panchang = jyotish_chart::panchang(date);
    println!("{}", serde_json::to_string_pretty(&panchang)?);
    Ok(())
}
