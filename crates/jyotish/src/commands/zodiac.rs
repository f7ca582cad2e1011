use chrono::NaiveDate;
use jyotish_core::ZodiacSign;

pub fn run(sign: Option<ZodiacSign>, dob: Option<NaiveDate>) -> anyhow::Result<()> {
    let sign = match (sign, dob) {
        (Some(sign), _) => sign,
        (None, Some(dob)) => ZodiacSign::from_birth_date(dob),
        (None, None) => anyhow::bail!("Pass a sign or --dob"),
    };
    println!("{}", serde_json::to_string_pretty(&profile_json(sign)?)?);
    Ok(())
}

fn profile_json(sign: ZodiacSign) -> anyhow::Result<serde_json::Value> {
    let mut value = serde_json::to_value(sign.profile())?;
    value["sign"] = serde_json::to_value(sign)?;
    Ok(value)
}
