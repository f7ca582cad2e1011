pub fn run() -> anyhow::Result<()> {
    println!("jyotish {}", env!("CARGO_PKG_VERSION"));
    println!("Vedic astrology guidance with keyword retrieval and synthetic charts");
    Ok(())
}
