pub fn run() -> anyhow::Result<()> {
    println!("solace {}", env!("CARGO_PKG_VERSION"));
    println!("Supportive chat companion with daily emotion tracking");
    Ok(())
}
