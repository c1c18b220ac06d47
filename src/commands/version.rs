use anyhow::Result;

pub fn execute() -> Result<()> {
    println!("shakewatch version {}", env!("CARGO_PKG_VERSION"));
    Ok(())
}
