use anyhow::Result;

use crate::ui;

pub fn execute() -> Result<()> {
    print!("{}", ui::full_legend());
    Ok(())
}
