// UI prompts and terminal helpers

use colored::Colorize;
use crossterm::{
    cursor, execute,
    terminal::{self, ClearType},
};
use std::io::{self, Write};

/// Block until the user presses Enter
pub fn wait_for_enter(message: &str) -> io::Result<()> {
    println!("{}", message.white().bold());
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(())
}

/// Clear the whole screen and move the cursor home
pub fn clear_screen() -> io::Result<()> {
    let mut stdout = io::stdout();
    execute!(stdout, terminal::Clear(ClearType::All), cursor::MoveTo(0, 0))
}

/// Clear the screen and draw `frame` in its place
pub fn redraw(frame: &str) -> io::Result<()> {
    clear_screen()?;
    let mut stdout = io::stdout();
    stdout.write_all(frame.as_bytes())?;
    stdout.flush()
}

/// Display a dimmed/secondary message
pub fn dimmed(message: &str) {
    println!("{}", message.dimmed());
}
