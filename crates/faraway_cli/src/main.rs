//! Terminal entry point for the Faraway packing list.
//!
//! # Responsibility
//! - Wire the store, the confirmation prompt, and the command loop together.
//! - Initialize logging when the host asks for it via `FARAWAY_LOG_DIR`.

mod app;
mod confirm;

use app::{App, Outcome};
use confirm::StdinConfirm;
use faraway_core::{core_version, default_log_level, init_logging, ItemStore};
use log::info;
use std::io::{self, Write};

fn main() -> io::Result<()> {
    if let Ok(log_dir) = std::env::var("FARAWAY_LOG_DIR") {
        if let Err(err) = init_logging(default_log_level(), &log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }
    info!(
        "event=app_start module=cli status=ok version={}",
        core_version()
    );

    let mut app = App::new(ItemStore::new(), StdinConfirm);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "Far Away, a packing list (v{})", core_version())?;
    writeln!(out, "Type `help` for commands.")?;
    app.render(&mut out)?;

    let stdin = io::stdin();
    loop {
        write!(out, "> ")?;
        out.flush()?;

        let mut line = String::new();
        if stdin.read_line(&mut line)? == 0 {
            break;
        }
        match app.handle_line(&line, &mut out)? {
            Outcome::Quit => break,
            Outcome::Continue => app.render(&mut out)?,
        }
    }

    info!("event=app_exit module=cli status=ok");
    Ok(())
}
