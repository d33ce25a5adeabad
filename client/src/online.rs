use std::io::{self, Write};

use tictacpro_common::log;

pub const ONLINE_UNAVAILABLE: &str = "Online play is not available yet. Pick another mode.";

/// Online mode has no backend; selecting it only reports that and returns to the menu.
pub fn run_online_game<W: Write>(output: &mut W) -> io::Result<()> {
    log!("Online mode selected; no server to connect to");
    writeln!(output, "{}", ONLINE_UNAVAILABLE)
}
