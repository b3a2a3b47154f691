//! Reads stdin line-by-line and transmits each line as a command to the
//! radio.

mod common;

use std::io::{stdin, BufRead};

fn main() -> anyhow::Result<()> {
    let mut device = common::initialize()?;

    let stdin = stdin();
    let handle = stdin.lock();
    for result in handle.lines() {
        let line = result?;
        device.send_command(&line)?;
    }

    Ok(())
}
