//! End-to-end gateway check: greets the radio over the serial line, then
//! pings Google DNS and prints ping's output.

mod common;

use xbee_diag::ping_address;

fn main() -> anyhow::Result<()> {
    let mut device = common::initialize()?;
    device.send_command("Hello XBee")?;
    print!("{}", ping_address("8.8.8.8")?);
    Ok(())
}
