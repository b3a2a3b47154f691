//! Pings the address given as the first argument (Google DNS by default)
//! and prints ping's own output.

use std::env::args;
use xbee_diag::ping_address;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let address = args().nth(1).unwrap_or_else(|| "8.8.8.8".to_string());
    print!("{}", ping_address(&address)?);
    Ok(())
}
