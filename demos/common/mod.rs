//! Initialization and device acquisition that is common to most demos.

use std::env;
use xbee_diag::Device;

pub fn initialize() -> anyhow::Result<Device> {
    env_logger::init();

    let device_path = env::args()
        .nth(1)
        .or_else(|| env::var("XBEE_DEVICE").ok())
        .unwrap_or_else(|| xbee_diag::DEFAULT_PATH.to_string());

    let device = Device::new(device_path, xbee_diag::DEFAULT_BAUD_RATE)?;
    Ok(device)
}
