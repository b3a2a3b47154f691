//! Lists the serial ports known to the system, to find where the radio is
//! attached.

fn main() -> anyhow::Result<()> {
    env_logger::init();

    for port in serialport::available_ports()? {
        println!("{}", port.port_name);
    }

    Ok(())
}
