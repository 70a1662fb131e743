use anyhow::Result;
use std::io::Write;

use super::DEMO_TIMER_MINUTES;
use crate::console;

/// Every device must implement every capability
pub trait Device {
    fn turn_on(&self) -> &'static str;
    fn turn_off(&self) -> &'static str;
    fn set_timer(&self, minutes: u32) -> String;
    fn connect_to_bluetooth(&self) -> &'static str;
}

/// A lamp only switches on and off
#[derive(Debug, Default, Clone, Copy)]
pub struct Lamp;

impl Device for Lamp {
    fn turn_on(&self) -> &'static str {
        "Lamp turned on"
    }

    fn turn_off(&self) -> &'static str {
        "Lamp turned off"
    }

    // Forced on the lamp by the contract
    fn set_timer(&self, _minutes: u32) -> String {
        "Setting timer not supported".to_string()
    }

    fn connect_to_bluetooth(&self) -> &'static str {
        "Bluetooth not supported"
    }
}

pub fn operate_device(device: &dyn Device, minutes: u32, out: &mut dyn Write) -> Result<()> {
    let timer = device.set_timer(minutes);
    console::labelled(
        out,
        "Device",
        &[
            device.turn_on(),
            device.turn_off(),
            timer.as_str(),
            device.connect_to_bluetooth(),
        ],
    )
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    operate_device(&Lamp, DEMO_TIMER_MINUTES, out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::captured_lines;

    #[test]
    fn test_lamp_stubs_unsupported_capabilities() {
        let lamp = Lamp;
        assert_eq!(lamp.set_timer(10), "Setting timer not supported");
        assert_eq!(lamp.connect_to_bluetooth(), "Bluetooth not supported");
    }

    #[test]
    fn test_run_output() {
        let mut buf = Vec::new();
        run(&mut buf).unwrap();

        assert_eq!(
            captured_lines(&buf),
            vec![
                "Device",
                "Lamp turned on",
                "Lamp turned off",
                "Setting timer not supported",
                "Bluetooth not supported",
            ]
        );
    }
}
