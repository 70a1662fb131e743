use anyhow::Result;
use std::io::Write;

use super::DEMO_TIMER_MINUTES;
use crate::console;

// ============================================================================
// CONTRACTS
// ============================================================================

/// Devices that only switch on and off
pub trait BasicDevice {
    fn turn_on(&self) -> &'static str;
    fn turn_off(&self) -> &'static str;
}

/// Devices that can be programmed with a timer
pub trait ProgrammableDevice: BasicDevice {
    fn set_timer(&self, minutes: u32) -> String;
}

/// Devices that pair over Bluetooth
pub trait BluetoothCapable: BasicDevice {
    fn connect_to_bluetooth(&self) -> &'static str;
}

// ============================================================================
// DEVICES
// ============================================================================

#[derive(Debug, Default, Clone, Copy)]
pub struct Lamp;

impl BasicDevice for Lamp {
    fn turn_on(&self) -> &'static str {
        "Lamp turned on"
    }

    fn turn_off(&self) -> &'static str {
        "Lamp turned off"
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SmartSpeaker;

impl BasicDevice for SmartSpeaker {
    fn turn_on(&self) -> &'static str {
        "Speaker turned on"
    }

    fn turn_off(&self) -> &'static str {
        "Speaker turned off"
    }
}

impl BluetoothCapable for SmartSpeaker {
    fn connect_to_bluetooth(&self) -> &'static str {
        "Connecting to Bluetooth"
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct CoffeeMaker;

impl BasicDevice for CoffeeMaker {
    fn turn_on(&self) -> &'static str {
        "Coffee maker turned on"
    }

    fn turn_off(&self) -> &'static str {
        "Coffee maker turned off"
    }
}

impl ProgrammableDevice for CoffeeMaker {
    fn set_timer(&self, minutes: u32) -> String {
        format!("Coffee maker timer set to {} minutes", minutes)
    }
}

// ============================================================================
// CONSUMERS
// ============================================================================

pub fn basic_device(device: &dyn BasicDevice, out: &mut dyn Write) -> Result<()> {
    console::labelled(out, "BasicDevice", &[device.turn_on(), device.turn_off()])
}

pub fn programmable_device(
    device: &dyn ProgrammableDevice,
    minutes: u32,
    out: &mut dyn Write,
) -> Result<()> {
    let timer = device.set_timer(minutes);
    console::labelled(
        out,
        "ProgrammableDevice",
        &[device.turn_on(), timer.as_str(), device.turn_off()],
    )
}

pub fn bluetooth_device(device: &dyn BluetoothCapable, out: &mut dyn Write) -> Result<()> {
    console::labelled(
        out,
        "BluetoothCapable",
        &[
            device.turn_on(),
            device.turn_off(),
            device.connect_to_bluetooth(),
        ],
    )
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    basic_device(&Lamp, out)?;
    bluetooth_device(&SmartSpeaker, out)?;
    programmable_device(&CoffeeMaker, DEMO_TIMER_MINUTES, out)?;
    Ok(())
}
