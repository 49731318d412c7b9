///! Synthesizer controller

use embedded_hal::digital::v2::{InputPin, OutputPin};

use crate::{bus::Bus, config::*, constants::*, errors::*, register::*};

/// ADF4351 controller, one instance per physical chip.
///
/// Owns the register mirror and all chip-facing state; mutation happens
/// only through the setters here, each of which re-serializes the affected
/// register and transmits it before returning.
pub struct Adf4351<B, CE, LD> {
    bus: B,
    pin_ce: CE,
    pin_ld: LD,
    registers: RegisterSet,
    ref_in_hz: u32,
    f_out_hz: u64,
}

impl<B, CE, LD> Adf4351<B, CE, LD>
where
    B: Bus,
    CE: OutputPin,
    LD: InputPin,
{
    /// Creates the controller (unconfigured, no output).
    ///
    /// `bus` - register word transport (see [`crate::bus::ThreeWire`])
    /// `pin_ce` - "chip enable" pin
    /// `pin_ld` - lock detect input, wired to MUXOUT
    pub fn new(bus: B, pin_ce: CE, pin_ld: LD) -> Self {
        Adf4351 {
            bus,
            pin_ce,
            pin_ld,
            registers: RegisterSet::default(),
            ref_in_hz: 0,
            f_out_hz: 0,
        }
    }

    /// Brings the chip up: validates and stores the reference frequency,
    /// asserts CE, drives the bus idle state, writes the baseline register
    /// words (R5 down to R0) and programs a 100 MHz output.
    ///
    /// The chip oscillates at 100 MHz on return.
    pub fn init(&mut self, ref_in_hz: u32) -> Result<(), Error> {
        Fpfd::new(ref_in_hz)?;
        self.ref_in_hz = ref_in_hz;

        self.enable()?;
        self.bus.init()?;

        for w in BOOT_WORDS.iter().rev() {
            self.bus.write_register(*w)?;
        }

        self.set_frequency(100_000_000)
    }

    /// Sets output frequency to the value close to the desired
    /// (FRAC truncation can leave it up to one channel step low).
    ///
    /// Rewrites all six registers and transmits them in descending
    /// order so the set stays self-consistent on the chip. On error
    /// nothing is transmitted and the previous state remains active.
    pub fn set_frequency(&mut self, f_out_hz: u64) -> Result<(), Error> {
        let fpfd = Fpfd::new(self.ref_in_hz)?;
        let t = Tuning::new(f_out_hz, fpfd)?;

        self.registers.r0.int = t.int;
        self.registers.r0.frac = t.frac;
        self.registers.r4.rf_divider_select = t.rf_divider_select;

        self.write_all()?;
        self.f_out_hz = f_out_hz;
        Ok(())
    }

    /// Last successfully programmed frequency, 0 before the first
    /// [`set_frequency`](Adf4351::set_frequency). Not a chip readback.
    pub fn frequency(&self) -> u64 {
        self.f_out_hz
    }

    /// Sets the RF output power, level 0..=3 <-> -4/-1/+2/+5 dBm.
    /// Levels above 3 are rejected, not clamped.
    /// Retransmits register 3 only.
    pub fn set_power_level(&mut self, level: u8) -> Result<(), Error> {
        let power = PowerLevel::from_level(level).ok_or(Error::InvalidPowerLevel)?;
        self.registers.r3.power = power;
        self.bus.write_register(self.registers.r3.to_word())
    }

    /// Enables or disables the primary RF output.
    /// Retransmits register 4 only.
    pub fn enable_output(&mut self, enable: bool) -> Result<(), Error> {
        self.registers.r4.output_enabled = enable;
        self.bus.write_register(self.registers.r4.to_word())
    }

    /// Sets the 12-bit phase word, 0..=4095. Out-of-range values are
    /// rejected, not clamped. Retransmits register 1 only.
    pub fn set_phase(&mut self, phase: u16) -> Result<(), Error> {
        if phase > 4095 {
            return Err(Error::InvalidPhase);
        }
        self.registers.r1.phase = phase;
        self.bus.write_register(self.registers.r1.to_word())
    }

    /// Selects low-noise (true) or low-spur (false) mode.
    /// Retransmits register 2 only.
    pub fn set_low_noise_mode(&mut self, low_noise: bool) -> Result<(), Error> {
        self.registers.r2.noise_mode = if low_noise {
            NoiseMode::LowNoise
        } else {
            NoiseMode::LowSpur
        };
        self.bus.write_register(self.registers.r2.to_word())
    }

    /// Samples the lock detect input. Meaningful because register 2
    /// keeps MUXOUT on digital lock detect.
    pub fn is_locked(&self) -> Result<bool, Error> {
        self.pin_ld.is_high().map_err(|_| Error::Pin)
    }

    /// Powers up the device, depending on the status of the power-down bits.
    pub fn enable(&mut self) -> Result<(), Error> {
        self.pin_ce.set_high().map_err(|_| Error::Pin)
    }

    /// Powers down the device and puts the charge pump into three-state mode.
    pub fn disable(&mut self) -> Result<(), Error> {
        self.pin_ce.set_low().map_err(|_| Error::Pin)
    }

    /// Current serialized register mirror
    pub fn register_words(&self) -> [u32; 6] {
        self.registers.to_words()
    }

    /// Writes all six registers out, R5 down to R0
    fn write_all(&mut self) -> Result<(), Error> {
        for w in self.registers.to_words().iter().rev() {
            self.bus.write_register(*w)?;
        }
        Ok(())
    }
}
