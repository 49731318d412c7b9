///! Bit-banged 3-wire bus (LE / CLK / DATA)

use embedded_hal::{blocking::delay::DelayUs, digital::v2::OutputPin};

use crate::errors::*;

/// Register word transport.
///
/// Injected into the controller so the register computations can be
/// exercised against a recording fake instead of real bus lines.
pub trait Bus {
    /// Drive the bus to its idle state (latch high, clock and data low)
    fn init(&mut self) -> Result<(), Error>;

    /// Shift one 32-bit register word out and latch it
    fn write_register(&mut self, w: u32) -> Result<(), Error>;
}

/// 3-wire bus over plain GPIO lines.
///
/// Data is clocked into the chip's 32-bit shift register on each rising
/// edge of CLK, MSB first. On the rising edge of LE the shifted word is
/// transferred to the latch selected by the three control bits (C3, C2,
/// C1) at the bottom of the word.
///
/// Owns its delay provider; every write is blocking, one microsecond
/// per clock phase, no acknowledgement and no retries.
pub struct ThreeWire<LE, CLK, DATA, D> {
    pin_le: LE,
    pin_clk: CLK,
    pin_data: DATA,
    delay: D,
}

impl<LE, CLK, DATA, D> ThreeWire<LE, CLK, DATA, D>
where
    LE: OutputPin,
    CLK: OutputPin,
    DATA: OutputPin,
    D: DelayUs<u16>,
{
    /// `pin_le` - "latch enable", `pin_clk` - clock, `pin_data` - data
    pub fn new(pin_le: LE, pin_clk: CLK, pin_data: DATA, delay: D) -> Self {
        ThreeWire {
            pin_le,
            pin_clk,
            pin_data,
            delay,
        }
    }

    /// Releases the bus lines and the delay provider
    pub fn release(self) -> (LE, CLK, DATA, D) {
        (self.pin_le, self.pin_clk, self.pin_data, self.delay)
    }
}

impl<LE, CLK, DATA, D> Bus for ThreeWire<LE, CLK, DATA, D>
where
    LE: OutputPin,
    CLK: OutputPin,
    DATA: OutputPin,
    D: DelayUs<u16>,
{
    fn init(&mut self) -> Result<(), Error> {
        self.pin_le.set_high().map_err(|_| Error::Pin)?;
        self.pin_clk.set_low().map_err(|_| Error::Pin)?;
        self.pin_data.set_low().map_err(|_| Error::Pin)
    }

    fn write_register(&mut self, w: u32) -> Result<(), Error> {
        // LE low begins the transfer
        self.pin_le.set_low().map_err(|_| Error::Pin)?;

        for i in (0..32).rev() {
            if (w >> i) & 1 == 1 {
                self.pin_data.set_high().map_err(|_| Error::Pin)?;
            } else {
                self.pin_data.set_low().map_err(|_| Error::Pin)?;
            }

            self.pin_clk.set_high().map_err(|_| Error::Pin)?;
            self.delay.delay_us(1);
            self.pin_clk.set_low().map_err(|_| Error::Pin)?;
            self.delay.delay_us(1);
        }

        // LE high latches the word into the addressed register
        self.pin_le.set_high().map_err(|_| Error::Pin)?;
        self.delay.delay_us(1);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Copy, Clone, PartialEq, Eq)]
    enum Line {
        Le,
        Clk,
        Data,
    }

    /// Fake output pin appending (line, level) transitions to a shared log
    struct LogPin {
        line: Line,
        log: Rc<RefCell<Vec<(Line, bool)>>>,
    }

    impl OutputPin for LogPin {
        type Error = Infallible;

        fn set_low(&mut self) -> Result<(), Infallible> {
            self.log.borrow_mut().push((self.line, false));
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Infallible> {
            self.log.borrow_mut().push((self.line, true));
            Ok(())
        }
    }

    struct NoDelay;

    impl DelayUs<u16> for NoDelay {
        fn delay_us(&mut self, _us: u16) {}
    }

    fn bus_with_log() -> (
        ThreeWire<LogPin, LogPin, LogPin, NoDelay>,
        Rc<RefCell<Vec<(Line, bool)>>>,
    ) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let pin = |line| LogPin {
            line,
            log: Rc::clone(&log),
        };
        let bus = ThreeWire::new(pin(Line::Le), pin(Line::Clk), pin(Line::Data), NoDelay);
        (bus, log)
    }

    /// Replay a transition log, sampling DATA on each CLK rising edge
    fn decode(log: &[(Line, bool)]) -> (u32, usize) {
        let mut word = 0u32;
        let mut bits = 0;
        let mut data = false;
        for &(line, level) in log {
            match line {
                Line::Data => data = level,
                Line::Clk if level => {
                    word = (word << 1) | data as u32;
                    bits += 1;
                }
                _ => {}
            }
        }
        (word, bits)
    }

    #[test]
    fn init_drives_idle_state() {
        let (mut bus, log) = bus_with_log();
        bus.init().unwrap();
        assert_eq!(
            log.borrow().as_slice(),
            &[(Line::Le, true), (Line::Clk, false), (Line::Data, false)]
        );
    }

    #[test]
    fn word_is_shifted_msb_first_in_32_clocks() {
        let (mut bus, log) = bus_with_log();
        bus.write_register(0x8058_0005).unwrap();

        let (word, bits) = decode(&log.borrow());
        assert_eq!(bits, 32);
        assert_eq!(word, 0x8058_0005);
    }

    #[test]
    fn latch_frames_the_transfer() {
        let (mut bus, log) = bus_with_log();
        bus.write_register(0x0000_0004).unwrap();

        let log = log.borrow();
        // first transition pulls LE low, last raises it again
        assert_eq!(log.first(), Some(&(Line::Le, false)));
        assert_eq!(log.last(), Some(&(Line::Le, true)));
        // no LE activity while bits are shifting
        let le_moves = log.iter().filter(|(l, _)| *l == Line::Le).count();
        assert_eq!(le_moves, 2);
    }

    #[test]
    fn clock_returns_low_after_every_bit() {
        let (mut bus, log) = bus_with_log();
        bus.write_register(0xFFFF_FFFF).unwrap();

        let mut clk = false;
        for &(line, level) in log.borrow().iter() {
            if line == Line::Clk {
                assert_ne!(clk, level, "clock edge repeated");
                clk = level;
            }
        }
        assert!(!clk, "clock left high after transfer");
    }
}
