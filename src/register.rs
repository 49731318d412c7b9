//! ADF4351 registers.
//!
//! Each of the six 32-bit configuration registers is modeled as a
//! named-field struct, serialized to its device word only at transmission
//! time. Bits [2:0] of every word carry the register's own address (C3..C1),
//! which routes the shifted word to the correct on-chip latch; `to_word`
//! ORs the address in unconditionally so field updates can never clobber it.

use crate::constants::*;

/// The dual-modulus prescaler (P/P + 1), along with the INT,
/// FRAC, and MOD values, determines the overall division
/// ratio from the VCO output to the PFD input.
/// When the prescaler is set to 4/5, the maximum RF frequency
/// allowed is 3.6 GHz; above that the prescaler must be 8/9.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Prescaler {
    /// Prescaler = 4/5: INT N MIN = 23
    Pr45,
    /// Prescaler = 8/9: INT N MIN = 75
    Pr89,
}

/// Noise mode. Low spur mode enables dither, randomizing the
/// fractional quantization noise; low noise mode disables it and
/// keeps the charge pump in its optimum region for phase noise.
/// Exactly one of the two mode bits is set at a time.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum NoiseMode {
    LowNoise,
    LowSpur,
}

/// On-chip multiplexer output selection
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Muxout {
    ThreeStateOut,
    Dvdd,
    Dgnd,
    RCntOut,
    NDivOut,
    Alock,
    Dlock,
}

/// Lock detect (LD) pin operation
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LockDetectPin {
    Low,
    DigitalLockDetect,
    Low1,
    High,
}

/// RF output power level.
/// Levels 0..=3 step linearly from -4 dBm to +5 dBm.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PowerLevel {
    Minus4dBm,
    Minus1dBm,
    Plus2dBm,
    Plus5dBm,
}

impl PowerLevel {
    /// Level from the 0..=3 API encoding
    pub fn from_level(level: u8) -> Option<Self> {
        match level {
            0 => Some(PowerLevel::Minus4dBm),
            1 => Some(PowerLevel::Minus1dBm),
            2 => Some(PowerLevel::Plus2dBm),
            3 => Some(PowerLevel::Plus5dBm),
            _ => None,
        }
    }

    /// Nominal output power in dBm
    pub fn dbm(self) -> i8 {
        match self {
            PowerLevel::Minus4dBm => -4,
            PowerLevel::Minus1dBm => -1,
            PowerLevel::Plus2dBm => 2,
            PowerLevel::Plus5dBm => 5,
        }
    }
}

/// Register 0: INT and FRAC division factors.
/// INT (bits [30:15]) is the integer part of the feedback division
/// factor; FRAC (bits [14:3]) is the numerator of the fraction input
/// to the sigma-delta modulator, 0 to MOD - 1.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Reg0 {
    pub int: u16,
    pub frac: u16,
}

impl Reg0 {
    pub fn to_word(&self) -> u32 {
        ((self.int as u32) << 15) | ((self.frac as u32) << 3) | 0
    }
}

/// Register 1: phase word (bits [26:15], 0 to 4095), prescaler select
/// (bit 27) and the 12-bit fractional modulus (bits [14:3]).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Reg1 {
    pub prescaler: Prescaler,
    pub phase: u16,
    pub modulus: u16,
}

impl Reg1 {
    pub fn to_word(&self) -> u32 {
        ((self.prescaler as u32) << 27)
            | ((self.phase as u32) << 15)
            | ((self.modulus as u32) << 3)
            | 1
    }
}

/// Register 2: noise mode (bits 21/20, mutually exclusive), MUXOUT
/// (bits [28:26]), R counter (bits [23:14]) and charge pump current
/// (bits [12:9]).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Reg2 {
    pub noise_mode: NoiseMode,
    pub muxout: Muxout,
    pub r_counter: u16,
    pub cp_current: u8,
}

impl Reg2 {
    pub fn to_word(&self) -> u32 {
        let mode = match self.noise_mode {
            NoiseMode::LowNoise => 1 << 21,
            NoiseMode::LowSpur => 1 << 20,
        };
        mode | ((self.muxout as u32) << 26)
            | ((self.r_counter as u32) << 14)
            | ((self.cp_current as u32) << 9)
            | 2
    }
}

/// Register 3: output power (bits [4:3]) and charge pump settings
/// (bits [11:10]).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Reg3 {
    pub power: PowerLevel,
    pub charge_pump: u8,
}

impl Reg3 {
    pub fn to_word(&self) -> u32 {
        ((self.power as u32) << 3) | ((self.charge_pump as u32) << 10) | 3
    }
}

/// Register 4: RF divider select (bits [22:20], exponent of the
/// divide-by-2^n output divider), band select clock divider
/// (bits [19:12]) and the primary output disable bit (bit 5).
///
/// Bit 5 is inverted logic: set disables the RF output.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Reg4 {
    pub rf_divider_select: u8,
    pub band_select_clock_div: u8,
    pub output_enabled: bool,
}

impl Reg4 {
    pub fn to_word(&self) -> u32 {
        let disable = if self.output_enabled { 0 } else { 1 << 5 };
        ((self.rf_divider_select as u32) << 20)
            | ((self.band_select_clock_div as u32) << 12)
            | disable
            | 4
    }
}

/// Register 5: lock detect pin mode (bits [23:22]).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Reg5 {
    pub lock_detect_pin: LockDetectPin,
}

impl Reg5 {
    pub fn to_word(&self) -> u32 {
        ((self.lock_detect_pin as u32) << 22) | 5
    }
}

/// Full set of config registers, the chip-facing mirror of driver state.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RegisterSet {
    pub r0: Reg0,
    pub r1: Reg1,
    pub r2: Reg2,
    pub r3: Reg3,
    pub r4: Reg4,
    pub r5: Reg5,
}

impl Default for RegisterSet {
    /// Power-up defaults: +5 dBm, output enabled, low-noise mode, phase 0.
    fn default() -> Self {
        RegisterSet {
            r0: Reg0 { int: 0, frac: 0 },
            r1: Reg1 {
                prescaler: Prescaler::Pr89,
                phase: 0,
                modulus: MODULUS,
            },
            r2: Reg2 {
                noise_mode: NoiseMode::LowNoise,
                muxout: Muxout::Dlock,
                r_counter: REF_DIVIDER as u16,
                cp_current: 6,
            },
            r3: Reg3 {
                power: PowerLevel::Plus5dBm,
                charge_pump: 3,
            },
            r4: Reg4 {
                rf_divider_select: 0,
                band_select_clock_div: BAND_SELECT_CLOCK_DIV,
                output_enabled: true,
            },
            r5: Reg5 {
                lock_detect_pin: LockDetectPin::DigitalLockDetect,
            },
        }
    }
}

impl RegisterSet {
    /// Register values in device format, indexed by register address.
    pub fn to_words(&self) -> [u32; 6] {
        [
            self.r0.to_word(),
            self.r1.to_word(),
            self.r2.to_word(),
            self.r3.to_word(),
            self.r4.to_word(),
            self.r5.to_word(),
        ]
    }
}
