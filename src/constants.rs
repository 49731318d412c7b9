//! Constants

/// Minimum allowed REFin frequency
pub const REF_IN_FREQ_MIN: u32 = 10_000_000;

/// Maximum allowed REFin frequency
pub const REF_IN_FREQ_MAX: u32 = 250_000_000;

/// Max Phase Detector Frequency.
/// Absolute max (Integer-N, band select disabled), just a sanity check.
pub const PFD_FREQ_MAX: u32 = 90_000_000;

/// Fundamental VCO mode (before dividers), min frequency
pub const VCO_FREQ_MIN: u64 = 2_200_000_000;

/// Fundamental VCO mode (before dividers), max frequency
pub const VCO_FREQ_MAX: u64 = 4_400_000_000;

/// Minimum allowed output frequency
pub const OUT_FREQ_MIN: u64 = 35_000_000;

/// Maximum allowed output frequency (VCO output, no divider)
pub const OUT_FREQ_MAX: u64 = VCO_FREQ_MAX;

/// Fixed reference division factor (R counter)
pub const REF_DIVIDER: u32 = 1;

/// Fixed FRAC-N modulus
pub const MODULUS: u16 = 1000;

/// Band select logic clock divider, suitable for most applications
pub const BAND_SELECT_CLOCK_DIV: u8 = 200;

/// Baseline register words written once at power-up, before the first
/// frequency program. A safe 88x multiplication against a 25 MHz reference.
///
/// When power is first applied to the ADF4351, the part requires
/// six writes (one each to R5, R4, R3, R2, R1, and R0) for the output
/// to become active.
pub const BOOT_WORDS: [u32; 6] = [
    0x0058_0000, // R0: INT/FRAC
    0x0800_8011, // R1: phase, prescaler 8/9, MOD
    0x0000_4E42, // R2: low-noise mode, R=1
    0x0000_04B3, // R3: output power +5dBm
    0x0080_0024, // R4: RF divider, band select clock divider
    0x0058_0005, // R5: LD pin mode = digital lock detect
];
