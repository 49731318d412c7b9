///! Frequency plan calculations

use crate::{constants::*, errors::*};

/// Phase Frequency Detector' frequency, Hz.
/// f PFD = REF IN / R, with the reference doubler and divide-by-2
/// both disabled and a fixed R = 1.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Fpfd(pub u32);

impl Fpfd {
    /// Calculate the PFD frequency from the reference input.
    /// Bounds-checks REFin and the resulting PFD rate.
    pub fn new(ref_in_hz: u32) -> Result<Self, Error> {
        if !(REF_IN_FREQ_MIN..REF_IN_FREQ_MAX).contains(&ref_in_hz) {
            return Err(Error::InvalidReferenceFrequency);
        }

        let fpfd = ref_in_hz / REF_DIVIDER;
        if fpfd > PFD_FREQ_MAX {
            return Err(Error::InvalidReferenceFrequency);
        }
        Ok(Fpfd(fpfd))
    }
}

/// Divider and feedback settings for one output frequency.
///
/// RF OUT = [INT + (FRAC/MOD)] x (f PFD / 2^rf_divider_select)
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Tuning {
    pub int: u16,
    pub frac: u16,
    pub rf_divider_select: u8,
}

impl Tuning {
    /// Compute the register settings for a desired output frequency.
    ///
    /// The RF divider exponent is the smallest d in 0..=6 that lifts the
    /// VCO to its fundamental band: f_out * 2^d >= 2.2 GHz. Output
    /// frequencies exactly at a band boundary take the lower divider.
    /// FRAC is truncated, not rounded; the actual output frequency can
    /// be up to one channel step (f_PFD / MOD) below the request.
    pub fn new(f_out_hz: u64, fpfd: Fpfd) -> Result<Self, Error> {
        if !(OUT_FREQ_MIN..=OUT_FREQ_MAX).contains(&f_out_hz) {
            return Err(Error::InvalidOutputFrequency);
        }

        let mut vco = f_out_hz;
        let mut rf_divider_select = 0u8;
        while vco < VCO_FREQ_MIN {
            vco *= 2;
            rf_divider_select += 1;
        }

        let fpfd = fpfd.0 as u64;
        let int = vco / fpfd;
        let frac = (((vco as f64 / fpfd as f64) - int as f64) * MODULUS as f64) as u16;

        Ok(Tuning {
            int: int as u16,
            frac,
            rf_divider_select,
        })
    }

    /// VCO frequency implied by these settings for the given output
    pub fn vco_hz(&self, f_out_hz: u64) -> u64 {
        f_out_hz << self.rf_divider_select
    }
}
