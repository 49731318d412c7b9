#![cfg_attr(not(test), no_std)]

///! (ADF4351)[https://www.analog.com/en/products/adf4351.html] driver.
///! Bit-banged 3-wire bus (LE/CLK/DATA) plus CE, no SPI peripheral required.

pub mod constants;
pub mod register;
pub mod errors;
pub mod config;
pub mod bus;
pub mod device;
