//! Beninca remote: magic-xor-type1 key derivation, empty discriminator field.

use super::Remote;
use crate::cipher::encrypt;
use crate::learning::magic_xor_type1_learning;

/// Beninca gate remote.
#[derive(Debug, Clone)]
pub struct Beninca {
    mfkey: u64,
    serial: u32,
    btn: u8,
    counter: u32,
}

impl Beninca {
    pub fn new(mfkey: u64, serial: u32, btn: u8, counter: u32) -> Self {
        Self { mfkey, serial, btn, counter }
    }
}

impl Remote for Beninca {
    fn name(&self) -> &'static str {
        "Beninca"
    }

    fn fix(&self) -> u32 {
        ((self.btn as u32) << 28) | self.serial
    }

    fn hop_raw(&self) -> u32 {
        ((self.btn as u32) << 28) | (self.counter & 0xFFFF)
    }

    fn hop(&self) -> u32 {
        let key = magic_xor_type1_learning(self.serial, self.mfkey);
        encrypt(self.hop_raw(), key)
    }

    fn counter(&self) -> u32 {
        self.counter
    }

    fn set_counter(&mut self, counter: u32) {
        self.counter = counter;
    }
}
