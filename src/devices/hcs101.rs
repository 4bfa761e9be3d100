//! HCS101 remote: fixed-code part, counter transmitted in clear.

use super::Remote;

/// HCS101 remote (no encryption).
#[derive(Debug, Clone)]
pub struct Hcs101 {
    serial: u32,
    btn: u8,
    counter: u32,
}

impl Hcs101 {
    pub fn new(serial: u32, btn: u8, counter: u32) -> Self {
        Self { serial, btn, counter }
    }
}

impl Remote for Hcs101 {
    fn name(&self) -> &'static str {
        "HCS101"
    }

    fn fix(&self) -> u32 {
        ((self.btn as u32) << 28) | self.serial
    }

    fn hop_raw(&self) -> u32 {
        ((self.counter & 0xFFFF) << 16) | (((self.btn as u32) & 0xF) << 12)
    }

    fn hop(&self) -> u32 {
        self.hop_raw()
    }

    fn counter(&self) -> u32 {
        self.counter
    }

    fn set_counter(&mut self, counter: u32) {
        self.counter = counter;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hop_layout_and_code() {
        let remote = Hcs101::new(0x0004_eb5c, 2, 4);
        assert_eq!(remote.fix(), 0x2004_EB5C);
        assert_eq!(remote.hop_raw(), 0x0004_2000);
        assert_eq!(remote.key(), 0x0004_2000_3AD7_2004);
    }
}
