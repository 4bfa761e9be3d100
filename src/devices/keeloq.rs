//! Generic KeeLoq remote with a selectable learning scheme.
//!
//! The stock HCS-chip layout: `fix = btn << 28 | serial`, hop-raw packs the
//! button, ten fix bits and a 16-bit counter. The learning functions receive
//! the full fix, as the receivers this models do; their 28-bit serial mask
//! strips the button bits for serials up to 24 bits.

use super::Remote;
use crate::cipher::encrypt;
use crate::learning::{
    faac_learning, magic_xor_type1_learning, normal_learning, secure_learning, LearningType,
};
use crate::Error;

/// Stock-layout KeeLoq remote.
#[derive(Debug, Clone)]
pub struct KeeloqRemote {
    mfkey: u64,
    learning: LearningType,
    serial: u32,
    btn: u8,
    counter: u32,
    seed: u32,
}

impl KeeloqRemote {
    /// Create a remote. Learning schemes with no generic-layout pairing
    /// (the magic-serial family, `Unknown`) are rejected.
    pub fn new(
        mfkey: u64,
        learning: LearningType,
        serial: u32,
        btn: u8,
        counter: u32,
    ) -> Result<Self, Error> {
        match learning {
            LearningType::Simple
            | LearningType::Normal
            | LearningType::Secure
            | LearningType::MagicXorType1
            | LearningType::Faac => Ok(Self {
                mfkey,
                learning,
                serial,
                btn,
                counter,
                seed: 0,
            }),
            other => Err(Error::UnsupportedLearning(other)),
        }
    }

    /// Set the seed for secure/FAAC learning (from a prior pairing exchange).
    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    fn derived_key(&self) -> u64 {
        match self.learning {
            LearningType::Simple => self.mfkey,
            LearningType::Normal => normal_learning(self.fix(), self.mfkey),
            LearningType::Secure => secure_learning(self.fix(), self.seed, self.mfkey),
            LearningType::MagicXorType1 => magic_xor_type1_learning(self.fix(), self.mfkey),
            LearningType::Faac => faac_learning(self.seed, self.mfkey),
            // Rejected in new()
            _ => unreachable!(),
        }
    }
}

impl Remote for KeeloqRemote {
    fn name(&self) -> &'static str {
        "KeeLoq"
    }

    fn fix(&self) -> u32 {
        ((self.btn as u32) << 28) | self.serial
    }

    fn hop_raw(&self) -> u32 {
        ((self.btn as u32) << 28) | ((self.fix() & 0x3FF) << 16) | (self.counter & 0xFFFF)
    }

    fn hop(&self) -> u32 {
        encrypt(self.hop_raw(), self.derived_key())
    }

    fn counter(&self) -> u32 {
        self.counter
    }

    fn set_counter(&mut self, counter: u32) {
        self.counter = counter;
    }
}
