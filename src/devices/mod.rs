//! Device abstraction for KeeLoq-based remotes.
//!
//! Each manufacturer variant implements [`Remote`]: a `fix`/`hop_raw`/`hop`
//! capability set over an owned rolling counter. The default contract packs
//! `fix` and the encrypted `hop` into the transmitted code via
//! [`crate::code::get_key`]; variants override pieces of the contract as
//! layout policy (constant guard hops, parity-dependent packing, counter step
//! width), never by touching the cipher core.
//!
//! [`build`] constructs a boxed device from a [`DeviceDescriptor`], the shape
//! a caller-owned catalog layer deserializes into. Unknown variant tags are a
//! hard error, not a fallback.

mod an_motors;
mod aprimatic;
mod beninca;
mod dea_mio;
mod faac_slh;
mod hcs101;
mod keeloq;
mod universal;

pub use an_motors::AnMotors;
pub use aprimatic::Aprimatic;
pub use beninca::Beninca;
pub use dea_mio::DeaMio;
pub use faac_slh::FaacSlh;
pub use hcs101::Hcs101;
pub use keeloq::KeeloqRemote;
pub use universal::{Discriminator, Universal};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::code::get_key;
use crate::learning::LearningType;
use crate::Error;

/// A rolling-code remote: static fix, counter-driven hop, composed code.
pub trait Remote: std::fmt::Debug {
    /// Variant name for diagnostics.
    fn name(&self) -> &'static str;

    /// Static part of the transmitted code.
    fn fix(&self) -> u32;

    /// Unencrypted dynamic part.
    fn hop_raw(&self) -> u32;

    /// Encrypted (or for plaintext variants, raw) dynamic part.
    fn hop(&self) -> u32;

    /// Transmitted 64-bit code.
    fn key(&self) -> u64 {
        get_key(self.fix(), self.hop())
    }

    /// Current counter value.
    fn counter(&self) -> u32;

    /// Replace the counter (callers own persistence).
    fn set_counter(&mut self, counter: u32);

    /// Counter advance per press. Variants with multi-lane counters override
    /// this (e.g. AN-Motors steps both byte lanes with 0x101).
    fn counter_step(&self) -> u32 {
        1
    }

    /// Advance the counter by one press.
    fn increment(&mut self) {
        self.increment_by(1);
    }

    /// Advance the counter by `n` presses.
    fn increment_by(&mut self, n: u32) {
        let c = self.counter().wrapping_add(self.counter_step().wrapping_mul(n));
        self.set_counter(c);
    }

    /// Roll the counter back by one press.
    fn decrement(&mut self) {
        self.decrement_by(1);
    }

    /// Roll the counter back by `n` presses.
    fn decrement_by(&mut self, n: u32) {
        let c = self.counter().wrapping_sub(self.counter_step().wrapping_mul(n));
        self.set_counter(c);
    }
}

fn default_counter() -> u32 {
    1
}

/// Catalog-layer description of a device instance.
///
/// `variant` selects the layout; the remaining fields are the per-device
/// inputs. `seed` only matters for secure/FAAC-style variants and `learning`
/// only for variants with a selectable scheme.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceDescriptor {
    pub variant: String,
    #[serde(default)]
    pub mfkey: u64,
    pub serial: u32,
    pub btn: u8,
    #[serde(default = "default_counter")]
    pub counter: u32,
    #[serde(default)]
    pub seed: Option<u32>,
    #[serde(default)]
    pub learning: Option<LearningType>,
}

/// Build a device from a descriptor. Variant tags are matched
/// ASCII-case-insensitively; an unknown tag is an error.
pub fn build(desc: &DeviceDescriptor) -> Result<Box<dyn Remote>, Error> {
    debug!("building device variant {:?}", desc.variant);

    let seed = desc.seed.unwrap_or(0);
    let learning = desc.learning.unwrap_or(LearningType::Simple);

    let device: Box<dyn Remote> = match desc.variant.to_ascii_lowercase().as_str() {
        "keeloq" => Box::new(
            KeeloqRemote::new(desc.mfkey, learning, desc.serial, desc.btn, desc.counter)?
                .with_seed(seed),
        ),
        "an_motors" => Box::new(AnMotors::new(desc.serial, desc.btn, desc.counter)),
        "hcs101" => Box::new(Hcs101::new(desc.serial, desc.btn, desc.counter)),
        "aprimatic" => Box::new(Aprimatic::new(desc.mfkey, desc.serial, desc.btn, desc.counter)),
        "dtm_neo" | "came_space" => Box::new(Universal::new(
            desc.mfkey,
            LearningType::Simple,
            Discriminator::Serial12,
            desc.serial,
            desc.btn,
            desc.counter,
        )?),
        "faac_rc_xt" => Box::new(Universal::new(
            desc.mfkey,
            LearningType::Normal,
            Discriminator::Serial12,
            desc.serial,
            desc.btn,
            desc.counter,
        )?),
        "nice_smilo" => Box::new(Universal::new(
            desc.mfkey,
            LearningType::Simple,
            Discriminator::Serial8,
            desc.serial,
            desc.btn,
            desc.counter,
        )?),
        "centurion" => Box::new(Universal::new(
            desc.mfkey,
            LearningType::Normal,
            Discriminator::Fixed(0x1CE),
            desc.serial,
            desc.btn,
            desc.counter,
        )?),
        "monarch" => Box::new(Universal::new(
            desc.mfkey,
            LearningType::Normal,
            Discriminator::Fixed(0x100),
            desc.serial,
            desc.btn,
            desc.counter,
        )?),
        "beninca" => Box::new(Beninca::new(desc.mfkey, desc.serial, desc.btn, desc.counter)),
        "dea_mio" => Box::new(DeaMio::new(desc.mfkey, desc.serial, desc.btn, desc.counter)),
        "faac_slh" => Box::new(FaacSlh::new(
            desc.mfkey,
            desc.serial,
            seed,
            desc.btn,
            desc.counter,
        )),
        _ => return Err(Error::UnknownVariant(desc.variant.clone())),
    };

    if desc.mfkey == 0 && !matches!(desc.variant.to_ascii_lowercase().as_str(), "an_motors" | "hcs101") {
        warn!("variant {:?} built with zero manufacturer key", desc.variant);
    }

    Ok(device)
}
