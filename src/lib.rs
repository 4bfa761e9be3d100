//! KeeLoq rolling-code primitives: the 528-round NLFSR cipher, the
//! manufacturer learning schemes, fix/hop code composition, and a device
//! abstraction for the manufacturer-specific bit layouts built on them.
//!
//! Everything here is pure computation over fixed-width integers — the RF
//! layer, key storage and counter persistence are the caller's. The cipher
//! and learning functions are reentrant; each device owns its counter, so
//! separate instances can be driven from separate threads without locking.
//!
//! KeeLoq is a legacy, publicly-broken cipher. This crate reproduces its
//! third-party firmware behaviour bit-exactly for interoperability and
//! research; it provides no security.
//!
//! ```
//! use keeloq::devices::{KeeloqRemote, Remote};
//! use keeloq::learning::LearningType;
//!
//! let mut remote = KeeloqRemote::new(
//!     0x0123_4567_89AB_CDEF,
//!     LearningType::Normal,
//!     0x0049_6EB5,
//!     2,
//!     1,
//! )
//! .unwrap();
//! let code = remote.key();
//! remote.increment();
//! assert_ne!(remote.key(), code);
//! ```

pub mod bits;
pub mod cipher;
pub mod code;
pub mod devices;
pub mod learning;

use thiserror::Error;

pub use cipher::{decrypt, encrypt, KEELOQ_NLF};
pub use code::{from_key, get_key};
pub use devices::{build, DeviceDescriptor, Remote};
pub use learning::{
    faac_learning, magic_serial_type1_learning, magic_serial_type2_learning,
    magic_serial_type3_learning, magic_xor_type1_learning, normal_learning, secure_learning,
    simple_learning, DecryptedHop, LearningType,
};

/// Device-construction failures. Cipher and learning operations are total
/// and never fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The chosen layout has no pairing for this learning scheme.
    #[error("learning type {0:?} is not supported by this device layout")]
    UnsupportedLearning(LearningType),
    /// Variant tag not present in the catalog.
    #[error("unknown device variant {0:?}")]
    UnknownVariant(String),
}
