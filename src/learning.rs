//! KeeLoq key-derivation ("learning") schemes.
//!
//! Each scheme models a distinct historical pairing protocol between a remote
//! and a receiver: the receiver turns the remote's serial (and for the secure
//! and FAAC schemes a previously exchanged seed) plus the root manufacturer
//! key into the per-device key that encrypts the hop. All functions are pure;
//! serials are masked to 28 bits before use. The bit layouts are fixed
//! third-party firmware behaviour and must not be "corrected".
//!
//! `simple_learning` is the odd one out: it is a decode helper that unpacks a
//! received hop under a known key rather than a derivation.

use serde::{Deserialize, Serialize};

use crate::cipher::{decrypt, encrypt};

/// Learning-scheme tag, as carried in a device catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LearningType {
    /// Manufacturer key used directly.
    Simple,
    Normal,
    Secure,
    MagicXorType1,
    Faac,
    MagicSerialType1,
    MagicSerialType2,
    MagicSerialType3,
    /// Placeholder for catalog entries whose scheme is not identified.
    Unknown,
}

/// A hop decrypted under simple learning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecryptedHop {
    /// Button code (bits 31..28).
    pub btn: u8,
    /// Serial fragment (bits 27..16, `serial & 0xFFF`).
    pub serial: u16,
    /// Rolling counter (bits 15..0).
    pub counter: u16,
    /// Full decrypted value.
    pub raw: u32,
}

/// Decrypt a received hop under `key` and unpack button/serial/counter.
pub fn simple_learning(hop_cipher: u32, key: u64) -> DecryptedHop {
    let raw = decrypt(hop_cipher, key);
    DecryptedHop {
        btn: (raw >> 28) as u8,
        serial: ((raw >> 16) & 0xFFF) as u16,
        counter: (raw & 0xFFFF) as u16,
        raw,
    }
}

/// Normal learning: decrypt `serial|0x20000000` and `serial|0x60000000`,
/// second result in the high half.
pub fn normal_learning(serial: u32, mfkey: u64) -> u64 {
    let serial = serial & 0x0FFF_FFFF;
    let k1 = decrypt(serial | 0x2000_0000, mfkey);
    let k2 = decrypt(serial | 0x6000_0000, mfkey);
    ((k2 as u64) << 32) | (k1 as u64)
}

/// Secure learning: decrypt serial and seed independently, serial result in
/// the high half.
pub fn secure_learning(serial: u32, seed: u32, mfkey: u64) -> u64 {
    let serial = serial & 0x0FFF_FFFF;
    let k1 = decrypt(serial, mfkey);
    let k2 = decrypt(seed, mfkey);
    ((k1 as u64) << 32) | (k2 as u64)
}

/// Magic-xor type-1 learning: serial doubled across both halves, xored with
/// the manufacturer key.
pub fn magic_xor_type1_learning(serial: u32, mfkey: u64) -> u64 {
    let serial = (serial & 0x0FFF_FFFF) as u64;
    ((serial << 32) | serial) ^ mfkey
}

/// FAAC SLH learning: encrypt the seed and `(seed_high16 << 16) | 0x544D`,
/// seed result in the high half.
pub fn faac_learning(seed: u32, mfkey: u64) -> u64 {
    let hs = seed >> 16;
    let lsb = (hs << 16) | 0x544D;
    ((encrypt(seed, mfkey) as u64) << 32) | (encrypt(lsb, mfkey) as u64)
}

/// Magic-serial type-1 learning: serial into bits 63..40, byte-sum of the low
/// two serial bytes into bits 39..32, manufacturer key low half kept.
pub fn magic_serial_type1_learning(data: u32, mfkey: u64) -> u64 {
    (mfkey & 0xFFFF_FFFF)
        | ((data as u64) << 40)
        | (((((data & 0xFF).wrapping_add((data >> 8) & 0xFF)) & 0xFF) as u64) << 32)
}

/// Magic-serial type-2 learning: btn+serial bytes copied, low byte first,
/// into the high half of the manufacturer key.
pub fn magic_serial_type2_learning(data: u32, mfkey: u64) -> u64 {
    let p = data.to_le_bytes();
    let mut m = mfkey.to_le_bytes();
    m[7] = p[0];
    m[6] = p[1];
    m[5] = p[2];
    m[4] = p[3];
    u64::from_le_bytes(m)
}

/// Magic-serial type-3 learning: low 24 serial bits replace the low 24 key bits.
pub fn magic_serial_type3_learning(data: u32, mfkey: u64) -> u64 {
    (mfkey & 0xFFFF_FFFF_FF00_0000) | ((data & 0xFF_FFFF) as u64)
}
