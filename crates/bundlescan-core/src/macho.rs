//! Mach-O magic-number detection.
//!
//! Only the first four bytes of a file are inspected. See the `mach_header`
//! and `fat_header` definitions in `<mach-o/loader.h>` and `<mach-o/fat.h>`.

/// Number of header bytes the classifier looks at.
pub const MAGIC_LEN: usize = 4;

/// Thin Mach-O magic, 32-bit and 64-bit, both byte orders.
pub const MACHO_MAGIC: [u32; 4] = [
    // 32-bit
    0xfeed_face,
    0xcefa_edfe,
    // 64-bit
    0xfeed_facf,
    0xcffa_edfe,
];

/// Universal (fat) binary magic, both byte orders.
pub const MACHO_UNIVERSAL_MAGIC: [u32; 2] = [0xcafe_babe, 0xbeba_feca];

/// Read the first four bytes as a little-endian `u32`.
///
/// Returns `None` when fewer than four bytes are available.
pub fn read_magic(bytes: &[u8]) -> Option<u32> {
    let head: [u8; MAGIC_LEN] = bytes.get(..MAGIC_LEN)?.try_into().ok()?;
    Some(u32::from_le_bytes(head))
}

/// Check whether `bytes` starts with a thin Mach-O magic number.
pub fn is_macho(bytes: &[u8]) -> bool {
    read_magic(bytes).is_some_and(|magic| MACHO_MAGIC.contains(&magic))
}

/// Check whether `bytes` starts with a universal binary magic number.
pub fn is_universal_macho(bytes: &[u8]) -> bool {
    read_magic(bytes).is_some_and(|magic| MACHO_UNIVERSAL_MAGIC.contains(&magic))
}
