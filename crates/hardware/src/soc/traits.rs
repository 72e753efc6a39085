//! Memory seam consumed by the pipeline core.
//!
//! The core never touches storage directly. Fetch reads instruction words and the
//! memory stage reads or read-modify-writes data words, always on word-aligned
//! addresses (the core masks the low two bits itself).

/// Word-addressed backing store.
///
/// Implementations decide what lies behind an address; unmapped addresses should
/// read as zero and ignore writes rather than fail, since the core has no fault path.
pub trait Memory {
    /// Reads the little-endian word at a 4-byte-aligned address.
    fn read_u32(&mut self, addr: u32) -> u32;

    /// Writes a little-endian word at a 4-byte-aligned address.
    fn write_u32(&mut self, addr: u32, val: u32);
}

impl<M: Memory + ?Sized> Memory for Box<M> {
    fn read_u32(&mut self, addr: u32) -> u32 {
        (**self).read_u32(addr)
    }

    fn write_u32(&mut self, addr: u32, val: u32) {
        (**self).write_u32(addr, val);
    }
}
