//! Region-mapped main memory.
//!
//! This module implements the backing store used by the CLI and the test harness. It provides:
//! 1. **Regions:** Fixed 1 MiB windows for text, data, stack, kernel text and kernel data.
//! 2. **Access:** Little-endian word reads and writes through the [`Memory`] trait.
//! 3. **Loading:** Bulk installation of a program image.
//!
//! Addresses outside every region read as zero and drop writes.

use tracing::debug;

use crate::soc::traits::Memory;

/// Size of every region in bytes.
pub const REGION_SIZE: u32 = 0x0010_0000;

/// Start of the user data segment.
pub const DATA_START: u32 = 0x1000_0000;
/// Start of the user text segment; programs load here.
pub const TEXT_START: u32 = 0x0040_0000;
/// Start of the stack region.
pub const STACK_START: u32 = 0x7FF0_0000;
/// Start of the kernel text segment.
pub const KTEXT_START: u32 = 0x8000_0000;
/// Start of the kernel data segment.
pub const KDATA_START: u32 = 0x9000_0000;

/// One contiguous window of byte storage.
#[derive(Debug, Clone)]
struct Region {
    base: u32,
    bytes: Vec<u8>,
}

impl Region {
    fn new(base: u32) -> Self {
        Self {
            base,
            bytes: vec![0; REGION_SIZE as usize],
        }
    }

    /// Byte offset of the word at `addr`, if the whole word lies in this region.
    fn offset(&self, addr: u32) -> Option<usize> {
        let off = addr.checked_sub(self.base)? as usize;
        (off + 4 <= self.bytes.len()).then_some(off)
    }
}

/// Main memory composed of the five standard regions.
#[derive(Debug, Clone)]
pub struct MainMemory {
    regions: Vec<Region>,
}

impl Default for MainMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl MainMemory {
    /// Creates zero-filled memory with the standard region map.
    pub fn new() -> Self {
        Self {
            regions: vec![
                Region::new(DATA_START),
                Region::new(TEXT_START),
                Region::new(STACK_START),
                Region::new(KTEXT_START),
                Region::new(KDATA_START),
            ],
        }
    }

    fn locate(&mut self, addr: u32) -> Option<(&mut Region, usize)> {
        self.regions
            .iter_mut()
            .find_map(|r| r.offset(addr).map(|off| (r, off)))
    }

    /// Writes consecutive words starting at `base`.
    ///
    /// # Arguments
    ///
    /// * `base` - Address of the first word (4-byte aligned).
    /// * `words` - Words to store in order.
    pub fn load_words(&mut self, base: u32, words: &[u32]) {
        let mut addr = base;
        for &word in words {
            self.write_u32(addr, word);
            addr = addr.wrapping_add(4);
        }
    }
}

impl Memory for MainMemory {
    fn read_u32(&mut self, addr: u32) -> u32 {
        match self.locate(addr) {
            Some((region, off)) => {
                let b = &region.bytes[off..off + 4];
                u32::from_le_bytes([b[0], b[1], b[2], b[3]])
            }
            None => 0,
        }
    }

    fn write_u32(&mut self, addr: u32, val: u32) {
        match self.locate(addr) {
            Some((region, off)) => {
                region.bytes[off..off + 4].copy_from_slice(&val.to_le_bytes());
            }
            None => debug!("write to unmapped address {addr:#010x} dropped"),
        }
    }
}
