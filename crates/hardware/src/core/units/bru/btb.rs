//! Branch Target Buffer (BTB).
//!
//! The BTB is a direct-mapped table that stores the last resolved target of each
//! control-flow instruction. Fetch consults it before the instruction is decoded,
//! so it also has to say whether the slot describes a conditional branch.

/// An entry in the Branch Target Buffer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BtbEntry {
    /// PC of the branch that last wrote this entry.
    pub tag: u32,
    /// The resolved target address.
    pub target: u32,
    /// The target lies inside the program window.
    pub valid: bool,
    /// The branch that wrote this entry is conditional.
    pub conditional: bool,
}

/// Branch Target Buffer structure.
#[derive(Debug, Clone)]
pub struct Btb {
    /// The table of BTB entries.
    table: Vec<BtbEntry>,
}

impl Btb {
    /// Creates a new Branch Target Buffer with the specified size.
    ///
    /// # Arguments
    ///
    /// * `size` - The number of entries in the BTB. Rounded up to a power of 2.
    pub fn new(size: usize) -> Self {
        Self {
            table: vec![BtbEntry::default(); size.max(1).next_power_of_two()],
        }
    }

    /// Calculates the index into the BTB table for a given program counter.
    ///
    /// Shifts the PC right by 2 bits (ignoring instruction alignment) and masks
    /// it against the table size.
    pub fn index(&self, pc: u32) -> usize {
        ((pc >> 2) as usize) & (self.table.len() - 1)
    }

    /// Reads the entry at `idx`.
    pub fn entry(&self, idx: usize) -> BtbEntry {
        self.table[idx & (self.table.len() - 1)]
    }

    /// Overwrites the entry at `idx`.
    pub fn update(&mut self, idx: usize, entry: BtbEntry) {
        let slot = idx & (self.table.len() - 1);
        self.table[slot] = entry;
    }
}
