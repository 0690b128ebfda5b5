//! Bounded collection of the largest records seen so far
//!
//! The tracker keeps at most `limit` records ordered by size, largest first.
//! Records of equal size keep the order in which they were offered. Once the
//! set is full a candidate must be strictly larger than the current smallest
//! member to get in, so a flood of equal-sized files never displaces anything.

use crate::record::FileRecord;

/// Default number of records retained.
pub const DEFAULT_LIMIT: usize = 100;

#[derive(Debug, Clone)]
pub struct TopNTracker {
    limit: usize,
    records: Vec<FileRecord>,
}

impl TopNTracker {
    pub fn new(limit: usize) -> Self {
        Self {
            limit,
            // Capped so a huge limit does not allocate up front.
            records: Vec::with_capacity(limit.min(1024) + 1),
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Size of the smallest retained record, if any.
    pub fn minimum(&self) -> Option<u64> {
        self.records.last().map(FileRecord::size)
    }

    /// Offer a record for admission. Returns whether it was admitted.
    pub fn offer(&mut self, record: FileRecord) -> bool {
        if self.records.len() >= self.limit {
            match self.minimum() {
                Some(min) if record.size() > min => {}
                _ => return false,
            }
        }

        // Inserting after every record of greater or equal size is what a
        // stable descending sort of the appended record would produce.
        let at = self
            .records
            .partition_point(|existing| existing.size() >= record.size());
        self.records.insert(at, record);
        self.records.truncate(self.limit);
        true
    }

    /// Current contents, largest first.
    pub fn snapshot(&self) -> &[FileRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<FileRecord> {
        self.records
    }
}

impl Default for TopNTracker {
    fn default() -> Self {
        Self::new(DEFAULT_LIMIT)
    }
}
