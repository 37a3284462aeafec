use near_sdk::near;

/// Hands out unique, strictly increasing token ids, starting at 0.
#[near(serializers = [borsh])]
pub struct IdentityAllocator {
    next_id: u64,
}

impl IdentityAllocator {
    pub fn new() -> Self {
        Self { next_id: 0 }
    }

    /// Returns the current counter value, then advances it by one. Ids ever
    /// issued form the contiguous range `[0, next_id)`.
    pub fn next(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn issued(&self) -> u64 {
        self.next_id
    }
}

impl Default for IdentityAllocator {
    fn default() -> Self {
        Self::new()
    }
}
