pub const BASIS_POINTS: u32 = 10_000; // 100%
// A royalty may claim the whole sale amount but never more.
pub const MAX_ROYALTY_BPS: u32 = BASIS_POINTS;
