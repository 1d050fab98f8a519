//! Size constants shared across algorithm families

pub mod hash;
