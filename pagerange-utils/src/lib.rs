/// Shared pagination math, range shaping, and memoization helpers.
pub mod pagination;
