//! Leaderboard aggregation and project status classification.
//!
//! Both operations are read-only and re-derive their result from the
//! current score snapshot on every call — there is no incremental state
//! to invalidate.
//!
//! # Stack ranking
//!
//! Judges calibrate differently: one hands out 3s freely, another never
//! does. Instead of comparing absolute scores across judges, each judge's
//! raw totals are ranked *within that judge's own set* and converted to
//! rank points (1st → 5, 2nd → 4, … 5th → 1, beyond → 0). A project's
//! leaderboard position is the sum of rank points across the judges who
//! scored it, which rewards relative standing and cancels scale bias.

mod leaderboard;
mod status;

pub use leaderboard::{build_leaderboard, LeaderboardRow};
pub use status::{classify_status, ProjectStatus};
