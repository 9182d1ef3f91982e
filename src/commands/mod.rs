//! Command implementations

pub mod check;
pub mod simple;
pub mod summary;

pub use check::{CheckResult, check_guess};
pub use simple::run_simple;
pub use summary::{WordListSummary, summarize_word_list};
