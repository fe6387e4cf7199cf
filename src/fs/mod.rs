//! Filesystem module.
//!
//! Provides:
//! - Recursive wordlist discovery
//! - Whole-file reads and writes with path-aware errors
//! - Backup copies taken before any rewrite

pub mod backup;
pub mod discover;
pub mod wordlist;

pub use backup::create_backup;
pub use discover::find_wordlists;
pub use wordlist::{read_wordlist, write_wordlist};
