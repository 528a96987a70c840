//! Configuration types.
//!
//! [`FileConfig`] mirrors the on-disk TOML file; [`OutputOptions`] holds the
//! values actually used once CLI flags have been layered on top.

pub mod file;
pub mod output;

pub use file::FileConfig;
pub use output::OutputOptions;
