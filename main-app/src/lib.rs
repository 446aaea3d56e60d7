// Copyright 2021-2026 Andrew Conway.
// This file is part of ConcreteIRV.
// ConcreteIRV is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// ConcreteIRV is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with ConcreteIRV.  If not, see <https://www.gnu.org/licenses/>.

//! Helpers shared by the binaries.

use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Send library log events to stderr. RUST_LOG takes precedence; otherwise warnings, or info if verbose.
pub fn init_logging(verbose:bool) {
    let default_level = if verbose { "irv=info" } else { "irv=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_|EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).try_init();
}

/// The default place to put a transcript : votes_strategy.transcript next to the votes file.
/// ```
/// use std::path::Path;
/// assert_eq!(main_app::default_transcript_file(Path::new("dir/mayor.json"),"batch"),Path::new("dir/mayor_batch.transcript"));
/// ```
pub fn default_transcript_file(votes:&Path,strategy:&str) -> PathBuf {
    let votename = votes.file_stem().map(|o|o.to_string_lossy()).unwrap_or_default();
    votes.with_file_name(format!("{}_{}.transcript",votename,strategy))
}
