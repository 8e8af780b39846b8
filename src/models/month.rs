//! Month code identifier.
//!
//! A month code is the normalized key for one pay period, derived from the
//! base name of the pay file that introduced it (`jan25.txt` becomes
//! `JAN25`). Codes are opaque strings: they are compared for equality and
//! kept in insertion order, never parsed as calendar dates.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// A normalized identifier for one pay period.
///
/// # Example
///
/// ```
/// use payroll_engine::models::MonthCode;
/// use std::path::Path;
///
/// let month = MonthCode::from_file_name(Path::new("data/jan25.txt"));
/// assert_eq!(month.as_str(), "JAN25");
/// assert_eq!(month.output_file_name(), "jan25_output.txt");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MonthCode(String);

impl MonthCode {
    /// Creates a month code from a raw string, trimming and uppercasing it.
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_uppercase())
    }

    /// Derives a month code from a pay file path.
    ///
    /// Only the base name matters: the extension is stripped and directory
    /// components are ignored, so `data/jan25.txt` and `jan25.txt` yield the
    /// same code.
    pub fn from_file_name(path: &Path) -> Self {
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self::new(&stem)
    }

    /// Returns the normalized code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the conventional name of this month's output file,
    /// `<code-lowercased>_output.txt`.
    pub fn output_file_name(&self) -> String {
        format!("{}_output.txt", self.0.to_lowercase())
    }
}

impl fmt::Display for MonthCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // pad() keeps width specifiers working in table layouts.
        f.pad(&self.0)
    }
}
