//! Course data location configuration.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default directory holding `*_facts.json` and `*_rules.md` files.
fn default_dir() -> PathBuf {
    PathBuf::from("data")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DataConfig {
    /// Directory scanned for course facts and rules files.
    #[serde(default = "default_dir")]
    pub dir: PathBuf,

    /// Display name of the course used when a request names an unknown course.
    #[serde(default)]
    pub default_course: String,

    /// Explicit display name -> facts file name registrations. These win over
    /// names discovered from the files themselves.
    #[serde(default)]
    pub courses: BTreeMap<String, String>,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            default_course: String::new(),
            courses: BTreeMap::new(),
        }
    }
}

impl DataConfig {
    /// The default course, if one is configured.
    pub fn default_course(&self) -> Option<&str> {
        let name = self.default_course.trim();
        (!name.is_empty()).then_some(name)
    }
}
