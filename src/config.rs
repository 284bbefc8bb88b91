// src/config.rs
use crate::args::Args;
use derive_builder::Builder;
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    /// Directory whose entries are listed and matched.
    #[builder(default = "PathBuf::from(\".\")")]
    pub dir: PathBuf,
    /// Requested entry names; empty lists every entry.
    #[builder(default)]
    pub names: Vec<OsString>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            names: vec![],
        }
    }
}

impl Config {
    pub fn is_named(&self) -> bool {
        !self.names.is_empty()
    }
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            names: args.names,
            ..Self::default()
        }
    }
}
