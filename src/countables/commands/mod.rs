use crate::config::CountablesConfig;
use crate::model::Countable;
use crate::view::DisplayCountable;
use std::path::PathBuf;

pub mod add;
pub mod config;
pub mod count;
pub mod init;
pub mod list;
pub mod paths;
pub mod remove;
pub mod rename;

#[derive(Debug, Clone)]
pub struct CountablesPaths {
    pub data_dir: PathBuf,
    pub data_file: PathBuf,
}

impl CountablesPaths {
    pub fn new(data_dir: PathBuf, config: &CountablesConfig) -> Self {
        let data_file = data_dir.join(&config.data_file);
        Self {
            data_dir,
            data_file,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected: Vec<Countable>,
    pub listed: Vec<DisplayCountable>,
    pub count: Option<u64>,
    pub paths: Vec<PathBuf>,
    pub config: Option<CountablesConfig>,
    pub messages: Vec<CmdMessage>,
    /// Canonical state changed. The API persists after such results.
    pub mutated: bool,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected(mut self, countable: Countable) -> Self {
        self.affected.push(countable);
        self.mutated = true;
        self
    }

    pub fn with_listed(mut self, rows: Vec<DisplayCountable>) -> Self {
        self.listed = rows;
        self
    }

    pub fn with_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.paths = paths;
        self
    }

    pub fn with_config(mut self, config: CountablesConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// True if any message is an error, i.e. the request was refused.
    pub fn has_errors(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Error)
    }
}
