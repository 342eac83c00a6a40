use crate::commands::{CmdResult, CountablesPaths};
use crate::error::Result;

pub fn run(paths: &CountablesPaths) -> Result<CmdResult> {
    Ok(CmdResult::default().with_paths(vec![paths.data_file.clone()]))
}
