use crate::commands::{CmdMessage, CmdResult, CountablesPaths};
use crate::error::Result;
use crate::store::fs::FileGateway;
use crate::store::PersistenceGateway;
use std::fs;

/// Create the data directory and an empty collection file.
///
/// An existing data file is left alone.
pub fn run(paths: &CountablesPaths) -> Result<CmdResult> {
    fs::create_dir_all(&paths.data_dir)?;
    let mut result = CmdResult::default();

    if paths.data_file.exists() {
        result.add_message(CmdMessage::info(format!(
            "Already initialized at {}",
            paths.data_dir.display()
        )));
        return Ok(result);
    }

    FileGateway::new(&paths.data_file).save(&[])?;
    result.add_message(CmdMessage::success(format!(
        "Initialized countables store at {}",
        paths.data_dir.display()
    )));
    Ok(result.with_paths(vec![paths.data_file.clone()]))
}
