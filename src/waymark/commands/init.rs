use crate::commands::{CmdMessage, CmdResult, WaymarkPaths};
use crate::config::WaymarkConfig;
use crate::error::Result;
use crate::model::Scope;
use std::fs;

pub fn run(paths: &WaymarkPaths, scope: Scope) -> Result<CmdResult> {
    let dir = paths.scope_dir(scope)?;
    fs::create_dir_all(&dir)?;
    WaymarkConfig::default().save(&dir)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Initialized waymark config at {}",
        dir.display()
    )));
    Ok(result)
}
