use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::ResolvedTitle;
use crate::routes::RouteTable;
use crate::title;

pub fn run(table: &RouteTable, raw_paths: &[String]) -> Result<CmdResult> {
    let resolved = raw_paths
        .iter()
        .map(|raw| {
            let path = title::normalize(raw);
            let resolved = title::resolve(&path, table);
            ResolvedTitle {
                path,
                title: resolved,
            }
        })
        .collect();

    Ok(CmdResult::default().with_resolved(resolved))
}
