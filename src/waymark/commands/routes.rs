use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::routes::RouteTable;

pub fn run(table: &RouteTable) -> Result<CmdResult> {
    let mut result = CmdResult::default().with_routes(table.rules().to_vec());
    if table.is_empty() {
        result.add_message(CmdMessage::info(
            "No routes configured; every title will be derived from the path.",
        ));
    }
    Ok(result)
}
