use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::routes::RouteTable;

pub fn run(table: &RouteTable) -> Result<CmdResult> {
    let report = table.lint();
    let mut result = CmdResult::default();

    if report.is_clean() {
        result.add_message(CmdMessage::success("Route table looks healthy."));
        return Ok(result);
    }

    result.add_message(CmdMessage::warning("Route table issues found:"));
    for shadowed in &report.shadowed {
        result.add_message(CmdMessage::info(format!(
            "  - Rule {} ({}) can never fire: rule {} matches its paths first.",
            shadowed.index + 1,
            shadowed.pattern,
            shadowed.by + 1
        )));
    }
    for index in &report.untitled {
        result.add_message(CmdMessage::info(format!(
            "  - Rule {} has an empty title.",
            index + 1
        )));
    }

    Ok(result)
}
