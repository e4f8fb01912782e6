//! todo tui command implementation.

use crate::error::{Error, Result};

use super::Context;

pub struct TuiOptions {
    pub json: bool,
    pub quiet: bool,
}

pub fn run(ctx: Context, options: TuiOptions) -> Result<()> {
    if options.json {
        return Err(Error::InvalidArgument(
            "the board does not support --json".to_string(),
        ));
    }
    if options.quiet {
        return Err(Error::InvalidArgument(
            "the board does not support --quiet".to_string(),
        ));
    }
    crate::ui::board::run(ctx.store, ctx.config.board)
}
