use anyhow::Result;

use crate::cli::Output;

pub async fn execute(output: &Output) -> Result<()> {
    output.header(crate::PKG_NAME);
    output.key_value("version", crate::VERSION, true);
    output.key_value("description", crate::PKG_DESCRIPTION, false);
    Ok(())
}
