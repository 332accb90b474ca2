//! Print the OpenAPI document as JSON.

use std::io::Write;

use color_eyre::eyre::Result;
use user_intake::ApiDoc;
use utoipa::OpenApi;

fn main() -> Result<()> {
    let json = ApiDoc::openapi().to_pretty_json()?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{json}")?;
    Ok(())
}
