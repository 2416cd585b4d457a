//! Print the users API OpenAPI document as pretty JSON on stdout.

use users_api::ApiDoc;
use utoipa::OpenApi;

#[allow(clippy::print_stdout, reason = "the document is the program output")]
fn main() -> Result<(), serde_json::Error> {
    let document = ApiDoc::openapi().to_pretty_json()?;
    println!("{document}");
    Ok(())
}
