//! Print the OpenAPI document, as JSON by default or YAML with `--yaml`.

use std::process::ExitCode;

use cafe_directory::doc::ApiDoc;
use utoipa::OpenApi;

fn main() -> ExitCode {
    let doc = ApiDoc::openapi();
    let rendered = if std::env::args().any(|arg| arg == "--yaml") {
        doc.to_yaml().map_err(|err| err.to_string())
    } else {
        doc.to_pretty_json().map_err(|err| err.to_string())
    };

    match rendered {
        Ok(text) => {
            println!("{text}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("failed to render OpenAPI document: {err}");
            ExitCode::FAILURE
        }
    }
}
