//! Print the OpenAPI document as JSON or YAML.

use std::io::{self, Write};

use clap::Parser;
use registration::ApiDoc;
use utoipa::OpenApi;

/// `openapi-dump` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "openapi-dump",
    about = "Print the registration API OpenAPI document",
    version
)]
struct CliArgs {
    /// Emit YAML instead of pretty-printed JSON.
    #[arg(long)]
    yaml: bool,
}

fn main() -> io::Result<()> {
    let args = CliArgs::parse();
    let doc = ApiDoc::openapi();
    let rendered = if args.yaml {
        doc.to_yaml().map_err(io::Error::other)?
    } else {
        doc.to_pretty_json().map_err(io::Error::other)?
    };
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{rendered}")
}
