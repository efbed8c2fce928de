use std::path::PathBuf;

use marketcheck::{CheckConfig, SchemaSource};

pub(crate) fn run(
    root: PathBuf,
    manifest: PathBuf,
    schema: Option<PathBuf>,
    plugins_dir: PathBuf,
    format: super::Format,
) {
    let config = CheckConfig {
        root,
        manifest,
        schema: schema.map_or(SchemaSource::Builtin, SchemaSource::File),
        plugins_dir,
    };

    let report = match marketcheck::run_checks(&config) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    match format {
        super::Format::Text => println!("{report}"),
        super::Format::Json => match serde_json::to_string_pretty(&report.to_json()) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("error: cannot serialize report: {e}");
                std::process::exit(1);
            }
        },
    }

    std::process::exit(report.exit_code());
}
