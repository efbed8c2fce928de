use std::path::PathBuf;

pub(crate) fn run(file: PathBuf) {
    let content = match std::fs::read_to_string(&file) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("marketcheck frontmatter: cannot read {}: {e}", file.display());
            std::process::exit(1);
        }
    };

    match marketcheck::parse_frontmatter(&content) {
        Some(fm) => match serde_json::to_string_pretty(&fm) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("marketcheck frontmatter: {e}");
                std::process::exit(1);
            }
        },
        None => {
            eprintln!("{}: missing YAML frontmatter", file.display());
            std::process::exit(1);
        }
    }
}
