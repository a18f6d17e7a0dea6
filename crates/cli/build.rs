use std::{env, fs, path::PathBuf};

fn output_args() -> [clap::Arg; 3] {
    [
        clap::arg!(-f --format <FORMAT> "Output format (json, text, toml)")
            .value_name("FORMAT")
            .default_value("json")
            .value_parser(["json", "text", "txt", "toml"]),
        clap::arg!(--pretty "Pretty print JSON output"),
        clap::arg!(-o --output <FILE> "Output file (default: stdout)")
            .value_name("FILE")
            .value_parser(clap::value_parser!(std::path::PathBuf)),
    ]
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=OUT_DIR");

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let completions_dir = out_dir.join("completions");

    fs::create_dir_all(&completions_dir).unwrap();

    let mut cmd = clap::Command::new("wikilens")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Wikilens Contributors")
        .about("Analyze encyclopedia articles and plain text")
        .arg(
            clap::arg!(-c --config <FILE> "Analyzer directive file")
                .global(true)
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(clap::arg!(--timeout <SECS> "HTTP timeout in seconds").global(true).default_value("30"))
        .arg(clap::arg!(-v --verbose "Show progress on stderr").global(true))
        .arg(
            clap::arg!(--completions <SHELL> "Generate shell completion script and exit")
                .value_name("SHELL")
                .value_parser(["bash", "elvish", "fish", "powershell", "zsh"]),
        )
        .subcommand(
            clap::Command::new("analyze")
                .about("Analyze local text from a file or stdin")
                .arg(
                    clap::arg!([INPUT] "Text file, or '-' / nothing for stdin")
                        .value_parser(clap::value_parser!(std::path::PathBuf)),
                )
                .arg(clap::arg!(-t --title <TITLE> "Article title (defaults to the file name)"))
                .args(output_args()),
        )
        .subcommand(
            clap::Command::new("article")
                .about("Fetch an article by title and analyze it")
                .arg(clap::arg!(<TITLE> "Article title"))
                .arg(clap::arg!(-l --lang <LANG> "Encyclopedia language edition").default_value("en"))
                .arg(clap::arg!(--full "Analyze the full article text instead of the summary"))
                .args(output_args()),
        )
        .subcommand(
            clap::Command::new("search")
                .about("Search article titles")
                .arg(clap::arg!(<QUERY> "Search terms"))
                .arg(clap::arg!(-l --lang <LANG> "Encyclopedia language edition").default_value("en"))
                .arg(clap::arg!(--limit <N> "Maximum number of results").default_value("10"))
                .arg(clap::arg!(--json "Print results as JSON")),
        );

    clap_complete::generate_to(clap_complete::shells::Bash, &mut cmd, "wikilens", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Zsh, &mut cmd, "wikilens", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Fish, &mut cmd, "wikilens", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::PowerShell, &mut cmd, "wikilens", &completions_dir).unwrap();

    println!(
        "cargo:warning=Shell completions generated in: {}",
        completions_dir.display()
    );
}
