use std::{env, fs, path::PathBuf};

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=OUT_DIR");

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let completions_dir = out_dir.join("completions");

    fs::create_dir_all(&completions_dir).unwrap();

    let mut cmd = clap::Command::new("pressbody")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Extract the body text of Korean news articles")
        .arg(
            clap::arg!(-o --output <FILE> "Output file (default: stdout)")
                .value_name("FILE")
                .value_parser(clap::value_parser!(std::path::PathBuf))
                .global(true),
        )
        .arg(clap::arg!(--json "Print the HTTP response payload instead of plain text").global(true))
        .arg(clap::arg!(-v --verbose "Enable debug logging").global(true))
        .subcommand(
            clap::Command::new("scrape")
                .about("Fetch an article and print its body")
                .arg(clap::arg!(<SOURCE_NAME> "Publisher name as stored upstream"))
                .arg(clap::arg!(<URL> "Article URL"))
                .arg(clap::arg!(--timeout <SECS> "HTTP timeout in seconds (default: none)"))
                .arg(clap::arg!(--"user-agent" <UA> "Custom User-Agent for HTTP requests").value_name("UA")),
        )
        .subcommand(
            clap::Command::new("extract")
                .about("Extract the body from a saved page, or \"-\" for stdin")
                .arg(clap::arg!(<SOURCE_NAME> "Publisher name as stored upstream"))
                .arg(clap::arg!(<INPUT> "Local HTML file or \"-\"")),
        )
        .subcommand(clap::Command::new("publishers").about("List supported publisher names with their selectors"));

    clap_complete::generate_to(clap_complete::shells::Bash, &mut cmd, "pressbody", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Zsh, &mut cmd, "pressbody", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Fish, &mut cmd, "pressbody", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::PowerShell, &mut cmd, "pressbody", &completions_dir).unwrap();

    println!(
        "cargo:warning=Shell completions generated in: {}",
        completions_dir.display()
    );
}
