//! Chandas CLI entry point.

use chandas_runtime::{KARANIYAMETTA_SUTTA, KARANIYAMETTA_TITLE, Repl, ScanConfig, Session};
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    files: Vec<PathBuf>,
    demo: bool,
    metre: Option<String>,
    json: bool,
    no_trace: bool,
    batch_mode: bool,
    verbosity: u8,
    show_help: bool,
    show_version: bool,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-b" | "--batch" => config.batch_mode = true,
            "--demo" => config.demo = true,
            "--json" => config.json = true,
            "--no-trace" => config.no_trace = true,
            "-m" | "--metre" => {
                i += 1;
                if i >= args.len() {
                    return Err("--metre requires a value".into());
                }
                config.metre = Some(args[i].clone());
            }
            "--verbose" => config.verbosity = config.verbosity.saturating_add(1),
            arg if arg.len() > 1 && arg.starts_with('-') && arg[1..].chars().all(|c| c == 'v') => {
                let count = u8::try_from(arg.len() - 1).unwrap_or(u8::MAX);
                config.verbosity = config.verbosity.saturating_add(count);
            }
            arg if arg.starts_with('-') => {
                return Err(format!("unknown option: {arg}").into());
            }
            path => config.files.push(PathBuf::from(path)),
        }
        i += 1;
    }

    Ok(config)
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("chandas {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    chandas_runtime::init_logging(config.verbosity);

    let mut scan_config = ScanConfig::new()
        .with_json(config.json)
        .with_trace(!config.no_trace);
    if let Some(metre) = &config.metre {
        scan_config = scan_config.with_metre(metre);
    }
    let session = Session::with_registry(chandas_metre::MetreRegistry::standard()?, scan_config)?;

    if config.demo {
        if !config.json {
            println!("\x1b[1;36m=== {KARANIYAMETTA_TITLE} ===\x1b[0m\n");
        }
        let reports = session.scan_text(KARANIYAMETTA_SUTTA);
        println!("{}", session.render(&reports)?);
    }

    for file in &config.files {
        let reports = session.scan_file(file)?;
        if !config.json {
            println!("\x1b[1;36m=== {} ===\x1b[0m\n", file.display());
        }
        println!("{}", session.render(&reports)?);
    }

    if config.batch_mode {
        return Ok(());
    }

    let mut repl = Repl::new()?;
    *repl.session_mut() = session;
    if config.demo || !config.files.is_empty() {
        repl = repl.without_banner();
    }

    repl.run()?;
    Ok(())
}

fn print_help() {
    println!(
        "\x1b[1mChandas\x1b[0m - Syllabifier and metre checker for Pāli verse

\x1b[1mUSAGE:\x1b[0m
    chandas [OPTIONS] [FILES...]

\x1b[1mARGUMENTS:\x1b[0m
    [FILES...]    Verse files to scan, one line per verse line

\x1b[1mOPTIONS:\x1b[0m
    -h, --help           Print help information
    -V, --version        Print version information
    -b, --batch          Scan files and exit (no REPL)
        --demo           Scan the bundled {KARANIYAMETTA_TITLE}
    -m, --metre NAME     Report only this metre
        --json           Print reports as JSON
        --no-trace       Omit per-variant alignment traces
    -v, --verbose        Log more (-v debug, -vv trace; RUST_LOG overrides)

\x1b[1mEXAMPLES:\x1b[0m
    chandas                          Start interactive REPL
    chandas --demo -b                Scan the demonstration text and exit
    chandas -b sutta.txt             Scan sutta.txt and exit
    chandas -m \"Old Gīti\" --json -b sutta.txt

\x1b[1mREPL COMMANDS:\x1b[0m
    <verse line>         Scan a line with the next line index
    :metres              List metres
    :metre NAME|all      Restrict reports to one metre
    :index N             Set the next line index
    :trace on|off        Toggle alignment traces
    :help                Show commands
    Ctrl+D               Exit REPL"
    );
}
