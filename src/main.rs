use std::io::{self, BufRead, Cursor, IsTerminal};
use std::path::Path;

use clap::Parser;
use log::LevelFilter;

use inode_shell::{Shell, ShellError, ShellOptions};

#[derive(Parser)]
#[command(name = "inode-shell")]
#[command(about = "A shell over an in-memory inode tree")]
#[command(version)]
struct Cli {
    /// Execute commands from the argument, one per line
    #[arg(short = 'c')]
    script: Option<String>,

    /// Debug flags: c = commands, i = inodes, @ = everything
    #[arg(short = '@', value_name = "FLAGS")]
    debug_flags: Option<String>,

    /// Initial prompt string
    #[arg(long = "prompt")]
    prompt: Option<String>,

    /// TOML configuration file
    #[arg(long = "config", value_name = "FILE")]
    config: Option<String>,

    /// Output results as JSON (stdout, stderr, exitCode)
    #[arg(long = "json")]
    json: bool,

    /// Script file to execute
    #[arg()]
    script_file: Option<String>,
}

fn init_logging(options: &ShellOptions) {
    let mut builder = env_logger::Builder::from_default_env();
    for target in options.debug_targets() {
        builder.filter_module(target, LevelFilter::Debug);
    }
    builder.init();
}

fn program_name() -> String {
    std::env::args()
        .next()
        .as_deref()
        .and_then(|arg0| Path::new(arg0).file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "inode-shell".to_string())
}

fn load_options(cli: &Cli) -> Result<ShellOptions, ShellError> {
    let mut options = match &cli.config {
        Some(path) => ShellOptions::load(path)?,
        None => ShellOptions::default(),
    };
    if let Some(prompt) = &cli.prompt {
        options.prompt = prompt.clone();
    }
    if let Some(flags) = &cli.debug_flags {
        options.debug_flags = flags.clone();
    }
    Ok(options)
}

/// Line the driver prints once the session ends.
fn status_line(program: &str, status: i32) -> String {
    format!("{}: exit({})", program, status)
}

/// Script given on the command line: `-c` wins over a script file. `None`
/// means read from stdin.
fn script_source(cli: &Cli) -> Result<Option<String>, ShellError> {
    match (&cli.script, &cli.script_file) {
        (Some(script), _) => Ok(Some(script.clone())),
        (None, Some(file)) => Ok(Some(std::fs::read_to_string(file)?)),
        (None, None) => Ok(None),
    }
}

/// Run a whole script with buffered output, collected into one JSON object.
fn run_json(shell: &mut Shell, input: impl BufRead) -> Result<(i32, serde_json::Value), ShellError> {
    shell.set_show_prompt(false);
    shell.set_echo(false);
    let mut out = Vec::new();
    let mut err = Vec::new();
    let status = shell.run(input, &mut out, &mut err)?;
    let report = serde_json::json!({
        "stdout": String::from_utf8_lossy(&out),
        "stderr": String::from_utf8_lossy(&err),
        "exitCode": status,
    });
    Ok((status, report))
}

fn run(cli: Cli) -> Result<i32, ShellError> {
    let options = load_options(&cli)?;
    init_logging(&options);

    let mut shell = Shell::new(&options);

    let script = script_source(&cli)?;

    if cli.json {
        let script = match script {
            Some(script) => script,
            None => io::read_to_string(io::stdin())?,
        };
        let (status, report) = run_json(&mut shell, Cursor::new(script))?;
        println!("{}", report);
        return Ok(status);
    }

    let stdout = io::stdout();
    let stderr = io::stderr();
    let status = match script {
        Some(script) => {
            shell.set_show_prompt(false);
            shell.set_echo(options.echo.unwrap_or(false));
            shell.run(Cursor::new(script), &mut stdout.lock(), &mut stderr.lock())?
        }
        None => {
            let stdin = io::stdin();
            shell.set_echo(options.echo.unwrap_or(!stdin.is_terminal()));
            shell.run(stdin.lock(), &mut stdout.lock(), &mut stderr.lock())?
        }
    };

    println!("{}", status_line(&program_name(), status));
    Ok(status)
}

fn main() {
    let cli = Cli::parse();
    match run(cli) {
        Ok(status) => std::process::exit(status),
        Err(e) => {
            eprintln!("{}: {}", program_name(), e);
            std::process::exit(1);
        }
    }
}
