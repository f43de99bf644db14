mod debug_report;

use std::io::{self, IsTerminal, Read};
use std::process::exit;

use clap::Parser as _;
use flexi_logger::Logger;
use metartrans::{DEFAULT_ERROR_PREFIX, ParseOptions, translate_remarks_verbose};

/// Translate METAR/TAF remarks into plain English.
#[derive(Debug, clap::Parser)]
#[command(name = "metartrans", version, long_about = None)]
#[command(after_help = "Exit codes:\n  0  Success.\n  1  A remark could not be translated (strict mode).\n  2  Invalid arguments or missing input.")]
struct Cli {
    /// Remarks text. Reads stdin when neither this nor --input is given.
    #[arg(conflicts_with = "input", num_args = 0.., trailing_var_arg = true)]
    text: Vec<String>,

    /// Remarks text, as a single argument.
    #[arg(short, long)]
    input: Option<String>,

    /// Record untranslatable remarks inline instead of failing.
    #[arg(short, long)]
    lenient: bool,

    /// Prefix for failures recorded in lenient mode.
    #[arg(long, default_value = DEFAULT_ERROR_PREFIX)]
    error_prefix: String,

    /// Print the extraction trace and timing.
    #[arg(short, long)]
    trace: bool,

    /// Force ANSI color output.
    #[arg(long, overrides_with = "no_color")]
    color: bool,

    /// Disable ANSI color output.
    #[arg(long, overrides_with = "color")]
    no_color: bool,

    /// Log every extraction to stderr.
    #[arg(long, env = "METARTRANS_DEBUG")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.debug { "debug" } else { "warn" };
    let _logger = match Logger::try_with_env_or_str(level).and_then(|logger| logger.log_to_stderr().start()) {
        Ok(handle) => Some(handle),
        Err(err) => {
            eprintln!("warning: logging disabled: {err}");
            None
        }
    };

    let input = match read_input(&cli) {
        Ok(input) => input,
        Err(err) => {
            eprintln!("{err}");
            exit(2);
        }
    };

    let color = if cli.no_color { false } else { cli.color || io::stdout().is_terminal() };
    let options = ParseOptions::default().strict(!cli.lenient).error_prefix(cli.error_prefix.as_str());

    match translate_remarks_verbose(&input, &options) {
        Ok(run) if cli.trace => debug_report::print_run(&input, &run, color),
        Ok(run) => debug_report::print_translations(&run.translations, color),
        Err(err) => {
            eprintln!("error: {err}");
            exit(1);
        }
    }
}

fn read_input(cli: &Cli) -> Result<String, String> {
    let input = match (&cli.input, cli.text.is_empty()) {
        (Some(value), _) => value.clone(),
        (None, false) => cli.text.join(" "),
        (None, true) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer).map_err(|err| format!("error: failed to read stdin: {err}"))?;
            buffer
        }
    };

    let input = input.trim().to_string();
    if input.is_empty() {
        return Err("error: no input provided (try --help)".to_string());
    }
    Ok(input)
}
