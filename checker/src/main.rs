use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use checker::registry::{checker_info, registry};
use checker::types::{Checker, Verdict};
use checker::{CheckingJob, compare, resolve};
use clap::{Args, Parser, Subcommand};
use common::config::AppConfig;
use common::logger::init_logging;
use util::problem_handler::{ComparisonConfig, ProblemHandler, supports_local_testcases};

#[derive(Parser, Debug)]
#[command(name = "jutge-check", version, about = "Compare program output against expected solutions")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compare one output file against one expected solution file
    Compare(CompareArgs),
    /// Check every captured output in a directory against its testcase
    Run(RunArgs),
    /// List the registered checkers
    List,
}

#[derive(Args, Debug)]
struct CompareArgs {
    /// File holding the program's output
    actual: PathBuf,
    /// File holding the expected solution
    expected: PathBuf,
    /// Checker name (std, loose, elastic, elastic2); overrides the handler
    #[arg(long)]
    checker: Option<String>,
    /// Problem handler JSON supplying the checker and delimiters
    #[arg(long)]
    handler: Option<PathBuf>,
    #[command(flatten)]
    delimiters: DelimiterArgs,
}

#[derive(Args, Debug)]
struct RunArgs {
    /// Directory with <name>.inp / <name>.cor testcase pairs
    testcases_dir: PathBuf,
    /// Directory with the captured <name>.out files
    outputs_dir: PathBuf,
    /// Problem handler JSON; defaults to the std handler
    #[arg(long)]
    handler: Option<PathBuf>,
    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

/// Delimiter overrides. `\n`, `\t`, `\r` and `\\` are unescaped.
#[derive(Args, Debug, Default)]
struct DelimiterArgs {
    #[arg(long)]
    separator: Option<String>,
    #[arg(long)]
    separator1: Option<String>,
    #[arg(long)]
    separator2: Option<String>,
    #[arg(long)]
    starting: Option<String>,
    #[arg(long)]
    ending: Option<String>,
}

impl DelimiterArgs {
    fn apply(&self, mut config: ComparisonConfig) -> ComparisonConfig {
        let fields = [
            (&self.separator, &mut config.separator),
            (&self.separator1, &mut config.separator1),
            (&self.separator2, &mut config.separator2),
            (&self.starting, &mut config.starting),
            (&self.ending, &mut config.ending),
        ];
        for (flag, field) in fields {
            if let Some(raw) = flag {
                *field = Some(unescape(raw));
            }
        }
        config
    }
}

fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

fn load_handler(path: Option<&Path>) -> Result<Option<ProblemHandler>> {
    path.map(|p| {
        ProblemHandler::load(p).with_context(|| format!("loading handler {}", p.display()))
    })
    .transpose()
}

fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

/// Program output that is not UTF-8 is a wrong answer, not an error.
fn read_captured(path: &Path) -> Result<Option<String>> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    Ok(String::from_utf8(bytes).ok())
}

/// The `--checker` flag wins, then the handler's own field. `DEFAULT_CHECKER`
/// only applies when no handler was given at all.
fn checker_name(flag: Option<String>, handler: Option<&ProblemHandler>) -> Option<String> {
    if flag.is_some() {
        return flag;
    }
    match handler {
        Some(handler) => handler.checker.clone(),
        None => AppConfig::global().default_checker.clone(),
    }
}

/// 0 when everything passed, 1 on a wrong answer, 2 when checking could not run.
fn exit_status(result: &Result<Verdict>) -> u8 {
    match result {
        Ok(Verdict::Passed) => 0,
        Ok(Verdict::Failed) => 1,
        Err(_) => 2,
    }
}

fn run_compare(args: CompareArgs) -> Result<Verdict> {
    let handler = load_handler(args.handler.as_deref())?;
    let actual = read_captured(&args.actual)?;
    let expected = read_text(&args.expected)?;

    let name = checker_name(args.checker, handler.as_ref());
    let info = resolve(name.as_deref());
    if !info.implemented {
        tracing::warn!(checker = %info.checker, "checker falls back to exact comparison");
    }

    let base = handler
        .as_ref()
        .map(ProblemHandler::comparison_config)
        .unwrap_or_default();
    let config = args.delimiters.apply(base);

    let verdict = match actual {
        Some(actual) => compare(info, &actual, &expected, &config),
        None => {
            tracing::warn!(path = %args.actual.display(), "output is not valid UTF-8");
            Verdict::Failed
        }
    };
    println!("{verdict}");
    Ok(verdict)
}

async fn run_batch(args: RunArgs) -> Result<Verdict> {
    let loaded = load_handler(args.handler.as_deref())?;
    let name = checker_name(None, loaded.as_ref());
    let handler = loaded.unwrap_or_default();
    if !supports_local_testcases(Some(&handler)) {
        bail!(
            "handler '{}' cannot run testcases locally; submit to the judge instead",
            handler.handler
        );
    }

    let job = CheckingJob::from_directories(
        Some(&handler),
        &args.testcases_dir,
        &args.outputs_dir,
    )?
    .with_checker(resolve(name.as_deref()).checker);
    if job.is_empty() {
        bail!("no testcases found in {}", args.testcases_dir.display());
    }

    let report = job.run().await?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for testcase in &report.testcases {
            println!("{:<24} {}", testcase.name, testcase.verdict);
        }
        println!("{} passed ({})", report.summary(), report.checker);
    }

    Ok(Verdict::from_bool(report.all_passed()))
}

fn run_list() {
    for info in registry() {
        let status = if info.implemented { "implemented" } else { "exact fallback" };
        println!("{:<10} {:<16} driver={}", info.checker, status, info.driver);
    }
    let default = checker_name(None, None);
    let default = resolve(default.as_deref());
    if default != checker_info(Checker::Std) {
        println!("default: {}", default.checker);
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let _log_guard = {
        let config = AppConfig::global();
        init_logging(
            &config.log_dir,
            &config.log_file,
            &config.log_level,
            config.log_to_stdout,
        )
    };
    tracing::debug!(command = ?cli.command, "starting {}", AppConfig::global().project_name);

    let result = match cli.command {
        Command::Compare(args) => run_compare(args),
        Command::Run(args) => run_batch(args).await,
        Command::List => {
            run_list();
            return ExitCode::SUCCESS;
        }
    };

    if let Err(err) = &result {
        tracing::error!("{err:#}");
        eprintln!("error: {err:#}");
    }
    ExitCode::from(exit_status(&result))
}
