use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use payroll_engine::cli::Session;
use payroll_engine::config::load_policy_or_default;
use payroll_engine::error::EngineResult;
use payroll_engine::ingest::ErrorLog;
use payroll_engine::ledger::PayrollLedger;

/// Payroll System - interactive monthly payroll console
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the employee master file
    #[arg(short, long, default_value = "employees.txt")]
    employees: PathBuf,

    /// Path to a YAML tax policy file; built-in defaults apply when omitted
    #[arg(short, long)]
    policy: Option<PathBuf>,

    /// Path to the append-only error log
    #[arg(long, default_value = "errors.txt")]
    error_log: PathBuf,

    /// Directory where per-month output files are written
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,
}

fn run(args: Args) -> EngineResult<()> {
    let policy = load_policy_or_default(args.policy.as_deref())?;
    let ledger = PayrollLedger::load_master_file(&args.employees)?;
    let mut session = Session::new(
        ledger,
        policy,
        ErrorLog::new(args.error_log),
        args.output_dir,
    );
    session.run();
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    if let Err(err) = run(args) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
