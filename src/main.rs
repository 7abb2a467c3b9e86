use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};

use imth_score::deconv::{
    DEFAULT_PERMUTATIONS, DeconvolutionRequest, ExternalCibersort, resolve_signature_matrix,
    run_deconvolution,
};
use imth_score::input::tsv::write_table;
use imth_score::input::{ProportionTable, load_proportions};
use imth_score::logging::init_logging;
use imth_score::pipeline::stage4_report::{Stage4Input, write_reports};
use imth_score::pipeline::{ScoreMode, calculate_imth_score};

const PROPORTIONS_FILE: &str = "proportions.tsv";

#[derive(Debug, Parser)]
#[command(name = "imth-score", version, about = "Immune heterogeneity (ImTH) scoring")]
struct Cli {
    /// More log output (debug level).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
    /// Only warnings and errors.
    #[arg(short, long, global = true)]
    quiet: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score a proportions table.
    Score {
        #[arg(long)]
        input: PathBuf,
        /// aggregate (LM22 -> 14 groups) or direct.
        #[arg(long)]
        mode: String,
        #[arg(long)]
        out: PathBuf,
    },
    /// Estimate cell-type proportions with CIBERSORT.
    Deconvolve(DeconvolveArgs),
    /// Deconvolve, then score the resulting proportions.
    Run {
        #[command(flatten)]
        deconv: DeconvolveArgs,
        #[arg(long, default_value = "aggregate")]
        mode: String,
    },
}

#[derive(Debug, Clone, Args)]
struct DeconvolveArgs {
    /// Bulk expression mixture (genes x samples, tab-delimited).
    #[arg(long)]
    mixture: PathBuf,
    #[arg(long)]
    out: PathBuf,
    /// Signature matrix; defaults to LM22.txt in the resource directory.
    #[arg(long)]
    signature: Option<PathBuf>,
    #[arg(long, env = "IMTH_RESOURCE_DIR", default_value = "resources")]
    resource_dir: PathBuf,
    #[arg(long, default_value_t = DEFAULT_PERMUTATIONS)]
    perm: u32,
    /// Disable quantile normalization.
    #[arg(long)]
    no_qn: bool,
    #[arg(long, default_value = "Rscript")]
    program: PathBuf,
    /// Script handed to the program before the CIBERSORT arguments.
    #[arg(long)]
    script: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);
    if let Err(err) = run(cli.command) {
        tracing::error!("{err}");
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<(), String> {
    match command {
        Command::Score { input, mode, out } => {
            let table = load_proportions(&input).map_err(|e| e.to_string())?;
            score_and_write(&table, &mode, Some(input), &out)
        }
        Command::Deconvolve(args) => {
            let table = deconvolve(&args)?;
            write_proportions(&table, &args.out)
        }
        Command::Run { deconv, mode } => {
            // Reject a bad mode before spending time in the external call.
            mode.parse::<ScoreMode>().map_err(|e| e.to_string())?;
            let table = deconvolve(&deconv)?;
            write_proportions(&table, &deconv.out)?;
            score_and_write(&table, &mode, Some(proportions_path(&deconv.out)), &deconv.out)
        }
    }
}

fn deconvolve(args: &DeconvolveArgs) -> Result<ProportionTable, String> {
    let request = build_request(args);
    let runner = ExternalCibersort::new(args.program.clone(), args.script.clone());
    run_deconvolution(&runner, &request).map_err(|e| e.to_string())
}

fn build_request(args: &DeconvolveArgs) -> DeconvolutionRequest {
    DeconvolutionRequest {
        signature_matrix: resolve_signature_matrix(args.signature.as_deref(), &args.resource_dir),
        mixture: args.mixture.clone(),
        permutations: args.perm,
        quantile_normalize: !args.no_qn,
    }
}

fn write_proportions(table: &ProportionTable, out_dir: &Path) -> Result<(), String> {
    std::fs::create_dir_all(out_dir).map_err(|e| e.to_string())?;
    write_table(table, "Mixture", &proportions_path(out_dir)).map_err(|e| e.to_string())
}

/// Where `deconvolve` and `run` leave the estimated proportions.
fn proportions_path(out_dir: &Path) -> PathBuf {
    out_dir.join(PROPORTIONS_FILE)
}

fn score_and_write(
    table: &ProportionTable,
    mode: &str,
    input_path: Option<PathBuf>,
    out_dir: &Path,
) -> Result<(), String> {
    let report = calculate_imth_score(table, mode).map_err(|e| e.to_string())?;
    let input = Stage4Input {
        report: &report,
        tool_version: env!("CARGO_PKG_VERSION").to_string(),
        input_path,
    };
    write_reports(&input, out_dir).map_err(|e| e.to_string())
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
