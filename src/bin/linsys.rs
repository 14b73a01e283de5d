use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use linsys::debug::{format_f64, format_f64_vec, format_system};
use linsys::{
    generate_system, load_system, read_system, run_solver, write_system, Alg, Kind, LSOpt,
    LogProgress, ProgressMonitor, SolveError, System,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

/// Dense linear system solvers.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a system with one algorithm
    Solve(SolveArgs),

    /// Solve a system with every algorithm and compare the results
    Compare(CompareArgs),

    /// Generate a test system
    Generate(GenerateArgs),
}

#[derive(Args)]
struct SolveArgs {
    /// The input file (standard input if omitted or "-")
    input: Option<PathBuf>,

    /// Solution algorithm: ge, gepp, jacobi or gs.
    #[arg(long)]
    pub alg: Option<Alg>,

    #[command(flatten)]
    pub it: IterArgs,

    /// Print the system before solving.
    #[arg(long, default_value_t = false)]
    pub print: bool,

    /// Log the relative change of every iteration.
    #[arg(long, default_value_t = false)]
    pub progress: bool,
}

#[derive(Args)]
struct CompareArgs {
    /// The input file (standard input if omitted or "-")
    input: Option<PathBuf>,

    #[command(flatten)]
    pub it: IterArgs,
}

#[derive(Args)]
struct IterArgs {
    /// Termination tolerance on the maximum relative change between iterates.
    #[arg(long)]
    pub tol: Option<f64>,

    /// Maximum number of iterations.
    #[arg(long)]
    pub max_it: Option<usize>,

    /// Infinity norm above which an iterate is treated as diverged.
    #[arg(long)]
    pub div_threshold: Option<f64>,
}

#[derive(Args)]
struct GenerateArgs {
    /// System order.
    #[arg(short = 'n', long)]
    pub order: usize,

    /// System kind: random, null-row, proportional, combination, dominant or hilbert.
    #[arg(short, long, default_value_t = Kind::WithSolution)]
    pub kind: Kind,

    /// Upper bound (exclusive) of the random coefficients.
    #[arg(long, default_value_t = 10.0)]
    pub coef_max: f64,

    /// Random seed. Drawn from the OS if omitted.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output file
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_default_env()
        .format_level(false)
        .format_target(false)
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();

    match execute(&cli) {
        Ok(_) => {
            std::process::exit(0);
        }
        Err(err) => {
            eprintln!("error: {}", err);
            std::process::exit(2);
        }
    }
}

fn execute(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Solve(args) => solve(args),
        Commands::Compare(args) => compare(args),
        Commands::Generate(args) => generate(args),
    }
}

fn input_system(input: &Option<PathBuf>) -> Result<System> {
    match input {
        Some(path) if path.as_os_str() != "-" => load_system(path),
        _ => read_system(io::stdin().lock()),
    }
}

fn apply_iter_args(lsopt: &mut LSOpt, args: &IterArgs) {
    if let Some(tol) = args.tol {
        lsopt.tolerance = tol;
    }
    if let Some(max_it) = args.max_it {
        lsopt.max_it(max_it);
    }
    if let Some(div_threshold) = args.div_threshold {
        lsopt.div_threshold = div_threshold;
    }
}

fn solve(args: &SolveArgs) -> Result<()> {
    let sys = input_system(&args.input)?;
    if args.print {
        print!("{}", format_system(&sys));
    }

    let mut lsopt = LSOpt::default();
    if let Some(alg) = args.alg {
        lsopt.alg = alg;
    }
    apply_iter_args(&mut lsopt, &args.it);

    let log_progress = LogProgress {};
    let progress: Option<&dyn ProgressMonitor> = if args.progress {
        Some(&log_progress)
    } else {
        None
    };

    match run_solver(&sys, &lsopt, progress) {
        Ok(report) => {
            println!("x = {}", format_f64_vec(&report.x));
            if report.alg.is_iterative() {
                println!("iterations: {}", report.iterations);
            }
            println!("residual: {}", format_f64(report.residual));
            println!("time: {:?}", report.elapsed);
            Ok(())
        }
        Err(SolveError::Convergence { iterations, last }) => {
            println!("last iterate = {}", format_f64_vec(&last));
            Err(SolveError::Convergence { iterations, last }.into())
        }
        Err(err) => Err(err.into()),
    }
}

fn compare(args: &CompareArgs) -> Result<()> {
    let sys = input_system(&args.input)?;
    let mut lsopt = LSOpt::default();
    apply_iter_args(&mut lsopt, &args.it);

    println!(
        "{:<8} {:>10} {:>16} {:>14}",
        "alg", "its", "residual", "time"
    );
    for alg in Alg::ALL {
        lsopt.alg = alg;
        match run_solver(&sys, &lsopt, None) {
            Ok(report) => println!(
                "{:<8} {:>10} {:>16} {:>14}",
                alg.to_string(),
                report.iterations,
                format_f64(report.residual),
                format!("{:?}", report.elapsed)
            ),
            Err(err) => println!("{:<8} {}", alg.to_string(), err),
        }
    }
    Ok(())
}

fn generate(args: &GenerateArgs) -> Result<()> {
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let sys = generate_system(args.order, args.kind, args.coef_max, &mut rng)?;

    match &args.output {
        Some(path) => write_system(BufWriter::new(File::create(path)?), &sys),
        None => write_system(io::stdout().lock(), &sys),
    }
}
