use clap::{Args, Parser, Subcommand};
use crossterm::style::{style, Stylize};
use rand::{thread_rng, Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

use slider_hill_climb::{
    hill_climb, random_restart, random_restart_parallel, ConfigError, Goal, Heuristic,
    SearchConfig, State, Termination,
};

/// Hill climbing for the 3x3 sliding puzzle.
#[derive(Parser, Debug)]
#[command(name = "slider-hill-climb", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    common: CommonOptions,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Climb once from the initial board.
    Climb,

    /// Climb from many shuffled boards and keep the cheapest result.
    Restart(RestartOptions),
}

/// Options shared by every subcommand. Flags override values from `--config`.
#[derive(Args, Debug)]
struct CommonOptions {
    /// TOML file with search settings.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[arg(long, value_enum, global = true)]
    heuristic: Option<Heuristic>,

    /// Climb steps allowed per attempt.
    #[arg(long, global = true)]
    iterations: Option<usize>,

    #[arg(long, global = true)]
    depth_limit: Option<u32>,

    /// Starting board, e.g. "1,2,3,8,6,0,7,5,4".
    #[arg(long, global = true)]
    initial: Option<State>,

    /// Goal board, e.g. "1,2,3,8,0,4,7,6,5".
    #[arg(long, global = true)]
    goal: Option<State>,

    /// Log every accepted step and restart.
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,
}

#[derive(Args, Debug)]
struct RestartOptions {
    #[arg(long)]
    restarts: Option<usize>,

    /// Seed for the shuffles. A random seed is drawn and logged when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Run restarts on all cores. Results match the sequential run for the same seed.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Only restart from boards that can reach the goal.
    #[arg(long, default_value_t = false)]
    reachable: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.common.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", style("error:").red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "slider_hill_climb=debug"
    } else {
        "slider_hill_climb=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<(), ConfigError> {
    let mut config = load_config(&cli.common)?;

    match cli.command {
        Commands::Climb => climb(&config),
        Commands::Restart(options) => {
            if let Some(restarts) = options.restarts {
                config = config.with_restarts(restarts);
            }
            if let Some(seed) = options.seed {
                config = config.with_random_seed(seed);
            }
            if options.parallel {
                config = config.with_parallel(true);
            }
            if options.reachable {
                config = config.with_reachable_restarts(true);
            }
            restart(&config)
        }
    }

    Ok(())
}

fn load_config(common: &CommonOptions) -> Result<SearchConfig, ConfigError> {
    let mut config = match &common.config {
        Some(path) => SearchConfig::load(path)?,
        None => SearchConfig::default(),
    };

    if let Some(heuristic) = common.heuristic {
        config = config.with_heuristic(heuristic);
    }
    if let Some(iterations) = common.iterations {
        config = config.with_iterations(iterations);
    }
    if let Some(depth_limit) = common.depth_limit {
        config = config.with_depth_limit(depth_limit);
    }
    if let Some(initial) = common.initial {
        config = config.with_initial_state(initial);
    }
    if let Some(goal) = common.goal {
        config = config.with_goal_state(goal);
    }

    config.validate()?;
    Ok(config)
}

fn climb(config: &SearchConfig) {
    let goal = config.goal();
    let outcome = hill_climb(config.initial_state, &goal, &config.params());

    println!("{}", heading("INITIAL STATE"));
    println!("{}\n{}\n", outcome.start, "_".repeat(40));

    if !outcome.start.same_parity(goal.state()) {
        println!(
            "{}\n",
            style("The goal cannot be reached from this board by sliding tiles.").yellow()
        );
    }

    match outcome.termination {
        Termination::Converged { iteration } => {
            println!("{:_>40}", format!("Found extrema at iteration no. {}", iteration));
        }
        Termination::DepthLimitReached { iteration } => {
            println!("{:_>40}", format!("Depth limit reached at iteration no. {}", iteration));
        }
        Termination::IterationCapReached => {
            println!("{:_>40}", "Iteration limit reached");
        }
    }

    let moves: Vec<String> = outcome.path.iter().map(ToString::to_string).collect();
    println!("Moves ({}): {}", moves.len(), moves.join(" "));
    if let Some(cost) = outcome.cost {
        println!("Cost of converged state = {}", cost);
    }

    print_result(&outcome.state, &goal);
}

fn restart(config: &SearchConfig) {
    let goal = config.goal();
    let params = config.params();
    let seed = config.random_seed.unwrap_or_else(|| thread_rng().gen());
    info!(event = "seed", seed);

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let outcome = if config.parallel {
        random_restart_parallel(&goal, &params, &mut rng)
    } else {
        random_restart(&goal, &params, &mut rng)
    };

    println!(
        "Restarts: {}, reached goal: {}",
        outcome.restarts, outcome.goal_hits
    );

    match outcome.best {
        Some(best) => {
            println!("Total cost of converged state = {}", best.cost);
            println!("Found by restart #{}", best.restart);
            print_result(&best.state, &goal);
        }
        None => println!("{}", style("No restart accepted a move.").yellow()),
    }
}

fn print_result(state: &State, goal: &Goal) {
    println!("{}", heading("CONVERGED SOLUTION STATE"));
    if goal.is_goal(state) {
        println!("{}\n", style(state).green());
    } else {
        println!("{}\n", style(state).yellow());
    }
    println!("{}", heading("ACTUAL GOAL STATE"));
    println!("{}\n", goal.state());
}

fn heading(title: &str) -> impl std::fmt::Display {
    style(format!("{:_^40}", title)).bold()
}
