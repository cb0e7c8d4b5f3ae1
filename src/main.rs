//! Binary entrypoint for the Dossier CLI.
//!
//! Commands:
//! - `init` - write a starter `dossier.toml`
//! - `generate [--category <c>] [--lang <l>] [--seed <n>] [--json]` - print one case
//! - `ask [--category <c>] [--lang <l>] [--seed <n>] <question>` - answer one question
//! - `interrogate [--category <c>] [--lang <l>] [--seed <n>]` - play a case on stdin
//! - `lexicon [--out <path>]` - dump the built-in lexicon as JSON
//!
//! See the library crate docs for module-level details: `dossier::`.
use anyhow::{anyhow, Result};
use clap::{Args, Parser, Subcommand};
use log::{error, info, warn};
use tokio::io::{AsyncBufReadExt, BufReader};

use dossier::config::Config;
use dossier::model::{Findings, Scenario};
use dossier::random;
use dossier::{CaseFile, CaseFileError, CaseStatus, Category, Language, Lexicon};

#[derive(Parser)]
#[command(name = "dossier")]
#[command(about = "Procedural crime cases and a keyword interrogation room")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path (a missing file means defaults)
    #[arg(short, long, default_value = "dossier.toml", global = true)]
    config: String,

    /// Verbose logging (-v, -vv for more; may appear before or after subcommand)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

/// Case selection shared by every command that builds a case.
#[derive(Args)]
struct CaseArgs {
    /// homicide, cyber or theft (defaults to the config)
    #[arg(long)]
    category: Option<Category>,

    /// tr or en (defaults to the config)
    #[arg(short, long = "lang")]
    lang: Option<Language>,

    /// Seed for a reproducible case
    #[arg(short, long)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default configuration file
    Init,
    /// Generate a case and print it
    Generate {
        #[command(flatten)]
        case: CaseArgs,
        /// Print the scenario as JSON
        #[arg(long)]
        json: bool,
    },
    /// Generate a case and answer a single question about it
    Ask {
        #[command(flatten)]
        case: CaseArgs,
        question: String,
    },
    /// Open a case and interrogate on stdin until an accusation is made
    Interrogate {
        #[command(flatten)]
        case: CaseArgs,
    },
    /// Dump the built-in lexicon as JSON, a starting point for custom word pools
    Lexicon {
        #[arg(short, long)]
        out: Option<String>,
    },
}

/// Everything a case-building command needs, resolved from CLI args and config.
struct CaseSetup {
    lexicon: Lexicon,
    category: Category,
    language: Language,
    seed: Option<u64>,
}

impl CaseSetup {
    async fn resolve(config: &Config, args: &CaseArgs) -> Result<Self> {
        Ok(Self {
            lexicon: config.lexicon().await?,
            category: args.category.unwrap_or(config.engine.category),
            language: args.lang.unwrap_or(config.engine.language),
            seed: args.seed.or(config.engine.seed),
        })
    }

    fn rng(&self) -> rand::rngs::StdRng {
        match self.seed {
            Some(seed) => random::seeded(seed),
            None => random::entropy(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Commands::Init = cli.command {
        init_logging(&None, cli.verbose);
        if tokio::fs::try_exists(&cli.config).await.unwrap_or(false) {
            warn!("{} already exists, leaving it untouched", cli.config);
            return Ok(());
        }
        Config::create_default(&cli.config).await?;
        info!("Configuration file created at {}", cli.config);
        return Ok(());
    }

    let config = Config::load_or_default(&cli.config).await?;
    init_logging(&Some(config.clone()), cli.verbose);

    match cli.command {
        Commands::Init => {}
        Commands::Generate { case, json } => {
            let setup = CaseSetup::resolve(&config, &case).await?;
            let scenario =
                dossier::generate_with(&setup.lexicon, setup.category, setup.language, &mut setup.rng())?;
            if json {
                println!("{}", serde_json::to_string_pretty(&scenario)?);
            } else {
                print_case(&scenario);
            }
        }
        Commands::Ask { case, question } => {
            let setup = CaseSetup::resolve(&config, &case).await?;
            if setup.seed.is_none() {
                warn!("no seed given; the question is answered against a fresh random case");
            }
            let scenario =
                dossier::generate_with(&setup.lexicon, setup.category, setup.language, &mut setup.rng())?;
            println!("{}", dossier::answer_question(&scenario, &question, setup.language));
        }
        Commands::Interrogate { case } => {
            let setup = CaseSetup::resolve(&config, &case).await?;
            let mut rng = setup.rng();
            let scenario =
                dossier::generate_with(&setup.lexicon, setup.category, setup.language, &mut rng)?;
            let case = CaseFile::open(scenario, setup.language, &config.interrogation, &mut rng);
            interrogate(case).await?;
        }
        Commands::Lexicon { out } => {
            let json = Lexicon::builtin()?.to_json_pretty()?;
            match out {
                Some(path) => {
                    tokio::fs::write(&path, json)
                        .await
                        .map_err(|e| anyhow!("Failed to write lexicon file {}: {}", path, e))?;
                    info!("Built-in lexicon written to {}", path);
                }
                None => println!("{}", json),
            }
        }
    }

    Ok(())
}

async fn interrogate(mut case: CaseFile) -> Result<()> {
    if case.red_notice {
        println!("*** RED NOTICE ***");
    }
    println!("[{}] {}", case.category, case.title);
    print_case(&case.scenario);
    println!();
    println!(
        "Ask up to {} questions. Type 'accuse <id>' to close the case, 'quit' to leave.",
        case.max_questions
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
            break;
        }
        if let Some(rest) = strip_prefix_ignore_case(line, "accuse ") {
            let Ok(id) = rest.trim().parse::<u8>() else {
                println!("Usage: accuse <suspect id>");
                continue;
            };
            match case.accuse(id) {
                Ok(CaseStatus::SolvedWin) => println!("Case closed. The culprit is in custody."),
                Ok(_) => {
                    let culprit = case
                        .scenario
                        .guilty_suspect()
                        .map(|s| s.name.as_str())
                        .unwrap_or("unknown");
                    println!("Wrong suspect. The culprit was {}.", culprit);
                }
                Err(e) => println!("{}", e),
            }
            if !case.is_active() {
                break;
            }
            continue;
        }
        match case.ask(line) {
            Ok(answer) => {
                println!("{}", answer);
                println!("({} questions left)", case.questions_remaining());
            }
            Err(CaseFileError::QuotaExhausted(_)) => {
                println!("No questions left. Make your accusation: accuse <id>");
            }
            Err(e) => {
                error!("case {}: {}", case.id, e);
                break;
            }
        }
    }
    info!(
        "case {} ended {:?} after {} questions",
        case.id, case.status, case.questions_used
    );
    Ok(())
}

fn strip_prefix_ignore_case<'a>(line: &'a str, prefix: &str) -> Option<&'a str> {
    let head = line.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix).then(|| &line[prefix.len()..])
}

fn print_case(s: &Scenario) {
    println!("{}", s.intro);
    println!();
    println!(
        "Victim: {} ({}), {}, {}",
        s.victim.name, s.victim.age, s.victim.job, s.victim.personality
    );
    println!("Location: {}, {}", s.location_name, s.city);
    println!("Scene: {} [{}]", s.crime_scene.description, s.crime_scene.time);
    println!();
    println!("Suspects:");
    for suspect in &s.suspects {
        println!("  {}. {} ({})", suspect.id, suspect.name, suspect.relation);
    }
    println!();
    match &s.findings {
        Findings::Autopsy(report) => {
            println!("Time of death: {}", report.time_of_death);
            println!("Toxicology: {}", report.toxicology);
            println!("Wounds: {}", report.wounds);
            println!("Notes: {}", report.notes);
        }
        Findings::ServerLogs(logs) => {
            for log in logs {
                println!(
                    "  {} {:<15} {:?} {}",
                    log.timestamp, log.ip, log.status, log.action
                );
            }
        }
        Findings::Surveillance(frames) => {
            for frame in frames {
                println!("  {} {}: {}", frame.time, frame.camera, frame.observation);
            }
        }
    }
    println!();
    println!("Clues:");
    for clue in &s.clues {
        println!("  - {}", clue);
    }
    println!();
    println!("Map:");
    for point in &s.map_points {
        println!(
            "  {} ({:.0},{:.0}) {}: {}",
            point.id, point.x, point.y, point.label, point.description
        );
    }
}

fn init_logging(config: &Option<Config>, verbosity: u8) {
    use std::io::Write;
    let mut builder = env_logger::Builder::new();
    // CLI verbosity wins over the configured level
    let configured = config
        .as_ref()
        .and_then(|cfg| cfg.logging.level.parse::<log::LevelFilter>().ok())
        .unwrap_or(log::LevelFilter::Info);
    let base_level = match verbosity {
        0 => configured,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    builder.filter_level(base_level);

    let log_file = config
        .as_ref()
        .and_then(|cfg| cfg.logging.file.as_ref())
        .and_then(|path| {
            std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .ok()
        });

    if let Some(f) = log_file {
        let write_mutex = std::sync::Arc::new(std::sync::Mutex::new(f));
        // Interactive runs also echo to the console
        let is_tty = atty::is(atty::Stream::Stderr);
        builder.format(move |fmt, record| {
            let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
            let line = format!("{} [{}] {}", ts, record.level(), record.args());
            if let Ok(mut guard) = write_mutex.lock() {
                let _ = writeln!(guard, "{}", line);
            }
            if is_tty {
                writeln!(fmt, "{}", line)
            } else {
                Ok(())
            }
        });
    } else {
        builder.format(|fmt, record| {
            let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
            writeln!(fmt, "{} [{}] {}", ts, record.level(), record.args())
        });
    }
    let _ = builder.try_init();
}
