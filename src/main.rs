// Command-line front end for the reasoning core.
//
// - `infer`: load facts and rules, forward-chain to fixpoint, print the
//   working memory and answer the file's `?-` queries.
// - `prove`: answer queries by resolution refutation.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use log::LevelFilter;

use logiclite::{
    load_document, parse_fact, read_document, save_facts, Fact, InferenceConfig, ReasoningEngine,
    ResolutionConfig, ResolutionEngine, DEFAULT_MAX_ROUNDS,
};

#[derive(Parser)]
#[command(author, version = env!("CARGO_PKG_VERSION"), about = "Forward chaining and resolution over facts and rules", long_about = None)]
struct Cli {
    /// Log inference steps (repeat for more detail)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Derive every fact the rules allow and print the working memory
    Infer {
        /// Knowledge base file
        file: PathBuf,

        /// Only print facts of this predicate
        #[arg(long)]
        predicate: Option<String>,

        /// Save the working memory, one fact per line
        #[arg(long)]
        save: Option<PathBuf>,

        /// Give up after this many passes
        #[arg(long)]
        max_passes: Option<usize>,
    },

    /// Decide entailment of queries by resolution refutation
    Prove {
        /// Knowledge base file
        file: PathBuf,

        /// Extra query, e.g. "mortal(socrates)"
        #[arg(short, long)]
        query: Vec<String>,

        /// Print the resolution steps of each proof
        #[arg(long)]
        trace: bool,

        /// Give up after this many rounds
        #[arg(long, default_value_t = DEFAULT_MAX_ROUNDS)]
        max_rounds: usize,

        /// Give up once the working clause set grows past this size
        #[arg(long)]
        max_clauses: Option<usize>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Infer { file, predicate, save, max_passes } => {
            let doc = read_document(&file)?;
            let mut engine = ReasoningEngine::with_config(InferenceConfig { max_passes });
            load_document(&mut engine, &doc);

            let derived = engine.infer()?;
            println!("% {derived} facts derived");

            let mut facts = engine.get_facts(predicate.as_deref());
            facts.sort();
            for f in &facts {
                println!("{f}.");
            }

            for q in &doc.queries {
                println!("% ?- {q}: {}", engine.query(q));
            }

            if let Some(out) = save {
                save_facts(out, engine.facts())?;
            }
        }

        Commands::Prove { file, query, trace, max_rounds, max_clauses } => {
            let doc = read_document(&file)?;
            let mut engine = ResolutionEngine::with_config(ResolutionConfig {
                max_rounds: Some(max_rounds),
                max_clauses,
            });
            load_document(&mut engine, &doc);

            let mut queries: Vec<Fact> = doc.queries.clone();
            for q in &query {
                queries.push(parse_fact(q)?);
            }

            for q in &queries {
                let proof = engine.prove(q)?;
                println!("{q}: {} ({} rounds)", proof.entailed, proof.rounds);
                if trace {
                    for step in &proof.steps {
                        println!("    {}  +  {}  =>  {}", step.left, step.right, step.resolvent);
                    }
                }
            }
        }
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let mut builder = pretty_env_logger::formatted_builder();
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    } else {
        builder.filter_level(match verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        });
    }
    builder.init();
}
