//! Command-line front end for the Ge'ez verb engine.
//!
//! Usage:
//!   morph_engine expand ቀተለ
//!   morph_engine analyze ያስተቀትል
//!   morph_engine generate ቀተለ --stem causative --tense imperfective --subject 3ms
//!   morph_engine repl

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use crossterm::style::Stylize;
use crossterm::{cursor::MoveTo, execute, terminal::{Clear, ClearType}};
use morph_core::persistence::{save_to_disk, ExportFormat};
use morph_core::{
    AnalysisCandidate, Cell, ConjugatedForm, EngineConfig, MorphEngine, ParadigmTable, RootTree,
    Stem, SubjectAgreement, Tense,
};
use std::io::{stdin, stdout, Write};
use std::path::PathBuf;
use tracing::{debug, Level};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "morph_engine")]
#[command(about = "Ge'ez verb generation and X-ray analysis")]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// JSON engine configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Every stem, tense and subject form of a root
    Expand {
        root: String,
        /// Write the tree to a file (.bin for binary, otherwise JSON)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Decompose surface words into root, stem, tense and subject
    Analyze {
        #[arg(required = true)]
        words: Vec<String>,
    },
    /// Produce one form with its slot breakdown
    Generate {
        root: String,
        #[arg(short, long, default_value = "basic")]
        stem: Stem,
        #[arg(short, long, default_value = "perfective")]
        tense: Tense,
        #[arg(long = "subject", default_value = "3ms")]
        agreement: SubjectAgreement,
    },
    /// One slot across several roots (one per verb type if none given)
    Compare {
        roots: Vec<String>,
        #[arg(short, long, default_value = "basic")]
        stem: Stem,
        #[arg(short, long, default_value = "imperfective")]
        tense: Tense,
        #[arg(long = "subject", default_value = "3ms")]
        agreement: SubjectAgreement,
    },
    /// Interactive X-ray loop
    Repl,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    // RUST_LOG overrides the --verbose default.
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level.as_str()));
    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();

    let config = match &args.config {
        Some(path) => EngineConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => EngineConfig::default(),
    };
    debug!(?config, "engine configuration");
    let engine = MorphEngine::with_config(config)?;

    match args.command {
        Command::Expand { root, output } => {
            let tree = engine.expand(&root)?;
            print_tree(&tree, engine.config().include_not_applicable);
            if let Some(path) = output {
                save_to_disk(&tree, &path, ExportFormat::from_path(&path))
                    .with_context(|| format!("writing {}", path.display()))?;
                println!("Tree saved to '{}'", path.display());
            }
        }
        Command::Analyze { words } => {
            for word in words {
                let candidates = engine.analyze(&word)?;
                print_candidates(&word, &candidates);
            }
        }
        Command::Generate { root, stem, tense, agreement } => {
            let form = engine.generate(&root, stem, tense, agreement)?;
            print_form(&form);
        }
        Command::Compare { roots, stem, tense, agreement } => {
            let roots: Vec<&str> = roots.iter().map(String::as_str).collect();
            let table = engine.compare(&roots, stem, tense, agreement)?;
            print_table(&table);
        }
        Command::Repl => repl(&engine)?,
    }
    Ok(())
}

fn repl(engine: &MorphEngine) -> Result<()> {
    let mut last: Option<String> = None;
    print_banner()?;

    loop {
        print!("\n{} ", ">".bold().cyan());
        stdout().flush()?;

        let mut input = String::new();
        if stdin().read_line(&mut input)? == 0 {
            break;
        }
        let cmd = input.trim();

        match cmd {
            "exit" | "quit" => break,
            "clear" => print_banner()?,
            // Repeat the previous word.
            "" => {
                if let Some(word) = &last {
                    report(engine, word);
                }
            }
            s if s.starts_with(':') && s.len() > 1 => {
                // :ROOT expands instead of analyzing.
                match engine.expand(&s[1..]) {
                    Ok(tree) => print_tree(&tree, engine.config().include_not_applicable),
                    Err(e) => println!("{} {}", "error:".red(), e),
                }
            }
            word => {
                if report(engine, word) {
                    last = Some(word.to_string());
                }
            }
        }
    }
    Ok(())
}

/// Prints the analysis or the error; false when the word was rejected.
fn report(engine: &MorphEngine, word: &str) -> bool {
    match engine.analyze(word) {
        Ok(candidates) => {
            print_candidates(word, &candidates);
            true
        }
        Err(e) => {
            println!("{} {}", "error:".red(), e);
            false
        }
    }
}

fn print_banner() -> Result<()> {
    execute!(stdout(), Clear(ClearType::All), MoveTo(0, 0))?;
    println!("{}", "Ge'ez Verb X-ray".bold());
    println!("---------------------------------------------------------------");
    println!("Type a word to analyze it, ':ROOT' to expand a root.");
    println!("[Enter] repeats the last word. 'clear' redraws, 'exit' quits.");
    Ok(())
}

fn print_candidates(word: &str, candidates: &[AnalysisCandidate]) {
    if candidates.is_empty() {
        println!("\n{} {}", word.bold(), "no analysis".dark_grey());
        return;
    }
    println!("\n{} ({} candidates)", word.bold(), candidates.len());
    for (i, c) in candidates.iter().enumerate() {
        println!(
            "  {}: {} [{}] {} {} {} (score: {})",
            i + 1,
            c.root.to_string().green(),
            c.verb_type,
            c.stem,
            c.tense,
            c.agreement,
            c.score
        );
        if !c.prefix.is_empty() || !c.suffix.is_empty() {
            println!("       prefix '{}' suffix '{}'", c.prefix, c.suffix);
        }
    }
}

fn print_form(form: &ConjugatedForm) {
    println!(
        "{}  {} {} {} ({})",
        form.surface.clone().bold().green(),
        form.stem,
        form.tense,
        form.agreement,
        form.verb_type
    );
    println!("  stem {} {}, {}", form.stem.number(), form.stem.geez_name(), form.tense.geez_name());
    for slot in &form.slots {
        let realized = slot.realized.map_or("-".to_string(), |o| o.to_string());
        let notes = if slot.notes.is_empty() {
            String::new()
        } else {
            format!("{:?}", slot.notes)
        };
        println!(
            "  {:<5} {}  {} -> {}  {}",
            slot.kind.to_string(),
            slot.consonant,
            slot.template_order,
            realized,
            notes.dark_grey()
        );
    }
    if !form.suffix.is_empty() {
        println!("  tail  {}", form.suffix);
    }
}

fn print_tree(tree: &RootTree, include_not_applicable: bool) {
    println!("{} ({})", tree.root.to_string().bold(), tree.verb_type);
    let mut current = None;
    for entry in &tree.entries {
        if current != Some((entry.stem, entry.tense)) {
            current = Some((entry.stem, entry.tense));
            println!("\n  {} / {}", entry.stem.to_string().cyan(), entry.tense);
        }
        match &entry.cell {
            Cell::Form(form) => println!("    {:<4} {}", entry.agreement.code(), form.surface),
            Cell::NotApplicable(reason) if include_not_applicable => {
                println!("    {:<4} {}", entry.agreement.code(), reason.as_str().dark_grey())
            }
            Cell::NotApplicable(_) => {}
        }
    }
}

fn print_table(table: &ParadigmTable) {
    println!(
        "{} / {} / {}",
        table.stem.to_string().cyan(),
        table.tense,
        table.agreement
    );
    for row in &table.rows {
        let surface = row.surface.as_deref().unwrap_or("n/a");
        println!("  {:<22} {:<8} {}", row.verb_type.to_string(), row.root.to_string(), surface);
    }
}
