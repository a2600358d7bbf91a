use std::sync::Arc;

use anyhow::Context;
use colored::Colorize;

use redline_analysis::{ContractAnalysis, ContractAnalyzer, Language, OpenAiClient};
use redline_diff::{compare_contracts, DiffLine};
use redline_server::{RedlineServer, ServerConfig};

use crate::cli::{AnalyzeArgs, Cli, Command, DiffArgs, ServeArgs};

pub async fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Serve(args) => cmd_serve(args).await,
        Command::Diff(args) => cmd_diff(args),
        Command::Analyze(args) => cmd_analyze(args).await,
    }
}

async fn cmd_serve(args: ServeArgs) -> anyhow::Result<()> {
    let mut config = match &args.config {
        Some(path) => ServerConfig::from_toml_file(path)?,
        None => ServerConfig::default(),
    };
    if let Some(bind) = args.bind {
        config.bind_addr = bind;
    }

    RedlineServer::new(config).serve().await?;
    Ok(())
}

fn cmd_diff(args: DiffArgs) -> anyhow::Result<()> {
    let old = std::fs::read_to_string(&args.old)
        .with_context(|| format!("reading {}", args.old.display()))?;
    let new = std::fs::read_to_string(&args.new)
        .with_context(|| format!("reading {}", args.new.display()))?;

    let diff = compare_contracts(&old, &new)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&diff.lines)?);
        return Ok(());
    }

    for line in &diff.lines {
        match line {
            DiffLine::Unchanged(text) => println!("  {text}"),
            DiffLine::Removed(text) => println!("{} {}", "-".red(), text.red()),
            DiffLine::Added(text) => println!("{} {}", "+".green(), text.green()),
        }
    }
    println!(
        "\n{} unchanged, {} removed, {} added",
        diff.unchanged(),
        diff.deletions().to_string().red(),
        diff.additions().to_string().green(),
    );
    Ok(())
}

async fn cmd_analyze(args: AnalyzeArgs) -> anyhow::Result<()> {
    let text = std::fs::read_to_string(&args.file)
        .with_context(|| format!("reading {}", args.file.display()))?;

    let language = Language::from_code(&args.language);
    let analyzer = ContractAnalyzer::new(Arc::new(OpenAiClient::from_env()?));
    let analysis = analyzer.analyze(&text, language).await?;

    print_analysis(&analysis);
    Ok(())
}

fn print_analysis(analysis: &ContractAnalysis) {
    print_section("Clauses", &analysis.clause_recognition);
    print_section("Risks", &analysis.risk_identification);
    print_section("Inconsistencies", &analysis.inconsistencies);
    print_section("Key terms", &analysis.key_terms);

    let nothing_extracted = analysis.clause_recognition.is_empty()
        && analysis.risk_identification.is_empty()
        && analysis.inconsistencies.is_empty()
        && analysis.key_terms.is_empty();
    if nothing_extracted {
        // The model strayed from the requested format; show its reply as-is.
        println!("\n{}", analysis.analysis);
    }
}

fn print_section(title: &str, items: &[String]) {
    println!("{}", title.bold());
    if items.is_empty() {
        println!("  (none)");
    } else {
        for item in items {
            println!("  {item}");
        }
    }
}
