mod policy;
mod reports;
mod seeds;
mod simulation;
mod util;

use anyhow::{Context, Result, bail};
use clap::Parser;
use colored::Colorize;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

use forfeit_game::{GameConfig, MAX_PLAYERS, MIN_PLAYERS};
use policy::OutcomePolicy;
use reports::{
    generate_console_report, render_csv_report, render_json_report, render_markdown_report,
};
use seeds::resolve_seed_inputs;
use simulation::{ScenarioResult, SimulationSpec, run_scenario};
use util::split_csv;

#[derive(Debug, Parser)]
#[command(name = "forfeit-tester", version)]
#[command(about = "Automated simulation and QA for the Forfeit wheel party game")]
struct Args {
    /// Number of players in each simulated game
    #[arg(long, default_value_t = 4)]
    players: usize,

    /// Player names (comma-separated); missing names default to "Player N"
    #[arg(long, default_value = "")]
    names: String,

    /// Consecutive spins each player takes per turn
    #[arg(long, default_value_t = 1)]
    spins_per_turn: u32,

    /// Complete rounds the game lasts
    #[arg(long, default_value_t = 2)]
    rounds: u32,

    /// Seeds to run: integers, FW- share codes, or `all` (comma-separated)
    #[arg(long, default_value = "1337")]
    seeds: String,

    /// Number of games per scenario
    #[arg(long, default_value_t = 10)]
    iterations: usize,

    /// Outcome policies to simulate (comma-separated: keen, defiant, coin)
    #[arg(long, default_value = "coin")]
    policies: String,

    /// Output report format
    #[arg(long, default_value = "console")]
    #[arg(value_parser = ["json", "markdown", "console", "csv"])]
    report: String,

    /// Optional path to write the report output instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Verbose output (per-game winners via log)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    announce_banner();

    let start_time = Instant::now();
    let config = build_config(&args)?;
    config
        .validate()
        .context("invalid game configuration")?;
    let policies = parse_policies(&args.policies)?;
    let seed_infos = resolve_seed_inputs(&split_csv(&args.seeds))?;

    let mut results = Vec::with_capacity(policies.len() * seed_infos.len());
    for policy in &policies {
        let spec = SimulationSpec {
            config: config.clone(),
            policy: *policy,
            iterations: args.iterations,
            verbose: args.verbose,
        };
        for seed in &seed_infos {
            results.push(run_scenario(&spec, seed));
        }
    }

    write_reports(&args, &results, start_time.elapsed())?;

    if results.iter().any(|r| !r.passed) {
        bail!("one or more scenarios failed");
    }
    Ok(())
}

fn announce_banner() {
    println!("{}", "🎡 Forfeit Automated Tester".bright_cyan().bold());
    println!("{}", "================================".cyan());
}

fn build_config(args: &Args) -> Result<GameConfig> {
    if args.players < MIN_PLAYERS || args.players > MAX_PLAYERS {
        bail!(
            "--players must be between {MIN_PLAYERS} and {MAX_PLAYERS} (got {})",
            args.players
        );
    }
    let mut names = split_csv(&args.names);
    names.resize(args.players, String::new());
    Ok(GameConfig::with_player_names(
        names,
        args.spins_per_turn,
        args.rounds,
    ))
}

fn parse_policies(raw: &str) -> Result<Vec<OutcomePolicy>> {
    let tokens = split_csv(raw);
    let mut policies = Vec::with_capacity(tokens.len());
    for token in &tokens {
        let policy = token
            .parse::<OutcomePolicy>()
            .ok()
            .with_context(|| format!("unknown policy: {token}"))?;
        if !policies.contains(&policy) {
            policies.push(policy);
        }
    }
    if policies.is_empty() {
        policies.push(OutcomePolicy::Coin);
    }
    Ok(policies)
}

fn write_reports(
    args: &Args,
    results: &[ScenarioResult],
    total_duration: std::time::Duration,
) -> Result<()> {
    let rendered = match args.report.as_str() {
        "console" => {
            generate_console_report(results, total_duration);
            return Ok(());
        }
        "json" => render_json_report(results)?,
        "markdown" => render_markdown_report(results),
        "csv" => render_csv_report(results),
        other => bail!("unknown report format: {other}"),
    };

    match &args.output {
        Some(path) => {
            let mut file = File::create(path)
                .with_context(|| format!("cannot create report file {}", path.display()))?;
            file.write_all(rendered.as_bytes())?;
            println!("Report written to {}", path.display());
        }
        None => println!("{rendered}"),
    }
    Ok(())
}
