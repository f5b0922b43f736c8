use anyhow::{bail, Result};
use clap::Parser;
use serde_json::Value;
use tokio::io::{self, AsyncBufReadExt, BufReader, Stdin};
use tracing_subscriber::EnvFilter;
use tripwise::cli::{Cli, Commands};
use tripwise::interview::Step;
use tripwise::{utils, DateInput, Settings, Supervisor, SupervisorReply, TravelInterview};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let settings = Settings::new()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.logging.level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Plan { json } => handle_plan(settings, json).await,
        Commands::Chat => handle_chat(settings).await,
        Commands::Normalize { dates } => handle_normalize(&dates),
        Commands::Route { message } => handle_route(settings, &message).await,
    }
}

/// Answers are taken as JSON when they parse (lists, objects), otherwise as text
fn parse_answer(input: &str) -> Value {
    serde_json::from_str(input).unwrap_or_else(|_| Value::String(input.to_string()))
}

async fn read_answer(reader: &mut BufReader<Stdin>) -> Result<String> {
    loop {
        utils::print_prompt("You: ");
        let mut input = String::new();
        if reader.read_line(&mut input).await? == 0 {
            bail!("Input closed before the interview finished");
        }

        let input = input.trim();
        if !input.is_empty() {
            return Ok(input.to_string());
        }
    }
}

async fn handle_plan(settings: Settings, json: bool) -> Result<()> {
    utils::print_header("Travel Interview");

    let mut interview = TravelInterview::new(settings.interview);
    let mut reader = BufReader::new(io::stdin());

    let mut step = interview.start()?;
    let outcome = loop {
        match step {
            Step::Suspended(prompt) => {
                utils::print_interrupt(&prompt);
                let answer = read_answer(&mut reader).await?;
                step = interview.resume(parse_answer(&answer))?;
            }
            Step::Finished(outcome) => break outcome,
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        utils::print_trip(&outcome);
    }
    Ok(())
}

async fn handle_chat(settings: Settings) -> Result<()> {
    utils::print_header("Travel Supervisor");
    utils::print_info("Ask about a trip to start planning (Ctrl+C to exit)\n");

    let mut supervisor = Supervisor::new(settings)?;
    let mut reader = BufReader::new(io::stdin());

    loop {
        utils::print_prompt("You: ");
        let mut input = String::new();
        if reader.read_line(&mut input).await? == 0 {
            return Ok(());
        }

        let input = input.trim();
        if input.is_empty() {
            continue;
        }

        let answer = if supervisor.in_interview() {
            parse_answer(input)
        } else {
            Value::String(input.to_string())
        };

        match supervisor.handle_user_input(answer).await {
            Ok(SupervisorReply::Direct(reply)) => println!("{}\n", reply),
            Ok(SupervisorReply::Prompt(prompt)) => utils::print_interrupt(&prompt),
            Ok(SupervisorReply::TripReady(outcome)) => {
                utils::print_trip(&outcome);
                println!();
            }
            Err(e) => utils::print_error(&format!("Error: {}", e)),
        }
    }
}

fn handle_normalize(dates: &str) -> Result<()> {
    let input = DateInput::from_value(parse_answer(dates));
    let resolution = tripwise::normalize_dates(&input);

    if let Some(ambiguity) = &resolution.ambiguity {
        utils::print_error(&format!("Warning: {}", ambiguity));
    }
    println!("{}", serde_json::to_string_pretty(&resolution.range)?);
    Ok(())
}

async fn handle_route(settings: Settings, message: &str) -> Result<()> {
    let supervisor = Supervisor::new(settings)?;
    let decision = supervisor.route(message).await?;
    println!("{}", serde_json::to_string_pretty(&decision)?);
    Ok(())
}
