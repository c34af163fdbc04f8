use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, ValueEnum};

use regform::config::Config;
use regform::form::{AddressField, FieldPath, FieldValue, FormEngine, Gender, SubmitOutcome};
use regform::logging::init_tracing;
use regform::submit::SimulatedApi;

#[derive(Debug, Parser)]
#[command(
    name = "regform",
    about = "Drive the registration form engine against a simulated server"
)]
struct Cli {
    /// Path to a TOML config file (defaults to the platform config dir).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the simulated round-trip latency in milliseconds.
    #[arg(long)]
    delay_ms: Option<u64>,

    /// How the simulated server decides each submission.
    #[arg(long, value_enum, default_value = "random")]
    outcome: OutcomeMode,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutcomeMode {
    /// Accept every submission.
    Succeed,
    /// Reject every submission.
    Fail,
    /// Fail with the configured probability.
    Random,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => Config::load_from(path).context("loading config")?,
        None => Config::load().context("loading config")?,
    };

    let delay = Duration::from_millis(cli.delay_ms.unwrap_or(config.api.delay_ms));
    let failure_rate = config.api.failure_rate;
    let api = match cli.outcome {
        OutcomeMode::Succeed => SimulatedApi::always_succeeds(delay),
        OutcomeMode::Fail => SimulatedApi::always_fails(delay),
        OutcomeMode::Random => {
            SimulatedApi::new(delay, move || rand::random::<f64>() >= failure_rate)
        }
    };

    let mut engine = FormEngine::new();

    // Submit the untouched form first to show the validation pass; the
    // simulated server is never reached.
    let outcome = engine.submit(&api).await;
    tracing::info!(?outcome, "premature submit");
    println!(
        "Validation errors on the empty form:\n{}",
        serde_json::to_string_pretty(engine.errors())?
    );

    // Fill the form through the named edit operations.
    engine.set_field(FieldPath::FirstName, FieldValue::Text("Jo".into()))?;
    engine.set_field(FieldPath::LastName, FieldValue::Text("Doe".into()))?;
    engine.set_field(FieldPath::Email, FieldValue::Text("jo@example.com".into()))?;
    engine.set_field(FieldPath::Age, FieldValue::Int(20))?;
    engine.set_field(FieldPath::Gender, FieldValue::Gender(Gender::Male))?;
    engine.set_field(
        FieldPath::Address(AddressField::City),
        FieldValue::Text("NYC".into()),
    )?;
    engine.set_field(
        FieldPath::Address(AddressField::State),
        FieldValue::Text("NY".into()),
    )?;
    engine.set_hobby_name(0, "chess")?;
    engine.add_hobby();
    engine.set_hobby_name(1, "climbing")?;
    engine.set_field(FieldPath::Subscribe, FieldValue::Flag(true))?;
    engine.set_field(FieldPath::Referral, FieldValue::Text("a friend".into()))?;

    match engine.submit(&api).await {
        SubmitOutcome::Accepted(response) => {
            println!(
                "Accepted:\n{}",
                serde_json::to_string_pretty(&response.data)?
            );
        }
        SubmitOutcome::Rejected => {
            println!(
                "Rejected: {}",
                engine.errors().root.as_deref().unwrap_or("unknown error")
            );
        }
        SubmitOutcome::Invalid => {
            println!(
                "Invalid:\n{}",
                serde_json::to_string_pretty(engine.errors())?
            );
        }
    }

    Ok(())
}
