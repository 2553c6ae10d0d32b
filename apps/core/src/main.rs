// Campus Buddy CLI
// Interactive chat loop over the response pipeline

use anyhow::{Context, Result};
use campus_buddy_core::brain::init_global;
use campus_buddy_core::config::{PersonalityTone, ResponseStyle};
use campus_buddy_core::{ChatTurn, Chatbot, ChatbotConfig, ResponsePayload};
use clap::{Parser, ValueEnum};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::thread;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    Pretty,
    Json,
}

#[derive(Parser)]
#[command(name = "campus-buddy")]
#[command(version)]
#[command(about = "Campus Buddy: a friendly chatbot for student life", long_about = None)]
struct Cli {
    /// Path to an intent catalog (JSON); the bundled catalog is used otherwise
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Minimum similarity (exclusive) for an intent match
    #[arg(long)]
    threshold: Option<f32>,

    /// Personality tone (witty, neutral)
    #[arg(long)]
    tone: Option<PersonalityTone>,

    /// Response style (empathetic, plain)
    #[arg(long)]
    style: Option<ResponseStyle>,

    /// Print replies at once instead of word by word
    #[arg(long)]
    instant: bool,

    /// Show matched intent, sentiment and entities after each reply
    #[arg(long, short)]
    explain: bool,

    /// Answer a single message, print the payload as JSON and exit
    #[arg(long, short)]
    message: Option<String>,

    /// Log output format (logs go to stderr)
    #[arg(long, value_enum, default_value = "pretty")]
    log_format: LogFormat,
}

impl Cli {
    /// Layer command-line flags over the environment configuration
    fn config(&self) -> Result<ChatbotConfig> {
        let mut config = ChatbotConfig::from_env().context("Invalid environment configuration")?;
        if let Some(path) = &self.catalog {
            config.catalog_path = Some(path.clone());
        }
        if let Some(threshold) = self.threshold {
            config.match_threshold = threshold;
        }
        if let Some(tone) = self.tone {
            config.personality_tone = tone;
        }
        if let Some(style) = self.style {
            config.response_style = style;
        }
        Ok(config)
    }
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into());
    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(io::stderr))
            .init(),
    }
}

/// Print the reply one word at a time, pausing `typing_delay` between words
fn reveal(out: &mut impl Write, payload: &ResponsePayload, instant: bool) -> io::Result<()> {
    if instant {
        writeln!(out, "{}", payload.text)?;
        return Ok(());
    }
    for (i, word) in payload.words().enumerate() {
        if i > 0 {
            write!(out, " ")?;
        }
        write!(out, "{}", word)?;
        out.flush()?;
        thread::sleep(payload.word_interval());
    }
    writeln!(out)
}

fn explain(out: &mut impl Write, turn: &ChatTurn) -> io::Result<()> {
    match &turn.matched {
        Some(m) => writeln!(out, "  intent: {} ({:.3})", m.tag, m.similarity)?,
        None => writeln!(out, "  intent: none")?,
    }
    writeln!(out, "  sentiment: {:.3}", turn.analysis.sentiment)?;
    for entity in &turn.analysis.entities {
        writeln!(out, "  entity: {} [{}]", entity.text, entity.category)?;
    }
    if !turn.analysis.keywords.is_empty() {
        writeln!(out, "  keywords: {}", turn.analysis.keywords.join(", "))?;
    }
    writeln!(
        out,
        "  delay: {:.3}s/word ({:.1}s reveal), {}ms",
        turn.payload.typing_delay,
        turn.payload.reveal_duration().as_secs_f32(),
        turn.processing_time_ms
    )
}

fn explain_settings(out: &mut impl Write, config: &ChatbotConfig) -> io::Result<()> {
    let catalog = config
        .catalog_path
        .as_ref()
        .map_or_else(|| "bundled".to_string(), |p| p.display().to_string());
    writeln!(
        out,
        "  catalog: {}, threshold: {:.2}, tone: {}, style: {}, support below: {:.2}",
        catalog,
        config.match_threshold,
        config.personality_tone,
        config.response_style,
        config.support_cutoff
    )
}

fn run_once(chatbot: &Chatbot, message: &str, with_trace: bool) -> Result<()> {
    let turn = chatbot.respond_with(message, &mut rand::thread_rng());
    let json = if with_trace {
        serde_json::to_string_pretty(&turn)
    } else {
        serde_json::to_string_pretty(&turn.payload)
    }
    .context("Failed to serialize reply")?;
    println!("{}", json);
    Ok(())
}

fn run_repl(chatbot: &Chatbot, cli: &Cli) -> Result<()> {
    let stdin = io::stdin();
    let mut out = io::stdout().lock();
    let mut rng = rand::thread_rng();

    if cli.explain {
        explain_settings(&mut out, chatbot.config())?;
    }
    writeln!(out, "{}\n", Chatbot::welcome_message())?;

    loop {
        write!(out, "You: ")?;
        out.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).context("Failed to read input")? == 0 {
            break;
        }
        let message = line.trim();
        if message.is_empty() {
            continue;
        }
        if matches!(message.to_lowercase().as_str(), "quit" | "exit") {
            break;
        }

        let turn = chatbot.respond_with(message, &mut rng);
        write!(out, "Buddy: ")?;
        reveal(&mut out, &turn.payload, cli.instant)?;
        if cli.explain {
            explain(&mut out, &turn)?;
        }
    }

    writeln!(out, "See you around campus!")?;
    Ok(())
}

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.log_format);

    let config = cli.config()?;
    info!("Starting campus buddy");
    let chatbot = init_global(config).context("Failed to start the chatbot")?;

    match &cli.message {
        Some(message) => run_once(chatbot, message, cli.explain),
        None => run_repl(chatbot, &cli),
    }
}
