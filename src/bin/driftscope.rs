//! Driftscope CLI - Command-line interface for the drift-scoring engine
//!
//! Commands:
//! - analyze: Score a window of tracking events into a drift analysis
//! - replay: Replay an event log through the engine, per-session analysis + stats
//! - schema: Print input/output shape information

use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use driftscope::{
    analyze_events, DriftAnalysis, DriftEngine, EventStore, MemoryStore, SessionStats,
    TrackingEvent, DRIFTSCOPE_VERSION,
};

/// Driftscope - Rule-based focus-drift scoring for behavioral event streams
#[derive(Parser)]
#[command(name = "driftscope")]
#[command(version = DRIFTSCOPE_VERSION)]
#[command(about = "Score behavioral event streams for focus drift", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a window of tracking events into a drift analysis
    Analyze {
        /// Input file path (use - for stdin)
        #[arg(short, long)]
        input: PathBuf,

        /// Input format
        #[arg(long, default_value = "ndjson")]
        input_format: InputFormat,

        /// Output format
        #[arg(long, default_value = "json-pretty")]
        output_format: OutputFormat,
    },

    /// Replay an event log through the engine and report per-session
    /// analysis and statistics
    Replay {
        /// Input file path (use - for stdin)
        #[arg(short, long)]
        input: PathBuf,

        /// Input format
        #[arg(long, default_value = "ndjson")]
        input_format: InputFormat,

        /// Output format
        #[arg(long, default_value = "json-pretty")]
        output_format: OutputFormat,
    },

    /// Print schema information
    Schema {
        /// Schema to print (input or output)
        #[arg(value_enum)]
        schema_type: SchemaType,
    },
}

#[derive(Clone, ValueEnum)]
enum InputFormat {
    /// Newline-delimited JSON (one event per line)
    Ndjson,
    /// JSON array of events
    Json,
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    /// Compact JSON
    Json,
    /// Pretty-printed JSON
    JsonPretty,
}

#[derive(Clone, ValueEnum)]
enum SchemaType {
    /// Input schema (tracking events)
    Input,
    /// Output schema (drift analysis / session stats)
    Output,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!(
                "{}",
                serde_json::to_string(&CliError::from(e))
                    .unwrap_or_else(|_| "Unknown error".to_string())
            );
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), DriftCliError> {
    match cli.command {
        Commands::Analyze {
            input,
            input_format,
            output_format,
        } => cmd_analyze(&input, input_format, output_format),

        Commands::Replay {
            input,
            input_format,
            output_format,
        } => cmd_replay(&input, input_format, output_format),

        Commands::Schema { schema_type } => cmd_schema(schema_type),
    }
}

fn cmd_analyze(
    input: &Path,
    input_format: InputFormat,
    output_format: OutputFormat,
) -> Result<(), DriftCliError> {
    let events = read_events(input, input_format)?;

    // An empty window is a valid input: it yields the no-events analysis
    let analysis = analyze_events(&events);

    println!("{}", format_json(&analysis, &output_format)?);
    Ok(())
}

fn cmd_replay(
    input: &Path,
    input_format: InputFormat,
    output_format: OutputFormat,
) -> Result<(), DriftCliError> {
    let events = read_events(input, input_format)?;

    if events.is_empty() {
        return Err(DriftCliError::NoEvents);
    }

    let engine = DriftEngine::new(MemoryStore::new());

    // Synthesize a session record per distinct id, started at its earliest
    // event, then feed every event through the store
    for event in &events {
        match engine.store().get_session(&event.session_id)? {
            Some(mut session) => {
                if event.timestamp < session.start_time {
                    session.start_time = event.timestamp;
                    engine.store().upsert_session(session)?;
                }
            }
            None => {
                let mut session = driftscope::Session::new();
                session.id = event.session_id.clone();
                session.start_time = event.timestamp;
                engine.store().upsert_session(session)?;
            }
        }
        engine.store().append_event(event.clone())?;
    }

    let mut session_ids = engine.store().session_ids();
    session_ids.sort();

    let mut reports: Vec<SessionReport> = Vec::new();
    for session_id in session_ids {
        let analysis = engine.analyze_session(&session_id)?;
        let stats = engine.session_stats(&session_id)?;
        reports.push(SessionReport {
            session_id,
            analysis,
            stats,
        });
    }

    println!("{}", format_json(&reports, &output_format)?);
    Ok(())
}

fn cmd_schema(schema_type: SchemaType) -> Result<(), DriftCliError> {
    match schema_type {
        SchemaType::Input => {
            println!("Input: tracking events");
            println!();
            println!("One event per NDJSON line (or a JSON array) with fields:");
            println!("  id          - unique event id");
            println!("  session_id  - session the event belongs to");
            println!("  event_type  - scroll | click | mousemove | idle | visibility | tab_count");
            println!("  timestamp   - ISO-8601 UTC timestamp");
            println!("  data        - type-specific payload (optional)");
            println!("    count     - open tab count, on tab_count events");
            println!("    visible   - page visibility state, on visibility events");
            println!();
            println!("Unknown payload keys are ignored; a missing data object is valid.");
        }
        SchemaType::Output => {
            println!("Output: drift analysis (and session stats under replay)");
            println!();
            println!("DriftAnalysis:");
            println!("  is_drifting    - drift score above 40 (strict)");
            println!("  confidence     - score / 100, capped at 0.95");
            println!("  drift_score    - sum of triggered rule weights");
            println!("  factors        - excessive_scrolling | idle_behavior | multiple_tabs");
            println!("                   | erratic_movement | low_activity");
            println!("  recommendation - human-readable suggestion");
            println!();
            println!("SessionStats:");
            println!("  active_time    - seconds since session start");
            println!("  scroll_count / click_count / mouse_movements - full history");
            println!("  idle_time      - idle events x 5s");
            println!("  tab_switches   - tab_count events with count > 3, full history");
            println!("  drift_detected / drift_score - from the recent window");
        }
    }

    Ok(())
}

// Helper functions

fn read_events(input: &Path, format: InputFormat) -> Result<Vec<TrackingEvent>, DriftCliError> {
    let data = if input.to_string_lossy() == "-" {
        if atty::is(atty::Stream::Stdin) {
            return Err(DriftCliError::NoInput);
        }
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        fs::read_to_string(input)?
    };

    match format {
        InputFormat::Ndjson => data
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| {
                serde_json::from_str(line).map_err(|e| {
                    DriftCliError::ParseError(format!("Failed to parse event: {}", e))
                })
            })
            .collect(),
        InputFormat::Json => serde_json::from_str(&data)
            .map_err(|e| DriftCliError::ParseError(format!("Failed to parse event array: {}", e))),
    }
}

fn format_json<T: serde::Serialize>(
    value: &T,
    format: &OutputFormat,
) -> Result<String, DriftCliError> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string(value)?),
        OutputFormat::JsonPretty => Ok(serde_json::to_string_pretty(value)?),
    }
}

// Report types

#[derive(serde::Serialize)]
struct SessionReport {
    session_id: String,
    analysis: DriftAnalysis,
    stats: SessionStats,
}

// Error types

#[derive(Debug)]
enum DriftCliError {
    Io(io::Error),
    Engine(driftscope::DriftError),
    Json(serde_json::Error),
    ParseError(String),
    NoEvents,
    NoInput,
}

impl From<io::Error> for DriftCliError {
    fn from(e: io::Error) -> Self {
        DriftCliError::Io(e)
    }
}

impl From<driftscope::DriftError> for DriftCliError {
    fn from(e: driftscope::DriftError) -> Self {
        DriftCliError::Engine(e)
    }
}

impl From<serde_json::Error> for DriftCliError {
    fn from(e: serde_json::Error) -> Self {
        DriftCliError::Json(e)
    }
}

#[derive(serde::Serialize)]
struct CliError {
    code: String,
    message: String,
    hint: Option<String>,
}

impl From<DriftCliError> for CliError {
    fn from(e: DriftCliError) -> Self {
        match e {
            DriftCliError::Io(e) => CliError {
                code: "IO_ERROR".to_string(),
                message: e.to_string(),
                hint: Some("Check file paths and permissions".to_string()),
            },
            DriftCliError::Engine(e) => CliError {
                code: "ENGINE_ERROR".to_string(),
                message: e.to_string(),
                hint: None,
            },
            DriftCliError::Json(e) => CliError {
                code: "JSON_ERROR".to_string(),
                message: e.to_string(),
                hint: Some("Check JSON syntax".to_string()),
            },
            DriftCliError::ParseError(msg) => CliError {
                code: "PARSE_ERROR".to_string(),
                message: msg,
                hint: Some("Run 'driftscope schema input' for the expected shape".to_string()),
            },
            DriftCliError::NoEvents => CliError {
                code: "NO_EVENTS".to_string(),
                message: "No events found in input".to_string(),
                hint: Some("Ensure input file is not empty".to_string()),
            },
            DriftCliError::NoInput => CliError {
                code: "NO_INPUT".to_string(),
                message: "stdin is a TTY; nothing piped".to_string(),
                hint: Some("Pipe events in or pass a file path with --input".to_string()),
            },
        }
    }
}
