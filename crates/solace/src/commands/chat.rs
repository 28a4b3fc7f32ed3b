use anyhow::Context;
use solace_chart::SvgChartRenderer;
use solace_core::{
    ChartView, Companion, Config, Transcript, TrendPoint, TurnOutcome, NO_DATA_STATUS,
};
use solace_model::GeminiClient;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

const BANNER: &str = "Mental Health Companion\n\
=======================\n\
Talk to an AI that provides supportive guidance for your mental well-being.\n\
If you're in immediate danger or thinking about self-harm, please contact local emergency services.\n\
Type /help for commands.";

const PROMPT: &str = "How are you feeling today?\n> ";

const HELP: &str = "Commands:\n  \
/chart   Draw the daily emotion trend chart\n  \
/trend   Show daily averages as text\n  \
/history Show this conversation so far\n  \
/clear   Clear chat and emotion data\n  \
/help    Show this help\n  \
/quit    Leave";

#[derive(Debug, PartialEq, Eq)]
enum ReplInput {
    Chart,
    Trend,
    History,
    Clear,
    Help,
    Quit,
    Message,
}

/// Only exact command words are commands; any other text, slash or not, is a message
fn parse_input(line: &str) -> ReplInput {
    match line.trim() {
        "/chart" => ReplInput::Chart,
        "/trend" => ReplInput::Trend,
        "/history" => ReplInput::History,
        "/clear" => ReplInput::Clear,
        "/help" => ReplInput::Help,
        "/quit" | "/exit" => ReplInput::Quit,
        _ => ReplInput::Message,
    }
}

pub fn run(model: Option<String>, chart_path: Option<PathBuf>) -> anyhow::Result<()> {
    let mut config = Config::from_env()?;
    if let Some(model) = model {
        config.model = model;
    }
    if let Some(path) = chart_path {
        config.chart_path = path;
    }

    let client = GeminiClient::new(&config).context("failed to set up the model client")?;
    let renderer = SvgChartRenderer::new(config.chart_path.clone());
    let mut companion = Companion::new(Box::new(client), Box::new(renderer));

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(&mut companion, stdin.lock(), stdout.lock())?;
    Ok(())
}

/// Drive a conversation until `/quit` or end of input
fn run_session<R: BufRead, W: Write>(
    companion: &mut Companion,
    input: R,
    mut out: W,
) -> io::Result<()> {
    writeln!(out, "{}\n", BANNER)?;

    let mut lines = input.lines();
    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        let Some(line) = lines.next() else {
            writeln!(out)?;
            break;
        };
        let mut line = line?;

        match parse_input(&line) {
            ReplInput::Quit => break,
            ReplInput::Help => writeln!(out, "{}", HELP)?,
            ReplInput::Chart => write_chart(&mut out, &companion.request_chart())?,
            ReplInput::Trend => writeln!(out, "{}", format_trend(&companion.trend()))?,
            ReplInput::History => writeln!(out, "{}", format_history(companion.transcript()))?,
            ReplInput::Clear => {
                companion.clear_all();
                writeln!(out, "Chat and emotion data cleared.")?;
            }
            ReplInput::Message => {
                let outcome = companion.send_message(&mut line);
                if let Some(turn) = companion.transcript().last() {
                    writeln!(out, "\n{}\n", turn.assistant)?;
                }
                if let TurnOutcome::Replied(category) = outcome {
                    tracing::debug!(%category, "reply classified");
                }
            }
        }
    }

    Ok(())
}

fn write_chart<W: Write>(out: &mut W, view: &ChartView) -> io::Result<()> {
    match &view.image {
        Some(path) => writeln!(out, "Emotion chart saved to {}", path.display()),
        None => writeln!(out, "{}", view.status),
    }
}

fn format_history(transcript: &Transcript) -> String {
    if transcript.is_empty() {
        return "No messages yet.".to_string();
    }

    transcript
        .turns()
        .iter()
        .map(|turn| format!("You: {}\nCompanion: {}", turn.user, turn.assistant))
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn format_trend(points: &[TrendPoint]) -> String {
    if points.is_empty() {
        return NO_DATA_STATUS.to_string();
    }

    let rows: Vec<String> = points
        .iter()
        .map(|p| {
            format!(
                "  {}  {:.2}  {}",
                p.date.format("%Y-%m-%d"),
                p.average,
                solace_core::EmotionCategory::nearest(p.average)
            )
        })
        .collect();

    format!(
        "Daily Emotion Trend\n-------------------\n{}",
        rows.join("\n")
    )
}
