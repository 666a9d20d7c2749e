// MoodMapper CLI: per-sentence emotion tagging with color and music suggestions.
use std::io::{IsTerminal, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use env_logger::Builder;
use log::{debug, LevelFilter};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use moodmapper::export::write_json;
use moodmapper::input::read_file;
use moodmapper::nlp::sentiment::LineResult;
use moodmapper::nlp::{
    analyze_lines, analyze_text, overall_music, Analysis, CommandClassifier, Language, LexiconClassifier,
    SentimentClassifier,
};

#[derive(Parser)]
#[command(name = "moodmapper", version, about = "Tag the emotions of a text and suggest a color and soundtrack")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Lexicon-based emotion analysis, one result per sentence
    Analyze {
        /// Text (or PDF) file to analyze
        input: PathBuf,
        /// Lexicon language (en or pt)
        #[arg(short, long, env = "MOODMAPPER_LANG", default_value = "en")]
        lang: String,
        /// Export the per-sentence results as JSON
        #[arg(long = "json")]
        json_path: Option<PathBuf>,
    },
    /// Positive/negative sentiment, one result per line
    Sentiment {
        input: PathBuf,
        /// External classifier command; receives each line as its last argument
        /// and prints {"label": ..., "score": ...}. Defaults to the built-in lexicon.
        #[arg(short, long, env = "MOODMAPPER_CLASSIFIER")]
        command: Option<String>,
        #[arg(long = "json")]
        json_path: Option<PathBuf>,
    },
}

impl Cli {
    fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Error;
        }
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        }
    }
}

fn terminal_color(name: &str) -> Option<Color> {
    match name {
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "red" => Some(Color::Red),
        "purple" => Some(Color::Magenta),
        "green" => Some(Color::Green),
        "orange" => Some(Color::Ansi256(208)),
        _ => None,
    }
}

fn stdout() -> StandardStream {
    let choice = if std::io::stdout().is_terminal() {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    StandardStream::stdout(choice)
}

fn print_colored(out: &mut StandardStream, text: &str, color: Option<&str>) -> Result<()> {
    out.set_color(ColorSpec::new().set_fg(color.and_then(terminal_color)))?;
    write!(out, "{}", text)?;
    out.reset()?;
    writeln!(out)?;
    Ok(())
}

fn render_analysis(analysis: &Analysis) -> Result<()> {
    let mut out = stdout();
    for item in &analysis.sentences {
        let dominant = item.dominant.map(|c| c.to_string()).unwrap_or_else(|| "None".to_string());
        print_colored(&mut out, &format!("{} -> {}", item.sentence, dominant), item.color)?;
    }

    let summary = &analysis.summary;
    writeln!(out)?;
    print_colored(&mut out, &format!("Resumo: {}", summary.label), summary.color)?;
    if let Some(color) = summary.color {
        writeln!(out, "Sugestão de cor: {}", color)?;
    }
    if let Some(music) = summary.music {
        writeln!(out, "Sugestão de trilha: {}", music)?;
    }
    Ok(())
}

fn render_lines(results: &[LineResult]) -> Result<()> {
    let mut out = stdout();
    for r in results {
        print_colored(&mut out, &format!("{} -> {} ({:.3})", r.line, r.label, r.score), Some(r.color))?;
    }
    if let Some(music) = overall_music(results) {
        writeln!(out, "\nRecomendação musical: {}", music)?;
    }
    Ok(())
}

fn run_analyze(input: &Path, lang: &str, json_path: Option<&Path>) -> Result<()> {
    // Reject a bad selector before touching the input.
    let language: Language = lang.parse()?;
    let text = read_file(input).with_context(|| format!("reading {}", input.display()))?;

    let analysis = analyze_text(&text, language);
    render_analysis(&analysis)?;

    if let Some(path) = json_path {
        write_json(path, &analysis.sentences)?;
    }
    Ok(())
}

fn run_sentiment(input: &Path, command: Option<&str>, json_path: Option<&Path>) -> Result<()> {
    let text = read_file(input).with_context(|| format!("reading {}", input.display()))?;

    let classifier: Box<dyn SentimentClassifier> = match command {
        Some(cmd) => {
            debug!("using external classifier: {}", cmd);
            Box::new(CommandClassifier::from_command_line(cmd)?)
        }
        None => Box::new(LexiconClassifier),
    };

    let results = analyze_lines(&text, classifier.as_ref())?;
    render_lines(&results)?;

    if let Some(path) = json_path {
        write_json(path, &results)?;
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    Builder::new()
        .filter_level(cli.log_level())
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    match cli.command {
        Commands::Analyze { input, lang, json_path } => run_analyze(&input, &lang, json_path.as_deref())?,
        Commands::Sentiment { input, command, json_path } => {
            run_sentiment(&input, command.as_deref(), json_path.as_deref())?
        }
    }
    Ok(())
}
