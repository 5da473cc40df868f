//! RepCount CLI
//!
//! Usage:
//!   repcount --input session.txt                 # Replay a recorded sample file
//!   tracker | repcount                           # Read samples from stdin
//!   repcount --calibration cal.json --json       # JSON lines output
//!
//! Input lines: `<limb> <time_secs> <angle_deg>` or `reset <limb>`.

use clap::Parser;
use colored::Colorize;
use log::warn;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};

use repcount::core::{load_calibration, load_config, CounterConfig, SampleParser, Session, SessionSummary};
use repcount::types::{Calibration, Feedback, InputLine, PerLimb, SampleOutput};
use repcount::VERSION;

#[derive(Parser, Debug)]
#[command(
    name = "repcount",
    version = VERSION,
    about = "Count exercise reps from a stream of joint angles",
    long_about = "RepCount turns per-frame joint angles into counted repetitions\n\
                  with live form feedback.\n\n\
                  Input lines:\n  \
                  <limb> <time_secs> <angle_deg>   e.g. 'L 0.033 162.5'\n  \
                  reset <limb>                     clear detection state for a limb\n\n\
                  Stages:\n  \
                  DOWN        - Extended\n  \
                  MOVING_UP   - Curling\n  \
                  UP          - Contracted\n  \
                  MOVING_DOWN - Lowering"
)]
struct Args {
    /// Sample file (default: stdin)
    #[arg(short, long)]
    input: Option<String>,

    /// Contracted threshold in degrees
    #[arg(long, default_value_t = 40.0)]
    contracted: f64,

    /// Extended threshold in degrees
    #[arg(long, default_value_t = 160.0)]
    extended: f64,

    /// Calibration JSON file (overrides --contracted/--extended)
    #[arg(long)]
    calibration: Option<String>,

    /// Counter config JSON file
    #[arg(long)]
    config: Option<String>,

    /// Seed for compliment selection
    #[arg(long)]
    seed: Option<u64>,

    /// Output as JSON lines
    #[arg(long)]
    json: bool,

    /// Disable colors in output
    #[arg(long)]
    no_color: bool,

    /// Show velocity and reason codes
    #[arg(long)]
    verbose: bool,

    /// Only print commits, reps and feedback changes
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if args.no_color {
        colored::control::set_override(false);
    }

    let calibration = match resolve_calibration(&args) {
        Ok(cal) => cal,
        Err(e) => fail(&e),
    };
    let config = match args.config.as_deref().map(|path| load_config(path)).transpose() {
        Ok(config) => config.unwrap_or_default(),
        Err(e) => fail(&format!("config: {}", e)),
    };

    let mut session = match args.seed {
        Some(seed) => Session::with_seed(calibration, config, seed),
        None => Session::new(calibration, config),
    };

    let reader: Box<dyn BufRead> = match &args.input {
        Some(path) => {
            let file = File::open(path).unwrap_or_else(|e| fail(&format!("cannot open {}: {}", path, e)));
            Box::new(BufReader::new(file))
        }
        None => Box::new(BufReader::new(io::stdin())),
    };

    if !args.json && !args.quiet {
        print_header(&calibration, &config);
    }

    run(reader, &mut session, &args, &mut io::stdout().lock());

    print_summary(&session.summary(), args.json);
}

/// Calibration from file, or from the threshold flags
fn resolve_calibration(args: &Args) -> Result<Calibration, String> {
    let calibration = match &args.calibration {
        Some(path) => load_calibration(path).map_err(|e| format!("calibration: {}", e))?,
        None => Calibration::new(args.contracted, args.extended),
    };
    calibration
        .validate()
        .map_err(|e| format!("calibration: {}", e))?;
    Ok(calibration)
}

/// Feed every input line through the session
fn run(reader: impl BufRead, session: &mut Session, args: &Args, out: &mut impl Write) {
    let parser = SampleParser::new();
    let mut last_feedback: PerLimb<Option<Feedback>> = PerLimb::default();

    for (number, line) in reader.lines().enumerate() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                warn!("read error after line {}: {}", number, e);
                break;
            }
        };

        let rendered = match parser.parse_line(&line) {
            Ok(InputLine::Skip) => None,
            Ok(InputLine::Reset(limb)) => {
                session.reset_limb(limb);
                (!args.json).then(|| format!("↺ {} reset", limb).dimmed().to_string())
            }
            Ok(InputLine::Sample(sample)) => {
                let output = session.ingest(sample);
                let previous = &mut last_feedback[output.limb];
                let feedback_changed = output.feedback.is_some() && output.feedback != *previous;
                if output.feedback.is_some() {
                    *previous = output.feedback;
                }
                (!args.quiet || is_notable(&output, feedback_changed))
                    .then(|| format_output(&output, args))
            }
            Err(reason) => {
                warn!("line {}: {} ({:?})", number + 1, reason, line);
                None
            }
        };

        if let Some(text) = rendered {
            if let Err(e) = writeln!(out, "{}", text) {
                warn!("write error at line {}: {}", number + 1, e);
                break;
            }
        }
    }
}

fn is_notable(output: &SampleOutput, feedback_changed: bool) -> bool {
    output.transition.is_some() || output.rep.is_some() || feedback_changed
}

fn format_output(output: &SampleOutput, args: &Args) -> String {
    if args.json {
        return serde_json::to_string(output)
            .unwrap_or_else(|e| format!("{{\"error\":\"{}\"}}", e));
    }
    let line = if args.no_color {
        output.to_parseable_string()
    } else {
        output.to_terminal_string()
    };
    if args.verbose {
        format!("{} | {}", line, output.to_verbose_suffix())
    } else {
        line
    }
}

/// Print header
fn print_header(calibration: &Calibration, config: &CounterConfig) {
    println!("{}", format!("RepCount v{}", VERSION).bold());
    println!(
        "contracted={:.1}° extended={:.1}° | margin={:.1}° hold={:.2}s min_rep={:.2}s",
        calibration.contracted_threshold,
        calibration.extended_threshold,
        config.hysteresis_margin,
        config.state_hold_time,
        config.min_rep_duration
    );
    println!();
}

/// Print end-of-run summary
fn print_summary(summary: &SessionSummary, json: bool) {
    if json {
        match serde_json::to_string(summary) {
            Ok(line) => println!("{}", line),
            Err(e) => eprintln!("summary: {}", e),
        }
        return;
    }

    println!();
    println!("{}", "Session summary".bold());
    println!("  samples: {}", summary.samples);
    for (limb, line) in summary.limbs.iter() {
        let best = line
            .best_rep_time
            .map(|t| format!("{:.2}s", t))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "  {:<5} reps={} best={} issues={}",
            limb,
            line.rep_count.to_string().green().bold(),
            best,
            line.issues.total()
        );
    }
}

fn fail(message: &str) -> ! {
    eprintln!("{} {}", "error:".red().bold(), message);
    std::process::exit(1);
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Writer whose reader went away
    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn session() -> Session {
        Session::with_seed(Calibration::new(40.0, 160.0), CounterConfig::default(), 1)
    }

    const INPUT: &str = "L 0.00 170\nL 0.05 170\nL 0.10 170\nL 0.15 170\nL 0.20 170\n";

    #[test]
    fn test_run_stops_when_output_closes() {
        let args = Args::parse_from(["repcount", "--no-color"]);
        let mut session = session();

        run(INPUT.as_bytes(), &mut session, &args, &mut ClosedPipe);

        assert_eq!(session.samples(), 1);
    }

    #[test]
    fn test_run_writes_every_sample() {
        let args = Args::parse_from(["repcount", "--json"]);
        let mut session = session();
        let mut out = Vec::new();

        run(INPUT.as_bytes(), &mut session, &args, &mut out);

        assert_eq!(session.samples(), 5);
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 5);
        assert!(text.lines().all(|line| line.starts_with('{')));
    }
}
