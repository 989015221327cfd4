//! Colorful console output for searchbench runs.
//!
//! Provides a custom `tracing` layer that formats driver and engine events
//! with colors.
//!
//! ## Log Levels
//!
//! - **INFO**: Run lifecycle, per-combination results, search diagnostics
//! - **WARN**: Failed combinations
//! - **TRACE**: Individual benchmark iterations (not rendered)

use std::collections::HashMap;
use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;
use std::time::Instant;

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();
static RUN_START_NANOS: AtomicU64 = AtomicU64::new(0);

/// Package version for banner display.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initializes the console output.
///
/// Safe to call multiple times - only the first call has effect.
/// Prints the banner and sets up tracing with an `info` default that
/// `RUST_LOG` overrides.
pub fn init() {
    INIT.get_or_init(|| {
        print_banner();

        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(SearchConsoleLayer)
            .try_init();
    });
}

fn mark_run_start() {
    let epoch = EPOCH.get_or_init(Instant::now);
    let nanos = epoch.elapsed().as_nanos() as u64;
    RUN_START_NANOS.store(nanos, Ordering::Relaxed);
}

fn elapsed_secs() -> f64 {
    let Some(epoch) = EPOCH.get() else {
        return 0.0;
    };
    let start_nanos = RUN_START_NANOS.load(Ordering::Relaxed);
    let now_nanos = epoch.elapsed().as_nanos() as u64;
    now_nanos.saturating_sub(start_nanos) as f64 / 1_000_000_000.0
}

fn print_banner() {
    let banner = r#"
                          _     _                     _
 ___  ___  __ _ _ __ ___| |__ | |__   ___ _ __   ___| |__
/ __|/ _ \/ _` | '__/ __| '_ \| '_ \ / _ \ '_ \ / __| '_ \
\__ \  __/ (_| | | | (__| | | | |_) |  __/ | | | (__| | | |
|___/\___|\__,_|_|  \___|_| |_|_.__/ \___|_| |_|\___|_| |_|
"#;

    let version_line = format!(
        "                 v{} - Search Strategy Test Bench\n",
        VERSION
    );

    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{}", banner.bright_cyan());
    let _ = writeln!(stdout, "{}", version_line.bright_white().bold());
    let _ = stdout.flush();
}

/// A tracing layer that formats searchbench events with colors.
pub struct SearchConsoleLayer;

impl<S: Subscriber> Layer<S> for SearchConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();

        // Accept events from searchbench crates only
        if !metadata.target().starts_with("searchbench") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor, *metadata.level());
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Debug, Default)]
struct EventVisitor {
    event: Option<String>,
    text: HashMap<&'static str, String>,
    counts: HashMap<&'static str, u64>,
    millis: HashMap<&'static str, f64>,
    flags: HashMap<&'static str, bool>,
}

impl EventVisitor {
    fn text(&self, name: &str) -> &str {
        self.text.get(name).map(String::as_str).unwrap_or("")
    }

    fn count(&self, name: &str) -> u64 {
        self.counts.get(name).copied().unwrap_or(0)
    }

    fn ms(&self, name: &str) -> f64 {
        self.millis.get(name).copied().unwrap_or(0.0)
    }

    fn flag(&self, name: &str) -> bool {
        self.flags.get(name).copied().unwrap_or(false)
    }
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        self.record_str(field, s.trim_matches('"'));
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.counts.insert(field.name(), value);
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value.max(0) as u64);
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        self.millis.insert(field.name(), value);
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.flags.insert(field.name(), value);
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "event" => self.event = Some(value.to_string()),
            name => {
                self.text.insert(name, value.to_string());
            }
        }
    }
}

fn format_event(v: &EventVisitor, level: Level) -> String {
    let event = v.event.as_deref().unwrap_or("");

    match event {
        "run_start" => format_run_start(v),
        "combination_start" => format_combination_start(v),
        "demo_end" => format_demo_end(v),
        "combination_failed" => format_combination_failed(v, level),
        "benchmark_end" => format_benchmark_end(v),
        "run_end" => format_run_end(v),
        "interrupted" => format_interrupted(),
        "search_start" => format_search_start(v),
        "expand" => format_expand(v),
        "frontier" => format_frontier(v),
        "search_end" => format_search_end(v),
        "no_solution" => format_no_solution(v),
        "draw" => format_draw(v),
        _ => String::new(),
    }
}

fn format_elapsed() -> String {
    format!("{:>7.3}s", elapsed_secs())
        .bright_black()
        .to_string()
}

fn fmt_count(n: u64) -> String {
    n.to_formatted_string(&Locale::en)
}

fn format_run_start(v: &EventVisitor) -> String {
    mark_run_start();

    let mut output = format!(
        "{} {} Running {} combinations │ {} problems × {} heuristics × {} strategies │ verbosity {}",
        format_elapsed(),
        "▶".bright_green().bold(),
        fmt_count(v.count("total")).bright_yellow(),
        fmt_count(v.count("problems")).bright_yellow(),
        fmt_count(v.count("heuristics")).bright_yellow(),
        fmt_count(v.count("strategies")).bright_yellow(),
        v.count("verbosity").bright_magenta(),
    );
    if v.flag("draw") {
        output.push_str(&format!(" │ {}", "draw".bright_cyan()));
    }
    if v.flag("timing") {
        output.push_str(&format!(" │ {}", "timed".bright_cyan()));
    }
    output
}

fn format_combination_start(v: &EventVisitor) -> String {
    format!(
        "\n{} {} [{}/{}] {}",
        format_elapsed(),
        "▶".bright_blue(),
        v.count("index"),
        v.count("total"),
        v.text("title").white().bold()
    )
}

fn format_demo_end(v: &EventVisitor) -> String {
    format!(
        "{} {} {} │ {}",
        format_elapsed(),
        "✓".bright_green(),
        v.text("title"),
        v.text("summary")
    )
}

fn format_combination_failed(v: &EventVisitor, level: Level) -> String {
    let icon = if level == Level::ERROR {
        "✗".red().bold().to_string()
    } else {
        "✗".bright_red().to_string()
    };
    format!(
        "{} {} {} run of '{}' failed │ {}",
        format_elapsed(),
        icon,
        v.text("phase"),
        v.text("title"),
        v.text("error").bright_red()
    )
}

fn format_benchmark_end(v: &EventVisitor) -> String {
    format!(
        "{} {} {} │ {} runs │ mean {} │ min {} │ max {} │ ± {}",
        format_elapsed(),
        "⏱".bright_cyan(),
        v.text("title"),
        fmt_count(v.count("runs")).white(),
        format_ms(v.ms("mean_ms")).bright_magenta().bold(),
        format_ms(v.ms("min_ms")).yellow(),
        format_ms(v.ms("max_ms")).yellow(),
        format_ms(v.ms("std_dev_ms")).bright_black(),
    )
}

fn format_run_end(v: &EventVisitor) -> String {
    let failed = v.count("failed");
    let status = if failed == 0 {
        "ALL SUCCEEDED".bright_green().bold().to_string()
    } else {
        format!("{} FAILED", fmt_count(failed))
            .bright_red()
            .bold()
            .to_string()
    };

    format!(
        "\n{} {} Run complete │ {} combinations │ {} succeeded │ {} │ {}",
        format_elapsed(),
        "■".bright_cyan().bold(),
        fmt_count(v.count("total")),
        fmt_count(v.count("succeeded")).bright_green(),
        status,
        format_duration_ms(v.count("duration_ms")).yellow(),
    )
}

fn format_interrupted() -> String {
    format!(
        "\n{} {} Interrupted by operator. Exiting.",
        format_elapsed(),
        "✗".bright_red().bold()
    )
}

fn format_search_start(v: &EventVisitor) -> String {
    format!(
        "          {} search │ strategy {} │ frontier ordered by {}",
        "·".bright_black(),
        v.text("strategy").bright_cyan(),
        v.text("order")
    )
}

fn format_expand(v: &EventVisitor) -> String {
    format!(
        "          {} {:>6} expand {}",
        "·".bright_black(),
        fmt_count(v.count("iteration")).bright_black(),
        v.text("node")
    )
}

fn format_frontier(v: &EventVisitor) -> String {
    format!(
        "          {} frontier +{} -{} ~{} │ size {} │ {}",
        "·".bright_black(),
        v.count("added"),
        v.count("discarded"),
        v.count("removed"),
        fmt_count(v.count("size")).white(),
        v.text("head").bright_black()
    )
}

fn format_search_end(v: &EventVisitor) -> String {
    format!(
        "          {} solved │ {} states │ cost {} │ {} generated │ {} pruned │ {} explored │ {} left",
        "■".bright_green(),
        fmt_count(v.count("path_length")),
        fmt_count(v.count("cost")).bright_yellow(),
        fmt_count(v.count("generated")),
        fmt_count(v.count("pruned")),
        fmt_count(v.count("explored")),
        fmt_count(v.count("frontier")),
    )
}

fn format_no_solution(v: &EventVisitor) -> String {
    format!(
        "          {} no solution │ {} generated │ {} pruned │ {} explored",
        "■".bright_red(),
        fmt_count(v.count("generated")),
        fmt_count(v.count("pruned")),
        fmt_count(v.count("explored")),
    )
}

fn format_draw(v: &EventVisitor) -> String {
    format!("{}\n{}", v.text("title").bright_white().bold(), v.text("picture"))
}

fn format_ms(ms: f64) -> String {
    if ms < 1.0 {
        format!("{:.1}µs", ms * 1000.0)
    } else if ms < 1000.0 {
        format!("{:.3}ms", ms)
    } else {
        format!("{:.3}s", ms / 1000.0)
    }
}

fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        let mins = ms / 60_000;
        let secs = (ms % 60_000) / 1000;
        format!("{}m {}s", mins, secs)
    }
}
