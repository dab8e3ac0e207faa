//! Colorful console output for solver events.
//!
//! Provides a `tracing` layer that formats solver events with colors.
//! Enabled with the `console` feature.

use std::io::{self, Write};
use std::sync::OnceLock;

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();

/// Initializes console output.
///
/// `default_directives` is used unless `RUST_LOG` is set, e.g. `"info"` or
/// `"knapforge_solver=debug"`. Safe to call multiple times; only the first
/// call has effect.
pub fn init(default_directives: &str) {
    INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_directives));

        // Another subscriber may already be installed by the host program.
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(KnapsackConsoleLayer)
            .try_init();
    });
}

/// A tracing layer that formats KnapForge events with colors.
///
/// Solver events are rendered on stdout. Warnings and errors from the
/// other KnapForge crates go to stderr.
pub struct KnapsackConsoleLayer;

impl<S: Subscriber> Layer<S> for KnapsackConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let target = metadata.target();
        if !target.starts_with("knapforge") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        if target.starts_with("knapforge_solver") {
            let output = format_solver_event(&visitor);
            if !output.is_empty() {
                let _ = writeln!(io::stdout(), "{}", output);
                return;
            }
        }
        if *metadata.level() <= Level::WARN {
            let _ = writeln!(
                io::stderr(),
                "{} {} {}",
                timestamp().bright_black(),
                metadata.level().as_str().bright_yellow(),
                visitor.summary(),
            );
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    message: Option<String>,
    strategy: Option<String>,
    status: Option<String>,
    item_count: Option<u64>,
    capacity: Option<i64>,
    total_value: Option<i64>,
    value: Option<i64>,
    selected: Option<u64>,
    nodes: Option<u64>,
    duration_ms: Option<u64>,
    line: Option<u64>,
}

impl EventVisitor {
    fn summary(&self) -> String {
        let mut out = self
            .event
            .clone()
            .or_else(|| self.message.clone())
            .unwrap_or_default();
        if let Some(line) = self.line {
            out.push_str(&format!(" (line {})", line));
        }
        out
    }
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value).trim_matches('"').to_string();
        match field.name() {
            "event" => self.event = Some(s),
            "message" => self.message = Some(s),
            "strategy" => self.strategy = Some(s),
            "status" => self.status = Some(s),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "item_count" => self.item_count = Some(value),
            "selected" => self.selected = Some(value),
            "nodes" => self.nodes = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            "line" => self.line = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        match field.name() {
            "capacity" => self.capacity = Some(value),
            "total_value" => self.total_value = Some(value),
            "value" => self.value = Some(value),
            _ => self.record_u64(field, value.max(0) as u64),
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "event" => self.event = Some(value.to_string()),
            "message" => self.message = Some(value.to_string()),
            "strategy" => self.strategy = Some(value.to_string()),
            "status" => self.status = Some(value.to_string()),
            _ => {}
        }
    }
}

fn format_solver_event(v: &EventVisitor) -> String {
    match v.event.as_deref().unwrap_or("") {
        "solve_start" => format_solve_start(v),
        "new_best" => format_new_best(v),
        "solve_end" => format_solve_end(v),
        _ => String::new(),
    }
}

fn format_solve_start(v: &EventVisitor) -> String {
    format!(
        "{} {} {} item count ({}), capacity ({}), strategy ({})",
        timestamp().bright_black(),
        "INFO".bright_green(),
        "[Solver]".bright_cyan(),
        v.item_count.unwrap_or(0).to_formatted_string(&Locale::en).bright_yellow(),
        v.capacity.unwrap_or(0).to_formatted_string(&Locale::en).bright_yellow(),
        v.strategy.as_deref().unwrap_or("unknown").bright_magenta(),
    )
}

fn format_new_best(v: &EventVisitor) -> String {
    format!(
        "    {} Node {:>9} | value {}",
        "->".bright_blue(),
        v.nodes.unwrap_or(0).to_formatted_string(&Locale::en).white(),
        v.value.unwrap_or(0).to_formatted_string(&Locale::en).bright_green(),
    )
}

fn format_solve_end(v: &EventVisitor) -> String {
    let status = v.status.as_deref().unwrap_or("unknown");
    let status = if status == "optimal" {
        status.bright_green().bold().to_string()
    } else {
        status.bright_yellow().bold().to_string()
    };
    format!(
        "{} {} {} Solving ended: {} value ({}), items ({}), nodes ({}), time spent ({})",
        timestamp().bright_black(),
        "INFO".bright_green(),
        "[Solver]".bright_cyan(),
        status,
        v.total_value.unwrap_or(0).to_formatted_string(&Locale::en).bright_green(),
        v.selected.unwrap_or(0).to_formatted_string(&Locale::en).white(),
        v.nodes.unwrap_or(0).to_formatted_string(&Locale::en).bright_magenta(),
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow(),
    )
}

fn timestamp() -> String {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| {
            let secs = d.as_secs() % 100000;
            let millis = d.subsec_millis();
            format!("{:5}.{:03}", secs, millis)
        })
        .unwrap_or_else(|_| "    0.000".to_string())
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration_ms(250), "250ms");
        assert_eq!(format_duration_ms(1500), "1.50s");
        assert_eq!(format_duration_ms(125_000), "2m 5s");
    }

    #[test]
    fn test_unknown_events_are_not_rendered() {
        let visitor = EventVisitor {
            event: Some("prune".to_string()),
            ..Default::default()
        };
        assert!(format_solver_event(&visitor).is_empty());
    }

    #[test]
    fn test_solve_end_mentions_value() {
        let visitor = EventVisitor {
            event: Some("solve_end".to_string()),
            status: Some("optimal".to_string()),
            total_value: Some(220),
            selected: Some(2),
            nodes: Some(7),
            ..Default::default()
        };
        let output = format_solver_event(&visitor);
        assert!(output.contains("Solving ended"));
        assert!(output.contains("220"));
    }

    #[test]
    fn test_summary_includes_line() {
        let visitor = EventVisitor {
            event: Some("catalogue_line_skipped".to_string()),
            line: Some(4),
            ..Default::default()
        };
        assert_eq!(visitor.summary(), "catalogue_line_skipped (line 4)");
    }
}
