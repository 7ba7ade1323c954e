use colored::{ColoredString, Colorize};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::{
    EnvFilter,
    fmt::{
        FmtContext, FormatEvent,
        format::{self, Writer},
    },
    registry::LookupSpan,
};
use veil::{Error, sanitize_log_message};

/// Prints one line per event behind a level symbol. The formatted fields are
/// passed through message sanitization before they reach the writer.
pub struct VeilFormatter;

impl<S, N> FormatEvent<S, N> for VeilFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let (symbol, color_func): (&str, fn(ColoredString) -> ColoredString) =
            match *event.metadata().level() {
                Level::TRACE => ("[ ]", |s| s.dimmed()),
                Level::DEBUG => ("[?]", |s| s.blue()),
                Level::INFO => ("[+]", |s| s.green().bold()),
                Level::WARN => ("[*]", |s| s.yellow().bold()),
                Level::ERROR => ("[-]", |s| s.red().bold()),
            };

        let mut fields = String::new();
        ctx.field_format()
            .format_fields(Writer::new(&mut fields), event)?;

        writeln!(
            writer,
            "{} {}",
            color_func(symbol.into()),
            sanitize_log_message(&fields)
        )
    }
}

/// Maps a configured level name to a filter directive.
///
/// Accepts the usual names in any case, including `WARNING` and `CRITICAL`.
pub fn level_directive(level: &str) -> veil::Result<&'static str> {
    match level.trim().to_ascii_uppercase().as_str() {
        "TRACE" => Ok("trace"),
        "DEBUG" => Ok("debug"),
        "INFO" => Ok("info"),
        "WARN" | "WARNING" => Ok("warn"),
        "ERROR" | "CRITICAL" => Ok("error"),
        "OFF" => Ok("off"),
        _ => Err(Error::configuration(format!("unknown log level: {level}"))),
    }
}

fn env_filter(level: &str) -> veil::Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => Ok(EnvFilter::new(level_directive(level)?)),
    }
}

/// Installs the global subscriber. `RUST_LOG` wins over `level` when set.
///
/// Returns `false` when a subscriber was already installed; the call is then
/// a no-op.
pub fn init_logging(level: &str) -> veil::Result<bool> {
    let filter = env_filter(level)?;

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stdout)
        .event_format(VeilFormatter)
        .try_init()
        .is_ok();

    Ok(installed)
}
