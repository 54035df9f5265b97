use crate::config::{LogFormat, LoggingConfig};
use crate::errors::ConfigError;
use chrono::Local;
use std::fmt;
use std::path::Path;
use tracing::{info, Event, Subscriber};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{
    fmt::{
        format::{self, FormatEvent, FormatFields},
        FmtContext, FormattedFields,
    },
    layer::SubscriberExt,
    registry::LookupSpan,
    util::SubscriberInitExt,
    EnvFilter, Layer,
};

/// Log file line format: `<timestamp>, <LEVEL>, <message>`. Events inside spans get the
/// span chain as a prefix, e.g. `cycle{id=3}: Requesting homework statuses from_date=1000`.
pub struct LineFormat;

impl<S, N> FormatEvent<S, N> for LineFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: format::Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        write!(
            writer,
            "{}, {}, ",
            Local::now().format("%Y-%m-%d %H:%M:%S,%3f"),
            event.metadata().level()
        )?;

        if let Some(scope) = ctx.event_scope() {
            for span in scope.from_root() {
                write!(writer, "{}", span.name())?;
                let extensions = span.extensions();
                if let Some(fields) = extensions.get::<FormattedFields<N>>() {
                    if !fields.is_empty() {
                        write!(writer, "{{{fields}}}")?;
                    }
                }
                write!(writer, ": ")?;
            }
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Install the global subscriber: an append-only file sink in [`LineFormat`] plus a console
/// layer. Keep the returned guard alive or buffered lines are lost on exit.
pub fn init_logging(config: &LoggingConfig) -> Result<WorkerGuard, ConfigError> {
    let env_filter = EnvFilter::try_new(&config.log_level)
        .map_err(|e| ConfigError::invalid_value("LOG_LEVEL", &config.log_level, e))?;

    let (directory, file_name) = split_log_path(&config.log_file)?;
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name.to_string_lossy())
        .build(directory)
        .map_err(|e| ConfigError::Logging(e.to_string()))?;
    let (file_writer, guard) = tracing_appender::non_blocking(appender);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_writer(file_writer)
        .event_format(LineFormat);

    let console_layer = match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .with_current_span(true)
            .with_writer(std::io::stderr)
            .boxed(),
        LogFormat::Pretty => tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_writer(std::io::stderr)
            .boxed(),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(console_layer)
        .try_init()
        .map_err(|e| ConfigError::Logging(e.to_string()))?;

    info!(
        service = "homework-bot",
        version = env!("CARGO_PKG_VERSION"),
        log_file = %config.log_file.display(),
        log_level = %config.log_level,
        "Logging initialized"
    );

    Ok(guard)
}

fn split_log_path(path: &Path) -> Result<(&Path, &std::ffi::OsStr), ConfigError> {
    let file_name = path.file_name().ok_or_else(|| {
        ConfigError::invalid_value("LOG_FILE", &path.display().to_string(), "not a file path")
    })?;
    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    Ok((directory, file_name))
}
