use crate::config::AppConfig;
use tracing::level_filters::LevelFilter;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{
    fmt::{self, time::OffsetTime},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer,
};

/// Install the global subscriber for a `voyage` process.
///
/// Events go to a daily `voyage.*.log` under the data directory at `info`
/// (`debug` when `verbose`), or whatever `RUST_LOG` asks for. The stderr
/// layer only shows warnings unless `verbose` is set, since stdout and
/// stderr belong to command output.
///
/// The returned guard flushes the file writer when dropped; hold it until
/// the process exits.
pub fn init_logging(
    config: &AppConfig,
    verbose: bool,
) -> Result<WorkerGuard, Box<dyn std::error::Error>> {
    let logs_dir = config.logs_path();
    std::fs::create_dir_all(&logs_dir)?;

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("voyage")
        .filename_suffix("log")
        .build(&logs_dir)?;
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    // Local offset is unavailable in some sandboxes
    let timer = OffsetTime::local_rfc_3339().unwrap_or_else(|_| {
        OffsetTime::new(
            time::UtcOffset::UTC,
            time::format_description::well_known::Rfc3339,
        )
    });

    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let console_level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(file_writer)
                .with_timer(timer.clone())
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_timer(timer)
                .with_target(false)
                .with_filter(console_level),
        )
        .try_init()?;

    tracing::debug!("Writing logs to {:?}", logs_dir);

    Ok(guard)
}
