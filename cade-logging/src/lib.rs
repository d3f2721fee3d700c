//! Tracing subscriber setup for the cade binary.
//!
//! Configured entirely through environment variables:
//!
//! | Variable             | Values                      | Default                 |
//! |----------------------|-----------------------------|-------------------------|
//! | `CADE_LOG_LEVEL`     | any `EnvFilter` directive   | `warn`                  |
//! | `CADE_LOG_OUTPUT`    | `console`, `file`, `both`   | `console`               |
//! | `CADE_LOG_FORMAT`    | `human`, `json`             | `human`                 |
//! | `CADE_LOG_FILE_PATH` | path                        | `~/.cade/logs/cade.log` |
//!
//! `RUST_LOG` overrides `CADE_LOG_LEVEL` when set. Console output is written
//! to stderr; stdout is reserved for command results.

use std::{
    env, fs,
    io::{self, Write},
    path::{Path, PathBuf},
};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt::MakeWriter, prelude::*, registry, EnvFilter};

// --- Custom "Tee" Writer ---
struct Tee<A, B> {
    a: A,
    b: B,
}

impl<A, B> Write for Tee<A, B>
where
    A: Write,
    B: Write,
{
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let res_a = self.a.write(buf);
        let res_b = self.b.write(buf);
        res_a.or(res_b)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.a.flush()?;
        self.b.flush()
    }
}

#[derive(Clone)]
struct MakeTee<A, B> {
    make_a: A,
    make_b: B,
}

impl<'a, A, B, W1, W2> MakeWriter<'a> for MakeTee<A, B>
where
    A: MakeWriter<'a, Writer = W1>,
    B: MakeWriter<'a, Writer = W2>,
    W1: Write + 'a,
    W2: Write + 'a,
{
    type Writer = Tee<W1, W2>;
    fn make_writer(&'a self) -> Self::Writer {
        Tee {
            a: self.make_a.make_writer(),
            b: self.make_b.make_writer(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogOutput {
    Console,
    File,
    Both,
}

impl LogOutput {
    fn parse(value: &str) -> Self {
        match value {
            "file" => LogOutput::File,
            "both" => LogOutput::Both,
            _ => LogOutput::Console,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Human,
    Json,
}

/// Logging settings resolved from the environment.
#[derive(Debug, Clone)]
pub struct LogSettings {
    pub level: String,
    pub output: LogOutput,
    pub format: LogFormat,
    pub file_path: PathBuf,
}

impl LogSettings {
    pub fn from_env() -> Self {
        let level = env::var("CADE_LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());
        let output = env::var("CADE_LOG_OUTPUT")
            .map(|v| LogOutput::parse(&v))
            .unwrap_or(LogOutput::Console);
        let format = match env::var("CADE_LOG_FORMAT").as_deref() {
            Ok("json") => LogFormat::Json,
            _ => LogFormat::Human,
        };
        let file_path = env::var("CADE_LOG_FILE_PATH")
            .map(PathBuf::from)
            .ok()
            .or_else(|| cade_core::user_paths::default_log_file().ok())
            .unwrap_or_else(|| env::temp_dir().join("cade.log"));

        Self {
            level,
            output,
            format,
            file_path,
        }
    }

    /// Raises the level to `debug` (the `--debug` flag).
    pub fn with_debug(mut self, debug: bool) -> Self {
        if debug {
            self.level = "debug".to_string();
        }
        self
    }

    fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&self.level))
            .unwrap_or_else(|_| EnvFilter::new("warn"))
    }
}

/// Opens the rolling file appender, or `None` if its directory is unusable.
fn file_writer(path: &Path) -> Option<(tracing_appender::non_blocking::NonBlocking, WorkerGuard)> {
    let log_dir = path.parent().unwrap_or_else(|| Path::new("."));
    let log_filename = path.file_name()?;
    fs::create_dir_all(log_dir).ok()?;

    let appender = tracing_appender::rolling::daily(log_dir, log_filename);
    Some(tracing_appender::non_blocking(appender))
}

/// Initializes the global tracing subscriber.
///
/// The returned guard must stay alive for file output to be flushed. A
/// subscriber that is already installed is left in place.
pub fn init_subscriber(settings: &LogSettings) -> Option<WorkerGuard> {
    let subscriber = registry().with(settings.env_filter());
    let is_json = settings.format == LogFormat::Json;

    let file = match settings.output {
        LogOutput::Console => None,
        LogOutput::File | LogOutput::Both => file_writer(&settings.file_path),
    };

    match (settings.output, file) {
        (LogOutput::Both, Some((non_blocking, guard))) => {
            let tee_writer = MakeTee {
                make_a: io::stderr,
                make_b: non_blocking,
            };
            let fmt_layer = tracing_subscriber::fmt::layer().with_writer(tee_writer);
            if is_json {
                let _ = subscriber.with(fmt_layer.json()).try_init();
            } else {
                let _ = subscriber.with(fmt_layer.compact()).try_init();
            }
            Some(guard)
        }
        (LogOutput::File, Some((non_blocking, guard))) => {
            let fmt_layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(non_blocking);
            if is_json {
                let _ = subscriber.with(fmt_layer.json()).try_init();
            } else {
                let _ = subscriber.with(fmt_layer.compact()).try_init();
            }
            Some(guard)
        }
        // Console, or a file target that could not be opened.
        _ => {
            let fmt_layer = tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr);
            if is_json {
                let _ = subscriber.with(fmt_layer.json()).try_init();
            } else {
                let _ = subscriber.with(fmt_layer.compact()).try_init();
            }
            None
        }
    }
}
