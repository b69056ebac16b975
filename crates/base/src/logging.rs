use {
    log::{LevelFilter, Log, Metadata, Record},
    std::{
        fs::{self, File, OpenOptions},
        io::Write,
        path::PathBuf,
        sync::Mutex,
        time::{SystemTime, UNIX_EPOCH},
    },
};

/// Writes every record to stdout, one line each.
pub struct StdoutLogger;

/// Writes records to `<dir>/YYYY-MM-DD.log`, switching files when the
/// UTC date changes.
pub struct FileLogger {
    state: Mutex<FileLoggerState>,
}

struct FileLoggerState {
    dir: PathBuf,
    current_date: String,
    file: File,
}

fn open_day_file(dir: &PathBuf, date: &str) -> std::io::Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join(format!("{date}.log")))
}

/// Format one record as `TIMESTAMP [LEVEL] [thread:ID] file:line - message`.
pub fn format_record(record: &Record) -> String {
    format!(
        "{} [{}] [thread:{:?}] {}:{} - {}",
        format_timestamp(),
        record.level(),
        std::thread::current().id(),
        record.file().unwrap_or("unknown"),
        record.line().unwrap_or(0),
        record.args()
    )
}

impl FileLogger {
    pub fn new(dir: impl Into<PathBuf>) -> std::io::Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        let current_date = format_today();
        let file = open_day_file(&dir, &current_date)?;
        Ok(Self {
            state: Mutex::new(FileLoggerState {
                dir,
                current_date,
                file,
            }),
        })
    }

    /// Path of the file currently being written.
    pub fn current_path(&self) -> PathBuf {
        let state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.dir.join(format!("{}.log", state.current_date))
    }
}

impl Log for StdoutLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        println!("{}", format_record(record));
    }

    fn flush(&self) {
        std::io::stdout().flush().ok();
    }
}

impl Log for FileLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());

        let today = format_today();
        if today != state.current_date {
            match open_day_file(&state.dir, &today) {
                Ok(file) => {
                    state.file = file;
                    state.current_date = today;
                }
                // keep writing to the old file
                Err(error) => eprintln!("failed to roll log file over to {today}: {error}"),
            }
        }

        let line = format_record(record);
        if let Err(error) = writeln!(state.file, "{line}") {
            eprintln!("failed to write log file: {error}");
            eprintln!("{line}");
        }
    }

    fn flush(&self) {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.file.flush().ok();
    }
}

/// Current UTC time as `YYYY-MM-DDTHH:MM:SS`.
pub fn format_timestamp() -> String {
    let secs = unix_seconds();
    let (year, month, day) = civil_from_days((secs / 86400) as i64);
    let time_of_day = secs % 86400;
    format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
        year,
        month,
        day,
        time_of_day / 3600,
        (time_of_day % 3600) / 60,
        time_of_day % 60
    )
}

/// Current UTC date as `YYYY-MM-DD`.
pub fn format_today() -> String {
    let (year, month, day) = civil_from_days((unix_seconds() / 86400) as i64);
    format!("{:04}-{:02}-{:02}", year, month, day)
}

fn unix_seconds() -> u64 {
    // a clock before 1970 is reported as the epoch itself
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

// days since 1970-01-01 to (year, month, day), Howard Hinnant's algorithm
pub(crate) fn civil_from_days(z: i64) -> (i64, u32, u32) {
    let z = z + 719468;
    let era = if z >= 0 { z } else { z - 146096 } / 146097;
    let doe = (z - era * 146097) as u32;
    let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146096) / 365;
    let y = yoe as i64 + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = doy - (153 * mp + 2) / 5 + 1;
    let m = if mp < 10 { mp + 3 } else { mp - 9 };
    (if m <= 2 { y + 1 } else { y }, m, d)
}

/// Install `StdoutLogger` as the global logger. Only the first install in
/// a process takes effect; later calls are ignored.
pub fn init_stdout_logger(level: LevelFilter) {
    static LOGGER: StdoutLogger = StdoutLogger;
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

/// Install a `FileLogger` writing into `dir`. Fails if the directory or
/// today's file cannot be created.
pub fn init_file_logger(dir: impl Into<PathBuf>, level: LevelFilter) -> std::io::Result<()> {
    let logger = FileLogger::new(dir)?;
    if log::set_logger(Box::leak(Box::new(logger))).is_ok() {
        log::set_max_level(level);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_civil_from_days_epoch() {
        assert_eq!(civil_from_days(0), (1970, 1, 1));
    }

    #[test]
    fn test_civil_from_days_leap_day() {
        assert_eq!(civil_from_days(11016), (2000, 2, 29));
    }

    #[test]
    fn test_civil_from_days_year_end() {
        assert_eq!(civil_from_days(20088), (2024, 12, 31));
    }

    #[test]
    fn test_file_logger_rolls_over_to_today() {
        let dir = std::env::temp_dir().join(format!("imuview-log-{}-rollover", std::process::id()));
        let _ = fs::remove_dir_all(&dir);

        let logger = FileLogger::new(&dir).unwrap();
        {
            let mut state = logger.state.lock().unwrap();
            state.current_date = "1999-01-01".to_string();
            state.file = open_day_file(&dir, "1999-01-01").unwrap();
        }

        logger.log(
            &log::RecordBuilder::new()
                .level(log::Level::Info)
                .file(Some("state.rs"))
                .line(Some(7))
                .args(format_args!("after midnight"))
                .build(),
        );

        let today = fs::read_to_string(logger.current_path()).unwrap();
        assert!(today.contains("after midnight"));
        assert!(dir.join("1999-01-01.log").exists());

        fs::remove_dir_all(&dir).ok();
    }
}
