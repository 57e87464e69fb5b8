use std::fs::{create_dir_all, OpenOptions};
use std::io::{stderr, Write};
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};

static LOG_FILE: OnceLock<Mutex<std::fs::File>> = OnceLock::new();

#[macro_export]
macro_rules! app_log {
    ($($arg:tt)*) => {{
        $crate::logger::log_line(format!($($arg)*));
    }};
}

fn resolve_log_dir() -> Option<PathBuf> {
    if let Some(dir) = std::env::var_os("BRIEFLY_LOG_DIR") {
        return Some(PathBuf::from(dir));
    }
    default_log_dir()
}

#[cfg(target_os = "macos")]
fn default_log_dir() -> Option<PathBuf> {
    let home = std::env::var_os("HOME")?;
    let mut path = PathBuf::from(home);
    path.push("Library");
    path.push("Logs");
    path.push("Briefly");
    Some(path)
}

#[cfg(not(target_os = "macos"))]
fn default_log_dir() -> Option<PathBuf> {
    None
}

pub fn init_file_logger() {
    let Some(log_dir) = resolve_log_dir() else {
        return;
    };

    if create_dir_all(&log_dir).is_err() {
        return;
    }

    let log_path = log_dir.join("run.log");
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path);

    if let Ok(file) = file {
        let _ = LOG_FILE.set(Mutex::new(file));
        log_line(format!("[logger] file logger ready: {}", log_path.display()));
    }
}

pub fn log_line(message: String) {
    let _ = writeln!(stderr(), "{message}");

    if let Some(lock) = LOG_FILE.get() {
        if let Ok(mut file) = lock.lock() {
            let _ = writeln!(file, "{message}");
        }
    }
}
