// 詳細ログ（ファイルへ出力、テスト時はメモリにも）

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard};

/// グローバルな詳細ログフラグ
pub static VERBOSE_LOGGING: AtomicBool = AtomicBool::new(false);

/// ログの出力先
enum LogSink {
    File(File),
    #[cfg(test)]
    Memory(Vec<String>),
}

static LOG_SINK: Mutex<Option<LogSink>> = Mutex::new(None);

fn sink() -> MutexGuard<'static, Option<LogSink>> {
    // 書き込み途中のパニックで毒化しても出力先は壊れない
    match LOG_SINK.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

/// ログファイルを初期化する（既存の内容は消す）
pub fn init_log_file<P: AsRef<Path>>(path: P) -> std::io::Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)?;
    *sink() = Some(LogSink::File(file));
    Ok(())
}

/// メモリへの記録を始める（[`take_captured`] で回収）
#[cfg(test)]
pub(crate) fn capture_in_memory() {
    *sink() = Some(LogSink::Memory(Vec::new()));
}

/// メモリに溜まったログを取り出す
#[cfg(test)]
pub(crate) fn take_captured() -> Vec<String> {
    match sink().as_mut() {
        Some(LogSink::Memory(lines)) => std::mem::take(lines),
        _ => Vec::new(),
    }
}

/// 出力先を外す
pub fn close_log() {
    *sink() = None;
}

/// ログを1行書き込む
pub fn write_log(message: String) {
    match sink().as_mut() {
        Some(LogSink::File(file)) => {
            let _ = writeln!(file, "{}", message);
            let _ = file.flush();
        }
        #[cfg(test)]
        Some(LogSink::Memory(lines)) => lines.push(message),
        None => {}
    }
}

/// 詳細ログを有効にする
pub fn enable_verbose_logging() {
    VERBOSE_LOGGING.store(true, Ordering::Relaxed);
}

/// 詳細ログを無効にする
pub fn disable_verbose_logging() {
    VERBOSE_LOGGING.store(false, Ordering::Relaxed);
}

/// 詳細ログが有効かチェック
pub fn is_verbose() -> bool {
    VERBOSE_LOGGING.load(Ordering::Relaxed)
}

/// 詳細ログ出力マクロ
#[macro_export]
macro_rules! vlog {
    ($($arg:tt)*) => {
        if $crate::logging::is_verbose() {
            let message = format!($($arg)*);
            $crate::logging::write_log(message);
        }
    };
}
