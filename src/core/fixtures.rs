use crate::domain::model::Exchange;
use crate::utils::error::Result;
use serde_json::Value;
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_DELETE_ATTEMPTS: u32 = 5;
pub const DEFAULT_DELETE_RETRY_DELAY: Duration = Duration::from_secs(1);

/// 遞迴刪除測試目錄，使用預設的重試次數與間隔
pub fn delete_directory(path: impl AsRef<Path>) -> bool {
    delete_directory_with(path, DEFAULT_DELETE_ATTEMPTS, DEFAULT_DELETE_RETRY_DELAY)
}

/// 遞迴刪除測試目錄，刪除後路徑仍存在時等待再重試
///
/// 清理失敗不應讓測試 setup 失敗，所以回傳路徑最終是否已不存在，
/// 而不是回傳錯誤。
pub fn delete_directory_with(
    path: impl AsRef<Path>,
    max_attempts: u32,
    retry_delay: Duration,
) -> bool {
    let path = path.as_ref();
    let mut attempts = 0;
    let mut exists = path.exists();

    while exists && attempts < max_attempts {
        recursively_delete(path);
        attempts += 1;
        exists = path.exists();
        if exists {
            // 等待作業系統釋放檔案 handle 後再試
            std::thread::sleep(retry_delay);
        }
    }

    !exists
}

fn recursively_delete(path: &Path) {
    if !path.exists() {
        return;
    }

    if path.is_dir() {
        if let Ok(entries) = std::fs::read_dir(path) {
            for entry in entries.flatten() {
                recursively_delete(&entry.path());
            }
        }
        if let Err(e) = std::fs::remove_dir(path) {
            tracing::warn!("Deletion of directory {} failed: {}", path.display(), e);
        }
    } else if let Err(e) = std::fs::remove_file(path) {
        tracing::warn!("Deletion of file {} failed: {}", path.display(), e);
    }
}

/// 建立測試目錄（含中間目錄）
pub fn create_directory(path: impl AsRef<Path>) -> Result<()> {
    std::fs::create_dir_all(path.as_ref())?;
    Ok(())
}

pub fn assert_directory_exists(path: impl AsRef<Path>) {
    let path = path.as_ref();
    assert!(path.exists(), "Directory {} should exist", path.display());
    assert!(
        path.is_dir(),
        "Directory {} should be a directory",
        path.display()
    );
}

pub fn assert_file_exists(path: impl AsRef<Path>) {
    let path = path.as_ref();
    assert!(path.exists(), "File {} should exist", path.display());
    assert!(path.is_file(), "File {} should be a file", path.display());
}

pub fn assert_file_not_exists(path: impl AsRef<Path>) {
    let path = path.as_ref();
    assert!(!path.exists(), "File {} should not exist", path.display());
}

/// 建立帶有指定 body 的測試 exchange
pub fn create_exchange_with_body(body: impl Into<Value>) -> Exchange {
    let mut exchange = Exchange::with_body(body);
    exchange.input_mut().set_header("testkit", true);
    exchange
}
