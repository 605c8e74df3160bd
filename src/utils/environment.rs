#[cfg(feature = "probes")]
use sysinfo::{RefreshKind, System};

/// 判斷目前作業系統是否為指定平台（不分大小寫的包含比對）
///
/// 比對對象是 `std::env::consts::OS`（例如 "linux"、"windows"、"macos"）。
pub fn is_platform(platform: &str) -> bool {
    std::env::consts::OS
        .to_lowercase()
        .contains(&platform.to_lowercase())
}

/// 判斷目前 CPU 架構是否為指定架構（不分大小寫的包含比對）
pub fn is_arch(arch: &str) -> bool {
    std::env::consts::ARCH
        .to_lowercase()
        .contains(&arch.to_lowercase())
}

#[cfg(feature = "probes")]
pub fn os_name() -> Option<String> {
    System::name()
}

#[cfg(feature = "probes")]
pub fn os_version() -> Option<String> {
    System::os_version()
}

#[cfg(feature = "probes")]
pub fn kernel_version() -> Option<String> {
    System::kernel_version()
}

/// 記錄測試環境資訊，方便排查平台相關的測試失敗
#[cfg(feature = "probes")]
pub fn log_environment() {
    let mut system = System::new_with_specifics(RefreshKind::everything());
    system.refresh_all();
    let total_memory_mb = system.total_memory() / 1024 / 1024;

    tracing::info!(
        "📊 Test environment - OS: {} ({}), Kernel: {}, Arch: {}, Memory: {}MB",
        os_name().unwrap_or_else(|| std::env::consts::OS.to_string()),
        os_version().unwrap_or_else(|| "unknown".to_string()),
        kernel_version().unwrap_or_else(|| "unknown".to_string()),
        std::env::consts::ARCH,
        total_memory_mb
    );
}

// 停用 probes feature 時提供空實現
#[cfg(not(feature = "probes"))]
pub fn os_name() -> Option<String> {
    None
}

#[cfg(not(feature = "probes"))]
pub fn os_version() -> Option<String> {
    None
}

#[cfg(not(feature = "probes"))]
pub fn kernel_version() -> Option<String> {
    None
}

#[cfg(not(feature = "probes"))]
pub fn log_environment() {
    tracing::info!(
        "📊 Test environment - OS: {}, Arch: {}",
        std::env::consts::OS,
        std::env::consts::ARCH
    );
}
