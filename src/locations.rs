use directories::BaseDirs;
use std::path::{Path, PathBuf};

pub(crate) fn get_main_dir() -> PathBuf {
    let base_dir: BaseDirs = BaseDirs::new().unwrap();
    let user_data_dir: &Path = base_dir.data_dir();
    let package_root: PathBuf = user_data_dir.join("protocol-terminal");
    if !package_root.exists() {
        std::fs::create_dir_all(&package_root).unwrap();
    }
    package_root
}

pub(crate) fn get_design_db_path() -> PathBuf {
    get_main_dir().join(".designs")
}

pub(crate) fn get_log_dir() -> PathBuf {
    let log_dir = get_main_dir().join("logs");
    if !log_dir.exists() {
        std::fs::create_dir_all(&log_dir).unwrap();
    }
    log_dir
}
