use std::path::{Path, PathBuf};

/// Pick the directory exports are rooted under.
///
/// A configured root wins; otherwise the platform documents directory
/// (shared storage on Android), then the app's private data directory.
pub fn pick_storage_root(
    configured: Option<&Path>,
    documents: Option<PathBuf>,
    app_data: Option<PathBuf>,
) -> Option<PathBuf> {
    configured
        .map(Path::to_path_buf)
        .or(documents)
        .or(app_data)
}
