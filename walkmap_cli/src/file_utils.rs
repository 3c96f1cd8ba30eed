use std::path::{Path, PathBuf};

const TRACK_EXTENSION: &str = "csv";

/// Collects every `.csv` file below `folder_path`, sorted by path.
pub fn read_folder(folder_path: &Path) -> Result<Vec<PathBuf>, std::io::Error> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(folder_path)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() {
            if path
                .extension()
                .is_some_and(|extension| extension == TRACK_EXTENSION)
            {
                files.push(path);
            }
        } else if path.is_dir() {
            files.extend(read_folder(&path)?);
        }
    }

    files.sort();

    Ok(files)
}
