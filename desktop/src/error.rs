use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The platform reports no data directory, usually because there is no home directory
    #[error("No data directory for {0} on this platform")]
    NoDataDir(String),

    /// The session directory could not be created
    #[error("Cannot create session directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
