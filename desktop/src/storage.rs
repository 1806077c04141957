//! Native storage
use crate::Error;
use directories::ProjectDirs;
use std::io::ErrorKind;
use std::path::PathBuf;
use ui::SessionStorage;

#[derive(Clone, Default)]
pub struct DesktopStorage {
    /// The [PathBuf] where the session data will be stored
    data_dir: PathBuf,
}

impl DesktopStorage {
    /// Creates a new instance of `DesktopStorage`, initializing the data directory.
    pub fn new() -> Result<Self, Error> {
        // Two instances running side by side must not share a session.
        let suffix = if std::env::var("DIOXUS_IDENTITY").is_ok() {
            "-second-app"
        } else {
            ""
        };
        let app_name = format!("spotnet{}", suffix);
        let project_dirs = ProjectDirs::from("xyz", "spotnet", &app_name)
            .ok_or_else(|| Error::NoDataDir(app_name.clone()))?;

        Self::in_dir(project_dirs.data_dir().to_path_buf())
    }

    /// Uses `data_dir` directly, creating it if needed.
    pub fn in_dir(data_dir: PathBuf) -> Result<Self, Error> {
        match std::fs::create_dir_all(&data_dir) {
            Ok(()) => Ok(Self { data_dir }),
            Err(source) => Err(Error::CreateDir {
                path: data_dir,
                source,
            }),
        }
    }

    /// Returns the directory where the session data is stored.
    pub fn dir(&self) -> PathBuf {
        self.data_dir.clone()
    }
}

impl SessionStorage for DesktopStorage {
    fn save(&self, key: &str, value: &str) -> Result<(), ui::Error> {
        let path = self.data_dir.join(key);
        std::fs::write(path, value)
            .map_err(|err| ui::Error::Storage(format!("Failed to save data: {:?}", err)))
    }

    fn load(&self, key: &str) -> Result<Option<String>, ui::Error> {
        let path = self.data_dir.join(key);
        match std::fs::read_to_string(path) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(ui::Error::Storage(format!("Failed to load data: {:?}", err))),
        }
    }

    fn delete(&self, key: &str) -> Result<(), ui::Error> {
        let path = self.data_dir.join(key);
        match std::fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(ui::Error::Storage(format!("Failed to delete data: {:?}", err))),
        }
    }

    fn exists(&self, key: &str) -> bool {
        let path = self.data_dir.join(key);
        path.exists()
    }
}
