use std::path::{Path, PathBuf};
use tokio::fs;

use crate::location::Location;

/// Flat JSON-array persistence for the scraped location list.
#[derive(Debug)]
pub struct FileStore(PathBuf);

impl FileStore {
    pub fn open(p: impl AsRef<Path>) -> Self {
        Self(p.as_ref().to_owned())
    }

    pub fn path(&self) -> &Path {
        &self.0
    }

    pub async fn load(&self) -> crate::Result<Option<Vec<Location>>> {
        if fs::try_exists(&self.0).await? {
            let contents = fs::read_to_string(&self.0).await?;
            let locations = serde_json::from_str(&contents)?;
            Ok(Some(locations))
        } else {
            Ok(None)
        }
    }

    pub async fn save(&self, locations: &[Location]) -> crate::Result<()> {
        let json = serde_json::to_vec_pretty(locations)?;
        fs::write(&self.0, json).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Location> {
        vec![
            Location {
                state: "Wisconsin".to_string(),
                city: "Madison".to_string(),
                name: "S Park St".to_string(),
                latitude: 43.07,
                longitude: -89.4,
            },
            Location {
                state: "Minnesota".to_string(),
                city: "Duluth".to_string(),
                name: "Mall Dr".to_string(),
                latitude: 0.0,
                longitude: 0.0,
            },
        ]
    }

    #[tokio::test]
    async fn test_save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path().join("locations.json"));

        let locations = sample();
        store.save(&locations).await.unwrap();
        let loaded = store.load().await.unwrap().unwrap();
        assert_eq!(locations, loaded);
    }

    #[tokio::test]
    async fn test_load_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path().join("locations.json"));
        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path().join("locations.json"));

        store.save(&sample()).await.unwrap();
        store.save(&[]).await.unwrap();
        let loaded = store.load().await.unwrap().unwrap();
        assert!(loaded.is_empty());
    }
}
