use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestFleet {
    pub root: TempDir,
}

impl TestFleet {
    pub fn new() -> Self {
        let root = tempfile::tempdir().unwrap();
        fs::create_dir_all(root.path().join("applications")).unwrap();
        Self { root }
    }

    /// composeファイル1枚のアプリケーションディレクトリを作る
    pub fn write_app(&self, name: &str, compose: &str) {
        let dir = self.root.path().join("applications").join(name);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("docker-compose.yaml"), compose).unwrap();
    }

    #[allow(dead_code)]
    pub fn write_makefile(&self, name: &str, content: &str) {
        let dir = self.root.path().join("applications").join(name);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("Makefile"), content).unwrap();
    }

    pub fn write_target(&self, content: &str) {
        fs::write(self.root.path().join("maestro.yaml"), content).unwrap();
    }

    pub fn applications_dir(&self) -> PathBuf {
        self.root.path().join("applications")
    }

    pub fn target_file(&self) -> PathBuf {
        self.root.path().join("maestro.yaml")
    }
}
