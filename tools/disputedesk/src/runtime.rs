use crate::errors::DisputeDeskError;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

pub trait FileSystem: Send + Sync {
    fn read_to_string(&self, path: &Path) -> Result<String, DisputeDeskError>;
    fn write_string(&self, path: &Path, contents: &str) -> Result<(), DisputeDeskError>;
    fn create_dir_all(&self, path: &Path) -> Result<(), DisputeDeskError>;
    fn exists(&self, path: &Path) -> bool;
}

pub trait Terminal: Send + Sync {
    fn stdin_is_tty(&self) -> bool;
    fn write_line(&self, line: &str) -> Result<(), DisputeDeskError>;
    fn draw(&self, frame: &str) -> Result<(), DisputeDeskError>;
}

pub struct ProductionFileSystem;

impl FileSystem for ProductionFileSystem {
    fn read_to_string(&self, path: &Path) -> Result<String, DisputeDeskError> {
        std::fs::read_to_string(path).map_err(|e| DisputeDeskError::Io(e.to_string()))
    }

    fn write_string(&self, path: &Path, contents: &str) -> Result<(), DisputeDeskError> {
        std::fs::write(path, contents).map_err(|e| DisputeDeskError::Io(e.to_string()))
    }

    fn create_dir_all(&self, path: &Path) -> Result<(), DisputeDeskError> {
        std::fs::create_dir_all(path).map_err(|e| DisputeDeskError::Io(e.to_string()))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

pub struct ProductionTerminal;

impl Terminal for ProductionTerminal {
    fn stdin_is_tty(&self) -> bool {
        std::io::IsTerminal::is_terminal(&std::io::stdin())
    }

    fn write_line(&self, line: &str) -> Result<(), DisputeDeskError> {
        use std::io::Write;
        let mut out = std::io::stdout();
        writeln!(out, "{line}").map_err(|e| DisputeDeskError::Io(e.to_string()))
    }

    fn draw(&self, frame: &str) -> Result<(), DisputeDeskError> {
        self.write_line(frame)
    }
}

pub struct ProductionRuntime {
    pub file_system: Arc<dyn FileSystem>,
    pub terminal: Arc<dyn Terminal>,
}

impl ProductionRuntime {
    pub fn new() -> Self {
        Self {
            file_system: Arc::new(ProductionFileSystem),
            terminal: Arc::new(ProductionTerminal),
        }
    }
}

impl Default for ProductionRuntime {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Default, Clone)]
pub struct FakeFileSystem {
    files: Arc<Mutex<HashMap<PathBuf, String>>>,
}

impl FakeFileSystem {
    pub fn with_file(path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        let mut map = HashMap::new();
        map.insert(path.into(), contents.into());
        Self {
            files: Arc::new(Mutex::new(map)),
        }
    }

    pub fn insert(&self, path: impl Into<PathBuf>, contents: impl Into<String>) {
        self.files
            .lock()
            .expect("files lock")
            .insert(path.into(), contents.into());
    }
}

impl FileSystem for FakeFileSystem {
    fn read_to_string(&self, path: &Path) -> Result<String, DisputeDeskError> {
        self.files
            .lock()
            .expect("files lock")
            .get(path)
            .cloned()
            .ok_or_else(|| DisputeDeskError::Io(format!("missing file {}", path.display())))
    }

    fn write_string(&self, path: &Path, contents: &str) -> Result<(), DisputeDeskError> {
        self.files
            .lock()
            .expect("files lock")
            .insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }

    fn create_dir_all(&self, _path: &Path) -> Result<(), DisputeDeskError> {
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.lock().expect("files lock").contains_key(path)
    }
}

#[derive(Default, Clone)]
pub struct FakeTerminal {
    pub is_tty: bool,
    writes: Arc<Mutex<Vec<String>>>,
    draws: Arc<Mutex<Vec<String>>>,
}

impl FakeTerminal {
    pub fn new(is_tty: bool) -> Self {
        Self {
            is_tty,
            ..Self::default()
        }
    }

    pub fn written_lines(&self) -> Vec<String> {
        self.writes.lock().expect("writes lock").clone()
    }

    pub fn drawn_frames(&self) -> Vec<String> {
        self.draws.lock().expect("draws lock").clone()
    }
}

impl Terminal for FakeTerminal {
    fn stdin_is_tty(&self) -> bool {
        self.is_tty
    }

    fn write_line(&self, line: &str) -> Result<(), DisputeDeskError> {
        self.writes
            .lock()
            .expect("writes lock")
            .push(line.to_string());
        Ok(())
    }

    fn draw(&self, frame: &str) -> Result<(), DisputeDeskError> {
        self.draws
            .lock()
            .expect("draws lock")
            .push(frame.to_string());
        Ok(())
    }
}
