use tempfile::TempDir;

/// Scratch directory for file tests, removed when dropped.
pub struct TestDir {
    dir : TempDir,
}

impl TestDir {
    pub fn new() -> TestDir {
        TestDir {
            dir : tempfile::Builder::new()
                .prefix("randfill_test_")
                .tempdir()
                .unwrap(),
        }
    }

    pub fn file(&self, name : &str) -> String {
        self.dir.path().join(name).to_string_lossy().to_string()
    }
}

/// Records the length of every chunk it receives.
pub struct ChunkRecorder {
    pub chunk_lens : Vec<usize>,
    pub data       : Vec<u8>,
}

impl ChunkRecorder {
    pub fn new() -> ChunkRecorder {
        ChunkRecorder {
            chunk_lens : Vec::new(),
            data       : Vec::new(),
        }
    }
}

impl crate::writer::Writer for ChunkRecorder {
    fn write_chunk(&mut self, buf : &[u8]) -> Result<(), crate::Error> {
        self.chunk_lens.push(buf.len());
        self.data.extend_from_slice(buf);
        Ok(())
    }
}
