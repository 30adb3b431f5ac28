use std::{
    fs::File,
    io::{BufReader, BufWriter, ErrorKind, Write},
    marker::PhantomData,
    path::PathBuf,
};

use indexmap::IndexMap;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::ser::PrettyFormatter;

use crate::errors::ServiceError;

const INDENT: &[u8] = b"    ";

/// Result of reading a map file that may legitimately be absent or corrupt.
#[derive(Debug)]
pub enum MapRead<V> {
    Found(IndexMap<String, V>),
    Missing,
    Malformed(serde_json::Error),
}

/// Generic JSON file holding a string-keyed map.
///
/// Reads and writes the whole `IndexMap<String, V>` at once, keeping key order
/// as it appears in the file. The file is overwritten wholesale on write.
#[derive(Debug, Clone)]
pub struct JsonMapFile<V> {
    file_path: PathBuf,
    _marker: PhantomData<V>,
}

impl<V> JsonMapFile<V>
where
    V: Serialize + DeserializeOwned,
{
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { file_path: path.into(), _marker: PhantomData }
    }

    fn io_error(&self, source: std::io::Error) -> ServiceError {
        ServiceError::Io { path: self.file_path.clone(), source }
    }

    /// Read and decode the file.
    ///
    /// Not-found and undecodable contents are outcomes, not errors; any other
    /// I/O failure is returned as `ServiceError::Io`.
    pub fn read(&self) -> Result<MapRead<V>, ServiceError> {
        let file = match File::open(&self.file_path) {
            Ok(f) => f,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(MapRead::Missing),
            Err(e) => return Err(self.io_error(e)),
        };
        match serde_json::from_reader::<_, IndexMap<String, V>>(BufReader::new(file)) {
            Ok(map) => Ok(MapRead::Found(map)),
            Err(e) if e.is_io() => Err(self.io_error(e.into())),
            Err(e) => Ok(MapRead::Malformed(e)),
        }
    }

    /// Serialize `map` with a 4-space indent, replacing any previous content.
    pub fn write(&self, map: &IndexMap<String, V>) -> Result<(), ServiceError> {
        let file = File::create(&self.file_path).map_err(|e| self.io_error(e))?;
        let mut writer = BufWriter::new(file);
        let mut ser = serde_json::Serializer::with_formatter(&mut writer, PrettyFormatter::with_indent(INDENT));
        map.serialize(&mut ser).map_err(|e| {
            if e.is_io() {
                self.io_error(e.into())
            } else {
                ServiceError::Encode { path: self.file_path.clone(), source: e }
            }
        })?;
        writer.flush().map_err(|e| self.io_error(e))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tmp_path() -> PathBuf {
        std::env::temp_dir().join(format!("json_map_file_{}.json", uuid::Uuid::new_v4()))
    }

    #[test]
    fn write_then_read_keeps_order() -> Result<(), anyhow::Error> {
        let tmp = tmp_path();
        let file = JsonMapFile::<i64>::new(&tmp);

        let mut map = IndexMap::new();
        map.insert("zucchini".to_string(), 1);
        map.insert("apple".to_string(), 2);
        map.insert("mango".to_string(), 3);
        file.write(&map)?;

        match file.read()? {
            MapRead::Found(read) => {
                let keys: Vec<_> = read.keys().cloned().collect();
                assert_eq!(keys, vec!["zucchini", "apple", "mango"]);
                assert_eq!(read, map);
            }
            other => panic!("expected Found, got {other:?}"),
        }

        let _ = std::fs::remove_file(&tmp);
        Ok(())
    }

    #[test]
    fn writes_four_space_indent() -> Result<(), anyhow::Error> {
        let tmp = tmp_path();
        let file = JsonMapFile::<i64>::new(&tmp);
        let mut map = IndexMap::new();
        map.insert("apple".to_string(), 7);
        map.insert("banana".to_string(), 20);
        file.write(&map)?;

        let text = std::fs::read_to_string(&tmp)?;
        assert_eq!(text, "{\n    \"apple\": 7,\n    \"banana\": 20\n}");

        let _ = std::fs::remove_file(&tmp);
        Ok(())
    }

    #[test]
    fn missing_file_is_an_outcome() -> Result<(), anyhow::Error> {
        let file = JsonMapFile::<i64>::new(tmp_path());
        assert!(matches!(file.read()?, MapRead::Missing));
        Ok(())
    }

    #[test]
    fn bad_contents_are_malformed() -> Result<(), anyhow::Error> {
        let tmp = tmp_path();
        let file = JsonMapFile::<i64>::new(&tmp);
        for body in ["not json", "{\"apple\": \"ten\"}", "[1, 2]", "{\"apple\": 1.5}", ""] {
            std::fs::write(&tmp, body)?;
            assert!(matches!(file.read()?, MapRead::Malformed(_)), "{body:?} should be malformed");
        }
        let _ = std::fs::remove_file(&tmp);
        Ok(())
    }

    #[test]
    fn directory_path_is_an_io_error() {
        let file = JsonMapFile::<i64>::new(std::env::temp_dir());
        assert!(matches!(file.read(), Err(ServiceError::Io { .. })));
        assert!(matches!(file.write(&IndexMap::new()), Err(ServiceError::Io { .. })));
    }
}
