// Byte sources and sinks: files on disk, in-memory buffers and boxed readers/writers.

#[cfg(test)]
mod tests {
    use std::io::{Cursor, Write};
    use std::sync::{Arc, Mutex};

    use gvselect_core::{
        io::{open_input, read_selection_file, write_selection_file, InputSource, OutputSink},
        CodecConfig, SelectError, SelectionFile,
    };

    fn sample_file() -> SelectionFile {
        let mut f = SelectionFile::new();
        f.set_name(1, "stars in disk").unwrap();
        f.set_ids(1, 4, vec![11, 12, 13]).unwrap();
        f.set_ids(1, 2, vec![-1]).unwrap();
        f
    }

    /// Writer handing its bytes back to the test.
    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuffer {
        fn write(&mut self, data: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(data);
            Ok(data.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

// ## 1. Files

    #[test]
    fn write_file_then_open() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("selection.dat");

        let f = sample_file();
        f.write_file(&path).unwrap();
        let back = SelectionFile::open(&path).unwrap();

        assert_eq!(back, f);
        assert_eq!(
            std::fs::metadata(&path).unwrap().len() as usize,
            f.to_bytes(&CodecConfig::default()).unwrap().len()
        );
    }

    #[test]
    fn big_endian_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("be.dat");

        let f = sample_file();
        f.write_file_with(&path, &CodecConfig::big_endian()).unwrap();
        let back = SelectionFile::open_with(&path, &CodecConfig::big_endian()).unwrap();
        assert_eq!(back, f);

        assert!(SelectionFile::open(&path).is_err());
    }

    #[test]
    fn write_file_replaces_existing_content() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        tmp.write_all(&[0xAB; 10_000]).unwrap();

        let f = sample_file();
        f.write_file(tmp.path()).unwrap();
        assert_eq!(SelectionFile::open(tmp.path()).unwrap(), f);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = SelectionFile::open(dir.path().join("nope.dat")).unwrap_err();
        assert!(matches!(err, SelectError::Io(_)));
    }

    #[test]
    fn truncated_file_on_disk_is_unexpected_eof() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("short.dat");
        let bytes = sample_file().to_bytes(&CodecConfig::default()).unwrap();
        std::fs::write(&path, &bytes[..bytes.len() - 1]).unwrap();

        assert!(matches!(
            SelectionFile::open(&path),
            Err(SelectError::UnexpectedEof(_))
        ));
    }

// ## 2. Sources and sinks

    #[test]
    fn memory_and_reader_sources_agree() {
        let bytes = sample_file().to_bytes(&CodecConfig::default()).unwrap();
        let config = CodecConfig::default();

        let a = read_selection_file(InputSource::Memory(bytes.clone()), &config).unwrap();
        let b = read_selection_file(InputSource::Reader(Box::new(Cursor::new(bytes))), &config)
            .unwrap();
        assert_eq!(a, b);
        assert_eq!(a, sample_file());
    }

    #[test]
    fn writer_sink_receives_encoded_bytes() {
        let buf = SharedBuffer::default();
        let f = sample_file();
        write_selection_file(&f, OutputSink::Writer(Box::new(buf.clone())), &CodecConfig::default())
            .unwrap();

        let written = buf.0.lock().unwrap().clone();
        assert_eq!(written, f.to_bytes(&CodecConfig::default()).unwrap());
    }

    #[test]
    fn open_input_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = open_input(InputSource::File(dir.path().join("missing")));
        assert!(matches!(result, Err(SelectError::Io(_))));
    }

    #[test]
    fn from_reader_accepts_any_read() {
        let bytes = sample_file().to_bytes(&CodecConfig::native()).unwrap();
        let f = SelectionFile::from_reader(Cursor::new(bytes), &CodecConfig::native()).unwrap();
        assert_eq!(f.get_ids(1, 4).unwrap(), &[11, 12, 13]);
    }
}
