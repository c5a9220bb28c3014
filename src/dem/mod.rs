mod codec;
mod grid;
mod interpolation;

use flate2::{bufread::GzDecoder, write::GzEncoder, Compression};
use std::{
    fs::File,
    io::{BufReader, BufWriter, Read, Write},
    path::Path,
};

pub use codec::{parse, serialize, FileFormatError};
pub use grid::{CoordinatesOutOfBoundsError, ElevationGrid, GridError, GridHeader};
pub use interpolation::AltitudeInterpolator;

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use crate::dem::{load, save, LoadError};
    use crate::test::with_temp_dir;

    #[test]
    fn load_reads_fixture_and_remembers_path() {
        let path = Path::new("./resources/test/valley.asc");
        let grid = load(path).unwrap();

        assert_eq!(5, grid.column_count());
        assert_eq!(4, grid.row_count());
        assert_eq!(-3, grid.min_altitude());
        assert_eq!(42, grid.max_altitude());
        assert_eq!(path.to_string_lossy(), grid.source_path());
    }

    #[test]
    fn load_surfaces_io_errors() {
        let res = load(Path::new("./resources/test/does_not_exist.asc"));
        assert!(matches!(res, Err(LoadError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound));
    }

    #[test]
    fn load_reports_format_errors_with_line() {
        with_temp_dir(|dir| {
            let path = dir.join("broken.asc");
            fs::write(&path, "ncols 2\nnrows abc\n").unwrap();

            match load(&path) {
                Err(LoadError::Format(e)) => assert_eq!(2, e.line_number),
                other => panic!("unexpected result {:?}", other),
            }
        });
    }

    #[test]
    fn save_then_load_round_trips_plain_and_gzip() {
        let grid = load(Path::new("./resources/test/valley.asc")).unwrap();

        with_temp_dir(|dir| {
            for name in ["copy.asc", "copy.asc.gz"] {
                let path = dir.join(name);
                save(&path, &grid).unwrap();
                let loaded = load(&path).unwrap();

                assert_eq!(grid.altitudes(), loaded.altitudes());
                assert_eq!(grid.header(), loaded.header());
            }

            // the gzip variant really is compressed
            let raw = fs::read(dir.join("copy.asc.gz")).unwrap();
            assert_eq!(&[0x1f, 0x8b], &raw[..2]);
        });
    }
}

#[derive(thiserror::Error, Debug)]
pub enum LoadError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Invalid grid file: {0}")]
    Format(#[from] FileFormatError),
}

fn is_gzip(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("gz"))
        .unwrap_or(false)
}

/// Reads and parses a grid file, transparently inflating `*.gz` files.
pub fn load(path: &Path) -> Result<ElevationGrid, LoadError> {
    let file = File::open(path)?;
    let buf = BufReader::new(file);

    let mut s = String::new();
    if is_gzip(path) {
        GzDecoder::new(buf).read_to_string(&mut s)?;
    } else {
        let mut buf = buf;
        buf.read_to_string(&mut s)?;
    }

    let grid = codec::parse_from(&s, &path.to_string_lossy())?;

    Ok(grid)
}

/// Writes a grid file, compressing it when the path ends in `.gz`.
pub fn save(path: &Path, grid: &ElevationGrid) -> std::io::Result<()> {
    let file = File::create(path)?;
    let content = serialize(grid);

    if is_gzip(path) {
        let mut enc = GzEncoder::new(BufWriter::new(file), Compression::default());
        enc.write_all(content.as_bytes())?;
        enc.finish()?.flush()
    } else {
        let mut buf = BufWriter::new(file);
        buf.write_all(content.as_bytes())?;
        buf.flush()
    }
}
