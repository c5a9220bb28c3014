use std::fs::File;
use std::io::{BufReader, Error, ErrorKind};
use std::path::Path;

use serde::{Deserialize, Serialize};

#[cfg(test)]
mod tests {
    use std::fs;
    use std::io::ErrorKind;
    use std::path::Path;

    use crate::settings::{Settings, SettingsError};
    use crate::test::with_temp_dir;

    #[test]
    fn reads_file_and_fills_missing_fields_with_defaults() {
        let settings = Settings::from_file(Path::new("./resources/test/settings.json")).unwrap();

        assert_eq!(3.0, settings.line_width);
        assert_eq!(12.0, settings.center_size);
        assert_eq!(32, settings.segment_count);
        assert_eq!(0.1, settings.zoom_sensitivity);
        assert_eq!([0, 64, 0], settings.min_altitude_color);
        assert_eq!([255, 128, 0], settings.circle_color);
        // not present in the file
        assert_eq!(Settings::default().rotation_step, settings.rotation_step);
        assert_eq!(Settings::default().movement_step, settings.movement_step);
        assert_eq!(Settings::default().center_color, settings.center_color);
    }

    #[test]
    fn errors_out_with_not_found_on_file_not_found() {
        let res = Settings::from_file(Path::new("./resources/test/settings_not_exists.json"));
        match res {
            Err(SettingsError::Io(e)) => assert_eq!(ErrorKind::NotFound, e.kind()),
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn errors_out_on_invalid_json() {
        with_temp_dir(|dir| {
            let path = dir.join("settings.json");
            fs::write(&path, "{ \"segmentCount\": \"many\" }").unwrap();

            assert!(matches!(Settings::from_file(&path), Err(SettingsError::Json(_))));
        });
    }

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_value(Settings::default()).unwrap();

        assert_eq!(64, json["segmentCount"]);
        assert_eq!(serde_json::json!([255, 255, 255]), json["maxAltitudeColor"]);
        assert_eq!(serde_json::json!([255, 0, 0]), json["circleColor"]);
        assert_eq!(serde_json::json!([0, 0, 255]), json["centerColor"]);
    }
}

#[derive(thiserror::Error, Debug)]
pub enum SettingsError {
    #[error("Couldn't read settings: {0}")]
    Io(#[from] Error),

    #[error("Couldn't parse settings: {0}")]
    Json(#[from] serde_json::Error),
}

/// Tunables for navigation and annotations.
///
/// Sizes given in pixels are converted to world units against the current
/// camera width when a circle is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub min_altitude_color: [u8; 3],
    pub max_altitude_color: [u8; 3],
    pub circle_color: [u8; 3],
    pub center_color: [u8; 3],

    /// Pixels.
    pub line_width: f64,
    /// Pixels.
    pub center_size: f64,
    pub segment_count: usize,

    /// World units per wheel delta unit.
    pub zoom_sensitivity: f64,
    /// Degrees per key press.
    pub rotation_step: f64,
    /// World units per key press.
    pub movement_step: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            min_altitude_color: [0, 0, 0],
            max_altitude_color: [255, 255, 255],
            circle_color: [255, 0, 0],
            center_color: [0, 0, 255],
            line_width: 2.0,
            center_size: 10.0,
            segment_count: 64,
            zoom_sensitivity: 0.05,
            rotation_step: 5.0,
            movement_step: 10.0,
        }
    }
}

impl Settings {
    pub fn from_file(path: &Path) -> Result<Settings, SettingsError> {
        if !path.is_file() {
            return Err(Error::new(ErrorKind::NotFound, "Couldn't find settings file").into());
        }

        let file = File::open(path)?;
        let reader = BufReader::new(file);

        Ok(serde_json::from_reader(reader)?)
    }
}
