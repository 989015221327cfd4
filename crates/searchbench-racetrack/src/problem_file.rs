//! Loading additional racetrack problems from TOML files.
//!
//! ```toml
//! [[track]]
//! name = "box"
//! start = [1, 1]
//! finish = [[4, 1], [4, 3]]
//! walls = [[[0, 0], [5, 0]], [[5, 0], [5, 4]], [[5, 4], [0, 4]], [[0, 4], [0, 0]]]
//! ```

use std::path::Path;
use std::sync::Arc;

use searchbench_core::{EngineError, Registry};
use serde::Deserialize;
use thiserror::Error;

use crate::geometry::{Point, Segment};
use crate::track::Racetrack;

/// Problem file error
#[derive(Debug, Error)]
pub enum ProblemFileError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("track '{name}' is malformed: {reason}")]
    Malformed { name: String, reason: String },
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ProblemFile {
    #[serde(default)]
    track: Vec<TrackEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TrackEntry {
    name: String,
    start: Point,
    finish: Segment,
    walls: Vec<Segment>,
}

/// Parses every `[[track]]` table of a problem file into a registry.
pub fn parse_problems(s: &str) -> Result<Registry<Arc<Racetrack>>, ProblemFileError> {
    let file: ProblemFile = toml::from_str(s)?;
    let mut registry = Registry::new();
    for entry in file.track {
        if registry.contains(&entry.name) {
            return Err(ProblemFileError::Malformed {
                name: entry.name,
                reason: "duplicate track name".to_string(),
            });
        }
        let track = Racetrack::new(entry.start, entry.finish, entry.walls);
        if let Err(err) = track.validate() {
            let reason = match err {
                EngineError::MalformedProblem(reason) => reason,
                other => other.to_string(),
            };
            return Err(ProblemFileError::Malformed {
                name: entry.name,
                reason,
            });
        }
        registry.register(entry.name, Arc::new(track));
    }
    Ok(registry)
}

/// Loads a problem file from disk.
pub fn load_problems(path: impl AsRef<Path>) -> Result<Registry<Arc<Racetrack>>, ProblemFileError> {
    let contents = std::fs::read_to_string(path)?;
    parse_problems(&contents)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOX: &str = r#"
        [[track]]
        name = "box"
        start = [1, 1]
        finish = [[4, 1], [4, 3]]
        walls = [[[0, 0], [5, 0]], [[5, 0], [5, 4]], [[5, 4], [0, 4]], [[0, 4], [0, 0]]]
    "#;

    #[test]
    fn test_parse_track() {
        let registry = parse_problems(BOX).unwrap();
        let track = registry.get("box").unwrap();

        assert_eq!(track.start, Point::new(1, 1));
        assert_eq!(track.finish, Segment::new(Point::new(4, 1), Point::new(4, 3)));
        assert_eq!(track.walls.len(), 4);
    }

    #[test]
    fn test_malformed_track_named() {
        let toml = r#"
            [[track]]
            name = "slanted"
            start = [1, 1]
            finish = [[1, 1], [3, 3]]
            walls = [[[0, 0], [5, 0]]]
        "#;

        let err = parse_problems(toml).unwrap_err();
        assert!(matches!(err, ProblemFileError::Malformed { ref name, .. } if name == "slanted"));
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let doubled = format!("{BOX}\n{BOX}");
        assert!(matches!(
            parse_problems(&doubled),
            Err(ProblemFileError::Malformed { .. })
        ));
    }

    #[test]
    fn test_bad_shape_is_parse_error() {
        let toml = r#"
            [[track]]
            name = "x"
            start = [1]
            finish = [[4, 1], [4, 3]]
            walls = []
        "#;
        assert!(matches!(parse_problems(toml), Err(ProblemFileError::Toml(_))));
    }

    #[test]
    fn test_load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tracks.toml");
        std::fs::write(&path, BOX).unwrap();

        let registry = load_problems(&path).unwrap();
        assert_eq!(registry.names().collect::<Vec<_>>(), vec!["box"]);

        assert!(matches!(
            load_problems(dir.path().join("missing.toml")),
            Err(ProblemFileError::Io(_))
        ));
    }
}
