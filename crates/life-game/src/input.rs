//! Command line input checks and usage text.

use life_core::{Error, Result};
use std::path::{Path, PathBuf};

/// Check the input file given on the command line
pub fn check_input(input: &Path) -> Result<PathBuf> {
    if !input.exists() {
        return Err(Error::Validation("The input file must exist.".to_string()));
    }

    if !input.to_string_lossy().contains(".xml") {
        return Err(Error::Validation(
            "The input file must be a XML file.".to_string(),
        ));
    }

    Ok(input.to_path_buf())
}

/// Message telling the user how the game is run
pub fn usage(note: Option<&str>) -> String {
    let note = note.unwrap_or("The input XML file must be specified.");
    format!(
        "! Execute: <life-game input_file.xml> in order to run the game.\n! Error: {}",
        note
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_input_file() {
        let err = check_input(Path::new("non_existing.xml")).unwrap_err();
        assert_eq!(err.to_string(), "Validation error: The input file must exist.");
    }

    #[test]
    fn test_input_must_be_xml() {
        let manifest = Path::new(env!("CARGO_MANIFEST_DIR")).join("Cargo.toml");
        let err = check_input(&manifest).unwrap_err();
        assert!(err.to_string().contains("must be a XML file"));
    }

    #[test]
    fn test_sample_input_is_accepted() {
        let sample = Path::new(env!("CARGO_MANIFEST_DIR")).join("samples/test.xml");
        assert_eq!(check_input(&sample).unwrap(), sample);
    }

    #[test]
    fn test_usage() {
        assert_eq!(
            usage(None),
            "! Execute: <life-game input_file.xml> in order to run the game.\n\
             ! Error: The input XML file must be specified."
        );
        assert!(usage(Some("boom")).ends_with("! Error: boom"));
    }
}
