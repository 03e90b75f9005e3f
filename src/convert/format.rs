use std::ffi::OsString;
use std::path::{Path, PathBuf};

use strum::{AsRefStr, Display, EnumIter, EnumString, VariantArray};

/// Closed set of output extensions offered by the format selector.
/// The engine picks container and codecs from the extension alone.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash, Display, AsRefStr, EnumString, EnumIter, VariantArray)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum OutputFormat {
  #[default]
  Mp3,
  Mp4,
  M4a,
  Wav,
  Avi,
  Mov,
  Flac,
}

impl OutputFormat {
  pub fn extension(&self) -> &str {
    self.as_ref()
  }

  pub fn index(&self) -> usize {
    Self::VARIANTS.iter().position(|format| format == self).unwrap_or_default()
  }

  pub fn next(self) -> Self {
    Self::VARIANTS[(self.index() + 1) % Self::VARIANTS.len()]
  }

  pub fn previous(self) -> Self {
    let len = Self::VARIANTS.len();
    Self::VARIANTS[(self.index() + len - 1) % len]
  }
}

/// `dir / (stem of input + "." + format)`. Only the last extension of the input is dropped.
pub fn output_path(dir: &Path, input: &Path, format: OutputFormat) -> PathBuf {
  let mut name = OsString::from(input.file_stem().unwrap_or_default());
  name.push(".");
  name.push(format.extension());
  dir.join(name)
}

#[cfg(test)]
mod tests {
  use std::str::FromStr;

  use strum::IntoEnumIterator;

  use super::*;

  #[test]
  fn test_closed_set_in_selector_order() {
    let extensions: Vec<String> = OutputFormat::iter().map(|format| format.to_string()).collect();
    assert_eq!(extensions, ["mp3", "mp4", "m4a", "wav", "avi", "mov", "flac"]);
    assert_eq!(OutputFormat::default(), OutputFormat::Mp3);
  }

  #[test]
  fn test_parse_is_case_insensitive() {
    assert_eq!(OutputFormat::from_str("FLAC").unwrap(), OutputFormat::Flac);
    assert_eq!(OutputFormat::from_str("m4a").unwrap(), OutputFormat::M4a);
    assert!(OutputFormat::from_str("mkv").is_err());
    assert!(OutputFormat::from_str("").is_err());
  }

  #[test]
  fn test_next_and_previous_wrap() {
    assert_eq!(OutputFormat::Mp3.next(), OutputFormat::Mp4);
    assert_eq!(OutputFormat::Flac.next(), OutputFormat::Mp3);
    assert_eq!(OutputFormat::Mp3.previous(), OutputFormat::Flac);
    assert_eq!(OutputFormat::Wav.previous(), OutputFormat::M4a);
  }

  #[test]
  fn test_output_path() {
    assert_eq!(output_path(Path::new("/out"), Path::new("clip.mkv"), OutputFormat::Mp3), PathBuf::from("/out/clip.mp3"));
    assert_eq!(
      output_path(Path::new("/out"), Path::new("/videos/my.holiday.clip.mkv"), OutputFormat::Flac),
      PathBuf::from("/out/my.holiday.clip.flac")
    );
    assert_eq!(output_path(Path::new("/out"), Path::new("/videos/README"), OutputFormat::Wav), PathBuf::from("/out/README.wav"));
  }

  #[test]
  fn test_output_path_same_extension_keeps_name() {
    assert_eq!(
      output_path(Path::new("/videos"), Path::new("/videos/clip.mp4"), OutputFormat::Mp4),
      PathBuf::from("/videos/clip.mp4")
    );
  }
}
