use crate::translator::{CcMode, Config, NoteMode};

/// Built-in layout for the supported control surface.
///
/// The touch-sensitive caps of the encoder knobs send key presses that
/// carry no useful information, so they are silenced. The top 8x4 pad grid
/// is latched into toggles, and the endless encoders are integrated into
/// absolute positions.
pub fn layout() -> Config {
    let notes = (0..=10)
        .map(|key| (key, NoteMode::Silence))
        .chain((68..=99).map(|key| (key, NoteMode::Toggle)));

    let ccs = [14, 15]
        .into_iter()
        .chain(71..=79)
        .map(|controller| (controller, CcMode::Encoder));

    Config::new(notes, ccs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_covers_the_expected_controls() {
        let config = layout();

        assert_eq!(config.note_mode(0), NoteMode::Silence);
        assert_eq!(config.note_mode(10), NoteMode::Silence);
        assert_eq!(config.note_mode(68), NoteMode::Toggle);
        assert_eq!(config.note_mode(99), NoteMode::Toggle);
        assert_eq!(config.note_mode(100), NoteMode::Default);

        assert_eq!(config.cc_mode(14), CcMode::Encoder);
        assert_eq!(config.cc_mode(15), CcMode::Encoder);
        assert_eq!(config.cc_mode(71), CcMode::Encoder);
        assert_eq!(config.cc_mode(79), CcMode::Encoder);
        assert_eq!(config.cc_mode(80), CcMode::Default);
    }
}
