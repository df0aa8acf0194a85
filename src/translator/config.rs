/// Translation rule for a note index.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum NoteMode {
    /// Forward the event unchanged.
    #[default]
    Default,
    /// Swallow every event for this key.
    Silence,
    /// Latch a momentary button into an on/off switch.
    Toggle,
}

/// Translation rule for a controller index.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum CcMode {
    /// Forward the event unchanged.
    #[default]
    Default,
    /// Integrate a direction-biased relative value into an absolute position.
    Encoder,
}

/// Immutable control layout: which translation rule applies to which index.
///
/// Note and controller indices are independent namespaces even though both
/// span `[0, 127]`. Any index left out of the tables resolves to the
/// default passthrough mode.
pub struct Config {
    notes: [NoteMode; 128],
    ccs: [CcMode; 128],
}

impl Config {
    pub fn new(
        notes: impl IntoIterator<Item = (u8, NoteMode)>,
        ccs: impl IntoIterator<Item = (u8, CcMode)>,
    ) -> Self {
        let mut config = Self {
            notes: [NoteMode::default(); 128],
            ccs: [CcMode::default(); 128],
        };

        for (key, mode) in notes {
            config.notes[usize::from(key & 0x7f)] = mode;
        }
        for (controller, mode) in ccs {
            config.ccs[usize::from(controller & 0x7f)] = mode;
        }

        config
    }

    pub fn note_mode(&self, key: u8) -> NoteMode {
        self.notes[usize::from(key & 0x7f)]
    }

    pub fn cc_mode(&self, controller: u8) -> CcMode {
        self.ccs[usize::from(controller & 0x7f)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unconfigured_indices_resolve_to_default() {
        let config = Config::new([(10, NoteMode::Toggle)], [(20, CcMode::Encoder)]);

        assert_eq!(config.note_mode(10), NoteMode::Toggle);
        assert_eq!(config.cc_mode(20), CcMode::Encoder);

        for idx in 0..=127 {
            if idx != 10 {
                assert_eq!(config.note_mode(idx), NoteMode::Default);
            }
            if idx != 20 {
                assert_eq!(config.cc_mode(idx), CcMode::Default);
            }
        }
    }

    #[test]
    fn namespaces_are_independent() {
        let config = Config::new([(42, NoteMode::Silence)], []);

        assert_eq!(config.note_mode(42), NoteMode::Silence);
        assert_eq!(config.cc_mode(42), CcMode::Default);
    }
}
