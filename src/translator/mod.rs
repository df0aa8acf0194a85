pub mod config;
pub use config::{CcMode, Config, NoteMode};

use crate::midi::{self, ChannelMsg, Msg};

/// Where translated messages go.
///
/// Write failures are reported and swallowed: the input stream keeps being
/// processed and state mutations already performed are not rolled back.
pub trait OutputSink {
    fn send(&mut self, msg: &Msg) -> Result<(), midi::Error>;
}

impl OutputSink for midi::VirtualOut {
    fn send(&mut self, msg: &Msg) -> Result<(), midi::Error> {
        midi::VirtualOut::send(self, msg)
    }
}

/// Below this value an encoder message means "turned up", above it
/// "turned down".
const ENCODER_THRESHOLD: u8 = 64;

/// Channel synthesized messages are emitted on.
const OUT_CHANNEL: midi::Channel = midi::Channel::from(0);

/// The stateful translation engine.
///
/// Consumes one decoded message at a time, strictly in arrival order, and
/// emits zero or one message to the sink. Toggle and encoder state is
/// exclusively owned here; callers feeding multiple input streams must
/// serialize them upfront.
pub struct Translator<S: OutputSink> {
    sink: S,
    config: Config,
    toggles: [bool; 128],
    encoders: [u8; 128],
}

impl<S: OutputSink> Translator<S> {
    pub fn new(config: Config, sink: S) -> Self {
        Self {
            sink,
            config,
            toggles: [false; 128],
            encoders: [0; 128],
        }
    }

    /// Processes one decoded message, forwarding the translated output,
    /// if any, to the sink.
    pub fn process(&mut self, msg: ChannelMsg) {
        use ChannelMsg::*;

        log::trace!("MIDI input: {msg:?}");

        let out = match msg {
            NoteOn { .. } | NoteOff { .. } | NoteOffVelocity { .. } => self.translate_note(msg),
            ControlChange {
                chan,
                controller,
                value,
            } => self.translate_cc(chan, controller, value),
            // pass-through unknown messages
            Other(raw) => Some(raw),
        };

        let Some(out) = out else {
            log::trace!("No output");
            return;
        };

        log::trace!("MIDI output: {}", out.display());

        if let Err(err) = self.sink.send(&out) {
            log::error!("Error writing MIDI: {err}");
        }
    }

    fn translate_note(&mut self, msg: ChannelMsg) -> Option<Msg> {
        use ChannelMsg::*;

        let key = match msg {
            NoteOn { key, .. } | NoteOff { key, .. } | NoteOffVelocity { key, .. } => key,
            _ => unreachable!(),
        };

        match self.config.note_mode(key) {
            NoteMode::Default => Some(msg.into()),
            NoteMode::Silence => None,
            NoteMode::Toggle => {
                if !matches!(msg, NoteOn { .. }) {
                    // Toggle only on press: releasing the physical button
                    // must not untoggle.
                    return None;
                }

                let toggle = &mut self.toggles[usize::from(key)];
                *toggle = !*toggle;
                log::debug!("Setting on/off toggle {key} to {toggle}");

                if *toggle {
                    Some(
                        NoteOn {
                            chan: OUT_CHANNEL,
                            key,
                            velocity: midi::MAX_VALUE,
                        }
                        .into(),
                    )
                } else {
                    Some(
                        NoteOff {
                            chan: OUT_CHANNEL,
                            key,
                        }
                        .into(),
                    )
                }
            }
        }
    }

    fn translate_cc(&mut self, chan: midi::Channel, controller: u8, value: u8) -> Option<Msg> {
        match self.config.cc_mode(controller) {
            CcMode::Default => Some(
                ChannelMsg::ControlChange {
                    chan,
                    controller,
                    value,
                }
                .into(),
            ),
            CcMode::Encoder => {
                let acc = &mut self.encoders[usize::from(controller)];
                if value < ENCODER_THRESHOLD && *acc < midi::MAX_VALUE {
                    *acc += 1;
                } else if value > ENCODER_THRESHOLD && *acc > 0 {
                    *acc -= 1;
                }
                log::debug!("Setting encoder {controller} to {acc}");

                Some(
                    ChannelMsg::ControlChange {
                        chan: OUT_CHANNEL,
                        controller,
                        value: *acc,
                    }
                    .into(),
                )
            }
        }
    }
}
