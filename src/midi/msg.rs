use super::{Channel, Tag};
use crate::bytes;

/// An owned raw MIDI message as received from or sent to a port.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Msg(Box<[u8]>);

impl Msg {
    pub fn inner(&self) -> &[u8] {
        self.0.as_ref()
    }

    pub fn display(&self) -> bytes::Displayable {
        bytes::Displayable::from(self.0.as_ref())
    }
}

impl<const S: usize> From<[u8; S]> for Msg {
    fn from(buf: [u8; S]) -> Self {
        Self(buf.into())
    }
}

impl From<&[u8]> for Msg {
    fn from(buf: &[u8]) -> Self {
        Self(buf.into())
    }
}

impl std::ops::Deref for Msg {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

/// A channel message decoded just enough for translation.
///
/// Only the message kinds the translator acts upon get their own variant.
/// Everything else, including messages with an unexpected structure, ends up
/// in `Other` and is forwarded as-is.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ChannelMsg {
    NoteOn {
        chan: Channel,
        key: u8,
        velocity: u8,
    },
    NoteOff {
        chan: Channel,
        key: u8,
    },
    NoteOffVelocity {
        chan: Channel,
        key: u8,
        velocity: u8,
    },
    ControlChange {
        chan: Channel,
        controller: u8,
        value: u8,
    },
    Other(Msg),
}

impl ChannelMsg {
    /// Decodes a raw message.
    ///
    /// A `NoteOn` with velocity 0 is the wire encoding for a release and
    /// decodes as `NoteOff`. A `NoteOff` carrying a nonzero velocity decodes
    /// as `NoteOffVelocity`.
    pub fn decode(msg: Msg) -> Self {
        use ChannelMsg::*;

        if let [tag_chan, data1, data2] = *msg.inner() {
            if data1 > super::MAX_VALUE || data2 > super::MAX_VALUE {
                return Other(msg);
            }

            let chan = Channel::from(tag_chan);
            match Tag::from(tag_chan) {
                Tag::NOTE_ON if data2 == 0 => return NoteOff { chan, key: data1 },
                Tag::NOTE_ON => {
                    return NoteOn {
                        chan,
                        key: data1,
                        velocity: data2,
                    }
                }
                Tag::NOTE_OFF if data2 == 0 => return NoteOff { chan, key: data1 },
                Tag::NOTE_OFF => {
                    return NoteOffVelocity {
                        chan,
                        key: data1,
                        velocity: data2,
                    }
                }
                Tag::CONTROL_CHANGE => {
                    return ControlChange {
                        chan,
                        controller: data1,
                        value: data2,
                    }
                }
                _ => (),
            }
        }

        Other(msg)
    }
}

impl From<ChannelMsg> for Msg {
    fn from(msg: ChannelMsg) -> Msg {
        use ChannelMsg::*;

        match msg {
            NoteOn {
                chan,
                key,
                velocity,
            } => [Tag::NOTE_ON | chan, key, velocity].into(),
            NoteOff { chan, key } => [Tag::NOTE_OFF | chan, key, 0].into(),
            NoteOffVelocity {
                chan,
                key,
                velocity,
            } => [Tag::NOTE_OFF | chan, key, velocity].into(),
            ControlChange {
                chan,
                controller,
                value,
            } => [Tag::CONTROL_CHANGE | chan, controller, value].into(),
            Other(msg) => msg,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_note_msgs() {
        let chan = Channel::from(0x02);

        assert_eq!(
            ChannelMsg::decode([0x92, 68, 100].into()),
            ChannelMsg::NoteOn {
                chan,
                key: 68,
                velocity: 100
            },
        );
        assert_eq!(
            ChannelMsg::decode([0x82, 68, 0].into()),
            ChannelMsg::NoteOff { chan, key: 68 },
        );
        assert_eq!(
            ChannelMsg::decode([0x82, 68, 42].into()),
            ChannelMsg::NoteOffVelocity {
                chan,
                key: 68,
                velocity: 42
            },
        );
    }

    #[test]
    fn note_on_zero_velocity_is_a_release() {
        assert_eq!(
            ChannelMsg::decode([0x90, 64, 0].into()),
            ChannelMsg::NoteOff {
                chan: Channel::from(0),
                key: 64
            },
        );
    }

    #[test]
    fn decode_control_change() {
        assert_eq!(
            ChannelMsg::decode([0xb5, 14, 63].into()),
            ChannelMsg::ControlChange {
                chan: Channel::from(0x05),
                controller: 14,
                value: 63
            },
        );
    }

    #[test]
    fn unhandled_kinds_decode_as_other() {
        // Pitch bend
        let raw = Msg::from([0xe0, 0x00, 0x40]);
        assert_eq!(ChannelMsg::decode(raw.clone()), ChannelMsg::Other(raw));

        // Channel pressure (2 bytes)
        let raw = Msg::from([0xd0, 0x7f]);
        assert_eq!(ChannelMsg::decode(raw.clone()), ChannelMsg::Other(raw));

        // SysEx
        let raw = Msg::from([0xf0, 0x00, 0x66, 0x14, 0xf7]);
        assert_eq!(ChannelMsg::decode(raw.clone()), ChannelMsg::Other(raw));
    }

    #[test]
    fn reencoding_preserves_the_wire_image() {
        for raw in [[0x92, 68, 100], [0x82, 68, 42], [0xb5, 14, 63]] {
            let msg = Msg::from(raw);
            assert_eq!(Msg::from(ChannelMsg::decode(msg.clone())), msg);
        }
    }
}
