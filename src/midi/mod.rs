mod error;
pub use error::Error;

pub mod msg;
pub use msg::{ChannelMsg, Msg};

pub mod port;
pub use port::{PortsIn, VirtualOut};

pub const MAX_VALUE: u8 = 127;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Tag(u8);

impl Tag {
    pub const NOTE_OFF: Tag = Tag::from(0x80);
    pub const NOTE_ON: Tag = Tag::from(0x90);
    pub const CONTROL_CHANGE: Tag = Tag::from(0xb0);

    pub const fn from(byte: u8) -> Self {
        Self(byte & 0xf0)
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Channel(u8);

impl Channel {
    pub const fn from(byte: u8) -> Self {
        Self(byte & 0x0f)
    }
}

impl std::ops::BitOr<Channel> for Tag {
    type Output = u8;

    fn bitor(self, chan: Channel) -> Self::Output {
        self.0 | chan.0
    }
}
