use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("MIDI initialization failed")]
    Init(#[from] midir::InitError),

    #[error("Error connecting to MIDI port {}", .0)]
    Connection(Arc<str>),

    #[error("Creation of virtual MIDI port {} failed", .0)]
    PortCreation(Arc<str>),

    #[error("Couldn't retrieve a MIDI port name")]
    PortInfoError(#[from] midir::PortInfoError),

    #[error("Invalid MIDI port name {}", .0)]
    PortNotFound(Arc<str>),

    #[error("No MIDI input port available")]
    NoInputPort,

    #[error("Couldn't send MIDI message: {}", .0)]
    Send(#[from] midir::SendError),
}
