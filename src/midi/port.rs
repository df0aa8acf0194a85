use crossbeam_channel as channel;
use midir::os::unix::VirtualOutput;
use std::sync::Arc;

use super::{Error, Msg};

enum InConnection {
    Pending(midir::MidiInput),
    Connected(midir::MidiInputConnection<channel::Sender<Msg>>),
    None,
}

impl Default for InConnection {
    fn default() -> Self {
        Self::None
    }
}

/// Hardware input ports, enumerated in driver order.
pub struct PortsIn {
    ports: Vec<(Arc<str>, midir::MidiInputPort)>,
    conn: InConnection,
    client_name: Arc<str>,
}

impl PortsIn {
    pub fn try_new(client_name: Arc<str>) -> Result<Self, Error> {
        let midi_input = midir::MidiInput::new(&client_name)?;

        let mut ports = Vec::new();
        for port in midi_input.ports().iter() {
            let name = midi_input.port_name(port)?;
            ports.push((Arc::<str>::from(name), port.clone()));
        }

        Ok(Self {
            ports,
            conn: InConnection::Pending(midi_input),
            client_name,
        })
    }

    pub fn list(&self) -> impl Iterator<Item = Arc<str>> + '_ {
        self.ports.iter().map(|(name, _)| name.clone())
    }

    /// Resolves a device selector to a port name.
    ///
    /// The selector is either a port number, as displayed by `list`,
    /// or (part of) a port name. An empty selector picks the first port.
    pub fn select(&self, device: &str) -> Result<Arc<str>, Error> {
        if device.is_empty() {
            return self
                .ports
                .first()
                .map(|(name, _)| name.clone())
                .ok_or(Error::NoInputPort);
        }

        if let Ok(nb) = device.parse::<usize>() {
            return self
                .ports
                .get(nb)
                .map(|(name, _)| name.clone())
                .ok_or_else(|| Error::PortNotFound(device.into()));
        }

        self.ports
            .iter()
            .find(|(name, _)| name.as_ref() == device)
            .or_else(|| self.ports.iter().find(|(name, _)| name.contains(device)))
            .map(|(name, _)| name.clone())
            .ok_or_else(|| Error::PortNotFound(device.into()))
    }

    /// Connects to `port_name`, forwarding every received message to `msg_tx`.
    pub fn connect(
        &mut self,
        port_name: Arc<str>,
        msg_tx: channel::Sender<Msg>,
    ) -> Result<(), Error> {
        let port = self
            .ports
            .iter()
            .find(|(name, _)| *name == port_name)
            .map(|(_, port)| port.clone())
            .ok_or_else(|| Error::PortNotFound(port_name.clone()))?;

        match std::mem::take(&mut self.conn) {
            InConnection::Pending(midi_input) => {
                let callback = |_ts: u64, buf: &[u8], tx: &mut channel::Sender<Msg>| {
                    let _ = tx.send(buf.into());
                };

                match midi_input.connect(&port, &self.client_name, callback, msg_tx) {
                    Ok(conn) => self.conn = InConnection::Connected(conn),
                    Err(err) => {
                        // err.into_inner() doesn't give the sender back,
                        // only the input handle.
                        self.conn = InConnection::Pending(err.into_inner());
                        let err = Error::Connection(port_name);
                        log::error!("{err}");
                        return Err(err);
                    }
                }
            }
            _ => return Err(Error::Connection(port_name)),
        }

        log::info!("Connected for Input to {port_name}");

        Ok(())
    }
}

/// The virtual output port downstream consumers connect to.
pub struct VirtualOut {
    port_name: Arc<str>,
    conn: midir::MidiOutputConnection,
}

impl VirtualOut {
    pub fn try_new(client_name: &str, port_name: Arc<str>) -> Result<Self, Error> {
        let midi_output = midir::MidiOutput::new(client_name)?;

        let conn = midi_output
            .create_virtual(port_name.as_ref())
            .map_err(|_| Error::PortCreation(port_name.clone()))?;

        log::info!("Published virtual Output port {port_name}");

        Ok(Self { port_name, conn })
    }

    pub fn send(&mut self, msg: &Msg) -> Result<(), Error> {
        self.conn.send(msg).map_err(|err| {
            log::error!(
                "Failed to send MIDI msg {} to {}: {err}",
                msg.display(),
                self.port_name
            );
            Error::from(err)
        })
    }
}
