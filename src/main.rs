mod bytes;

pub mod midi;
mod surface;
pub mod translator;

use clap::Parser;
use crossbeam_channel as channel;

use translator::Translator;

const CLIENT_NAME: &str = "midiware";

#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// List input MIDI devices
    #[arg(long)]
    list: bool,

    /// Input MIDI device, by number or name
    #[arg(long, default_value = "")]
    device: String,

    /// Print debugging info for in/out data
    #[arg(long)]
    debug: bool,
}

fn main() {
    let args = Args::parse();

    let level = if args.debug {
        log::LevelFilter::Trace
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::new().filter_level(level).init();

    match run(args) {
        Ok(()) => log::info!("Exiting cleanly."),
        Err(err) => {
            log::error!("Error: {err}");
            for source in err.chain().skip(1) {
                log::error!("\t{source}");
            }
            std::process::exit(1);
        }
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let mut ports_in = midi::PortsIn::try_new(CLIENT_NAME.into())?;

    if args.list {
        for (nb, name) in ports_in.list().enumerate() {
            log::info!("MIDI port #{nb}: {name}");
        }
        return Ok(());
    }

    let out = midi::VirtualOut::try_new(CLIENT_NAME, CLIENT_NAME.into())?;
    let mut translator = Translator::new(surface::layout(), out);

    let port_name = ports_in.select(&args.device)?;
    log::info!("Using MIDI device {port_name}");

    let (msg_tx, msg_rx) = channel::unbounded();
    ports_in.connect(port_name, msg_tx)?;

    log::info!("Listening for MIDI data...");

    // The midir callback thread feeds the channel; translation stays
    // single-threaded and in arrival order.
    for msg in msg_rx {
        translator.process(midi::ChannelMsg::decode(msg));
    }

    Ok(())
}
