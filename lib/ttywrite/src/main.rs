mod logger;
mod parsers;

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;
use std::process;
use std::time::Duration;

use chunkload::Progress;
use log::{debug, error, info};
use serial::core::{BaudRate, CharSize, FlowControl, SerialDevice, SerialPortSettings, StopBits};
use structopt::StructOpt;

use parsers::{parse_baud_rate, parse_flow_control, parse_stop_bits, parse_width};

#[derive(StructOpt, Debug)]
#[structopt(about = "Write to TTY using the chunked boot protocol by default.")]
struct Opt {
    #[structopt(short = "i", help = "Input file (defaults to stdin if not set)", parse(from_os_str))]
    input: Option<PathBuf>,

    #[structopt(short = "b", long = "baud", parse(try_from_str = "parse_baud_rate"),
                help = "Set baud rate", default_value = "115200")]
    baud_rate: BaudRate,

    #[structopt(short = "t", long = "timeout", parse(try_from_str),
                help = "Set timeout in seconds", default_value = "10")]
    timeout: u64,

    #[structopt(short = "w", long = "width", parse(try_from_str = "parse_width"),
                help = "Set data character width in bits", default_value = "8")]
    char_width: CharSize,

    #[structopt(help = "Path to TTY device", parse(from_os_str))]
    tty_path: PathBuf,

    #[structopt(short = "f", long = "flow-control", parse(try_from_str = "parse_flow_control"),
                help = "Enable flow control ('hardware' or 'software')", default_value = "none")]
    flow_control: FlowControl,

    #[structopt(short = "s", long = "stop-bits", parse(try_from_str = "parse_stop_bits"),
                help = "Set number of stop bits", default_value = "1")]
    stop_bits: StopBits,

    #[structopt(short = "r", long = "raw", help = "Disable chunk framing")]
    raw: bool,

    #[structopt(short = "v", long = "verbose", help = "Log every chunk")]
    verbose: bool,
}

fn progress_fn(progress: Progress) {
    match progress {
        Progress::Chunk { len, offset } => {
            debug!("chunk of {} bytes at offset {}", len, offset);
            print!(".");
            let _ = io::stdout().flush();
        }
        Progress::Done { total } => println!("\nProgress: sent {} bytes", total),
    }
}

fn run(opt: Opt) -> io::Result<()> {
    let mut port = serial::open(&opt.tty_path)?;

    port.set_timeout(Duration::from_secs(opt.timeout))?;
    let mut settings = port.read_settings()?;
    settings.set_baud_rate(opt.baud_rate)?;
    settings.set_stop_bits(opt.stop_bits);
    settings.set_flow_control(opt.flow_control);
    settings.set_char_size(opt.char_width);
    port.write_settings(&settings)?;
    info!("opened {} at {:?}", opt.tty_path.display(), opt.baud_rate);

    let mut handle: Box<dyn BufRead> = match opt.input {
        Some(ref p) => Box::new(BufReader::new(File::open(p)?)),
        None => Box::new(BufReader::new(io::stdin())),
    };

    if opt.raw {
        let sent = io::copy(&mut *handle, &mut port)?;
        info!("copied {} raw bytes", sent);
    } else {
        chunkload::transmit_with_progress(handle, &mut port, progress_fn)?;
    }

    Ok(())
}

fn main() {
    let opt = Opt::from_args();
    logger::init_logger(opt.verbose);

    if let Err(e) = run(opt) {
        error!("{}", e);
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let opt = Opt::from_iter(vec!["ttywrite", "/dev/ttyUSB0"]);
        assert_eq!(opt.tty_path, PathBuf::from("/dev/ttyUSB0"));
        assert_eq!(opt.input, None);
        assert_eq!(opt.baud_rate, BaudRate::Baud115200);
        assert_eq!(opt.timeout, 10);
        assert_eq!(opt.char_width, CharSize::Bits8);
        assert_eq!(opt.flow_control, FlowControl::FlowNone);
        assert_eq!(opt.stop_bits, StopBits::Stop1);
        assert!(!opt.raw);
        assert!(!opt.verbose);
    }

    #[test]
    fn overrides() {
        let opt = Opt::from_iter(vec![
            "ttywrite", "-i", "kernel.bin", "-b", "9600", "-s", "2", "-r", "-v", "/dev/ttyS0",
        ]);
        assert_eq!(opt.input, Some(PathBuf::from("kernel.bin")));
        assert_eq!(opt.baud_rate, BaudRate::Baud9600);
        assert_eq!(opt.stop_bits, StopBits::Stop2);
        assert!(opt.raw);
        assert!(opt.verbose);
    }
}
