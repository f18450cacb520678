//Enable more cargo lint tests
#![warn(rust_2018_idioms)]
#![warn(clippy::disallowed_types)]

use huffcode::compression::compress::compress;
use huffcode::compression::decompress::{decompress, self_test};
use huffcode::error::HuffError;
use huffcode::tools::cli::{init_huff_opts, Mode};

use log::{info, LevelFilter};
use simplelog::{Config, TermLogger, TerminalMode};

fn main() -> Result<(), HuffError> {
    // Available log levels are Error, Warn, Info, Debug, Trace
    if let Err(e) = TermLogger::init(
        LevelFilter::Trace,
        Config::default(),
        TerminalMode::Stdout,
        simplelog::ColorChoice::Auto,
    ) {
        eprintln!("Logging is unavailable: {}", e);
    }

    let opts = init_huff_opts();

    //----- Figure how what we need to do and go do it
    let result = match opts.op_mode {
        Mode::Zip => compress(&opts).map(|_| ()),
        Mode::Unzip => decompress(&opts).map(|_| ()),
        Mode::Test => self_test(&opts).map(|_| ()),
    };

    if result.is_ok() {
        info!("Done.\n");
    }
    result
}
