use clap::Parser;
use log::{info, LevelFilter};
use std::{fmt::Display, fmt::Formatter};

/// Suffix added to the compressed file
pub const HUF_SUFFIX: &str = ".huf";
/// Suffix added to the code table file
pub const CODES_SUFFIX: &str = ".codes";
/// Suffix added to decompressed output
pub const OUT_SUFFIX: &str = ".out";

/// Verbosity of user information
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Quiet,
    Errors,
    Warnings,
    Info,
    Debug,
    Trace,
}

impl Verbosity {
    /// -v level from the command line: 0 is quiet, 5 and up is trace.
    pub fn from_level(v: u8) -> Self {
        match v {
            0 => Verbosity::Quiet,
            1 => Verbosity::Errors,
            2 => Verbosity::Warnings,
            3 => Verbosity::Info,
            4 => Verbosity::Debug,
            _ => Verbosity::Trace,
        }
    }

    pub fn level_filter(self) -> LevelFilter {
        match self {
            Verbosity::Quiet => LevelFilter::Off,
            Verbosity::Errors => LevelFilter::Error,
            Verbosity::Warnings => LevelFilter::Warn,
            Verbosity::Info => LevelFilter::Info,
            Verbosity::Debug => LevelFilter::Debug,
            Verbosity::Trace => LevelFilter::Trace,
        }
    }
}

/// Zip, Unzip, Test
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Zip,
    Unzip,
    Test,
}
impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Command Line Interpretation - uses external CLAP crate.
#[derive(Parser, Debug)]
#[clap(
    version,
    about = "Huffman coding file compressor",
    long_about = "
    Builds a Huffman code for the characters of a text file and packs the text with it.
    Compressing writes two files: the code table as text, and the packed bytes.
    Decompressing needs both of them back."
)]
pub struct Args {
    /// Filename of file to process
    #[clap()]
    filename: String,

    /// Perform compression on the input file (the default)
    #[clap(short = 'z', long = "zip")]
    compress: bool,

    /// Perform decompression on the input file
    #[clap(short = 'd', long = "decompress")]
    decompress: bool,

    /// Round trip the input file in memory and report any differences
    #[clap(short = 't', long = "test")]
    test: bool,

    /// Code table file to write (or read when decompressing)
    #[clap(short = 'c', long = "codes")]
    codes: Option<String>,

    /// Output file
    #[clap(short = 'o', long = "output")]
    output: Option<String>,

    /// Force overwriting output files
    #[clap(short = 'f', long = "force")]
    force: bool,

    /// Sets verbosity. -v0 is silent, -v5 is chatty
    #[clap(short = 'v', default_value_t = 3)]
    v: u8,
}

/// Everything the driver needs to know about this run.
#[derive(Debug)]
pub struct HuffOpts {
    /// Name of the file to read for input
    pub file: String,
    /// Code table file, if not the default for the mode
    pub codes: Option<String>,
    /// Output file, if not the default for the mode
    pub output: Option<String>,
    /// Silently overwrite existing files with the same name
    pub force_overwrite: bool,
    /// Compress/Decompress/Test
    pub op_mode: Mode,
    /// Verbosity of user information
    pub verbose: Verbosity,
}

impl HuffOpts {
    pub fn new(file: &str) -> Self {
        Self {
            file: file.to_string(),
            codes: None,
            output: None,
            force_overwrite: false,
            op_mode: Mode::Zip,
            verbose: Verbosity::Info,
        }
    }

    /// The input name with the compressed suffix taken off, if it has one.
    fn stem(&self) -> &str {
        self.file.strip_suffix(HUF_SUFFIX).unwrap_or(&self.file)
    }

    /// Where the code table is written (Zip) or read (Unzip).
    pub fn codes_path(&self) -> String {
        match &self.codes {
            Some(path) => path.clone(),
            None => format!("{}{}", self.stem(), CODES_SUFFIX),
        }
    }

    /// Where the packed bytes (Zip) or decoded text (Unzip) are written.
    pub fn output_path(&self) -> String {
        match (&self.output, self.op_mode) {
            (Some(path), _) => path.clone(),
            (None, Mode::Unzip) => format!("{}{}", self.stem(), OUT_SUFFIX),
            (None, _) => format!("{}{}", self.file, HUF_SUFFIX),
        }
    }
}

impl From<Args> for HuffOpts {
    fn from(args: Args) -> Self {
        let mut opts = HuffOpts::new(&args.filename);
        // -t wins over -d, which wins over -z
        if args.compress {
            opts.op_mode = Mode::Zip
        };
        if args.decompress {
            opts.op_mode = Mode::Unzip
        };
        if args.test {
            opts.op_mode = Mode::Test
        };
        opts.codes = args.codes;
        opts.output = args.output;
        opts.force_overwrite = args.force;
        opts.verbose = Verbosity::from_level(args.v);
        opts
    }
}

/// Parse the command line, set the log level, and report what we are about to do.
pub fn init_huff_opts() -> HuffOpts {
    let opts = HuffOpts::from(Args::parse());

    // Set the log level
    log::set_max_level(opts.verbose.level_filter());

    // Below we report initialization status to the user
    info!("---- Huffcode Initialization Start ----",);
    info!("Verbosity set to {}", log::max_level());
    info!("Operational mode set to {}", opts.op_mode);
    info!("Getting input from the file {}", opts.file);
    match opts.op_mode {
        Mode::Zip | Mode::Unzip => {
            info!("Code table file is {}", opts.codes_path());
            info!("Output file is {}", opts.output_path());
        }
        Mode::Test => info!("Test mode writes no files"),
    }
    if opts.force_overwrite {
        info!("Forcing file overwriting")
    };
    info!("---- Huffcode Initialization End ----\n");
    opts
}
