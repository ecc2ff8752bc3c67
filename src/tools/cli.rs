use std::{fmt::Display, fmt::Formatter};

use clap::{ArgGroup, Parser, ValueEnum};
use log::{info, LevelFilter};

/// Verbosity of user information
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Errors,
    Warnings,
    Info,
    Debug,
    Trace,
}

impl Verbosity {
    /// Each -v on the command line raises the level by one step.
    pub fn from_count(count: u64) -> Self {
        match count {
            0 => Verbosity::Errors,
            1 => Verbosity::Warnings,
            2 => Verbosity::Info,
            3 => Verbosity::Debug,
            _ => Verbosity::Trace,
        }
    }

    pub fn level_filter(&self) -> LevelFilter {
        match self {
            Verbosity::Errors => LevelFilter::Error,
            Verbosity::Warnings => LevelFilter::Warn,
            Verbosity::Info => LevelFilter::Info,
            Verbosity::Debug => LevelFilter::Debug,
            Verbosity::Trace => LevelFilter::Trace,
        }
    }
}

/// Encode (forward transform) or Decode (inverse transform)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Encode,
    Decode,
}
impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// The transform to run on the input block
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Tool {
    /// Burrows-Wheeler transform: 4 byte first index followed by the last column
    Bwt,
    /// Move-to-front coding over the full byte alphabet
    Mtf,
    /// Burrows-Wheeler transform followed by move-to-front coding
    Full,
}
impl Display for Tool {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// All user settable options that control program behavior
#[derive(Debug)]
pub struct Opts {
    /// Transform to apply
    pub tool: Tool,
    /// Forward or inverse
    pub op_mode: Mode,
    /// Verbosity of user information
    pub verbose: Verbosity,
}

impl Opts {
    pub fn new() -> Self {
        Self {
            tool: Tool::Full,
            op_mode: Mode::Encode,
            verbose: Verbosity::Errors,
        }
    }
}

impl Default for Opts {
    fn default() -> Self {
        Self::new()
    }
}

/// Command Line Interpretation - uses external CLAP crate.
#[derive(Parser, Debug)]
#[clap(
    version,
    about = "Block-sorting transforms: Burrows-Wheeler and move-to-front",
    long_about = "
    Reads the whole of standard input as one block, applies the chosen transform
    (or its inverse) and writes the result to standard output.

    bwt  writes a 4 byte big-endian first index followed by the last column.
    mtf  writes one rank byte per input byte.
    full writes the move-to-front coding of the bwt output."
)]
#[clap(group(ArgGroup::new("mode").required(true).args(&["encode", "decode"])))]
pub struct Args {
    /// Transform to apply
    #[clap(value_enum)]
    tool: Tool,

    /// Apply the forward transform
    #[clap(short = 'z', long = "encode")]
    encode: bool,

    /// Apply the inverse transform
    #[clap(short = 'd', long = "decode")]
    decode: bool,

    /// Sets verbosity. -v shows warnings, -vvvv is chatty
    #[clap(short = 'v', long = "verbose", parse(from_occurrences))]
    verbose: u64,
}

impl From<Args> for Opts {
    fn from(args: Args) -> Self {
        let mut opts = Opts::new();
        opts.tool = args.tool;
        if args.decode {
            opts.op_mode = Mode::Decode
        };
        opts.verbose = Verbosity::from_count(args.verbose);
        opts
    }
}

/// Parse the process command line (exiting with usage on error) and set the log level.
pub fn opts_init() -> Opts {
    let opts = Opts::from(Args::parse());
    log::set_max_level(opts.verbose.level_filter());

    info!("Verbosity set to {}", log::max_level());
    info!("Operational mode set to {} with tool {}", opts.op_mode, opts.tool);
    opts
}

/// Parse options from any argument list. The first item is the program name.
pub fn opts_from<I, T>(args: I) -> Result<Opts, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Args::try_parse_from(args).map(Opts::from)
}
