//Enable more cargo lint tests
#![warn(rust_2018_idioms)]
#![warn(clippy::disallowed_types)]

use std::io;
use std::process::exit;

use burrows::compression::{compress::compress, decompress::decompress};
use burrows::tools::cli::{opts_init, Mode};

use log::{error, info, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

fn main() {
    // Stdout carries the data, so all logging goes to stderr. The -v flags lower the max level later.
    if let Err(e) = TermLogger::init(
        LevelFilter::Trace,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) {
        eprintln!("Could not start logging: {}", e);
    }

    let opts = opts_init();

    //----- Run the chosen tool in the chosen direction
    let result = match opts.op_mode {
        Mode::Encode => compress(opts.tool, io::stdin().lock(), io::stdout().lock()),
        Mode::Decode => decompress(opts.tool, io::stdin().lock(), io::stdout().lock()),
    };

    match result {
        Ok(()) => info!("Done."),
        Err(e) => {
            error!("{}", e);
            exit(1);
        }
    }
}
