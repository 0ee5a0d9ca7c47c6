use crate::file_utils;
use crate::gen_core;
use crate::gen_core::{Param,
                      DEFAULT_OUT_FILE,
                      DEFAULT_SIZE_IN_GIBIBYTES};
use crate::size_utils;
use std::io;

use clap::*;
use crate::cli_utils::*;

pub fn app<'a, 'b>() -> App<'a, 'b> {
    App::new("randfill")
        .version(env!("CARGO_PKG_VERSION"))
        .setting(AppSettings::AllowNegativeNumbers)
        .about("Write a file of the given size filled with cryptographically secure random bytes")
        .arg(out_file_arg())
        .arg(size_arg())
        .arg(verbose_arg())
}

pub fn gen<'a>(matches : &ArgMatches<'a>) -> i32 {
    let out_file = get_out_file!(matches);
    let size     = get_size!(matches);
    let verbose  = matches.is_present("verbose");

    let param =
        match matches.value_of("size") {
            None    => Param::new(out_file, size),
            Some(x) => Param::new(out_file, size).with_size_text(x.trim()),
        };

    match gen_core::gen_file_and_report(&param, &mut io::stdout()) {
        Ok(stats) => {
            if verbose {
                println!();
                println!("{}", stats);
            }
            exit_with_msg!(ok => "")
        },
        Err(e)    => exit_with_msg!(op => "{}", e)
    }
}
