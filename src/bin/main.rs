extern crate randfill_lib;
use randfill_lib::*;

fn real_main() -> i32 {
    let matches = cli_gen::app().get_matches();

    cli_gen::gen(&matches)
}

fn main() {
    std::process::exit(real_main())
}
