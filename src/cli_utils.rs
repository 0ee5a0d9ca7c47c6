use clap::*;

pub fn out_file_arg<'a, 'b>() -> Arg<'a, 'b> {
    Arg::with_name("out_file")
        .value_name("OUTFILE")
        .index(1)
        .help("File to write. Created if missing, truncated if it exists.
Parent directories are not created. Defaults to random_1gb_file.bin")
}

pub fn size_arg<'a, 'b>() -> Arg<'a, 'b> {
    Arg::with_name("size")
        .value_name("SIZE-GB")
        .index(2)
        .help("Size of the file in GiB (1024^3 bytes), fractions allowed.
The byte count is rounded down. Negative values are rejected.
Defaults to 1")
}

pub fn verbose_arg<'a, 'b>() -> Arg<'a, 'b> {
    Arg::with_name("verbose")
        .short("v")
        .long("verbose")
        .help("Show statistics after the file is written")
}
