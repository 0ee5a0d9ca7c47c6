macro_rules! exit_with_msg {
    (
        ok => $($x:expr),*
    ) => {{
        print!($($x),*);
        return 0;
    }};
    (
        usr => $($x:expr),*
    ) => {{
        eprintln!($($x),*);
        return 1;
    }};
    (
        op => $($x:expr),*
    ) => {{
        eprintln!($($x),*);
        return 2;
    }}
}

macro_rules! exit_if_file {
    (
        is_dir $file:expr => $($x:expr),*
    ) => {{
        if file_utils::check_if_file_is_dir($file) {
            exit_with_msg!(usr => $($x),*);
        }
    }}
}

macro_rules! get_out_file {
    (
        $matches:expr
    ) => {{
        let out_file = $matches.value_of("out_file").unwrap_or(DEFAULT_OUT_FILE);
        exit_if_file!(is_dir out_file => "\"{}\" is a directory", out_file);
        out_file
    }}
}

macro_rules! get_size {
    (
        $matches:expr
    ) => {{
        match $matches.value_of("size") {
            None    => DEFAULT_SIZE_IN_GIBIBYTES,
            Some(x) => match size_utils::parse_size(x) {
                Ok(x)  => x,
                Err(e) => exit_with_msg!(usr => "Invalid size \"{}\" : {}", x, e)
            }
        }
    }}
}
