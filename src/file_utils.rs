use std::path::Path;

pub fn check_if_file_is_dir(file : &str) -> bool {
    Path::new(file).is_dir()
}
