use std::{env, fs, process};

fn main() {
    let args = env::args().skip(1).collect::<Vec<String>>();
    let (path, section, key) = match args.as_slice() {
        [path, key] => (path, "", key),
        [path, section, key] => (path, section.as_str(), key),
        _ => {
            eprintln!("usage: genie <path> [section] <key>");
            process::exit(2);
        }
    };

    let text = fs::read_to_string(path).expect("failed to read file");

    match genie::parse(&text) {
        Ok(data) => println!("{}", data.get_from_section(section, key)),
        Err(error) => {
            eprintln!("{error}");
            process::exit(1);
        }
    }
}
