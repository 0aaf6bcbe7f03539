use std::path::PathBuf;
use std::process;

mod keymap;
mod run;

fn main() {
    env_logger::init();

    let rom = match std::env::args().nth(1) {
        Some(path) => PathBuf::from(path),
        None => {
            eprintln!("usage: chip8 <rom>");
            process::exit(2);
        }
    };

    if let Err(e) = run::run(rom) {
        log::error!("{}", e);
        process::exit(1);
    }
}
