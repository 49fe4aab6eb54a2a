use std::env;
use std::fs::File;
use std::io;
use std::io::{BufRead, BufReader, Write};
use std::process;
use log::{debug, error, info};
use crate::core::carpark::Carpark;
use crate::errors::command_error::CommandError;
use crate::shell::operator::operate;

mod core;
mod errors;
mod shell;

// Commands come from the single file argument when given, otherwise from `stdin`.
fn run<R: BufRead, W: Write>(args: &[String], stdin: R, stdout: &mut W) -> Result<(), CommandError> {
    debug!("arguments found = {:?}", args);
    let mut carpark = Carpark::new();
    match args {
        [] => {
            info!("reading commands from stdin");
            operate(&mut carpark, stdin, stdout)
        }
        [path] => {
            info!("reading commands from {path}");
            let file = File::open(path)?;
            operate(&mut carpark, BufReader::new(file), stdout)
        }
        _ => Err(CommandError::TooManyArguments(args.len())),
    }
}

fn main() {
    env_logger::init();
    let args: Vec<String> = env::args().skip(1).collect();
    if let Err(e) = run(&args, io::stdin().lock(), &mut io::stdout().lock()) {
        error!("{e}");
        process::exit(1);
    }
}
