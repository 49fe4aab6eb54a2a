use std::io::{BufRead, Write};
use log::{debug, info, warn};
use crate::core::carpark::ParkingInteractions;
use crate::core::vehicle::Arrival;
use crate::errors::carpark_error::CarparkError;
use crate::errors::command_error::CommandError;
use crate::shell::command::Command;
use crate::shell::printer::{join, status_table};

const LIST_SEPARATOR: &str = ", ";

#[derive(Debug, PartialEq, Eq)]
enum Outcome {
    Output(Vec<String>),
    Exit,
}

fn execute<P: ParkingInteractions>(parking: &mut P, command: Command) -> Result<Outcome, CommandError> {
    let lines = match command {
        Command::CreateParkingLot(capacity) => {
            parking.create(capacity)?;
            vec![format!("Created a parking lot with {capacity} slots")]
        }
        Command::Park { registration, colour } => {
            let slot = parking.park(Arrival::new(registration, colour))?;
            vec![format!("Allocated slot number: {slot}")]
        }
        Command::Leave(slot) => {
            parking.leave(slot)?;
            vec![format!("Slot number {slot} is free")]
        }
        // An empty colour match is a successful lookup for the carpark, but is shown as not found.
        Command::RegistrationNumbersForColour(colour) => {
            let (_, registrations) = parking.find_by_colour(&colour)?;
            if registrations.is_empty() {
                return Err(CarparkError::NotFound.into());
            }
            vec![join(&registrations, LIST_SEPARATOR)]
        }
        Command::SlotNumbersForColour(colour) => {
            let (slots, _) = parking.find_by_colour(&colour)?;
            if slots.is_empty() {
                return Err(CarparkError::NotFound.into());
            }
            vec![join(&slots, LIST_SEPARATOR)]
        }
        Command::SlotNumberForRegistration(registration) => {
            vec![parking.find_by_registration(&registration)?.to_string()]
        }
        Command::Status => status_table(&parking.list_occupied()?),
        Command::Exit => return Ok(Outcome::Exit),
    };
    Ok(Outcome::Output(lines))
}

/// Runs commands from `reader` until `exit` or end of input. Command failures
/// are written to `writer` as a single line and processing continues; only
/// failing to read the input or write the output ends the loop early.
pub(crate) fn operate<P, R, W>(parking: &mut P, reader: R, writer: &mut W) -> Result<(), CommandError>
    where P: ParkingInteractions, R: BufRead, W: Write {
    for (idx, bytes) in reader.split(b'\n').enumerate() {
        let line_no = idx + 1;
        // A line that is not valid UTF-8 is still just a line: decode it lossily and let parsing judge it.
        let line = String::from_utf8_lossy(&bytes?).into_owned();
        let outcome = Command::parse(&line).and_then(|command| {
            debug!("line {line_no}: {:?}", command);
            execute(parking, command)
        });
        match outcome {
            Ok(Outcome::Exit) => {
                info!("exit requested at line {line_no}");
                break;
            }
            Ok(Outcome::Output(lines)) => {
                for output in lines {
                    writeln!(writer, "{output}")?;
                }
            }
            Err(e) if e.is_fatal() => return Err(e),
            Err(e) => {
                warn!("line {line_no} ({:?}) failed: {e}", line.trim());
                writeln!(writer, "{e}")?;
            }
        }
    }
    writer.flush()?;
    Ok(())
}
