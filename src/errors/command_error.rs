use std::io;
use thiserror::Error;
use crate::errors::carpark_error::CarparkError;

#[derive(Error, Debug)]
pub(crate) enum CommandError {
    #[error("Unknown input command")]
    UnknownCommand,

    #[error("Invalid number: {value}")]
    InvalidNumber { value: String },

    #[error("Expected at most one input file argument, got {0}")]
    TooManyArguments(usize),

    #[error(transparent)]
    Carpark(#[from] CarparkError),

    #[error("I/O failed with error: {0}")]
    Io(#[from] io::Error),
}

impl CommandError {
    // Fatal errors stop the command loop, everything else is reported and skipped.
    pub fn is_fatal(&self) -> bool {
        matches!(self, CommandError::Io(_) | CommandError::TooManyArguments(_))
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use crate::errors::carpark_error::CarparkError;
    use crate::errors::command_error::CommandError;

    #[test]
    fn test_carpark_errors_are_transparent() {
        let err: CommandError = CarparkError::LotFull.into();
        assert_eq!("Sorry, parking lot is full", err.to_string());
        assert_eq!(false, err.is_fatal());
    }

    #[test]
    fn test_fatality() {
        assert_eq!(false, CommandError::UnknownCommand.is_fatal());
        assert_eq!(false, CommandError::InvalidNumber { value: "x".to_string() }.is_fatal());
        assert_eq!(true, CommandError::TooManyArguments(2).is_fatal());
        let err: CommandError = io::Error::new(io::ErrorKind::BrokenPipe, "closed").into();
        assert_eq!(true, err.is_fatal());
    }
}
