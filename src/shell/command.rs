use crate::errors::command_error::CommandError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Command {
    CreateParkingLot(u32),
    Park { registration: String, colour: String },
    Leave(u32),
    RegistrationNumbersForColour(String),
    SlotNumbersForColour(String),
    SlotNumberForRegistration(String),
    Status,
    Exit,
}

fn parse_number(value: &str) -> Result<u32, CommandError> {
    value.parse().map_err(|_| CommandError::InvalidNumber { value: value.to_string() })
}

impl Command {
    /// Parses one whitespace-delimited input line. A known command name with
    /// the wrong number of arguments counts as unknown.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let command = match tokens.as_slice() {
            ["create_parking_lot", capacity] => Command::CreateParkingLot(parse_number(capacity)?),
            ["park", registration, colour] => Command::Park {
                registration: registration.to_string(),
                colour: colour.to_string(),
            },
            ["leave", slot] => Command::Leave(parse_number(slot)?),
            ["registration_numbers_for_cars_with_colour", colour] => Command::RegistrationNumbersForColour(colour.to_string()),
            ["slot_numbers_for_cars_with_colour", colour] => Command::SlotNumbersForColour(colour.to_string()),
            ["slot_number_for_registration_number", registration] => Command::SlotNumberForRegistration(registration.to_string()),
            ["status"] => Command::Status,
            ["exit"] => Command::Exit,
            _ => return Err(CommandError::UnknownCommand),
        };
        Ok(command)
    }
}

#[cfg(test)]
mod tests {
    use crate::errors::command_error::CommandError;
    use crate::shell::command::Command;

    #[test]
    fn test_parse_every_command() {
        assert_eq!(Command::CreateParkingLot(6), Command::parse("create_parking_lot 6").unwrap());
        assert_eq!(Command::Park { registration: "KA-01-HH-1234".to_string(), colour: "White".to_string() },
                   Command::parse("park KA-01-HH-1234 White").unwrap());
        assert_eq!(Command::Leave(4), Command::parse("leave 4").unwrap());
        assert_eq!(Command::RegistrationNumbersForColour("White".to_string()),
                   Command::parse("registration_numbers_for_cars_with_colour White").unwrap());
        assert_eq!(Command::SlotNumbersForColour("White".to_string()),
                   Command::parse("slot_numbers_for_cars_with_colour White").unwrap());
        assert_eq!(Command::SlotNumberForRegistration("KA-01-HH-3141".to_string()),
                   Command::parse("slot_number_for_registration_number KA-01-HH-3141").unwrap());
        assert_eq!(Command::Status, Command::parse("status").unwrap());
        assert_eq!(Command::Exit, Command::parse("exit").unwrap());
    }

    #[test]
    fn test_parse_tolerates_extra_whitespace() {
        assert_eq!(Command::Leave(2), Command::parse("  leave\t2 \r").unwrap());
        assert_eq!(Command::Status, Command::parse("status\r\n").unwrap());
    }

    #[test]
    fn test_parse_wrong_argument_count() {
        assert_eq!(true, matches!(Command::parse("park KA-01-HH-1234"), Err(CommandError::UnknownCommand)));
        assert_eq!(true, matches!(Command::parse("status now"), Err(CommandError::UnknownCommand)));
        assert_eq!(true, matches!(Command::parse("create_parking_lot"), Err(CommandError::UnknownCommand)));
    }

    #[test]
    fn test_parse_unknown_and_empty_lines() {
        assert_eq!(true, matches!(Command::parse("fly away"), Err(CommandError::UnknownCommand)));
        assert_eq!(true, matches!(Command::parse(""), Err(CommandError::UnknownCommand)));
        assert_eq!(true, matches!(Command::parse("STATUS"), Err(CommandError::UnknownCommand)));
    }

    #[test]
    fn test_parse_invalid_numbers() {
        match Command::parse("leave four") {
            Err(CommandError::InvalidNumber { value }) => assert_eq!("four", value),
            other => panic!("unexpected parse result {:?}", other),
        }
        assert_eq!(true, matches!(Command::parse("leave -1"), Err(CommandError::InvalidNumber { .. })));
        assert_eq!(true, matches!(Command::parse("create_parking_lot 1.5"), Err(CommandError::InvalidNumber { .. })));
    }
}
