/// What the caller supplies when a vehicle arrives. It only becomes a
/// `Vehicle` once the carpark has assigned it a slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Arrival {
    registration: String,
    colour: String,
}

impl Arrival {
    pub fn new(registration: String, colour: String) -> Self {
        Self { registration, colour }
    }

    pub fn get_registration(&self) -> &str {
        &self.registration
    }

    pub fn get_colour(&self) -> &str {
        &self.colour
    }

    pub(crate) fn park_at(self, slot: u32) -> Vehicle {
        Vehicle {
            slot,
            registration: self.registration,
            colour: self.colour,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Vehicle {
    slot: u32,
    registration: String,
    colour: String,
}

impl Vehicle {
    pub fn get_slot(&self) -> u32 {
        self.slot
    }

    pub fn get_registration(&self) -> &str {
        &self.registration
    }

    pub fn get_colour(&self) -> &str {
        &self.colour
    }
}

#[cfg(test)]
mod tests {
    use crate::core::vehicle::Arrival;

    #[test]
    fn test_arrival_keeps_caller_input() {
        let arrival = Arrival::new("KA-01-HH-1234".to_string(), "White".to_string());
        assert_eq!("KA-01-HH-1234", arrival.get_registration());
        assert_eq!("White", arrival.get_colour());
    }

    #[test]
    fn test_park_at_assigns_slot() {
        let vehicle = Arrival::new("KA-01-HH-1234".to_string(), "White".to_string()).park_at(3);
        assert_eq!(3, vehicle.get_slot());
        assert_eq!("KA-01-HH-1234", vehicle.get_registration());
        assert_eq!("White", vehicle.get_colour());
    }
}
