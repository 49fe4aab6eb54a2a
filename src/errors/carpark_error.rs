use thiserror::Error;

/// Failures reported by the slot allocator. Every failing operation leaves
/// the allocator exactly as it was before the call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub(crate) enum CarparkError {
    #[error("Carpark already initialized")]
    AlreadyInitialized,

    #[error("Carpark not initialized")]
    NotInitialized,

    #[error("Parking lot capacity must be positive")]
    InvalidCapacity,

    #[error("Sorry, parking lot is full")]
    LotFull,

    #[error("Slot number {0} is not occupied")]
    SlotNotOccupied(u32),

    #[error("Not found")]
    NotFound,
}

#[cfg(test)]
mod tests {
    use crate::errors::carpark_error::CarparkError;

    #[test]
    fn test_messages_are_single_line() {
        let errors = vec![
            CarparkError::AlreadyInitialized,
            CarparkError::NotInitialized,
            CarparkError::InvalidCapacity,
            CarparkError::LotFull,
            CarparkError::SlotNotOccupied(3),
            CarparkError::NotFound,
        ];
        for err in errors {
            assert_eq!(false, err.to_string().contains('\n'));
        }
    }

    #[test]
    fn test_lookup_messages() {
        assert_eq!("Not found", CarparkError::NotFound.to_string());
        assert_eq!("Slot number 7 is not occupied", CarparkError::SlotNotOccupied(7).to_string());
    }
}
