use ahash::AHashMap;
use log::{debug, info, warn};
use crate::core::min_heap::MinHeap;
use crate::core::vehicle::{Arrival, Vehicle};
use crate::errors::carpark_error::CarparkError;

/// Operations the command loop drives. All of them except `create` fail with
/// `NotInitialized` until a lot has been created.
#[cfg_attr(test, mockall::automock)]
pub(crate) trait ParkingInteractions {
    fn create(&mut self, capacity: u32) -> Result<(), CarparkError>;
    fn park(&mut self, arrival: Arrival) -> Result<u32, CarparkError>;
    fn leave(&mut self, slot: u32) -> Result<(), CarparkError>;
    fn find_by_colour(&self, colour: &str) -> Result<(Vec<u32>, Vec<String>), CarparkError>;
    fn find_by_registration(&self, registration: &str) -> Result<u32, CarparkError>;
    fn list_occupied(&self) -> Result<Vec<Vehicle>, CarparkError>;
}

struct LotMetadata {
    capacity: u32,
    high_water_mark: u32,
    occupancy: AHashMap<u32, Vehicle>,
    free_slots: MinHeap<u32>,
}

impl LotMetadata {
    fn new(capacity: u32) -> Self {
        Self {
            capacity,
            high_water_mark: 0,
            occupancy: AHashMap::new(),
            free_slots: MinHeap::new(),
        }
    }

    // Reuse beats growth. The high-water mark only moves once the fresh slot is known to fit.
    fn next_slot(&mut self) -> Result<u32, CarparkError> {
        if let Ok(slot) = self.free_slots.extract_min() {
            debug!("reusing freed slot {slot}");
            return Ok(slot);
        }
        if self.high_water_mark >= self.capacity {
            return Err(CarparkError::LotFull);
        }
        let candidate = self.high_water_mark + 1;
        self.high_water_mark = candidate;
        debug!("issuing fresh slot {candidate}");
        Ok(candidate)
    }

    fn occupied_in_order(&self) -> impl Iterator<Item=&Vehicle> {
        (1..=self.high_water_mark).filter_map(|slot| self.occupancy.get(&slot))
    }
}

pub(crate) struct Carpark {
    lot: Option<LotMetadata>,
}

impl Default for Carpark {
    fn default() -> Self {
        Self::new()
    }
}

impl Carpark {
    pub fn new() -> Self {
        Self { lot: None }
    }

    fn metadata(&self) -> Result<&LotMetadata, CarparkError> {
        self.lot.as_ref().ok_or(CarparkError::NotInitialized)
    }

    fn metadata_mut(&mut self) -> Result<&mut LotMetadata, CarparkError> {
        self.lot.as_mut().ok_or(CarparkError::NotInitialized)
    }
}

impl ParkingInteractions for Carpark {
    fn create(&mut self, capacity: u32) -> Result<(), CarparkError> {
        if self.lot.is_some() {
            warn!("rejected re-initialization with capacity {capacity}");
            return Err(CarparkError::AlreadyInitialized);
        }
        if capacity == 0 {
            return Err(CarparkError::InvalidCapacity);
        }
        self.lot = Some(LotMetadata::new(capacity));
        info!("parking lot created with {capacity} slots");
        Ok(())
    }

    fn park(&mut self, arrival: Arrival) -> Result<u32, CarparkError> {
        let lot = self.metadata_mut()?;
        let slot = match lot.next_slot() {
            Ok(slot) => slot,
            Err(e) => {
                warn!("no slot for {} (capacity {})", arrival.get_registration(), lot.capacity);
                return Err(e);
            }
        };
        debug!("parking {} ({}) at slot {slot}", arrival.get_registration(), arrival.get_colour());
        lot.occupancy.insert(slot, arrival.park_at(slot));
        Ok(slot)
    }

    fn leave(&mut self, slot: u32) -> Result<(), CarparkError> {
        let lot = self.metadata_mut()?;
        match lot.occupancy.remove(&slot) {
            Some(vehicle) => {
                lot.free_slots.insert(slot);
                debug!("{} left slot {slot}, {} slots queued for reuse (next {:?})",
                    vehicle.get_registration(), lot.free_slots.size(), lot.free_slots.peek_min());
                Ok(())
            }
            None => Err(CarparkError::SlotNotOccupied(slot)),
        }
    }

    fn find_by_colour(&self, colour: &str) -> Result<(Vec<u32>, Vec<String>), CarparkError> {
        let lot = self.metadata()?;
        let mut slots = vec![];
        let mut registrations = vec![];
        for vehicle in lot.occupied_in_order().filter(|v| v.get_colour() == colour) {
            slots.push(vehicle.get_slot());
            registrations.push(vehicle.get_registration().to_string());
        }
        Ok((slots, registrations))
    }

    fn find_by_registration(&self, registration: &str) -> Result<u32, CarparkError> {
        let lot = self.metadata()?;
        match lot.occupied_in_order().find(|v| v.get_registration() == registration) {
            Some(vehicle) => Ok(vehicle.get_slot()),
            None => {
                debug!("registration {registration} is not parked");
                Err(CarparkError::NotFound)
            }
        }
    }

    fn list_occupied(&self) -> Result<Vec<Vehicle>, CarparkError> {
        Ok(self.metadata()?.occupied_in_order().cloned().collect())
    }
}

#[cfg(test)]
impl Carpark {
    pub fn high_water_mark(&self) -> Option<u32> {
        self.lot.as_ref().map(|lot| lot.high_water_mark)
    }

    pub fn free_slot_count(&self) -> Option<usize> {
        self.lot.as_ref().map(|lot| lot.free_slots.size())
    }

    pub fn peek_free_slot(&self) -> Option<u32> {
        self.lot.as_ref().and_then(|lot| lot.free_slots.peek_min().copied())
    }

    // (occupied slots sorted, queued slots sorted, high-water mark, capacity)
    pub fn snapshot(&self) -> Option<(Vec<u32>, Vec<u32>, u32, u32)> {
        self.lot.as_ref().map(|lot| {
            let mut occupied: Vec<u32> = lot.occupancy.keys().copied().collect();
            occupied.sort();
            let mut queued: Vec<u32> = lot.free_slots.iter().copied().collect();
            queued.sort();
            (occupied, queued, lot.high_water_mark, lot.capacity)
        })
    }

    pub fn assert_invariants(&self) {
        let Some(lot) = self.lot.as_ref() else { return };
        assert_eq!(true, lot.high_water_mark <= lot.capacity);
        for (slot, vehicle) in lot.occupancy.iter() {
            assert_eq!(*slot, vehicle.get_slot());
            assert_eq!(true, *slot >= 1 && *slot <= lot.high_water_mark);
        }
        for slot in lot.free_slots.iter() {
            assert_eq!(false, lot.occupancy.contains_key(slot));
            assert_eq!(true, *slot >= 1 && *slot <= lot.high_water_mark);
        }
        // every issued slot is either occupied or queued for reuse
        assert_eq!(lot.high_water_mark as usize, lot.occupancy.len() + lot.free_slots.size());
        if lot.free_slots.is_empty() {
            assert_eq!(lot.high_water_mark as usize, lot.occupancy.len());
        }
    }
}
