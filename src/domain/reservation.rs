use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    Pending,
    Confirmed,
    Cancelled,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Reservation {
    pub id: u32,
    pub customer_name: String,
    pub customer_phone: String,
    pub date: String,
    pub time: String,
    pub guests: u32,
    pub table_number: String,
    pub status: ReservationStatus,
    pub notes: String,
}

/// Staff-side reservation ledger. Plain last-write-wins CRUD, no further
/// invariants; the list always reflects the latest edit.
#[derive(Debug, Default)]
pub struct ReservationBook {
    entries: BTreeMap<u32, Reservation>,
    next_id: u32,
}

impl ReservationBook {
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Books a new reservation as `Pending` and returns its id.
    pub fn book(&mut self, mut reservation: Reservation) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        reservation.id = id;
        reservation.status = ReservationStatus::Pending;
        self.entries.insert(id, reservation);
        id
    }

    pub fn get(&self, id: u32) -> Option<&Reservation> {
        self.entries.get(&id)
    }

    /// Replaces an existing reservation's details; returns whether it existed.
    pub fn update(&mut self, id: u32, mut reservation: Reservation) -> bool {
        match self.entries.get_mut(&id) {
            Some(existing) => {
                reservation.id = id;
                reservation.status = existing.status;
                *existing = reservation;
                true
            }
            None => false,
        }
    }

    pub fn set_status(&mut self, id: u32, status: ReservationStatus) -> bool {
        match self.entries.get_mut(&id) {
            Some(existing) => {
                existing.status = status;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: u32) -> bool {
        self.entries.remove(&id).is_some()
    }

    pub fn all(&self) -> Vec<&Reservation> {
        self.entries.values().collect()
    }
}
