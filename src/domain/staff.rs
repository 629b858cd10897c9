use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::SystemTime;

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum StaffStatus {
    Active,
    Inactive,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Review {
    pub rating: u8,
    pub comment: String,
    pub author: String,
    pub date: SystemTime,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Employee {
    pub id: u32,
    pub name: String,
    pub role: String,
    pub phone: String,
    pub email: String,
    pub shift: String,
    pub status: StaffStatus,
    /// Running average of review ratings; zero until the first review lands.
    pub rating: Decimal,
    pub reviews: Vec<Review>,
}

/// Staff roster with last-write-wins CRUD and per-employee reviews.
#[derive(Debug, Default)]
pub struct StaffRoster {
    entries: BTreeMap<u32, Employee>,
    next_id: u32,
}

impl StaffRoster {
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Hires a new employee as `Active` with no reviews; returns the id.
    pub fn hire(&mut self, mut employee: Employee) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        employee.id = id;
        employee.status = StaffStatus::Active;
        employee.rating = Decimal::ZERO;
        employee.reviews.clear();
        self.entries.insert(id, employee);
        id
    }

    pub fn get(&self, id: u32) -> Option<&Employee> {
        self.entries.get(&id)
    }

    /// Replaces contact/role details, keeping status, rating and reviews.
    pub fn update(&mut self, id: u32, details: Employee) -> bool {
        match self.entries.get_mut(&id) {
            Some(existing) => {
                existing.name = details.name;
                existing.role = details.role;
                existing.phone = details.phone;
                existing.email = details.email;
                existing.shift = details.shift;
                true
            }
            None => false,
        }
    }

    pub fn toggle_status(&mut self, id: u32) -> bool {
        match self.entries.get_mut(&id) {
            Some(existing) => {
                existing.status = match existing.status {
                    StaffStatus::Active => StaffStatus::Inactive,
                    StaffStatus::Inactive => StaffStatus::Active,
                };
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: u32) -> bool {
        self.entries.remove(&id).is_some()
    }

    /// Appends a review and recomputes the average rating.
    pub fn add_review(&mut self, id: u32, review: Review) -> bool {
        match self.entries.get_mut(&id) {
            Some(existing) => {
                existing.reviews.push(review);
                let sum: Decimal = existing
                    .reviews
                    .iter()
                    .map(|r| Decimal::from(r.rating))
                    .sum();
                existing.rating = sum / Decimal::from(existing.reviews.len() as u32);
                true
            }
            None => false,
        }
    }

    pub fn all(&self) -> Vec<&Employee> {
        self.entries.values().collect()
    }

    pub fn active_count(&self) -> usize {
        self.entries
            .values()
            .filter(|e| e.status == StaffStatus::Active)
            .count()
    }
}
