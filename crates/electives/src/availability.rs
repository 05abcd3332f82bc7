//! A student's declared weekly free time.

use crate::day::normalize_day_name;
use crate::grid::{Weekday, TIME_SLOTS};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AvailabilityError {
    #[error("Day index {0} is not on the teaching grid")]
    UnknownDay(u8),

    #[error("Slot index {0} is not on the teaching grid")]
    UnknownSlot(u8),

    #[error("Day {0} has an empty slot selection; deselect the day instead")]
    EmptySlots(u8),

    #[error("Invalid day selection {input:?}: {reason}")]
    InvalidSelection { input: String, reason: String },
}

/// What the student has picked for a selected day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DaySlots {
    /// Day picked without any slot: free the entire day.
    AllDay,
    /// Free only during these slots. Never empty.
    Only(BTreeSet<u8>),
}

impl DaySlots {
    pub fn allows(&self, slot: u8) -> bool {
        match self {
            DaySlots::AllDay => true,
            DaySlots::Only(slots) => slots.contains(&slot),
        }
    }
}

/// Mapping from day index to the slots the student is free.
///
/// A missing day means the day was not selected, which is different from
/// [`DaySlots::AllDay`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<u8, Option<BTreeSet<u8>>>",
    into = "BTreeMap<u8, Option<BTreeSet<u8>>>"
)]
pub struct Availability {
    days: BTreeMap<u8, DaySlots>,
}

impl Availability {
    pub fn new() -> Self {
        Self::default()
    }

    /// True if no day is selected, in which case no time filter applies.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Looks up a day by raw index; indices outside the grid are never present.
    pub fn get(&self, day: u8) -> Option<&DaySlots> {
        self.days.get(&day)
    }

    pub fn days(&self) -> impl Iterator<Item = (Weekday, &DaySlots)> {
        self.days
            .iter()
            .filter_map(|(index, slots)| Weekday::from_index(*index).map(|d| (d, slots)))
    }

    /// Selects a day, either for the whole day or for the given slots.
    /// An empty slot list deselects the day.
    pub fn select_day(
        &mut self,
        day: Weekday,
        slots: Option<&[u8]>,
    ) -> Result<&mut Self, AvailabilityError> {
        match slots {
            None => {
                self.days.insert(day.index(), DaySlots::AllDay);
            }
            Some(slots) => {
                let set = checked_slots(slots.iter().copied())?;
                if set.is_empty() {
                    self.days.remove(&day.index());
                } else {
                    self.days.insert(day.index(), DaySlots::Only(set));
                }
            }
        }
        Ok(self)
    }

    /// Selected days become unselected; unselected days become free all day.
    pub fn toggle_day(&mut self, day: Weekday) {
        if self.days.remove(&day.index()).is_none() {
            self.days.insert(day.index(), DaySlots::AllDay);
        }
    }

    /// Flips one slot on a day, selecting the day first if needed.
    ///
    /// Picking a slot on an all-day selection narrows it to that slot.
    /// Removing the last slot deselects the day.
    pub fn toggle_slot(&mut self, day: Weekday, slot: u8) -> Result<(), AvailabilityError> {
        checked_slots([slot])?;
        let key = day.index();

        match self.days.remove(&key) {
            None | Some(DaySlots::AllDay) => {
                self.days.insert(key, DaySlots::Only(BTreeSet::from([slot])));
            }
            Some(DaySlots::Only(mut slots)) => {
                if !slots.remove(&slot) {
                    slots.insert(slot);
                }
                if !slots.is_empty() {
                    self.days.insert(key, DaySlots::Only(slots));
                }
            }
        }
        Ok(())
    }

    pub fn is_day_selected(&self, day: Weekday) -> bool {
        self.days.contains_key(&day.index())
    }

    pub fn is_slot_selected(&self, day: Weekday, slot: u8) -> bool {
        matches!(self.days.get(&day.index()), Some(DaySlots::Only(s)) if s.contains(&slot))
    }
}

fn checked_slots(slots: impl IntoIterator<Item = u8>) -> Result<BTreeSet<u8>, AvailabilityError> {
    slots
        .into_iter()
        .map(|slot| {
            if (slot as usize) < TIME_SLOTS.len() {
                Ok(slot)
            } else {
                Err(AvailabilityError::UnknownSlot(slot))
            }
        })
        .collect()
}

impl TryFrom<BTreeMap<u8, Option<BTreeSet<u8>>>> for Availability {
    type Error = AvailabilityError;

    fn try_from(raw: BTreeMap<u8, Option<BTreeSet<u8>>>) -> Result<Self, Self::Error> {
        let mut days = BTreeMap::new();
        for (day, slots) in raw {
            if Weekday::from_index(day).is_none() {
                return Err(AvailabilityError::UnknownDay(day));
            }
            let entry = match slots {
                None => DaySlots::AllDay,
                Some(slots) if slots.is_empty() => return Err(AvailabilityError::EmptySlots(day)),
                Some(slots) => DaySlots::Only(checked_slots(slots)?),
            };
            days.insert(day, entry);
        }
        Ok(Self { days })
    }
}

impl From<Availability> for BTreeMap<u8, Option<BTreeSet<u8>>> {
    fn from(availability: Availability) -> Self {
        availability
            .days
            .into_iter()
            .map(|(day, slots)| match slots {
                DaySlots::AllDay => (day, None),
                DaySlots::Only(set) => (day, Some(set)),
            })
            .collect()
    }
}

/// A day picked on the command line: `mon` or `mon:0,1,4`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySelection {
    pub day: Weekday,
    pub slots: Option<Vec<u8>>,
}

impl DaySelection {
    pub fn apply(&self, availability: &mut Availability) -> Result<(), AvailabilityError> {
        availability.select_day(self.day, self.slots.as_deref())?;
        Ok(())
    }
}

impl FromStr for DaySelection {
    type Err = AvailabilityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| AvailabilityError::InvalidSelection {
            input: s.to_string(),
            reason: reason.to_string(),
        };

        let (day_part, slot_part) = match s.split_once(':') {
            Some((day, slots)) => (day, Some(slots)),
            None => (s, None),
        };

        let day = normalize_day_name(day_part)
            .and_then(Weekday::from_index)
            .ok_or_else(|| invalid("expected a weekday from Monday to Friday"))?;

        let slots = match slot_part {
            None => None,
            Some(list) => {
                let parsed = list
                    .split(',')
                    .map(|part| part.trim().parse::<u8>())
                    .collect::<Result<Vec<_>, _>>()
                    .map_err(|_| invalid("slots must be a comma-separated list of indices"))?;
                checked_slots(parsed.iter().copied())?;
                Some(parsed)
            }
        };

        Ok(DaySelection { day, slots })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_day() {
        let mut a = Availability::new();
        a.toggle_day(Weekday::Monday);
        assert_eq!(a.get(0), Some(&DaySlots::AllDay));
        a.toggle_day(Weekday::Monday);
        assert!(a.is_empty());
    }

    #[test]
    fn test_toggle_slot_narrows_all_day() {
        let mut a = Availability::new();
        a.toggle_day(Weekday::Tuesday);
        a.toggle_slot(Weekday::Tuesday, 3).unwrap();
        assert!(a.is_slot_selected(Weekday::Tuesday, 3));
        assert!(!a.is_slot_selected(Weekday::Tuesday, 2));
    }

    #[test]
    fn test_toggle_slot_selects_day() {
        let mut a = Availability::new();
        a.toggle_slot(Weekday::Friday, 0).unwrap();
        a.toggle_slot(Weekday::Friday, 1).unwrap();
        assert_eq!(a.get(4), Some(&DaySlots::Only(BTreeSet::from([0, 1]))));
    }

    #[test]
    fn test_removing_last_slot_deselects_day() {
        let mut a = Availability::new();
        a.toggle_slot(Weekday::Wednesday, 5).unwrap();
        a.toggle_slot(Weekday::Wednesday, 5).unwrap();
        assert!(!a.is_day_selected(Weekday::Wednesday));
        assert!(a.is_empty());
    }

    #[test]
    fn test_toggle_slot_rejects_unknown_slot() {
        let mut a = Availability::new();
        assert_eq!(
            a.toggle_slot(Weekday::Monday, 9),
            Err(AvailabilityError::UnknownSlot(9))
        );
        assert!(a.is_empty());
    }

    #[test]
    fn test_select_day() {
        let mut a = Availability::new();
        a.select_day(Weekday::Monday, None)
            .unwrap()
            .select_day(Weekday::Thursday, Some(&[2, 1]))
            .unwrap();
        assert_eq!(a.get(0), Some(&DaySlots::AllDay));
        assert_eq!(a.get(3), Some(&DaySlots::Only(BTreeSet::from([1, 2]))));

        a.select_day(Weekday::Thursday, Some(&[])).unwrap();
        assert_eq!(a.get(3), None);
    }

    #[test]
    fn test_json_form() {
        let a: Availability = serde_json::from_str(r#"{"0": null, "2": [0, 1]}"#).unwrap();
        assert_eq!(a.get(0), Some(&DaySlots::AllDay));
        assert!(a.get(2).unwrap().allows(1));
        assert!(!a.get(2).unwrap().allows(4));

        let json = serde_json::to_string(&a).unwrap();
        assert_eq!(json, r#"{"0":null,"2":[0,1]}"#);
    }

    #[test]
    fn test_json_rejects_invalid() {
        assert!(serde_json::from_str::<Availability>(r#"{"1": []}"#).is_err());
        assert!(serde_json::from_str::<Availability>(r#"{"5": null}"#).is_err());
        assert!(serde_json::from_str::<Availability>(r#"{"0": [12]}"#).is_err());
    }

    #[test]
    fn test_days_iterates_in_order() {
        let mut a = Availability::new();
        a.toggle_day(Weekday::Friday);
        a.toggle_day(Weekday::Monday);
        let days: Vec<_> = a.days().map(|(d, _)| d).collect();
        assert_eq!(days, vec![Weekday::Monday, Weekday::Friday]);
    }

    #[test]
    fn test_parse_day_selection() {
        let sel: DaySelection = "mon".parse().unwrap();
        assert_eq!(sel.day, Weekday::Monday);
        assert_eq!(sel.slots, None);

        let sel: DaySelection = "Thursday:0, 1,4".parse().unwrap();
        assert_eq!(sel.day, Weekday::Thursday);
        assert_eq!(sel.slots, Some(vec![0, 1, 4]));

        assert!("sat".parse::<DaySelection>().is_err());
        assert!("mon:a,b".parse::<DaySelection>().is_err());
        assert_eq!(
            "mon:9".parse::<DaySelection>(),
            Err(AvailabilityError::UnknownSlot(9))
        );
    }

    #[test]
    fn test_apply_selection() {
        let mut a = Availability::new();
        "tue:2".parse::<DaySelection>().unwrap().apply(&mut a).unwrap();
        assert!(a.is_slot_selected(Weekday::Tuesday, 2));
    }
}
