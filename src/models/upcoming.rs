//! Upcoming birthdays grouped by the day they will be celebrated.

use chrono::Weekday;
use std::fmt;

/// Label used for birthdays that fall on a weekend.
pub const NEXT_MONDAY_LABEL: &str = "Next Monday";

/// The day a birthday is celebrated on.
///
/// Weekend birthdays are moved to the following Monday and get a label of
/// their own, separate from a birthday that really falls on a Monday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CelebrationDay {
    /// A working day, Monday to Friday
    Weekday(Weekday),

    /// A Saturday or Sunday birthday, celebrated the Monday after
    NextMonday,
}

impl CelebrationDay {
    /// Celebration day for a birthday falling on `weekday`.
    pub fn for_weekday(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Sat | Weekday::Sun => Self::NextMonday,
            other => Self::Weekday(other),
        }
    }

    /// English label, e.g. `"Wednesday"` or `"Next Monday"`.
    pub fn label(&self) -> &'static str {
        match self {
            Self::NextMonday => NEXT_MONDAY_LABEL,
            Self::Weekday(day) => match day {
                Weekday::Mon => "Monday",
                Weekday::Tue => "Tuesday",
                Weekday::Wed => "Wednesday",
                Weekday::Thu => "Thursday",
                Weekday::Fri => "Friday",
                Weekday::Sat => "Saturday",
                Weekday::Sun => "Sunday",
            },
        }
    }
}

impl fmt::Display for CelebrationDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of an upcoming-birthday query.
///
/// Days keep the order in which they were first seen while scanning the
/// book, and names inside a day keep scan order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpcomingBirthdays {
    days: Vec<(CelebrationDay, Vec<String>)>,
}

impl UpcomingBirthdays {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `name` to the bucket for `day`, creating the bucket if needed.
    pub fn push(&mut self, day: CelebrationDay, name: impl Into<String>) {
        let name = name.into();
        match self.days.iter_mut().find(|(d, _)| *d == day) {
            Some((_, names)) => names.push(name),
            None => self.days.push((day, vec![name])),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Names celebrated on `day`, if any.
    pub fn names_for(&self, day: CelebrationDay) -> Option<&[String]> {
        self.days
            .iter()
            .find(|(d, _)| *d == day)
            .map(|(_, names)| names.as_slice())
    }

    /// Names for a label such as `"Friday"` or `"Next Monday"`.
    pub fn names_for_label(&self, label: &str) -> Option<&[String]> {
        self.days
            .iter()
            .find(|(d, _)| d.label() == label)
            .map(|(_, names)| names.as_slice())
    }

    /// Buckets in first-seen order.
    pub fn days(&self) -> impl Iterator<Item = (CelebrationDay, &[String])> {
        self.days.iter().map(|(d, names)| (*d, names.as_slice()))
    }
}

/// Weekday lines come first in first-seen order, each ending in a newline.
/// The `Next Monday` line, when present, is always last and unterminated.
impl fmt::Display for UpcomingBirthdays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut next_monday = None;

        for (day, names) in &self.days {
            if *day == CelebrationDay::NextMonday {
                next_monday = Some(names);
                continue;
            }
            writeln!(f, "{}: {}", day, names.join(", "))?;
        }

        if let Some(names) = next_monday {
            write!(f, "{}: {}", NEXT_MONDAY_LABEL, names.join(", "))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekend_days_roll_to_next_monday() {
        assert_eq!(
            CelebrationDay::for_weekday(Weekday::Sat),
            CelebrationDay::NextMonday
        );
        assert_eq!(
            CelebrationDay::for_weekday(Weekday::Sun),
            CelebrationDay::NextMonday
        );
        assert_eq!(
            CelebrationDay::for_weekday(Weekday::Mon),
            CelebrationDay::Weekday(Weekday::Mon)
        );
    }

    #[test]
    fn test_labels() {
        assert_eq!(CelebrationDay::Weekday(Weekday::Wed).label(), "Wednesday");
        assert_eq!(CelebrationDay::NextMonday.label(), "Next Monday");
        assert_eq!(CelebrationDay::Weekday(Weekday::Mon).to_string(), "Monday");
    }

    #[test]
    fn test_push_groups_by_day_in_first_seen_order() {
        let mut upcoming = UpcomingBirthdays::new();
        upcoming.push(CelebrationDay::Weekday(Weekday::Fri), "Ann");
        upcoming.push(CelebrationDay::Weekday(Weekday::Tue), "Bob");
        upcoming.push(CelebrationDay::Weekday(Weekday::Fri), "Cid");

        let days: Vec<_> = upcoming.days().map(|(d, _)| d.label()).collect();
        assert_eq!(days, vec!["Friday", "Tuesday"]);
        assert_eq!(
            upcoming.names_for(CelebrationDay::Weekday(Weekday::Fri)),
            Some(&["Ann".to_string(), "Cid".to_string()][..])
        );
    }

    #[test]
    fn test_display_puts_next_monday_last() {
        let mut upcoming = UpcomingBirthdays::new();
        upcoming.push(CelebrationDay::NextMonday, "Bob");
        upcoming.push(CelebrationDay::Weekday(Weekday::Wed), "Ann");
        upcoming.push(CelebrationDay::NextMonday, "Eve");
        upcoming.push(CelebrationDay::Weekday(Weekday::Mon), "Dan");

        assert_eq!(
            upcoming.to_string(),
            "Wednesday: Ann\nMonday: Dan\nNext Monday: Bob, Eve"
        );
    }

    #[test]
    fn test_display_without_weekend_ends_with_newline() {
        let mut upcoming = UpcomingBirthdays::new();
        upcoming.push(CelebrationDay::Weekday(Weekday::Thu), "Ann");
        assert_eq!(upcoming.to_string(), "Thursday: Ann\n");
    }

    #[test]
    fn test_empty_renders_empty_string() {
        let upcoming = UpcomingBirthdays::new();
        assert!(upcoming.is_empty());
        assert_eq!(upcoming.to_string(), "");
    }
}
