use std::fmt;

use crate::date::Date;
use crate::{Error, Result};

/// Source of the "current year" a dump is centred on.
pub trait Clock {
    fn current_year(&self) -> isize;
}

/// Reads the year from the system clock (UTC).
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn current_year(&self) -> isize {
        Date::from(std::time::SystemTime::now()).year()
    }
}

/// Always reports the same year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub isize);

impl Clock for FixedClock {
    fn current_year(&self) -> isize {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn current_year(&self) -> isize {
        (**self).current_year()
    }
}

/// The previous, current and next year around a reference year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearWindow {
    current: isize,
}

impl YearWindow {
    /// Fails with [`Error::YearNotAvailable`] when a neighbouring year is not
    /// representable.
    pub fn around(current: isize) -> Result<Self> {
        if current.checked_sub(1).is_none() || current.checked_add(1).is_none() {
            return Err(Error::YearNotAvailable(current));
        }
        Ok(YearWindow { current })
    }

    pub fn from_clock(clock: &impl Clock) -> Result<Self> {
        Self::around(clock.current_year())
    }

    pub const fn years(&self) -> [isize; 3] {
        [self.current - 1, self.current, self.current + 1]
    }

    pub const fn contains(&self, year: isize) -> bool {
        year >= self.current - 1 && year <= self.current + 1
    }
}

impl fmt::Display for YearWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.current - 1, self.current + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_spans_three_years() {
        let window = YearWindow::from_clock(&FixedClock(2023)).unwrap();
        assert_eq!(window.years(), [2022, 2023, 2024]);
        assert!(window.contains(2022));
        assert!(!window.contains(2025));
        assert_eq!(window.to_string(), "2022..=2024");
    }

    #[test]
    fn unrepresentable_neighbours_are_rejected() {
        assert_eq!(
            YearWindow::around(isize::MAX),
            Err(Error::YearNotAvailable(isize::MAX))
        );
        assert_eq!(
            YearWindow::from_clock(&FixedClock(isize::MIN)),
            Err(Error::YearNotAvailable(isize::MIN))
        );
        assert_eq!(
            YearWindow::around(isize::MAX - 1).map(|it| it.years()[2]),
            Ok(isize::MAX)
        );
    }

    #[test]
    fn system_clock_is_after_epoch() {
        assert!(SystemClock.current_year() >= 1970);
    }
}
