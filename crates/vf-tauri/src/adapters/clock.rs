use chrono::{Local, NaiveDate};
use vf_app::ports::ClockPort;

/// Local wall-clock date source.
pub struct SystemClock;

impl ClockPort for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}
