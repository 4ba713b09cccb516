//! Random sources for synthetic rows.
//!
//! `faker` drives names and contact data and is always seeded, so the same
//! seed yields the same people. `jitter` drives timestamps; it is seeded from
//! entropy unless a seed is configured.

use chrono::{DateTime, Duration, Utc};
use fake::Fake;
use fake::faker::address::en::{BuildingNumber, CityName, PostCode, StreetName};
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::Name;
use fake::faker::phone_number::en::PhoneNumber;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Users are back-dated by up to this many hours.
pub const BACKDATE_HOURS: i64 = 7 * 24;

/// Orders trail their user by up to this many hours.
pub const ORDER_DELAY_HOURS: i64 = 24;

pub struct SeedRng {
    pub faker: StdRng,
    pub jitter: StdRng,
}

impl SeedRng {
    pub fn new(faker_seed: u64, jitter_seed: Option<u64>) -> Self {
        let jitter = match jitter_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            faker: StdRng::seed_from_u64(faker_seed),
            jitter,
        }
    }

    /// Both sources fixed; for tests.
    pub fn fixed(seed: u64) -> Self {
        Self::new(seed, Some(seed))
    }

    pub fn name(&mut self) -> String {
        Name().fake_with_rng(&mut self.faker)
    }

    pub fn email(&mut self) -> String {
        SafeEmail().fake_with_rng(&mut self.faker)
    }

    pub fn phone(&mut self) -> String {
        PhoneNumber().fake_with_rng(&mut self.faker)
    }

    pub fn city(&mut self) -> String {
        CityName().fake_with_rng(&mut self.faker)
    }

    pub fn street_address(&mut self) -> String {
        let number: String = BuildingNumber().fake_with_rng(&mut self.faker);
        let street: String = StreetName().fake_with_rng(&mut self.faker);
        format!("{number} {street}")
    }

    pub fn post_code(&mut self) -> String {
        PostCode().fake_with_rng(&mut self.faker)
    }

    /// `now` moved back by a whole number of hours in `[0, BACKDATE_HOURS)`.
    pub fn backdated(&mut self, now: DateTime<Utc>) -> DateTime<Utc> {
        now - Duration::hours(self.jitter.gen_range(0..BACKDATE_HOURS))
    }

    /// `start` moved forward by a whole number of hours in `[0, ORDER_DELAY_HOURS)`.
    pub fn hours_after(&mut self, start: DateTime<Utc>) -> DateTime<Utc> {
        start + Duration::hours(self.jitter.gen_range(0..ORDER_DELAY_HOURS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn faker_is_reproducible_for_a_seed() {
        let mut a = SeedRng::new(42, None);
        let mut b = SeedRng::new(42, None);
        for _ in 0..10 {
            assert_eq!(a.name(), b.name());
            assert_eq!(a.email(), b.email());
            assert_eq!(a.street_address(), b.street_address());
        }
    }

    #[rstest]
    fn faker_does_not_consume_jitter() {
        let mut a = SeedRng::fixed(7);
        let mut b = SeedRng::fixed(7);
        let now = Utc::now();
        a.name();
        a.phone();
        assert_eq!(a.backdated(now), b.backdated(now));
    }

    #[rstest]
    #[case(1)]
    #[case(99)]
    #[case(2024)]
    fn backdated_stays_within_a_week(#[case] seed: u64) {
        let mut rng = SeedRng::fixed(seed);
        let now = Utc::now();
        for _ in 0..200 {
            let t = rng.backdated(now);
            assert!(t <= now);
            assert!(now - t < Duration::hours(BACKDATE_HOURS));
        }
    }

    #[rstest]
    #[case(3)]
    #[case(17)]
    fn hours_after_stays_within_a_day(#[case] seed: u64) {
        let mut rng = SeedRng::fixed(seed);
        let start = Utc::now();
        for _ in 0..200 {
            let t = rng.hours_after(start);
            assert!(t >= start);
            assert!(t - start < Duration::hours(ORDER_DELAY_HOURS));
        }
    }
}
