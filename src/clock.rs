// Animation clock: one tick per processed hand. Callers derive phases with modulo.

#[derive(Debug, Default, Clone)]
pub struct AnimationClock {
    ticks: u64,
}

impl AnimationClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by one and return the new count.
    pub fn tick(&mut self) -> u64 {
        self.ticks += 1;
        self.ticks
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero_and_counts_up() {
        let mut c = AnimationClock::new();
        assert_eq!(c.ticks(), 0);
        assert_eq!(c.tick(), 1);
        assert_eq!(c.tick(), 2);
        assert_eq!(c.ticks(), 2);
    }

    #[test]
    fn never_wraps_at_caller_periods() {
        let mut c = AnimationClock::new();
        for _ in 0..500 {
            c.tick();
        }
        assert_eq!(c.ticks(), 500);
    }
}
