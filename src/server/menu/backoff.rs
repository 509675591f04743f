use std::time::Duration;

pub(crate) const SHORT_RETRIES: usize = 5;
pub(crate) const UNIT: Duration = Duration::from_millis(1_000);
pub(crate) const COOLDOWN: Duration = Duration::from_millis(60_000);

/// Wait schedule between failed menu fetches: `fib(k) * unit` for the first
/// `short_retries` failures, then one cooldown, then the short schedule again.
#[derive(Debug, Clone)]
pub(crate) struct Backoff {
    delays: Vec<Duration>,
    cooldown: Duration,
    attempt: usize,
}

impl Default for Backoff {
    fn default() -> Self {
        Self::new(SHORT_RETRIES, UNIT, COOLDOWN)
    }
}

impl Backoff {
    pub fn new(short_retries: usize, unit: Duration, cooldown: Duration) -> Self {
        Self {
            delays: fibonacci(short_retries)
                .into_iter()
                .map(|n| unit * n as u32)
                .collect(),
            cooldown,
            attempt: 0,
        }
    }

    /// Delay to wait after the current failure.
    pub fn next_delay(&mut self) -> Duration {
        match self.delays.get(self.attempt) {
            Some(delay) => {
                self.attempt += 1;
                *delay
            }
            None => {
                self.attempt = 0;
                self.cooldown
            }
        }
    }
}

fn fibonacci(len: usize) -> Vec<u64> {
    let mut seq = Vec::with_capacity(len);
    let (mut a, mut b) = (1_u64, 1_u64);
    for _ in 0..len {
        seq.push(a);
        (a, b) = (b, a + b);
    }
    seq
}
