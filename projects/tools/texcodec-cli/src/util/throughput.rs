use bytesize::ByteSize;
use core::fmt;
use std::time::Duration;

/// A [`ByteSize`] per second, displayed with a "/s" suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Throughput(pub ByteSize);

impl Throughput {
    pub fn from_bytes_per_sec(bytes_per_sec: u64) -> Self {
        Self(ByteSize(bytes_per_sec))
    }

    /// Average rate for `bytes` processed over `elapsed`; zero for an empty interval.
    pub fn measure(bytes: u64, elapsed: Duration) -> Self {
        let secs = elapsed.as_secs_f64();
        if secs > 0.0 {
            Self::from_bytes_per_sec((bytes as f64 / secs) as u64)
        } else {
            Self::from_bytes_per_sec(0)
        }
    }
}

impl fmt::Display for Throughput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/s", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measure_handles_zero_elapsed() {
        assert_eq!(Throughput::measure(1000, Duration::ZERO), Throughput::from_bytes_per_sec(0));
    }

    #[test]
    fn measure_averages_over_elapsed() {
        let throughput = Throughput::measure(4096, Duration::from_secs(2));
        assert_eq!(throughput.0, ByteSize(2048));
        assert!(throughput.to_string().ends_with("/s"));
    }
}
