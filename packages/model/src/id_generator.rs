use crc32fast::Hasher;

/// Derive a stable session seed from a session name using CRC32
pub fn session_seed(name: &str) -> String {
    let mut hasher = Hasher::new();
    hasher.update(name.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Sequential ID generator for blocks within an editing session
///
/// Every block id is `{seed}-{n}` where the seed is shared by the whole
/// session and `n` is a monotonically increasing counter, so ids are unique
/// within a session and stable across replays of the same command sequence.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    seed: String,
    count: u32,
}

impl IdGenerator {
    pub fn new(session_name: &str) -> Self {
        Self {
            seed: session_seed(session_name),
            count: 0,
        }
    }

    pub fn from_seed(seed: String) -> Self {
        Self { seed, count: 0 }
    }

    /// Generate next sequential ID
    pub fn new_id(&mut self) -> String {
        self.count += 1;
        format!("{}-{}", self.seed, self.count)
    }

    /// Get the session seed
    pub fn seed(&self) -> &str {
        &self.seed
    }

    /// Advance the counter past any existing `{seed}-{n}` ids, so a session
    /// resumed over a saved document never reissues a taken id.
    pub fn advance_past<'a>(&mut self, existing: impl Iterator<Item = &'a str>) {
        let prefix = format!("{}-", self.seed);
        for id in existing {
            if let Some(n) = id.strip_prefix(&prefix).and_then(|s| s.parse::<u32>().ok()) {
                self.count = self.count.max(n);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_seed_is_stable() {
        let a = session_seed("campaign-draft");
        let b = session_seed("campaign-draft");
        assert_eq!(a, b);

        let c = session_seed("spring-sale");
        assert_ne!(a, c);
    }

    #[test]
    fn test_sequential_ids() {
        let mut ids = IdGenerator::new("campaign-draft");

        let id1 = ids.new_id();
        let id2 = ids.new_id();
        let id3 = ids.new_id();

        assert!(id1.ends_with("-1"));
        assert!(id2.ends_with("-2"));
        assert!(id3.ends_with("-3"));

        let seed = ids.seed();
        assert!(id1.starts_with(seed));
        assert!(id3.starts_with(seed));
    }

    #[test]
    fn test_advance_past_existing_ids() {
        let mut ids = IdGenerator::new("campaign-draft");
        let seed = ids.seed().to_string();
        let taken = [format!("{seed}-7"), "other-3".to_string()];

        ids.advance_past(taken.iter().map(|s| s.as_str()));
        assert_eq!(ids.new_id(), format!("{seed}-8"));
    }
}
