use crc32fast::Hasher;

/// Derive a stable seed from a session name using CRC32.
pub fn session_seed(name: &str) -> String {
    let mut hasher = Hasher::new();
    hasher.update(name.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Sequential id generator for elements within a session.
///
/// Ids are `"{seed}-{n}"`. The seed is derived from the session name, so a
/// session replayed under the same name produces the same ids; tests stay
/// reproducible without injecting randomness.
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

    /// Generate the next sequential id.
    pub fn new_id(&mut self) -> String {
        self.count += 1;
        format!("{}-{}", self.seed, self.count)
    }

    /// Advance the counter past `id` if this generator could have issued it.
    /// Ids under a different seed are ignored.
    ///
    /// Reopening a saved document replays ids through here first, so the
    /// generator never re-issues an id the document already contains.
    pub fn advance_past(&mut self, id: &str) {
        let issued = id
            .strip_prefix(self.seed.as_str())
            .and_then(|rest| rest.strip_prefix('-'))
            .and_then(|rest| rest.parse::<u32>().ok());
        if let Some(count) = issued {
            self.count = self.count.max(count);
        }
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_is_stable() {
        let seed1 = session_seed("my-page");
        let seed2 = session_seed("my-page");
        assert_eq!(seed1, seed2);

        let other = session_seed("other-page");
        assert_ne!(seed1, other);
    }

    #[test]
    fn test_sequential_ids() {
        let mut ids = IdGenerator::new("my-page");

        let id1 = ids.new_id();
        let id2 = ids.new_id();
        let id3 = ids.new_id();

        assert!(id1.ends_with("-1"));
        assert!(id2.ends_with("-2"));
        assert!(id3.ends_with("-3"));

        let seed = ids.seed();
        assert!(id1.starts_with(seed));
        assert!(id2.starts_with(seed));
        assert!(id3.starts_with(seed));
    }

    #[test]
    fn test_advance_past_resumes_after_issued_ids() {
        let mut original = IdGenerator::new("my-page");
        let issued: Vec<String> = (0..3).map(|_| original.new_id()).collect();

        let mut resumed = IdGenerator::new("my-page");
        for id in &issued {
            resumed.advance_past(id);
        }

        let fresh = resumed.new_id();
        assert!(!issued.contains(&fresh));
        assert!(fresh.ends_with("-4"));
    }

    #[test]
    fn test_advance_past_ignores_foreign_ids() {
        let mut ids = IdGenerator::new("my-page");
        ids.advance_past("other-seed-99");
        ids.advance_past("not-an-id");
        ids.advance_past(&format!("{}x-7", ids.seed()));

        assert!(ids.new_id().ends_with("-1"));
    }

    #[test]
    fn test_advance_past_keeps_the_highest_count() {
        let mut ids = IdGenerator::new("my-page");
        let seed = ids.seed().to_string();

        ids.advance_past(&format!("{seed}-7"));
        ids.advance_past(&format!("{seed}-3"));

        assert!(ids.new_id().ends_with("-8"));
    }
}
