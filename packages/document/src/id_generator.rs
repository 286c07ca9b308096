use crc32fast::Hasher;

/// Derive a stable id seed from a template name using CRC32
pub fn get_template_seed(name: &str) -> String {
    let mut hasher = Hasher::new();
    hasher.update(name.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Sequential id generator for nodes within a template.
///
/// Ids are `"{seed}_{count}"`. The joiner is an underscore because `-` is
/// reserved by the selection key encoding (see the editor's address
/// resolver); the hydration validator rejects ids containing `-` for the
/// same reason.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    seed: String,
    count: u32,
}

impl IdGenerator {
    pub fn new(template_name: &str) -> Self {
        Self {
            seed: get_template_seed(template_name),
            count: 0,
        }
    }

    pub fn from_seed(seed: String) -> Self {
        Self { seed, count: 0 }
    }

    /// Resume counting past ids already present in a hydrated document
    pub fn resume(seed: String, count: u32) -> Self {
        Self { seed, count }
    }

    /// Generate next sequential id
    pub fn new_id(&mut self) -> String {
        self.count += 1;
        format!("{}_{}", self.seed, self.count)
    }

    /// Get the seed this generator derives ids from
    pub fn seed(&self) -> &str {
        &self.seed
    }
}
