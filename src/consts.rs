
// when set to a u64, seeds the process-wide default generator instead of OS entropy
pub const DEFAULT_SEED_ENV: &str = "RANDOMS_SEED";

// names used in `Error::Empty` for the container that was empty
pub const ARRAY: &str = "array";
pub const COLLECTION: &str = "collection";
pub const CHOICES: &str = "choices";
