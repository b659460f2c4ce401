//! Id generation for applications and sub-deployments
//!
//! Application ids are short human-readable adjective-animal pairs so they can
//! be typed on the command line; sub-deployment guids are opaque UUIDs because
//! several sub-deployments of the same application may share a name. Both go
//! through the [`IdGenerator`] trait so tests can supply deterministic ids.

use rand::seq::SliceRandom;
use uuid::Uuid;

const ADJECTIVES: &[&str] = &[
    "amber", "bold", "brave", "calm", "clever", "crimson", "daring", "eager", "fuzzy", "gentle",
    "golden", "happy", "humble", "jolly", "keen", "lively", "lucky", "mellow", "noble", "polite",
    "quiet", "rapid", "silent", "swift", "tidy", "witty",
];

const ANIMALS: &[&str] = &[
    "baboon", "badger", "beaver", "bison", "condor", "coyote", "donkey", "falcon", "ferret",
    "gibbon", "heron", "ibex", "jackal", "lemur", "lynx", "marmot", "mole", "otter", "panda",
    "pelican", "puffin", "raven", "stoat", "tapir", "walrus", "wombat",
];

/// Generates identifiers for new applications and sub-deployments
pub trait IdGenerator {
    /// Human-readable id for a new application
    fn application_id(&self) -> String;

    /// Opaque id for a single sub-deployment
    fn deployment_guid(&self) -> String;
}

/// Default generator backed by the thread RNG
pub struct RandomIdGenerator;

impl IdGenerator for RandomIdGenerator {
    fn application_id(&self) -> String {
        let mut rng = rand::thread_rng();
        let adjective = ADJECTIVES.choose(&mut rng).unwrap_or(&"brave");
        let animal = ANIMALS.choose(&mut rng).unwrap_or(&"otter");
        format!("{adjective}-{animal}")
    }

    fn deployment_guid(&self) -> String {
        Uuid::new_v4().to_string()
    }
}
