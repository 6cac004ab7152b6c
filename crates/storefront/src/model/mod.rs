//! Plain data types shared by the actors, the clients and the reporting views.
//!
//! Everything here is `Serialize + Deserialize` with camelCase field names, which is the
//! shape of the persisted JSON blobs.

mod order;
mod product;
mod settings;

pub use order::*;
pub use product::*;
pub use settings::*;

use rand::Rng;

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// `len` random lowercase base36 characters.
pub(crate) fn random_base36(len: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
        .collect()
}
