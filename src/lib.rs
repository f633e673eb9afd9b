pub mod alphabet;
pub mod api;
pub mod config;
pub mod consts;
pub mod error;
pub mod key;
pub mod optimizer;
pub mod presets;
pub mod scorer;
pub mod seeder;
pub mod text;

pub use self::api::{decipher, decipher_spanish};
pub use self::error::{CipherError, CipherResult};
pub use self::key::Key;
