use super::read_input;
use clap::Args;
use descifrador::error::{CipherError, CipherResult};
use descifrador::key::Key;
use descifrador::optimizer::mutation;
use descifrador::presets::{all_known_keys, KnownKey};
use descifrador::text::normalize;
use std::str::FromStr;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct EncryptArgs {
    /// Plaintext file. Reads stdin when absent.
    #[arg(short, long)]
    pub input: Option<String>,

    /// Encryption key: the image of each letter, in alphabet order (27 letters).
    #[arg(short, long, conflicts_with = "preset")]
    pub key: Option<String>,

    /// A named key (identity, atbash, murcielago).
    #[arg(short, long)]
    pub preset: Option<String>,

    /// Seed for the random key used when neither --key nor --preset is given.
    #[arg(short = 'S', long)]
    pub seed: Option<u64>,
}

fn resolve_key(args: &EncryptArgs) -> CipherResult<Key> {
    if let Some(images) = &args.key {
        return Key::from_images(&normalize(images));
    }
    if let Some(name) = &args.preset {
        let preset = KnownKey::from_str(name).map_err(|_| {
            let names: Vec<String> = all_known_keys().iter().map(|k| k.to_string()).collect();
            CipherError::Config(format!(
                "Unknown preset '{}'. Known: {}",
                name,
                names.join(", ")
            ))
        })?;
        return preset.key();
    }

    let mut rng = match args.seed {
        Some(s) => fastrand::Rng::with_seed(s),
        None => fastrand::Rng::new(),
    };
    Ok(mutation::random_key(&mut rng))
}

pub fn run(args: &EncryptArgs) -> CipherResult<()> {
    let key = resolve_key(args)?;
    let raw = read_input(args.input.as_deref())?;

    info!("🔐 Encryption key: {}", key);
    info!("🔓 Decryption key: {}", key.inverse());

    print!("{}", key.apply(&normalize(&raw)));
    Ok(())
}
