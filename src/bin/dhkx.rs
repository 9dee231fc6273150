use clap::{Parser, Subcommand};
use dhkx::config::{Encoding, ExchangeConfig};
use dhkx::{lookup, DhGroup, DhKey, GroupId};
use num_bigint::BigUint;
use tracing::{error, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use zeroize::Zeroizing;

#[derive(Parser)]
#[command(name = "dhkx")]
#[command(about = "Diffie-Hellman key exchange over RFC 2409 / RFC 3526 groups", long_about = None)]
#[command(version)]
struct Cli {
    /// Group id (1, 2, 14, 15; 0 for the default)
    #[arg(short, long, global = true, env = "DHKX_GROUP")]
    group: Option<i32>,

    /// Output format for keys and secrets
    #[arg(short, long, global = true, value_parser = parse_encoding)]
    encoding: Option<Encoding>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the registered groups
    Groups,

    /// Generate a key pair
    Keygen,

    /// Derive the shared secret from our private exponent and a peer's public value
    Agree {
        /// Our private exponent, hex
        #[arg(long)]
        private: String,

        /// The peer's public value, hex
        #[arg(long)]
        peer: String,
    },

    /// Run a full exchange between two local peers
    Demo,
}

fn parse_encoding(s: &str) -> Result<Encoding, String> {
    match s.to_ascii_lowercase().as_str() {
        "hex" => Ok(Encoding::Hex),
        "decimal" | "dec" => Ok(Encoding::Decimal),
        other => Err(format!("unknown encoding `{other}` (expected hex or decimal)")),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut config = ExchangeConfig::from_env().unwrap_or_else(|e| {
        error!("Failed to load configuration: {e}");
        info!("Using default configuration");
        ExchangeConfig::default()
    });
    if let Some(group) = cli.group {
        config.group = group;
    }
    if let Some(encoding) = cli.encoding {
        config.encoding = encoding;
    }

    if let Err(e) = config.validate() {
        return Err(format!("Invalid configuration: {e}").into());
    }

    match cli.command {
        Commands::Groups => list_groups()?,
        Commands::Keygen => {
            let group = lookup(config.group)?;
            keygen(&group, config.encoding)?;
        }
        Commands::Agree { private, peer } => {
            let group = lookup(config.group)?;
            agree(&group, config.encoding, &private, &peer)?;
        }
        Commands::Demo => {
            let group = lookup(config.group)?;
            demo(&group, config.encoding)?;
        }
    }

    Ok(())
}

fn list_groups() -> dhkx::Result<()> {
    println!("{:>4}  {:<18} {:>5}", "id", "name", "bits");
    for id in GroupId::KNOWN {
        let group = lookup(id)?;
        let name = id.name().unwrap_or("?");
        let marker = if id == GroupId::DEFAULT_GROUP {
            " (default)"
        } else {
            ""
        };
        println!("{:>4}  {:<18} {:>5}{marker}", id.0, name, group.bit_len());
    }
    Ok(())
}

fn keygen(group: &DhGroup, encoding: Encoding) -> dhkx::Result<()> {
    let key = group.generate_private_key_default()?;
    let private = Zeroizing::new(
        key.private_exponent()
            .map(|x| dhkx::exchange::wire::to_fixed_be(&x, group.public_len()))
            .unwrap_or_default(),
    );

    println!("private: {}", encoding.render(&private));
    println!("public:  {}", encoding.render(&key.marshal_public()));
    Ok(())
}

fn agree(
    group: &DhGroup,
    encoding: Encoding,
    private_hex: &str,
    peer_hex: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let x = BigUint::from_bytes_be(&hex::decode(private_hex.trim())?);
    let own = group.key_from_private(x)?;
    let peer = DhKey::from_public_bytes(&hex::decode(peer_hex.trim())?);

    let secret = group.compute_key(&peer, &own)?;
    println!("secret:  {}", encoding.render(&secret.marshal_public()));
    Ok(())
}

fn demo(group: &DhGroup, encoding: Encoding) -> Result<(), Box<dyn std::error::Error>> {
    info!(bits = group.bit_len(), "running local exchange");

    let alice = group.generate_private_key_default()?;
    let bob = group.generate_private_key_default()?;

    let alice_wire = alice.marshal_public();
    let bob_wire = bob.marshal_public();
    println!("alice -> bob: {}", encoding.render(&alice_wire));
    println!("bob -> alice: {}", encoding.render(&bob_wire));

    let alice_secret = group.compute_key(&DhKey::from_public_bytes(&bob_wire), &alice)?;
    let bob_secret = group.compute_key(&DhKey::from_public_bytes(&alice_wire), &bob)?;

    println!("alice secret: {}", encoding.render(&alice_secret.marshal_public()));
    println!("bob secret:   {}", encoding.render(&bob_secret.marshal_public()));

    check_agreement(&alice_secret, &bob_secret)?;
    info!("shared secrets match");
    Ok(())
}

fn check_agreement(a: &DhKey, b: &DhKey) -> Result<(), Box<dyn std::error::Error>> {
    if a != b {
        error!("shared secrets differ");
        return Err("shared secrets differ".into());
    }
    Ok(())
}
