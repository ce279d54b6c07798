#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use fading_ttt::{
    init_logging,
    transport::{heartbeat::HeartbeatTransport, in_memory::InMemoryTransport, tcp::TcpTransport},
    AuthorityHost, CliController, ClientNode, RemoteGame, StubAuthority,
};

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use tokio::net::TcpListener;
#[cfg(feature = "std")]
use tokio::time::Duration;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser)]
#[cfg(feature = "std")]
enum Commands {
    /// Play against the built-in authority on the local machine.
    Local {
        #[arg(long, help = "Fix RNG seed for a reproducible opponent (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Host the built-in authority and wait for a client to connect.
    TcpServer {
        #[arg(long, default_value = "0.0.0.0:8080")]
        bind: String,
        #[arg(long, help = "Fix RNG seed for a reproducible opponent (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Connect to a game authority hosted elsewhere.
    TcpClient {
        #[arg(long, default_value = "127.0.0.1:8080")]
        connect: String,
    },
}

#[cfg(feature = "std")]
fn seeded_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

#[cfg(feature = "std")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Local { seed } => {
            println!("Starting a local game against the built-in opponent...");
            if let Some(s) = seed {
                println!("Using fixed seed: {} (opponent is reproducible)", s);
            }
            let (client_end, authority_end) = InMemoryTransport::pair();
            let mut host = AuthorityHost::new(
                StubAuthority::new(seeded_rng(seed)),
                HeartbeatTransport::disabled(authority_end),
            );
            let host_task = tokio::spawn(async move { host.run().await });

            let remote = RemoteGame::new(Box::new(HeartbeatTransport::disabled(client_end)));
            let mut node = ClientNode::new(Box::new(CliController::new()), remote);
            if let Err(e) = node.run().await {
                eprintln!("Game ended with an error: {}", e);
            }
            drop(node);
            host_task.await??;
        }
        Commands::TcpServer { bind, seed } => {
            println!("Hosting the game authority at {}...", bind);
            if let Some(s) = seed {
                println!("Using fixed seed: {} (opponent is reproducible)", s);
            }
            let listener = TcpListener::bind(&bind).await?;
            println!("Waiting for a player to connect...");
            let (stream, addr) = listener.accept().await?;
            println!("Player connected from {}", addr);

            let transport = HeartbeatTransport::new(
                TcpTransport::new(stream),
                Duration::from_secs(10),
                Duration::from_secs(45),
            );
            let mut host = AuthorityHost::new(StubAuthority::new(seeded_rng(seed)), transport);
            if let Err(e) = host.run().await {
                eprintln!("Session ended with an error: {}", e);
            }
        }
        Commands::TcpClient { connect } => {
            println!("Connecting to the game authority at {}...", connect);
            let tcp = TcpTransport::connect(&connect).await?;
            let transport = HeartbeatTransport::new(
                tcp,
                Duration::from_secs(10),
                Duration::from_secs(45),
            );
            println!("Connected successfully!");

            let remote = RemoteGame::new(Box::new(transport));
            let mut node = ClientNode::new(Box::new(CliController::new()), remote);
            if let Err(e) = node.run().await {
                eprintln!("Game ended with an error: {}", e);
            }
        }
    }
    Ok(())
}
