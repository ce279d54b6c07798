//! Headless harness: a random-play client against the built-in authority,
//! reporting aggregate statistics as JSON.

use fading_ttt::prelude::*;
use fading_ttt::transport::heartbeat::HeartbeatTransport;
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed> <games>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let games: u64 = args[2].parse()?;

    init_logging();

    let mut total_moves = 0u64;
    let mut total_rejections = 0u64;
    let mut draws = 0u64;

    for game in 0..games {
        let (client_end, authority_end) = InMemoryTransport::pair();
        let mut host = AuthorityHost::new(
            StubAuthority::new(SmallRng::seed_from_u64(seed.wrapping_add(game))),
            HeartbeatTransport::disabled(authority_end),
        );
        let host_task = tokio::spawn(async move { host.run().await });

        let controller =
            RandomController::new(SmallRng::seed_from_u64(seed.wrapping_add(game).wrapping_mul(31)));
        let remote = RemoteGame::new(Box::new(HeartbeatTransport::disabled(client_end)));
        let mut node = ClientNode::new(Box::new(controller), remote).silent();
        node.run().await?;

        total_moves += node.move_count();
        total_rejections += node.rejection_count();
        if node.session().outcome() == Some(Outcome::Draw) {
            draws += 1;
        }

        drop(node);
        host_task.await??;
    }

    let result = json!({
        "games": games,
        "moves": total_moves,
        "rejections": total_rejections,
        "draws": draws,
    });
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
