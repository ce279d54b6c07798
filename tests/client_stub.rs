use fading_ttt::protocol::Message;
use fading_ttt::transport::{heartbeat::HeartbeatTransport, in_memory::InMemoryTransport, Transport};
use fading_ttt::{
    Action, AuthorityHost, Board, ClientNode, GameService, MoveOutcome, Player, RemoteGame,
    ScriptedController, StubAuthority,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn local_pair(seed: u64) -> (RemoteGame, tokio::task::JoinHandle<anyhow::Result<()>>) {
    let (client_end, authority_end) = InMemoryTransport::pair();
    let mut host = AuthorityHost::new(
        StubAuthority::new(SmallRng::seed_from_u64(seed)),
        HeartbeatTransport::disabled(authority_end),
    );
    let host_task = tokio::spawn(async move { host.run().await });
    let remote = RemoteGame::new(Box::new(HeartbeatTransport::disabled(client_end)));
    (remote, host_task)
}

#[tokio::test]
async fn first_move_is_answered_by_the_opponent() {
    let (remote, host_task) = local_pair(11);
    let controller = ScriptedController::new([Action::Place { row: 1, col: 1 }, Action::Quit]);
    let mut node = ClientNode::new(Box::new(controller), remote).silent();
    node.run().await.unwrap();

    assert_eq!(node.move_count(), 1);
    assert_eq!(node.rejection_count(), 0);

    let board = node.session().board();
    assert_eq!(board.get(1, 1).unwrap().owner, Player::X);
    assert_eq!(board.get(1, 1).unwrap().move_index, 0);
    assert_eq!(board.move_counts().of(Player::O), 1);

    drop(node);
    host_task.await.unwrap().unwrap();
}

#[tokio::test]
async fn occupied_cell_is_rejected_and_reset_clears_the_grid() {
    let (remote, host_task) = local_pair(23);
    let controller = ScriptedController::new([
        Action::Place { row: 0, col: 0 },
        // Same cell again: the authority refuses, the session is unchanged.
        Action::Place { row: 0, col: 0 },
        Action::Reset,
        Action::Quit,
    ]);
    let mut node = ClientNode::new(Box::new(controller), remote).silent();
    node.run().await.unwrap();

    assert_eq!(node.move_count(), 1);
    assert_eq!(node.rejection_count(), 1);
    assert_eq!(node.session().board(), &Board::empty());
    assert!(!node.session().is_over());

    drop(node);
    host_task.await.unwrap().unwrap();
}

#[tokio::test]
async fn client_refuses_mismatched_handshake() {
    let (client_end, mut authority_end) = InMemoryTransport::pair();
    let peer = tokio::spawn(async move {
        match authority_end.recv().await.unwrap() {
            Message::Handshake { .. } => authority_end
                .send(Message::HandshakeAck { version: 99 })
                .await
                .unwrap(),
            other => panic!("expected Handshake, got {:?}", other),
        }
    });

    let mut remote = RemoteGame::new(Box::new(client_end));
    let err = remote.handshake().await.unwrap_err();
    assert!(err.to_string().contains("version mismatch"));
    peer.await.unwrap();
}

fn first_free_cell(stub: &StubAuthority) -> Option<(u8, u8)> {
    let snapshot = stub.snapshot();
    for (row, cells) in snapshot.board.iter().enumerate() {
        for (col, cell) in cells.iter().enumerate() {
            if cell.is_none() {
                return Some((row as u8, col as u8));
            }
        }
    }
    None
}

#[tokio::test]
async fn stub_declares_a_draw_when_the_grid_fills() {
    let mut stub = StubAuthority::new(SmallRng::seed_from_u64(3));
    let mut finished = false;
    while let Some((row, col)) = first_free_cell(&stub) {
        match stub.apply_move(row, col).await.unwrap() {
            MoveOutcome::Accepted(snapshot) => {
                if snapshot.game_over {
                    assert_eq!(snapshot.winner.as_deref(), Some("Draw"));
                    finished = true;
                    break;
                }
            }
            MoveOutcome::Rejected(reason) => panic!("unexpected rejection: {}", reason),
        }
    }
    assert!(finished);

    match stub.apply_move(0, 0).await.unwrap() {
        MoveOutcome::Rejected(reason) => assert_eq!(reason, "Game is already over."),
        MoveOutcome::Accepted(_) => panic!("move accepted after game over"),
    }
}

#[tokio::test]
async fn stub_rejects_out_of_bounds_coordinates() {
    let mut stub = StubAuthority::new(SmallRng::seed_from_u64(5));
    match stub.apply_move(9, 0).await.unwrap() {
        MoveOutcome::Rejected(reason) => assert!(reason.contains("outside board boundaries")),
        MoveOutcome::Accepted(_) => panic!("out-of-bounds move accepted"),
    }
}

#[tokio::test]
async fn stub_assigns_per_seat_move_ordinals() {
    let mut stub = StubAuthority::new(SmallRng::seed_from_u64(42));
    let mut human_indices = Vec::new();
    for _ in 0..3 {
        let (row, col) = first_free_cell(&stub).unwrap();
        match stub.apply_move(row, col).await.unwrap() {
            MoveOutcome::Accepted(snapshot) => {
                if let Some(cell) = snapshot.board[row as usize][col as usize] {
                    assert_eq!(cell.owner, 'X');
                    human_indices.push(cell.move_index);
                }
            }
            MoveOutcome::Rejected(reason) => panic!("unexpected rejection: {}", reason),
        }
    }
    assert_eq!(human_indices, vec![0, 1, 2]);
}
