use switchboard_core::{RoomId, ServerMessage};

use crate::integration::init_tracing;
use crate::utils::{expect_participant_joined, join_new_client, offer, spawn_test_server};

#[tokio::test]
async fn test_rejoin_moves_rooms() {
    init_tracing();

    let server = spawn_test_server().await.expect("Failed to start server");

    let (mut alice, _) = join_new_client(server.addr, "alice", "red")
        .await
        .expect("Alice failed to join");
    let (mut bob, _) = join_new_client(server.addr, "bob", "red")
        .await
        .expect("Bob failed to join");
    let bob_id = expect_participant_joined(&mut alice).await.unwrap();
    let (mut carol, _) = join_new_client(server.addr, "carol", "blue")
        .await
        .expect("Carol failed to join");

    let seen = bob.join("blue").await.expect("Bob failed to switch rooms");
    assert_eq!(seen.len(), 1);
    assert_eq!(expect_participant_joined(&mut carol).await.unwrap(), bob_id);

    // The old room is not told about the move.
    alice.expect_silence().await.unwrap();

    bob.send(&offer("v=0 blue only")).await.unwrap();
    assert_eq!(
        carol.recv().await.unwrap(),
        ServerMessage::Offer {
            from: bob_id,
            sdp: "v=0 blue only".into(),
        }
    );
    alice.expect_silence().await.unwrap();

    let red = server.relay.members_of(RoomId::from("red")).await.unwrap();
    let blue = server.relay.members_of(RoomId::from("blue")).await.unwrap();
    assert_eq!(red.len(), 1);
    assert_eq!(blue.len(), 2);
}
