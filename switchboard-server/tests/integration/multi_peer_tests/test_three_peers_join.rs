use switchboard_core::RoomId;

use crate::integration::init_tracing;
use crate::utils::{expect_participant_joined, join_new_client, spawn_test_server};

#[tokio::test]
async fn test_three_peers_join() {
    init_tracing();

    let server = spawn_test_server().await.expect("Failed to start server");

    let (mut alice, seen_by_alice) = join_new_client(server.addr, "alice", "mesh")
        .await
        .expect("Alice failed to join");
    assert!(seen_by_alice.is_empty());

    let (mut bob, seen_by_bob) = join_new_client(server.addr, "bob", "mesh")
        .await
        .expect("Bob failed to join");
    let alice_id = seen_by_bob[0];
    let bob_id = expect_participant_joined(&mut alice).await.unwrap();

    let (mut carol, seen_by_carol) = join_new_client(server.addr, "carol", "mesh")
        .await
        .expect("Carol failed to join");
    assert_eq!(seen_by_carol, vec![alice_id, bob_id], "Listed in join order");

    let carol_from_alice = expect_participant_joined(&mut alice).await.unwrap();
    let carol_from_bob = expect_participant_joined(&mut bob).await.unwrap();
    assert_eq!(carol_from_alice, carol_from_bob);

    let members = server
        .relay
        .members_of(RoomId::from("mesh"))
        .await
        .expect("Relay unavailable");
    let ids: Vec<_> = members.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![alice_id, bob_id, carol_from_alice]);

    for client in [&mut alice, &mut bob, &mut carol] {
        client.expect_silence().await.unwrap();
    }
}
