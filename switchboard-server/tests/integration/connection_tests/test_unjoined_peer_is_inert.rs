use switchboard_core::SignalMessage;

use crate::integration::init_tracing;
use crate::utils::{TestClient, ice, join_new_client, offer, spawn_test_server};

#[tokio::test]
async fn test_unjoined_peer_is_inert() {
    init_tracing();

    let server = spawn_test_server().await.expect("Failed to start server");

    let (mut alice, _) = join_new_client(server.addr, "alice", "lobby")
        .await
        .expect("Alice failed to join");
    let mut lurker = TestClient::connect(server.addr, "lurker")
        .await
        .expect("Failed to connect");

    lurker.send(&SignalMessage::Leave).await.unwrap();
    lurker.send(&offer("v=0")).await.unwrap();
    lurker.send(&ice("candidate:1", None, None)).await.unwrap();

    lurker
        .expect_silence()
        .await
        .expect("Unjoined peer gets no replies");
    alice
        .expect_silence()
        .await
        .expect("Unjoined peer reaches nobody");

    lurker.close().await.unwrap();
    alice
        .expect_silence()
        .await
        .expect("Unjoined disconnect is not announced");
}
