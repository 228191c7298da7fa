//! Graceful shutdown tests.

use std::time::Duration;

use futures_util::stream;

mod common;

#[tokio::test]
async fn shutdown_waits_for_in_flight_response() {
    let (addr, shutdown, handle) = common::spawn_server().await;

    // Feed the request body in slow chunks so the request is still being
    // drained when the shutdown trigger fires.
    let body_stream = stream::unfold(0u32, |n| async move {
        if n >= 3 {
            None
        } else {
            tokio::time::sleep(Duration::from_millis(100)).await;
            Some((Ok::<Vec<u8>, std::io::Error>(b"chunk".to_vec()), n + 1))
        }
    });

    let client = reqwest::Client::new();
    let request = client
        .post(format!("http://{addr}/slow"))
        .body(reqwest::Body::wrap_stream(body_stream));
    let send_task = tokio::spawn(async move { request.send().await });

    tokio::time::sleep(Duration::from_millis(120)).await;
    shutdown.trigger();

    // The mid-flight request still completes.
    let response = send_task.await.unwrap().unwrap();
    assert_eq!(response.status(), 200);

    // And the serve future then resolves cleanly.
    let result = tokio::time::timeout(Duration::from_secs(5), handle)
        .await
        .expect("server should drain promptly")
        .unwrap();
    assert!(result.is_ok());
}

#[tokio::test]
async fn shutdown_stops_accepting_new_connections() {
    let (addr, shutdown, handle) = common::spawn_server().await;

    shutdown.trigger();
    let result = tokio::time::timeout(Duration::from_secs(5), handle)
        .await
        .expect("idle server should stop promptly")
        .unwrap();
    assert!(result.is_ok());

    let refused = reqwest::Client::new()
        .get(format!("http://{addr}/"))
        .send()
        .await;
    assert!(refused.is_err(), "listener should be closed after shutdown");
}
