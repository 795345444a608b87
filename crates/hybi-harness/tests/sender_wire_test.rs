//! Wire-shape tests through the full send path.

use bytes::Bytes;
use hex_literal::hex;
use hybi_core::{SendError, SendOptions, Sender};
use hybi_harness::{CaptureSink, FrameView, SimEnv};

fn sender(sink: &CaptureSink) -> Sender<CaptureSink, SimEnv> {
    Sender::with_env(sink.clone(), SimEnv::new())
}

#[tokio::test]
async fn fresh_connection_text_vector() {
    let sink = CaptureSink::new();
    let mut sender = sender(&sink);

    sender.send("hi", SendOptions::default()).await.unwrap();

    assert_eq!(&sink.frames()[0][..], hex!("81 02 68 69"));
}

#[tokio::test]
async fn empty_control_frames_are_exactly_two_bytes() {
    let sink = CaptureSink::new();
    let mut sender = sender(&sink);

    sender.ping(Bytes::new(), false).await.unwrap();
    sender.pong(Bytes::new(), false).await.unwrap();

    let frames = sink.frames();
    assert_eq!(&frames[0][..], hex!("89 00"));
    assert_eq!(&frames[1][..], hex!("8a 00"));
}

#[tokio::test]
async fn medium_payload_uses_16_bit_length() {
    let sink = CaptureSink::new();
    let mut sender = sender(&sink);

    sender.send(vec![0xAA; 300], SendOptions::default()).await.unwrap();

    let wire = &sink.frames()[0];
    assert_eq!(wire[1], 126);
    assert_eq!(u16::from_be_bytes([wire[2], wire[3]]), 300);

    let view = FrameView::parse(wire).unwrap();
    assert_eq!(view.payload.len(), 300);
}

#[tokio::test]
async fn large_payload_uses_64_bit_length_with_zero_high_word() {
    let sink = CaptureSink::new();
    let mut sender = sender(&sink);

    sender.send(vec![0xBB; 70_000], SendOptions::default()).await.unwrap();

    let wire = &sink.frames()[0];
    assert_eq!(wire[1], 127);
    assert_eq!(&wire[2..6], &[0, 0, 0, 0]);
    assert_eq!(u32::from_be_bytes([wire[6], wire[7], wire[8], wire[9]]), 70_000);
    assert_eq!(wire.len(), 10 + 70_000);
}

#[tokio::test]
async fn seeded_environments_reproduce_masked_wire_bytes() {
    let first_sink = CaptureSink::new();
    let second_sink = CaptureSink::new();
    let mut first = Sender::with_env(first_sink.clone(), SimEnv::with_seed(42));
    let mut second = Sender::with_env(second_sink.clone(), SimEnv::with_seed(42));

    let opts = SendOptions { mask: true, ..Default::default() };
    first.send("deterministic", opts).await.unwrap();
    second.send("deterministic", opts).await.unwrap();

    assert_eq!(first_sink.frames(), second_sink.frames());
}

#[tokio::test]
async fn close_is_masked_and_carries_code_and_reason() {
    let sink = CaptureSink::new();
    let mut sender = sender(&sink);

    sender.close(Some(1002), "protocol error").await.unwrap();

    let wire = &sink.frames()[0];
    assert_eq!(wire[0], 0x88);
    assert_eq!(wire[1] & 0x80, 0x80, "close frames are unconditionally masked");

    let view = FrameView::parse(wire).unwrap();
    assert_eq!(view.close_code(), Some(1002));
    assert_eq!(&view.payload[2..], b"protocol error");
}

#[tokio::test]
async fn close_with_unregistered_code_writes_nothing() {
    let sink = CaptureSink::new();
    let mut sender = sender(&sink);

    let err = sender.close(Some(999), "").await.unwrap_err();
    assert!(matches!(err, SendError::Protocol(_)));
    assert_eq!(sink.frame_count(), 0);
}

#[tokio::test]
async fn omitted_close_code_skips_validation_and_sends_1000() {
    let sink = CaptureSink::new();
    let mut sender = sender(&sink);

    sender.close(None, "").await.unwrap();

    let view = FrameView::parse(&sink.frames()[0]).unwrap();
    assert_eq!(view.close_code(), Some(1000));
    assert_eq!(view.payload.len(), 2);
}

#[tokio::test]
async fn masked_empty_payload_still_gets_a_key() {
    let sink = CaptureSink::new();
    let mut sender = sender(&sink);

    sender.ping(Bytes::new(), true).await.unwrap();

    let view = FrameView::parse(&sink.frames()[0]).unwrap();
    assert!(view.masked);
    assert!(view.mask_key.is_some());
    assert!(view.payload.is_empty());
}
