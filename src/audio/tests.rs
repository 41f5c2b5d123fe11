use std::sync::mpsc;
use std::time::Duration;

use super::probe::read_duration;
use super::sink::SharedBytes;
use super::*;

#[test]
fn probe_poll_is_empty_until_the_worker_reports() {
    let (tx, rx) = mpsc::channel();
    let probe = DurationProbe::from_channel(rx);

    assert_eq!(probe.poll(), None);

    tx.send(Duration::from_secs(42)).unwrap();
    assert_eq!(probe.poll(), Some(Duration::from_secs(42)));
    assert_eq!(probe.poll(), None);
}

#[test]
fn dropping_the_probe_makes_delivery_a_noop() {
    let (tx, rx) = mpsc::channel();
    let probe = DurationProbe::from_channel(rx);
    drop(probe);

    assert!(tx.send(Duration::from_secs(1)).is_err());
}

#[test]
fn read_duration_rejects_non_audio_bytes() {
    assert!(read_duration(b"definitely not audio").is_err());
}

#[test]
fn shared_bytes_expose_the_underlying_buffer() {
    let bytes = SharedBytes(std::sync::Arc::new(vec![1u8, 2, 3]));
    assert_eq!(bytes.clone().as_ref(), &[1, 2, 3]);
}
