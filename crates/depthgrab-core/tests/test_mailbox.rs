mod common;

use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use depthgrab_core::mailbox::FrameMailbox;

use common::uniform_frame;

#[test]
fn take_on_empty_mailbox_is_none() {
    let mailbox = FrameMailbox::new();
    assert!(mailbox.take().is_none());
}

#[test]
fn latest_frame_wins() {
    let mailbox = FrameMailbox::new();

    assert!(mailbox.publish(uniform_frame(2, 2, 100)).is_none());
    let displaced = mailbox.publish(uniform_frame(2, 2, 200));
    assert_eq!(displaced.unwrap().samples[0], 100);

    let taken = mailbox.take().unwrap();
    assert_eq!(taken.samples[0], 200);
    assert!(mailbox.take().is_none());
}

#[test]
fn take_timeout_receives_a_published_frame() {
    let mailbox = Arc::new(FrameMailbox::new());

    let producer = {
        let mailbox = Arc::clone(&mailbox);
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(20));
            mailbox.publish(uniform_frame(2, 2, 42));
        })
    };

    let frame = mailbox.take_timeout(Duration::from_secs(5));
    producer.join().unwrap();
    assert_eq!(frame.unwrap().samples[0], 42);
}

#[test]
fn take_timeout_expires_without_a_frame() {
    let mailbox = FrameMailbox::new();
    let start = Instant::now();
    assert!(mailbox.take_timeout(Duration::from_millis(30)).is_none());
    assert!(start.elapsed() >= Duration::from_millis(30));
}

#[test]
fn close_wakes_a_waiting_consumer() {
    let mailbox = Arc::new(FrameMailbox::new());

    let closer = {
        let mailbox = Arc::clone(&mailbox);
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(20));
            mailbox.close();
        })
    };

    let start = Instant::now();
    let frame = mailbox.take_timeout(Duration::from_secs(30));
    closer.join().unwrap();

    assert!(frame.is_none());
    assert!(mailbox.is_closed());
    // Returned on close, not on the 30s deadline.
    assert!(start.elapsed() < Duration::from_secs(5));
}

#[test]
fn pending_frame_survives_close() {
    let mailbox = FrameMailbox::new();
    mailbox.publish(uniform_frame(2, 2, 7));
    mailbox.close();

    let frame = mailbox.take_timeout(Duration::from_millis(10));
    assert_eq!(frame.unwrap().samples[0], 7);
    assert!(mailbox.take_timeout(Duration::from_millis(10)).is_none());
}
