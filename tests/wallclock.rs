use std::thread::sleep;
use std::time::Duration;

use timeit::{measure, Stopwatch};

// Bounds are generous on purpose: CI machines stall.

#[test]
fn test_measure_sleeping_callback() {
    let (took, value) = measure(|| {
        sleep(Duration::from_secs(1));
        10
    });
    assert_eq!(value, 10);
    assert!(took >= 1000.0, "took {} ms", took);
    assert!(took <= 2000.0, "took {} ms", took);
}

#[test]
fn test_marks_against_real_clock() {
    let mut watch = Stopwatch::new();
    sleep(Duration::from_millis(100));
    let first = watch.elapsed().unwrap();
    assert!(first >= 90.0, "first mark {} ms", first);

    sleep(Duration::from_millis(100));
    let second = watch.elapsed().unwrap();
    assert!(second >= 90.0, "second mark {} ms", second);

    let total = watch.stop().unwrap();
    assert!(total >= 190.0, "total {} ms", total);
    assert_eq!(watch.instants().len(), 2);
}

#[test]
fn test_restart_after_stop() {
    let mut watch = Stopwatch::unstarted();
    assert!(!watch.started());
    watch.start();
    assert!(watch.started());
    watch.stop().unwrap();
    assert!(!watch.started());

    watch.start();
    let again = watch.elapsed().unwrap();
    assert!(again >= 0.0);
    assert_eq!(watch.instants().len(), 1);
}
