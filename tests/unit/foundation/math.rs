use super::*;

#[test]
fn rng_is_deterministic() {
    let mut a = Rng64::new(123);
    let mut b = Rng64::new(123);
    for _ in 0..10 {
        assert_eq!(a.next_u64(), b.next_u64());
    }
}

#[test]
fn rng_next_below_stays_in_bound() {
    let mut rng = Rng64::new(9);
    let mut seen = [false; 7];
    for _ in 0..1000 {
        let v = rng.next_below(7);
        assert!(v < 7);
        seen[v as usize] = true;
    }
    assert!(seen.iter().all(|&hit| hit));
}

#[test]
fn clamp_lenient_handles_nan_and_inverted_bounds() {
    assert_eq!(clamp_lenient(f64::NAN, 0.4, 1.0), 0.4);
    assert_eq!(clamp_lenient(2.0, 0.4, 1.0), 1.0);
    assert_eq!(clamp_lenient(-3.0, 0.4, 1.0), 0.4);
    assert_eq!(clamp_lenient(0.5, 0.9, 0.6), 0.6);
}
