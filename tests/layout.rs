use rand::{rngs::StdRng, Rng, SeedableRng};
use ringplot::prelude::*;

mod common;
use common::{approx, chromosomes, init};

const EPS: f64 = 1e-9;

#[test]
fn extents_and_gaps_fill_the_base() {
    init();
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for _ in 0..200 {
        let n = rng.gen_range(1..40);
        let lens: Vec<i64> = (0..n).map(|_| rng.gen_range(1..1_000_000)).collect();
        let features = chromosomes(&lens);

        let closed = rng.gen_bool(0.5);
        let theta = Angle(rng.gen_range(-10.0..10.0));
        let mut phi = if closed {
            Angle::COMPLETE
        }
        else {
            Angle(rng.gen_range(0.5..std::f64::consts::TAU))
        };
        if rng.gen_bool(0.5) {
            phi = -phi;
        }
        let base = Arc::new(theta, phi);
        let gaps = if closed { n } else { n - 1 };
        let gap = Angle(rng.gen_range(0.0..(phi.abs().radians() / (2 * n) as f64)));

        let layout = GappedArcs::new(&base, &features, gap).unwrap();
        assert_eq!(layout.gap_count(), gaps);

        let total: f64 = layout.iter().map(|(_, arc)| arc.phi.abs().radians()).sum();
        assert!(
            approx(total + gaps as f64 * gap.radians(), phi.abs().radians(), EPS),
            "n: {}, closed: {}, total: {}, gap: {}",
            n,
            closed,
            total,
            gap
        );
        for (_, arc) in layout.iter() {
            assert_eq!(arc.phi.radians().signum(), phi.radians().signum());
            if closed {
                assert!(arc.theta >= Angle::ZERO && arc.theta < Angle::COMPLETE);
            }
        }
    }
}

#[test]
fn ascending_lengths_give_ascending_extents() {
    init();
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..50 {
        let n = rng.gen_range(2..25);
        let mut lens: Vec<i64> = (0..n).map(|_| rng.gen_range(0..10_000)).collect();
        lens.sort_unstable();
        if lens.iter().all(|&l| l == 0) {
            continue;
        }
        let features = chromosomes(&lens);
        let layout = GappedArcs::new(&Arc::complete(Angle::ZERO), &features, Angle::from_degrees(0.1)).unwrap();

        let extents: Vec<f64> = layout.iter().map(|(_, arc)| arc.phi.radians()).collect();
        for pair in extents.windows(2) {
            assert!(pair[0] <= pair[1], "{:?}", extents);
        }
    }
}

#[test]
fn starts_follow_prefix_sums() {
    init();
    let lens = [300, 100, 200, 400];
    let features = chromosomes(&lens);
    let g = Angle::from_degrees(2.0);
    let base = Arc::new(Angle::QUARTER, -Angle::HALF);
    let layout = GappedArcs::new(&base, &features, g).unwrap();

    let scale = (Angle::HALF - g * 3.0).radians() / 1000.0;
    let mut prefix = 0;
    for (i, (f, arc)) in layout.iter().enumerate() {
        let expect = Angle::QUARTER - Angle(prefix as f64 * scale) - g * i as f64;
        assert!(arc.theta.approx_eq(expect, EPS), "{}: {} != {}", f.name(), arc.theta, expect);
        prefix += lens[i];
    }
    let (_, last) = layout.iter().last().unwrap();
    assert!(last.end().approx_eq(base.end(), EPS));
}

#[test]
fn lookups_are_idempotent_across_threads() {
    init();
    let features = chromosomes(&[10, 20, 30, 40]);
    let layout: SharedArcOfer =
        std::sync::Arc::new(GappedArcs::new(&Arc::complete(Angle::ZERO), &features, Angle(0.05)).unwrap());

    let expected: Vec<Arc> = features
        .iter()
        .map(|f| layout.arc_of(None, Some(f.as_ref())).unwrap())
        .collect();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let layout = layout.clone();
            let features = features.clone();
            std::thread::spawn(move || {
                features
                    .iter()
                    .map(|f| layout.arc_of(None, Some(f.as_ref())).unwrap())
                    .collect::<Vec<Arc>>()
            })
        })
        .collect();

    for handle in handles {
        let got = handle.join().unwrap();
        for (a, b) in got.iter().zip(expected.iter()) {
            assert_eq!(a.theta.radians().to_bits(), b.theta.radians().to_bits());
            assert_eq!(a.phi.radians().to_bits(), b.phi.radians().to_bits());
        }
    }
}

#[test]
fn overflowing_gaps_are_rejected() {
    init();
    let features = chromosomes(&[1; 10]);
    match GappedArcs::new(&Arc::complete(Angle::ZERO), &features, Angle::from_degrees(40.0)) {
        Err(RingError::Overflow { required, available }) => {
            assert!(approx(required, 400f64.to_radians(), EPS));
            assert!(approx(available, std::f64::consts::TAU, EPS));
        }
        other => panic!("expected overflow, got {:?}", other.map(|l| l.len())),
    }
}
