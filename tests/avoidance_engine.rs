use fuzzy_track_pilot::control::avoidance_engine;
use fuzzy_track_pilot::fuzzy::{crisp, Defuzzifier, InferenceEngine};

fn engine() -> InferenceEngine {
    avoidance_engine(Defuzzifier::Centroid).unwrap()
}

fn avoidance(engine: &InferenceEngine, distance: f32) -> f32 {
    let outputs = engine.evaluate(&crisp(&[("distance", distance)]).unwrap()).unwrap();
    *outputs.get(&"avoidance").unwrap()
}

#[test]
fn close_obstacle_gives_centroid_of_high() {
    // Центр тяжести треугольника (60, 100, 100) = 86.67
    let out = avoidance(&engine(), 0.0);
    assert!((out - 86.67).abs() < 1.0, "avoidance(0) = {}", out);
}

#[test]
fn far_obstacle_gives_centroid_of_low() {
    // Центр тяжести треугольника (0, 0, 40) = 13.33
    let out = avoidance(&engine(), 150.0);
    assert!((out - 13.33).abs() < 1.0, "avoidance(150) = {}", out);
}

#[test]
fn mean_of_maximum_reaches_universe_extremes() {
    let engine = avoidance_engine(Defuzzifier::MeanOfMaximum).unwrap();
    assert!((avoidance(&engine, 0.0) - 100.0).abs() <= 2.0);
    assert!(avoidance(&engine, 150.0).abs() <= 2.0);
}

#[test]
fn overlap_gives_intermediate_value() {
    let engine = engine();
    let low = avoidance(&engine, 150.0);
    let high = avoidance(&engine, 0.0);
    let mid = avoidance(&engine, 50.0);
    assert!(mid > low && mid < high, "{} < {} < {}", low, mid, high);
}

#[test]
fn avoidance_is_non_increasing_in_distance() {
    let engine = engine();
    let mut prev = avoidance(&engine, 0.0);
    let mut distance = 0.5;
    while distance <= 150.0 {
        let out = avoidance(&engine, distance);
        assert!(out <= prev + 1e-3, "avoidance rose at d={}: {} -> {}", distance, prev, out);
        prev = out;
        distance += 0.5;
    }
}

#[test]
fn evaluation_is_idempotent() {
    let engine = engine();
    for distance in [0.0, 12.5, 50.0, 59.9, 100.0, 150.0] {
        let first = avoidance(&engine, distance);
        let second = avoidance(&engine, distance);
        assert_eq!(first.to_bits(), second.to_bits());
    }
}

#[test]
fn parallel_evaluations_do_not_interfere() {
    let engine = engine();
    let distances: Vec<f32> = (0..=300).map(|i| i as f32 * 0.5).collect();
    let expected: Vec<f32> = distances.iter().map(|&d| avoidance(&engine, d)).collect();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|worker| {
                let engine = &engine;
                let distances = &distances;
                scope.spawn(move || {
                    // Каждый поток обходит входы в своем порядке
                    let mut results = Vec::new();
                    for round in 0..4 {
                        for (i, &d) in distances.iter().enumerate() {
                            if (i + worker + round) % 3 == 0 {
                                results.push((i, avoidance(engine, d)));
                            }
                        }
                    }
                    results
                })
            })
            .collect();

        for handle in handles {
            for (i, value) in handle.join().unwrap() {
                assert_eq!(value.to_bits(), expected[i].to_bits(), "input #{}", i);
            }
        }
    });
}

#[test]
fn configuration_matches_track_setup() {
    let engine = engine();
    let distance = engine.variable("distance").unwrap();
    assert_eq!(distance.universe(), (0.0, 150.0));
    assert_eq!(distance.membership("close", 0.0), Ok(1.0));
    assert_eq!(distance.membership("far", 150.0), Ok(1.0));

    let avoidance = engine.variable("avoidance").unwrap();
    assert_eq!(avoidance.universe(), (0.0, 100.0));
    assert_eq!(avoidance.sets().len(), 2);
}
