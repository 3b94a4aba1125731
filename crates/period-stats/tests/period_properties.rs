//! End-to-end behaviour of period extraction as a host drives it

use approx::assert_relative_eq;
use period_core::{EdgeEvent, EdgeMeasurer, EdgePolarity, Measurement, SampleTime};
use period_stats::{ExtractorParameters, OrderingPolicy, PeriodExtractor, PeriodSummary};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn at(seconds: f64, level: bool) -> EdgeEvent<SampleTime> {
    EdgeEvent::new(SampleTime::from_seconds(seconds), level)
}

/// Rising edges at `times` with a falling edge halfway between each pair
fn square_wave(times: &[f64]) -> Vec<EdgeEvent<SampleTime>> {
    let mut events = Vec::with_capacity(times.len() * 2);
    for (i, &t) in times.iter().enumerate() {
        events.push(at(t, true));
        if let Some(&next) = times.get(i + 1) {
            events.push(at((t + next) / 2.0, false));
        }
    }
    events
}

fn closed_form(deltas: &[f64]) -> (f64, f64) {
    let n = deltas.len() as f64;
    let mean = deltas.iter().sum::<f64>() / n;
    let ss: f64 = deltas.iter().map(|d| (d - mean).powi(2)).sum();
    (mean, if deltas.len() > 1 { (ss / (n - 1.0)).sqrt() } else { 0.0 })
}

/// Drive any measurer through a full session
fn run_session<M: EdgeMeasurer<SampleTime>>(
    mut measurer: M,
    batches: Vec<Vec<EdgeEvent<SampleTime>>>,
) -> M::Summary {
    measurer.ingest_batches(batches).unwrap();
    measurer.finalize()
}

#[test]
fn test_no_edges_gives_empty_result() {
    let extractor: PeriodExtractor = PeriodExtractor::new(EdgePolarity::Rising);
    assert_eq!(extractor.finalize(), PeriodSummary::empty());

    let mut extractor: PeriodExtractor = PeriodExtractor::new(EdgePolarity::Rising);
    extractor.ingest(Vec::<EdgeEvent<SampleTime>>::new()).unwrap();
    assert!(extractor.finalize().is_empty());
}

#[test]
fn test_single_qualifying_edge_gives_empty_result() {
    let mut extractor = PeriodExtractor::new(EdgePolarity::Rising);
    extractor
        .ingest([at(0.0, false), at(1.0, true), at(2.0, false), at(3.0, false)])
        .unwrap();
    assert!(extractor.finalize().is_empty());
}

#[test]
fn test_two_qualifying_edges() {
    let summary = run_session(
        PeriodExtractor::<SampleTime>::new(EdgePolarity::Rising),
        vec![vec![at(0.0, true), at(5.0, true)]],
    );

    assert_eq!(summary.count, Some(1));
    assert_eq!(summary.min, Some(5.0));
    assert_eq!(summary.max, Some(5.0));
    assert_eq!(summary.mean, Some(5.0));
    assert_eq!(summary.std_dev, Some(0.0));
    assert_relative_eq!(summary.frequency.unwrap(), 0.2);
}

#[test]
fn test_extrema_mean_and_stddev() {
    let summary = run_session(
        PeriodExtractor::<SampleTime>::new(EdgePolarity::Rising),
        vec![square_wave(&[0.0, 1.0, 4.0, 10.0])],
    );

    let (mean, std_dev) = closed_form(&[1.0, 3.0, 6.0]);
    assert_eq!(summary.min, Some(1.0));
    assert_eq!(summary.max, Some(6.0));
    assert_relative_eq!(summary.mean.unwrap(), 10.0 / 3.0);
    assert_relative_eq!(summary.mean.unwrap(), mean, max_relative = 1e-12);
    assert_relative_eq!(summary.std_dev.unwrap(), std_dev, max_relative = 1e-9);
    assert_relative_eq!(summary.std_dev.unwrap(), 2.517, epsilon = 1e-3);
}

#[test]
fn test_opposite_edges_do_not_affect_statistics() {
    let times = [0.0, 1.0, 4.0, 10.0];
    let clean: Vec<_> = times.iter().map(|&t| at(t, true)).collect();

    let mut noisy = Vec::new();
    for (i, &t) in times.iter().enumerate() {
        noisy.push(at(t, true));
        if i + 1 < times.len() {
            noisy.push(at(t + 0.1, false));
            noisy.push(at(t + 0.2, false));
        }
    }

    let a = run_session(PeriodExtractor::<SampleTime>::new(EdgePolarity::Rising), vec![clean]);
    let b = run_session(PeriodExtractor::<SampleTime>::new(EdgePolarity::Rising), vec![noisy]);
    assert_eq!(a, b);
}

#[test]
fn test_batch_split_invariance() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let mut t = 0.0;
    let events: Vec<_> = (0..500)
        .map(|_| {
            t += rng.gen_range(1e-6..1e-3);
            at(t, rng.gen_bool(0.5))
        })
        .collect();

    let whole = run_session(PeriodExtractor::<SampleTime>::new(EdgePolarity::Falling), vec![events.clone()]);

    for chunk in [1, 2, 7, 64, 499] {
        let batches: Vec<Vec<_>> = events.chunks(chunk).map(|c| c.to_vec()).collect();
        let split = run_session(PeriodExtractor::<SampleTime>::new(EdgePolarity::Falling), batches);
        assert_eq!(whole, split, "chunk size {chunk}");
    }
}

#[test]
fn test_zero_period_sum_omits_frequency() {
    for ordering in [OrderingPolicy::Trust, OrderingPolicy::Validate] {
        let params = ExtractorParameters::new(EdgePolarity::Rising).with_ordering(ordering);
        let mut extractor = PeriodExtractor::with_parameters(params).unwrap();
        extractor.ingest([at(3.0, true), at(3.0, true)]).unwrap();

        let summary = extractor.finalize();
        assert_eq!(summary.count, Some(1));
        assert_eq!(summary.mean, Some(0.0));
        assert!(!summary.contains(Measurement::Frequency));
    }
}

#[test]
fn test_sample_index_timestamps() {
    // 1 MHz capture, a 1 kHz clock with one sample of jitter on every other edge
    let rate = 1_000_000.0;
    let mut events = Vec::new();
    for k in 0..100u64 {
        let jitter = k % 2;
        events.push(EdgeEvent::rising(SampleTime::from_sample(k * 1_000 + jitter, rate)));
        events.push(EdgeEvent::falling(SampleTime::from_sample(k * 1_000 + 500, rate)));
    }

    let summary = run_session(PeriodExtractor::<SampleTime>::new(EdgePolarity::Rising), vec![events]);
    assert_eq!(summary.count, Some(99));
    assert_relative_eq!(summary.min.unwrap(), 999e-6, max_relative = 1e-9);
    assert_relative_eq!(summary.max.unwrap(), 1001e-6, max_relative = 1e-9);
    assert_relative_eq!(summary.frequency.unwrap(), 99.0 / 0.099001, max_relative = 1e-9);
}

#[test]
fn test_host_mapping() {
    let params = ExtractorParameters::new(EdgePolarity::Rising).with_requested([
        Measurement::Mean,
        Measurement::Count,
        Measurement::Frequency,
    ]);
    let mut extractor = PeriodExtractor::with_parameters(params).unwrap();
    extractor.ingest(square_wave(&[0.0, 0.5, 1.0])).unwrap();

    let map = extractor.finalize().to_map();
    assert_eq!(map.len(), 3);
    assert_eq!(map["mean"], 0.5);
    assert_eq!(map["count"], 2.0);
    assert_eq!(map["frequency"], 2.0);
    assert!(!map.contains_key("min"));
}

#[test]
fn test_parameters_from_json() {
    let params: ExtractorParameters = serde_json::from_str(
        r#"{ "polarity": "falling", "ordering": "validate", "requested": ["count"] }"#,
    )
    .unwrap();
    let mut extractor = PeriodExtractor::with_parameters(params).unwrap();
    extractor
        .ingest([at(0.0, false), at(1.0, true), at(2.0, false)])
        .unwrap();
    assert!(extractor.ingest([at(1.5, false)]).is_err());

    let json = serde_json::to_string(&extractor.finalize()).unwrap();
    assert_eq!(json, r#"{"count":1}"#);
}
