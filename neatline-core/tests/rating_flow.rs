//! End-to-end capture → analyze → rate flow.

use neatline_core::{
    neatness, AnalyzerConfig, CaptureSession, NeatlineError, Point, Rating, StrokeAnalysis,
};

/// Write one clean horizontal line well clear of any rule.
fn write_line(session: &mut CaptureSession, y: f32) {
    session.begin(Point::new(100.0, y));
    for i in 1u8..30 {
        session.extend(Point::new(100.0 + f32::from(i) * 10.0, y));
    }
    session.end();
}

#[test]
fn clean_sample_rates_five_stars() {
    let mut session = CaptureSession::default();
    write_line(&mut session, 100.0);

    let (analysis, rating) = session
        .rate(&AnalyzerConfig::default())
        .expect("non-empty sample");

    assert!((analysis.smoothness - 1.0).abs() < 1e-6);
    assert!((analysis.consistency - 1.0).abs() < 1e-6);
    assert_eq!(rating.full_stars, 5);
    assert_eq!(rating.to_string(), "5.0/5");
}

#[test]
fn crossing_the_rule_twice_penalizes_once() {
    let mut once = CaptureSession::default();
    write_line(&mut once, 100.0);
    once.begin(Point::new(0.0, 173.0));
    once.extend(Point::new(5.0, 174.0)); // first crossing latches
    once.extend(Point::new(10.0, 173.0));
    once.end();

    let mut twice = CaptureSession::default();
    write_line(&mut twice, 100.0);
    twice.begin(Point::new(0.0, 173.0));
    twice.extend(Point::new(5.0, 174.0));
    twice.extend(Point::new(10.0, 173.0));
    twice.extend(Point::new(15.0, 175.0)); // second crossing, no extra penalty
    twice.extend(Point::new(20.0, 173.0));
    twice.end();

    let config = AnalyzerConfig::default();
    let analysis_once = StrokeAnalysis::of(once.sample(), &config);
    let analysis_twice = StrokeAnalysis::of(twice.sample(), &config);

    let penalized_once = neatness(&analysis_once, once.rule_crossed());
    let clean_once = neatness(&analysis_once, false);
    assert!((clean_once - penalized_once - 0.05).abs() < 1e-6);

    // Same latch semantics regardless of how often the rule was touched.
    let penalized_twice = neatness(&analysis_twice, twice.rule_crossed());
    let clean_twice = neatness(&analysis_twice, false);
    assert!((clean_twice - penalized_twice - 0.05).abs() < 1e-6);
}

#[test]
fn empty_submit_is_recoverable_and_mutates_nothing() {
    let session = CaptureSession::default();
    match session.rate(&AnalyzerConfig::default()) {
        Err(NeatlineError::EmptySample) => {}
        other => panic!("expected EmptySample, got {other:?}"),
    }
    assert!(session.sample().is_empty());
    assert!(!session.rule_crossed());
}

#[test]
fn rating_survives_serde_round_trip() {
    let rating = Rating::from_neatness(0.73);
    let json = serde_json::to_string(&rating).expect("serialize");
    let back: Rating = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(rating, back);
}
