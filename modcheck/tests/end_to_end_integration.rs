//! End-to-end tests driving generation, evaluation and shrinking together

use modcheck::{
    Arbitrary, Blind, GenerationError, GeneratorConfig, NonZero, ParallelConfig, Positive,
    PropertyError, ShrinkEngine, Static, Strategy, create_seeded_rng, sample_parallel,
};

/// Minimal check loop: sample, evaluate, then shrink the first failure
fn check<S, F>(
    strategy: &S,
    iterations: usize,
    seed: u64,
    config: &GeneratorConfig,
    property: F,
) -> Result<(), (PropertyError, Option<S::Value>)>
where
    S: Strategy,
    S::Value: Arbitrary + Clone,
    F: Fn(&S::Value) -> Result<(), PropertyError>,
{
    let mut rng = create_seeded_rng(seed);

    for _ in 0..iterations {
        let value = strategy
            .generate(&mut rng, config)
            .map_err(|e| (PropertyError::from(e), None))?;

        if let Err(error) = property(&value) {
            let result = ShrinkEngine::new().shrink(value, &property);
            return Err((error, Some(result.minimal)));
        }
    }

    Ok(())
}

#[test]
fn test_division_by_non_zero_never_panics() {
    let strategy = i32::arbitrary_with((-100, 100)).zip(NonZero::<i32>::arbitrary_with((-100, 100)));

    let result = check(
        &strategy,
        1000,
        42,
        &GeneratorConfig::default(),
        |(numerator, divisor): &(i32, NonZero<i32>)| {
            let _ = numerator / divisor.get();
            Ok(())
        },
    );

    assert!(result.is_ok());
}

#[test]
fn test_failing_positive_property_shrinks_to_boundary() {
    let strategy = Positive::<i32>::arbitrary_with((-100, 100));

    let result = check(
        &strategy,
        1000,
        7,
        &GeneratorConfig::default(),
        |p: &Positive<i32>| {
            if *p.get() >= 10 {
                Err(PropertyError::property_failed(format!("{} is too big", p)))
            } else {
                Ok(())
            }
        },
    );

    let (error, minimal) = result.unwrap_err();
    assert!(!error.is_generation_failure());
    assert_eq!(minimal, Some(Positive::new(10)));
}

#[test]
fn test_static_failure_is_reported_unshrunk() {
    let strategy = Static::<i32>::arbitrary_with((50, 60));

    let result = check(
        &strategy,
        10,
        3,
        &GeneratorConfig::default(),
        |_s: &Static<i32>| Err(PropertyError::property_failed("always")),
    );

    let (_, minimal) = result.unwrap_err();
    let minimal = minimal.unwrap();
    assert!((50..=60).contains(minimal.get()));
    assert!(minimal.to_string().starts_with("Static("));
}

#[test]
fn test_blind_failure_hides_value_but_still_shrinks() {
    let strategy = Blind::<i32>::arbitrary_with((100, 1000));

    let result = check(
        &strategy,
        10,
        9,
        &GeneratorConfig::default(),
        |b: &Blind<i32>| {
            if *b.get() > 5 {
                Err(PropertyError::property_failed(format!("failed for {}", b)))
            } else {
                Ok(())
            }
        },
    );

    let (error, minimal) = result.unwrap_err();
    assert_eq!(error.to_string(), "Property failed: failed for (*)");

    let minimal = minimal.unwrap();
    assert_eq!(minimal.into_inner(), 6);
    assert_eq!(format!("{:?}", minimal), "(*)");
}

#[test]
fn test_non_positive_inner_range_still_yields_positive_values() {
    // Negative samples are admitted and normalized to their magnitude
    let strategy = Positive::<i32>::arbitrary_with((-5, 0));
    let mut rng = create_seeded_rng(11);

    let values = strategy
        .sample(&mut rng, &GeneratorConfig::default(), 1000)
        .unwrap();
    assert!(values.iter().all(|p| (1..=5).contains(p.get())));

    let result = check(
        &strategy,
        100,
        12,
        &GeneratorConfig::default(),
        |p: &Positive<i32>| {
            if *p.get() > 0 {
                Ok(())
            } else {
                Err(PropertyError::property_failed(format!("{} is not positive", p)))
            }
        },
    );
    assert!(result.is_ok());
}

#[test]
fn test_unsatisfiable_filter_is_a_generation_failure() {
    let strategy = Positive::<i32>::arbitrary_with((0, 0));
    let config = GeneratorConfig::default().with_max_filter_attempts(25);

    let result = check(&strategy, 10, 1, &config, |_p: &Positive<i32>| Ok(()));

    let (error, minimal) = result.unwrap_err();
    assert!(error.is_generation_failure());
    assert!(minimal.is_none());
    assert_eq!(
        error,
        PropertyError::GenerationFailed(GenerationError::Exhausted {
            attempts: 25,
            context: Some("no i32 satisfied the predicate".to_string()),
        })
    );
}

#[test]
fn test_min_only_inner_range_is_a_generation_failure() {
    let strategy = Positive::<i32>::arbitrary_with((i32::MIN, i32::MIN));
    let config = GeneratorConfig::default().with_max_filter_attempts(10);

    let (error, _) = check(&strategy, 1, 2, &config, |_p: &Positive<i32>| Ok(())).unwrap_err();
    assert!(error.is_generation_failure());
}

#[test]
fn test_parallel_sampling_matches_constraints() {
    let strategy = Positive::<i64>::arbitrary_with((-100, 100));
    let values = sample_parallel(
        &strategy,
        2000,
        Some(2024),
        &GeneratorConfig::default(),
        &ParallelConfig::default(),
    )
    .unwrap();

    assert_eq!(values.len(), 2000);
    assert!(values.iter().all(|v| (1..=100).contains(v.get())));
}
