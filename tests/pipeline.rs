use linreg_outliers::{
    generator::{generate, generate_seeded},
    lin_reg::lin_reg,
    outliers::{residuals, top_k},
    params::Parameters,
    pipeline::Analysis,
    report, OUTLIER_COUNT,
};
use proptest::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

#[test]
fn default_parameters_recover_the_true_line() {
    let analysis = Analysis::run(Parameters::new(300, 2.0, 5.0, 50.0)).unwrap();
    assert_eq!(analysis.samples.len(), 300);
    assert!(
        (analysis.fit.slope - 2.0).abs() < 0.3,
        "slope {}",
        analysis.fit.slope
    );
    assert!(
        (analysis.fit.y_offset - 5.0).abs() < 5.0,
        "intercept {}",
        analysis.fit.y_offset
    );
}

#[test]
fn noiseless_flat_data_has_zero_residuals() {
    let analysis = Analysis::run(Parameters::new(100, 0.0, 0.0, 0.0)).unwrap();
    assert!(analysis.residuals.iter().all(|r| r.abs() < 1e-12));
    for (x, y) in analysis.samples.iter() {
        assert!((analysis.fit.predict(x) - y).abs() < 1e-12);
    }
}

#[test]
fn selected_outliers_beat_every_other_sample() {
    let analysis = Analysis::run(Parameters::new(100, 5.0, -10.0, 1000.0)).unwrap();
    assert_eq!(analysis.outliers.len(), 5);

    let smallest_selected = analysis
        .outliers
        .iter()
        .map(|outlier| outlier.residual)
        .fold(f64::INFINITY, f64::min);
    for (index, residual) in analysis.residuals.iter().enumerate() {
        if analysis.outliers.iter().all(|outlier| outlier.index != index) {
            assert!(*residual <= smallest_selected);
        }
    }
}

#[test]
fn fit_converges_with_many_quiet_samples() {
    for seed in 0..8 {
        let mut rng = StdRng::seed_from_u64(seed);
        let samples = generate(&Parameters::new(1000, -7.3, 31.0, 1.0), &mut rng).unwrap();
        let fit = lin_reg(&samples.xs, &samples.ys).unwrap();
        assert!((fit.slope + 7.3).abs() < 0.02, "seed {} slope {}", seed, fit.slope);
        assert!(
            (fit.y_offset - 31.0).abs() < 0.5,
            "seed {} intercept {}",
            seed,
            fit.y_offset
        );
    }
}

#[test]
fn report_lines_follow_outlier_order() {
    let analysis = Analysis::run(Parameters::default()).unwrap();
    let lines: Vec<String> = analysis.outliers.iter().map(report::outlier_line).collect();
    assert_eq!(lines.len(), OUTLIER_COUNT);
    assert!(lines[0].ends_with(&format!("{:.3}", analysis.outliers[0].residual)));
    assert!(report::equation_line(&analysis.fit).starts_with("Fitted Line: y = "));
}

fn slider_parameters() -> impl Strategy<Value = Parameters> {
    (2usize..=20, -100i32..=100, -50i32..=50, 0u32..=1000).prop_map(
        |(count, slope, intercept, variance)| {
            Parameters::new(
                count * 50,
                slope as f64 / 10.0,
                intercept as f64,
                variance as f64,
            )
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn identical_parameters_give_identical_runs(params in slider_parameters()) {
        prop_assert_eq!(Analysis::run(params).unwrap(), Analysis::run(params).unwrap());
    }

    #[test]
    fn run_shape_holds(params in slider_parameters()) {
        let analysis = Analysis::run(params).unwrap();
        prop_assert_eq!(analysis.samples.len(), params.count);
        prop_assert_eq!(analysis.outliers.len(), OUTLIER_COUNT.min(params.count));
        prop_assert!(analysis.residuals.iter().all(|r| *r >= 0.0));
        prop_assert!(analysis
            .outliers
            .windows(2)
            .all(|pair| pair[0].residual >= pair[1].residual));
    }

    #[test]
    fn small_sample_counts_select_everything(count in 2usize..5, variance in 1u32..100) {
        let params = Parameters::new(count, 1.0, 0.0, variance as f64);
        let samples = generate_seeded(&params).unwrap();
        let fit = lin_reg(&samples.xs, &samples.ys).unwrap();
        let residuals = residuals(&samples, &fit);
        let mut selected = top_k(&residuals, OUTLIER_COUNT);
        prop_assert_eq!(selected.len(), count);
        selected.sort_unstable();
        prop_assert_eq!(selected, (0..count).collect::<Vec<_>>());
    }
}
