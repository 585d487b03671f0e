use exoseeker::{phase_fold, LightCurve};

fn wavy_curve(time: &[f64]) -> LightCurve {
    let flux: Vec<f64> = time.iter().map(|&t| 1.0 + 0.002 * (t * 0.9).sin()).collect();
    LightCurve::from_raw(time, &flux).unwrap()
}

#[test]
fn test_phase_stays_in_unit_interval() {
    let time: Vec<f64> = vec![-5.0e4, -17.25, -0.001, 0.0, 3.99, 1.0e5, 123456.789];
    let curve = wavy_curve(&time);

    for &(period, epoch) in &[(3.5, 0.0), (0.25, -100.0), (17.0, 9.9e4)] {
        let folded = phase_fold(&curve, period, epoch).unwrap();
        assert_eq!(folded.len(), curve.len());
        assert!(
            folded.phase.iter().all(|&p| (0.0..1.0).contains(&p)),
            "phase out of [0,1) for period {period}, epoch {epoch}"
        );
    }
}

#[test]
fn test_folded_output_is_sorted_by_phase() {
    let time: Vec<f64> = (0..250).map(|i| (i as f64 * 0.37).sin() * 40.0).collect();
    let curve = wavy_curve(&time);

    let folded = phase_fold(&curve, 2.7, 1.1).unwrap();
    assert!(folded.phase.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn test_epoch_is_centered_at_half() {
    // A sample exactly on the epoch, and others exactly k periods away,
    // must all land on phase 0.5.
    let time = vec![42.0, 42.0 + 7.0, 42.0 - 21.0, 40.0];
    let curve = wavy_curve(&time);

    let folded = phase_fold(&curve, 7.0, 42.0).unwrap();
    let centered = folded
        .phase
        .iter()
        .filter(|&&p| (p - 0.5).abs() < 1e-9)
        .count();
    assert_eq!(centered, 3);
}

#[test]
fn test_flux_travels_with_its_timestamp() {
    let time = vec![0.0, 1.0, 2.0, 3.0];
    let flux = vec![10.0, 20.0, 30.0, 40.0];
    let curve = LightCurve::from_raw(&time, &flux).unwrap();

    // Period 4, epoch 0: phases are 0.5, 0.75, 0.0, 0.25.
    let folded = phase_fold(&curve, 4.0, 0.0).unwrap();
    assert_eq!(folded.flux, vec![30.0, 40.0, 10.0, 20.0]);
}

#[test]
fn test_fold_rejects_invalid_period() {
    let curve = wavy_curve(&[0.0, 1.0, 2.0]);
    assert!(phase_fold(&curve, 0.0, 1.0).is_err());
    assert!(phase_fold(&curve, -2.0, 1.0).is_err());
    assert!(phase_fold(&curve, f64::NAN, 1.0).is_err());
}
