use patterns_core::command_log::HorizontalMover;

/// Tolerance for comparing receiver state after floating-point round trips
#[allow(dead_code)]
pub const EPS: f64 = 1e-6;

/// Assert two ground-plane states agree within [`EPS`]
#[allow(dead_code)]
pub fn assert_ground_eq(actual: HorizontalMover, expected: HorizontalMover) {
    assert!(
        (actual.x() - expected.x()).abs() < EPS
            && (actual.y() - expected.y()).abs() < EPS
            && (actual.heading() - expected.heading()).abs() < EPS,
        "ground state {:?} differs from {:?}",
        actual,
        expected
    );
}

/// Render a pattern run into a String
#[allow(dead_code)]
pub fn run_to_string(
    catalogue: &patterns_core::Catalogue,
    name: &str,
    seed: u64,
) -> patterns_core::Result<String> {
    let mut out = Vec::new();
    let mut ctx = patterns_core::RunContext::new(&mut out).with_seed(seed);
    catalogue.run(name, &mut ctx)?;
    Ok(String::from_utf8_lossy(&out).into_owned())
}
