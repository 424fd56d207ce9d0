use tidal_position::*;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {}, got {}",
        expected,
        actual
    );
}

#[test]
fn test_calculate_concentration() {
    assert_close(calculate_concentration(4, 10, 0), 1000.5348136431164);
    assert_close(calculate_concentration(4, 10, 1), 833.8623739844425);
    assert_close(calculate_concentration(4, 10, 1000), 5.492027214522115);
}

#[test]
fn test_calculate_tick_delta() {
    assert_eq!(calculate_tick_delta(4, 10, 1000.5348136431164), 0);
    assert_eq!(calculate_tick_delta(4, 10, 833.8623739844425), 1);
    assert_eq!(calculate_tick_delta(4, 10, 5.492027214522115), 1000);
}

#[test]
fn test_concentration_array_lengths() {
    assert_eq!(get_concentration_array(4, 10, 221752).unwrap().len(), 11, "Near the top tick");
    assert_eq!(get_concentration_array(4, 10, 221300).unwrap().len(), 124);
    assert_eq!(get_concentration_array(4, 10, 0).unwrap().len(), 137, "Full list at tick 0");
}

#[test]
fn test_concentration_array_tail_is_whole() {
    let concentrations = get_concentration_array(4, 10, 0).unwrap();

    assert_close(concentrations[0], 1000.5348136431164);
    assert_eq!(concentrations[67], calculate_concentration(4, 10, 67), "Last exact figure");
    assert_eq!(concentrations[68], 70.0, "Whole numbers follow the exact figures");
    assert_eq!(*concentrations.last().unwrap(), 2.0);
    for pair in concentrations[68..].windows(2) {
        assert_eq!(pair[0] - pair[1], 1.0);
    }
}

#[test]
fn test_concentration_array_range_limit() {
    let result = get_concentration_array(4, 10, -221800);
    assert_eq!(result, Err(PositionError::RangeLimitReached));
}
