//! Behavioural scenarios shared by every driver
//!
//! Write the scenario once, run it against the bare engine and against the
//! terminal app driven by mouse clicks.

#![allow(clippy::unwrap_used)]

use tapcalc::driver::{CalculatorDriver, EngineDriver};
use tapcalc::engine::{Event, Operator};

fn verify_basic_arithmetic<D: CalculatorDriver>(driver: &mut D) {
    driver.enter("2+3=");
    assert_eq!(driver.display(), "5");
    driver.clear();

    driver.enter("10−4=");
    assert_eq!(driver.display(), "6");
    driver.clear();

    driver.enter("6×7=");
    assert_eq!(driver.display(), "42");
    driver.clear();

    driver.enter("20÷4=");
    assert_eq!(driver.display(), "5");
    driver.clear();

    driver.enter("1÷4=");
    assert_eq!(driver.display(), "0.25");
    driver.clear();
}

fn verify_left_to_right<D: CalculatorDriver>(driver: &mut D) {
    driver.enter("2+3×4=");
    assert_eq!(driver.display(), "20");
    driver.clear();

    // The running total shows as soon as the next operator is chosen
    driver.enter("9−3");
    driver.press(Event::Operator(Operator::Divide));
    assert_eq!(driver.display(), "6");
    driver.enter("2=");
    assert_eq!(driver.display(), "3");
    driver.clear();
}

fn verify_error_and_recovery<D: CalculatorDriver>(driver: &mut D) {
    driver.enter("5÷0=");
    assert_eq!(driver.display(), "Error");

    // Operators are ignored until a new number starts
    driver.press(Event::Operator(Operator::Add));
    assert_eq!(driver.display(), "Error");
    assert_eq!(driver.active_operator(), None);

    driver.clear();
    driver.enter("7−2=");
    assert_eq!(driver.display(), "5");
    driver.clear();

    driver.enter("0÷0=");
    assert_eq!(driver.display(), "Error");
    driver.enter("8");
    assert_eq!(driver.display(), "8");
    driver.clear();
}

fn verify_operator_highlight<D: CalculatorDriver>(driver: &mut D) {
    driver.enter("3+");
    assert_eq!(driver.active_operator(), Some(Operator::Add));

    // Same operator again is ignored
    driver.enter("+");
    assert_eq!(driver.active_operator(), Some(Operator::Add));
    assert_eq!(driver.display(), "3");

    driver.enter("4");
    assert_eq!(driver.active_operator(), None);
    driver.enter("=");
    assert_eq!(driver.display(), "7");
    assert_eq!(driver.active_operator(), None);
    driver.clear();
}

fn verify_helpers<D: CalculatorDriver>(driver: &mut D) {
    driver.enter("1..5");
    assert_eq!(driver.display(), "1.5");
    driver.press(Event::ToggleSign);
    assert_eq!(driver.display(), "-1.5");
    driver.press(Event::ToggleSign);
    assert_eq!(driver.display(), "1.5");
    driver.clear();

    driver.enter("50%");
    assert_eq!(driver.display(), "0.5");
    driver.clear();

    driver.enter(".");
    assert_eq!(driver.display(), "0.");
    driver.clear();
    assert_eq!(driver.display(), "0");
}

fn run_all_scenarios<D: CalculatorDriver>(driver: &mut D) {
    verify_basic_arithmetic(driver);
    verify_left_to_right(driver);
    verify_error_and_recovery(driver);
    verify_operator_highlight(driver);
    verify_helpers(driver);
}

mod engine {
    use super::*;

    #[test]
    fn test_basic_arithmetic() {
        verify_basic_arithmetic(&mut EngineDriver::new());
    }

    #[test]
    fn test_left_to_right() {
        verify_left_to_right(&mut EngineDriver::new());
    }

    #[test]
    fn test_error_and_recovery() {
        verify_error_and_recovery(&mut EngineDriver::new());
    }

    #[test]
    fn test_operator_highlight() {
        verify_operator_highlight(&mut EngineDriver::new());
    }

    #[test]
    fn test_helpers() {
        verify_helpers(&mut EngineDriver::new());
    }

    #[test]
    fn test_all_scenarios_in_one_session() {
        let mut driver = EngineDriver::new();
        run_all_scenarios(&mut driver);
        assert!(driver.state().invariants_hold());
    }
}

#[cfg(feature = "tui")]
mod tui {
    use super::*;
    use tapcalc::driver::TuiDriver;

    #[test]
    fn test_basic_arithmetic() {
        verify_basic_arithmetic(&mut TuiDriver::new());
    }

    #[test]
    fn test_left_to_right() {
        verify_left_to_right(&mut TuiDriver::new());
    }

    #[test]
    fn test_error_and_recovery() {
        verify_error_and_recovery(&mut TuiDriver::new());
    }

    #[test]
    fn test_operator_highlight() {
        verify_operator_highlight(&mut TuiDriver::new());
    }

    #[test]
    fn test_helpers() {
        verify_helpers(&mut TuiDriver::new());
    }

    #[test]
    fn test_all_scenarios_on_narrow_screen() {
        run_all_scenarios(&mut TuiDriver::with_size(24, 12));
    }

    #[test]
    fn test_resize_mid_calculation() {
        let mut driver = TuiDriver::new();
        driver.enter("12×");
        driver.app_mut().resize(30, 14);
        driver.enter("3=");
        assert_eq!(driver.display(), "36");
    }
}
