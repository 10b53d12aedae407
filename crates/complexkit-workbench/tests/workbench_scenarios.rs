//! End-to-end action sequences against the workbench controller.

use complexkit_core::{InputError, InputField};
use complexkit_visualizer::{Color, PlaneTransform};
use complexkit_workbench::{OutputField, SessionState, Trigger, WorkbenchController};
use proptest::prelude::*;

fn controller() -> WorkbenchController {
    WorkbenchController::new(PlaneTransform::with_size(600.0, 400.0))
}

#[test]
fn test_confirm_unlocks_operations() {
    let mut c = controller();
    c.confirm("1", "1").unwrap();

    assert_eq!(c.info().get(OutputField::InitialComplex), "1.00 + 1.00i");
    assert!(c.form().is_enabled(InputField::Angle));
    assert!(c.form().is_enabled(InputField::MultiplierReal));
    assert!(c.form().is_enabled(InputField::MultiplierImaginary));
    assert!(!c.form().is_enabled(InputField::Real));
    assert!(!c.form().is_enabled(InputField::Imaginary));
    assert!(!c.form().is_trigger_enabled(Trigger::ConfirmComplex));
    assert_eq!(c.form().focus(), Some(InputField::Angle));
}

#[test]
fn test_rotate_quarter_turn() {
    let mut c = controller();
    c.confirm("1", "1").unwrap();
    c.rotate("90").unwrap();

    assert_eq!(c.info().get(OutputField::RotatedComplex), "-1.00 + 1.00i");
    assert_eq!(c.info().get(OutputField::RotationAngle), "90.0° (1.57 rad)");
    assert_eq!(c.scene().line_count(Color::BLUE), 3);
    assert_eq!(c.scene().line_count(Color::RED), 3);
    assert_eq!(c.scene().arcs().count(), 1);

    assert!(!c.form().is_enabled(InputField::Angle));
    assert!(c.form().is_enabled(InputField::Real));
    assert!(c.form().is_enabled(InputField::Imaginary));
    assert_eq!(c.form().focus(), Some(InputField::Real));
    assert!(c.session().is_set());
}

#[test]
fn test_outputs_round_halfway_values_up() {
    let mut c = controller();
    c.confirm("0.125", "2.625").unwrap();
    assert_eq!(c.info().get(OutputField::InitialComplex), "0.13 + 2.63i");

    c.rotate("22.25").unwrap();
    assert_eq!(c.info().get(OutputField::RotationAngle), "22.3° (0.39 rad)");
    let texts: Vec<_> = c.scene().texts().collect();
    assert!(texts.contains(&"z = 0.13 + 2.63i"));
    assert!(texts.contains(&"22.3°"));
}

#[test]
fn test_multiply_by_i_draws_multiplier() {
    let mut c = controller();
    c.confirm("1", "1").unwrap();
    c.multiply("0", "1").unwrap();

    assert_eq!(c.info().get(OutputField::ProductComplex), "-1.00 + 1.00i");
    assert_eq!(c.info().get(OutputField::MultiplierComplex), "0.00 + 1.00i");
    assert_eq!(c.scene().line_count(Color::GREEN), 3);
    assert_eq!(c.scene().line_count(Color::PURPLE), 3);
    let texts: Vec<_> = c.scene().texts().collect();
    assert!(texts.contains(&"w = 0.00 + 1.00i"));
    assert!(texts.contains(&"z*w = -1.00 + 1.00i"));
}

#[test]
fn test_invalid_confirm_keeps_unset() {
    let mut c = controller();
    let before = c.clone();

    let err = c.confirm("abc", "1").unwrap_err();
    assert_eq!(
        err,
        InputError::InvalidNumericInput {
            field: InputField::Real,
            value: "abc".to_string()
        }
    );
    assert_eq!(err.alert_message(), "请输入有效的实部和虚部！");
    assert_eq!(c.session(), &SessionState::Unset);
    assert_eq!(c, before);
}

#[test]
fn test_reset_restores_defaults() {
    let mut c = controller();
    c.set_input_text(InputField::Angle, "120");
    c.confirm("2", "3").unwrap();
    c.rotate("120").unwrap();
    c.multiply("4", "-1").unwrap();
    c.reset();

    let texts: Vec<_> = InputField::ALL.iter().map(|f| c.form().text(*f)).collect();
    assert_eq!(texts, vec!["1", "1", "45", "0", "1"]);
    assert!(c.info().is_empty());
    assert_eq!(c.session(), &SessionState::Unset);
    assert_eq!(c.scene(), controller().scene());
    assert!(c.form().is_enabled(InputField::Real));
    assert!(!c.form().is_enabled(InputField::MultiplierImaginary));
    assert_eq!(c.form().focus(), Some(InputField::Real));
}

#[test]
fn test_multiply_without_confirm_reports_not_confirmed() {
    let mut c = controller();
    let err = c.multiply("0", "1").unwrap_err();
    assert_eq!(err.alert_message(), "请先确定初始复数！");
}

#[derive(Debug, Clone)]
enum Action {
    Confirm(String, String),
    Rotate(String),
    Multiply(String, String),
    Reset,
}

fn field_text() -> impl Strategy<Value = String> {
    prop_oneof![
        (-50i32..50).prop_map(|n| n.to_string()),
        (-5.0f64..5.0).prop_map(|x| format!("{:.3}", x)),
        Just("abc".to_string()),
        Just(String::new()),
    ]
}

fn action() -> impl Strategy<Value = Action> {
    prop_oneof![
        (field_text(), field_text()).prop_map(|(a, b)| Action::Confirm(a, b)),
        field_text().prop_map(Action::Rotate),
        (field_text(), field_text()).prop_map(|(a, b)| Action::Multiply(a, b)),
        Just(Action::Reset),
    ]
}

fn apply(c: &mut WorkbenchController, action: &Action) -> bool {
    match action {
        Action::Confirm(a, b) => c.confirm(a, b).is_ok(),
        Action::Rotate(a) => c.rotate(a).is_ok(),
        Action::Multiply(a, b) => c.multiply(a, b).is_ok(),
        Action::Reset => {
            c.reset();
            true
        }
    }
}

proptest! {
    #[test]
    fn reset_is_idempotent(actions in proptest::collection::vec(action(), 0..12)) {
        let mut c = controller();
        for a in &actions {
            apply(&mut c, a);
        }
        c.reset();
        let once = c.clone();
        c.reset();
        prop_assert_eq!(&c, &once);
        prop_assert_eq!(&c, &controller());
    }

    #[test]
    fn failed_actions_change_nothing(actions in proptest::collection::vec(action(), 1..12)) {
        let mut c = controller();
        for a in &actions {
            let before = c.clone();
            if !apply(&mut c, a) {
                prop_assert_eq!(&c, &before);
            }
        }
    }
}
