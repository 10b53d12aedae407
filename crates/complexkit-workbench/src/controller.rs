//! Action controller for the workbench.
//!
//! Every action validates all of its input before touching any state. A
//! failed action returns the error and leaves the session, form, outputs and
//! scene exactly as they were. A successful action rebuilds the whole scene
//! from a cleared surface.

use complexkit_core::complex::format_fixed;
use complexkit_core::constants::MULTIPLIER_DRAW_THRESHOLD;
use complexkit_core::{degrees_to_radians, parse_number, Complex, InputError, InputField};
use complexkit_visualizer::{Color, PlaneRenderer, PlaneTransform, Scene};

use crate::form::InputForm;
use crate::info::{InfoPanel, OutputField};
use crate::session::SessionState;

/// Owns the session number, the form, the result panel and the current scene.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkbenchController {
    renderer: PlaneRenderer,
    session: SessionState,
    form: InputForm,
    info: InfoPanel,
    scene: Scene,
}

impl WorkbenchController {
    /// A controller in the reset state: bare axes, defaults, nothing confirmed.
    pub fn new(transform: PlaneTransform) -> Self {
        let renderer = PlaneRenderer::new(transform);
        let scene = renderer.begin_frame();
        Self {
            renderer,
            session: SessionState::Unset,
            form: InputForm::new(),
            info: InfoPanel::new(),
            scene,
        }
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn form(&self) -> &InputForm {
        &self.form
    }

    /// Record text typed into a field.
    pub fn set_input_text(&mut self, field: InputField, text: impl Into<String>) {
        self.form.set_text(field, text);
    }

    pub fn info(&self) -> &InfoPanel {
        &self.info
    }

    /// The most recently drawn frame.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Commit `real_text + imag_text·i` as the session number.
    pub fn confirm(&mut self, real_text: &str, imag_text: &str) -> Result<Complex, InputError> {
        let re = parse_number(InputField::Real, real_text).inspect_err(log_rejected)?;
        let im = parse_number(InputField::Imaginary, imag_text).inspect_err(log_rejected)?;
        let z = Complex::new(re, im);

        self.form.set_text(InputField::Real, real_text);
        self.form.set_text(InputField::Imaginary, imag_text);
        self.session = SessionState::Set(z);

        let mut scene = self.renderer.begin_frame();
        self.draw_initial(&mut scene, z);
        self.scene = scene;

        self.info.clear();
        self.info.set(OutputField::InitialComplex, z.to_string());
        self.form.enter_operation_mode();

        tracing::info!("Confirmed complex number {}", z);
        Ok(z)
    }

    /// Rotate the session number by `angle_text` degrees.
    ///
    /// The session number itself is kept; only the rotated copy is drawn.
    pub fn rotate(&mut self, angle_text: &str) -> Result<Complex, InputError> {
        let z = self.require_session()?;
        let degrees = parse_number(InputField::Angle, angle_text).inspect_err(log_rejected)?;
        let radians = degrees_to_radians(degrees);
        let rotated = z.rotated(radians);

        self.form.set_text(InputField::Angle, angle_text);

        let mut scene = self.renderer.begin_frame();
        self.draw_initial(&mut scene, z);
        self.renderer.draw_vector(
            &mut scene,
            rotated,
            Color::RED,
            Some(&format!("z' = {}", rotated)),
        );
        self.renderer
            .draw_rotation_arc(&mut scene, radians, z.magnitude());
        self.scene = scene;

        self.info.set(
            OutputField::RotationAngle,
            format!(
                "{}° ({} rad)",
                format_fixed(degrees, 1),
                format_fixed(radians, 2)
            ),
        );
        self.info.set(OutputField::RotatedComplex, rotated.to_string());
        self.form.finish_rotation();

        tracing::info!("Rotated {} by {}° to {}", z, degrees, rotated);
        Ok(rotated)
    }

    /// Multiply the session number by `mult_real_text + mult_imag_text·i`.
    ///
    /// Input locks are left as they are so the product can be recomputed with
    /// another multiplier.
    pub fn multiply(
        &mut self,
        mult_real_text: &str,
        mult_imag_text: &str,
    ) -> Result<Complex, InputError> {
        let z = self.require_session()?;
        let re = parse_number(InputField::MultiplierReal, mult_real_text)
            .inspect_err(log_rejected)?;
        let im = parse_number(InputField::MultiplierImaginary, mult_imag_text)
            .inspect_err(log_rejected)?;
        let w = Complex::new(re, im);
        let product = z * w;

        self.form.set_text(InputField::MultiplierReal, mult_real_text);
        self.form
            .set_text(InputField::MultiplierImaginary, mult_imag_text);

        let mut scene = self.renderer.begin_frame();
        self.draw_initial(&mut scene, z);
        if w.exceeds(MULTIPLIER_DRAW_THRESHOLD) {
            self.renderer
                .draw_vector(&mut scene, w, Color::GREEN, Some(&format!("w = {}", w)));
        } else {
            tracing::debug!("Multiplier {} too small to draw", w);
        }
        self.renderer.draw_vector(
            &mut scene,
            product,
            Color::PURPLE,
            Some(&format!("z*w = {}", product)),
        );
        self.scene = scene;

        self.info.clear_field(OutputField::RotationAngle);
        self.info.clear_field(OutputField::RotatedComplex);
        self.info.set(OutputField::MultiplierComplex, w.to_string());
        self.info.set(OutputField::ProductComplex, product.to_string());

        tracing::info!("Multiplied {} by {} to {}", z, w, product);
        Ok(product)
    }

    /// Back to the initial configuration.
    pub fn reset(&mut self) {
        self.form.reset();
        self.session = SessionState::Unset;
        self.scene = self.renderer.begin_frame();
        self.info.clear();
        tracing::info!("Workbench reset");
    }

    fn require_session(&self) -> Result<Complex, InputError> {
        self.session.current().ok_or_else(|| {
            tracing::warn!("Action rejected: no confirmed complex number");
            InputError::NotConfirmed
        })
    }

    fn draw_initial(&self, scene: &mut Scene, z: Complex) {
        self.renderer
            .draw_vector(scene, z, Color::BLUE, Some(&format!("z = {}", z)));
    }
}

fn log_rejected(err: &InputError) {
    tracing::warn!("Action rejected: {}", err);
}

impl Default for WorkbenchController {
    fn default() -> Self {
        Self::new(PlaneTransform::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use complexkit_visualizer::DrawCommand;

    fn controller() -> WorkbenchController {
        WorkbenchController::new(PlaneTransform::with_size(600.0, 400.0))
    }

    #[test]
    fn test_new_matches_reset_state() {
        let mut c = controller();
        let fresh = c.clone();
        c.reset();
        assert_eq!(c, fresh);
        assert_eq!(c.session(), &SessionState::Unset);
        assert!(c.info().is_empty());
    }

    #[test]
    fn test_confirm_draws_only_initial_vector() {
        let mut c = controller();
        c.confirm("2", "-1").unwrap();

        assert_eq!(c.scene().line_count(Color::BLUE), 3);
        assert_eq!(c.scene().line_count(Color::RED), 0);
        assert!(c.scene().texts().any(|t| t == "z = 2.00 + -1.00i"));
        assert_eq!(c.info().get(OutputField::InitialComplex), "2.00 + -1.00i");
    }

    #[test]
    fn test_confirm_clears_previous_outputs() {
        let mut c = controller();
        c.confirm("1", "1").unwrap();
        c.multiply("2", "0").unwrap();
        c.confirm("3", "0").unwrap();

        assert_eq!(c.info().get(OutputField::InitialComplex), "3.00 + 0.00i");
        assert_eq!(c.info().get(OutputField::MultiplierComplex), "");
        assert_eq!(c.info().get(OutputField::ProductComplex), "");
    }

    #[test]
    fn test_confirm_accepts_numeric_prefix() {
        let mut c = controller();
        let z = c.confirm(" 1.5abc", "2e0").unwrap();
        assert_eq!(z, Complex::new(1.5, 2.0));
    }

    #[test]
    fn test_invalid_imaginary_leaves_state_untouched() {
        let mut c = controller();
        c.confirm("1", "1").unwrap();
        c.rotate("30").unwrap();
        let before = c.clone();

        let err = c.confirm("4", "x").unwrap_err();
        assert_eq!(err.field(), Some(InputField::Imaginary));
        assert_eq!(c, before);
    }

    #[test]
    fn test_rotate_output_formats() {
        let mut c = controller();
        c.confirm("1", "0").unwrap();
        c.rotate("45").unwrap();

        assert_eq!(c.info().get(OutputField::RotationAngle), "45.0° (0.79 rad)");
        assert_eq!(c.info().get(OutputField::RotatedComplex), "0.71 + 0.71i");
        assert_eq!(c.session().current(), Some(Complex::new(1.0, 0.0)));
    }

    #[test]
    fn test_rotate_arc_uses_initial_magnitude() {
        let mut c = controller();
        c.confirm("3", "4").unwrap();
        c.rotate("-90").unwrap();

        let arc = c.scene().arcs().next().unwrap();
        match arc {
            DrawCommand::Arc { radius, .. } => assert!((radius - 200.0).abs() < 1e-9),
            _ => unreachable!(),
        }
        assert!(c.scene().texts().any(|t| t == "-90.0°"));
    }

    #[test]
    fn test_rotate_zero_vector_has_no_arc() {
        let mut c = controller();
        c.confirm("0", "0").unwrap();
        c.rotate("45").unwrap();
        assert_eq!(c.scene().arcs().count(), 0);
        assert_eq!(c.info().get(OutputField::RotatedComplex), "0.00 + 0.00i");
    }

    #[test]
    fn test_invalid_angle_keeps_scene() {
        let mut c = controller();
        c.confirm("1", "1").unwrap();
        let before = c.clone();

        let err = c.rotate("abc").unwrap_err();
        assert_eq!(err.alert_message(), "请输入有效的旋转角度！");
        assert_eq!(c, before);
    }

    #[test]
    fn test_multiply_zero_multiplier_not_drawn() {
        let mut c = controller();
        c.confirm("1", "1").unwrap();
        c.multiply("0", "0").unwrap();

        assert_eq!(c.scene().line_count(Color::GREEN), 0);
        assert_eq!(c.scene().line_count(Color::PURPLE), 3);
        assert_eq!(c.info().get(OutputField::ProductComplex), "0.00 + 0.00i");
    }

    #[test]
    fn test_multiply_clears_rotation_outputs_and_keeps_locks() {
        let mut c = controller();
        c.confirm("1", "1").unwrap();
        c.rotate("90").unwrap();
        let form_before = c.form().clone();

        c.multiply("2", "0").unwrap();
        assert_eq!(c.info().get(OutputField::RotationAngle), "");
        assert_eq!(c.info().get(OutputField::RotatedComplex), "");
        assert_eq!(c.info().get(OutputField::InitialComplex), "1.00 + 1.00i");
        for field in InputField::ALL {
            assert_eq!(c.form().is_enabled(field), form_before.is_enabled(field));
        }
        assert_eq!(c.form().focus(), form_before.focus());
        assert_eq!(c.form().text(InputField::MultiplierReal), "2");
        assert_eq!(c.scene().line_count(Color::RED), 0);
        assert_eq!(c.scene().arcs().count(), 0);
    }

    #[test]
    fn test_multiply_repeatable() {
        let mut c = controller();
        c.confirm("1", "1").unwrap();
        c.multiply("2", "0").unwrap();
        let product = c.multiply("0", "2").unwrap();
        assert_eq!(product, Complex::new(-2.0, 2.0));
        assert_eq!(c.info().get(OutputField::MultiplierComplex), "0.00 + 2.00i");
    }

    #[test]
    fn test_unset_rejects_rotate_and_multiply() {
        let mut c = controller();
        let before = c.clone();

        assert_eq!(c.rotate("45"), Err(InputError::NotConfirmed));
        assert_eq!(c.multiply("0", "1"), Err(InputError::NotConfirmed));
        assert_eq!(c.multiply("x", "y"), Err(InputError::NotConfirmed));
        assert_eq!(c, before);
    }

    #[test]
    fn test_reset_after_rotation() {
        let mut c = controller();
        c.confirm("5", "5").unwrap();
        c.rotate("10").unwrap();
        c.reset();

        assert_eq!(c.session(), &SessionState::Unset);
        assert_eq!(c, controller());
    }
}
