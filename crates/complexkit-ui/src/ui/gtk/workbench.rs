//! Main workbench panel: inputs, action buttons, results, and the plane.

use complexkit_core::types::{shared, Shared};
use complexkit_core::{InputError, InputField};
use complexkit_settings::ViewSettings;
use complexkit_visualizer::PlaneTransform;
use complexkit_workbench::{OutputField, Trigger, WorkbenchController};
use gtk4::prelude::*;
use gtk4::{Align, Box, Button, Entry, Grid, Label, Orientation, Separator};
use std::rc::Rc;

use super::dialogs::{parent_window, show_alert};
use super::plane_view::PlaneView;

fn field_caption(field: InputField) -> &'static str {
    match field {
        InputField::Real => "Real part a:",
        InputField::Imaginary => "Imaginary part b:",
        InputField::Angle => "Rotation angle (°):",
        InputField::MultiplierReal => "Multiplier real c:",
        InputField::MultiplierImaginary => "Multiplier imaginary d:",
    }
}

fn trigger_label(trigger: Trigger) -> &'static str {
    match trigger {
        Trigger::ConfirmComplex => "确定复数",
        Trigger::ConfirmRotate => "确定旋转",
        Trigger::ConfirmMultiply => "乘以复数",
        Trigger::ResetAll => "全部重置",
    }
}

pub struct WorkbenchView {
    pub widget: Box,
    controller: Shared<WorkbenchController>,
    entries: [Entry; 5],
    buttons: [Button; 4],
    outputs: [Label; 5],
    plane: PlaneView,
}

impl WorkbenchView {
    pub fn new(view: &ViewSettings) -> Rc<Self> {
        let transform =
            PlaneTransform::with_size(view.canvas_width as f64, view.canvas_height as f64);
        let controller = shared(WorkbenchController::new(transform));

        let widget = Box::new(Orientation::Horizontal, 12);
        widget.set_margin_start(12);
        widget.set_margin_end(12);
        widget.set_margin_top(12);
        widget.set_margin_bottom(12);

        let sidebar = Box::new(Orientation::Vertical, 8);
        sidebar.add_css_class("workbench-sidebar");
        sidebar.set_width_request(280);

        // Inputs
        let input_grid = Grid::builder().row_spacing(6).column_spacing(8).build();
        let entries = InputField::ALL.map(|field| {
            let entry = Entry::new();
            entry.set_text(field.default_text());
            entry.set_width_chars(8);
            entry.set_input_purpose(gtk4::InputPurpose::Number);
            let caption = Label::builder()
                .label(field_caption(field))
                .halign(Align::Start)
                .build();
            let row = field.index() as i32;
            input_grid.attach(&caption, 0, row, 1, 1);
            input_grid.attach(&entry, 1, row, 1, 1);
            entry
        });
        sidebar.append(&input_grid);

        // Actions
        let button_box = Box::new(Orientation::Horizontal, 6);
        button_box.set_homogeneous(true);
        let buttons = Trigger::ALL.map(|trigger| {
            let button = Button::with_label(trigger_label(trigger));
            button_box.append(&button);
            button
        });
        sidebar.append(&button_box);

        sidebar.append(&Separator::new(Orientation::Horizontal));

        // Results
        let output_grid = Grid::builder().row_spacing(4).column_spacing(8).build();
        let outputs = OutputField::ALL.map(|field| {
            let caption = Label::builder()
                .label(field.caption())
                .halign(Align::Start)
                .css_classes(vec!["result-caption"])
                .build();
            let value = Label::builder()
                .halign(Align::Start)
                .selectable(true)
                .css_classes(vec!["result-value"])
                .build();
            let row = field.index() as i32;
            output_grid.attach(&caption, 0, row, 1, 1);
            output_grid.attach(&value, 1, row, 1, 1);
            value
        });
        sidebar.append(&output_grid);

        widget.append(&sidebar);

        let plane = PlaneView::new(
            controller.clone(),
            view.canvas_width as i32,
            view.canvas_height as i32,
        );
        plane.widget.set_hexpand(true);
        widget.append(&plane.widget);

        let view = Rc::new(Self {
            widget,
            controller,
            entries,
            buttons,
            outputs,
            plane,
        });
        view.connect_signals();
        view.sync_from_controller();
        view
    }

    fn entry(&self, field: InputField) -> &Entry {
        &self.entries[field.index()]
    }

    fn button(&self, trigger: Trigger) -> &Button {
        &self.buttons[trigger.index()]
    }

    fn connect_signals(self: &Rc<Self>) {
        for field in InputField::ALL {
            let controller = self.controller.clone();
            self.entry(field).connect_changed(move |entry| {
                if let Ok(mut c) = controller.try_borrow_mut() {
                    c.set_input_text(field, entry.text().as_str());
                }
            });
        }

        for trigger in Trigger::ALL {
            let view = Rc::clone(self);
            self.button(trigger)
                .connect_clicked(move |_| view.on_trigger(trigger));
        }

        // Enter in an input fires the action that field belongs to.
        for field in InputField::ALL {
            let trigger = match field {
                InputField::Real | InputField::Imaginary => Trigger::ConfirmComplex,
                InputField::Angle => Trigger::ConfirmRotate,
                InputField::MultiplierReal | InputField::MultiplierImaginary => {
                    Trigger::ConfirmMultiply
                }
            };
            let view = Rc::clone(self);
            self.entry(field)
                .connect_activate(move |_| view.on_trigger(trigger));
        }
    }

    fn on_trigger(&self, trigger: Trigger) {
        let text = |field| self.entry(field).text().to_string();
        tracing::debug!("Trigger {:?}", trigger);

        let result: Result<(), InputError> = {
            let mut c = self.controller.borrow_mut();
            match trigger {
                Trigger::ConfirmComplex => c
                    .confirm(&text(InputField::Real), &text(InputField::Imaginary))
                    .map(|_| ()),
                Trigger::ConfirmRotate => c.rotate(&text(InputField::Angle)).map(|_| ()),
                Trigger::ConfirmMultiply => c
                    .multiply(
                        &text(InputField::MultiplierReal),
                        &text(InputField::MultiplierImaginary),
                    )
                    .map(|_| ()),
                Trigger::ResetAll => {
                    c.reset();
                    Ok(())
                }
            }
        };

        match result {
            Ok(()) => self.sync_from_controller(),
            Err(e) => show_alert(e.alert_message(), parent_window(&self.widget).as_ref()),
        }
    }

    /// Push controller state into the widgets and repaint the plane.
    fn sync_from_controller(&self) {
        // Snapshot first: setting entry text re-enters the changed handler.
        let (form, info) = {
            let c = self.controller.borrow();
            (c.form().clone(), c.info().clone())
        };

        for field in InputField::ALL {
            let entry = self.entry(field);
            if entry.text().as_str() != form.text(field) {
                entry.set_text(form.text(field));
            }
            entry.set_sensitive(form.is_enabled(field));
        }

        for trigger in Trigger::ALL {
            self.button(trigger)
                .set_sensitive(form.is_trigger_enabled(trigger));
        }

        for (label, field) in self.outputs.iter().zip(OutputField::ALL) {
            label.set_text(info.get(field));
        }

        if let Some(field) = form.focus() {
            self.entry(field).grab_focus();
        }

        self.plane.redraw();
    }
}
