use egui;

use crate::controller::{Field, LoginController, MessageTone};
use crate::deform::DeformTuning;
use crate::render::{DisplayList, FaceStyle};

/// Text typed into the login form.
#[derive(Clone, Debug, Default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// Paint the glyphs of a recorded frame. `surface_origin` is the top-left corner
/// of the face surface in egui points.
pub fn paint_glyphs(painter: &egui::Painter, list: &DisplayList, surface_origin: egui::Pos2) {
    for (position, text, style) in list.glyphs() {
        painter.text(
            surface_origin + egui::vec2(position[0], position[1]),
            egui::Align2::CENTER_BOTTOM,
            text,
            egui::FontId::proportional(style.size),
            color32(style.color),
        );
    }
}

/// Tuning sliders and colors. Returns whether anything changed.
pub fn face_control_panel(ctx: &egui::Context, tuning: &mut DeformTuning, style: &mut FaceStyle) -> bool {
    let mut changed = false;
    egui::SidePanel::right("face_controls")
        .default_width(260.0)
        .show(ctx, |ui| {
            ui.heading("Face Controls");
            ui.separator();

            changed |= ui
                .add(egui::Slider::new(&mut tuning.vertical_bulge, 0.0..=0.3).text("Vertical Bulge"))
                .changed();
            changed |= ui
                .add(egui::Slider::new(&mut tuning.horizontal_bulge, 0.0..=0.5).text("Horizontal Bulge"))
                .changed();
            changed |= ui
                .add(egui::Slider::new(&mut tuning.dead_zone, 0.0..=10.0).text("Dead Zone"))
                .changed();
            changed |= ui
                .add(
                    egui::Slider::new(&mut tuning.neutral_threshold, 0.0..=0.2)
                        .text("Neutral Threshold"),
                )
                .changed();

            ui.separator();

            egui::CollapsingHeader::new("Appearance")
                .default_open(false)
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.label("Face Color");
                        changed |= color_edit_rgb(ui, &mut style.face_color);
                    });
                    ui.horizontal(|ui| {
                        ui.label("Outline Color");
                        changed |= color_edit_rgb(ui, &mut style.outline_color);
                    });
                    ui.horizontal(|ui| {
                        ui.label("Glyph Color");
                        changed |= color_edit_rgb(ui, &mut style.glyph_color);
                    });
                    changed |= ui
                        .add(egui::Slider::new(&mut style.outline_width, 0.0..=8.0).text("Outline Width"))
                        .changed();
                    changed |= ui
                        .add(egui::Slider::new(&mut style.glyph_scale, 0.05..=0.5).text("Glyph Size"))
                        .changed();
                });

            ui.separator();

            if ui.button("Reset").clicked() {
                *tuning = DeformTuning::default();
                *style = FaceStyle::default();
                changed = true;
            }
        });
    changed
}

/// Username/password form anchored below the face, `top` points from the top.
pub fn login_panel(ctx: &egui::Context, form: &mut LoginForm, controller: &mut LoginController, top: f32) {
    egui::Window::new("Login")
        .title_bar(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_TOP, egui::vec2(0.0, top))
        .show(ctx, |ui| {
            let user = ui.add(egui::TextEdit::singleline(&mut form.username).hint_text("Username"));
            track_focus(controller, &user, Field::Username);

            let pass = ui.add(
                egui::TextEdit::singleline(&mut form.password)
                    .password(true)
                    .hint_text("Password"),
            );
            track_focus(controller, &pass, Field::Password);

            let entered = pass.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            if ui.button("Sign in").clicked() || entered {
                controller.submit(&form.username, &form.password);
            }

            let color = match controller.tone() {
                MessageTone::Neutral => ui.visuals().text_color(),
                MessageTone::Success => egui::Color32::from_rgb(22, 163, 74),
                MessageTone::Error => egui::Color32::from_rgb(220, 38, 38),
            };
            ui.colored_label(color, controller.message());
        });
}

fn track_focus(controller: &mut LoginController, response: &egui::Response, field: Field) {
    if response.gained_focus() {
        controller.input_focused(field);
    }
    if response.lost_focus() {
        controller.input_blurred();
    }
}

fn color32(color: [f32; 3]) -> egui::Color32 {
    egui::Color32::from_rgb(
        (color[0] * 255.0) as u8,
        (color[1] * 255.0) as u8,
        (color[2] * 255.0) as u8,
    )
}

fn color_edit_rgb(ui: &mut egui::Ui, color: &mut [f32; 3]) -> bool {
    let mut rgba = color32(*color);
    if ui.color_edit_button_srgba(&mut rgba).changed() {
        color[0] = rgba.r() as f32 / 255.0;
        color[1] = rgba.g() as f32 / 255.0;
        color[2] = rgba.b() as f32 / 255.0;
        return true;
    }
    false
}
