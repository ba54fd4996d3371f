//! Contains all application code, including application state and drawing logic

mod canvas;
mod diagram;
mod icon;

use canvas::Canvas;
use diagram::lens::{ImageDistance, LensKind};
use diagram::{Diagram, LensConfiguration};
use icon::EyeIcons;

use egui::{Align2, Color32, FontId, Pos2, Rect, Stroke, Style, TextureHandle, Ui, pos2, vec2};
use strum::IntoEnumIterator;

const INVALID_INPUT_MESSAGE: &str =
    "Invalid input! Please enter numerical values for focal length and object distance.";

const AXIS_COLOUR: Color32 = Color32::from_rgb(200, 200, 200);
const LENS_LINE_COLOUR: Color32 = Color32::from_rgb(130, 130, 130);
const RAY_COLOUR: Color32 = Color32::from_rgb(255, 80, 80);
const LABEL_COLOUR: Color32 = Color32::from_rgb(220, 220, 220);
const CAPTION_COLOUR: Color32 = Color32::from_rgb(80, 200, 120);
const ERROR_COLOUR: Color32 = Color32::from_rgb(255, 80, 80);

const ICON_SCREEN_SIZE: f32 = 32.0;
const LENS_FILL_ALPHA: u8 = 110;

pub struct LensApp {
    lens_kind: LensKind,
    focal_length_input: String,
    object_distance_input: String,
    error: Option<&'static str>,
    diagram: Diagram,
    icons: EyeIcons,
}

impl LensApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        Self::with_icons(EyeIcons::load(&cc.egui_ctx))
    }

    fn with_icons(icons: EyeIcons) -> Self {
        let config = LensConfiguration::default();
        LensApp {
            lens_kind: config.kind,
            focal_length_input: config.focal_length.to_string(),
            object_distance_input: config.object_distance.to_string(),
            error: None,
            diagram: Diagram::compute(config),
            icons,
        }
    }

    /// Parses both input fields and replaces the diagram, or surfaces the
    /// inline error and leaves the current diagram in place.
    fn apply_update(&mut self) {
        let focal_length = self.focal_length_input.trim().parse::<f32>();
        let object_distance = self.object_distance_input.trim().parse::<f32>();
        match (focal_length, object_distance) {
            (Ok(focal_length), Ok(object_distance)) => {
                self.error = None;
                self.diagram = Diagram::compute(LensConfiguration {
                    kind: self.lens_kind,
                    focal_length,
                    object_distance,
                });
            }
            _ => self.error = Some(INVALID_INPUT_MESSAGE),
        }
    }

    fn draw_marker(&self, canvas: &Canvas, pos: Pos2, label: &str, texture: &Option<TextureHandle>) {
        match texture {
            Some(texture) => {
                canvas.draw_image(texture, pos, vec2(ICON_SCREEN_SIZE, ICON_SCREEN_SIZE));
                canvas.draw_text(
                    pos + vec2(0.0, 0.5),
                    Align2::CENTER_BOTTOM,
                    label,
                    14.0,
                    LABEL_COLOUR,
                );
            }
            None => canvas.draw_text(pos, Align2::CENTER_CENTER, label, 14.0, LABEL_COLOUR),
        }
    }

    fn draw_diagram(&self, ui: &Ui, extent: Rect) {
        let canvas = Canvas::new(ui, extent, self.diagram.x_bounds, diagram::HEIGHT_RANGE);

        canvas.draw_hline(0.0, Stroke::new(1.0, AXIS_COLOUR));
        canvas.draw_dashed_vline(0.0, Stroke::new(1.0, LENS_LINE_COLOUR));

        let (fr, fg, fb) = self.diagram.config.kind.fill();
        let (or, og, ob) = self.diagram.config.kind.outline();
        canvas.draw_ellipse(
            pos2(0.0, 0.0),
            vec2(diagram::LENS_WIDTH / 2.0, diagram::LENS_HEIGHT / 2.0),
            Color32::from_rgba_unmultiplied(fr, fg, fb, LENS_FILL_ALPHA),
            Stroke::new(1.5, Color32::from_rgb(or, og, ob)),
        );

        self.draw_marker(&canvas, self.diagram.object_marker, "Object", &self.icons.forward);

        match self.diagram.image_distance {
            ImageDistance::Finite(d_i) => {
                if let Some(marker) = self.diagram.image_marker {
                    self.draw_marker(&canvas, marker, "Image", &self.icons.mirrored);
                }
                canvas.draw_text(
                    pos2(d_i, -2.0),
                    Align2::CENTER_CENTER,
                    &format!("Image Distance: {d_i:.2} cm"),
                    14.0,
                    CAPTION_COLOUR,
                );
            }
            ImageDistance::Infinite => canvas.draw_text(
                pos2(0.5, 1.2),
                Align2::CENTER_CENTER,
                "Image at Infinity",
                16.0,
                ERROR_COLOUR,
            ),
        }

        for ray in &self.diagram.rays {
            canvas.draw_dashed_polyline(ray, Stroke::new(1.5, RAY_COLOUR));
        }

        ui.painter().text(
            pos2(extent.center().x, extent.top() + 8.0),
            Align2::CENTER_TOP,
            self.diagram.title(),
            FontId::proportional(16.0),
            LABEL_COLOUR,
        );

        // axis captions
        ui.painter().text(
            pos2(extent.center().x, extent.bottom() - 8.0),
            Align2::CENTER_BOTTOM,
            "Position (cm)",
            FontId::proportional(12.0),
            LABEL_COLOUR,
        );
        ui.painter().text(
            pos2(extent.left() + 8.0, extent.center().y),
            Align2::LEFT_CENTER,
            "Height (arbitrary units)",
            FontId::proportional(12.0),
            LABEL_COLOUR,
        );

        // legend, upper right
        let mut anchor = pos2(extent.right() - 8.0, extent.top() + 8.0);
        let mut legend_entry = |label: &str, colour: Color32| {
            ui.painter()
                .text(anchor, Align2::RIGHT_TOP, label, FontId::proportional(12.0), colour);
            anchor.y += 16.0;
        };
        legend_entry("Lens Position", LENS_LINE_COLOUR);
        if !self.diagram.rays.is_empty() {
            legend_entry("Ray 1", RAY_COLOUR);
            legend_entry("Ray 2", RAY_COLOUR);
        }
    }
}

impl eframe::App for LensApp {
    /// Called each time the UI needs repainting
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // draws the input controls on the left of the window
        egui::SidePanel::left("controls")
            .resizable(false)
            .default_width(200.0)
            .show(ctx, |ui| {
                ui.label("Lens Type");
                egui::ComboBox::from_id_salt("lens-type")
                    .selected_text(self.lens_kind.name())
                    .show_ui(ui, |ui| {
                        for kind in LensKind::iter() {
                            ui.selectable_value(&mut self.lens_kind, kind, kind.name());
                        }
                    });

                ui.add_space(8.0);
                ui.label("Focal Length (cm)");
                ui.text_edit_singleline(&mut self.focal_length_input);

                ui.add_space(8.0);
                ui.label("Object Distance (cm)");
                ui.text_edit_singleline(&mut self.object_distance_input);

                ui.add_space(8.0);
                if ui.button("Update Diagram").clicked() {
                    self.apply_update();
                }

                if let Some(message) = self.error {
                    ui.colored_label(ERROR_COLOUR, message);
                }
            });

        // draws the diagram in the main panel of the window
        let style = Style::default();
        egui::CentralPanel::default()
            .frame(egui::Frame::canvas(&style))
            .show(ctx, |ui| {
                let extent = ui.max_rect();
                self.draw_diagram(ui, extent);
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> LensApp {
        LensApp::with_icons(EyeIcons::missing())
    }

    /// Runs one headless frame of the diagram and collects every text
    /// string it paints.
    fn painted_texts(app: &LensApp) -> Vec<String> {
        let ctx = egui::Context::default();
        let input = egui::RawInput {
            screen_rect: Some(Rect::from_min_size(pos2(0.0, 0.0), vec2(800.0, 600.0))),
            ..Default::default()
        };
        let output = ctx.run(input, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                let extent = ui.max_rect();
                app.draw_diagram(ui, extent);
            });
        });
        output
            .shapes
            .iter()
            .filter_map(|clipped| match &clipped.shape {
                egui::Shape::Text(text) => Some(text.galley.text().to_string()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn starts_with_the_default_configuration() {
        let app = app();
        assert_eq!(app.focal_length_input, "10");
        assert_eq!(app.object_distance_input, "20");
        assert_eq!(app.error, None);
        assert_eq!(app.diagram.config, LensConfiguration::default());
    }

    #[test]
    fn invalid_input_sets_the_error_and_keeps_the_diagram() {
        let mut app = app();
        let before = app.diagram.clone();
        app.focal_length_input = "abc".to_string();
        app.apply_update();
        assert_eq!(app.error, Some(INVALID_INPUT_MESSAGE));
        assert_eq!(app.diagram, before);
    }

    #[test]
    fn valid_update_clears_the_error_and_replaces_the_diagram() {
        let mut app = app();
        app.object_distance_input = "not a number".to_string();
        app.apply_update();
        assert!(app.error.is_some());

        app.lens_kind = LensKind::Concave;
        app.focal_length_input = "5".to_string();
        app.object_distance_input = "15".to_string();
        app.apply_update();
        assert_eq!(app.error, None);
        assert_eq!(
            app.diagram.config,
            LensConfiguration {
                kind: LensKind::Concave,
                focal_length: 5.0,
                object_distance: 15.0,
            }
        );
    }

    #[test]
    fn diagram_paints_axis_captions() {
        let texts = painted_texts(&app());
        assert!(texts.iter().any(|t| t == "Position (cm)"));
        assert!(texts.iter().any(|t| t == "Height (arbitrary units)"));
    }

    #[test]
    fn infinite_image_paints_the_infinity_text() {
        let mut app = app();
        app.focal_length_input = "10".to_string();
        app.object_distance_input = "10".to_string();
        app.apply_update();
        let texts = painted_texts(&app);
        assert!(texts.iter().any(|t| t == "Image at Infinity"));
        assert!(!texts.iter().any(|t| t.starts_with("Image Distance:")));
    }

    #[test]
    fn inputs_tolerate_surrounding_whitespace() {
        let mut app = app();
        app.focal_length_input = " 10 ".to_string();
        app.object_distance_input = "\t20\n".to_string();
        app.apply_update();
        assert_eq!(app.error, None);
    }
}
