//! Helper struct for drawing objects in world space onto the screen.
//! The world rect is stretched to fill the screen area, so x and y carry
//! independent scales (the diagram's height units are arbitrary).

use egui::{
    Align2, Color32, FontId, Pos2, Rangef, Rect, Stroke, TextureHandle, Ui, Vec2,
    epaint::EllipseShape, pos2, vec2,
};

const DASH_LENGTH: f32 = 6.0;
const GAP_LENGTH: f32 = 4.0;

pub struct Canvas<'a> {
    ui: &'a Ui,
    screen_extent: Rect,
    world: Rect,
}

impl<'a> Canvas<'a> {
    pub fn new(ui: &'a Ui, screen_extent: Rect, x_bounds: Rangef, y_bounds: Rangef) -> Self {
        Canvas {
            ui,
            screen_extent,
            world: Rect::from_x_y_ranges(x_bounds, y_bounds),
        }
    }

    fn world_to_screen_x(&self, x: f32) -> f32 {
        self.screen_extent.left()
            + (x - self.world.min.x) / self.world.width() * self.screen_extent.width()
    }

    // world y grows upwards, screen y downwards
    fn world_to_screen_y(&self, y: f32) -> f32 {
        self.screen_extent.bottom()
            - (y - self.world.min.y) / self.world.height() * self.screen_extent.height()
    }

    fn world_to_screen_pos(&self, pos: Pos2) -> Pos2 {
        pos2(self.world_to_screen_x(pos.x), self.world_to_screen_y(pos.y))
    }

    pub fn draw_hline(&self, y: f32, stroke: Stroke) {
        self.ui
            .painter()
            .hline(self.screen_extent.x_range(), self.world_to_screen_y(y), stroke);
    }

    pub fn draw_dashed_vline(&self, x: f32, stroke: Stroke) {
        let screen_x = self.world_to_screen_x(x);
        self.ui.painter().extend(egui::Shape::dashed_line(
            &[
                pos2(screen_x, self.screen_extent.top()),
                pos2(screen_x, self.screen_extent.bottom()),
            ],
            stroke,
            DASH_LENGTH,
            GAP_LENGTH,
        ));
    }

    pub fn draw_dashed_polyline(&self, points: &[Pos2], stroke: Stroke) {
        if points.len() < 2 {
            log::error!("Slice passed to draw_dashed_polyline has too few points");
            return;
        }
        let screen_points: Vec<Pos2> = points
            .iter()
            .map(|p| self.world_to_screen_pos(*p))
            .collect();
        self.ui.painter().extend(egui::Shape::dashed_line(
            &screen_points,
            stroke,
            DASH_LENGTH,
            GAP_LENGTH,
        ));
    }

    pub fn draw_ellipse(&self, centre: Pos2, radius: Vec2, fill: Color32, stroke: Stroke) {
        let screen_radius = vec2(
            radius.x / self.world.width() * self.screen_extent.width(),
            radius.y / self.world.height() * self.screen_extent.height(),
        );
        self.ui.painter().add(EllipseShape {
            center: self.world_to_screen_pos(centre),
            radius: screen_radius,
            fill,
            stroke,
        });
    }

    pub fn draw_text(&self, pos: Pos2, anchor: Align2, text: &str, size: f32, colour: Color32) {
        self.ui.painter().text(
            self.world_to_screen_pos(pos),
            anchor,
            text,
            FontId::proportional(size),
            colour,
        );
    }

    /// Draws a texture centred on a world position with a fixed on-screen size.
    pub fn draw_image(&self, texture: &TextureHandle, centre: Pos2, screen_size: Vec2) {
        let rect = Rect::from_center_size(self.world_to_screen_pos(centre), screen_size);
        self.ui.painter().image(
            texture.id(),
            rect,
            Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0)),
            Color32::WHITE,
        );
    }
}
