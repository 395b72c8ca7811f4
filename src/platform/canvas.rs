//! Canvas2D renderer
//!
//! Draws a `FrameView`. Missing images are skipped; everything else about
//! layout comes from the view so drawing and hit testing cannot disagree.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{CanvasRenderingContext2d, HtmlImageElement};

use crate::assets::{AssetRegistry, AssetSource};
use crate::consts::*;
use crate::driver::{FrameView, Renderer};
use crate::sim::{EntityKind, EntitySnapshot, Rect, SessionPhase};

const FONT_FAMILY: &str = "Raleway";

pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    images: Rc<RefCell<AssetRegistry<HtmlImageElement>>>,
}

impl CanvasRenderer {
    pub fn new(
        ctx: CanvasRenderingContext2d,
        images: Rc<RefCell<AssetRegistry<HtmlImageElement>>>,
    ) -> Self {
        Self { ctx, images }
    }

    /// Progress screen shown while the asset gate is closed
    pub fn draw_loading(&self, width: f32, height: f32) {
        let (settled, total) = self.images.borrow().progress();
        self.clear(width, height);
        self.text(
            &format!("Loading... {}/{}", settled, total),
            width / 2.0,
            height / 2.0,
            "30px",
            "black",
        );
    }

    fn clear(&self, width: f32, height: f32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn text(&self, text: &str, x: f32, y: f32, size: &str, color: &str) {
        self.ctx.set_font(&format!("{size} {FONT_FAMILY}"));
        self.ctx.set_fill_style_str(color);
        self.ctx.set_text_align("center");
        if let Err(e) = self.ctx.fill_text(text, x as f64, y as f64) {
            log::warn!("fill_text failed: {:?}", e);
        }
    }

    fn fill_rect(&self, rect: &Rect, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_rect(
            rect.x() as f64,
            rect.y() as f64,
            rect.width() as f64,
            rect.height() as f64,
        );
    }

    /// Draw an image if it loaded; absent images are silently skipped
    fn image(&self, key: &str, rect: &Rect) {
        let images = self.images.borrow();
        let Some(image) = images.get(key) else {
            return;
        };
        if let Err(e) = self
            .ctx
            .draw_image_with_html_image_element_and_dw_and_dh(
                image,
                rect.x() as f64,
                rect.y() as f64,
                rect.width() as f64,
                rect.height() as f64,
            )
        {
            log::warn!("draw_image failed for {}: {:?}", key, e);
        }
    }

    fn draw_start(&self, view: &FrameView<'_>) {
        let cx = view.viewport.x / 2.0;
        self.text("Heroes Unleashed", cx, 70.0, "bold 60px", "black");
        self.text("Welcome to the Game!", cx, 110.0, "30px", "black");

        if let Some(button) = view.hit_regions.first() {
            self.fill_rect(&button.rect, "green");
            self.text("Start", cx, 165.0, "30px", "black");
        }
    }

    fn draw_character_select(&self, view: &FrameView<'_>) {
        self.text("Select Your Character", view.viewport.x / 2.0, 50.0, "30px", "black");

        self.ctx.set_stroke_style_str("black");
        self.ctx.set_line_width(5.0);
        for region in &view.hit_regions {
            let rect = &region.rect;
            if let Some(name) = view.hero_names.get(region.id) {
                self.text(name, rect.center().x, rect.y() - 20.0, "30px", "black");
            }
            self.ctx.stroke_rect(
                rect.x() as f64,
                rect.y() as f64,
                rect.width() as f64,
                rect.height() as f64,
            );
            self.image(&region.asset_key, rect);
        }
    }

    fn draw_suit_select(&self, view: &FrameView<'_>) {
        self.text("Select a Suit", view.viewport.x / 2.0, 50.0, "30px", "black");
        for region in &view.hit_regions {
            self.image(&region.asset_key, &region.rect);
        }
    }

    fn draw_entity(&self, entity: &EntitySnapshot<'_>) {
        self.image(entity.sprite_key, &entity.rect);

        if entity.kind == EntityKind::Villain {
            if let Some(ratio) = entity.health_ratio {
                let bar = Rect::new(
                    entity.rect.x(),
                    entity.rect.y() - HEALTH_BAR_OFFSET,
                    HEALTH_BAR_WIDTH,
                    HEALTH_BAR_HEIGHT,
                );
                self.fill_rect(&bar, "red");
                let filled = Rect::new(bar.x(), bar.y(), bar.width() * ratio, bar.height());
                self.fill_rect(&filled, "green");
            }
        }
    }
}

impl Renderer for CanvasRenderer {
    fn render(&mut self, view: &FrameView<'_>) {
        self.clear(view.viewport.x, view.viewport.y);
        match view.phase {
            SessionPhase::Start => self.draw_start(view),
            SessionPhase::CharacterSelect => self.draw_character_select(view),
            SessionPhase::SuitSelect => self.draw_suit_select(view),
            SessionPhase::Playing => {
                for entity in &view.entities {
                    self.draw_entity(entity);
                }
            }
        }
    }
}
