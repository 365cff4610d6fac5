//! egui scenes for the splash screen and the open book.
//!
//! Page images are drawn as labelled placeholder panels; resolving the
//! deck's image sources to real pixels is asset-pipeline territory the
//! viewer core deliberately knows nothing about.

use egui::{
    Align2, Button, Color32, FontId, Rect, RichText, Sense, Shape, Stroke, Ui, pos2, vec2,
};
use lumabook_core::{
    deck::{ImageRef, LUMA_REFERENCES, SlideContent},
    render::TransitionFrame,
};

const NIGHT_BLUE: Color32 = Color32::from_rgb(0x1A, 0x2C, 0x4D);
const CREAM: Color32 = Color32::from_rgb(0xF1, 0xFA, 0xEE);
const GOLD: Color32 = Color32::from_rgb(0xFF, 0xD1, 0x66);
const RED: Color32 = Color32::from_rgb(0xE6, 0x39, 0x46);
const TEAL: Color32 = Color32::from_rgb(0x4E, 0xCD, 0xC4);

const FRAME_INSET: f32 = 8.0;
const BOOK_HEIGHT_FRACTION: f32 = 0.75;

pub fn night_frame() -> egui::Frame {
    egui::Frame::default().fill(NIGHT_BLUE)
}

/// Landing scene. Returns true when the continue affordance was clicked.
pub fn splash(ui: &mut Ui, title: &str) -> bool {
    let full = ui.available_rect_before_wrap();

    ui.painter().text(
        full.center(),
        Align2::CENTER_CENTER,
        title,
        FontId::proportional(64.0),
        GOLD,
    );

    // Downward triangle at the bottom edge, the "start reading" affordance.
    let center = pos2(full.center().x, full.max.y - 48.0);
    let hit = Rect::from_center_size(center, vec2(64.0, 48.0));
    let response = ui.allocate_rect(hit, Sense::click());
    ui.painter().add(Shape::convex_polygon(
        vec![
            pos2(center.x - 30.0, center.y - 20.0),
            pos2(center.x + 30.0, center.y - 20.0),
            pos2(center.x, center.y + 20.0),
        ],
        CREAM,
        Stroke::NONE,
    ));

    response.clicked()
}

/// Book scene. Returns true when the fullscreen toggle was clicked.
pub fn book(
    ui: &mut Ui,
    slide: &SlideContent<'_>,
    slide_index: u16,
    slide_total: u16,
    turn: Option<TransitionFrame>,
    fullscreen_active: bool,
) -> bool {
    let full = ui.available_rect_before_wrap();
    let book_rect = Rect::from_min_max(
        full.min,
        pos2(full.max.x, full.min.y + full.height() * BOOK_HEIGHT_FRACTION),
    );
    let refs_rect = Rect::from_min_max(pos2(full.min.x, book_rect.max.y), full.max);

    draw_book(ui, book_rect, slide, turn);
    draw_references(ui, refs_rect);

    ui.painter().text(
        book_rect.right_bottom() - vec2(16.0, 16.0),
        Align2::RIGHT_BOTTOM,
        format!("{} / {}", slide_index + 1, slide_total),
        FontId::proportional(14.0),
        NIGHT_BLUE,
    );

    let label = if fullscreen_active {
        "Salir"
    } else {
        "Pantalla Completa"
    };
    let button_rect = Rect::from_min_size(
        pos2(full.max.x - 176.0, full.min.y + FRAME_INSET * 2.0),
        vec2(160.0, 28.0),
    );
    ui.put(
        button_rect,
        Button::new(RichText::new(label).color(CREAM).strong()).fill(RED),
    )
    .clicked()
}

/// Double frame (red, gold) around the cream page area, then the slide.
fn draw_book(ui: &Ui, rect: Rect, slide: &SlideContent<'_>, turn: Option<TransitionFrame>) {
    let painter = ui.painter();
    painter.rect_filled(rect, 0.0, RED);
    let gold = rect.shrink(FRAME_INSET);
    painter.rect_filled(gold, 0.0, GOLD);
    let page = gold.shrink(FRAME_INSET);
    painter.rect_filled(page, 0.0, CREAM);

    match slide {
        SlideContent::Cover { image } | SlideContent::Ending { image } => {
            draw_page_panel(ui, page.shrink(32.0), image);
        }
        SlideContent::Spread { left, right } => {
            let split_x = page.center().x;
            let left_half = Rect::from_min_max(page.min, pos2(split_x, page.max.y));
            let right_half = Rect::from_min_max(pos2(split_x, page.min.y), page.max);
            draw_page_panel(ui, left_half.shrink(24.0), left);
            draw_page_panel(ui, right_half.shrink(24.0), right);

            // Book spine.
            ui.painter().line_segment(
                [pos2(split_x, page.min.y), pos2(split_x, page.max.y)],
                Stroke::new(2.0, NIGHT_BLUE),
            );
        }
    }

    // Darken the page while a turn is in flight, deepest mid-animation.
    if let Some(frame) = turn {
        let pct = frame.progress_pct.min(100) as u32;
        let ramp = 100 - (2 * pct).abs_diff(100);
        let alpha = (ramp * 160 / 100) as u8;
        ui.painter()
            .rect_filled(page, 0.0, Color32::from_black_alpha(alpha));
    }
}

/// Placeholder panel standing in for one page image.
fn draw_page_panel(ui: &Ui, rect: Rect, image: &ImageRef<'_>) {
    let painter = ui.painter();
    painter.rect_stroke(rect, 8.0, Stroke::new(1.5, NIGHT_BLUE));
    painter.text(
        rect.center(),
        Align2::CENTER_CENTER,
        image.alt_text,
        FontId::proportional(20.0),
        NIGHT_BLUE,
    );
    painter.text(
        pos2(rect.center().x, rect.max.y - 14.0),
        Align2::CENTER_CENTER,
        image.source,
        FontId::monospace(11.0),
        NIGHT_BLUE.linear_multiply(0.6),
    );
}

fn draw_references(ui: &Ui, rect: Rect) {
    let painter = ui.painter();
    painter.text(
        rect.min + vec2(24.0, 16.0),
        Align2::LEFT_TOP,
        "Referencias:",
        FontId::proportional(22.0),
        GOLD,
    );

    let columns = LUMA_REFERENCES.len() as f32;
    let column_width = (rect.width() - 48.0) / columns;
    for (column, entries) in LUMA_REFERENCES.iter().enumerate() {
        let x = rect.min.x + 24.0 + column as f32 * column_width;
        for (row, entry) in entries.iter().enumerate() {
            let y = rect.min.y + 56.0 + row as f32 * 22.0;
            painter.text(
                pos2(x, y),
                Align2::LEFT_TOP,
                "\u{2022}",
                FontId::proportional(14.0),
                TEAL,
            );
            painter.text(
                pos2(x + 14.0, y),
                Align2::LEFT_TOP,
                *entry,
                FontId::proportional(14.0),
                CREAM,
            );
        }
    }
}
