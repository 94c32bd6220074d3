//! Painting helpers: turn the controller's visual state into egui shapes.
//!
//! Everything here is read-only over [`SlideVisual`]/[`StageVisual`]; the
//! controller never knows it is being drawn.

use eframe::egui;

use crate::controller::{CHROME_LOGO, CHROME_PLAY, CHROME_TITLE, SlideVisual, StageVisual};
use crate::deck::SlideSpec;
use crate::theme::{self, Theme};

/// Scale factor relative to the reference viewport, as in a 1920x1080 design.
pub fn compute_scale(rect: egui::Rect) -> f32 {
    (rect.width() / 1920.0).min(rect.height() / 1080.0)
}

/// Viewport rect for one slide: vertical offset by `y_percent`, then the
/// stage container transform (press scale and intro stretch) around the
/// viewport center.
pub fn slide_rect(viewport: egui::Rect, visual: &SlideVisual, stage: &StageVisual) -> egui::Rect {
    let offset = egui::vec2(0.0, visual.y_percent / 100.0 * viewport.height());
    let rect = viewport.translate(offset);

    let scale = stage.container_scale * visual.scale;
    let size = egui::vec2(
        rect.width() * scale,
        rect.height() * scale * stage.container_stretch,
    );
    egui::Rect::from_center_size(rect.center(), size)
}

/// Draw one slide: backdrop, then its chrome (title, play button, slide
/// logo) at the offsets the controller is animating.
pub fn draw_slide(
    ui: &egui::Ui,
    spec: &SlideSpec,
    visual: &SlideVisual,
    theme: &Theme,
    index: usize,
    rect: egui::Rect,
    poster: Option<&egui::TextureHandle>,
    scale: f32,
) {
    if !visual.visible || visual.opacity <= 0.0 {
        return;
    }
    let opacity = visual.opacity.clamp(0.0, 1.0);

    let backdrop = spec
        .background
        .as_deref()
        .and_then(theme::parse_hex)
        .unwrap_or_else(|| theme.slide_backdrop(index));
    ui.painter()
        .rect_filled(rect, 0.0, Theme::with_opacity(backdrop, opacity));

    if let Some(texture) = poster {
        let tint = Theme::with_opacity(egui::Color32::WHITE, opacity);
        let uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
        ui.painter().image(texture.id(), rect, uv, tint);
    }

    // Playing state: dim the backdrop so the media reads as foreground.
    if visual.playing {
        ui.painter().rect_filled(
            rect,
            0.0,
            Theme::with_opacity(egui::Color32::BLACK, 0.35 * opacity),
        );
    }

    let title_chrome = visual.chrome[CHROME_TITLE];
    let title_opacity = opacity * title_chrome.opacity;
    if title_opacity > 0.01 {
        let color = Theme::with_opacity(theme.heading_color, title_opacity);
        let galley = ui.painter().layout_no_wrap(
            spec.title.clone(),
            egui::FontId::proportional(theme.title_size * scale),
            color,
        );
        let pos = egui::pos2(
            rect.center().x - galley.rect.width() / 2.0,
            rect.center().y - galley.rect.height() / 2.0 + title_chrome.offset * scale,
        );
        ui.painter().galley(pos, galley, color);
    }

    if spec.video.is_some() {
        let play_chrome = visual.chrome[CHROME_PLAY];
        let play_opacity = opacity * play_chrome.opacity;
        if play_opacity > 0.01 {
            let center = egui::pos2(
                rect.center().x,
                rect.center().y + (110.0 + play_chrome.offset) * scale,
            );
            let radius = 34.0 * scale;
            let ring = Theme::with_opacity(theme.heading_color, play_opacity);
            ui.painter()
                .circle_stroke(center, radius, egui::Stroke::new(2.0 * scale, ring));
            if visual.playing {
                // Pause bars.
                let bar = egui::vec2(5.0 * scale, 22.0 * scale);
                for dx in [-7.0, 7.0] {
                    let c = center + egui::vec2(dx * scale, 0.0);
                    ui.painter()
                        .rect_filled(egui::Rect::from_center_size(c, bar), 1.0, ring);
                }
            } else {
                // Play triangle.
                let s = 14.0 * scale;
                ui.painter().add(egui::Shape::convex_polygon(
                    vec![
                        center + egui::vec2(-s * 0.5, -s),
                        center + egui::vec2(s, 0.0),
                        center + egui::vec2(-s * 0.5, s),
                    ],
                    ring,
                    egui::Stroke::NONE,
                ));
            }
        }
    }

    let logo_chrome = visual.chrome[CHROME_LOGO];
    let logo_opacity = opacity * logo_chrome.opacity;
    if logo_opacity > 0.01 {
        let color = Theme::with_opacity(theme.foreground, 0.7 * logo_opacity);
        let galley = ui.painter().layout_no_wrap(
            format!("{:02}", index + 1),
            egui::FontId::monospace(18.0 * scale),
            color,
        );
        let pos = egui::pos2(
            rect.center().x - galley.rect.width() / 2.0,
            rect.bottom() - (60.0 - logo_chrome.offset) * scale,
        );
        ui.painter().galley(pos, galley, color);
    }
}

/// Translucent veil standing in for the intro's backdrop blur; alpha tracks
/// the remaining blur amount.
pub fn draw_blur_veil(ui: &egui::Ui, rect: egui::Rect, theme: &Theme, blur: f32) {
    if blur <= 0.01 {
        return;
    }
    let alpha = (blur / 20.0).clamp(0.0, 1.0) * 0.65;
    ui.painter()
        .rect_filled(rect, 0.0, Theme::with_opacity(theme.background, alpha));
}

/// The pre-intro loader: a full cover with the first slide's snapshot (when
/// capture succeeded) or a flat backdrop.
pub fn draw_loader(
    ui: &egui::Ui,
    rect: egui::Rect,
    theme: &Theme,
    snapshot: Option<&egui::TextureHandle>,
) {
    ui.painter().rect_filled(rect, 0.0, theme.background);
    if let Some(texture) = snapshot {
        let uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
        ui.painter().image(
            texture.id(),
            rect,
            uv,
            Theme::with_opacity(egui::Color32::WHITE, 0.5),
        );
        ui.painter()
            .rect_filled(rect, 0.0, Theme::with_opacity(theme.background, 0.5));
    }
}

/// The fixed logo, the about-overlay trigger. Returns its hit rect so input
/// handling can treat it as an ignored region for gestures.
pub fn draw_fixed_logo(
    ui: &egui::Ui,
    rect: egui::Rect,
    theme: &Theme,
    title: &str,
    opacity: f32,
    scale: f32,
) -> egui::Rect {
    let padding = 28.0 * scale;
    let color = Theme::with_opacity(theme.heading_color, 0.9 * opacity.clamp(0.0, 1.0));
    let galley = ui.painter().layout_no_wrap(
        title.to_string(),
        egui::FontId::proportional(22.0 * scale),
        color,
    );
    let pos = egui::pos2(rect.left() + padding, rect.top() + padding);
    let hit = egui::Rect::from_min_size(pos, galley.rect.size()).expand(8.0 * scale);
    if opacity > 0.01 {
        ui.painter().galley(pos, galley, color);
    }
    hit
}

/// The about overlay panel, offset vertically by the controller's
/// `overlay_offset` percent. Returns the back button's hit rect.
pub fn draw_overlay(
    ui: &egui::Ui,
    rect: egui::Rect,
    theme: &Theme,
    about: &str,
    offset_percent: f32,
    scale: f32,
) -> Option<egui::Rect> {
    if offset_percent >= 100.0 {
        return None;
    }
    let panel = rect.translate(egui::vec2(0.0, offset_percent / 100.0 * rect.height()));
    ui.painter().rect_filled(panel, 0.0, theme.panel_background);

    let padding = 64.0 * scale;
    let heading_color = Theme::with_opacity(theme.heading_color, 0.95);
    let heading = ui.painter().layout_no_wrap(
        "About".to_string(),
        egui::FontId::proportional(48.0 * scale),
        heading_color,
    );
    ui.painter().galley(
        egui::pos2(panel.left() + padding, panel.top() + padding),
        heading,
        heading_color,
    );

    let body_color = Theme::with_opacity(theme.foreground, 0.9);
    let body = ui.painter().layout(
        about.to_string(),
        egui::FontId::proportional(theme.body_size * scale),
        body_color,
        panel.width() - padding * 2.0,
    );
    ui.painter().galley(
        egui::pos2(panel.left() + padding, panel.top() + padding + 80.0 * scale),
        body,
        body_color,
    );

    let back_color = Theme::with_opacity(theme.accent, 0.95);
    let back = ui.painter().layout_no_wrap(
        "\u{2190} Back".to_string(),
        egui::FontId::proportional(22.0 * scale),
        back_color,
    );
    let back_pos = egui::pos2(
        panel.left() + padding,
        panel.bottom() - padding - back.rect.height(),
    );
    let hit = egui::Rect::from_min_size(back_pos, back.rect.size()).expand(10.0 * scale);
    ui.painter().galley(back_pos, back, back_color);
    Some(hit)
}

/// Footer text and the slide counter.
pub fn draw_chrome(
    ui: &egui::Ui,
    rect: egui::Rect,
    theme: &Theme,
    footer: Option<&str>,
    current: usize,
    count: usize,
    opacity: f32,
    scale: f32,
) {
    if opacity <= 0.01 {
        return;
    }
    if let Some(footer) = footer {
        let color = Theme::with_opacity(theme.foreground, 0.4 * opacity);
        let galley = ui.painter().layout_no_wrap(
            footer.to_string(),
            egui::FontId::proportional(14.0 * scale),
            color,
        );
        let pos = egui::pos2(
            rect.center().x - galley.rect.width() / 2.0,
            rect.bottom() - 30.0 * scale,
        );
        ui.painter().galley(pos, galley, color);
    }

    let counter = format!("{} / {}", current + 1, count);
    let color = Theme::with_opacity(theme.foreground, 0.3 * opacity);
    let galley =
        ui.painter()
            .layout_no_wrap(counter, egui::FontId::monospace(14.0 * scale), color);
    let pos = egui::pos2(
        rect.right() - galley.rect.width() - 16.0 * scale,
        rect.bottom() - 30.0 * scale,
    );
    ui.painter().galley(pos, galley, color);
}
