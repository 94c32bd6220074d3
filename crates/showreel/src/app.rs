use eframe::egui;
use std::path::PathBuf;
use std::time::Instant;

use crate::config::Config;
use crate::controller::ShowController;
use crate::deck::Deck;
use crate::gesture::GestureConfig;
use crate::media::{MediaDeck, PosterDeck};
use crate::render;
use crate::theme::Theme;

/// Cap on per-frame delta time so a window hitch can't fast-forward an
/// animation in one jump.
const MAX_FRAME_DT: f32 = 0.1;

struct Toast {
    message: String,
    start: Instant,
}

impl Toast {
    fn new(message: String) -> Self {
        Self {
            message,
            start: Instant::now(),
        }
    }

    fn opacity(&self) -> f32 {
        let elapsed = self.start.elapsed().as_secs_f32();
        let duration = 1.5;
        let fade_start = 1.0;
        if elapsed < fade_start {
            1.0
        } else if elapsed < duration {
            1.0 - (elapsed - fade_start) / (duration - fade_start)
        } else {
            0.0
        }
    }

    fn is_expired(&self) -> bool {
        self.start.elapsed().as_secs_f32() >= 1.5
    }
}

struct ShowApp {
    deck: Deck,
    theme: Theme,
    controller: ShowController,
    media: PosterDeck,
    posters: Vec<Option<egui::TextureHandle>>,
    snapshot: Option<egui::TextureHandle>,
    assets_loaded: bool,
    last_frame: Instant,
    toast: Option<Toast>,
    last_esc: Option<Instant>,
    /// Hit rects from the last frame, used as gesture dead zones.
    logo_hit: egui::Rect,
    back_hit: Option<egui::Rect>,
}

impl ShowApp {
    fn new(deck: Deck, theme: Theme, controller: ShowController, media: PosterDeck) -> Self {
        let slide_count = deck.slide_count();
        Self {
            deck,
            theme,
            controller,
            media,
            posters: vec![None; slide_count],
            snapshot: None,
            assets_loaded: false,
            last_frame: Instant::now(),
            toast: None,
            last_esc: None,
            logo_hit: egui::Rect::NOTHING,
            back_hit: None,
        }
    }

    /// Decode poster images into textures and capture the loader snapshot,
    /// then signal readiness so the intro can start.
    fn load_assets(&mut self, ctx: &egui::Context) {
        for index in 0..self.deck.slide_count() {
            let Some(image) = self.media.snapshot(index) else {
                continue;
            };
            let size = [image.width() as usize, image.height() as usize];
            let color_image = egui::ColorImage::from_rgba_unmultiplied(size, image.as_raw());
            let texture = ctx.load_texture(
                format!("poster-{index}"),
                color_image,
                egui::TextureOptions::LINEAR,
            );
            if index == 0 {
                self.snapshot = Some(texture.clone());
            }
            self.posters[index] = Some(texture);
        }
        self.controller.notify_media_ready();
    }

    fn over_dead_zone(&self, pos: Option<egui::Pos2>) -> bool {
        let Some(pos) = pos else { return false };
        if self.logo_hit.contains(pos) {
            return true;
        }
        self.back_hit.is_some_and(|r| r.contains(pos))
    }
}

impl eframe::App for ShowApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.assets_loaded {
            self.assets_loaded = true;
            self.load_assets(ctx);
        }

        let dt = self.last_frame.elapsed().as_secs_f32().min(MAX_FRAME_DT);
        self.last_frame = Instant::now();
        self.controller.tick(dt);

        // Collect viewport commands to send AFTER the input closure
        // (sending inside ctx.input() causes RwLock deadlock)
        let mut viewport_cmds: Vec<egui::ViewportCommand> = Vec::new();

        ctx.input(|i| {
            // Quit: Q
            if i.key_pressed(egui::Key::Q) {
                viewport_cmds.push(egui::ViewportCommand::Close);
                return;
            }

            // ESC: close the overlay first, then double-tap to quit
            if i.key_pressed(egui::Key::Escape) {
                if self.controller.overlay_open() {
                    self.controller.close_overlay();
                    self.last_esc = None;
                    return;
                }
                if let Some(last) = self.last_esc {
                    if last.elapsed().as_secs_f32() < 1.0 {
                        viewport_cmds.push(egui::ViewportCommand::Close);
                        return;
                    }
                }
                self.last_esc = Some(Instant::now());
                self.toast = Some(Toast::new("Press Esc again to exit".to_string()));
                return;
            }

            // Fullscreen toggle: F
            if i.key_pressed(egui::Key::F) {
                viewport_cmds.push(egui::ViewportCommand::Fullscreen(
                    !i.viewport().fullscreen.unwrap_or(false),
                ));
                return;
            }

            // Theme toggle: D
            if i.key_pressed(egui::Key::D) {
                self.theme = self.theme.toggled();
                self.toast = Some(Toast::new(format!("Theme: {}", self.theme.name)));
                return;
            }

            // Keyboard navigation follows the same enablement as gestures.
            if self.controller.gestures_enabled() {
                if i.key_pressed(egui::Key::ArrowDown)
                    || i.key_pressed(egui::Key::ArrowRight)
                    || i.key_pressed(egui::Key::Space)
                {
                    self.controller
                        .navigate(crate::gesture::NavIntent::Advance, &mut self.media);
                }
                if i.key_pressed(egui::Key::ArrowUp) || i.key_pressed(egui::Key::ArrowLeft) {
                    self.controller
                        .navigate(crate::gesture::NavIntent::Retreat, &mut self.media);
                }
            }

            let pointer = i.pointer.hover_pos();

            // Wheel / touch scroll drives navigation.
            let scroll = i.smooth_scroll_delta.y;
            if scroll != 0.0 {
                let over_ignored = self.over_dead_zone(pointer);
                self.controller
                    .feed_scroll(scroll, over_ignored, &mut self.media);
            }

            // Clicks: logo opens the overlay, back closes it, the slide
            // itself toggles media playback.
            if i.pointer.button_pressed(egui::PointerButton::Primary) {
                if let Some(pos) = i.pointer.interact_pos() {
                    if self.logo_hit.contains(pos) && !self.controller.overlay_open() {
                        self.controller.open_overlay();
                    } else if self.controller.overlay_open() {
                        if self.back_hit.is_some_and(|r| r.contains(pos)) {
                            self.controller.close_overlay();
                        }
                    } else {
                        let current = self.controller.current_index();
                        self.controller.toggle_media(current, &mut self.media);
                    }
                }
            }
        });

        for cmd in viewport_cmds {
            ctx.send_viewport_cmd(cmd);
        }

        if self.toast.as_ref().is_some_and(|t| t.is_expired()) {
            self.toast = None;
        }

        let bg = self.theme.background;

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(bg).inner_margin(0.0))
            .show(ctx, |ui| {
                let rect = ui.max_rect();
                ui.painter().rect_filled(rect, 0.0, bg);

                let scale = render::compute_scale(rect);
                let stage = self.controller.stage().clone();

                // Slides painted back to front by z order.
                let mut order: Vec<usize> = (0..self.deck.slide_count()).collect();
                order.sort_by_key(|&i| self.controller.slide(i).z_index);
                for index in order {
                    let visual = self.controller.slide(index);
                    let slide_rect = render::slide_rect(rect, visual, &stage);
                    render::draw_slide(
                        ui,
                        &self.deck.slides[index],
                        visual,
                        &self.theme,
                        index,
                        slide_rect,
                        self.posters[index].as_ref(),
                        scale,
                    );
                }

                render::draw_blur_veil(ui, rect, &self.theme, stage.blur);

                if stage.loader_visible {
                    render::draw_loader(ui, rect, &self.theme, self.snapshot.as_ref());
                }

                render::draw_chrome(
                    ui,
                    rect,
                    &self.theme,
                    self.deck.meta.footer.as_deref(),
                    self.controller.current_index(),
                    self.deck.slide_count(),
                    stage.logo_opacity,
                    scale,
                );

                let about = self
                    .deck
                    .meta
                    .about
                    .as_deref()
                    .unwrap_or("A showreel of full-viewport slides.");
                self.back_hit =
                    render::draw_overlay(ui, rect, &self.theme, about, stage.overlay_offset, scale);

                self.logo_hit = render::draw_fixed_logo(
                    ui,
                    rect,
                    &self.theme,
                    self.deck.display_title(),
                    stage.logo_opacity,
                    scale,
                );

                if let Some(ref toast) = self.toast {
                    let opacity = toast.opacity();
                    if opacity > 0.0 {
                        let toast_color = Theme::with_opacity(self.theme.foreground, opacity * 0.9);
                        let toast_bg =
                            Theme::with_opacity(self.theme.panel_background, opacity * 0.9);
                        let galley = ui.painter().layout_no_wrap(
                            toast.message.clone(),
                            egui::FontId::proportional(20.0 * scale),
                            toast_color,
                        );
                        let padding = 16.0 * scale;
                        let toast_rect = egui::Rect::from_min_size(
                            egui::pos2(
                                rect.center().x - galley.rect.width() / 2.0 - padding,
                                rect.bottom() - 80.0 * scale,
                            ),
                            egui::vec2(
                                galley.rect.width() + padding * 2.0,
                                galley.rect.height() + padding * 2.0,
                            ),
                        );
                        ui.painter().rect_filled(toast_rect, 8.0 * scale, toast_bg);
                        let text_pos =
                            egui::pos2(toast_rect.left() + padding, toast_rect.top() + padding);
                        ui.painter().galley(text_pos, galley, toast_color);
                        ctx.request_repaint();
                    }
                }
            });

        if self.controller.needs_ticks() {
            ctx.request_repaint();
        }
    }
}

pub fn run(file: PathBuf, windowed: bool, skip_intro: bool) -> anyhow::Result<()> {
    let deck = Deck::load(&file)?;
    let config = Config::load_or_default();

    let theme_name = deck
        .meta
        .theme
        .clone()
        .or_else(|| config.defaults.as_ref().and_then(|d| d.theme.clone()))
        .unwrap_or_else(|| "dark".to_string());
    let theme = Theme::from_name(&theme_name);

    let mut controller = ShowController::new(
        deck.slide_count(),
        config.intro_config(),
        GestureConfig::default(),
    );
    if skip_intro {
        controller.skip_intro();
    }

    let media = PosterDeck::from_deck(&deck);
    let title = deck.display_title().to_string();

    let viewport = if windowed {
        egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 720.0])
            .with_title(&title)
    } else {
        egui::ViewportBuilder::default()
            .with_fullscreen(true)
            .with_title(&title)
    };

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Ok(Box::new(ShowApp::new(deck, theme, controller, media)))),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
}
