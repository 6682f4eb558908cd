use pixels::{Pixels, SurfaceTexture};
use winit::window::Window;

use crate::app::{EtchApp, Mode};
use crate::color::{self, Rgba};
use crate::font;

pub const GRID_PADDING: u32 = 10;
const PALETTE_BAR_HEIGHT: u32 = 46;
const STATUS_BAR_HEIGHT: u32 = 36;
const SWATCH_GAP: u32 = 4;
const TEXT_SCALE: usize = 2;

/// Placement of the tile grid inside the current window.
struct GridLayout {
    origin_x: u32,
    origin_y: u32,
    tile: u32,
}

pub struct GraphicsRenderer {
    pixels: Pixels,
    width: u32,
    height: u32,
}

impl GraphicsRenderer {
    pub fn new(window: &Window, width: u32, height: u32) -> Result<Self, pixels::Error> {
        let surface_texture = SurfaceTexture::new(width, height, window);
        let pixels = Pixels::new(width, height, surface_texture)?;
        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        if let Err(err) = self.pixels.resize_surface(width, height) {
            log::error!("failed to resize surface: {}", err);
        }
        if let Err(err) = self.pixels.resize_buffer(width, height) {
            log::error!("failed to resize buffer: {}", err);
        }
    }

    fn layout(&self, dimension: usize) -> GridLayout {
        let dimension = (dimension as u32).max(1);
        let available_width = self.width.saturating_sub(GRID_PADDING * 2);
        let available_height = self
            .height
            .saturating_sub(PALETTE_BAR_HEIGHT + STATUS_BAR_HEIGHT + GRID_PADDING * 2);
        let tile = (available_width / dimension)
            .min(available_height / dimension)
            .max(1);
        let side = tile * dimension;
        GridLayout {
            origin_x: GRID_PADDING + available_width.saturating_sub(side) / 2,
            origin_y: GRID_PADDING + available_height.saturating_sub(side) / 2,
            tile,
        }
    }

    /// Maps a window position to the grid tile underneath it.
    pub fn hit_test(&self, x: f32, y: f32, dimension: usize) -> Option<(usize, usize)> {
        if x < 0.0 || y < 0.0 {
            return None;
        }
        let layout = self.layout(dimension);
        let (x, y) = (x as u32, y as u32);
        if x < layout.origin_x || y < layout.origin_y {
            return None;
        }
        let col = (x - layout.origin_x) / layout.tile;
        let row = (y - layout.origin_y) / layout.tile;
        if row < dimension as u32 && col < dimension as u32 {
            Some((row as usize, col as usize))
        } else {
            None
        }
    }

    pub fn render(&mut self, app: &EtchApp) {
        let layout = self.layout(app.model.dimension());
        let width = self.width;
        let height = self.height;
        let frame = self.pixels.frame_mut();

        for pixel in frame.chunks_exact_mut(4) {
            pixel.copy_from_slice(&color::INK.to_bytes());
        }

        Self::render_grid(frame, app, &layout, width, height);
        Self::render_palette_bar(frame, app, width, height);
        Self::render_status_bar(frame, app, width, height);
        if let Some(menu) = app.menu() {
            Self::render_menu(frame, menu, &layout, app.model.dimension(), width, height);
        }
    }

    pub fn present(&mut self) -> Result<(), pixels::Error> {
        self.pixels.render()
    }

    fn render_grid(frame: &mut [u8], app: &EtchApp, layout: &GridLayout, width: u32, height: u32) {
        // The gutter leaves the backdrop showing through as grid lines.
        let gutter = if layout.tile > 3 { 1 } else { 0 };
        for row in 0..app.model.dimension() {
            for col in 0..app.model.dimension() {
                if let Some(cell) = app.model.cell(row, col) {
                    let x = layout.origin_x + col as u32 * layout.tile;
                    let y = layout.origin_y + row as u32 * layout.tile;
                    Self::draw_rect(
                        frame,
                        width,
                        height,
                        x,
                        y,
                        layout.tile - gutter,
                        layout.tile - gutter,
                        cell,
                    );
                }
            }
        }

        if let Some((row, col)) = app.model.cursor() {
            let x = layout.origin_x + col as u32 * layout.tile;
            let y = layout.origin_y + row as u32 * layout.tile;
            Self::draw_rect_outline(
                frame,
                width,
                height,
                x,
                y,
                layout.tile,
                layout.tile,
                2,
                color::ACCENT,
            );
        }
    }

    fn render_palette_bar(frame: &mut [u8], app: &EtchApp, width: u32, height: u32) {
        let bar_y = height.saturating_sub(STATUS_BAR_HEIGHT + PALETTE_BAR_HEIGHT);
        let count = app.palette.len() as u32;
        let readout_width = 160;
        let available = width.saturating_sub(GRID_PADDING * 2 + readout_width);
        let swatch = (available / count.max(1))
            .saturating_sub(SWATCH_GAP)
            .clamp(4, PALETTE_BAR_HEIGHT - 18);
        let swatch_y = bar_y + (PALETTE_BAR_HEIGHT - swatch) / 2;

        for (index, &swatch_color) in app.palette.colors().iter().enumerate() {
            let x = GRID_PADDING + index as u32 * (swatch + SWATCH_GAP);
            Self::draw_rect(frame, width, height, x, swatch_y, swatch, swatch, swatch_color);
            if index == app.palette.selected_index() {
                Self::draw_rect_outline(
                    frame,
                    width,
                    height,
                    x.saturating_sub(2),
                    swatch_y.saturating_sub(2),
                    swatch + 4,
                    swatch + 4,
                    2,
                    color::WHITE,
                );
            }
        }

        let readout = format!("stroke {}", app.model.magnitude());
        let text_x = (GRID_PADDING + count * (swatch + SWATCH_GAP) + 12) as usize;
        let text_y = (bar_y + (PALETTE_BAR_HEIGHT - font::char_width(TEXT_SCALE) as u32) / 2) as usize;
        font::draw_text(
            frame,
            &readout,
            text_x,
            text_y,
            color::PANEL,
            TEXT_SCALE,
            width as usize,
        );
    }

    fn render_status_bar(frame: &mut [u8], app: &EtchApp, width: u32, height: u32) {
        let line = if app.mode() == Mode::Naming {
            format!("title: {}_", app.title_buffer())
        } else {
            app.status.latest().to_string()
        };
        let text_y = height.saturating_sub(STATUS_BAR_HEIGHT) + 8;
        font::draw_text(
            frame,
            &line,
            GRID_PADDING as usize,
            text_y as usize,
            color::PANEL,
            TEXT_SCALE,
            width as usize,
        );
    }

    fn render_menu(
        frame: &mut [u8],
        menu: &crate::menu::Menu,
        layout: &GridLayout,
        dimension: usize,
        width: u32,
        height: u32,
    ) {
        let line_height = font::line_height(TEXT_SCALE) as u32;
        let padding = 14u32;
        let widest = menu
            .options
            .iter()
            .map(|option| option.label.as_str())
            .chain(std::iter::once(menu.title.as_str()))
            .map(|text| font::text_width(text, TEXT_SCALE) as u32)
            .max()
            .unwrap_or(0);
        let panel_width = (widest + padding * 2).max(220).min(width);
        let panel_height = (menu.options.len() as u32 + 1) * line_height + padding * 2 + 6;

        let side = layout.tile * dimension as u32;
        let panel_x = width.saturating_sub(panel_width) / 2;
        let panel_y = layout.origin_y + side.saturating_sub(panel_height) / 2;

        Self::draw_rect(frame, width, height, panel_x, panel_y, panel_width, panel_height, color::PANEL);
        Self::draw_rect_outline(
            frame,
            width,
            height,
            panel_x,
            panel_y,
            panel_width,
            panel_height,
            2,
            color::ACCENT,
        );

        let text_x = (panel_x + padding) as usize;
        let mut text_y = panel_y + padding;
        font::draw_text(
            frame,
            &menu.title,
            text_x,
            text_y as usize,
            color::INK,
            TEXT_SCALE,
            width as usize,
        );
        text_y += line_height + 6;

        for (index, option) in menu.options.iter().enumerate() {
            if index == menu.selected_index {
                Self::draw_rect(
                    frame,
                    width,
                    height,
                    panel_x + 4,
                    text_y.saturating_sub(2),
                    panel_width - 8,
                    line_height,
                    color::ACCENT,
                );
            }
            font::draw_text(
                frame,
                &option.label,
                text_x,
                text_y as usize,
                color::INK,
                TEXT_SCALE,
                width as usize,
            );
            text_y += line_height;
        }
    }

    fn draw_rect(
        frame: &mut [u8],
        frame_width: u32,
        frame_height: u32,
        x: u32,
        y: u32,
        w: u32,
        h: u32,
        color: Rgba,
    ) {
        let bytes = color.to_bytes();
        let x_end = (x + w).min(frame_width);
        let y_end = (y + h).min(frame_height);
        for py in y..y_end {
            for px in x..x_end {
                let idx = ((py * frame_width + px) * 4) as usize;
                if idx + 4 <= frame.len() {
                    frame[idx..idx + 4].copy_from_slice(&bytes);
                }
            }
        }
    }

    fn draw_rect_outline(
        frame: &mut [u8],
        frame_width: u32,
        frame_height: u32,
        x: u32,
        y: u32,
        w: u32,
        h: u32,
        thickness: u32,
        color: Rgba,
    ) {
        let thickness = thickness.min(w / 2 + 1).min(h / 2 + 1);
        // Top and bottom edges
        Self::draw_rect(frame, frame_width, frame_height, x, y, w, thickness, color);
        Self::draw_rect(
            frame,
            frame_width,
            frame_height,
            x,
            (y + h).saturating_sub(thickness),
            w,
            thickness,
            color,
        );
        // Left and right edges
        Self::draw_rect(frame, frame_width, frame_height, x, y, thickness, h, color);
        Self::draw_rect(
            frame,
            frame_width,
            frame_height,
            (x + w).saturating_sub(thickness),
            y,
            thickness,
            h,
            color,
        );
    }
}
