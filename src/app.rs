use crate::color;
use crate::etching::{Etching, Gallery};
use crate::grid::{GridModel, GRID_DIMENSION};
use crate::input::InputAction;
use crate::menu::{Menu, MenuAction};
use crate::palette::Palette;
use crate::status::StatusLine;

/// Titles longer than this stop accepting characters.
pub const TITLE_MAX_CHARS: usize = 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Drawing,
    Naming,
    Gallery,
    ConfirmClear,
}

/// Application state: the etching surface plus everything around it
/// (palette, gallery, overlay menus, status line). Input actions come
/// in, model operations and status updates come out; rendering reads
/// this struct but never mutates it.
pub struct EtchApp {
    pub model: GridModel,
    pub palette: Palette,
    pub gallery: Gallery,
    pub status: StatusLine,
    mode: Mode,
    menu: Option<Menu>,
    title_buffer: String,
    untitled_count: u32,
}

impl EtchApp {
    pub fn new() -> Self {
        let palette = Palette::new();
        let model = GridModel::new(GRID_DIMENSION, color::CANVAS, palette.selected());
        Self {
            model,
            palette,
            gallery: Gallery::new(),
            status: StatusLine::default(),
            mode: Mode::Drawing,
            menu: None,
            title_buffer: String::new(),
            untitled_count: 0,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn menu(&self) -> Option<&Menu> {
        self.menu.as_ref()
    }

    pub fn title_buffer(&self) -> &str {
        &self.title_buffer
    }

    /// Routes one input action into the current mode. Returns whether
    /// anything visible changed.
    pub fn handle_action(&mut self, action: InputAction) -> bool {
        match self.mode {
            Mode::Drawing => self.handle_drawing_action(action),
            Mode::Naming => self.handle_naming_action(action),
            Mode::Gallery => self.handle_gallery_action(action),
            Mode::ConfirmClear => self.handle_confirm_action(action),
        }
    }

    fn handle_drawing_action(&mut self, action: InputAction) -> bool {
        match action {
            InputAction::Move(direction) => match self.model.try_move(direction) {
                Some(painted) => {
                    log::debug!("stroke painted {} cells", painted.len());
                    !painted.is_empty()
                }
                None => {
                    self.status.push("click a tile to start etching");
                    true
                }
            },
            InputAction::SelectColor(index) => {
                if self.palette.select(index) {
                    self.model.set_brush_color(self.palette.selected());
                    true
                } else {
                    false
                }
            }
            InputAction::NextColor => {
                self.palette.select_next();
                self.model.set_brush_color(self.palette.selected());
                true
            }
            InputAction::PreviousColor => {
                self.palette.select_previous();
                self.model.set_brush_color(self.palette.selected());
                true
            }
            InputAction::MagnitudeUp => {
                self.adjust_magnitude(1);
                true
            }
            InputAction::MagnitudeDown => {
                self.adjust_magnitude(-1);
                true
            }
            InputAction::BeginSave => {
                self.mode = Mode::Naming;
                self.title_buffer.clear();
                self.status.push("name the etching, enter to save");
                true
            }
            InputAction::OpenGallery => {
                if self.gallery.is_empty() {
                    self.status.push("nothing saved yet");
                } else {
                    self.mode = Mode::Gallery;
                    self.menu = Some(Menu::gallery(self.gallery.titles()));
                    self.status.push("enter loads, d removes, esc closes");
                }
                true
            }
            InputAction::BeginClear => {
                self.mode = Mode::ConfirmClear;
                self.menu = Some(Menu::confirm_clear());
                true
            }
            _ => false,
        }
    }

    fn handle_naming_action(&mut self, action: InputAction) -> bool {
        match action {
            InputAction::Char(character) => {
                if self.title_buffer.chars().count() < TITLE_MAX_CHARS {
                    self.title_buffer.push(character);
                }
                true
            }
            InputAction::Backspace => {
                self.title_buffer.pop();
                true
            }
            InputAction::Confirm => {
                self.save_etching();
                self.mode = Mode::Drawing;
                true
            }
            InputAction::Cancel => {
                self.mode = Mode::Drawing;
                self.status.push("save cancelled");
                true
            }
            _ => false,
        }
    }

    fn handle_gallery_action(&mut self, action: InputAction) -> bool {
        match action {
            InputAction::NavigateUp => {
                if let Some(menu) = self.menu.as_mut() {
                    menu.select_previous();
                }
                true
            }
            InputAction::NavigateDown => {
                if let Some(menu) = self.menu.as_mut() {
                    menu.select_next();
                }
                true
            }
            InputAction::Confirm => {
                let action = self.menu.as_ref().and_then(Menu::selected_action);
                if let Some(MenuAction::LoadEtching(index)) = action {
                    self.load_etching(index);
                }
                self.close_overlay();
                true
            }
            InputAction::RemoveEntry => {
                let action = self.menu.as_ref().and_then(Menu::selected_action);
                if let Some(MenuAction::LoadEtching(index)) = action {
                    if let Some(removed) = self.gallery.remove(index) {
                        self.status.push(&format!("removed '{}'", removed.title()));
                    }
                    if self.gallery.is_empty() {
                        self.close_overlay();
                    } else {
                        self.menu = Some(Menu::gallery(self.gallery.titles()));
                    }
                }
                true
            }
            InputAction::Cancel => {
                self.close_overlay();
                true
            }
            _ => false,
        }
    }

    fn handle_confirm_action(&mut self, action: InputAction) -> bool {
        match action {
            InputAction::NavigateUp => {
                if let Some(menu) = self.menu.as_mut() {
                    menu.select_previous();
                }
                true
            }
            InputAction::NavigateDown => {
                if let Some(menu) = self.menu.as_mut() {
                    menu.select_next();
                }
                true
            }
            InputAction::Confirm => {
                let action = self.menu.as_ref().and_then(Menu::selected_action);
                if action == Some(MenuAction::ConfirmClear) {
                    self.model.reset(color::CANVAS);
                    self.status.push("screen shaken clean");
                    log::info!("grid cleared");
                }
                self.close_overlay();
                true
            }
            InputAction::Cancel => {
                self.close_overlay();
                true
            }
            _ => false,
        }
    }

    /// A mouse tap on a grid tile. Overlay modes swallow taps.
    pub fn handle_tap(&mut self, row: usize, col: usize) -> bool {
        if self.mode != Mode::Drawing {
            return false;
        }
        let first_tap = self.model.cursor().is_none();
        match self.model.tap_cell((row, col)) {
            Some(painted) => {
                if first_tap {
                    self.status.push("etching started - arrows draw");
                }
                !painted.is_empty() || first_tap
            }
            None => false,
        }
    }

    fn adjust_magnitude(&mut self, delta: i64) {
        let current = self.model.magnitude() as i64;
        self.model.set_stroke_magnitude((current + delta).max(1) as usize);
        self.status
            .push(&format!("stroke width {}", self.model.magnitude()));
    }

    fn save_etching(&mut self) {
        let mut title = self.title_buffer.trim().to_string();
        if title.is_empty() {
            self.untitled_count += 1;
            title = format!("Untitled {}", self.untitled_count);
        }
        self.gallery
            .add(Etching::new(title.clone(), self.model.snapshot()));
        self.status.push(&format!("saved '{}'", title));
        log::info!("saved etching '{}'", title);
    }

    fn load_etching(&mut self, index: usize) {
        let Some(etching) = self.gallery.get(index) else {
            return;
        };
        let title = etching.title().to_string();
        match self.model.load(etching.cells().to_vec()) {
            Ok(()) => {
                self.status.push(&format!("loaded '{}'", title));
                log::info!("loaded etching '{}'", title);
            }
            Err(err) => {
                log::error!("failed to load etching '{}': {}", title, err);
                self.status.push("could not load that etching");
            }
        }
    }

    fn close_overlay(&mut self) {
        self.mode = Mode::Drawing;
        self.menu = None;
    }
}

impl Default for EtchApp {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Direction;

    fn app() -> EtchApp {
        let mut app = EtchApp::new();
        app.model = GridModel::with_seed(GRID_DIMENSION, color::CANVAS, color::BLACK, 3);
        app
    }

    fn type_title(app: &mut EtchApp, title: &str) {
        for character in title.chars() {
            app.handle_action(InputAction::Char(character));
        }
    }

    #[test]
    fn save_flow_names_and_stores_an_etching() {
        let mut app = app();
        app.handle_tap(5, 5);
        app.handle_action(InputAction::BeginSave);
        assert_eq!(app.mode(), Mode::Naming);
        type_title(&mut app, "wave");
        app.handle_action(InputAction::Confirm);
        assert_eq!(app.mode(), Mode::Drawing);
        assert_eq!(app.gallery.len(), 1);
        assert_eq!(app.gallery.get(0).unwrap().title(), "wave");
    }

    #[test]
    fn empty_titles_fall_back_to_untitled_numbering() {
        let mut app = app();
        app.handle_action(InputAction::BeginSave);
        app.handle_action(InputAction::Confirm);
        app.handle_action(InputAction::BeginSave);
        type_title(&mut app, "   ");
        app.handle_action(InputAction::Confirm);
        assert_eq!(app.gallery.get(0).unwrap().title(), "Untitled 1");
        assert_eq!(app.gallery.get(1).unwrap().title(), "Untitled 2");
    }

    #[test]
    fn title_length_is_capped() {
        let mut app = app();
        app.handle_action(InputAction::BeginSave);
        type_title(&mut app, &"x".repeat(TITLE_MAX_CHARS + 10));
        assert_eq!(app.title_buffer().len(), TITLE_MAX_CHARS);
    }

    #[test]
    fn loading_an_etching_restores_cells_and_lifts_pen() {
        let mut app = app();
        app.handle_tap(5, 5);
        app.handle_action(InputAction::BeginSave);
        app.handle_action(InputAction::Confirm);
        let saved = app.gallery.get(0).unwrap().cells().to_vec();

        app.handle_action(InputAction::Move(Direction::Right));
        app.handle_action(InputAction::OpenGallery);
        assert_eq!(app.mode(), Mode::Gallery);
        app.handle_action(InputAction::Confirm);

        assert_eq!(app.mode(), Mode::Drawing);
        assert_eq!(app.model.snapshot(), saved);
        assert_eq!(app.model.cursor(), None);
    }

    #[test]
    fn opening_an_empty_gallery_just_hints() {
        let mut app = app();
        app.handle_action(InputAction::OpenGallery);
        assert_eq!(app.mode(), Mode::Drawing);
        assert_eq!(app.status.latest(), "nothing saved yet");
    }

    #[test]
    fn removing_entries_rebuilds_the_menu() {
        let mut app = app();
        for _ in 0..2 {
            app.handle_action(InputAction::BeginSave);
            app.handle_action(InputAction::Confirm);
        }
        app.handle_action(InputAction::OpenGallery);
        app.handle_action(InputAction::RemoveEntry);
        assert_eq!(app.gallery.len(), 1);
        assert_eq!(app.mode(), Mode::Gallery);
        assert_eq!(app.menu().unwrap().options.len(), 1);
        app.handle_action(InputAction::RemoveEntry);
        assert_eq!(app.gallery.len(), 0);
        assert_eq!(app.mode(), Mode::Drawing);
    }

    #[test]
    fn confirmed_clear_resets_the_grid() {
        let mut app = app();
        app.handle_tap(5, 5);
        app.handle_action(InputAction::BeginClear);
        assert_eq!(app.mode(), Mode::ConfirmClear);
        app.handle_action(InputAction::Confirm);
        assert_eq!(app.mode(), Mode::Drawing);
        assert_eq!(app.model.cursor(), None);
        assert_eq!(app.model.cell(5, 5), Some(color::CANVAS));
    }

    #[test]
    fn cancelled_clear_keeps_the_drawing() {
        let mut app = app();
        app.handle_tap(5, 5);
        app.handle_action(InputAction::BeginClear);
        app.handle_action(InputAction::Cancel);
        assert_eq!(app.mode(), Mode::Drawing);
        assert_eq!(app.model.cell(5, 5), Some(color::BLACK));
        assert_eq!(app.model.cursor(), Some((5, 5)));
    }

    #[test]
    fn declining_the_clear_prompt_keeps_the_drawing() {
        let mut app = app();
        app.handle_tap(5, 5);
        app.handle_action(InputAction::BeginClear);
        app.handle_action(InputAction::NavigateDown);
        app.handle_action(InputAction::Confirm);
        assert_eq!(app.mode(), Mode::Drawing);
        assert_eq!(app.model.cell(5, 5), Some(color::BLACK));
    }

    #[test]
    fn palette_actions_change_the_brush() {
        let mut app = app();
        app.handle_tap(5, 5);
        app.handle_action(InputAction::NextColor);
        assert_eq!(app.model.brush(), color::BLUE);
        assert_eq!(app.model.cell(5, 5), Some(color::BLUE));
        app.handle_action(InputAction::SelectColor(2));
        assert_eq!(app.model.brush(), color::RED);
    }

    #[test]
    fn magnitude_actions_stay_clamped() {
        let mut app = app();
        for _ in 0..40 {
            app.handle_action(InputAction::MagnitudeUp);
        }
        assert_eq!(app.model.magnitude(), crate::grid::MAX_MAGNITUDE);
        for _ in 0..40 {
            app.handle_action(InputAction::MagnitudeDown);
        }
        assert_eq!(app.model.magnitude(), 1);
    }

    #[test]
    fn taps_are_swallowed_while_an_overlay_is_open() {
        let mut app = app();
        app.handle_action(InputAction::BeginClear);
        assert!(!app.handle_tap(5, 5));
        assert_eq!(app.model.cursor(), None);
    }
}
