/// Overlay menu state used for the gallery list and the clear prompt.
#[derive(Debug, Clone)]
pub struct Menu {
    pub title: String,
    pub options: Vec<MenuOption>,
    pub selected_index: usize,
}

#[derive(Debug, Clone)]
pub struct MenuOption {
    pub label: String,
    pub action: MenuAction,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuAction {
    LoadEtching(usize),
    ConfirmClear,
    Close,
}

impl Menu {
    pub fn gallery<'a>(titles: impl Iterator<Item = &'a str>) -> Self {
        let options: Vec<MenuOption> = titles
            .enumerate()
            .map(|(index, title)| MenuOption {
                label: title.to_string(),
                action: MenuAction::LoadEtching(index),
            })
            .collect();
        Self {
            title: "gallery".to_string(),
            options,
            selected_index: 0,
        }
    }

    pub fn confirm_clear() -> Self {
        Self {
            title: "clear the screen?".to_string(),
            options: vec![
                MenuOption {
                    label: "shake it clean".to_string(),
                    action: MenuAction::ConfirmClear,
                },
                MenuOption {
                    label: "keep etching".to_string(),
                    action: MenuAction::Close,
                },
            ],
            selected_index: 0,
        }
    }

    pub fn select_previous(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn select_next(&mut self) {
        if self.selected_index + 1 < self.options.len() {
            self.selected_index += 1;
        }
    }

    /// The action behind the highlighted option, if any option exists.
    pub fn selected_action(&self) -> Option<MenuAction> {
        self.options
            .get(self.selected_index)
            .map(|option| option.action.clone())
    }
}
