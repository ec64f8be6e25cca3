use crate::domain::models::MenuItem;
use crate::domain::models::MenuTitle;

/// Which drop-down is open, and which entry in it is highlighted.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MenuBar {
    open: Option<(MenuTitle, usize)>,
}

impl MenuBar {
    pub fn is_open(&self) -> bool {
        return self.open.is_some();
    }

    pub fn open_title(&self) -> Option<MenuTitle> {
        return self.open.map(|(title, _)| return title);
    }

    pub fn highlighted(&self) -> Option<usize> {
        return self.open.map(|(_, idx)| return idx);
    }

    pub fn open(&mut self, title: MenuTitle) {
        self.open = Some((title, 0));
    }

    pub fn close(&mut self) {
        self.open = None;
    }

    pub fn selected(&self) -> Option<MenuItem> {
        let (title, idx) = self.open?;
        return title.items().get(idx).copied();
    }

    pub fn up(&mut self) {
        if let Some((title, idx)) = self.open {
            let len = title.items().len();
            self.open = Some((title, (idx + len - 1) % len));
        }
    }

    pub fn down(&mut self) {
        if let Some((title, idx)) = self.open {
            let len = title.items().len();
            self.open = Some((title, (idx + 1) % len));
        }
    }

    /// Moves to the neighbouring menu among `titles`, wrapping around.
    pub fn step(&mut self, titles: &[MenuTitle], forward: bool) {
        let Some((title, _)) = self.open else {
            return;
        };
        if titles.is_empty() {
            return;
        }

        let pos = titles.iter().position(|e| return *e == title).unwrap_or(0);
        let next = if forward {
            (pos + 1) % titles.len()
        } else {
            (pos + titles.len() - 1) % titles.len()
        };
        self.open(titles[next]);
    }
}
