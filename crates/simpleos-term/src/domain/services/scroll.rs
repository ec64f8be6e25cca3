#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Scroll {
    position: usize,
    list_length: usize,
    viewport_length: usize,
}

impl Scroll {
    pub fn set_state(&mut self, list_length: usize, viewport_length: usize) {
        let was_at_last = self.is_position_at_last();
        self.list_length = list_length;
        self.viewport_length = viewport_length;

        if was_at_last || self.position > self.max_position() {
            self.last();
        }
    }

    fn max_position(&self) -> usize {
        return self.list_length.saturating_sub(self.viewport_length);
    }

    pub fn position(&self) -> usize {
        return self.position;
    }

    pub fn viewport_length(&self) -> usize {
        return self.viewport_length;
    }

    pub fn is_position_at_last(&self) -> bool {
        return self.position >= self.max_position();
    }

    pub fn up(&mut self) {
        self.position = self.position.saturating_sub(1);
    }

    pub fn down(&mut self) {
        self.position = (self.position + 1).min(self.max_position());
    }

    pub fn up_page(&mut self) {
        self.position = self.position.saturating_sub(self.viewport_length.max(1));
    }

    pub fn down_page(&mut self) {
        self.position = (self.position + self.viewport_length.max(1)).min(self.max_position());
    }

    pub fn last(&mut self) {
        self.position = self.max_position();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_follows_growth_while_at_last() {
        let mut scroll = Scroll::default();
        scroll.set_state(5, 10);
        assert_eq!(scroll.position(), 0);

        scroll.set_state(25, 10);
        assert_eq!(scroll.position(), 15);
        assert!(scroll.is_position_at_last());
    }

    #[test]
    fn test_stays_put_when_scrolled_back() {
        let mut scroll = Scroll::default();
        scroll.set_state(25, 10);
        scroll.up();
        scroll.up();
        assert_eq!(scroll.position(), 13);

        scroll.set_state(30, 10);
        assert_eq!(scroll.position(), 13);
    }

    #[test]
    fn test_paging_is_clamped() {
        let mut scroll = Scroll::default();
        scroll.set_state(25, 10);
        scroll.up_page();
        scroll.up_page();
        assert_eq!(scroll.position(), 0);

        scroll.down_page();
        scroll.down_page();
        assert_eq!(scroll.position(), 15);
        scroll.down();
        assert_eq!(scroll.position(), 15);
    }
}
