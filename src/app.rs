use crate::export::{Block, Document};

/// State of the terminal document viewer.
pub struct App {
    blocks: Vec<Block>,
    total_lines: usize,
    scroll: usize,
}

impl App {
    pub fn new(document: &Document<'_>) -> Self {
        let blocks: Vec<Block> = document.blocks().collect();
        // One blank separator line between blocks.
        let total_lines = blocks.iter().map(|b| b.lines().len()).sum::<usize>()
            + blocks.len().saturating_sub(1);

        Self {
            blocks,
            total_lines,
            scroll: 0,
        }
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn total_lines(&self) -> usize {
        self.total_lines
    }

    pub fn scroll(&self) -> usize {
        self.scroll
    }

    pub fn question_count(&self) -> usize {
        self.blocks
            .iter()
            .filter(|b| matches!(b, Block::Question(_)))
            .count()
    }

    fn max_scroll(&self) -> usize {
        self.total_lines.saturating_sub(1)
    }

    pub fn scroll_down(&mut self) {
        if self.scroll < self.max_scroll() {
            self.scroll += 1;
        }
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll = self.max_scroll();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::render;
    use crate::models::{Answer, Question};
    use crate::store::CategoryStore;

    fn app() -> App {
        let mut store = CategoryStore::new();
        store.add_category("Math").unwrap();
        store
            .save_question("Math", Question::new("Q1", "2+2", Answer::classic("4").unwrap()))
            .unwrap();
        App::new(&render(&store).unwrap())
    }

    #[test]
    fn test_line_count() {
        // title, blank, heading, blank, three question lines
        let app = app();
        assert_eq!(app.total_lines(), 7);
        assert_eq!(app.question_count(), 1);
    }

    #[test]
    fn test_scroll_bounds() {
        let mut app = app();
        app.scroll_up();
        assert_eq!(app.scroll(), 0);

        for _ in 0..20 {
            app.scroll_down();
        }
        assert_eq!(app.scroll(), 6);

        app.scroll_to_top();
        assert_eq!(app.scroll(), 0);
        app.scroll_to_bottom();
        assert_eq!(app.scroll(), 6);
    }
}
