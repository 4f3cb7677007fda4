// at most one open entry per group; selecting the open entry closes it
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AccordionState {
    #[default]
    Closed,
    Open(usize),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Accordion {
    state: AccordionState,
    len: Option<usize>,
}

impl Accordion {
    pub fn new() -> Self {
        Self::default()
    }

    // bounded groups ignore selections past the end
    pub fn with_len(len: usize) -> Self {
        Accordion {
            state: AccordionState::Closed,
            len: Some(len),
        }
    }

    pub fn select(&mut self, idx: usize) -> AccordionState {
        if self.len.is_some_and(|len| idx >= len) {
            return self.state;
        }

        self.state = match self.state {
            AccordionState::Open(open) if open == idx => AccordionState::Closed,
            _ => AccordionState::Open(idx),
        };
        self.state
    }

    pub fn close(&mut self) {
        self.state = AccordionState::Closed;
    }

    pub fn state(&self) -> AccordionState {
        self.state
    }

    pub fn open_index(&self) -> Option<usize> {
        match self.state {
            AccordionState::Open(idx) => Some(idx),
            AccordionState::Closed => None,
        }
    }

    pub fn is_open(&self, idx: usize) -> bool {
        self.open_index() == Some(idx)
    }
}

// tab strips always have exactly one tab selected
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TabGroup {
    selected: usize,
    len: usize,
}

impl TabGroup {
    pub fn new(len: usize) -> Self {
        TabGroup { selected: 0, len }
    }

    pub fn select(&mut self, idx: usize) -> usize {
        if idx < self.len {
            self.selected = idx;
        }
        self.selected
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn is_selected(&self, idx: usize) -> bool {
        self.selected == idx
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selecting_twice_closes() {
        let mut group = Accordion::new();
        assert_eq!(group.select(2), AccordionState::Open(2));
        assert_eq!(group.select(2), AccordionState::Closed);
        assert_eq!(group.open_index(), None);
    }

    #[test]
    fn selecting_another_entry_moves_the_open_slot() {
        let mut group = Accordion::new();
        group.select(0);
        group.select(3);
        assert!(group.is_open(3));
        assert!(!group.is_open(0));
    }

    #[test]
    fn at_most_one_entry_is_open_for_any_sequence() {
        // deterministic pseudo-random walk over a group of five entries
        let mut group = Accordion::with_len(5);
        let mut seed: u32 = 0x2545_f491;

        for _ in 0..500 {
            seed ^= seed << 13;
            seed ^= seed >> 17;
            seed ^= seed << 5;
            let before = group.state();
            let idx = (seed % 6) as usize;
            let after = group.select(idx);

            let open = (0..5).filter(|i| group.is_open(*i)).count();
            assert!(open <= 1);

            if idx >= 5 {
                assert_eq!(after, before);
            } else if before == AccordionState::Open(idx) {
                assert_eq!(after, AccordionState::Closed);
            } else {
                assert_eq!(after, AccordionState::Open(idx));
            }
        }
    }

    #[test]
    fn tabs_keep_a_selection() {
        let mut tabs = TabGroup::new(3);
        assert_eq!(tabs.selected(), 0);
        assert_eq!(tabs.select(2), 2);
        assert_eq!(tabs.select(2), 2);
        assert_eq!(tabs.select(7), 2);
        assert!(tabs.is_selected(2));
    }
}
