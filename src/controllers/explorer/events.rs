/// Input that the explorer loop waits on between frames.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ExplorerEvent {
    /// A point picked on the plot. A missing coordinate means the pick fell
    /// outside the plotted area.
    Selection { x: Option<f64>, y: Option<f64> },
    Quit,
}

impl ExplorerEvent {
    #[must_use]
    pub fn selection(x: f64, y: f64) -> Self {
        Self::Selection {
            x: Some(x),
            y: Some(y),
        }
    }

    /// Maps a key press to an event; only `q` and `Q` mean anything.
    #[must_use]
    pub fn from_key(key: char) -> Option<Self> {
        match key {
            'q' | 'Q' => Some(Self::Quit),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_q_in_either_case_quits() {
        assert_eq!(ExplorerEvent::from_key('q'), Some(ExplorerEvent::Quit));
        assert_eq!(ExplorerEvent::from_key('Q'), Some(ExplorerEvent::Quit));
    }

    #[test]
    fn test_other_keys_are_ignored() {
        for key in ['a', 'x', ' ', '1', 'é'] {
            assert_eq!(ExplorerEvent::from_key(key), None);
        }
    }
}
