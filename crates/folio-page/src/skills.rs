//! Skill bar replay when the skills section scrolls into view

/// Delay before the bars grow back to their captured widths
pub const REPLAY_DELAY_MS: i32 = 100;

/// Inline width the bars collapse to
pub const COLLAPSED_WIDTH: &str = "0";

/// Inline widths captured from the section's bars, in document order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillReplay {
    widths: Vec<String>,
}

impl SkillReplay {
    /// Start a replay for an observer entry. Entries leaving the viewport
    /// replay nothing.
    ///
    /// An empty width is kept as is, so restoring it clears the inline style
    /// and the stylesheet's width applies again.
    pub fn on_entry<I, S>(is_intersecting: bool, widths: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if !is_intersecting {
            return None;
        }
        Some(Self {
            widths: widths.into_iter().map(Into::into).collect(),
        })
    }

    /// Widths to restore once [`REPLAY_DELAY_MS`] has passed
    pub fn widths(&self) -> &[String] {
        &self.widths
    }

    pub fn len(&self) -> usize {
        self.widths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widths.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entering_view_captures_widths_in_order() {
        let replay = SkillReplay::on_entry(true, ["90%", "75%", "60%"]).unwrap();
        assert_eq!(replay.len(), 3);
        assert_eq!(replay.widths(), ["90%", "75%", "60%"]);
    }

    #[test]
    fn leaving_view_replays_nothing() {
        assert_eq!(SkillReplay::on_entry(false, ["90%"]), None);
    }

    #[test]
    fn section_without_bars() {
        let replay = SkillReplay::on_entry(true, Vec::<String>::new()).unwrap();
        assert!(replay.is_empty());
    }

    #[test]
    fn unset_width_restores_empty() {
        let replay = SkillReplay::on_entry(true, ["", "40%"]).unwrap();
        assert_eq!(replay.widths()[0], "");
        assert_eq!(replay.widths()[1], "40%");
    }

    #[test]
    fn bars_collapse_to_zero_for_a_tenth_of_a_second() {
        assert_eq!(COLLAPSED_WIDTH, "0");
        assert_eq!(REPLAY_DELAY_MS, 100);
    }
}
