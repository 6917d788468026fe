//! Values derived from a session snapshot for display
//!
//! None of these are stored in `SessionState`; they are recomputed from it
//! on every render.

use super::state::{SessionState, Status};
use crate::types::Question;

/// Which navigation control the driver should offer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextControl {
    /// Nothing to offer until the current question is answered
    Hidden,
    /// Move to the next question
    Advance,
    /// Last question answered: end the session
    Finish,
}

/// Result band shown on the finish screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rating {
    Perfect,
    Great,
    Okay,
    Poor,
    Zero,
}

impl Rating {
    /// Band for a percentage; 0% is `Zero`, never `Poor`
    pub fn from_percentage(percentage: u32) -> Self {
        match percentage {
            100.. => Rating::Perfect,
            80..=99 => Rating::Great,
            50..=79 => Rating::Okay,
            1..=49 => Rating::Poor,
            0 => Rating::Zero,
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Rating::Perfect => "🥇",
            Rating::Great => "🎉",
            Rating::Okay => "🙃",
            Rating::Poor => "🤨",
            Rating::Zero => "🤦",
        }
    }
}

impl SessionState {
    pub fn num_questions(&self) -> usize {
        self.questions.len()
    }

    /// Sum of points over the questions currently held
    pub fn max_possible_points(&self) -> u32 {
        self.questions
            .iter()
            .fold(0u32, |acc, q| acc.saturating_add(q.points))
    }

    pub fn current_question(&self) -> Option<&Question> {
        if self.status != Status::Active {
            return None;
        }
        self.questions.get(self.index)
    }

    pub fn has_answered(&self) -> bool {
        self.answer.is_some()
    }

    /// Progress as `(done, total)`: the current question counts once answered
    pub fn progress(&self) -> (usize, usize) {
        let done = self.index + usize::from(self.has_answered());
        (done.min(self.num_questions()), self.num_questions())
    }

    pub fn next_control(&self) -> NextControl {
        if self.status != Status::Active || !self.has_answered() {
            return NextControl::Hidden;
        }
        if self.index + 1 < self.num_questions() {
            NextControl::Advance
        } else {
            NextControl::Finish
        }
    }

    /// Score as a percentage of the maximum, rounded up
    pub fn percentage(&self) -> u32 {
        let max = self.max_possible_points();
        if max == 0 {
            return 0;
        }
        let scaled = u64::from(self.points) * 100;
        let pct = scaled.div_ceil(u64::from(max));
        u32::try_from(pct).unwrap_or(u32::MAX)
    }

    pub fn rating(&self) -> Rating {
        Rating::from_percentage(self.percentage())
    }
}

/// Format a countdown as `MM:SS`
pub fn format_clock(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Difficulty;

    fn question(points: u32) -> Question {
        Question {
            text: "Q".to_string(),
            options: vec!["a".to_string(), "b".to_string()],
            correct_option: 0,
            points,
            difficulty: Difficulty::Medium,
        }
    }

    fn active_state(points: &[u32]) -> SessionState {
        SessionState {
            status: Status::Active,
            questions: points.iter().map(|p| question(*p)).collect(),
            seconds_remaining: Some(60),
            ..SessionState::default()
        }
    }

    #[test]
    fn test_max_possible_points() {
        let state = active_state(&[10, 20, 30]);
        assert_eq!(state.num_questions(), 3);
        assert_eq!(state.max_possible_points(), 60);
    }

    #[test]
    fn test_current_question_only_while_active() {
        let state = active_state(&[10, 20]);
        assert_eq!(state.current_question().map(|q| q.points), Some(10));

        let ready = SessionState {
            status: Status::Ready,
            ..state
        };
        assert!(ready.current_question().is_none());
    }

    #[test]
    fn test_progress_counts_answered_question() {
        let mut state = active_state(&[10, 20, 30]);
        assert_eq!(state.progress(), (0, 3));

        state.answer = Some(0);
        assert_eq!(state.progress(), (1, 3));

        state.index = 2;
        assert_eq!(state.progress(), (3, 3));
    }

    #[test]
    fn test_next_control() {
        let mut state = active_state(&[10, 20]);
        assert_eq!(state.next_control(), NextControl::Hidden);

        state.answer = Some(1);
        assert_eq!(state.next_control(), NextControl::Advance);

        state.index = 1;
        assert_eq!(state.next_control(), NextControl::Finish);
    }

    #[test]
    fn test_percentage_rounds_up() {
        let mut state = active_state(&[10, 20]);
        state.points = 10;
        assert_eq!(state.percentage(), 34);

        state.points = 30;
        assert_eq!(state.percentage(), 100);
    }

    #[test]
    fn test_percentage_with_no_points_available() {
        let state = active_state(&[]);
        assert_eq!(state.percentage(), 0);
        assert_eq!(state.rating(), Rating::Zero);
    }

    #[test]
    fn test_rating_bands() {
        assert_eq!(Rating::from_percentage(100), Rating::Perfect);
        assert_eq!(Rating::from_percentage(80), Rating::Great);
        assert_eq!(Rating::from_percentage(99), Rating::Great);
        assert_eq!(Rating::from_percentage(50), Rating::Okay);
        assert_eq!(Rating::from_percentage(49), Rating::Poor);
        assert_eq!(Rating::from_percentage(1), Rating::Poor);
        assert_eq!(Rating::from_percentage(0), Rating::Zero);
        assert_eq!(Rating::Perfect.emoji(), "🥇");
        // A zero score has its own band, distinct from a poor one
        assert_eq!(Rating::from_percentage(0).emoji(), "🤦");
        assert_ne!(Rating::from_percentage(0).emoji(), Rating::Poor.emoji());
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(59), "00:59");
        assert_eq!(format_clock(90), "01:30");
        assert_eq!(format_clock(450), "07:30");
        assert_eq!(format_clock(6000), "100:00");
    }
}
