//! Session reducer
//!
//! The only place session state changes. `reduce_with` is a pure function of
//! `(SessionState, Action, rng)`; the rng is consulted by `Start` alone.
//!
//! Transitions are keyed on `(status, action)`. Any pair not listed below is
//! an integration bug and comes back as `QuizError::InvalidTransition`.

use rand::Rng;

use super::actions::Action;
use super::state::{SessionState, Status};
use crate::error::{QuizError, Result};
use crate::selector::select;

/// Apply an action using the thread-local random source
pub fn reduce(state: SessionState, action: Action) -> Result<SessionState> {
    reduce_with(state, action, &mut rand::thread_rng())
}

/// Apply an action with an injected random source
///
/// Returns the next snapshot, or `InvalidTransition` when the action's
/// precondition does not hold for the current status.
pub fn reduce_with<R: Rng + ?Sized>(
    state: SessionState,
    action: Action,
    rng: &mut R,
) -> Result<SessionState> {
    match (state.status, action) {
        (_, Action::DataReceived(pool)) => Ok(SessionState {
            questions: pool,
            status: Status::Ready,
            ..state
        }),

        (_, Action::FetchFailed) => Ok(SessionState {
            status: Status::Error,
            ..state
        }),

        (Status::Ready, Action::Start) => Ok(start(state, rng)),

        (Status::Active, Action::AnswerSubmitted(chosen)) => submit_answer(state, chosen),

        (Status::Active, Action::Advance) => advance(state),

        (Status::Active, Action::Finish) => Ok(finish(state)),

        (Status::Active, Action::Tick) => Ok(tick(state)),

        (Status::Ready, Action::SetQuestionLimit(requested)) => {
            Ok(set_question_limit(state, requested))
        }

        // Filtering is deferred to the next start
        (Status::Ready, Action::SetDifficulty(difficulty)) => Ok(SessionState {
            difficulty,
            ..state
        }),

        (_, Action::Reset) => Ok(reset(state)),

        (status, action) => Err(invalid(action.kind(), status)),
    }
}

fn invalid(action: &'static str, status: Status) -> QuizError {
    QuizError::InvalidTransition { action, status }
}

fn start<R: Rng + ?Sized>(state: SessionState, rng: &mut R) -> SessionState {
    // Budget follows the pool size before filtering and limiting.
    let pool_len = u32::try_from(state.questions.len()).unwrap_or(u32::MAX);
    let budget = pool_len.saturating_mul(state.settings.seconds_per_question);

    let selected = select(
        &state.questions,
        state.difficulty,
        state.selected_questions_limit,
        rng,
    );

    SessionState {
        questions: selected,
        status: Status::Active,
        index: 0,
        answer: None,
        points: 0,
        seconds_remaining: Some(budget),
        ..state
    }
}

fn submit_answer(state: SessionState, chosen: usize) -> Result<SessionState> {
    if state.answer.is_some() {
        return Err(invalid("answerSubmitted", state.status));
    }

    let question = state
        .questions
        .get(state.index)
        .ok_or_else(|| invalid("answerSubmitted", state.status))?;

    if chosen >= question.options.len() {
        return Err(QuizError::InvalidAnswer {
            chosen,
            options: question.options.len(),
        });
    }

    let points = if question.is_correct(chosen) {
        state.points.saturating_add(question.points)
    } else {
        state.points
    };

    Ok(SessionState {
        answer: Some(chosen),
        points,
        ..state
    })
}

fn advance(state: SessionState) -> Result<SessionState> {
    if state.index + 1 >= state.questions.len() {
        return Err(invalid("advance", state.status));
    }

    Ok(SessionState {
        index: state.index + 1,
        answer: None,
        ..state
    })
}

fn finish(state: SessionState) -> SessionState {
    SessionState {
        status: Status::Finished,
        high_score: state.points.max(state.high_score),
        seconds_remaining: None,
        answer: None,
        ..state
    }
}

/// Decrement the countdown; the tick after it reaches zero finishes.
fn tick(state: SessionState) -> SessionState {
    match state.seconds_remaining {
        Some(0) | None => finish(state),
        Some(secs) => SessionState {
            seconds_remaining: Some(secs - 1),
            ..state
        },
    }
}

fn set_question_limit(state: SessionState, requested: Option<i64>) -> SessionState {
    let pool_len = state.questions.len();

    let selected_questions_limit = match requested {
        Some(n) if n > 0 && pool_len > 0 => {
            Some(usize::try_from(n).unwrap_or(usize::MAX).min(pool_len))
        }
        _ => None,
    };

    SessionState {
        selected_questions_limit,
        ..state
    }
}

fn reset(state: SessionState) -> SessionState {
    SessionState {
        status: Status::Ready,
        index: 0,
        answer: None,
        points: 0,
        seconds_remaining: None,
        high_score: state.points.max(state.high_score),
        selected_questions_limit: None,
        questions: Vec::new(),
        ..state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Difficulty, DifficultyFilter, Question};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn question(points: u32, difficulty: Difficulty) -> Question {
        Question {
            text: format!("{} point question", points),
            options: vec!["a".to_string(), "b".to_string(), "c".to_string()],
            correct_option: 1,
            points,
            difficulty,
        }
    }

    fn ready(pool: Vec<Question>) -> SessionState {
        reduce(SessionState::new(), Action::DataReceived(pool)).unwrap()
    }

    fn active(pool: Vec<Question>) -> SessionState {
        let mut rng = StdRng::seed_from_u64(1);
        reduce_with(ready(pool), Action::Start, &mut rng).unwrap()
    }

    fn apply(state: SessionState, action: Action) -> SessionState {
        reduce(state, action).unwrap()
    }

    #[test]
    fn test_data_received_moves_to_ready() {
        let state = ready(vec![question(10, Difficulty::Easy)]);
        assert_eq!(state.status, Status::Ready);
        assert_eq!(state.questions.len(), 1);
    }

    #[test]
    fn test_fetch_failed_moves_to_error() {
        let state = apply(SessionState::new(), Action::FetchFailed);
        assert_eq!(state.status, Status::Error);
    }

    #[test]
    fn test_reducer_is_pure() {
        let state = ready(vec![question(10, Difficulty::Easy)]);
        let original = state.clone();

        let next = apply(state.clone(), Action::SetQuestionLimit(Some(1)));

        assert_eq!(state, original);
        assert_eq!(next.selected_questions_limit, Some(1));
        assert_eq!(apply(state, Action::SetQuestionLimit(Some(1))), next);
    }

    #[test]
    fn test_start_selects_and_sets_budget() {
        let pool = vec![
            question(10, Difficulty::Easy),
            question(20, Difficulty::Easy),
            question(30, Difficulty::Easy),
        ];
        let state = ready(pool);
        let state = apply(state, Action::SetDifficulty(DifficultyFilter::Easy));
        let state = apply(state, Action::SetQuestionLimit(Some(2)));
        let state = apply(state, Action::Start);

        assert_eq!(state.status, Status::Active);
        assert_eq!(state.questions.len(), 2);
        assert!(state.questions.iter().all(|q| q.difficulty == Difficulty::Easy));
        assert_eq!(state.seconds_remaining, Some(90));
        assert_eq!(state.index, 0);
        assert_eq!(state.answer, None);
    }

    #[test]
    fn test_start_budget_uses_pool_before_filter() {
        let pool = vec![
            question(10, Difficulty::Easy),
            question(20, Difficulty::Hard),
            question(30, Difficulty::Hard),
            question(40, Difficulty::Medium),
        ];
        let state = apply(ready(pool), Action::SetDifficulty(DifficultyFilter::Hard));
        let state = apply(state, Action::Start);

        assert_eq!(state.questions.len(), 2);
        assert_eq!(state.seconds_remaining, Some(120));
    }

    #[test]
    fn test_start_respects_seconds_per_question() {
        let mut state = ready(vec![question(10, Difficulty::Easy), question(5, Difficulty::Hard)]);
        state.settings.seconds_per_question = 15;

        let state = apply(state, Action::Start);
        assert_eq!(state.seconds_remaining, Some(30));
    }

    #[test]
    fn test_start_with_no_matching_questions_is_empty_session() {
        let state = apply(
            ready(vec![question(10, Difficulty::Easy)]),
            Action::SetDifficulty(DifficultyFilter::Hard),
        );
        let state = apply(state, Action::Start);

        assert_eq!(state.status, Status::Active);
        assert!(state.is_empty_session());
        assert_eq!(state.seconds_remaining, Some(30));

        let err = reduce(state.clone(), Action::AnswerSubmitted(0)).unwrap_err();
        assert!(matches!(err, QuizError::InvalidTransition { action: "answerSubmitted", .. }));

        let finished = apply(state, Action::Finish);
        assert_eq!(finished.status, Status::Finished);
        assert_eq!(finished.points, 0);
    }

    #[test]
    fn test_correct_answer_adds_points() {
        let state = active(vec![question(10, Difficulty::Easy)]);

        let state = apply(state, Action::AnswerSubmitted(1));
        assert_eq!(state.answer, Some(1));
        assert_eq!(state.points, 10);
    }

    #[test]
    fn test_wrong_answer_keeps_points() {
        let state = active(vec![question(10, Difficulty::Easy)]);

        let state = apply(state, Action::AnswerSubmitted(2));
        assert_eq!(state.answer, Some(2));
        assert_eq!(state.points, 0);
    }

    #[test]
    fn test_second_answer_rejected() {
        let state = active(vec![question(10, Difficulty::Easy)]);
        let state = apply(state, Action::AnswerSubmitted(0));

        let err = reduce(state, Action::AnswerSubmitted(1)).unwrap_err();
        assert!(matches!(
            err,
            QuizError::InvalidTransition {
                action: "answerSubmitted",
                status: Status::Active
            }
        ));
    }

    #[test]
    fn test_answer_out_of_range_rejected() {
        let state = active(vec![question(10, Difficulty::Easy)]);

        let err = reduce(state, Action::AnswerSubmitted(3)).unwrap_err();
        assert!(matches!(err, QuizError::InvalidAnswer { chosen: 3, options: 3 }));
    }

    #[test]
    fn test_advance_clears_answer() {
        let state = active(vec![question(10, Difficulty::Easy), question(20, Difficulty::Easy)]);
        let state = apply(state, Action::AnswerSubmitted(1));

        let state = apply(state, Action::Advance);
        assert_eq!(state.index, 1);
        assert_eq!(state.answer, None);
    }

    #[test]
    fn test_advance_past_last_rejected() {
        let state = active(vec![question(10, Difficulty::Easy)]);

        let err = reduce(state, Action::Advance).unwrap_err();
        assert!(matches!(err, QuizError::InvalidTransition { action: "advance", .. }));
    }

    #[test]
    fn test_finish_updates_high_score() {
        let mut state = active(vec![question(10, Difficulty::Easy)]);
        state.high_score = 5;
        let state = apply(state, Action::AnswerSubmitted(1));

        let state = apply(state, Action::Finish);
        assert_eq!(state.status, Status::Finished);
        assert_eq!(state.high_score, 10);
        assert_eq!(state.seconds_remaining, None);
        assert_eq!(state.answer, None);
    }

    #[test]
    fn test_finish_keeps_higher_high_score() {
        let mut state = active(vec![question(10, Difficulty::Easy)]);
        state.high_score = 50;

        let state = apply(state, Action::Finish);
        assert_eq!(state.high_score, 50);
    }

    #[test]
    fn test_tick_decrements() {
        let state = active(vec![question(10, Difficulty::Easy)]);
        assert_eq!(state.seconds_remaining, Some(30));

        let state = apply(state, Action::Tick);
        assert_eq!(state.seconds_remaining, Some(29));
        assert_eq!(state.status, Status::Active);
    }

    #[test]
    fn test_tick_at_zero_finishes() {
        let mut state = active(vec![question(10, Difficulty::Easy)]);
        state.seconds_remaining = Some(0);
        state.points = 15;
        state.high_score = 10;

        let state = apply(state, Action::Tick);
        assert_eq!(state.status, Status::Finished);
        assert_eq!(state.high_score, 15);
        assert_eq!(state.seconds_remaining, None);
    }

    #[test]
    fn test_tick_after_finish_rejected() {
        let state = apply(active(vec![question(10, Difficulty::Easy)]), Action::Finish);

        let err = reduce(state, Action::Tick).unwrap_err();
        assert!(matches!(
            err,
            QuizError::InvalidTransition {
                action: "tick",
                status: Status::Finished
            }
        ));
    }

    #[test]
    fn test_set_question_limit_clamps() {
        let state = ready(vec![question(10, Difficulty::Easy), question(20, Difficulty::Easy)]);

        assert_eq!(
            apply(state.clone(), Action::SetQuestionLimit(Some(9))).selected_questions_limit,
            Some(2)
        );
        assert_eq!(
            apply(state.clone(), Action::SetQuestionLimit(Some(1))).selected_questions_limit,
            Some(1)
        );
        assert_eq!(
            apply(state.clone(), Action::SetQuestionLimit(Some(0))).selected_questions_limit,
            None
        );
        assert_eq!(
            apply(state.clone(), Action::SetQuestionLimit(Some(-4))).selected_questions_limit,
            None
        );
        assert_eq!(
            apply(state, Action::SetQuestionLimit(None)).selected_questions_limit,
            None
        );
    }

    #[test]
    fn test_set_question_limit_on_empty_pool_is_none() {
        let state = ready(Vec::new());
        let state = apply(state, Action::SetQuestionLimit(Some(3)));
        assert_eq!(state.selected_questions_limit, None);
    }

    #[test]
    fn test_set_difficulty_does_not_refilter() {
        let pool = vec![question(10, Difficulty::Easy), question(20, Difficulty::Hard)];
        let state = apply(ready(pool), Action::SetDifficulty(DifficultyFilter::Hard));

        assert_eq!(state.difficulty, DifficultyFilter::Hard);
        assert_eq!(state.questions.len(), 2);
    }

    #[test]
    fn test_configuration_only_while_ready() {
        let state = active(vec![question(10, Difficulty::Easy)]);

        assert!(reduce(state.clone(), Action::SetQuestionLimit(Some(1))).is_err());
        assert!(reduce(state.clone(), Action::SetDifficulty(DifficultyFilter::Easy)).is_err());
        assert!(reduce(state, Action::Start).is_err());
    }

    #[test]
    fn test_actions_rejected_while_loading() {
        for action in [Action::Start, Action::Advance, Action::Finish, Action::Tick] {
            let kind = action.kind();
            let err = reduce(SessionState::new(), action).unwrap_err();
            match err {
                QuizError::InvalidTransition { action, status } => {
                    assert_eq!(action, kind);
                    assert_eq!(status, Status::Loading);
                }
                other => panic!("unexpected error: {other}"),
            }
        }
    }

    #[test]
    fn test_reset_keeps_high_score_and_clears_session() {
        let state = active(vec![question(10, Difficulty::Easy), question(20, Difficulty::Easy)]);
        let state = apply(state, Action::AnswerSubmitted(1));

        let state = apply(state, Action::Reset);
        assert_eq!(state.status, Status::Ready);
        assert!(state.questions.is_empty());
        assert_eq!(state.index, 0);
        assert_eq!(state.answer, None);
        assert_eq!(state.points, 0);
        assert!(state.high_score > 0);
        assert_eq!(state.seconds_remaining, None);
        assert_eq!(state.selected_questions_limit, None);
    }

    #[test]
    fn test_reset_preserves_difficulty_and_settings() {
        let mut state = ready(vec![question(10, Difficulty::Medium)]);
        state.settings.seconds_per_question = 45;
        let state = apply(state, Action::SetDifficulty(DifficultyFilter::Medium));

        let state = apply(state, Action::Reset);
        assert_eq!(state.difficulty, DifficultyFilter::Medium);
        assert_eq!(state.settings.seconds_per_question, 45);
    }

    #[test]
    fn test_reset_allowed_from_error() {
        let state = apply(SessionState::new(), Action::FetchFailed);
        let state = apply(state, Action::Reset);
        assert_eq!(state.status, Status::Ready);
    }
}
