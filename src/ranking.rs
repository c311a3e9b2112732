//! Scoring and ranking.
//!
//! Recomputed from scratch on every request: the scorer joins the
//! participant roster, the response ledger, and the question set by
//! identifier. A response whose question id is unknown is skipped
//! silently; it is not an error condition.

use serde::{Deserialize, Serialize};

use crate::models::{Participant, Question, Response};

/// One row of the overall ranking, ordered by score descending.
///
/// No explicit rank number here; ties are visible as equal scores.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingEntry {
    pub name: String,
    pub score: u32,
    pub total_questions: usize,
    pub total_points: u32,
    pub percentage: u32,
}

/// One row of the per-question ranking view, with competition-style
/// rank numbers (`[30, 30, 10]` ranks as `[1, 1, 3]`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionRankingEntry {
    pub user_name: String,
    pub selected_answer: String,
    pub is_correct: bool,
    pub points: u32,
    pub rank: usize,
}

/// Points a single response earns, plus the points it attempted.
///
/// Returns `None` when the question id does not resolve; the caller
/// excludes such responses from both sums.
fn score_response(response: &Response, questions: &[Question]) -> Option<(u32, u32)> {
    let question = questions.iter().find(|q| q.id == response.question_id)?;
    let earned = match question.correct_option() {
        Some(correct) if correct.id == response.selected_option_id => question.points,
        _ => 0,
    };
    Some((earned, question.points))
}

/// Compute the overall ranking: one entry per registered participant,
/// sorted by score descending.
///
/// `totalPoints` counts the points of every question the participant
/// answered (correctly or not), so `percentage` reflects the share of
/// attempted points earned. Both are 0 for a participant with no
/// scoreable responses, and the percentage stays 0 rather than
/// dividing by zero.
pub fn overall_ranking(
    questions: &[Question],
    participants: &[Participant],
    responses: &[Response],
) -> Vec<RankingEntry> {
    let mut ranking: Vec<RankingEntry> = participants
        .iter()
        .map(|participant| {
            let mut score = 0;
            let mut total_points = 0;
            for response in responses.iter().filter(|r| r.user_name == participant.name) {
                if let Some((earned, attempted)) = score_response(response, questions) {
                    score += earned;
                    total_points += attempted;
                }
            }

            RankingEntry {
                name: participant.name.clone(),
                score,
                total_questions: questions.len(),
                total_points,
                percentage: percentage(score, total_points),
            }
        })
        .collect();

    // Stable sort keeps registration order among ties.
    ranking.sort_by(|a, b| b.score.cmp(&a.score));
    ranking
}

/// Compute the ranking view for a single question: one entry per
/// response to it, sorted by points descending with competition ranks.
pub fn question_ranking(question: &Question, responses: &[Response]) -> Vec<QuestionRankingEntry> {
    let correct_id = question.correct_option().map(|opt| opt.id.as_str());

    let mut entries: Vec<QuestionRankingEntry> = responses
        .iter()
        .filter(|r| r.question_id == question.id)
        .map(|response| {
            let is_correct = correct_id == Some(response.selected_option_id.as_str());
            QuestionRankingEntry {
                user_name: response.user_name.clone(),
                selected_answer: response.selected_option_text.clone(),
                is_correct,
                points: if is_correct { question.points } else { 0 },
                rank: 0,
            }
        })
        .collect();

    entries.sort_by(|a, b| b.points.cmp(&a.points));

    // Competition ranking: equal points share a rank, the next distinct
    // score resumes at its position ("1, 1, 3", not "1, 1, 2").
    let mut current_rank = 1;
    for index in 0..entries.len() {
        if index > 0 && entries[index - 1].points > entries[index].points {
            current_rank = index + 1;
        }
        entries[index].rank = current_rank;
    }

    entries
}

fn percentage(score: u32, total_points: u32) -> u32 {
    if total_points == 0 {
        0
    } else {
        (f64::from(score) / f64::from(total_points) * 100.0).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use uuid::Uuid;

    use super::*;
    use crate::models::QuestionOption;

    fn question(id: &str, points: u32, correct: &str) -> Question {
        Question {
            id: id.to_string(),
            title: format!("Question {id}"),
            options: ["A", "B", "C", "D"]
                .iter()
                .map(|opt| QuestionOption {
                    id: opt.to_string(),
                    text: format!("Option {opt}"),
                    is_correct: *opt == correct,
                })
                .collect(),
            points,
        }
    }

    fn participant(name: &str) -> Participant {
        Participant {
            name: name.to_string(),
            joined_at: Utc::now(),
        }
    }

    fn response(name: &str, question_id: &str, option_id: &str) -> Response {
        Response {
            id: Uuid::new_v4(),
            user_name: name.to_string(),
            question_id: question_id.to_string(),
            selected_option_id: option_id.to_string(),
            selected_option_text: format!("Option {option_id}"),
        }
    }

    #[test]
    fn test_correct_option_earns_points_any_other_earns_zero() {
        let questions = vec![question("1", 10, "B")];
        let participants = vec![participant("Alice"), participant("Bob")];
        let responses = vec![response("Alice", "1", "B"), response("Bob", "1", "C")];

        let ranking = overall_ranking(&questions, &participants, &responses);
        assert_eq!(ranking[0].name, "Alice");
        assert_eq!(ranking[0].score, 10);
        assert_eq!(ranking[1].name, "Bob");
        assert_eq!(ranking[1].score, 0);
        // Both attempted the same points.
        assert_eq!(ranking[0].total_points, 10);
        assert_eq!(ranking[1].total_points, 10);
    }

    #[test]
    fn test_alice_example() {
        // q1 worth 10 (correct B), q2 worth 5 (correct A); Alice answers
        // B then B: score 10 of 15 attempted, 67 percent.
        let questions = vec![question("1", 10, "B"), question("2", 5, "A")];
        let participants = vec![participant("Alice")];
        let responses = vec![response("Alice", "1", "B"), response("Alice", "2", "B")];

        let ranking = overall_ranking(&questions, &participants, &responses);
        assert_eq!(ranking.len(), 1);
        assert_eq!(ranking[0].score, 10);
        assert_eq!(ranking[0].total_points, 15);
        assert_eq!(ranking[0].percentage, 67);
        assert_eq!(ranking[0].total_questions, 2);
    }

    #[test]
    fn test_unknown_question_is_skipped() {
        let questions = vec![question("1", 10, "A")];
        let participants = vec![participant("Alice")];
        let responses = vec![response("Alice", "1", "A"), response("Alice", "missing", "A")];

        let ranking = overall_ranking(&questions, &participants, &responses);
        assert_eq!(ranking[0].score, 10);
        assert_eq!(ranking[0].total_points, 10);
    }

    #[test]
    fn test_question_without_correct_option_never_scores() {
        let mut q = question("1", 10, "A");
        for opt in &mut q.options {
            opt.is_correct = false;
        }
        let participants = vec![participant("Alice")];
        let responses = vec![response("Alice", "1", "A")];

        let ranking = overall_ranking(&[q], &participants, &responses);
        assert_eq!(ranking[0].score, 0);
        // The question was still attempted.
        assert_eq!(ranking[0].total_points, 10);
        assert_eq!(ranking[0].percentage, 0);
    }

    #[test]
    fn test_percentage_zero_when_nothing_attempted() {
        let questions = vec![question("1", 10, "A")];
        let participants = vec![participant("Idle")];

        let ranking = overall_ranking(&questions, &participants, &[]);
        assert_eq!(ranking[0].total_points, 0);
        assert_eq!(ranking[0].percentage, 0);
    }

    #[test]
    fn test_overall_ranking_is_non_increasing() {
        let questions = vec![question("1", 10, "A"), question("2", 20, "A")];
        let participants = vec![
            participant("Low"),
            participant("High"),
            participant("Mid"),
        ];
        let responses = vec![
            response("Low", "1", "B"),
            response("High", "1", "A"),
            response("High", "2", "A"),
            response("Mid", "2", "A"),
        ];

        let ranking = overall_ranking(&questions, &participants, &responses);
        let scores: Vec<u32> = ranking.iter().map(|e| e.score).collect();
        assert_eq!(scores, vec![30, 20, 0]);
    }

    #[test]
    fn test_question_ranking_competition_ties() {
        let q = question("1", 30, "A");
        let responses = vec![
            response("Alice", "1", "A"),
            response("Bob", "1", "A"),
            response("Carol", "1", "B"),
        ];

        let ranking = question_ranking(&q, &responses);
        let points: Vec<u32> = ranking.iter().map(|e| e.points).collect();
        let ranks: Vec<usize> = ranking.iter().map(|e| e.rank).collect();
        assert_eq!(points, vec![30, 30, 0]);
        assert_eq!(ranks, vec![1, 1, 3]);
    }

    #[test]
    fn test_question_ranking_ignores_other_questions() {
        let q = question("1", 10, "A");
        let responses = vec![response("Alice", "2", "A")];
        assert!(question_ranking(&q, &responses).is_empty());
    }

    #[test]
    fn test_percentage_bounds() {
        assert_eq!(percentage(0, 0), 0);
        assert_eq!(percentage(0, 50), 0);
        assert_eq!(percentage(50, 50), 100);
        assert_eq!(percentage(10, 15), 67);
        assert_eq!(percentage(5, 15), 33);
    }
}
