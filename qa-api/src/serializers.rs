use crate::models::{Answer, Question, QuestionSummary};
use qa_types::{AnswerForm, AnswerFormResponse, AnswerItem, QuestionDetail, QuestionListItem};

impl From<Answer> for AnswerItem {
    fn from(answer: Answer) -> Self {
        AnswerItem {
            id: answer.id,
            question_id: answer.question_id,
            user_id: answer.user_id,
            text: answer.text,
            created_at: answer.created_at,
        }
    }
}

impl From<QuestionSummary> for QuestionListItem {
    fn from(summary: QuestionSummary) -> Self {
        QuestionListItem {
            id: summary.question.id,
            text: summary.question.text,
            created_at: summary.question.created_at,
            answers_count: summary.answers_count,
        }
    }
}

/// Answers are expected oldest first, as the storage returns them.
pub fn question_detail(question: Question, answers: Vec<Answer>) -> QuestionDetail {
    QuestionDetail {
        id: question.id,
        text: question.text,
        created_at: question.created_at,
        answers: answers.into_iter().map(AnswerItem::from).collect(),
    }
}

pub fn answer_form(question: Question, answers: Vec<Answer>) -> AnswerFormResponse {
    AnswerFormResponse {
        question: question_detail(question, answers),
        answer_form: AnswerForm::default(),
    }
}
