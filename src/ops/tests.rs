// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Sidepanel-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Sidepanel and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::{Session, Timestamp, DEFAULT_TITLE};

use super::{apply_op, Applied, SessionOp};

fn timestamp() -> Timestamp {
    Timestamp::new("2024-05-01 09:30:00").expect("timestamp")
}

fn session_with_questions(texts: &[&str]) -> Session {
    let mut session = Session::new();
    for text in texts {
        let applied = apply_op(
            &mut session,
            &SessionOp::AddQuestion {
                text: (*text).to_owned(),
                submitted_at: timestamp(),
            },
        );
        assert_eq!(applied, Applied::Changed);
    }
    session
}

#[test]
fn set_title_replaces_the_title() {
    let mut session = Session::new();
    assert_eq!(session.title(), DEFAULT_TITLE);

    let applied = apply_op(
        &mut session,
        &SessionOp::SetTitle {
            title: "All Hands".to_owned(),
        },
    );

    assert_eq!(applied, Applied::Changed);
    assert_eq!(session.title(), "All Hands");
}

#[test]
fn set_title_keeps_raw_surrounding_whitespace() {
    let mut session = Session::new();

    apply_op(
        &mut session,
        &SessionOp::SetTitle {
            title: "  Town Hall ".to_owned(),
        },
    );

    assert_eq!(session.title(), "  Town Hall ");
}

#[test]
fn blank_title_is_a_silent_noop() {
    let mut session = Session::new();
    session.set_title("Kept");

    for raw in ["", "   ", "\n\t"] {
        let applied = apply_op(
            &mut session,
            &SessionOp::SetTitle {
                title: raw.to_owned(),
            },
        );
        assert_eq!(applied, Applied::Unchanged, "title {raw:?}");
    }

    assert_eq!(session.title(), "Kept");
}

#[test]
fn add_question_appends_at_the_end() {
    let session = session_with_questions(&["first", "second"]);

    let texts: Vec<&str> = session.questions().iter().map(|q| q.text()).collect();
    assert_eq!(texts, vec!["first", "second"]);
    assert_eq!(session.questions()[0].submitted_at(), &timestamp());
}

#[test]
fn blank_question_is_a_silent_noop() {
    let mut session = session_with_questions(&["kept"]);

    for raw in ["", "  ", "\r\n"] {
        let applied = apply_op(
            &mut session,
            &SessionOp::AddQuestion {
                text: raw.to_owned(),
                submitted_at: timestamp(),
            },
        );
        assert_eq!(applied, Applied::Unchanged, "question {raw:?}");
    }

    assert_eq!(session.questions().len(), 1);
}

#[test]
fn delete_question_shifts_later_positions_down() {
    let mut session = session_with_questions(&["A", "B", "C"]);

    let applied = apply_op(&mut session, &SessionOp::DeleteQuestion { index: 1 });
    assert_eq!(applied, Applied::Changed);
    let texts: Vec<&str> = session.questions().iter().map(|q| q.text()).collect();
    assert_eq!(texts, vec!["A", "C"]);

    let applied = apply_op(&mut session, &SessionOp::DeleteQuestion { index: 1 });
    assert_eq!(applied, Applied::Changed);
    let texts: Vec<&str> = session.questions().iter().map(|q| q.text()).collect();
    assert_eq!(texts, vec!["A"]);
}

#[test]
fn delete_first_and_last_positions() {
    let mut session = session_with_questions(&["A", "B", "C"]);

    apply_op(&mut session, &SessionOp::DeleteQuestion { index: 0 });
    apply_op(&mut session, &SessionOp::DeleteQuestion { index: 1 });

    let texts: Vec<&str> = session.questions().iter().map(|q| q.text()).collect();
    assert_eq!(texts, vec!["B"]);
}

#[test]
fn out_of_range_delete_is_a_silent_noop() {
    let mut session = session_with_questions(&["A", "B"]);

    for index in [2, 99, usize::MAX] {
        let applied = apply_op(&mut session, &SessionOp::DeleteQuestion { index });
        assert_eq!(applied, Applied::Unchanged, "index {index}");
    }

    assert_eq!(session.questions().len(), 2);
}

#[test]
fn delete_on_empty_session_is_a_silent_noop() {
    let mut session = Session::new();

    let applied = apply_op(&mut session, &SessionOp::DeleteQuestion { index: 0 });

    assert_eq!(applied, Applied::Unchanged);
    assert!(session.questions().is_empty());
}
