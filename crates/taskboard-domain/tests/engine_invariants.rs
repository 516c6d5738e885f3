//! Engine-level integrity tests: every reachable board stays consistent,
//! and each operation's observable effects are exactly the documented ones.

use chrono::{DateTime, Duration, Utc};
use taskboard_core::BoardError;
use taskboard_domain::engine;
use taskboard_domain::{
    Board, ColumnId, Intent, PriorityFilter, Subtask, TaskChanges, TaskDraft,
};

fn t0() -> DateTime<Utc> {
    "2026-01-15T10:00:00Z".parse().unwrap()
}

fn t1() -> DateTime<Utc> {
    t0() + Duration::minutes(30)
}

fn seeded_board(titles: &[&str]) -> Board {
    let mut board = Board::new();
    for title in titles {
        board = engine::create_task(
            &board,
            TaskDraft {
                title: title.to_string(),
                ..Default::default()
            },
            t0(),
        );
    }
    board
}

#[test]
fn consistency_holds_across_operation_sequences() {
    let mut board = seeded_board(&["a", "b", "c"]);
    assert!(board.is_consistent());

    let ids: Vec<_> = board.tasks.iter().map(|t| t.id).collect();

    let intents = vec![
        Intent::MoveTask {
            task_id: ids[0],
            source: ColumnId::Backlog,
            dest: ColumnId::InProgress,
            dest_index: 0,
        },
        Intent::MoveTask {
            task_id: ids[1],
            source: ColumnId::Backlog,
            dest: ColumnId::InProgress,
            dest_index: 1,
        },
        Intent::MoveTask {
            task_id: ids[1],
            source: ColumnId::InProgress,
            dest: ColumnId::InProgress,
            dest_index: 0,
        },
        Intent::UpdateTask {
            task_id: ids[2],
            changes: TaskChanges {
                title: Some("renamed".to_string()),
                ..Default::default()
            },
        },
        Intent::MoveTask {
            task_id: ids[1],
            source: ColumnId::InProgress,
            dest: ColumnId::Done,
            dest_index: 0,
        },
        Intent::DeleteTask { task_id: ids[0] },
        Intent::CreateTask {
            draft: TaskDraft::default(),
        },
    ];

    for intent in intents {
        board = engine::apply(&board, intent, t1()).unwrap();
        assert!(board.is_consistent());
    }
}

#[test]
fn create_then_delete_restores_the_original_board() {
    let original = seeded_board(&["existing"]);

    let created = engine::create_task(&original, TaskDraft::default(), t1());
    let new_id = *created.columns.backlog.task_ids.last().unwrap();
    let restored = engine::delete_task(&created, new_id).unwrap();

    assert_eq!(restored, original);
}

#[test]
fn same_column_reorder_touches_only_the_ordering() {
    let board = seeded_board(&["a", "b", "c"]);
    let ids = board.columns.backlog.task_ids.clone();
    let before = board.clone();

    for dest_index in 0..=2 {
        let next = engine::move_task(
            &board,
            ids[2],
            ColumnId::Backlog,
            ColumnId::Backlog,
            dest_index,
            t1(),
        )
        .unwrap();

        // only the backlog ordering may differ
        assert_eq!(next.tasks, before.tasks);
        assert_eq!(next.columns.in_progress, before.columns.in_progress);
        assert_eq!(next.columns.review, before.columns.review);
        assert_eq!(next.columns.done, before.columns.done);

        let task = next.task(ids[2]).unwrap();
        assert_eq!(task.column, ColumnId::Backlog);
        assert_eq!(task.updated_at, t0());
        assert!(next.is_consistent());
    }
}

#[test]
fn cross_column_move_postconditions() {
    let board = seeded_board(&["a", "b"]);
    let id = board.columns.backlog.task_ids[0];

    let next = engine::move_task(
        &board,
        id,
        ColumnId::Backlog,
        ColumnId::Review,
        0,
        t1(),
    )
    .unwrap();

    assert!(!next.columns.backlog.task_ids.contains(&id));
    assert_eq!(next.columns.review.task_ids[0], id);
    let task = next.task(id).unwrap();
    assert_eq!(task.column, ColumnId::Review);
    assert_eq!(task.updated_at, t1());
    assert!(next.is_consistent());
}

#[test]
fn move_index_bounds_are_inclusive_of_the_tail() {
    let board = seeded_board(&["a", "b", "c"]);
    let id = board.columns.backlog.task_ids[0];

    // destination is empty: only index 0 is valid
    assert!(engine::move_task(&board, id, ColumnId::Backlog, ColumnId::Done, 0, t1()).is_ok());
    let err =
        engine::move_task(&board, id, ColumnId::Backlog, ColumnId::Done, 1, t1()).unwrap_err();
    assert!(matches!(err, BoardError::InvalidIndex { index: 1, max: 0 }));

    // same-column: list holds three, so 0..=2 after removal
    assert!(
        engine::move_task(&board, id, ColumnId::Backlog, ColumnId::Backlog, 2, t1()).is_ok()
    );
    let err = engine::move_task(&board, id, ColumnId::Backlog, ColumnId::Backlog, 3, t1())
        .unwrap_err();
    assert!(matches!(err, BoardError::InvalidIndex { index: 3, max: 2 }));
}

#[test]
fn move_to_done_then_delete_empties_the_board() {
    let board = seeded_board(&["only"]);
    let id = board.columns.backlog.task_ids[0];

    let board = engine::move_task(&board, id, ColumnId::Backlog, ColumnId::Done, 0, t1()).unwrap();
    let board = engine::delete_task(&board, id).unwrap();

    assert!(board.tasks.is_empty());
    assert!(board.columns.done.task_ids.is_empty());
    assert!(board.is_consistent());
}

#[test]
fn double_toggle_restores_the_subtask() {
    let board = seeded_board(&["with subtasks"]);
    let id = board.tasks[0].id;
    let subtasks = vec![
        Subtask::new("first".to_string()),
        Subtask::new("second".to_string()),
    ];
    let target = subtasks[0].id;
    let board = engine::update_task(
        &board,
        id,
        TaskChanges {
            subtasks: Some(subtasks),
            ..Default::default()
        },
        t0(),
    )
    .unwrap();

    let toggled = engine::toggle_subtask(&board, id, target, t1()).unwrap();
    let task = toggled.task(id).unwrap();
    assert!(task.subtasks[0].completed);
    // everything except the flag and updated_at is untouched
    assert_eq!(task.subtasks[1], board.task(id).unwrap().subtasks[1]);
    assert_eq!(task.title, board.task(id).unwrap().title);
    assert_eq!(task.updated_at, t1());

    let restored = engine::toggle_subtask(&toggled, id, target, t1()).unwrap();
    assert!(!restored.task(id).unwrap().subtasks[0].completed);
}

#[test]
fn failed_update_leaves_the_document_byte_for_byte_unchanged() {
    let board = seeded_board(&["a", "b"]);
    let before = serde_json::to_vec(&board).unwrap();

    let err = engine::update_task(
        &board,
        taskboard_domain::TaskId::new_v4(),
        TaskChanges {
            priority: Some(taskboard_domain::Priority::Critical),
            ..Default::default()
        },
        t1(),
    )
    .unwrap_err();
    assert!(matches!(err, BoardError::TaskNotFound(_)));

    let after = serde_json::to_vec(&board).unwrap();
    assert_eq!(before, after);
}

#[test]
fn filtering_a_filtered_sequence_is_a_fixed_point() {
    let mut board = seeded_board(&["auth refactor", "infra work"]);
    board = engine::update_task(
        &board,
        board.tasks[0].id,
        TaskChanges {
            tags: Some(vec!["auth".to_string()]),
            ..Default::default()
        },
        t0(),
    )
    .unwrap();

    let once: Vec<_> = taskboard_domain::filter_tasks(&board.tasks, "auth", PriorityFilter::All)
        .into_iter()
        .cloned()
        .collect();
    let twice: Vec<_> = taskboard_domain::filter_tasks(&once, "auth", PriorityFilter::All)
        .into_iter()
        .cloned()
        .collect();
    assert_eq!(once, twice);
}
