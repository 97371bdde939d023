//! Integration tests for drop resolution on the board

use rstest::rstest;
use teamboard_kanban::board::apply_move;
use teamboard_kanban::filter::{TaskQuery, TaskSubset};
use teamboard_kanban::{BoardStore, MoveOutcome, MoveTask, NoOpReason, Status, Task};

fn task(id: &str, status: Status) -> Task {
    Task::new(format!("Task {id}"), status).with_id(id)
}

fn board(tasks: Vec<Task>) -> BoardStore {
    BoardStore::from_seed(tasks).unwrap()
}

fn column(store: &BoardStore, status: Status) -> Vec<String> {
    let all = TaskSubset::all(store.tasks());
    store
        .tasks_in_column(&all, status)
        .map(|t| t.id.to_string())
        .collect()
}

fn statuses(store: &BoardStore) -> Vec<(String, Status)> {
    store
        .tasks()
        .iter()
        .map(|t| (t.id.to_string(), t.status))
        .collect()
}

#[test_log::test]
fn test_cross_column_move_changes_only_the_dragged_task() {
    let mut store = board(vec![
        task("A", Status::Todo),
        task("B", Status::Done),
        task("C", Status::Review),
        task("D", Status::InProgress),
    ]);

    store.apply_move("A", "B");

    assert_eq!(store.task("A").unwrap().status, Status::Done);
    assert_eq!(store.task("B").unwrap().status, Status::Done);
    assert_eq!(store.task("C").unwrap().status, Status::Review);
    assert_eq!(store.task("D").unwrap().status, Status::InProgress);
}

#[test_log::test]
fn test_within_column_reorder() {
    let mut store = board(vec![
        task("A", Status::Todo),
        task("X", Status::InProgress),
        task("B", Status::Todo),
        task("Y", Status::Review),
        task("C", Status::Todo),
        task("Z", Status::Done),
    ]);

    store.apply_move("C", "A");

    assert_eq!(column(&store, Status::Todo), vec!["C", "A", "B"]);
    assert_eq!(column(&store, Status::InProgress), vec!["X"]);
    assert_eq!(column(&store, Status::Review), vec!["Y"]);
    assert_eq!(column(&store, Status::Done), vec!["Z"]);
}

#[test_log::test]
fn test_drop_onto_task_lower_in_same_column() {
    let mut store = board(vec![
        task("A", Status::Todo),
        task("B", Status::Todo),
        task("C", Status::Todo),
    ]);

    store.apply_move("A", "C");

    // A takes C's index; everything between shifts up
    assert_eq!(column(&store, Status::Todo), vec!["B", "C", "A"]);
}

#[test_log::test]
fn test_drop_onto_column_appends_to_end_of_column() {
    let mut store = board(vec![
        task("A", Status::Todo),
        task("B", Status::Done),
        task("C", Status::Done),
    ]);

    let outcome = store.apply_move("A", "done");
    let plan = outcome.plan().unwrap();
    assert!(plan.changes_status());
    assert!(plan.changes_order());

    assert_eq!(column(&store, Status::Done), vec!["B", "C", "A"]);
    assert!(column(&store, Status::Todo).is_empty());
}

#[test_log::test]
fn test_drop_onto_column_from_behind_lands_after_its_last_task() {
    let mut store = board(vec![
        task("B", Status::Done),
        task("X", Status::Todo),
        task("C", Status::Done),
        task("Y", Status::InProgress),
        task("A", Status::Review),
    ]);

    store.apply_move("A", "done");

    assert_eq!(column(&store, Status::Done), vec!["B", "C", "A"]);
    assert_eq!(column(&store, Status::Todo), vec!["X"]);
    assert_eq!(column(&store, Status::InProgress), vec!["Y"]);
}

#[test_log::test]
fn test_drop_onto_empty_column_changes_status_only() {
    let mut store = board(vec![task("A", Status::Todo), task("B", Status::Done)]);

    let outcome = store.apply_move("B", "review");

    assert!(!outcome.plan().unwrap().changes_order());
    assert_eq!(column(&store, Status::Review), vec!["B"]);
    assert_eq!(store.tasks()[1].id.as_str(), "B");
}

#[test_log::test]
fn test_drop_onto_task_in_other_column_takes_its_raw_index() {
    let mut store = board(vec![
        task("B", Status::Done),
        task("A", Status::Todo),
        task("C", Status::Done),
        task("D", Status::Todo),
    ]);

    store.apply_move("D", "C");

    assert_eq!(store.task("D").unwrap().status, Status::Done);
    assert_eq!(column(&store, Status::Done), vec!["B", "D", "C"]);
    assert_eq!(column(&store, Status::Todo), vec!["A"]);
}

#[rstest]
#[case::unknown_target("A", "nowhere", NoOpReason::UnknownTarget)]
#[case::empty_target("A", "", NoOpReason::UnknownTarget)]
#[case::unknown_task("Q", "B", NoOpReason::UnknownTask)]
#[case::self_move("B", "B", NoOpReason::SelfMove)]
#[case::own_column("A", "todo", NoOpReason::AlreadyInPlace)]
#[case::column_title_is_not_an_id("A", "In Progress", NoOpReason::UnknownTarget)]
fn test_noops_leave_board_equal(
    #[case] task_id: &str,
    #[case] over_id: &str,
    #[case] reason: NoOpReason,
) {
    let mut store = board(vec![
        task("A", Status::Todo),
        task("B", Status::InProgress),
    ]);
    let before = store.clone();

    let outcome = store.apply_move(task_id, over_id);

    assert_eq!(outcome, MoveOutcome::Unchanged { reason });
    assert_eq!(store, before);
}

#[test]
fn test_pure_apply_move_matches_store() {
    let tasks = vec![
        task("A", Status::Todo),
        task("B", Status::Review),
        task("C", Status::Todo),
    ];
    let mut store = board(tasks.clone());

    let pure = apply_move(&tasks, "C", "B");
    store.apply_move("C", "B");

    assert_eq!(store.tasks(), pure.as_slice());
    assert_eq!(statuses(&store)[1], ("C".to_string(), Status::Review));
}

#[test]
fn test_filtered_column_views_follow_moves() {
    let mut store = BoardStore::demo();
    let query = TaskQuery::new().with_search("mobile");

    MoveTask::to_column("5", Status::Done).execute(&mut store);

    let view = store.view(&query);
    let done: Vec<_> = view[3].tasks.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(view[3].column.id, Status::Done);
    assert_eq!(done, vec!["5"]);
    assert_eq!(
        store.column_counts(&query),
        vec![
            (Status::Todo, 0),
            (Status::InProgress, 0),
            (Status::Review, 0),
            (Status::Done, 1)
        ]
    );
}
