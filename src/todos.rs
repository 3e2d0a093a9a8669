//! Task List Operations
//!
//! Pure helpers over the task list. Components call these on the store's
//! `Vec<Task>` so the list logic stays testable without a browser.

use crate::models::Task;
use crate::routes::Filter;

/// Result of submitting an inline title edit
#[derive(Debug, Clone, PartialEq)]
pub enum EditOutcome {
    /// Title is the same as before, nothing to persist
    Unchanged,
    /// Persist the new (trimmed) title
    Rename(String),
    /// Title was cleared, the task goes away
    Delete,
}

/// Decide what an edit submission means for the task
pub fn resolve_edit(original: &str, edited: &str) -> EditOutcome {
    let trimmed = edited.trim();
    if edited == original || trimmed == original.trim() {
        EditOutcome::Unchanged
    } else if trimmed.is_empty() {
        EditOutcome::Delete
    } else {
        EditOutcome::Rename(trimmed.to_string())
    }
}

/// Text the inline editor holds once a submission is settled.
/// Anything but a rename goes back to the stored title.
pub fn settled_draft(original: &str, outcome: &EditOutcome) -> String {
    match outcome {
        EditOutcome::Rename(title) => title.clone(),
        EditOutcome::Unchanged | EditOutcome::Delete => original.to_string(),
    }
}

/// Title to create from the header input, `None` when blank
pub fn new_title(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

pub fn append(tasks: &mut Vec<Task>, task: Task) {
    tasks.push(task);
}

/// Replace the title of the task with `id`. Returns false if no such task.
pub fn replace_title(tasks: &mut [Task], id: u32, title: &str) -> bool {
    tasks.iter_mut()
        .find(|task| task.id == id)
        .map(|task| task.title = title.to_string())
        .is_some()
}

/// Set `completed` on the task with `id`. Returns false if no such task.
pub fn set_completed(tasks: &mut [Task], id: u32, completed: bool) -> bool {
    tasks.iter_mut()
        .find(|task| task.id == id)
        .map(|task| task.completed = completed)
        .is_some()
}

pub fn remove(tasks: &mut Vec<Task>, id: u32) {
    tasks.retain(|task| task.id != id);
}

/// `completed` of the task with `id`, if it is in the list
pub fn completed_of(tasks: &[Task], id: u32) -> Option<bool> {
    tasks.iter().find(|task| task.id == id).map(|task| task.completed)
}

pub fn active_count(tasks: &[Task]) -> usize {
    tasks.iter().filter(|task| !task.completed).count()
}

pub fn completed_count(tasks: &[Task]) -> usize {
    tasks.iter().filter(|task| task.completed).count()
}

pub fn active(tasks: &[Task]) -> Vec<Task> {
    tasks.iter().filter(|task| !task.completed).cloned().collect()
}

pub fn completed(tasks: &[Task]) -> Vec<Task> {
    tasks.iter().filter(|task| task.completed).cloned().collect()
}

/// Filtered view for the current route, in list order
pub fn apply_filter(tasks: &[Task], filter: Filter) -> Vec<Task> {
    match filter {
        Filter::All => tasks.to_vec(),
        Filter::Active => active(tasks),
        Filter::Completed => completed(tasks),
    }
}

/// True when every task is completed. An empty list counts as all completed.
pub fn all_completed(tasks: &[Task]) -> bool {
    tasks.iter().all(|task| task.completed)
}

/// Flip every task to the opposite of `all_completed` and return the new value
pub fn toggle_all(tasks: &mut [Task]) -> bool {
    let target = !all_completed(tasks);
    for task in tasks.iter_mut() {
        task.completed = target;
    }
    target
}

/// Drop the completed tasks, keeping the order of the rest.
/// Returns the removed tasks so callers can delete them remotely.
pub fn clear_completed(tasks: &mut Vec<Task>) -> Vec<Task> {
    let (done, remaining): (Vec<Task>, Vec<Task>) = tasks.drain(..).partition(|task| task.completed);
    *tasks = remaining;
    done
}

/// Footer counter text
pub fn items_left_label(count: usize) -> String {
    if count == 1 {
        "1 item left".to_string()
    } else {
        format!("{} items left", count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewTask;

    fn make_task(id: u32, completed: bool) -> Task {
        Task {
            id,
            title: format!("Task {}", id),
            user_id: 1,
            completed,
        }
    }

    fn ids(tasks: &[Task]) -> Vec<u32> {
        tasks.iter().map(|t| t.id).collect()
    }

    #[test]
    fn test_append_keeps_insertion_order() {
        let mut tasks = vec![make_task(1, false)];
        append(&mut tasks, make_task(7, false));
        append(&mut tasks, make_task(3, false));

        assert_eq!(ids(&tasks), vec![1, 7, 3]);
        assert!(!tasks[2].completed);
    }

    #[test]
    fn test_toggle_all_round_trip() {
        let mut tasks = vec![make_task(1, true), make_task(2, false), make_task(3, false)];

        assert!(toggle_all(&mut tasks));
        assert!(tasks.iter().all(|t| t.completed));

        assert!(!toggle_all(&mut tasks));
        assert!(tasks.iter().all(|t| !t.completed));
    }

    #[test]
    fn test_toggle_all_on_empty_list() {
        let mut tasks: Vec<Task> = Vec::new();
        assert!(all_completed(&tasks));
        assert!(!toggle_all(&mut tasks));
        assert!(tasks.is_empty());
    }

    #[test]
    fn test_clear_completed_removes_exact_subset() {
        let mut tasks = vec![
            make_task(1, true),
            make_task(2, false),
            make_task(3, true),
            make_task(4, false),
            make_task(5, false),
        ];

        let removed = clear_completed(&mut tasks);

        assert_eq!(ids(&removed), vec![1, 3]);
        assert_eq!(ids(&tasks), vec![2, 4, 5]);
    }

    #[test]
    fn test_views_partition_list() {
        let tasks = vec![make_task(1, true), make_task(2, false), make_task(3, true), make_task(4, false)];

        let act = apply_filter(&tasks, Filter::Active);
        let done = apply_filter(&tasks, Filter::Completed);

        assert_eq!(ids(&act), vec![2, 4]);
        assert_eq!(ids(&done), vec![1, 3]);
        assert_eq!(act.len() + done.len(), tasks.len());
        assert!(act.iter().all(|t| !done.contains(t)));
        assert_eq!(apply_filter(&tasks, Filter::All), tasks);
    }

    #[test]
    fn test_replace_title_and_set_completed() {
        let mut tasks = vec![make_task(1, false), make_task(2, false)];

        assert!(replace_title(&mut tasks, 2, "Renamed"));
        assert!(set_completed(&mut tasks, 1, true));
        assert!(!set_completed(&mut tasks, 99, true));

        assert_eq!(tasks[1].title, "Renamed");
        assert!(tasks[0].completed);
        assert!(!tasks[1].completed);
    }

    #[test]
    fn test_emptied_title_removes_task() {
        let mut tasks = vec![make_task(1, false), make_task(2, false), make_task(3, false)];

        let outcome = resolve_edit(&tasks[1].title.clone(), "   ");
        assert_eq!(outcome, EditOutcome::Delete);
        remove(&mut tasks, 2);

        assert_eq!(ids(&tasks), vec![1, 3]);
    }

    #[test]
    fn test_resolve_edit() {
        assert_eq!(resolve_edit("Milk", "Milk"), EditOutcome::Unchanged);
        assert_eq!(resolve_edit("Milk", "  Milk "), EditOutcome::Unchanged);
        assert_eq!(resolve_edit("Milk", "Bread "), EditOutcome::Rename("Bread".to_string()));
        assert_eq!(resolve_edit("Milk", ""), EditOutcome::Delete);
        // Stored titles may carry padding from older clients
        assert_eq!(resolve_edit("Buy milk ", "Buy milk "), EditOutcome::Unchanged);
        assert_eq!(resolve_edit("Buy milk ", "Buy milk"), EditOutcome::Unchanged);
        assert_eq!(resolve_edit("Buy milk ", "Buy bread "), EditOutcome::Rename("Buy bread".to_string()));
    }

    #[test]
    fn test_settled_draft_restores_title_unless_renamed() {
        assert_eq!(settled_draft("Milk", &EditOutcome::Delete), "Milk");
        assert_eq!(settled_draft("Milk", &EditOutcome::Unchanged), "Milk");
        assert_eq!(settled_draft("Milk", &EditOutcome::Rename("Bread".to_string())), "Bread");

        // A failed delete leaves the row with its title, so reopening the
        // editor does not start from the cleared text
        let outcome = resolve_edit("Milk", "  ");
        assert_eq!(outcome, EditOutcome::Delete);
        assert_eq!(resolve_edit("Milk", &settled_draft("Milk", &outcome)), EditOutcome::Unchanged);
    }

    #[test]
    fn test_new_title() {
        assert_eq!(new_title(""), None);
        assert_eq!(new_title("   \t"), None);
        assert_eq!(new_title("  Walk the dog "), Some("Walk the dog".to_string()));
        assert_eq!(new_title("Walk"), Some("Walk".to_string()));
    }

    #[test]
    fn test_create_appends_one_open_task() {
        let mut tasks = vec![make_task(1, true)];
        let title = new_title(" Call mom ").unwrap();

        // Server echoes the payload back with an assigned id
        let payload = NewTask::new(&title, 1);
        let created = Task {
            id: 2,
            title: payload.title.to_string(),
            user_id: payload.user_id,
            completed: payload.completed,
        };
        append(&mut tasks, created);

        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[1].title, "Call mom");
        assert!(!tasks[1].completed);
    }

    #[test]
    fn test_completed_of_reads_store_state() {
        let tasks = vec![make_task(1, true), make_task(2, false)];
        assert_eq!(completed_of(&tasks, 1), Some(true));
        assert_eq!(completed_of(&tasks, 2), Some(false));
        assert_eq!(completed_of(&tasks, 9), None);
    }

    #[test]
    fn test_counts() {
        let tasks = vec![make_task(1, true), make_task(2, false), make_task(3, false)];
        assert_eq!(active_count(&tasks), 2);
        assert_eq!(completed_count(&tasks), 1);
        assert_eq!(active_count(&[]), 0);
    }

    #[test]
    fn test_items_left_label() {
        assert_eq!(items_left_label(0), "0 items left");
        assert_eq!(items_left_label(1), "1 item left");
        assert_eq!(items_left_label(4), "4 items left");
    }
}
