//! Widget Integration Tests
//!
//! Drives the dispatcher the way the delegated DOM listeners do, against
//! in-memory storage and scripted dialogs.

use todo_core::{
    Action, ControlSignal, DispatchOutcome, MemoryStorage, TodoStatus, TodoWidget, UserPrompt, ViewFilter,
    WidgetConfig,
};

struct ScriptedPrompt {
    confirm: bool,
    warnings: Vec<String>,
}

impl ScriptedPrompt {
    fn accepting() -> Self {
        Self { confirm: true, warnings: Vec::new() }
    }
}

impl UserPrompt for ScriptedPrompt {
    fn warn(&mut self, message: &str) {
        self.warnings.push(message.to_string());
    }

    fn confirm(&mut self, _message: &str) -> bool {
        self.confirm
    }
}

fn setup() -> (TodoWidget<MemoryStorage>, ScriptedPrompt) {
    (
        TodoWidget::load(MemoryStorage::new(), WidgetConfig::default()),
        ScriptedPrompt::accepting(),
    )
}

#[test]
fn test_buy_milk_scenario() {
    let (mut widget, mut prompt) = setup();

    let outcome = widget.handle_signal(&ControlSignal { text: Some("Buy milk".to_string()), ..ControlSignal::new("add") }, &mut prompt);
    assert_eq!(outcome, DispatchOutcome::Applied);
    assert_eq!(widget.store().len(), 1);
    let item = widget.store().items()[0].clone();
    assert_eq!(item.name, "Buy milk");
    assert_eq!(item.status, TodoStatus::Active);
    assert_eq!(widget.snapshot().summary.remaining_label, "1 Item Left");

    let outcome = widget.handle_signal(&ControlSignal { text: Some(String::new()), ..ControlSignal::new("add") }, &mut prompt);
    assert_eq!(outcome, DispatchOutcome::Rejected);
    assert_eq!(widget.store().len(), 1);
    assert_eq!(prompt.warnings.len(), 1);

    let toggle = ControlSignal {
        id: Some(item.id.to_string()),
        checked: Some(true),
        ..ControlSignal::new("toggle")
    };
    widget.handle_signal(&toggle, &mut prompt);
    assert_eq!(widget.snapshot().summary.remaining_label, "0 Items Left");

    widget.handle_signal(&ControlSignal::new("clear-completed"), &mut prompt);
    assert!(widget.store().is_empty());
    assert!(widget.snapshot().nodes.is_empty());
}

#[test]
fn test_state_survives_reload() {
    let (mut widget, mut prompt) = setup();
    for name in ["one", "two", "three"] {
        widget.dispatch(Action::Add(name.to_string()), &mut prompt);
    }
    let second = widget.store().items()[1].id.clone();
    widget.dispatch(Action::SetStatus(second, TodoStatus::Completed), &mut prompt);
    let before = widget.store().items().to_vec();

    let storage = widget.store().storage().clone();
    let reloaded = TodoWidget::load(storage, WidgetConfig::default());

    assert_eq!(reloaded.store().items(), before.as_slice());
    let checked: Vec<bool> = reloaded.snapshot().nodes.iter().map(|n| n.checked()).collect();
    assert_eq!(checked, vec![false, true, false]);
}

#[test]
fn test_corrupt_storage_starts_empty_and_recovers() {
    let storage = MemoryStorage::with_entry("todos", "[{\"id\": 4");
    let mut widget = TodoWidget::load(storage, WidgetConfig::default());
    let mut prompt = ScriptedPrompt::accepting();
    assert!(widget.store().is_empty());

    widget.dispatch(Action::Add("fresh".to_string()), &mut prompt);
    let raw = widget.store().storage().raw("todos").unwrap();
    assert!(raw.contains("\"fresh\""));
}

#[test]
fn test_clear_completed_single_write() {
    let (mut widget, mut prompt) = setup();
    for n in 0..6 {
        widget.dispatch(Action::Add(format!("task {}", n)), &mut prompt);
    }
    let ids: Vec<_> = widget.store().items().iter().map(|i| i.id.clone()).collect();
    for id in ids.iter().step_by(2) {
        widget.dispatch(Action::SetStatus(id.clone(), TodoStatus::Completed), &mut prompt);
    }
    let writes = widget.store().storage().write_count();

    widget.dispatch(Action::ClearCompleted, &mut prompt);

    assert_eq!(widget.store().storage().write_count(), writes + 1);
    assert_eq!(widget.store().len(), 3);
    assert!(widget.store().items().iter().all(|i| i.status == TodoStatus::Active));
    assert_eq!(widget.projection().nodes().len(), 3);
}

#[test]
fn test_filter_tabs_and_visibility() {
    let (mut widget, mut prompt) = setup();
    widget.dispatch(Action::Add("open".to_string()), &mut prompt);
    widget.dispatch(Action::Add("done".to_string()), &mut prompt);
    let done = widget.store().items()[1].id.clone();
    widget.dispatch(Action::SetStatus(done.clone(), TodoStatus::Completed), &mut prompt);

    widget.handle_signal(&ControlSignal { view: Some("completed".to_string()), ..ControlSignal::new("filter") }, &mut prompt);
    let snapshot = widget.snapshot();

    assert_eq!(widget.filter(), ViewFilter::Completed);
    let selected: Vec<ViewFilter> = snapshot.tabs.iter().filter(|t| t.selected).map(|t| t.filter).collect();
    assert_eq!(selected, vec![ViewFilter::Completed]);
    for node in &snapshot.nodes {
        assert_eq!(node.hidden, node.id != done);
    }
    assert_eq!(snapshot.summary.visible, 1);
    assert!(snapshot.summary.empty_message.is_none());
}

#[test]
fn test_markup_is_escaped_in_projection_only() {
    let (mut widget, mut prompt) = setup();
    widget.dispatch(Action::Add("<script>alert(1)</script>".to_string()), &mut prompt);

    assert_eq!(widget.store().items()[0].name, "<script>alert(1)</script>");
    assert_eq!(
        widget.projection().nodes()[0].label_html,
        "&lt;script&gt;alert(1)&lt;/script&gt;"
    );
}

#[test]
fn test_remove_confirmed() {
    let (mut widget, mut prompt) = setup();
    widget.dispatch(Action::Add("a".to_string()), &mut prompt);
    widget.dispatch(Action::Add("b".to_string()), &mut prompt);
    let a = widget.store().items()[0].id.clone();

    let signal = ControlSignal { id: Some(a.to_string()), ..ControlSignal::new("remove") };
    assert_eq!(widget.handle_signal(&signal, &mut prompt), DispatchOutcome::Applied);

    assert_eq!(widget.store().len(), 1);
    assert!(widget.store().get(&a).is_none());
    assert!(widget.projection().node(&a).is_none());
    assert_eq!(widget.snapshot().summary.remaining_label, "1 Item Left");
}
