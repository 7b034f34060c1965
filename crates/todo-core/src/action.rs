//! Control Actions
//!
//! Controls carry a semantic `data-action` identifier plus payload attributes.
//! The delegated listener collects those into a [`ControlSignal`], which
//! decodes into an [`Action`] for the dispatcher.

use std::str::FromStr;

use crate::error::{TodoError, TodoResult};
use crate::model::{TodoId, TodoStatus, ViewFilter};

/// Attribute naming a control's action
pub const ACTION_ATTR: &str = "data-action";
/// Attribute holding the item id of per-item controls
pub const ID_ATTR: &str = "data-id";
/// Attribute holding the view name of filter tabs
pub const VIEW_ATTR: &str = "data-view";

/// Dispatch table key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Add,
    Remove,
    Toggle,
    ClearCompleted,
    Filter,
}

impl ActionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::Add => "add",
            ActionKind::Remove => "remove",
            ActionKind::Toggle => "toggle",
            ActionKind::ClearCompleted => "clear-completed",
            ActionKind::Filter => "filter",
        }
    }
}

impl FromStr for ActionKind {
    type Err = TodoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add" => Ok(ActionKind::Add),
            "remove" => Ok(ActionKind::Remove),
            "toggle" => Ok(ActionKind::Toggle),
            "clear-completed" => Ok(ActionKind::ClearCompleted),
            "filter" => Ok(ActionKind::Filter),
            other => Err(TodoError::Action(format!("unknown action '{}'", other))),
        }
    }
}

/// Raw attributes read off the control that triggered an event
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ControlSignal {
    pub action: String,
    pub id: Option<String>,
    pub view: Option<String>,
    pub checked: Option<bool>,
    pub text: Option<String>,
}

impl ControlSignal {
    pub fn new(action: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            ..Self::default()
        }
    }

    fn require_id(&self) -> TodoResult<TodoId> {
        self.id
            .as_deref()
            .filter(|id| !id.is_empty())
            .map(TodoId::from)
            .ok_or_else(|| TodoError::Action(format!("'{}' without {}", self.action, ID_ATTR)))
    }
}

/// Decoded user intent
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Add(String),
    Remove(TodoId),
    SetStatus(TodoId, TodoStatus),
    ClearCompleted,
    SelectFilter(ViewFilter),
}

impl Action {
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::Add(_) => ActionKind::Add,
            Action::Remove(_) => ActionKind::Remove,
            Action::SetStatus(..) => ActionKind::Toggle,
            Action::ClearCompleted => ActionKind::ClearCompleted,
            Action::SelectFilter(_) => ActionKind::Filter,
        }
    }
}

impl TryFrom<&ControlSignal> for Action {
    type Error = TodoError;

    fn try_from(signal: &ControlSignal) -> Result<Self, Self::Error> {
        let kind: ActionKind = signal.action.parse()?;
        let action = match kind {
            ActionKind::Add => Action::Add(signal.text.clone().unwrap_or_default()),
            ActionKind::Remove => Action::Remove(signal.require_id()?),
            ActionKind::Toggle => {
                let checked = signal
                    .checked
                    .ok_or_else(|| TodoError::Action("toggle without checked state".to_string()))?;
                Action::SetStatus(signal.require_id()?, TodoStatus::from_checked(checked))
            }
            ActionKind::ClearCompleted => Action::ClearCompleted,
            ActionKind::Filter => {
                let view = signal
                    .view
                    .as_deref()
                    .ok_or_else(|| TodoError::Action(format!("filter without {}", VIEW_ATTR)))?;
                Action::SelectFilter(view.parse()?)
            }
        };
        Ok(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names_round_trip() {
        for kind in [
            ActionKind::Add,
            ActionKind::Remove,
            ActionKind::Toggle,
            ActionKind::ClearCompleted,
            ActionKind::Filter,
        ] {
            assert_eq!(kind.as_str().parse::<ActionKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_decode_signals() {
        let toggle = ControlSignal { id: Some("abc".to_string()), checked: Some(true), ..ControlSignal::new("toggle") };
        assert_eq!(
            Action::try_from(&toggle).unwrap(),
            Action::SetStatus(TodoId::from("abc"), TodoStatus::Completed)
        );

        let filter = ControlSignal { view: Some("active".to_string()), ..ControlSignal::new("filter") };
        assert_eq!(Action::try_from(&filter).unwrap(), Action::SelectFilter(ViewFilter::Active));

        let add = ControlSignal::new("add");
        assert_eq!(Action::try_from(&add).unwrap(), Action::Add(String::new()));
        assert_eq!(Action::try_from(&add).unwrap().kind(), ActionKind::Add);
    }

    #[test]
    fn test_decode_rejects_incomplete_signals() {
        let cases = [
            ControlSignal::new("explode"),
            ControlSignal::new("remove"),
            ControlSignal { id: Some(String::new()), ..ControlSignal::new("remove") },
            ControlSignal { id: Some("abc".to_string()), ..ControlSignal::new("toggle") },
            ControlSignal::new("filter"),
            ControlSignal { view: Some("archived".to_string()), ..ControlSignal::new("filter") },
        ];
        for signal in &cases {
            assert!(matches!(Action::try_from(signal), Err(TodoError::Action(_))), "{:?}", signal);
        }
    }
}
