/// Page state reducers: URL fields and the process request lifecycle

use std::rc::Rc;
use uuid::Uuid;
use yew::prelude::*;

use crate::error::ClientError;
use crate::models::ResultItem;
use crate::url_fields::{RemoveError, UrlFieldList};

pub enum FieldAction {
    Add,
    Remove(Uuid),
    Set(Uuid, String),
    Reset,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FieldsState {
    pub list: UrlFieldList,
    /// Bumped every time a remove hits the last remaining field
    pub rejected_removals: u32,
}

impl Reducible for FieldsState {
    type Action = FieldAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut state = (*self).clone();
        match action {
            FieldAction::Add => {
                state.list.add();
            }
            FieldAction::Remove(id) => match state.list.remove(id) {
                Ok(()) => {}
                Err(RemoveError::LastField) => state.rejected_removals += 1,
                Err(RemoveError::UnknownField) => {
                    log::warn!("Remove requested for unknown field {}", id);
                }
            },
            FieldAction::Set(id, value) => {
                state.list.set_value(id, value);
            }
            FieldAction::Reset => state.list.reset(),
        }
        state.into()
    }
}

pub enum ProcessAction {
    /// Request sent: results hidden, loading shown, button disabled
    Start,
    Finish(Result<Vec<ResultItem>, ClientError>),
    Clear,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProcessState {
    pub processing: bool,
    /// None while the results section is hidden
    pub results: Option<Vec<ResultItem>>,
    /// Incremented per rendered batch, drives scrolling to the results
    pub batch: u32,
}

impl Reducible for ProcessState {
    type Action = ProcessAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut state = (*self).clone();
        match action {
            ProcessAction::Start => {
                state.processing = true;
                state.results = None;
            }
            ProcessAction::Finish(Ok(items)) => {
                state.processing = false;
                state.results = Some(items);
                state.batch += 1;
            }
            ProcessAction::Finish(Err(_)) => {
                state.processing = false;
            }
            ProcessAction::Clear => {
                state.results = None;
            }
        }
        state.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::VideoFailure;

    fn apply_fields(state: FieldsState, actions: Vec<FieldAction>) -> FieldsState {
        let mut state = Rc::new(state);
        for action in actions {
            state = state.reduce(action);
        }
        (*state).clone()
    }

    fn failure_item() -> ResultItem {
        ResultItem::Failure(VideoFailure {
            error: "boom".to_string(),
            url: "https://youtu.be/x".to_string(),
        })
    }

    #[test]
    fn test_add_and_set_fields() {
        let state = FieldsState::default();
        let first = state.list.fields()[0].id;

        let state = apply_fields(
            state,
            vec![FieldAction::Set(first, "https://youtu.be/a".to_string()), FieldAction::Add],
        );

        assert_eq!(state.list.len(), 2);
        assert_eq!(state.list.values(), vec!["https://youtu.be/a".to_string(), String::new()]);
    }

    #[test]
    fn test_remove_last_field_is_rejected() {
        let state = FieldsState::default();
        let only = state.list.fields()[0].id;

        let state = apply_fields(state, vec![FieldAction::Remove(only)]);

        assert_eq!(state.list.len(), 1);
        assert_eq!(state.rejected_removals, 1);
    }

    #[test]
    fn test_back_to_back_removals_reject_the_second() {
        let mut state = FieldsState::default();
        let first = state.list.fields()[0].id;
        let second = state.list.add();

        let state = apply_fields(state, vec![FieldAction::Remove(first), FieldAction::Remove(second)]);

        assert_eq!(state.list.len(), 1);
        assert_eq!(state.list.fields()[0].id, second);
        assert_eq!(state.rejected_removals, 1);
    }

    #[test]
    fn test_remove_unknown_field_is_ignored() {
        let mut state = FieldsState::default();
        state.list.add();

        let state = apply_fields(state, vec![FieldAction::Remove(Uuid::new_v4())]);

        assert_eq!(state.list.len(), 2);
        assert_eq!(state.rejected_removals, 0);
    }

    #[test]
    fn test_reset_fields() {
        let state = apply_fields(FieldsState::default(), vec![FieldAction::Add, FieldAction::Add, FieldAction::Reset]);

        assert_eq!(state.list.len(), 1);
        assert_eq!(state.list.values(), vec![String::new()]);
    }

    #[test]
    fn test_start_hides_results_and_sets_processing() {
        let state = Rc::new(ProcessState {
            processing: false,
            results: Some(vec![failure_item()]),
            batch: 1,
        });

        let state = state.reduce(ProcessAction::Start);

        assert!(state.processing);
        assert_eq!(state.results, None);
        assert_eq!(state.batch, 1);
    }

    #[test]
    fn test_finish_ok_shows_results() {
        let state = Rc::new(ProcessState::default())
            .reduce(ProcessAction::Start)
            .reduce(ProcessAction::Finish(Ok(vec![failure_item()])));

        assert!(!state.processing);
        assert_eq!(state.results.as_ref().map(|r| r.len()), Some(1));
        assert_eq!(state.batch, 1);
    }

    #[test]
    fn test_finish_err_clears_processing() {
        let state = Rc::new(ProcessState::default())
            .reduce(ProcessAction::Start)
            .reduce(ProcessAction::Finish(Err(ClientError::Backend("falhou".to_string()))));

        assert!(!state.processing);
        assert_eq!(state.results, None);
        assert_eq!(state.batch, 0);
    }

    #[test]
    fn test_clear_hides_results() {
        let state = Rc::new(ProcessState::default())
            .reduce(ProcessAction::Finish(Ok(vec![failure_item()])))
            .reduce(ProcessAction::Clear);

        assert_eq!(state.results, None);
        assert_eq!(state.batch, 1);
    }
}
