//! Reducer for the prompt generator.

use crate::ui::mvi::Reducer;

use super::intent::GeneratorIntent;
use super::state::{GeneratorState, RequestState};

pub struct GeneratorReducer;

impl Reducer for GeneratorReducer {
    type State = GeneratorState;
    type Intent = GeneratorIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            // Not re-entrant: a second submit while one is outstanding is ignored.
            GeneratorIntent::Submit(_) if state.is_submitting() => state,
            GeneratorIntent::Submit(request) => GeneratorState {
                request: RequestState::Submitting { request },
                validation: None,
            },

            GeneratorIntent::Rejected(error) => GeneratorState {
                validation: Some(error),
                ..state
            },

            GeneratorIntent::Completed {
                request_id,
                response,
            } => match state.request {
                RequestState::Submitting { request } if request.id() == request_id => {
                    GeneratorState {
                        request: RequestState::Succeeded { request, response },
                        validation: None,
                    }
                }
                request => GeneratorState { request, ..state },
            },

            GeneratorIntent::Failed { request_id, error } => match state.request {
                RequestState::Submitting { request } if request.id() == request_id => {
                    GeneratorState {
                        request: RequestState::Failed { request, error },
                        validation: None,
                    }
                }
                request => GeneratorState { request, ..state },
            },

            GeneratorIntent::Clear => GeneratorState::default(),
        }
    }
}
