//! Reducer for the message area.

use crate::common::types::{CommonAction, MessageState};
use storefront_core::reducer::Reducer;

/// Applies message notifications to `MessageState`
#[derive(Clone, Debug, Default)]
pub struct MessageReducer;

impl Reducer for MessageReducer {
    type State = MessageState;
    type Action = CommonAction;
    type Environment = ();

    fn reduce(&self, state: &mut Self::State, action: Self::Action, _env: &Self::Environment) {
        match action {
            CommonAction::MessageShow { message } => {
                state.text = Some(message);
                state.open = true;
            },
            CommonAction::MessageHide => {
                state.open = false;
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_testing::ReducerTest;

    #[test]
    fn test_show_opens_with_text() {
        ReducerTest::new(MessageReducer)
            .with_env(())
            .given_state(MessageState::default())
            .when_action(CommonAction::MessageShow {
                message: "There was some error.".to_string(),
            })
            .then_state(|state| {
                assert!(state.open);
                assert_eq!(state.text.as_deref(), Some("There was some error."));
            })
            .run();
    }

    #[test]
    fn test_hide_keeps_last_text() {
        ReducerTest::new(MessageReducer)
            .with_env(())
            .given_state(MessageState::default())
            .when_actions([
                CommonAction::MessageShow {
                    message: "first".to_string(),
                },
                CommonAction::MessageHide,
            ])
            .then_state(|state| {
                assert!(!state.open);
                assert_eq!(state.text.as_deref(), Some("first"));
            })
            .run();
    }

    #[test]
    fn test_second_message_replaces_first() {
        ReducerTest::new(MessageReducer)
            .with_env(())
            .given_state(MessageState::default())
            .when_actions([
                CommonAction::MessageShow {
                    message: "first".to_string(),
                },
                CommonAction::MessageShow {
                    message: "second".to_string(),
                },
            ])
            .then_state(|state| assert_eq!(state.text.as_deref(), Some("second")))
            .run();
    }
}
