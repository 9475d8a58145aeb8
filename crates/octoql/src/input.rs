//! GitHub GraphQL input objects.
//!
//! Input objects travel only in the `variables` map, never in the query
//! string, so they are plain `Serialize` structs rather than
//! [`GraphQLType`](crate::GraphQLType) shapes. [`InputObject`] adds the
//! schema type name that [`Variable::input`](crate::Variable::input) needs
//! for the argument declaration.
//!
//! Field names are camelCased by serde; optional fields are omitted from the
//! JSON entirely when unset, matching how the API distinguishes "absent"
//! from "null".

use serde::Serialize;

use crate::enums::{IssueOrderField, LockReason, OrderDirection, ReactionContent, SubscriptionState};
use crate::scalar::Id;

/// A serializable value with a GraphQL input type name, usable as a
/// `TypeName!` variable.
pub trait InputObject: Serialize {
    /// The schema name of the input type, e.g. `"AddReactionInput"`.
    const TYPE_NAME: &'static str;
}

macro_rules! input_object {
    (
        $(#[$meta:meta])*
        $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field_vis:vis $field:ident: $ty:ty,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Serialize)]
        #[serde(rename_all = "camelCase")]
        pub struct $name {
            $(
                $(#[$field_meta])*
                $field_vis $field: $ty,
            )+
        }

        impl InputObject for $name {
            const TYPE_NAME: &'static str = stringify!($name);
        }
    };
}

input_object! {
    /// Ways in which to order lists of issues.
    IssueOrder {
        /// The field by which to order issues.
        pub field: IssueOrderField,
        /// The direction in which to order issues.
        pub direction: OrderDirection,
    }
}

input_object! {
    /// Input for the `addReaction` mutation.
    AddReactionInput {
        /// The id of the subject to modify.
        pub subject_id: Id,
        /// The name of the emoji to react with.
        pub content: ReactionContent,
        /// A unique identifier for the client performing the mutation.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub client_mutation_id: Option<String>,
    }
}

input_object! {
    /// Input for the `removeReaction` mutation.
    RemoveReactionInput {
        /// The id of the subject to modify.
        pub subject_id: Id,
        /// The name of the emoji reaction to remove.
        pub content: ReactionContent,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub client_mutation_id: Option<String>,
    }
}

input_object! {
    /// Input for the `addComment` mutation.
    AddCommentInput {
        /// The node id of the subject to comment on.
        pub subject_id: Id,
        /// The comment body, in Markdown.
        pub body: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub client_mutation_id: Option<String>,
    }
}

input_object! {
    /// Input for the `deleteIssueComment` mutation.
    DeleteIssueCommentInput {
        /// The id of the comment to delete.
        pub id: Id,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub client_mutation_id: Option<String>,
    }
}

input_object! {
    /// Input for the `lockLockable` mutation.
    LockLockableInput {
        /// The id of the item to lock.
        pub lockable_id: Id,
        /// An optional reason for locking.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub lock_reason: Option<LockReason>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub client_mutation_id: Option<String>,
    }
}

input_object! {
    /// Input for the `updateSubscription` mutation.
    UpdateSubscriptionInput {
        /// The node id of the subscribable object to modify.
        pub subscribable_id: Id,
        /// The new state of the subscription.
        pub state: SubscriptionState,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub client_mutation_id: Option<String>,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_names_are_camel_cased() {
        let input = AddReactionInput {
            subject_id: Id::from("MDU6SXNzdWUyMTc5NTQ0OTc="),
            content: ReactionContent::Hooray,
            client_mutation_id: None,
        };
        assert_eq!(
            serde_json::to_string(&input).unwrap(),
            r#"{"subjectId":"MDU6SXNzdWUyMTc5NTQ0OTc=","content":"HOORAY"}"#
        );
    }

    #[test]
    fn optional_fields_are_omitted_not_null() {
        let input = LockLockableInput {
            lockable_id: Id::from("MDU6SXNzdWUx"),
            lock_reason: None,
            client_mutation_id: None,
        };
        assert_eq!(
            serde_json::to_string(&input).unwrap(),
            r#"{"lockableId":"MDU6SXNzdWUx"}"#
        );

        let input = LockLockableInput {
            lock_reason: Some(LockReason::Spam),
            ..input
        };
        assert_eq!(
            serde_json::to_string(&input).unwrap(),
            r#"{"lockableId":"MDU6SXNzdWUx","lockReason":"SPAM"}"#
        );
    }

    #[test]
    fn type_names_match_struct_names() {
        assert_eq!(AddReactionInput::TYPE_NAME, "AddReactionInput");
        assert_eq!(IssueOrder::TYPE_NAME, "IssueOrder");
    }
}
