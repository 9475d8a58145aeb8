//! GitHub GraphQL enum types.
//!
//! Each enum is declared through [`graphql_enum!`], which wires up serde
//! renames to the SCREAMING_SNAKE_CASE wire values, a `Default` of the first
//! variant, the [`GraphQLType`](crate::GraphQLType) leaf impl, and conversion
//! into a typed variable. The macro is exported so result shapes against
//! other GraphQL schemas can declare their own enums the same way.

/// Declare a GraphQL enum type.
///
/// ```
/// octoql::graphql_enum! {
///     /// Whether to list items in ascending or descending order.
///     OrderDirection {
///         Asc => "ASC",
///         Desc => "DESC",
///     }
/// }
/// ```
///
/// The first variant is the `Default`.
#[macro_export]
macro_rules! graphql_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $wire:literal,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash,
            ::serde::Serialize, ::serde::Deserialize,
        )]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        $crate::graphql_enum!(@default $name, $($variant,)+);

        impl $name {
            /// The wire value of this variant.
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)+
                }
            }
        }

        impl $crate::GraphQLType for $name {
            fn decode(
                &mut self,
                raw: &$crate::decode::RawValue,
                path: &mut $crate::decode::FieldPath,
            ) -> ::std::result::Result<(), $crate::DecodeError> {
                *self = $crate::decode::scalar_leaf(
                    raw,
                    path,
                    concat!("a ", stringify!($name), " value"),
                )?;
                Ok(())
            }
        }

        impl $crate::IntoScalar for $name {
            const TYPE: $crate::ScalarType = $crate::ScalarType::Enum(stringify!($name));

            fn into_scalar(self) -> $crate::Scalar {
                $crate::Scalar::Enum {
                    type_name: stringify!($name),
                    value: self.as_str(),
                }
            }
        }

        impl ::std::convert::From<$name> for $crate::Variable {
            fn from(value: $name) -> Self {
                $crate::Variable::Scalar($crate::IntoScalar::into_scalar(value))
            }
        }
    };
    (@default $name:ident, $first:ident, $($rest:ident,)*) => {
        impl ::std::default::Default for $name {
            fn default() -> Self {
                Self::$first
            }
        }
    };
}

graphql_enum! {
    /// Emoji reactions that can be attached to a subject.
    ReactionContent {
        /// 👍
        ThumbsUp => "THUMBS_UP",
        /// 👎
        ThumbsDown => "THUMBS_DOWN",
        /// 😄
        Laugh => "LAUGH",
        /// 🎉
        Hooray => "HOORAY",
        /// 😕
        Confused => "CONFUSED",
        /// ❤️
        Heart => "HEART",
        /// 🚀
        Rocket => "ROCKET",
        /// 👀
        Eyes => "EYES",
    }
}

graphql_enum! {
    /// Whether to list items in ascending or descending order.
    OrderDirection {
        Asc => "ASC",
        Desc => "DESC",
    }
}

graphql_enum! {
    /// The possible states of an issue.
    IssueState {
        Open => "OPEN",
        Closed => "CLOSED",
    }
}

graphql_enum! {
    /// The possible states of a pull request.
    PullRequestState {
        Open => "OPEN",
        Closed => "CLOSED",
        Merged => "MERGED",
    }
}

graphql_enum! {
    /// The possible commit status states.
    StatusState {
        Expected => "EXPECTED",
        Error => "ERROR",
        Failure => "FAILURE",
        Pending => "PENDING",
        Success => "SUCCESS",
    }
}

graphql_enum! {
    /// Properties by which issue connections can be ordered.
    IssueOrderField {
        CreatedAt => "CREATED_AT",
        UpdatedAt => "UPDATED_AT",
        Comments => "COMMENTS",
    }
}

graphql_enum! {
    /// The possible states of a project.
    ProjectState {
        Open => "OPEN",
        Closed => "CLOSED",
    }
}

graphql_enum! {
    /// The privacy of a repository.
    RepositoryPrivacy {
        Public => "PUBLIC",
        Private => "PRIVATE",
    }
}

graphql_enum! {
    /// The possible states of a subscription.
    SubscriptionState {
        Unsubscribed => "UNSUBSCRIBED",
        Subscribed => "SUBSCRIBED",
        Ignored => "IGNORED",
    }
}

graphql_enum! {
    /// Reasons for locking a lockable, such as an issue.
    LockReason {
        OffTopic => "OFF_TOPIC",
        TooHeated => "TOO_HEATED",
        Resolved => "RESOLVED",
        Spam => "SPAM",
    }
}

graphql_enum! {
    /// The state of a git signature check.
    GitSignatureState {
        Valid => "VALID",
        Invalid => "INVALID",
        MalformedSig => "MALFORMED_SIG",
        UnknownKey => "UNKNOWN_KEY",
        BadEmail => "BAD_EMAIL",
        UnverifiedEmail => "UNVERIFIED_EMAIL",
        NoUser => "NO_USER",
        UnknownSigType => "UNKNOWN_SIG_TYPE",
        Unsigned => "UNSIGNED",
        GpgverifyUnavailable => "GPGVERIFY_UNAVAILABLE",
        GpgverifyError => "GPGVERIFY_ERROR",
        NotSigningKey => "NOT_SIGNING_KEY",
        ExpiredKey => "EXPIRED_KEY",
        OcspPending => "OCSP_PENDING",
        OcspError => "OCSP_ERROR",
        BadCert => "BAD_CERT",
        OcspRevoked => "OCSP_REVOKED",
    }
}

graphql_enum! {
    /// Reasons a comment author cannot update the comment.
    CommentCannotUpdateReason {
        InsufficientAccess => "INSUFFICIENT_ACCESS",
        Locked => "LOCKED",
        LoginRequired => "LOGIN_REQUIRED",
        Maintenance => "MAINTENANCE",
        VerifiedEmailRequired => "VERIFIED_EMAIL_REQUIRED",
    }
}
