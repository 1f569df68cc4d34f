//! The `model!` macro: one declaration, a read view and a write view.
//!
//! ```rust,ignore
//! model! {
//!     /// A supplier organization.
//!     Supplier<Xp> / PartialSupplier {
//!         required {
//!             #[serde(rename = "ID")]
//!             id: String,
//!         }
//!         optional {
//!             xp: Xp,
//!         }
//!     }
//! }
//! ```
//!
//! The read view keeps `required` fields as declared and wraps `optional`
//! fields in `Option`. The write view (`Partial*`) wraps every field in
//! `Option` and omits unset fields when serialized, so it can be sent as a
//! PATCH body. `From<Read> for Partial` is generated.

macro_rules! model {
    (
        $(#[$meta:meta])*
        $name:ident<$xp:ident> / $partial:ident {
            required {
                $( $(#[$rmeta:meta])* $rfield:ident : $rty:ty ),* $(,)?
            }
            optional {
                $( $(#[$ometa:meta])* $ofield:ident : $oty:ty ),* $(,)?
            }
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
        #[serde(rename_all = "PascalCase")]
        pub struct $name<$xp = serde_json::Value> {
            $( $(#[$rmeta])* pub $rfield: $rty, )*
            $(
                $(#[$ometa])*
                #[serde(skip_serializing_if = "Option::is_none")]
                pub $ofield: Option<$oty>,
            )*
        }

        #[doc = concat!("Write view of [`", stringify!($name), "`]; unset fields are not sent.")]
        #[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
        #[serde(rename_all = "PascalCase")]
        pub struct $partial<$xp = serde_json::Value> {
            $(
                $(#[$rmeta])*
                #[serde(skip_serializing_if = "Option::is_none")]
                pub $rfield: Option<$rty>,
            )*
            $(
                $(#[$ometa])*
                #[serde(skip_serializing_if = "Option::is_none")]
                pub $ofield: Option<$oty>,
            )*
        }

        impl<$xp> Default for $partial<$xp> {
            fn default() -> Self {
                Self {
                    $( $rfield: None, )*
                    $( $ofield: None, )*
                }
            }
        }

        impl<$xp> From<$name<$xp>> for $partial<$xp> {
            fn from(full: $name<$xp>) -> Self {
                Self {
                    $( $rfield: Some(full.$rfield), )*
                    $( $ofield: full.$ofield, )*
                }
            }
        }
    };

    (
        $(#[$meta:meta])*
        $name:ident / $partial:ident {
            required {
                $( $(#[$rmeta:meta])* $rfield:ident : $rty:ty ),* $(,)?
            }
            optional {
                $( $(#[$ometa:meta])* $ofield:ident : $oty:ty ),* $(,)?
            }
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
        #[serde(rename_all = "PascalCase")]
        pub struct $name {
            $( $(#[$rmeta])* pub $rfield: $rty, )*
            $(
                $(#[$ometa])*
                #[serde(skip_serializing_if = "Option::is_none")]
                pub $ofield: Option<$oty>,
            )*
        }

        #[doc = concat!("Write view of [`", stringify!($name), "`]; unset fields are not sent.")]
        #[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
        #[serde(rename_all = "PascalCase")]
        pub struct $partial {
            $(
                $(#[$rmeta])*
                #[serde(skip_serializing_if = "Option::is_none")]
                pub $rfield: Option<$rty>,
            )*
            $(
                $(#[$ometa])*
                #[serde(skip_serializing_if = "Option::is_none")]
                pub $ofield: Option<$oty>,
            )*
        }

        impl From<$name> for $partial {
            fn from(full: $name) -> Self {
                Self {
                    $( $rfield: Some(full.$rfield), )*
                    $( $ofield: full.$ofield, )*
                }
            }
        }
    };
}
