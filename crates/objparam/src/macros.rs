/// Install `<noun>`, `has_<noun>` and `delete_<noun>` on a type.
///
/// Generates an extension trait, implements it for `Arc<Type>` and
/// `Weak<Type>`, and binds it to a process-wide [`ParamAccessor`] created on
/// first use. Every invocation gets its own accessor, so two installations
/// never see each other's parameters. The noun defaults to `param`.
///
/// ```
/// use std::sync::Arc;
/// use objparam::{param_accessors, ParamCall, Value};
///
/// pub struct Widget;
///
/// param_accessors! { pub trait WidgetParams for Widget }
/// param_accessors! { pub trait WidgetTags for Widget { noun: tag } }
///
/// let w = Arc::new(Widget);
/// w.param(("color", "red")).unwrap();
/// w.tag(("color", "blue")).unwrap();
///
/// assert!(w.has_param("color").unwrap());
/// assert_eq!(w.delete_tag(["color"]).unwrap().first(), Some(&Value::from("blue")));
/// assert!(!w.has_tag("color").unwrap());
/// assert_eq!(w.param(ParamCall::List).unwrap().names().unwrap(), ["color"]);
/// ```
///
/// The accessor is reachable for diagnostics through the generated
/// `<noun>_accessor()` function, e.g.
/// `<Arc<Widget> as WidgetTags>::tag_accessor().snapshot()`.
///
/// [`ParamAccessor`]: crate::ParamAccessor
#[macro_export]
macro_rules! param_accessors {
    (
        $(#[$meta:meta])*
        $vis:vis trait $trait_name:ident for $ty:ty { noun: $noun:ident $(,)? }
    ) => {
        $crate::__private::paste! {
            $(#[$meta])*
            $vis trait $trait_name {
                #[doc = concat!("List, read or write `", stringify!($noun), "` values.")]
                fn $noun(
                    &self,
                    call: impl Into<$crate::ParamCall>,
                ) -> $crate::ParamResult<$crate::ParamReply>;

                #[doc = concat!("Whether a `", stringify!($noun), "` is set, even to null.")]
                fn [<has_ $noun>](&self, name: &str) -> $crate::ParamResult<bool>;

                #[doc = concat!("Remove `", stringify!($noun), "` values, returning what they held.")]
                fn [<delete_ $noun>]<I, S>(&self, names: I) -> $crate::ParamResult<$crate::Deleted>
                where
                    I: IntoIterator<Item = S>,
                    S: AsRef<str>;

                #[doc = concat!("The accessor holding every `", stringify!($noun), "` of this installation.")]
                fn [<$noun _accessor>]() -> &'static $crate::ParamAccessor
                where
                    Self: Sized,
                {
                    static ACCESSOR: ::std::sync::OnceLock<$crate::ParamAccessor> =
                        ::std::sync::OnceLock::new();
                    ACCESSOR.get_or_init(|| $crate::ParamAccessor::for_ident(stringify!($noun)))
                }
            }

            impl $trait_name for ::std::sync::Arc<$ty> {
                fn $noun(
                    &self,
                    call: impl Into<$crate::ParamCall>,
                ) -> $crate::ParamResult<$crate::ParamReply> {
                    Self::[<$noun _accessor>]().call(self, call.into())
                }

                fn [<has_ $noun>](&self, name: &str) -> $crate::ParamResult<bool> {
                    Self::[<$noun _accessor>]().has(self, name)
                }

                fn [<delete_ $noun>]<I, S>(&self, names: I) -> $crate::ParamResult<$crate::Deleted>
                where
                    I: IntoIterator<Item = S>,
                    S: AsRef<str>,
                {
                    Self::[<$noun _accessor>]().delete(self, names)
                }
            }

            impl $trait_name for ::std::sync::Weak<$ty> {
                fn $noun(
                    &self,
                    call: impl Into<$crate::ParamCall>,
                ) -> $crate::ParamResult<$crate::ParamReply> {
                    let accessor = <::std::sync::Arc<$ty> as $trait_name>::[<$noun _accessor>]();
                    let obj = accessor.upgrade(self, stringify!($noun))?;
                    accessor.call(&obj, call.into())
                }

                fn [<has_ $noun>](&self, name: &str) -> $crate::ParamResult<bool> {
                    let accessor = <::std::sync::Arc<$ty> as $trait_name>::[<$noun _accessor>]();
                    let obj = accessor.upgrade(self, concat!("has_", stringify!($noun)))?;
                    accessor.has(&obj, name)
                }

                fn [<delete_ $noun>]<I, S>(&self, names: I) -> $crate::ParamResult<$crate::Deleted>
                where
                    I: IntoIterator<Item = S>,
                    S: AsRef<str>,
                {
                    let accessor = <::std::sync::Arc<$ty> as $trait_name>::[<$noun _accessor>]();
                    let obj = accessor.upgrade(self, concat!("delete_", stringify!($noun)))?;
                    accessor.delete(&obj, names)
                }
            }
        }
    };
    (
        $(#[$meta:meta])*
        $vis:vis trait $trait_name:ident for $ty:ty $(;)?
    ) => {
        $crate::param_accessors! {
            $(#[$meta])*
            $vis trait $trait_name for $ty { noun: param }
        }
    };
}
