//! The accessor binding behind the generated `<noun>` methods.
//!
//! A [`ParamAccessor`] owns one [`WeakAttributeStore`] and implements the
//! three operations of a noun against it, using the receiver's identity as
//! the key. Every mutation touches only the receiver's own bag.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Weak};

use serde_json::Value;
use tracing::debug;

use objparam_store::{AttributeBag, ObjectIdentity, WeakAttributeStore};

use crate::call::ParamCall;
use crate::config::{AccessorConfig, MethodNames};
use crate::error::{ParamError, ParamResult};
use crate::reply::{Assigned, Deleted, ParamReply};

/// Types whose `Arc`s can carry parameters.
pub trait Object: Send + Sync + 'static {}

impl<T: ?Sized + Send + Sync + 'static> Object for T {}

/// One installed noun: its method names and its private store.
pub struct ParamAccessor {
    noun: String,
    methods: MethodNames,
    store: WeakAttributeStore,
}

impl ParamAccessor {
    /// Bind a new accessor with its own empty store.
    pub fn new(config: &AccessorConfig) -> ParamResult<Self> {
        config.validate()?;
        Ok(Self::bind(config))
    }

    /// Bind a new accessor for `noun` with default store tuning.
    pub fn with_noun(noun: &str) -> ParamResult<Self> {
        Self::new(&AccessorConfig::with_noun(noun))
    }

    /// Used by `param_accessors!`, whose noun is already an identifier.
    #[doc(hidden)]
    pub fn for_ident(noun: &str) -> Self {
        Self::bind(&AccessorConfig::with_noun(noun))
    }

    fn bind(config: &AccessorConfig) -> Self {
        debug!(noun = %config.noun, "param accessor bound");
        Self {
            noun: config.noun.clone(),
            methods: config.method_names(),
            store: WeakAttributeStore::with_config(&config.store),
        }
    }

    pub fn noun(&self) -> &str {
        &self.noun
    }

    pub fn method_names(&self) -> &MethodNames {
        &self.methods
    }

    /// The store backing this accessor.
    pub fn store(&self) -> &WeakAttributeStore {
        &self.store
    }

    /// Every live object's parameters under this noun. For diagnostics.
    pub fn snapshot(&self) -> ParamResult<HashMap<ObjectIdentity, AttributeBag>> {
        Ok(self.store.snapshot()?)
    }

    // ---------------------------------------------------------------
    // <noun>
    // ---------------------------------------------------------------

    /// Run one `<noun>` call against `obj`.
    pub fn call<T: ?Sized + Object>(
        &self,
        obj: &Arc<T>,
        call: ParamCall,
    ) -> ParamResult<ParamReply> {
        Ok(match call {
            ParamCall::List => ParamReply::Names(self.names(obj)?),
            ParamCall::Get(name) => ParamReply::Value(self.get(obj, &name)?),
            ParamCall::Set(name, value) => ParamReply::Set(self.set(obj, name, value)?),
            ParamCall::SetMany(pairs) => ParamReply::Assigned(self.assign_all(obj, pairs)?),
        })
    }

    /// Names stored for `obj`, sorted.
    pub fn names<T: ?Sized + Object>(&self, obj: &Arc<T>) -> ParamResult<Vec<String>> {
        let bag = self.store.get_bag(obj)?;
        let bag = bag.read()?;
        let mut names: Vec<String> = bag.keys().map(str::to_string).collect();
        names.sort();
        Ok(names)
    }

    /// The value stored under `name`, or `None` if it is absent.
    pub fn get<T: ?Sized + Object>(&self, obj: &Arc<T>, name: &str) -> ParamResult<Option<Value>> {
        let bag = self.store.get_bag(obj)?;
        let value = bag.read()?.get(name).cloned();
        Ok(value)
    }

    /// Store `value` under `name` and return it.
    pub fn set<T: ?Sized + Object>(
        &self,
        obj: &Arc<T>,
        name: impl Into<String>,
        value: impl Into<Value>,
    ) -> ParamResult<Value> {
        let value = value.into();
        let bag = self.store.get_bag(obj)?;
        bag.write()?.insert(name, value.clone());
        Ok(value)
    }

    /// Store each pair in order; later pairs overwrite earlier ones.
    pub fn set_many<T, I, K, V>(&self, obj: &Arc<T>, pairs: I) -> ParamResult<Assigned>
    where
        T: ?Sized + Object,
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        let pairs = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self.assign_all(obj, pairs)
    }

    fn assign_all<T: ?Sized + Object>(
        &self,
        obj: &Arc<T>,
        pairs: Vec<(String, Value)>,
    ) -> ParamResult<Assigned> {
        let bag = self.store.get_bag(obj)?;
        let mut bag = bag.write()?;
        let mut assigned = Vec::with_capacity(pairs.len());
        for (name, value) in pairs {
            bag.insert(name, value.clone());
            assigned.push(value);
        }
        Ok(Assigned::new(assigned))
    }

    // ---------------------------------------------------------------
    // has_<noun> / delete_<noun>
    // ---------------------------------------------------------------

    /// Whether `name` is present for `obj`, even if its value is null.
    pub fn has<T: ?Sized + Object>(&self, obj: &Arc<T>, name: &str) -> ParamResult<bool> {
        let bag = self.store.get_bag(obj)?;
        let present = bag.read()?.contains_key(name);
        Ok(present)
    }

    /// Remove each name, returning what it held.
    pub fn delete<T, I, S>(&self, obj: &Arc<T>, names: I) -> ParamResult<Deleted>
    where
        T: ?Sized + Object,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let bag = self.store.get_bag(obj)?;
        let mut bag = bag.write()?;
        let removed = names
            .into_iter()
            .map(|name| bag.remove(name.as_ref()))
            .collect();
        Ok(Deleted::new(removed))
    }

    // ---------------------------------------------------------------
    // Dynamic dispatch
    // ---------------------------------------------------------------

    /// Invoke one of this accessor's methods by name with positional
    /// arguments.
    ///
    /// `receiver` is `None` for a call made without an instance, which fails
    /// with [`ParamError::InvalidReceiver`]. Names other than the three this
    /// accessor generates fail with [`ParamError::UnknownMethod`].
    pub fn invoke<T: ?Sized + Object>(
        &self,
        receiver: Option<&Arc<T>>,
        method: &str,
        args: Vec<Value>,
    ) -> ParamResult<ParamReply> {
        let known = &self.methods;
        if method != known.get && method != known.has && method != known.delete {
            return Err(ParamError::UnknownMethod {
                method: method.to_string(),
                noun: self.noun.clone(),
            });
        }
        let obj = receiver.ok_or_else(|| ParamError::InvalidReceiver {
            method: method.to_string(),
        })?;

        if method == self.methods.get {
            let call = ParamCall::from_args(method, args)?;
            return self.call(obj, call);
        }

        let count = args.len();
        let names = string_args(method, args)?;
        if method == self.methods.has {
            match names.as_slice() {
                [name] => Ok(ParamReply::Exists(self.has(obj, name)?)),
                _ => Err(ParamError::InvalidArgument {
                    method: method.to_string(),
                    count,
                    reason: "expected exactly one name".to_string(),
                }),
            }
        } else {
            Ok(ParamReply::Deleted(self.delete(obj, names)?))
        }
    }

    /// Resolve a weak receiver, failing with
    /// [`ParamError::InvalidReceiver`] once its object is gone.
    pub fn upgrade<T: ?Sized + Object>(
        &self,
        receiver: &Weak<T>,
        method: &str,
    ) -> ParamResult<Arc<T>> {
        receiver.upgrade().ok_or_else(|| ParamError::InvalidReceiver {
            method: method.to_string(),
        })
    }
}

fn string_args(method: &str, args: Vec<Value>) -> ParamResult<Vec<String>> {
    let count = args.len();
    args.into_iter()
        .enumerate()
        .map(|(pos, arg)| match arg {
            Value::String(name) => Ok(name),
            _ => Err(ParamError::InvalidArgument {
                method: method.to_string(),
                count,
                reason: format!("argument {pos} must be a name"),
            }),
        })
        .collect()
}

impl fmt::Debug for ParamAccessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParamAccessor")
            .field("noun", &self.noun)
            .field("store", &self.store)
            .finish()
    }
}
